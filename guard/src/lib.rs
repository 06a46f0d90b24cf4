//! Guard enforcement for Tripwire.
//!
//! [`tripwire_types::GuardSite`] decides *whether* a guard fired. This crate
//! decides what happens next:
//!
//! - **`channel`**: writes the one-line diagnostic to the error stream
//! - **`policy`**: abnormal termination (abort, non-zero exit, or panic in tests)
//! - **`tripwire`**: the [`Enforce`] seam solvers call, and its production
//!   implementation [`Tripwire`]

pub mod channel;
pub mod policy;
pub mod tripwire;

pub use channel::report;
pub use policy::TerminationPolicy;
pub use tripwire::{Enforce, Tripwire};
pub use tripwire_types::{Clear, DIAGNOSTIC_TAG, GuardSite, Tripped};
