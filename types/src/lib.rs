//! Core domain types for Tripwire.
//!
//! This crate contains the guard data model with no IO and no process control.
//! Enforcement (writing diagnostics, terminating) lives in `tripwire-guard`.

mod proofs;
mod site;

pub use proofs::NonEmptyStaticStr;
pub use site::{Clear, DIAGNOSTIC_TAG, GuardSite, Tripped};
