//! Diagnostic channel writer.
//!
//! The diagnostic channel is reserved for guard messages. Callers pass a locked
//! `stderr` in production so the line never interleaves with result output on
//! `stdout`.

use std::io::{self, Write};

use tripwire_types::Tripped;

/// Write the diagnostic for `tripped` as exactly one line and flush.
///
/// The flush matters: an abort that follows does not run destructors, so any
/// buffered bytes would be lost.
pub fn report<W: Write>(mut writer: W, tripped: &Tripped) -> io::Result<()> {
    writeln!(writer, "{tripped}")?;
    writer.flush()
}
