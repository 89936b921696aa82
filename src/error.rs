//! Crate error type.

use thiserror::Error;

/// Errors raised while emitting diagnostics.
///
/// Normal misuse never errors: a missing key on lookup is an absent value and
/// a diagnostic pass with nothing configured is a no-op. The one failure mode
/// is the diagnostic channel refusing a write; it is propagated as-is, never
/// retried or swallowed.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing a warning to the diagnostic channel failed.
    #[error("failed to write to the diagnostic channel: {0}")]
    Diagnostic(#[from] std::io::Error),
}
