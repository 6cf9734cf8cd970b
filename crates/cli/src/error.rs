use thiserror::Error;

/// Errors a binary can report to the user before exiting non-zero.
///
/// `bsp_engine_core`'s own `common::error::Error` already distinguishes
/// malformed-input cases; this wraps it alongside the argv-parsing failures
/// that only make sense at the binary boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("usage: {0}")]
    Usage(String),

    #[error(transparent)]
    Graph(#[from] common::error::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
