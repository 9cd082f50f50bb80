//! Era-based T20 cricket analytics: bundled datasets, leaderboard and
//! head-to-head queries, and two closed-form match predictors. The terminal
//! UI in `main.rs` is a thin consumer of this crate.

pub mod datasets;
pub mod export;
pub mod predict;
pub mod queries;
pub mod state;

use thiserror::Error;

/// Error surface of the analytics core. Every variant is recoverable at the
/// caller boundary; the UI reports it and lets the user re-select.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
