//! Core error type.
//!
//! Only parsing can fail at this level; the lane and intersection crates are
//! total by construction.  Higher crates wrap `TrafficError` as one variant
//! of their own enum via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrafficError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid turn code {0:?}: expected one of L, S, R")]
    InvalidTurnCode(char),
}

/// Shorthand result type for `tr-*` crates.
pub type TrafficResult<T> = Result<T, TrafficError>;
