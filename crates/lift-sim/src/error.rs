//! Simulation error type.
//!
//! Configuration rejection is the only failure mode the core exposes: once
//! a building is running, every reachable state has a defined transition,
//! so `tick`/`stop`/`snapshot` cannot fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Rejected synchronously at construction; the caller must not proceed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type SimResult<T> = Result<T, SimError>;
