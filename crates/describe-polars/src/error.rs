//! Error types for describe-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("{0}")]
    Describe(#[from] describe_core::Error),
}

impl Error {
    /// Whether the engine rejected the caller's arguments
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::Describe(e) if e.is_invalid_argument())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
