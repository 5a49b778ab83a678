use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("{family} id space exhausted after {capacity} ids")]
    Exhausted { family: &'static str, capacity: u64 },

    #[error("no {family} id has been issued yet")]
    NothingIssued { family: &'static str },

    #[error("Invalid configuration: {0}")]
    Config(String),
}
