#![forbid(unsafe_code)]
//! planid-core: strongly-typed identifier families and their generators.
//!
//! An identifier is an `i32` tagged with a zero-sized family marker. Values
//! are minted only by an [`IdGenerator`] for that family, or taken from the
//! family's [`Id::INVALID`] sentinel.

pub mod config;
pub mod error;
pub mod generator;
pub mod id;
pub mod prelude;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use generator::IdGenerator;
pub use id::{format_ids, Id, IdFamily, INVALID_ID};
