//! Convenient re-exports for downstream crates.

pub use crate::config::GeneratorConfig;
pub use crate::error::{Error, Result};
pub use crate::generator::IdGenerator;
pub use crate::id::{format_ids, Id, IdFamily};
