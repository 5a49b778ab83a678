//! Generator configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of distinct non-negative `i32` values, i.e. the most ids a single
/// generator can ever hand out.
pub const FULL_CAPACITY: u32 = i32::MAX as u32 + 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Max ids one generator may issue. `None` means the whole non-negative
    /// `i32` range.
    pub capacity: Option<u32>,
}

impl GeneratorConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `PLANID_GENERATOR_CAPACITY`: max ids per generator
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("PLANID_GENERATOR_CAPACITY") {
            if let Ok(v) = s.parse::<u32>() {
                cfg.capacity = Some(v);
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<()> {
        match self.capacity {
            Some(cap) if cap > FULL_CAPACITY => Err(Error::Config(format!(
                "capacity {cap} exceeds the {FULL_CAPACITY} non-negative i32 values"
            ))),
            _ => Ok(()),
        }
    }

    /// Capacity with the default filled in.
    pub fn effective_capacity(&self) -> u32 {
        self.capacity.unwrap_or(FULL_CAPACITY)
    }
}
