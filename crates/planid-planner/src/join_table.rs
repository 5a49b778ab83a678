//! Ids for tables participating in joins.

use planid_core::id_family;
use planid_core::prelude::*;

id_family!(
    /// A table taking part in a join during plan enumeration.
    pub JoinTable => JoinTableId
);

/// Fresh generator for one planning session.
pub fn join_table_id_generator() -> IdGenerator<JoinTable> {
    IdGenerator::new()
}

pub fn join_table_id_generator_with(cfg: &GeneratorConfig) -> Result<IdGenerator<JoinTable>> {
    IdGenerator::with_config(cfg)
}
