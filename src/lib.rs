#![forbid(unsafe_code)]
//! planid: typed identifier families for the query planner.
//!
//! Facade over [`planid_core`] and [`planid_planner`].

pub use planid_core::{
    self as ids, format_ids, id_family, Error, GeneratorConfig, Id, IdFamily, IdGenerator, Result,
    INVALID_ID,
};
pub use planid_planner::{
    self as planner, join_table_id_generator, join_table_id_generator_with, JoinTable, JoinTableId,
};
