#![forbid(unsafe_code)]
//! planid-planner: identifier families owned by the query planner.
//!
//! Each planning session creates its own generators and drops them when the
//! session ends; ids are never persisted or recycled.

pub mod join_table;

pub use join_table::{
    join_table_id_generator, join_table_id_generator_with, JoinTable, JoinTableId,
};
