//! Environment-driven generator configuration

use planid::{join_table_id_generator_with, GeneratorConfig};

// Single test so no other test in this binary races on the variable.
#[test]
fn test_from_env_capacity() {
    std::env::set_var("PLANID_GENERATOR_CAPACITY", "not-a-number");
    assert_eq!(GeneratorConfig::from_env(), GeneratorConfig::default());

    std::env::set_var("PLANID_GENERATOR_CAPACITY", "2");
    let cfg = GeneratorConfig::from_env();
    assert_eq!(cfg.capacity, Some(2));

    let mut tables = join_table_id_generator_with(&cfg).unwrap();
    assert_eq!(tables.capacity(), 2);
    tables.next_id().unwrap();
    tables.next_id().unwrap();
    assert!(tables.next_id().is_err());

    std::env::remove_var("PLANID_GENERATOR_CAPACITY");
    assert_eq!(GeneratorConfig::from_env().capacity, None);
}
