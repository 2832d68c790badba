//! test data shared between the inter-utilities crates.

/// A metadata snapshot of Inter 3.19.
pub static INTER_METADATA: &str = include_str!("../test_data/inter.json");

/// A theme whose sizes and steps cover every supported length unit.
pub static REFERENCE_THEME: &str = include_str!("../test_data/reference_theme.toml");

/// A configuration file for the command line tool.
pub static CODEGEN_CONFIG: &str = include_str!("../test_data/codegen_config.toml");
