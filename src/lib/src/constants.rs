// Report layout
pub const FIELD_NAME_HEADER: &str = "Field Name";
pub const FIELD_NAME_WIDTH: usize = 35;
pub const TYPE_WIDTH: usize = 25;
pub const RULE_WIDTH: usize = 120;
pub const NOT_PRESENT: &str = "NOT PRESENT";
pub const NO_DIFFERENCES_MSG: &str = "No differences found! Schemas are identical.";

// Filenames and defaults
pub const DEFAULT_OUTPUT_FILENAME: &str = "schema_comparison.txt";
pub const DEFAULT_CONFIG_FILENAME: &str = "schemadiff.toml";
pub const DEFAULT_TAXI_TITLE: &str = "TAXI DATA SCHEMA COMPARISON - YELLOW vs GREEN vs FHV";

// Loader
pub const DEFAULT_INFER_SCHEMA_LEN: usize = 100;

pub const SCHEMADIFF_VERSION: &str = env!("CARGO_PKG_VERSION");
