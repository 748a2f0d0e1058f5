//! Imagemap Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod bounds;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod schema;
pub mod types;

pub use bounds::region_violations;
pub use error::{Error, Result};
pub use matcher::{field_text, find_matches, normalize};
pub use parser::{parse_records, parse_regions};
pub use schema::validate_region_values;
pub use types::{Record, Region};
