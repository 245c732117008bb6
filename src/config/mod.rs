//! Query files: named filter pipelines loaded from TOML.

pub mod loader;
pub mod pipeline;
pub mod schema;

pub use loader::{load_from_path, load_from_str, ConfigError, ConfigOrigin};
pub use pipeline::{CompiledFilter, Pipeline};
pub use schema::{
    FilterSpec, Metadata, QueryConfig, QueryDefinition, ValidationError, ValidationIssue,
};
