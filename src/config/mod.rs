//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → JsonpConfig (validated, immutable)
//!     → shared via Arc with every clone of the JSONP service
//! ```
//!
//! # Design Decisions
//! - Config is immutable once handed to the layer
//! - All fields have defaults to allow empty config files
//! - Unknown keys are rejected at parse time
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::JsonpConfig;
pub use validation::{validate_config, ValidationError};
