//! Printer configuration.
//!
//! # Data Flow
//! ```text
//! printdebug.toml
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PrinterConfig (validated)
//!     → DebugPrinter::from_config / ObjectConfig::options
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks
//! - Every validation problem is reported, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ObjectConfig, OutputTarget, PrinterConfig};
pub use validation::{validate_config, ValidationError};
