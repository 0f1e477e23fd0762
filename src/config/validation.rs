//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the line-info template parses
//! - Validate value ranges (depth guard > 0, sane justification width)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PrinterConfig → Result<(), Vec<ValidationError>>

use std::fmt;

use crate::config::schema::PrinterConfig;
use crate::error::FormatError;
use crate::format::{FormatTemplate, MAX_WIDTH};

/// Widest line-info justification accepted.
pub const MAX_LJUST_WIDTH: usize = MAX_WIDTH;

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidFormat(FormatError),
    ZeroMaxDepth,
    LjustTooWide(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidFormat(e) => write!(f, "format: {}", e),
            ValidationError::ZeroMaxDepth => write!(f, "object.max_depth must be at least 1"),
            ValidationError::LjustTooWide(width) => write!(
                f,
                "ljust_width {} exceeds maximum {}",
                width, MAX_LJUST_WIDTH
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a parsed config, collecting every problem found.
pub fn validate_config(config: &PrinterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(format) = &config.format {
        if let Err(e) = FormatTemplate::parse(format) {
            errors.push(ValidationError::InvalidFormat(e));
        }
    }
    if config.object.max_depth == 0 {
        errors.push(ValidationError::ZeroMaxDepth);
    }
    if config.ljust_width > MAX_LJUST_WIDTH {
        errors.push(ValidationError::LjustTooWide(config.ljust_width));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
