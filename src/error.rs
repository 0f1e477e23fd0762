//! Error definitions for call-site resolution, templates and object printing.

use thiserror::Error;

/// A call-site lookup asked for a frame that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("stack depth {requested} is too large, only {available} frames above the resolver")]
pub struct StackDepthError {
    /// Depth that was asked for (0 = caller of the resolver).
    pub requested: usize,
    /// Number of frames that were available above the resolver.
    pub available: usize,
}

/// Errors raised while parsing a format template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Placeholder name is not one of `filename`, `lineno`, `name`.
    #[error("unknown placeholder `{{{0}}}`, expected filename, lineno or name")]
    UnknownPlaceholder(String),

    /// A `{` was opened but never closed.
    #[error("unclosed `{{` at byte {0}")]
    UnclosedBrace(usize),

    /// A lone `}` that is not part of a `}}` escape.
    #[error("single `}}` at byte {0}, use `}}}}` for a literal brace")]
    UnmatchedBrace(usize),

    /// The part after `:` could not be parsed as `[[fill]align][width]`.
    #[error("invalid format spec `{spec}` for `{field}`")]
    InvalidSpec { field: String, spec: String },
}

/// Errors raised by the object printer.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// Nesting went past the configured depth guard.
    #[error("structure nests deeper than {depth} levels, it is probably cyclic")]
    CyclicStructure { depth: usize },

    /// Writing the rendered lines failed.
    #[error("failed to write object: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("failed to serialize json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Crate-level error returned by the debug printers.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    StackDepth(#[from] StackDepthError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Object(#[from] ObjectError),

    #[error("failed to write debug output: {0}")]
    Io(#[from] std::io::Error),

    /// Raised instead of a silent no-op when the printer is configured to.
    #[error("debug printing is not enabled")]
    DebugNotEnabled,
}

/// Result type for debug printing operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_messages() {
        let err = FormatError::UnknownPlaceholder("bogus".into());
        assert_eq!(
            err.to_string(),
            "unknown placeholder `{bogus}`, expected filename, lineno or name"
        );

        let err = FormatError::UnmatchedBrace(3);
        assert_eq!(err.to_string(), "single `}` at byte 3, use `}}` for a literal brace");
    }

    #[test]
    fn test_error_conversions() {
        let err: Error = StackDepthError { requested: 9, available: 2 }.into();
        assert!(matches!(err, Error::StackDepth(StackDepthError { requested: 9, .. })));

        let err: Error = FormatError::UnclosedBrace(0).into();
        assert!(matches!(err, Error::Format(_)));
    }
}
