//! Per-call overrides for a debug line.

use std::error::Error as StdError;
use std::fmt;

use crate::error::FormatError;
use crate::format::FormatTemplate;

/// Options applied to a single `debug` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DebugOptions {
    /// Template used instead of the printer's own.
    pub fmt: Option<FormatTemplate>,
    /// Overrides the printer's basename setting.
    pub basename: Option<bool>,
    /// Extra frames to walk past the direct caller.
    pub level: usize,
    /// Prefix for the function name, reported as `Parent.name`.
    pub parent: Option<String>,
    /// Replace the line info with blank space of the same width.
    pub align: bool,
}

impl DebugOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and set a template override.
    pub fn fmt(mut self, template: &str) -> Result<Self, FormatError> {
        self.fmt = Some(FormatTemplate::parse(template)?);
        Ok(self)
    }

    pub fn template(mut self, template: FormatTemplate) -> Self {
        self.fmt = Some(template);
        self
    }

    pub fn basename(mut self, basename: bool) -> Self {
        self.basename = Some(basename);
        self
    }

    pub fn level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn align(mut self, align: bool) -> Self {
        self.align = align;
        self
    }
}

/// Matches errors of one concrete type.
pub type ErrorFilter = fn(&(dyn StdError + 'static)) -> bool;

fn is_type<E: StdError + 'static>(error: &(dyn StdError + 'static)) -> bool {
    error.is::<E>()
}

/// Options for `DebugPrinter::debug_error`.
#[derive(Clone, Default)]
pub struct ErrorOptions {
    /// Line printed before the error.
    pub message: Option<String>,
    /// Error types that are not printed.
    pub suppress_types: Vec<ErrorFilter>,
    /// Errors whose message contains any of these are not printed.
    pub suppress_strs: Vec<String>,
    /// Line-info options for every line of the report.
    pub debug: DebugOptions,
}

impl fmt::Debug for ErrorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorOptions")
            .field("message", &self.message)
            .field("suppress_types", &self.suppress_types.len())
            .field("suppress_strs", &self.suppress_strs)
            .field("debug", &self.debug)
            .finish()
    }
}

impl ErrorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Skip errors whose concrete type is `E`.
    pub fn suppress<E: StdError + 'static>(mut self) -> Self {
        self.suppress_types.push(is_type::<E>);
        self
    }

    pub fn suppress_str(mut self, text: impl Into<String>) -> Self {
        self.suppress_strs.push(text.into());
        self
    }

    pub fn options(mut self, debug: DebugOptions) -> Self {
        self.debug = debug;
        self
    }

    /// Only the outermost error is checked, not its sources.
    pub fn is_suppressed(&self, error: &(dyn StdError + 'static)) -> bool {
        if self.suppress_types.iter().any(|matches| matches(error)) {
            return true;
        }
        if self.suppress_strs.is_empty() {
            return false;
        }
        let text = error.to_string();
        self.suppress_strs.iter().any(|s| text.contains(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug)]
    struct Timeout;

    impl fmt::Display for Timeout {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("timed out after 5s")
        }
    }

    impl StdError for Timeout {}

    #[test]
    fn test_error_suppression_rules() {
        let opts = ErrorOptions::new().suppress::<Timeout>();
        assert!(opts.is_suppressed(&Timeout));
        assert!(!opts.is_suppressed(&io::Error::other("timed out")));

        let opts = ErrorOptions::new().suppress_str("5s");
        assert!(opts.is_suppressed(&Timeout));
        assert!(!opts.is_suppressed(&io::Error::other("refused")));
        assert!(!ErrorOptions::new().is_suppressed(&Timeout));
    }

    #[test]
    fn test_builder() {
        let opts = DebugOptions::new()
            .fmt("{name}: ")
            .unwrap()
            .basename(true)
            .level(2)
            .parent("Worker")
            .align(true);
        assert_eq!(opts.fmt.as_ref().map(|t| t.as_str()), Some("{name}: "));
        assert_eq!(opts.basename, Some(true));
        assert_eq!(opts.level, 2);
        assert_eq!(opts.parent.as_deref(), Some("Worker"));
        assert!(opts.align);
    }

    #[test]
    fn test_invalid_override_fails_fast() {
        let err = DebugOptions::new().fmt("{where}").unwrap_err();
        assert_eq!(err, FormatError::UnknownPlaceholder("where".into()));
    }
}
