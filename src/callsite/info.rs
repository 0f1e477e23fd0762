//! Call-site records and compile-time capture macros.

use std::fmt;
use std::path::Path;

use crate::format::FormatTemplate;

/// Function name reported when a frame has no enclosing function.
pub const MODULE_SENTINEL: &str = "<module>";

/// Filename or function name reported when a frame carries no debug info.
pub const UNKNOWN: &str = "<unknown>";

/// Where a debug call came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallSiteInfo {
    /// Source file path, as the compiler or debug info reports it.
    pub filename: String,
    /// 1-based line of the call expression (0 when debug info is missing).
    pub line_number: u32,
    /// Name of the enclosing function.
    pub function_name: String,
}

impl CallSiteInfo {
    pub fn new(
        filename: impl Into<String>,
        line_number: u32,
        function_name: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            line_number,
            function_name: function_name.into(),
        }
    }

    /// Final path component of the filename.
    pub fn file_basename(&self) -> &str {
        Path::new(&self.filename)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.filename)
    }

    /// Copy of this record with the directory part of the filename removed.
    pub fn basename(&self) -> Self {
        Self {
            filename: self.file_basename().to_string(),
            line_number: self.line_number,
            function_name: self.function_name.clone(),
        }
    }
}

impl fmt::Display for CallSiteInfo {
    /// Renders with the default template, without a message.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&FormatTemplate::default().render(self))
    }
}

/// Reduce a fully qualified path such as `my_crate::module::func::{{closure}}`
/// to the enclosing function name (`func`).
pub fn enclosing_function(path: &str) -> &str {
    let mut segments = path.rsplit("::").skip_while(|segment| {
        segment.starts_with('{') || segment.is_empty()
    });
    match segments.next() {
        Some(segment) => segment,
        None => MODULE_SENTINEL,
    }
}

/// Name of the function this macro is expanded in.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __printdebug_here() {}
        let path = ::std::any::type_name_of_val(&__printdebug_here);
        let path = path.strip_suffix("::__printdebug_here").unwrap_or(path);
        $crate::callsite::enclosing_function(path)
    }};
}

/// Capture the call site of the macro expansion.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::callsite::CallSiteInfo::new(
            ::std::file!(),
            ::std::line!(),
            $crate::function_name!(),
        )
    };
}
