//! Call-site capturing print macros.
//!
//! These capture file, line and function at the expansion site, so no stack
//! walk is needed. When the target printer is inactive nothing is captured.

/// Print through the process-wide default printer.
///
/// ```
/// printdebug::debug!("loaded {} items", 3).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::debug_to!($crate::printer::default_printer(), $($arg)+)
    };
}

/// Print through a specific printer.
#[macro_export]
macro_rules! debug_to {
    ($printer:expr, $($arg:tt)+) => {
        $crate::debug_with!($printer, &$crate::printer::DebugOptions::default(), $($arg)+)
    };
}

/// Print through a specific printer with per-call options.
#[macro_export]
macro_rules! debug_with {
    ($printer:expr, $opts:expr, $($arg:tt)+) => {{
        let printer: &$crate::printer::DebugPrinter = &$printer;
        if printer.is_active() {
            printer.debug_at(&$crate::call_site!(), ::std::format_args!($($arg)+), $opts)
        } else {
            printer.not_enabled()
        }
    }};
}

/// Print an object tree through a printer, first line prefixed with line info.
#[macro_export]
macro_rules! debug_object {
    ($printer:expr, $value:expr) => {
        $crate::debug_object!($printer, $value, &$crate::object::ObjectOptions::default())
    };
    ($printer:expr, $value:expr, $options:expr) => {{
        let printer: &$crate::printer::DebugPrinter = &$printer;
        if printer.is_active() {
            printer.debug_object_at(&$crate::call_site!(), &$value, $options)
        } else {
            printer.not_enabled()
        }
    }};
}

/// Print an error and its sources through a printer.
///
/// `$error` is an error value; it is borrowed, not moved.
#[macro_export]
macro_rules! debug_error {
    ($printer:expr, $error:expr) => {
        $crate::debug_error!($printer, $error, &$crate::printer::ErrorOptions::default())
    };
    ($printer:expr, $error:expr, $opts:expr) => {{
        let printer: &$crate::printer::DebugPrinter = &$printer;
        if printer.is_active() {
            printer.debug_error_at(&$crate::call_site!(), &$error, $opts)
        } else {
            printer.not_enabled()
        }
    }};
}
