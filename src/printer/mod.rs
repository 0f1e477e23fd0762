//! Debug printers.
//!
//! # Data Flow
//! ```text
//! debug!(...) / debug_to!(printer, ...)
//!     → enabled check (instance flag AND process-wide flag)
//!     → call_site!() captured at the expansion site
//!     → template render (per call > instance > process default)
//!     → one locked write of "{prefix}{message}\n"
//!
//! printer.debug(...) / debug(...) / printer.debug_error(...)
//!     → enabled check
//!     → CallSiteResolver::resolve(skip depth + level)
//!     → same render and write path
//! ```
//!
//! # Design Decisions
//! - Disabled printers return before any call-site work is done
//! - Templates are validated when set, so rendering cannot fail
//! - The process-wide printer is created on first use and never torn down
//! - Each runtime wrapper adds one `level` for its own frame and never ends in
//!   a tail call, so the reported site stays the caller's

pub mod debug_printer;
pub mod global;
pub mod options;

pub use debug_printer::{DebugPrinter, DebugPrinterBuilder};
pub use global::{
    debug, debug_enable, debug_error, debug_with, default_format, default_printer, enabled, printobject,
    reset_default_format, set_debug_enabled, set_default_format,
};
pub use options::{DebugOptions, ErrorFilter, ErrorOptions};
