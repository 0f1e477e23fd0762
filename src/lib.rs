//! Debug printing with call-site info.
//!
//! Every line is prefixed with the file, line and function it was printed
//! from, rendered through a small template (`{filename}:{lineno} {name}(): `
//! by default). A companion object printer renders nested mappings and
//! sequences as indented text.
//!
//! ```
//! use printdebug::{DebugPrinter, OutputCatcher};
//!
//! let out = OutputCatcher::new();
//! let printer = DebugPrinter::builder().basename(true).writer(out.clone()).build();
//! printdebug::debug_to!(printer, "ready").unwrap();
//! assert!(out.output().ends_with("(): ready"));
//! ```

mod macros;

pub mod callsite;
pub mod catcher;
pub mod config;
pub mod error;
pub mod format;
pub mod object;
pub mod printer;

pub use callsite::{get_lineinfo, CallSiteInfo, CallSiteResolver, ResolveCallSite};
pub use catcher::OutputCatcher;
pub use config::PrinterConfig;
pub use error::{Error, FormatError, ObjectError, Result, StackDepthError};
pub use format::{FormatTemplate, ALIGNED_FORMAT, DEFAULT_FORMAT, MAX_WIDTH};
pub use object::{
    json_str, object_lines, object_str, print_json, print_object, Bytes, ObjectNode,
    ObjectOptions, ToObjectNode,
};
pub use printer::{
    debug, debug_enable, debug_error, default_format, default_printer, enabled, printobject,
    reset_default_format, set_debug_enabled, set_default_format, DebugOptions, DebugPrinter,
    DebugPrinterBuilder, ErrorOptions,
};
