//! Call-site resolution.
//!
//! # Responsibilities
//! - Describe where a debug call came from (`CallSiteInfo`)
//! - Capture the call site at compile time (`call_site!`, `function_name!`)
//! - Walk the live call stack when a plain function is the entry point
//!
//! # Data Flow
//! ```text
//! debug!(...)            → call_site!() at the expansion site
//! printer.debug(...)     → CallSiteResolver::resolve(skip depth)
//!                              → backtrace frames
//!                              → CallSiteInfo { filename, line_number, function_name }
//! ```
//!
//! # Design Decisions
//! - Macros are the cheap path: file, line and function are known statically
//! - The runtime path counts symbols, so inlined frames still count as frames
//! - Every wrapper layer adds its own frames to the skip depth

pub mod info;
pub mod resolver;

pub use info::{enclosing_function, CallSiteInfo, MODULE_SENTINEL, UNKNOWN};
pub use resolver::{get_lineinfo, CallSiteResolver, ResolveCallSite};
