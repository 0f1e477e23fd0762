//! Process-wide printer, enabled flag and default template.
//!
//! The default printer is created on first use and lives until the process
//! exits. The enabled flag and default template are read on every call and
//! may be changed from any thread.

use std::error::Error as StdError;
use std::fmt::Display;
use std::hint::black_box;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use crate::error::{FormatError, ObjectError, Result};
use crate::format::FormatTemplate;
use crate::object::{print_object, ObjectOptions, ToObjectNode};
use crate::printer::debug_printer::DebugPrinter;
use crate::printer::options::{DebugOptions, ErrorOptions};

static ENABLED: AtomicBool = AtomicBool::new(true);
static DEFAULT_FORMAT: OnceLock<ArcSwap<FormatTemplate>> = OnceLock::new();
static DEFAULT_PRINTER: OnceLock<DebugPrinter> = OnceLock::new();

fn default_format_slot() -> &'static ArcSwap<FormatTemplate> {
    DEFAULT_FORMAT.get_or_init(|| ArcSwap::from_pointee(FormatTemplate::default()))
}

/// The shared printer behind `debug!` and `debug()`. Writes to stderr until
/// redirected with `set_writer`.
pub fn default_printer() -> &'static DebugPrinter {
    DEFAULT_PRINTER.get_or_init(DebugPrinter::new)
}

/// Turn every debug printer in the process on or off.
pub fn debug_enable(enabled: bool) {
    tracing::debug!(enabled, "debug output toggled");
    ENABLED.store(enabled, Ordering::Release);
}

/// Alias of `debug_enable`.
pub fn set_debug_enabled(enabled: bool) {
    debug_enable(enabled);
}

/// Current value of the process-wide flag.
pub fn enabled() -> bool {
    ENABLED.load(Ordering::Acquire)
}

/// Template used by printers that have none of their own.
pub fn default_format() -> Arc<FormatTemplate> {
    default_format_slot().load_full()
}

/// Validate and install a new process-wide default template.
pub fn set_default_format(template: &str) -> std::result::Result<(), FormatError> {
    let parsed = FormatTemplate::parse(template)?;
    tracing::debug!(template = %parsed, "default format changed");
    default_format_slot().store(Arc::new(parsed));
    Ok(())
}

pub fn reset_default_format() {
    default_format_slot().store(Arc::new(FormatTemplate::default()));
}

/// Print `message` through the default printer, prefixed with the line info
/// of the function calling `debug`. Adds one level for its own frame.
#[inline(never)]
pub fn debug(message: impl Display) -> Result<()> {
    let result = default_printer().debug_with(message, &DebugOptions::default().level(1));
    black_box(result)
}

/// Like `debug`, with per-call overrides. `opts.level` counts from the caller.
#[inline(never)]
pub fn debug_with(message: impl Display, opts: &DebugOptions) -> Result<()> {
    let opts = opts.clone().level(opts.level.saturating_add(1));
    let result = default_printer().debug_with(message, &opts);
    black_box(result)
}

/// Print an error chain through the default printer, reporting the caller.
#[inline(never)]
pub fn debug_error(error: &(dyn StdError + 'static), opts: &ErrorOptions) -> Result<()> {
    let mut opts = opts.clone();
    opts.debug.level = opts.debug.level.saturating_add(1);
    let result = default_printer().debug_error(error, &opts);
    black_box(result)
}

/// Print an object tree to stdout with the default indent.
pub fn printobject<T: ToObjectNode + ?Sized>(value: &T) -> std::result::Result<(), ObjectError> {
    print_object(value, &ObjectOptions::default(), &mut io::stdout().lock())
}
