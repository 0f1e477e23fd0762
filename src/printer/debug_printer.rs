//! Configurable debug printer.

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::hint::black_box;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwapOption;
use serde::Serialize;

use crate::callsite::{CallSiteInfo, CallSiteResolver, ResolveCallSite};
use crate::config::schema::{OutputTarget, PrinterConfig};
use crate::error::{Error, FormatError, Result};
use crate::format::{FormatTemplate, MAX_WIDTH};
use crate::object::{json_str, object_lines, ObjectOptions, ToObjectNode};
use crate::printer::global;
use crate::printer::options::{DebugOptions, ErrorOptions};

/// Frames between the resolver and the caller of a public runtime entry point:
/// `resolve_caller`, then the entry point itself.
const CALLER_DEPTH: usize = 2;

/// Prints messages prefixed with the location they were printed from.
///
/// Configuration changes go through `&self`, so a printer can be shared
/// between threads. Each line is written with a single `write_all` while the
/// output lock is held; resolution and rendering happen outside the lock.
pub struct DebugPrinter {
    template: ArcSwapOption<FormatTemplate>,
    enabled: AtomicBool,
    basename: AtomicBool,
    ljust_width: AtomicUsize,
    should_raise: AtomicBool,
    sink: Mutex<Box<dyn Write + Send>>,
    resolver: Box<dyn ResolveCallSite>,
}

impl DebugPrinter {
    /// Printer writing to stderr with the process-wide default template.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> DebugPrinterBuilder {
        DebugPrinterBuilder::default()
    }

    /// Build a printer from loaded configuration.
    pub fn from_config(config: &PrinterConfig) -> std::result::Result<Self, FormatError> {
        let mut builder = Self::builder()
            .enabled(config.enabled)
            .basename(config.basename)
            .ljust_width(config.ljust_width)
            .should_raise(config.should_raise);
        if let Some(format) = &config.format {
            builder = builder.format(format)?;
        }
        builder = match config.output {
            OutputTarget::Stderr => builder.stderr(),
            OutputTarget::Stdout => builder.stdout(),
        };
        Ok(builder.build())
    }

    // --- Configuration ---

    /// Validate and install a template for this printer.
    pub fn set_format(&self, template: &str) -> std::result::Result<(), FormatError> {
        let parsed = FormatTemplate::parse(template)?;
        self.set_template(parsed);
        Ok(())
    }

    pub fn set_template(&self, template: FormatTemplate) {
        tracing::debug!(template = %template, "debug printer format changed");
        self.template.store(Some(Arc::new(template)));
    }

    /// Go back to the process-wide default template.
    pub fn reset_format(&self) {
        tracing::debug!("debug printer format reset to default");
        self.template.store(None);
    }

    /// Template this printer renders with when no override is given.
    pub fn format(&self) -> Arc<FormatTemplate> {
        self.template
            .load_full()
            .unwrap_or_else(global::default_format)
    }

    pub fn enable(&self) {
        self.set_enabled(true);
    }

    pub fn disable(&self) {
        self.set_enabled(false);
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    /// Whether this instance is enabled, ignoring the process-wide flag.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Whether a call would print: both this instance and the process-wide flag are on.
    pub fn is_active(&self) -> bool {
        self.is_enabled() && global::enabled()
    }

    pub fn set_basename(&self, basename: bool) {
        self.basename.store(basename, Ordering::Relaxed);
    }

    pub fn basename(&self) -> bool {
        self.basename.load(Ordering::Relaxed)
    }

    /// Pad the line info to at least `width` columns, capped at `MAX_WIDTH`.
    pub fn set_ljust_width(&self, width: usize) {
        self.ljust_width.store(capped_width(width), Ordering::Relaxed);
    }

    pub fn ljust_width(&self) -> usize {
        self.ljust_width.load(Ordering::Relaxed)
    }

    pub fn set_should_raise(&self, should_raise: bool) {
        self.should_raise.store(should_raise, Ordering::Relaxed);
    }

    /// Send all further output to `writer`. Waits for an in-flight write.
    pub fn set_writer(&self, writer: impl Write + Send + 'static) {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        *sink = Box::new(writer);
    }

    /// Result for a call made while inactive.
    #[doc(hidden)]
    pub fn not_enabled(&self) -> Result<()> {
        if self.should_raise.load(Ordering::Relaxed) {
            return Err(Error::DebugNotEnabled);
        }
        Ok(())
    }

    // --- Printing, runtime call-site resolution ---

    /// Print `message` prefixed with the line info of the function calling
    /// this method. Wrappers around it must add one `level` per frame.
    #[inline(never)]
    pub fn debug(&self, message: impl Display) -> Result<()> {
        if !self.is_active() {
            return self.not_enabled();
        }
        let opts = DebugOptions::default();
        let site = self.resolve_caller(&opts, CALLER_DEPTH)?;
        self.emit(&site, &message, &opts)
    }

    /// Like `debug`, with per-call overrides.
    #[inline(never)]
    pub fn debug_with(&self, message: impl Display, opts: &DebugOptions) -> Result<()> {
        if !self.is_active() {
            return self.not_enabled();
        }
        let site = self.resolve_caller(opts, CALLER_DEPTH)?;
        self.emit(&site, &message, opts)
    }

    /// Print an object tree; the first line carries the line info and the
    /// rest are aligned under it.
    #[inline(never)]
    pub fn debug_object<T: ToObjectNode + ?Sized>(
        &self,
        value: &T,
        options: &ObjectOptions,
    ) -> Result<()> {
        if !self.is_active() {
            return self.not_enabled();
        }
        let opts = DebugOptions::default();
        let site = self.resolve_caller(&opts, CALLER_DEPTH)?;
        self.emit_object(&site, value, options, &opts)
    }

    /// Print a value as sorted, indented JSON on the lines after the line info.
    #[inline(never)]
    pub fn debug_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        if !self.is_active() {
            return self.not_enabled();
        }
        let opts = DebugOptions::default();
        let site = self.resolve_caller(&opts, CALLER_DEPTH)?;
        let text = json_str(value)?;
        self.emit(&site, &format_args!("\n{}", text), &opts)
    }

    /// Print `error` and its `source()` chain, unless `opts` suppresses it.
    /// Reports the function calling this method, like `debug`.
    #[inline(never)]
    pub fn debug_error(
        &self,
        error: &(dyn StdError + 'static),
        opts: &ErrorOptions,
    ) -> Result<()> {
        if !self.is_active() {
            return self.not_enabled();
        }
        if opts.is_suppressed(error) {
            return Ok(());
        }
        let site = self.resolve_caller(&opts.debug, CALLER_DEPTH)?;
        self.emit_error(&site, error, opts)
    }

    #[inline(never)]
    fn resolve_caller(&self, opts: &DebugOptions, depth: usize) -> Result<CallSiteInfo> {
        // An overflowing level is still too deep; the resolver reports it.
        let site = self.resolver.resolve(depth.saturating_add(opts.level));
        Ok(black_box(site)?)
    }

    // --- Printing, call site supplied by the caller ---

    /// Print `message` for an already captured call site. Used by the macros.
    pub fn debug_at(
        &self,
        site: &CallSiteInfo,
        message: impl Display,
        opts: &DebugOptions,
    ) -> Result<()> {
        if !self.is_active() {
            return self.not_enabled();
        }
        self.emit(site, &message, opts)
    }

    pub fn debug_object_at<T: ToObjectNode + ?Sized>(
        &self,
        site: &CallSiteInfo,
        value: &T,
        options: &ObjectOptions,
    ) -> Result<()> {
        if !self.is_active() {
            return self.not_enabled();
        }
        self.emit_object(site, value, options, &DebugOptions::default())
    }

    pub fn debug_error_at(
        &self,
        site: &CallSiteInfo,
        error: &(dyn StdError + 'static),
        opts: &ErrorOptions,
    ) -> Result<()> {
        if !self.is_active() {
            return self.not_enabled();
        }
        if opts.is_suppressed(error) {
            return Ok(());
        }
        self.emit_error(site, error, opts)
    }

    // --- Rendering ---

    /// Render the line-info prefix for `site`.
    pub fn render_prefix(&self, site: &CallSiteInfo, opts: &DebugOptions) -> String {
        let mut site = if opts.basename.unwrap_or_else(|| self.basename()) {
            site.basename()
        } else {
            site.clone()
        };
        if let Some(parent) = &opts.parent {
            site.function_name = format!("{}.{}", parent, site.function_name);
        }

        let rendered = match &opts.fmt {
            Some(template) => template.render(&site),
            None => self.format().render(&site),
        };
        ljust(rendered, self.ljust_width())
    }

    fn emit(&self, site: &CallSiteInfo, message: &dyn Display, opts: &DebugOptions) -> Result<()> {
        let prefix = self.render_prefix(site, opts);
        let line = if opts.align {
            format!("{}{}\n", " ".repeat(prefix.chars().count()), message)
        } else {
            format!("{}{}\n", prefix, message)
        };
        self.write_block(&line)
    }

    fn emit_object<T: ToObjectNode + ?Sized>(
        &self,
        site: &CallSiteInfo,
        value: &T,
        options: &ObjectOptions,
        opts: &DebugOptions,
    ) -> Result<()> {
        let lines = object_lines(value, options)?;
        let Some((first, rest)) = lines.split_first() else {
            return Ok(());
        };

        let prefix = self.render_prefix(site, opts);
        let pad = " ".repeat(prefix.chars().count());
        let mut block = format!("{}{}\n", prefix, first);
        for line in rest {
            block.push_str(&pad);
            block.push_str(line);
            block.push('\n');
        }
        self.write_block(&block)
    }

    fn emit_error(
        &self,
        site: &CallSiteInfo,
        error: &(dyn StdError + 'static),
        opts: &ErrorOptions,
    ) -> Result<()> {
        let prefix = self.render_prefix(site, &opts.debug);
        let pad = " ".repeat(prefix.chars().count());
        let lead = if opts.debug.align { &pad } else { &prefix };

        let mut block = String::new();
        if let Some(message) = &opts.message {
            block.push_str(&format!("{}{}\n", lead, message));
        }
        block.push_str(&format!("{}{}\n", lead, error));
        let mut source = error.source();
        while let Some(cause) = source {
            block.push_str(&format!("{}caused by: {}\n", pad, cause));
            source = cause.source();
        }
        self.write_block(&block)
    }

    /// Write a fully rendered block while holding the output lock.
    fn write_block(&self, block: &str) -> Result<()> {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_all(block.as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}

impl Default for DebugPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DebugPrinter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugPrinter")
            .field("template", &self.template.load_full())
            .field("enabled", &self.is_enabled())
            .field("basename", &self.basename())
            .field("ljust_width", &self.ljust_width())
            .finish_non_exhaustive()
    }
}

fn capped_width(width: usize) -> usize {
    if width > MAX_WIDTH {
        tracing::warn!(width, max = MAX_WIDTH, "ljust width capped");
        return MAX_WIDTH;
    }
    width
}

fn ljust(mut text: String, width: usize) -> String {
    let len = text.chars().count();
    if len < width {
        text.extend(std::iter::repeat(' ').take(width - len));
    }
    text
}

/// Builder for `DebugPrinter`.
pub struct DebugPrinterBuilder {
    template: Option<FormatTemplate>,
    enabled: bool,
    basename: bool,
    ljust_width: usize,
    should_raise: bool,
    writer: Box<dyn Write + Send>,
    resolver: Box<dyn ResolveCallSite>,
}

impl Default for DebugPrinterBuilder {
    fn default() -> Self {
        Self {
            template: None,
            enabled: true,
            basename: false,
            ljust_width: 0,
            should_raise: false,
            writer: Box::new(io::stderr()),
            resolver: Box::new(CallSiteResolver),
        }
    }
}

impl DebugPrinterBuilder {
    /// Validate and set the instance template.
    pub fn format(mut self, template: &str) -> std::result::Result<Self, FormatError> {
        self.template = Some(FormatTemplate::parse(template)?);
        Ok(self)
    }

    pub fn template(mut self, template: FormatTemplate) -> Self {
        self.template = Some(template);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn basename(mut self, basename: bool) -> Self {
        self.basename = basename;
        self
    }

    /// Capped at `MAX_WIDTH`, like `DebugPrinter::set_ljust_width`.
    pub fn ljust_width(mut self, width: usize) -> Self {
        self.ljust_width = capped_width(width);
        self
    }

    /// Return `Error::DebugNotEnabled` instead of silently skipping while disabled.
    pub fn should_raise(mut self, should_raise: bool) -> Self {
        self.should_raise = should_raise;
        self
    }

    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    pub fn stdout(self) -> Self {
        self.writer(io::stdout())
    }

    pub fn stderr(self) -> Self {
        self.writer(io::stderr())
    }

    pub fn resolver(mut self, resolver: impl ResolveCallSite + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn build(self) -> DebugPrinter {
        DebugPrinter {
            template: ArcSwapOption::from(self.template.map(Arc::new)),
            enabled: AtomicBool::new(self.enabled),
            basename: AtomicBool::new(self.basename),
            ljust_width: AtomicUsize::new(self.ljust_width),
            should_raise: AtomicBool::new(self.should_raise),
            sink: Mutex::new(self.writer),
            resolver: self.resolver,
        }
    }
}
