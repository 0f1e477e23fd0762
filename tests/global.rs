//! Tests for the process-wide flag, default template and default printer.
//!
//! These mutate shared state, so each test holds `GLOBAL_LOCK`.

use std::hint::black_box;
use std::io;
use std::sync::{Mutex, MutexGuard};

use printdebug::{
    debug, debug_enable, debug_error, default_printer, enabled, printobject,
    reset_default_format, set_debug_enabled, set_default_format, CallSiteInfo, DebugOptions,
    DebugPrinter, Error, ErrorOptions, OutputCatcher, DEFAULT_FORMAT,
};

mod common;

static GLOBAL_LOCK: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    GLOBAL_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Printer without its own template, so it follows the process default.
fn following_printer() -> (DebugPrinter, OutputCatcher) {
    let out = OutputCatcher::new();
    let printer = DebugPrinter::builder().writer(out.clone()).build();
    (printer, out)
}

#[test]
fn test_global_flag_silences_every_printer() {
    let _guard = lock();
    common::init_tracing();
    let (printer, out) = common::capture_printer();

    debug_enable(false);
    assert!(!enabled());
    assert!(!printer.is_active());
    printdebug::debug_to!(printer, "hidden").unwrap();
    printdebug::debug!("hidden").unwrap();
    debug("hidden").unwrap();
    assert!(out.is_empty());

    set_debug_enabled(true);
    assert!(enabled());
    printdebug::debug_to!(printer, "shown").unwrap();
    assert_eq!(out.lines().len(), 1);
}

#[test]
fn test_global_flag_with_should_raise() {
    let _guard = lock();
    let printer = DebugPrinter::builder()
        .should_raise(true)
        .writer(OutputCatcher::new())
        .build();

    debug_enable(false);
    let result = printer.debug("x");
    debug_enable(true);
    assert!(matches!(result, Err(Error::DebugNotEnabled)));
    assert!(printer.debug("x").is_ok());
}

#[test]
fn test_default_format_precedence() {
    let _guard = lock();
    let (following, following_out) = following_printer();
    let (own, own_out) = following_printer();
    own.set_format("own {lineno}: ").unwrap();
    let site = CallSiteInfo::new("bar.rs", 9, "foo");

    set_default_format("global {name}: ").unwrap();
    following.debug_at(&site, "a", &DebugOptions::default()).unwrap();
    own.debug_at(&site, "a", &DebugOptions::default()).unwrap();
    following
        .debug_at(&site, "b", &DebugOptions::new().fmt("call: ").unwrap())
        .unwrap();

    reset_default_format();
    following.debug_at(&site, "c", &DebugOptions::default()).unwrap();

    assert_eq!(following_out.lines(), vec!["global foo: a", "call: b", "bar.rs:9 foo(): c"]);
    assert_eq!(own_out.lines(), vec!["own 9: a"]);
}

#[test]
fn test_invalid_default_format_keeps_previous() {
    let _guard = lock();
    assert!(set_default_format("{lineno} {nope}").is_err());
    assert_eq!(printdebug::default_format().as_str(), DEFAULT_FORMAT);
}

#[test]
fn test_default_printer_is_singleton() {
    let _guard = lock();
    let first: *const DebugPrinter = default_printer();
    let second: *const DebugPrinter = default_printer();
    assert_eq!(first, second);
    assert!(default_printer().is_enabled());

    printdebug::debug!("default printer writes to stderr").unwrap();
    debug("runtime path through the default printer").unwrap();
    printobject(&vec!["stdout", "lines"]).unwrap();
}

#[inline(never)]
fn report_from_named_function() -> u32 {
    let line = line!() + 1;
    debug("from free fn").unwrap();
    line
}

#[inline(never)]
fn report_one_level_up() {
    printdebug::printer::debug_with("from helper", &DebugOptions::new().level(1)).unwrap();
}

#[inline(never)]
fn calls_report_one_level_up() {
    report_one_level_up();
    black_box(());
}

#[inline(never)]
fn report_error_here() {
    debug_error(&io::Error::other("bad input"), &ErrorOptions::new()).unwrap();
    black_box(());
}

#[test]
fn test_free_functions_report_their_caller() {
    let _guard = lock();
    let out = OutputCatcher::new();
    let printer = default_printer();
    printer.set_writer(out.clone());
    printer.set_basename(true);

    let line = report_from_named_function();
    calls_report_one_level_up();
    report_error_here();

    printer.set_basename(false);
    printer.set_writer(io::stderr());

    let lines = out.lines();
    assert_eq!(lines.len(), 3, "{:?}", lines);
    assert_eq!(
        lines[0],
        format!("global.rs:{} report_from_named_function(): from free fn", line)
    );
    assert!(lines[1].starts_with("global.rs:"), "{}", lines[1]);
    assert!(lines[1].ends_with(" calls_report_one_level_up(): from helper"), "{}", lines[1]);
    assert!(lines[2].ends_with(" report_error_here(): bad input"), "{}", lines[2]);
}
