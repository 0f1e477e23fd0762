//! Runtime call-stack inspection.
//!
//! Depth 0 is the function that called `resolve`. Each extra level walks one
//! frame further out. Frames belonging to the resolver itself and to the
//! backtrace machinery are never reported.
//!
//! # Design Decisions
//!
//! Every runtime layer between the caller and `capture_frames` is
//! `#[inline(never)]` and keeps its own frame: a layer whose last act is the
//! call into the next one passes the result through `black_box`, otherwise a
//! release build turns that call into a jump and the skip count is off by one.
//!
//! Frames of callers that the compiler inlined only show up when the binary
//! carries line tables. Without debug info an inlined caller is reported as
//! its outer function (often `call_once` or a test harness frame) with an
//! unknown file and line 0. The crate's release profile keeps line tables for
//! this reason; downstream binaries that want exact runtime call sites need
//! `debug = "line-tables-only"` or the compile-time macros.

use std::hint::black_box;

use backtrace::Backtrace;

use crate::callsite::info::{enclosing_function, CallSiteInfo, UNKNOWN};
use crate::error::StackDepthError;

/// Suffix of the symbol that marks the innermost resolver frame.
const MARKER: &str = "callsite::resolver::capture_frames";

/// Frames between `capture_frames` and the caller of `resolve`.
const RESOLVER_FRAMES: usize = 2;

/// Source of call-site information for the debug printers.
pub trait ResolveCallSite: Send + Sync {
    /// Describe the frame `depth` levels above the caller of `resolve`.
    fn resolve(&self, depth: usize) -> Result<CallSiteInfo, StackDepthError>;
}

/// Resolver backed by a live backtrace.
#[derive(Debug, Default, Clone, Copy)]
pub struct CallSiteResolver;

impl CallSiteResolver {
    pub fn new() -> Self {
        Self
    }
}

impl ResolveCallSite for CallSiteResolver {
    #[inline(never)]
    fn resolve(&self, depth: usize) -> Result<CallSiteInfo, StackDepthError> {
        let frames = capture_frames();
        locate(&frames, depth)
    }
}

/// Line info for the caller of `get_lineinfo`, or `level` frames further out.
#[inline(never)]
pub fn get_lineinfo(level: usize) -> Result<CallSiteInfo, StackDepthError> {
    // Skip this function's own frame; it must not become a tail call.
    let site = CallSiteResolver.resolve(level.saturating_add(1));
    black_box(site)
}

/// One symbol of a captured stack, innermost first.
#[derive(Debug, Clone, Default)]
struct RawFrame {
    name: Option<String>,
    filename: Option<String>,
    line: Option<u32>,
}

#[inline(never)]
fn capture_frames() -> Vec<RawFrame> {
    let trace = Backtrace::new();
    let mut frames = Vec::new();

    for frame in trace.frames() {
        let symbols = frame.symbols();
        if symbols.is_empty() {
            frames.push(RawFrame::default());
            continue;
        }
        // Inlined calls show up as several symbols on one frame.
        for symbol in symbols {
            frames.push(RawFrame {
                name: symbol.name().map(|name| format!("{:#}", name)),
                filename: symbol.filename().map(|path| path.display().to_string()),
                line: symbol.lineno(),
            });
        }
    }
    frames
}

fn locate(frames: &[RawFrame], depth: usize) -> Result<CallSiteInfo, StackDepthError> {
    let marker = frames
        .iter()
        .position(|frame| frame.name.as_deref().is_some_and(|name| name.ends_with(MARKER)));

    // Without symbols the marker cannot be found; nothing above it is known.
    let Some(marker) = marker else {
        tracing::debug!(depth, "no resolver frame found in backtrace");
        return Err(StackDepthError { requested: depth, available: 0 });
    };

    let first_caller = marker + RESOLVER_FRAMES;
    let available = frames.len().saturating_sub(first_caller);
    let frame = first_caller
        .checked_add(depth)
        .and_then(|index| frames.get(index))
        .ok_or(StackDepthError {
            requested: depth,
            available,
        })?;

    Ok(CallSiteInfo {
        filename: frame.filename.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        line_number: frame.line.unwrap_or(0),
        function_name: frame
            .name
            .as_deref()
            .map(|name| enclosing_function(strip_generics(name)).to_string())
            .unwrap_or_else(|| UNKNOWN.to_string()),
    })
}

/// Drop a trailing `::<T>` turbofish and the `<Type as Trait>` wrapper so
/// the last path segment is the function name.
fn strip_generics(name: &str) -> &str {
    let name = match name.rfind("::<") {
        Some(idx) if name.ends_with('>') => &name[..idx],
        _ => name,
    };
    name.trim_start_matches('<')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline(never)]
    fn outer_function() -> Result<CallSiteInfo, StackDepthError> {
        black_box(inner_function())
    }

    #[inline(never)]
    fn inner_function() -> Result<CallSiteInfo, StackDepthError> {
        black_box(CallSiteResolver.resolve(1))
    }

    #[test]
    #[inline(never)]
    fn test_resolve_direct_caller() {
        let site = CallSiteResolver.resolve(0).unwrap();
        assert_eq!(site.function_name, "test_resolve_direct_caller");
        assert!(site.filename.ends_with("resolver.rs"), "{}", site.filename);
        assert!(site.line_number > 0);
    }

    #[test]
    fn test_resolve_skips_wrapper_layers() {
        let site = outer_function().unwrap();
        assert_eq!(site.function_name, "outer_function");
    }

    #[inline(never)]
    fn lineinfo_here() -> CallSiteInfo {
        let site = get_lineinfo(0).unwrap();
        black_box(site)
    }

    #[inline(never)]
    fn lineinfo_of_caller() -> CallSiteInfo {
        let site = get_lineinfo(1).unwrap();
        black_box(site)
    }

    #[inline(never)]
    fn calls_lineinfo_of_caller() -> CallSiteInfo {
        let site = lineinfo_of_caller();
        black_box(site)
    }

    #[test]
    #[inline(never)]
    fn test_get_lineinfo() {
        let site = get_lineinfo(0).unwrap();
        assert_eq!(site.function_name, "test_get_lineinfo");
    }

    #[test]
    fn test_get_lineinfo_reports_named_function() {
        assert_eq!(lineinfo_here().function_name, "lineinfo_here");
        assert_eq!(calls_lineinfo_of_caller().function_name, "calls_lineinfo_of_caller");
    }

    #[test]
    fn test_get_lineinfo_level_overflow() {
        let err = get_lineinfo(usize::MAX).unwrap_err();
        assert_eq!(err.requested, usize::MAX);
    }

    #[test]
    fn test_locate_depth_overflow() {
        let frames = vec![
            RawFrame {
                name: Some("printdebug::callsite::resolver::capture_frames".into()),
                ..Default::default()
            },
            RawFrame::default(),
            RawFrame::default(),
        ];
        let err = locate(&frames, usize::MAX).unwrap_err();
        assert_eq!(err, StackDepthError { requested: usize::MAX, available: 1 });
    }

    #[test]
    fn test_resolve_too_deep() {
        let err = CallSiteResolver.resolve(100_000).unwrap_err();
        assert_eq!(err.requested, 100_000);
        assert!(err.available > 0);
    }

    #[test]
    fn test_locate_without_marker() {
        let frames = vec![RawFrame::default(); 3];
        let err = locate(&frames, 0).unwrap_err();
        assert_eq!(err, StackDepthError { requested: 0, available: 0 });
    }

    #[test]
    fn test_locate_unknown_frame() {
        let frames = vec![
            RawFrame {
                name: Some("printdebug::callsite::resolver::capture_frames".into()),
                ..Default::default()
            },
            RawFrame::default(),
            RawFrame::default(),
        ];
        let site = locate(&frames, 0).unwrap();
        assert_eq!(site, CallSiteInfo::new(UNKNOWN, 0, UNKNOWN));
    }

    #[test]
    fn test_strip_generics() {
        assert_eq!(
            enclosing_function(strip_generics("<app::Resolver as app::Resolve>::resolve")),
            "resolve"
        );
        assert_eq!(enclosing_function(strip_generics("app::convert::<u32>")), "convert");
    }
}
