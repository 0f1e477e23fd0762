//! Line-info format templates.
//!
//! # Responsibilities
//! - Parse templates such as `{filename}:{lineno:>5} {name}(): `
//! - Reject unknown placeholders when the template is set, not when it is used
//! - Render a `CallSiteInfo` into the prefix written before each message
//!
//! # Design Decisions
//! - Parsed once into segments; rendering never fails
//! - Specs follow the `[[fill]align][width]` subset of `format!` specs, widths capped at `MAX_WIDTH`
//! - `{{` and `}}` are literal braces

pub mod template;

pub use template::{Align, Field, FormatTemplate, Spec, ALIGNED_FORMAT, DEFAULT_FORMAT, MAX_WIDTH};
