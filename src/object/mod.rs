//! Recursive object printer.
//!
//! # Responsibilities
//! - Convert container values into an explicit tree (`ObjectNode`)
//! - Render the tree as indented text, one line per key or leaf
//! - Pretty-print JSON for values that implement `Serialize`
//!
//! # Data Flow
//! ```text
//! value (Vec, HashMap, tuple, serde_json::Value, ...)
//!     → ToObjectNode (capability check at the boundary)
//!     → ObjectNode::{Mapping, Sequence, Leaf}
//!     → render.rs (depth-guarded walk)
//!     → lines written to the stream in a single write
//! ```
//!
//! # Design Decisions
//! - Mapping values indent one level, sequence items stay at the current level
//! - Nesting past `max_depth` fails with `CyclicStructure`, nothing is written
//! - Hash-based collections are sorted so output is stable between runs

pub mod json;
pub mod node;
pub mod render;

pub use json::{json_str, print_json};
pub use node::{Bytes, ObjectNode, ToObjectNode, NULL_LEAF};
pub use render::{
    object_lines, object_str, print_object, ObjectOptions, DEFAULT_INDENT, DEFAULT_MAX_DEPTH,
};
