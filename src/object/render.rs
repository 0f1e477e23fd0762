//! Indented text rendering of an `ObjectNode` tree.

use std::io::Write;

use crate::error::ObjectError;
use crate::object::node::{ObjectNode, ToObjectNode};

/// Indent used for one level of mapping nesting.
pub const DEFAULT_INDENT: &str = "    ";

/// Container nesting allowed before the walk gives up.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Formatting options for the object printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectOptions {
    /// Text repeated once per depth level.
    pub indent: String,
    /// Starting depth of the root value.
    pub depth: usize,
    /// Maximum container nesting before `CyclicStructure` is raised.
    pub max_depth: usize,
}

impl Default for ObjectOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ObjectOptions {
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Render a value into lines without a trailing newline.
pub fn object_lines<T: ToObjectNode + ?Sized>(
    value: &T,
    options: &ObjectOptions,
) -> Result<Vec<String>, ObjectError> {
    let node = value.to_object_node();
    let mut lines = Vec::new();
    walk(&node, options.depth, 0, options, &mut lines)?;
    Ok(lines)
}

/// Render a value into a single newline-joined string.
pub fn object_str<T: ToObjectNode + ?Sized>(
    value: &T,
    options: &ObjectOptions,
) -> Result<String, ObjectError> {
    Ok(object_lines(value, options)?.join("\n"))
}

/// Render a value and write it to `out`, one line per key or leaf.
///
/// The whole rendering happens before anything is written, so a failed
/// depth check leaves the stream untouched.
pub fn print_object<T, W>(value: &T, options: &ObjectOptions, out: &mut W) -> Result<(), ObjectError>
where
    T: ToObjectNode + ?Sized,
    W: Write + ?Sized,
{
    let lines = object_lines(value, options)?;
    if lines.is_empty() {
        return Ok(());
    }
    let mut text = lines.join("\n");
    text.push('\n');
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn walk(
    node: &ObjectNode,
    depth: usize,
    nesting: usize,
    options: &ObjectOptions,
    lines: &mut Vec<String>,
) -> Result<(), ObjectError> {
    match node {
        ObjectNode::Leaf(text) => {
            lines.push(format!("{}{}", options.indent.repeat(depth), text));
        }
        ObjectNode::Mapping(entries) => {
            guard(nesting, options)?;
            let prefix = options.indent.repeat(depth);
            for (key, value) in entries {
                lines.push(format!("{}{}:", prefix, key));
                walk(value, depth + 1, nesting + 1, options, lines)?;
            }
        }
        ObjectNode::Sequence(items) => {
            guard(nesting, options)?;
            for item in items {
                walk(item, depth, nesting + 1, options, lines)?;
            }
        }
    }
    Ok(())
}

fn guard(nesting: usize, options: &ObjectOptions) -> Result<(), ObjectError> {
    if nesting >= options.max_depth {
        tracing::debug!(max_depth = options.max_depth, "object nesting limit reached");
        return Err(ObjectError::CyclicStructure {
            depth: options.max_depth,
        });
    }
    Ok(())
}
