//! Tagged value tree and conversions into it.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Display;
use std::rc::Rc;
use std::sync::Arc;

/// Leaf text for `None` and JSON `null`.
pub const NULL_LEAF: &str = "null";

/// A value as the object printer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectNode {
    /// Key/value pairs, in the order they should be printed.
    Mapping(Vec<(String, ObjectNode)>),
    /// Ordered elements.
    Sequence(Vec<ObjectNode>),
    /// Anything printed as a single line of text.
    Leaf(String),
}

impl ObjectNode {
    pub fn leaf(value: impl Display) -> Self {
        ObjectNode::Leaf(value.to_string())
    }
}

/// Conversion into an `ObjectNode`.
pub trait ToObjectNode {
    fn to_object_node(&self) -> ObjectNode;
}

impl ToObjectNode for ObjectNode {
    fn to_object_node(&self) -> ObjectNode {
        self.clone()
    }
}

macro_rules! impl_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToObjectNode for $ty {
                fn to_object_node(&self) -> ObjectNode {
                    ObjectNode::Leaf(self.to_string())
                }
            }
        )*
    };
}

impl_leaf!(
    bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl<T: ToObjectNode + ?Sized> ToObjectNode for &T {
    fn to_object_node(&self) -> ObjectNode {
        (**self).to_object_node()
    }
}

impl<T: ToObjectNode + ?Sized> ToObjectNode for Box<T> {
    fn to_object_node(&self) -> ObjectNode {
        (**self).to_object_node()
    }
}

impl<T: ToObjectNode + ?Sized> ToObjectNode for Rc<T> {
    fn to_object_node(&self) -> ObjectNode {
        (**self).to_object_node()
    }
}

impl<T: ToObjectNode + ?Sized> ToObjectNode for Arc<T> {
    fn to_object_node(&self) -> ObjectNode {
        (**self).to_object_node()
    }
}

impl<T: ToObjectNode> ToObjectNode for Option<T> {
    fn to_object_node(&self) -> ObjectNode {
        match self {
            Some(value) => value.to_object_node(),
            // Same spelling as a JSON null.
            None => ObjectNode::Leaf(NULL_LEAF.to_string()),
        }
    }
}

impl<T: ToObjectNode> ToObjectNode for [T] {
    fn to_object_node(&self) -> ObjectNode {
        ObjectNode::Sequence(self.iter().map(ToObjectNode::to_object_node).collect())
    }
}

impl<T: ToObjectNode, const N: usize> ToObjectNode for [T; N] {
    fn to_object_node(&self) -> ObjectNode {
        self.as_slice().to_object_node()
    }
}

impl<T: ToObjectNode> ToObjectNode for Vec<T> {
    fn to_object_node(&self) -> ObjectNode {
        self.as_slice().to_object_node()
    }
}

impl<T: ToObjectNode> ToObjectNode for VecDeque<T> {
    fn to_object_node(&self) -> ObjectNode {
        ObjectNode::Sequence(self.iter().map(ToObjectNode::to_object_node).collect())
    }
}

impl<T: ToObjectNode> ToObjectNode for BTreeSet<T> {
    fn to_object_node(&self) -> ObjectNode {
        ObjectNode::Sequence(self.iter().map(ToObjectNode::to_object_node).collect())
    }
}

impl<T: ToObjectNode + Ord, S> ToObjectNode for HashSet<T, S> {
    fn to_object_node(&self) -> ObjectNode {
        let mut items: Vec<&T> = self.iter().collect();
        items.sort();
        ObjectNode::Sequence(items.into_iter().map(ToObjectNode::to_object_node).collect())
    }
}

impl<K: Display, V: ToObjectNode> ToObjectNode for BTreeMap<K, V> {
    fn to_object_node(&self) -> ObjectNode {
        ObjectNode::Mapping(
            self.iter()
                .map(|(key, value)| (key.to_string(), value.to_object_node()))
                .collect(),
        )
    }
}

impl<K: Display, V: ToObjectNode, S> ToObjectNode for HashMap<K, V, S> {
    fn to_object_node(&self) -> ObjectNode {
        let mut entries: Vec<(String, ObjectNode)> = self
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_object_node()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        ObjectNode::Mapping(entries)
    }
}

macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: ToObjectNode),+> ToObjectNode for ($($name,)+) {
            #[allow(non_snake_case)]
            fn to_object_node(&self) -> ObjectNode {
                let ($($name,)+) = self;
                ObjectNode::Sequence(vec![$($name.to_object_node()),+])
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);
impl_tuple!(A, B, C, D, E, F);

impl ToObjectNode for serde_json::Value {
    fn to_object_node(&self) -> ObjectNode {
        use serde_json::Value;

        match self {
            Value::Null => ObjectNode::Leaf(NULL_LEAF.to_string()),
            Value::Bool(b) => ObjectNode::leaf(b),
            Value::Number(n) => ObjectNode::leaf(n),
            Value::String(s) => ObjectNode::Leaf(s.clone()),
            Value::Array(items) => {
                ObjectNode::Sequence(items.iter().map(ToObjectNode::to_object_node).collect())
            }
            Value::Object(map) => ObjectNode::Mapping(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_object_node()))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for ObjectNode {
    fn from(value: &serde_json::Value) -> Self {
        value.to_object_node()
    }
}

/// Byte string, printed as a single `b'...'` leaf instead of a sequence of numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bytes<'a>(pub &'a [u8]);

impl ToObjectNode for Bytes<'_> {
    fn to_object_node(&self) -> ObjectNode {
        ObjectNode::Leaf(format!("b'{}'", self.0.escape_ascii()))
    }
}
