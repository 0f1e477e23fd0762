//! Object printer output tests.

use std::collections::{BTreeMap, BTreeSet};

use printdebug::{
    json_str, object_str, print_object, Bytes, ObjectError, ObjectNode, ObjectOptions,
    ToObjectNode,
};
use serde_json::json;

fn render<T: ToObjectNode + ?Sized>(value: &T) -> String {
    object_str(value, &ObjectOptions::default()).unwrap()
}

#[test]
fn test_nested_mapping_example() {
    let mut out = Vec::new();
    print_object(&json!({"a": {"b": "c"}}), &ObjectOptions::default(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "a:\n    b:\n        c\n");
}

#[test]
fn test_flat_sequence_example() {
    let mut out = Vec::new();
    print_object(&vec![1, 2], &ObjectOptions::default(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n");
}

#[test]
fn test_empty_mapping_prints_nothing() {
    let mut out = Vec::new();
    print_object(&BTreeMap::<String, u8>::new(), &ObjectOptions::default(), &mut out).unwrap();
    assert!(out.is_empty());
}

/// A mix of the builtin shapes: sorted map, tuple, set and byte string.
fn mixed_value() -> BTreeMap<&'static str, ObjectNode> {
    let mut value = BTreeMap::new();
    value.insert("apple", vec![3, 1, 2].to_object_node());
    value.insert("diver", ("apricot", "banana", "cat").to_object_node());
    value.insert(
        "extra",
        [3.3, 1.1, 2.2]
            .iter()
            .map(|f| format!("{:.1}", f))
            .collect::<BTreeSet<_>>()
            .to_object_node(),
    );
    value.insert("genius", Bytes(b"ascii beef dead pi").to_object_node());
    value
}

#[test]
fn test_mixed_builtin_shapes() {
    let mut value = mixed_value();
    let inner = mixed_value();
    value.insert("f", inner.to_object_node());

    let expected = "\
apple:
    3
    1
    2
diver:
    apricot
    banana
    cat
extra:
    1.1
    2.2
    3.3
f:
    apple:
        3
        1
        2
    diver:
        apricot
        banana
        cat
    extra:
        1.1
        2.2
        3.3
    genius:
        b'ascii beef dead pi'
genius:
    b'ascii beef dead pi'";
    assert_eq!(render(&value), expected);
}

#[test]
fn test_json_insertion_order_is_kept() {
    let value = json!({"zulu": 1, "alpha": {"nested": [true, null]}});
    assert_eq!(render(&value), "zulu:\n    1\nalpha:\n    nested:\n        true\n        null");
}

#[test]
fn test_starting_depth_and_indent() {
    let options = ObjectOptions::default().with_indent("\t").with_depth(2);
    let rendered = object_str(&json!({"k": ["v"]}), &options).unwrap();
    assert_eq!(rendered, "\t\tk:\n\t\t\tv");
}

#[test]
fn test_depth_guard_fails_without_output() {
    let mut node = ObjectNode::leaf("x");
    for i in 0..300 {
        node = ObjectNode::Mapping(vec![(format!("k{}", i), node)]);
    }

    let mut out = Vec::new();
    let err = print_object(&node, &ObjectOptions::default(), &mut out).unwrap_err();
    assert!(matches!(err, ObjectError::CyclicStructure { depth: 128 }));
    assert!(out.is_empty());
}

#[test]
fn test_json_str_matches_sorted_layout() {
    let value = json!({"diver": ["apricot"], "apple": [3]});
    assert_eq!(
        json_str(&value).unwrap(),
        "{\n    \"apple\": [\n        3\n    ],\n    \"diver\": [\n        \"apricot\"\n    ]\n}"
    );
}
