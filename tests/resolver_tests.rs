use jsonfile::{lookup, lookup_string, resolve, Error};
use serde_json::json;
use yare::parameterized;

fn books() -> serde_json::Value {
    json!([
        {"author": "Suzanne Collins", "book": "The Hunger Games"},
        {"author": "Cat", "book": "Catty"}
    ])
}

fn nested() -> serde_json::Value {
    json!({
        "b": [null, null, {"c": "deep"}],
        "items": [1, 2],
        "count": 7,
        "title": "top"
    })
}

// Resolving `x[i]` lands on the same node as direct index access.
#[parameterized(
    first = { 0 },
    second = { 1 },
)]
fn index_anchor_matches_direct_access(i: usize) {
    let doc = books();
    let resolved = resolve(&doc, &format!("x[{i}]")).unwrap();
    assert_eq!(resolved.node, doc.get(i));
    assert!(resolved.exhausted);
}

// A path of indexed segments is equivalent to chaining get calls by hand.
#[test]
fn nested_path_matches_chained_gets() {
    let doc = nested();
    let by_hand = doc.get("b").and_then(|v| v.get(2)).and_then(|v| v.get("c"));
    assert_eq!(lookup(&doc, "x.b[2].c").ok(), by_hand);
}

#[test]
fn lookup_string_on_array_of_objects() {
    assert_eq!(lookup_string(&books(), "x[1].author").unwrap(), "Cat");
}

#[parameterized(
    missing_key = { "x.nope" },
    out_of_range_index_then_key = { "x.b[9].c" },
    key_on_scalar = { "x.title[0].c" },
)]
fn lookup_absent_node(path: &str) {
    match lookup(&nested(), path) {
        Err(Error::NotFound { path: p }) => assert_eq!(p, path),
        other => panic!("expected not-found error, got {other:?}"),
    }
}

// Paths ending on an anchor or index stop short of naming a child; a plain
// lookup reports that, while the resolver still hands back the node.
#[parameterized(
    anchor_only = { "x" },
    trailing_index = { "x.b[2]" },
    trailing_anchor = { "x.x" },
)]
fn lookup_path_without_terminal_key(path: &str) {
    assert!(matches!(lookup(&nested(), path), Err(Error::EmptyPath)));
}

#[test]
fn resolver_hands_back_node_on_trailing_index() {
    let doc = nested();
    let resolved = resolve(&doc, "x.b[2]").unwrap();
    assert!(resolved.exhausted);
    assert_eq!(resolved.node, Some(&json!({"c": "deep"})));
}

#[test]
fn invalid_index_fails_before_touching_the_document() {
    let doc = nested();
    let before = doc.clone();
    assert!(matches!(
        lookup(&doc, "x[foo]"),
        Err(Error::InvalidIndex { .. })
    ));
    assert_eq!(doc, before);
}

// The anchor shadows a real top-level key named "x": `x` always means the
// root, so such a key is only reachable through an index-bearing path.
#[test]
fn anchor_shadows_real_x_key() {
    let doc = json!({"x": "hidden"});
    assert!(matches!(lookup(&doc, "x"), Err(Error::EmptyPath)));
}

#[test]
fn lookup_string_renders_non_string_nodes() {
    match lookup_string(&nested(), "x.count") {
        Err(Error::NotAString { rendered }) => assert_eq!(rendered, "7"),
        other => panic!("expected not-a-string error, got {other:?}"),
    }
}

#[test]
fn lookup_string_renders_non_string_containers() {
    match lookup_string(&nested(), "x.items") {
        Err(Error::NotAString { rendered }) => assert_eq!(rendered, "[1,2]"),
        other => panic!("expected not-a-string error, got {other:?}"),
    }
}
