use statecraft_types::{ChildId, ChildKey, ParentId};
use std::str::FromStr;

#[test]
fn parent_ids_are_unique() {
    let a = ParentId::new();
    let b = ParentId::new();
    assert_ne!(a, b);
}

#[test]
fn child_ids_are_time_ordered() {
    // UUID v7 embeds a timestamp, so ids created in sequence sort in order.
    let a = ChildId::new();
    let b = ChildId::new();
    assert!(a.as_uuid() <= b.as_uuid());
}

#[test]
fn parse_roundtrip() {
    let id = ParentId::new();
    let parsed = ParentId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn from_str_matches_parse() {
    let id = ChildId::new();
    let via_from_str = ChildId::from_str(&id.to_string()).unwrap();
    assert_eq!(id, via_from_str);
}

#[test]
fn parse_rejects_garbage() {
    assert!(ParentId::parse("not-a-uuid").is_err());
    assert!(ChildId::parse("").is_err());
}

#[test]
fn serde_is_transparent() {
    let id = ParentId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
    let back: ParentId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn child_key_display_joins_parts() {
    let parent = ParentId::new();
    let child = ChildId::new();
    let key = ChildKey::new(parent, child);
    assert_eq!(key.to_string(), format!("{parent}/{child}"));
}

#[test]
fn child_key_equality_is_componentwise() {
    let parent = ParentId::new();
    let child = ChildId::new();
    assert_eq!(ChildKey::new(parent, child), ChildKey::new(parent, child));
    assert_ne!(
        ChildKey::new(parent, child),
        ChildKey::new(parent, ChildId::new())
    );
}
