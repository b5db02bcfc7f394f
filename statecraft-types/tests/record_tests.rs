use pretty_assertions::assert_eq;
use serde_json::{Map, json};
use statecraft_types::{ChildId, ChildRecord, ConcurrencyToken, ParentId};

fn make_record() -> ChildRecord {
    let mut fields = Map::new();
    fields.insert("project_name".into(), json!("Apollo"));
    fields.insert("role".into(), json!(3));
    ChildRecord::new(
        ParentId::new(),
        ChildId::new(),
        fields,
        ConcurrencyToken::from_bytes(vec![0, 0, 0, 1]),
    )
}

#[test]
fn key_combines_parent_and_child() {
    let record = make_record();
    let key = record.key();
    assert_eq!(key.parent, record.parent_id);
    assert_eq!(key.child, record.child_id);
}

#[test]
fn serde_roundtrip() {
    let record = make_record();
    let json_str = serde_json::to_string(&record).unwrap();
    let back: ChildRecord = serde_json::from_str(&json_str).unwrap();

    assert_eq!(back.parent_id, record.parent_id);
    assert_eq!(back.child_id, record.child_id);
    assert_eq!(back.fields, record.fields);
    assert_eq!(back.token, record.token);
}

#[test]
fn fields_preserve_json_values() {
    let record = make_record();
    assert_eq!(record.fields.get("project_name"), Some(&json!("Apollo")));
    assert_eq!(record.fields.get("role"), Some(&json!(3)));
    assert_eq!(record.fields.get("missing"), None);
}
