//! Store persistence tests
mod common;

use common::temp_store;
use serde_json::{Value, json};
use std::fs;
use todo_store::{Importance, Store, ToDoItem};

#[test]
fn test_store_round_trip_across_instances() {
    let (mut store, dir) = temp_store();

    let a = ToDoItem::new("first").with_importance(Importance::Low);
    let b = ToDoItem::new("second")
        .with_deadline(1_700_000_000_000)
        .with_done(true);
    store.add(a.clone());
    store.add(b.clone());

    // A brand-new store against the same location sees the same collection
    let mut reloaded = Store::new(dir.path());
    reloaded.load();
    assert_eq!(reloaded.items(), &[a, b]);
}

#[test]
fn test_store_preserves_insertion_order() {
    let (mut store, dir) = temp_store();

    let texts = ["one", "two", "three", "four"];
    for text in texts {
        store.add(ToDoItem::new(text));
    }

    let mut reloaded = Store::new(dir.path());
    reloaded.load();
    let loaded: Vec<&str> = reloaded.items().iter().map(|i| i.text.as_str()).collect();
    assert_eq!(loaded, texts);
}

#[test]
fn test_remove_by_uid() {
    let (mut store, _dir) = temp_store();

    let a = ToDoItem::new("keep me not");
    let b = ToDoItem::new("keep me");
    let a_uid = a.uid.clone();
    store.add(a);
    store.add(b.clone());

    store.remove(&a_uid);
    assert_eq!(store.items(), &[b.clone()]);

    // Removing the same uid again is a no-op
    store.remove(&a_uid);
    assert_eq!(store.items(), &[b]);
}

#[test]
fn test_remove_deletes_duplicate_uids() {
    let (mut store, _dir) = temp_store();

    let a = ToDoItem::new("original");
    let duplicate = ToDoItem {
        text: "accidental twin".to_string(),
        ..a.clone()
    };
    store.add(a.clone());
    store.add(duplicate);

    store.remove(&a.uid);
    assert!(store.items().is_empty());
}

#[test]
fn test_load_missing_file_is_empty() {
    let (mut store, _dir) = temp_store();

    store.load();
    assert!(store.items().is_empty());
    assert!(!store.file_path().exists());
}

#[test]
fn test_load_skips_malformed_records() {
    let (mut store, _dir) = temp_store();

    fs::write(store.file_path(), r#"[{"text":"ok"},{"uid":"bad"}]"#).unwrap();
    store.load();

    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].text, "ok");
}

#[test]
fn test_load_corrupt_document_keeps_prior_state() {
    let (mut store, _dir) = temp_store();

    let item = ToDoItem::new("survivor");
    store.add(item.clone());
    store.load();
    assert_eq!(store.items(), &[item.clone()]);

    // Whole-document failure: not JSON at all, then not an array
    for content in ["not json", r#"{"text":"ok"}"#] {
        fs::write(store.file_path(), content).unwrap();
        store.load();
        assert_eq!(store.items(), &[item.clone()], "content {content:?}");
    }
}

#[test]
fn test_load_replaces_collection_wholesale() {
    let (mut store, _dir) = temp_store();

    store.add(ToDoItem::new("stale"));
    fs::write(store.file_path(), r#"[{"text":"fresh"}]"#).unwrap();

    store.load();
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].text, "fresh");
}

#[test]
fn test_persisted_document_omits_default_fields() {
    let (mut store, _dir) = temp_store();
    store.add(ToDoItem::new("plain"));

    let content = fs::read_to_string(store.file_path()).unwrap();
    let document: Value = serde_json::from_str(&content).unwrap();
    let records = document.as_array().unwrap();
    assert_eq!(records.len(), 1);

    let record = records[0].as_object().unwrap();
    assert_eq!(record.len(), 3);
    assert!(record.contains_key("uid"));
    assert_eq!(record["text"], json!("plain"));
    assert_eq!(record["isDone"], json!(false));
}

#[test]
fn test_externally_authored_record_gets_identity_on_import() {
    let (mut store, dir) = temp_store();

    fs::write(store.file_path(), r#"[{"text":"from a text editor"}]"#).unwrap();
    store.load();
    let uid = store.items()[0].uid.clone();
    assert!(!uid.is_empty());

    // The next save pins the generated uid into the document
    store.add(ToDoItem::new("trigger save"));
    let mut reloaded = Store::new(dir.path());
    reloaded.load();
    assert_eq!(reloaded.items()[0].uid, uid);
}

#[test]
fn test_mutation_survives_persist_failure() {
    let (mut store, dir) = temp_store();

    let item = ToDoItem::new("in memory only");
    dir.close().unwrap();

    // The write fails (directory is gone) but the mutation stands
    store.add(item.clone());
    assert_eq!(store.items(), &[item.clone()]);

    store.remove(&item.uid);
    assert!(store.items().is_empty());
}

#[test]
fn test_custom_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::with_file_name(dir.path(), "archive.json");
    store.add(ToDoItem::new("elsewhere"));

    assert!(dir.path().join("archive.json").exists());
    assert!(!dir.path().join(todo_store::DEFAULT_FILE_NAME).exists());
}
