//! Encoding and decoding between ToDo items and their persisted JSON records
//!
//! The two directions are deliberately asymmetric. Encoding is canonical and
//! exhaustive: required fields are always written, default-valued optional
//! fields are omitted entirely (never written as null). Decoding is
//! maximally tolerant: the document may have been hand-edited, written by an
//! older build, or partially corrupted, and a single bad record must not
//! block loading the rest of the collection.

use super::item::{COLOR_WHITE, Importance, ToDoItem, generate_uid};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

impl ToDoItem {
    /// Encode this item as its persisted JSON record
    ///
    /// `uid`, `text` and `isDone` are always present. `importance` (as its
    /// localized label), `color` and `deadline` are written only when they
    /// differ from their defaults.
    pub fn encode(&self) -> Value {
        let mut record = Map::new();

        record.insert("uid".into(), Value::from(self.uid.as_str()));
        record.insert("text".into(), Value::from(self.text.as_str()));
        record.insert("isDone".into(), Value::from(self.is_done));

        if self.importance != Importance::Normal {
            record.insert("importance".into(), Value::from(self.importance.label()));
        }
        if self.color != COLOR_WHITE {
            record.insert("color".into(), Value::from(self.color));
        }
        if let Some(deadline) = self.deadline {
            record.insert("deadline".into(), Value::from(deadline));
        }

        Value::Object(record)
    }

    /// Decode a persisted record back into an item
    ///
    /// Returns `None` when the record is not salvageable: not an object,
    /// `text` missing or not a string, or a present field holding the wrong
    /// type. Absent optional fields take their defaults, a record without a
    /// `uid` is treated as externally authored and assigned a fresh one, and
    /// an unrecognized importance label falls back to `Normal`. Never
    /// panics.
    pub fn decode(record: &Value) -> Option<ToDoItem> {
        let record = record.as_object()?;

        let text = record.get("text")?.as_str()?.to_owned();

        let uid = match record.get("uid") {
            Some(uid) => uid.as_str()?.to_owned(),
            None => generate_uid(),
        };

        let importance = record
            .get("importance")
            .and_then(Value::as_str)
            .map(Importance::from_label)
            .unwrap_or_default();

        let color = match record.get("color") {
            Some(color) => i32::try_from(color.as_i64()?).ok()?,
            None => COLOR_WHITE,
        };

        let deadline = match record.get("deadline") {
            Some(deadline) => Some(deadline.as_i64()?),
            None => None,
        };

        let is_done = match record.get("isDone") {
            Some(is_done) => is_done.as_bool()?,
            None => false,
        };

        Some(ToDoItem {
            uid,
            text,
            importance,
            color,
            deadline,
            is_done,
        })
    }
}

impl Serialize for ToDoItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.encode().serialize(serializer)
    }
}
