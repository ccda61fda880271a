use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The "no color" sentinel: packed ARGB white (`0xFFFFFFFF`)
///
/// Items carrying this value have no color of their own, and the field is
/// omitted from persisted documents.
pub const COLOR_WHITE: i32 = -1;

/// Importance level of a ToDo item
///
/// `Normal` is the default. It is never written to the persisted document;
/// the two non-default levels are written as localized labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Importance {
    Low,
    #[default]
    Normal,
    High,
}

const LABEL_LOW: &str = "низкая";
const LABEL_NORMAL: &str = "обычная";
const LABEL_HIGH: &str = "высокая";

// Labels written by older builds of the app; accepted when decoding only.
const LEGACY_LABEL_LOW: &str = "неважная";
const LEGACY_LABEL_HIGH: &str = "важная";

impl Importance {
    /// The localized label this level is persisted under
    ///
    /// `Normal`'s label exists for completeness but never reaches a
    /// document, since the field is omitted for `Normal` items.
    pub fn label(&self) -> &'static str {
        match self {
            Importance::Low => LABEL_LOW,
            Importance::Normal => LABEL_NORMAL,
            Importance::High => LABEL_HIGH,
        }
    }

    /// Look up a persisted label
    ///
    /// Any label not recognized as low or high (absent, empty, garbled, or
    /// a legacy spelling nobody remembers) maps to `Normal`, so hand-edited
    /// and legacy documents keep loading.
    pub fn from_label(label: &str) -> Self {
        match label {
            LABEL_LOW | LEGACY_LABEL_LOW => Importance::Low,
            LABEL_HIGH | LEGACY_LABEL_HIGH => Importance::High,
            _ => Importance::Normal,
        }
    }
}

/// One task in the list
///
/// Items are immutable value objects as far as the [`Store`](crate::Store)
/// is concerned: an edit is expressed by the caller as remove-then-add of a
/// new value carrying the same `uid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToDoItem {
    /// Unique identifier; generated at construction and immutable afterwards.
    /// The sole identity key for lookup and removal.
    pub uid: String,
    /// Task description
    pub text: String,
    /// Importance level (default: `Normal`)
    pub importance: Importance,
    /// Packed ARGB color, [`COLOR_WHITE`] when unset
    pub color: i32,
    /// Optional deadline as epoch milliseconds
    pub deadline: Option<i64>,
    /// Completion flag
    pub is_done: bool,
}

impl ToDoItem {
    /// Create an item with a fresh uid and all other fields at their defaults
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            uid: generate_uid(),
            text: text.into(),
            importance: Importance::Normal,
            color: COLOR_WHITE,
            deadline: None,
            is_done: false,
        }
    }

    /// Set the importance level
    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = importance;
        self
    }

    /// Set the color (packed ARGB)
    pub fn with_color(mut self, color: i32) -> Self {
        self.color = color;
        self
    }

    /// Set the deadline from epoch milliseconds
    pub fn with_deadline(mut self, deadline: i64) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the completion flag
    pub fn with_done(mut self, is_done: bool) -> Self {
        self.is_done = is_done;
        self
    }

    /// The deadline as a UTC timestamp, if one is set
    pub fn deadline_utc(&self) -> Option<DateTime<Utc>> {
        self.deadline.and_then(DateTime::from_timestamp_millis)
    }

    /// Set the deadline from a UTC timestamp
    pub fn with_deadline_utc(self, deadline: DateTime<Utc>) -> Self {
        self.with_deadline(deadline.timestamp_millis())
    }
}

/// Generate a fresh globally unique item identifier
pub(crate) fn generate_uid() -> String {
    Uuid::new_v4().to_string()
}
