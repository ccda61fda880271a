//! ToDo item domain model
//!
//! This module contains the core data structures and their mapping to the
//! persisted document format. It is split into submodules:
//! - `item`: The [`ToDoItem`] entity and its [`Importance`] level
//! - `serde_impl`: Encoding/decoding between items and their JSON records

mod item;
mod serde_impl;

// Re-export all public types
pub use item::{COLOR_WHITE, Importance, ToDoItem};
