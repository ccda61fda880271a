//! ToDo List Persistence Library
//!
//! This library keeps an in-memory collection of ToDo items durably
//! synchronized with a single JSON document on local storage. Saving is
//! canonical and minimal (default-valued fields are omitted from the
//! document); loading is deliberately tolerant, so hand-edited or
//! legacy-shaped records degrade to skipped entries instead of failures.
//!
//! # Architecture
//!
//! The library follows a 2-layer architecture:
//! - **Domain Layer**: `model` module - The [`ToDoItem`] entity, its
//!   [`Importance`] level, and the encode/decode mapping to persisted records
//! - **Persistence Layer**: `storage` module - The [`Store`] owning the
//!   collection and its synchronized on-disk copy
//!
//! # Example
//!
//! ```no_run
//! use todo_store::{Importance, Store, ToDoItem};
//!
//! let mut store = Store::new("/data/app-files");
//! store.load();
//! store.add(ToDoItem::new("buy milk").with_importance(Importance::High));
//! ```

mod model;
mod storage;

// Re-export commonly used types
pub use model::{COLOR_WHITE, Importance, ToDoItem};
pub use storage::{DEFAULT_FILE_NAME, Store};
