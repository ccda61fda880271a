use crate::model::ToDoItem;
use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Conventional document name inside the application's private directory
pub const DEFAULT_FILE_NAME: &str = "todos.json";

/// File-backed store for the ToDo collection
///
/// Owns the authoritative in-memory list and keeps it synchronized with a
/// single JSON document: every mutation updates memory first, then rewrites
/// the whole file. No failure here ever surfaces to the caller as an error;
/// load and persist problems are logged and the in-memory state stays
/// authoritative, so memory may run ahead of disk until the next successful
/// save.
///
/// One `Store` instance exclusively owns its storage location. Sharing a
/// location between instances or processes is unsupported (last writer wins
/// at whole-document granularity).
pub struct Store {
    file_path: PathBuf,
    items: Vec<ToDoItem>,
}

impl Store {
    /// Create a store over `todos.json` inside `dir`
    ///
    /// `dir` is the application-private directory supplied by the host. No
    /// I/O happens until [`load`](Store::load) or the first mutation.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_file_name(dir, DEFAULT_FILE_NAME)
    }

    /// Create a store over a custom document name inside `dir`
    pub fn with_file_name(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self {
            file_path: dir.as_ref().join(file_name),
            items: Vec::new(),
        }
    }

    /// Path of the backing document
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read-only view of the collection, in document/insertion order
    pub fn items(&self) -> &[ToDoItem] {
        &self.items
    }

    /// Replace the collection with the document's content
    ///
    /// A missing file is not an error: the collection stays empty and the
    /// call completes. Records that fail to decode are skipped with a
    /// warning. If the document itself is unreadable or not a JSON array,
    /// the error is logged and the collection is left in its prior state.
    pub fn load(&mut self) {
        match self.read_items() {
            Ok(Some(items)) => {
                info!(
                    "loaded {} items from {}",
                    items.len(),
                    self.file_path.display()
                );
                self.items = items;
            }
            Ok(None) => {
                info!("no file at {}, starting empty", self.file_path.display());
            }
            Err(e) => {
                error!("failed to load {}: {:#}", self.file_path.display(), e);
            }
        }
    }

    /// Append an item and persist the whole collection
    ///
    /// The caller supplies a freshly constructed item; uids are not checked
    /// for collisions here.
    pub fn add(&mut self, item: ToDoItem) {
        debug!("adding item {}", item.uid);
        self.items.push(item);
        self.persist();
    }

    /// Remove every item with the given uid and persist the whole collection
    ///
    /// Removing an unknown uid is a no-op.
    pub fn remove(&mut self, uid: &str) {
        debug!("removing item {uid}");
        self.items.retain(|item| item.uid != uid);
        self.persist();
    }

    fn read_items(&self) -> Result<Option<Vec<ToDoItem>>> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("reading {}", self.file_path.display()))?;
        let records: Vec<Value> = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.file_path.display()))?;

        let mut items = Vec::with_capacity(records.len());
        for record in &records {
            match ToDoItem::decode(record) {
                Some(item) => items.push(item),
                None => warn!("skipping malformed record: {record}"),
            }
        }
        Ok(Some(items))
    }

    fn persist(&self) {
        if let Err(e) = self.write_items() {
            error!("failed to save {}: {:#}", self.file_path.display(), e);
        }
    }

    fn write_items(&self) -> Result<()> {
        debug!("saving {} items", self.items.len());
        let content = serde_json::to_string(&self.items)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("writing {}", self.file_path.display()))?;
        Ok(())
    }
}
