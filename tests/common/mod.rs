//! Common test utilities for integration tests

use tempfile::TempDir;
use todo_store::Store;

/// Create a store backed by a fresh temporary directory
///
/// The `TempDir` must be kept alive for the duration of the test, or the
/// backing directory disappears under the store.
pub fn temp_store() -> (Store, TempDir) {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path());
    (store, dir)
}
