#![allow(dead_code)]

use dojang::storage::Database;
use std::path::PathBuf;
use std::sync::Once;
use tempfile::TempDir;

pub mod assertions;
pub mod fixtures;
pub mod scenarios;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        dojang::logging::init_test_logging();
    });
}

pub fn test_db() -> Database {
    init_test_logging();
    Database::open_in_memory().expect("Failed to create test database")
}

pub fn test_db_path(dir: &TempDir) -> PathBuf {
    dir.path().join("taekwondo.db")
}

pub fn test_db_with_dir() -> (Database, TempDir) {
    init_test_logging();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = Database::open(&test_db_path(&dir)).expect("Failed to create test database");
    (storage, dir)
}
