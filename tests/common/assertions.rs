#![allow(dead_code)]

use dojang::storage::Database;
use rusqlite::params;
use tracing::info;

/// Number of stored attendance rows for a (class, student) pair.
pub fn mark_rows(db: &Database, class_id: i64, student_id: i64) -> i64 {
    db.query(
        "SELECT COUNT(*) FROM attendance WHERE class_id = ? AND student_id = ?",
        params![class_id, student_id],
        |row| row.get(0),
    )
    .expect("count marks")[0]
}

pub fn total_mark_rows(db: &Database) -> i64 {
    db.query("SELECT COUNT(*) FROM attendance", [], |row| row.get(0))
        .expect("count marks")[0]
}

/// Names must be in case-insensitive (ASCII) ascending order.
pub fn assert_sorted_nocase(names: &[String]) {
    info!("Asserting {} names are sorted", names.len());
    let folded: Vec<String> = names.iter().map(|n| n.to_ascii_lowercase()).collect();
    let mut expected = folded.clone();
    expected.sort();
    assert_eq!(folded, expected, "names not sorted case-insensitively: {names:?}");
}
