//! Database schema definition.

use rusqlite::{Connection, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// The complete SQL schema for the school database.
///
/// Column names and defaults match the files written by the mobile
/// app (`taekwondo.db`) so an existing database opens unchanged.
pub const SCHEMA_SQL: &str = r"
    -- Class sessions. `trainings` holds a JSON array of topic labels.
    CREATE TABLE IF NOT EXISTS classes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        class_date TEXT NOT NULL,
        trainings TEXT DEFAULT '[]',
        created_at TEXT DEFAULT CURRENT_TIMESTAMP
    );
    CREATE INDEX IF NOT EXISTS idx_classes_date ON classes(class_date DESC, id DESC);

    -- Roster
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        full_name TEXT NOT NULL,
        belt TEXT,
        notes TEXT,
        joined_at TEXT DEFAULT CURRENT_TIMESTAMP
    );
    CREATE INDEX IF NOT EXISTS idx_students_name ON students(full_name COLLATE NOCASE);

    -- Attendance marks: at most one per (class, student)
    CREATE TABLE IF NOT EXISTS attendance (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        class_id INTEGER NOT NULL,
        student_id INTEGER NOT NULL,
        present INTEGER NOT NULL DEFAULT 0,
        updated_at TEXT DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (class_id) REFERENCES classes(id) ON DELETE CASCADE,
        FOREIGN KEY (student_id) REFERENCES students(id) ON DELETE CASCADE,
        UNIQUE(class_id, student_id)
    );
    CREATE INDEX IF NOT EXISTS idx_attendance_student ON attendance(student_id);
";

/// Apply the schema to the database.
///
/// Safe to run on every start: every statement is `IF NOT EXISTS`. The DDL
/// runs inside one transaction so a failure leaves the file untouched.
///
/// # Errors
///
/// Returns an error if the SQL execution fails or pragmas cannot be set.
pub fn apply_schema(conn: &mut Connection) -> Result<()> {
    // Must be set outside a transaction; SQLite ignores it otherwise.
    conn.pragma_update(None, "foreign_keys", "ON")?;

    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    tx.pragma_update(None, "user_version", CURRENT_SCHEMA_VERSION)?;
    tx.commit()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn table_names(conn: &Connection) -> HashSet<String> {
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<HashSet<String>>>()
            .unwrap()
    }

    #[test]
    fn test_apply_schema() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_schema(&mut conn).expect("Failed to apply schema");

        let tables = table_names(&conn);
        for table in ["classes", "students", "attendance"] {
            assert!(tables.contains(table), "missing table: {table}");
        }

        let foreign_keys: i32 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(foreign_keys, 1);

        let version: i32 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, CURRENT_SCHEMA_VERSION);
    }

    #[test]
    fn test_apply_schema_is_idempotent() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_schema(&mut conn).unwrap();
        conn.execute("INSERT INTO students (full_name) VALUES ('Ana')", [])
            .unwrap();

        apply_schema(&mut conn).expect("second apply");

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_attendance_pair_is_unique() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_schema(&mut conn).unwrap();
        conn.execute(
            "INSERT INTO classes (title, class_date) VALUES ('Lunes', '2024-01-08')",
            [],
        )
        .unwrap();
        conn.execute("INSERT INTO students (full_name) VALUES ('Ana')", [])
            .unwrap();
        conn.execute(
            "INSERT INTO attendance (class_id, student_id, present) VALUES (1, 1, 1)",
            [],
        )
        .unwrap();

        let duplicate = conn.execute(
            "INSERT INTO attendance (class_id, student_id, present) VALUES (1, 1, 0)",
            [],
        );
        assert!(duplicate.is_err());
    }

    #[test]
    fn test_defaults_are_applied() {
        let mut conn = Connection::open_in_memory().unwrap();
        apply_schema(&mut conn).unwrap();
        conn.execute(
            "INSERT INTO classes (title, class_date) VALUES ('Lunes', '2024-01-08')",
            [],
        )
        .unwrap();

        let (trainings, created_at): (String, Option<String>) = conn
            .query_row("SELECT trainings, created_at FROM classes", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();
        assert_eq!(trainings, "[]");
        assert!(created_at.is_some());
    }
}
