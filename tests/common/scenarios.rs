#![allow(dead_code)]

use super::*;

/// A class on `2024-01-08` with three students and no marks yet.
pub struct MondayClass {
    pub db: Database,
    pub class_id: i64,
    pub student_ids: Vec<i64>,
}

pub fn scenario_monday_class() -> MondayClass {
    let db = test_db();
    let class_id = fixtures::class_with_topics(&db, "Clase Lunes", "2024-01-08", &["Poomsae 1"]);
    let student_ids = ["Carla Ruiz", "ana López", "Bruno Díaz"]
        .iter()
        .map(|name| fixtures::student(&db, name))
        .collect();
    MondayClass {
        db,
        class_id,
        student_ids,
    }
}
