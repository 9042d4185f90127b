mod common;

use common::assertions::{mark_rows, total_mark_rows};
use common::scenarios::scenario_monday_class;
use common::{fixtures, test_db};
use dojang::DojangError;
use dojang::repository::AttendanceRepository;

#[test]
fn unmarked_roster_is_all_absent() {
    let scenario = scenario_monday_class();
    let entries = AttendanceRepository::new(&scenario.db)
        .for_class(scenario.class_id)
        .unwrap();

    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| !e.present));
    let names: Vec<&str> = entries.iter().map(|e| e.student.full_name.as_str()).collect();
    assert_eq!(names, vec!["ana López", "Bruno Díaz", "Carla Ruiz"]);
}

#[test]
fn reading_never_creates_marks() {
    let scenario = scenario_monday_class();
    let repo = AttendanceRepository::new(&scenario.db);
    repo.for_class(scenario.class_id).unwrap();
    repo.for_class(scenario.class_id).unwrap();

    assert_eq!(total_mark_rows(&scenario.db), 0);
    assert!(repo.mark(scenario.class_id, scenario.student_ids[0]).unwrap().is_none());
}

#[test]
fn repeated_set_status_keeps_one_row() {
    let scenario = scenario_monday_class();
    let repo = AttendanceRepository::new(&scenario.db);
    let student = scenario.student_ids[1];

    repo.set_status(scenario.class_id, student, true).unwrap();
    repo.set_status(scenario.class_id, student, true).unwrap();
    repo.set_status(scenario.class_id, student, false).unwrap();

    assert_eq!(mark_rows(&scenario.db, scenario.class_id, student), 1);
    let mark = repo.mark(scenario.class_id, student).unwrap().unwrap();
    assert!(!mark.present);
    assert_eq!(mark.class_id, scenario.class_id);
    assert_eq!(mark.student_id, student);
}

#[test]
fn marks_are_scoped_to_their_class() {
    let db = test_db();
    let monday = fixtures::class(&db, "Lunes", "2024-01-08");
    let wednesday = fixtures::class(&db, "Miércoles", "2024-01-10");
    let ana = fixtures::student(&db, "Ana");

    let repo = AttendanceRepository::new(&db);
    repo.set_status(monday, ana, true).unwrap();

    assert!(repo.for_class(monday).unwrap()[0].present);
    assert!(!repo.for_class(wednesday).unwrap()[0].present);
}

#[test]
fn dangling_ids_are_rejected() {
    let db = test_db();
    let class_id = fixtures::class(&db, "Lunes", "2024-01-08");
    let repo = AttendanceRepository::new(&db);

    let err = repo.set_status(class_id, 999, true).unwrap_err();
    assert!(matches!(err, DojangError::Execution(_)));

    let ana = fixtures::student(&db, "Ana");
    let err = repo.set_status(999, ana, true).unwrap_err();
    assert!(matches!(err, DojangError::Execution(_)));
    assert_eq!(total_mark_rows(&db), 0);
}

#[test]
fn unknown_class_shows_every_student_absent() {
    let db = test_db();
    fixtures::student(&db, "Ana");
    let entries = AttendanceRepository::new(&db).for_class(4242).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].present);
}

#[test]
fn monday_scenario() {
    let db = test_db();
    let ana = fixtures::student(&db, "Ana López");
    let class_id = fixtures::class(&db, "Clase Lunes", "2024-01-08");

    let repo = AttendanceRepository::new(&db);
    repo.set_status(class_id, ana, true).unwrap();

    let entries = repo.for_class(class_id).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].student.full_name, "Ana López");
    assert!(entries[0].present);
}
