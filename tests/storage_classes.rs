mod common;

use common::{fixtures, test_db};
use dojang::DojangError;
use dojang::model::NewClass;
use dojang::repository::ClassRepository;
use rusqlite::params;

#[test]
fn list_is_newest_date_first() {
    let db = test_db();
    fixtures::class(&db, "Enero", "2024-01-08");
    fixtures::class(&db, "Marzo", "2024-03-04");
    fixtures::class(&db, "Febrero", "2024-02-05");

    let titles: Vec<String> = ClassRepository::new(&db)
        .list()
        .unwrap()
        .into_iter()
        .map(|c| c.title)
        .collect();
    assert_eq!(titles, vec!["Marzo", "Febrero", "Enero"]);
}

#[test]
fn same_date_breaks_ties_by_latest_insert() {
    let db = test_db();
    let first = fixtures::class(&db, "Mañana", "2024-01-08");
    let second = fixtures::class(&db, "Tarde", "2024-01-08");

    let ids: Vec<i64> = ClassRepository::new(&db)
        .list()
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![second, first]);
}

#[test]
fn trainings_round_trip_in_order() {
    let db = test_db();
    let id = fixtures::class_with_topics(&db, "Clase Lunes", "2024-01-08", &["Poomsae 1", "Kyorugi"]);

    let classes = ClassRepository::new(&db).list().unwrap();
    let class = classes.iter().find(|c| c.id == id).unwrap();
    assert_eq!(class.trainings, vec!["Poomsae 1", "Kyorugi"]);
}

#[test]
fn create_trims_title_and_description() {
    let db = test_db();
    let repo = ClassRepository::new(&db);
    let id = repo
        .create(&NewClass::new("  Clase Lunes ", "2024-01-08").description("  Formas  "))
        .unwrap();

    let class = repo.find(id).unwrap().unwrap();
    assert_eq!(class.title, "Clase Lunes");
    assert_eq!(class.description.as_deref(), Some("Formas"));
    assert!(class.trainings.is_empty());
}

#[test]
fn null_or_empty_topic_column_reads_as_empty() {
    let db = test_db();
    db.execute(
        "INSERT INTO classes (title, class_date, trainings) VALUES (?, ?, NULL)",
        params!["Sin temas", "2024-01-01"],
    )
    .unwrap();
    db.execute(
        "INSERT INTO classes (title, class_date, trainings) VALUES (?, ?, '')",
        params!["Vacía", "2024-01-02"],
    )
    .unwrap();

    let classes = ClassRepository::new(&db).list().unwrap();
    assert_eq!(classes.len(), 2);
    assert!(classes.iter().all(|c| c.trainings.is_empty()));
}

#[test]
fn corrupt_topic_column_is_reported() {
    let db = test_db();
    let ack = db
        .execute(
            "INSERT INTO classes (title, class_date, trainings) VALUES (?, ?, ?)",
            params!["Rota", "2024-01-01", "not json"],
        )
        .unwrap();

    let err = ClassRepository::new(&db).find(ack.last_insert_id).unwrap_err();
    assert!(matches!(err, DojangError::CorruptTopics { class_id, .. } if class_id == ack.last_insert_id));
}

#[test]
fn dates_are_not_validated_by_repository() {
    let db = test_db();
    let id = fixtures::class(&db, "Libre", "someday");
    let class = ClassRepository::new(&db).find(id).unwrap().unwrap();
    assert_eq!(class.class_date, "someday");
}
