#![allow(dead_code)]

use dojang::model::{NewClass, NewStudent};
use dojang::repository::{ClassRepository, StudentRepository};
use dojang::storage::Database;

pub fn student(db: &Database, full_name: &str) -> i64 {
    StudentRepository::new(db)
        .create(&NewStudent::new(full_name))
        .expect("create student")
}

pub fn class(db: &Database, title: &str, class_date: &str) -> i64 {
    ClassRepository::new(db)
        .create(&NewClass::new(title, class_date))
        .expect("create class")
}

pub fn class_with_topics(db: &Database, title: &str, class_date: &str, topics: &[&str]) -> i64 {
    ClassRepository::new(db)
        .create(&NewClass::new(title, class_date).trainings(topics.iter().copied()))
        .expect("create class")
}
