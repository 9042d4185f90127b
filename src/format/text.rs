//! Plain-text rendering of school records.

use crate::model::{AttendanceEntry, Student, TrainingClass};
use std::fmt::Write as _;

/// One roster line: `[id] Name · belt · joined YYYY-MM-DD`, with notes on an
/// indented line.
#[must_use]
pub fn format_student_line(student: &Student) -> String {
    let mut line = format!("[{}] {}", student.id, student.full_name);
    if let Some(belt) = &student.belt {
        let _ = write!(line, " \u{b7} {belt}");
    }
    if let Some(joined_at) = student.joined_at {
        let _ = write!(line, " \u{b7} joined {}", joined_at.date_naive());
    }
    if let Some(notes) = &student.notes {
        let _ = write!(line, "\n      {notes}");
    }
    line
}

/// One class line: `[id] date  Title (n topics)`.
#[must_use]
pub fn format_class_line(class: &TrainingClass) -> String {
    let mut line = format!("[{}] {}  {}", class.id, class.class_date, class.title);
    match class.trainings.len() {
        0 => {}
        1 => line.push_str(" (1 topic)"),
        n => {
            let _ = write!(line, " ({n} topics)");
        }
    }
    line
}

/// A class header block: title, date, description and topic list.
#[must_use]
pub fn format_class_details(class: &TrainingClass) -> String {
    let mut out = format!("{} \u{2014} {}\n", class.title, class.class_date);
    if let Some(description) = &class.description {
        let _ = writeln!(out, "{description}");
    }
    if class.trainings.is_empty() {
        out.push_str("No training topics.\n");
    } else {
        out.push_str("Training topics:\n");
        for (i, topic) in class.trainings.iter().enumerate() {
            let _ = writeln!(out, "  {}. {topic}", i + 1);
        }
    }
    out
}

/// One attendance line: `[x] Name` or `[ ] Name`.
#[must_use]
pub fn format_attendance_line(entry: &AttendanceEntry) -> String {
    let check = if entry.present { 'x' } else { ' ' };
    let mut line = format!("[{check}] {} (#{})", entry.student.full_name, entry.student.id);
    if let Some(belt) = &entry.student.belt {
        let _ = write!(line, " \u{b7} {belt}");
    }
    line
}

/// `present/total` summary for a sheet.
#[must_use]
pub fn format_attendance_summary(entries: &[AttendanceEntry]) -> String {
    let present = entries.iter().filter(|e| e.present).count();
    format!("{present}/{} present", entries.len())
}
