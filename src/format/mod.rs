//! Output formatting for `dojang`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! JSON mode sends clean JSON to stdout with diagnostics to stderr.

mod context;
mod text;

pub use context::{OutputContext, OutputMode};
pub use text::{
    format_attendance_line, format_attendance_summary, format_class_details, format_class_line,
    format_student_line,
};
