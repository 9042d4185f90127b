//! Output context and mode detection.
//!
//! # Mode Selection Logic
//!
//! 1. `--json` flag (or `json: true` in config) → JSON mode
//! 2. `--quiet` flag → Quiet mode (errors only)
//! 3. Otherwise → Plain text

use crate::error::{DojangError, Result};
use serde::Serialize;

/// Output mode determining formatting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable lines on stdout.
    #[default]
    Plain,

    /// JSON output for machine consumption.
    Json,

    /// Nothing on stdout; failures still reach stderr.
    Quiet,
}

/// Where command results and user-facing messages go.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputContext {
    mode: OutputMode,
}

impl OutputContext {
    /// JSON beats quiet: a script asking for JSON still gets its payload.
    #[must_use]
    pub const fn from_flags(json: bool, quiet: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else if quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Plain
        };
        Self { mode }
    }

    #[must_use]
    pub const fn mode(&self) -> OutputMode {
        self.mode
    }

    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self.mode, OutputMode::Json)
    }

    /// Print a line of text unless output is JSON or quiet.
    pub fn line(&self, text: impl AsRef<str>) {
        if matches!(self.mode, OutputMode::Plain) {
            println!("{}", text.as_ref());
        }
    }

    /// Print a success message (the "saved" confirmation after a write).
    pub fn success(&self, text: impl AsRef<str>) {
        self.line(format!("\u{2713} {}", text.as_ref()));
    }

    /// Print a value as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DojangError::Json`] if the value cannot be serialized;
    /// nothing is printed in that case.
    pub fn json_pretty<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(|err| {
            tracing::warn!(error = %err, "Failed to serialize output");
            DojangError::Json(err)
        })?;
        println!("{json}");
        Ok(())
    }

    /// Report a failure to the user on stderr. Shown in every mode.
    pub fn failure(&self, text: impl AsRef<str>) {
        eprintln!("Error: {}", text.as_ref());
    }
}
