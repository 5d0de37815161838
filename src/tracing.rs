//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! history, completion and ghost state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=history=debug,completion=trace` - scoped filtering
//! - `RUST_LOG=cmdedit::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/cmdedit/logs/cmdedit.log` with daily rotation.

use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::CommandEditor;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr and respects RUST_LOG (default `warn`).
/// File logging always records debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "cmdedit.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of editor state for diffing and dumping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    pub text: String,
    pub cursor: usize,
    pub selection: Option<(usize, usize)>,
    pub ghost: String,
    pub history_index: Option<usize>,
    pub completion_index: Option<usize>,
    pub candidates: usize,
}

impl StateSnapshot {
    pub fn from_editor(editor: &CommandEditor) -> Self {
        Self {
            text: editor.text().to_string(),
            cursor: editor.cursor(),
            selection: editor.selection(),
            ghost: editor.ghost_suffix().to_string(),
            history_index: editor.history().index(),
            completion_index: editor.completion().index(),
            candidates: editor.candidates().len(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.text != other.text {
            changes.push(format!("text: {:?} → {:?}", self.text, other.text));
        }
        if self.cursor != other.cursor {
            changes.push(format!("cursor: {} → {}", self.cursor, other.cursor));
        }
        if self.selection != other.selection {
            let status = match other.selection {
                Some((start, len)) => format!("{}+{}", start, len),
                None => "cleared".to_string(),
            };
            changes.push(format!("selection {}", status));
        }
        if self.ghost != other.ghost {
            changes.push(format!("ghost: {:?}", other.ghost));
        }
        if self.history_index != other.history_index {
            changes.push(format!(
                "history: {:?} → {:?}",
                self.history_index, other.history_index
            ));
        }
        if self.completion_index != other.completion_index || self.candidates != other.candidates
        {
            changes.push(format!(
                "completion: {}@{:?}",
                other.candidates, other.completion_index
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
