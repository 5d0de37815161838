//! cmdedit - single-line command editor core
//!
//! This crate provides the state machine behind an interactive command
//! prompt: history recall with prefix filtering, ghost suggestions from
//! history, and asynchronous tab completion. Hosts feed [`Msg`] values into
//! [`update()`] and act on the [`Cmd`] it returns.

pub mod commands;
pub mod completer;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod messages;
pub mod model;
pub mod tokenizer;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use completer::WordCompleter;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::CommandEditor;
pub use update::update;
