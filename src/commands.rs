//! Command types for the Elm-style architecture
//!
//! Commands are the outbound events a host acts on after an update.

/// Outbound events for the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Run the command. The host is expected to clear the editor and
    /// replace the history afterwards.
    Execute(String),
    /// Ask an external provider for completions of the token under the cursor.
    /// Answer with `CompletionMsg::Supply` carrying the same `request_id`.
    AskCompletion {
        command: String,
        cursor_pos: usize,
        request_id: u64,
    },
    /// Escape pressed on an empty editor
    Escape,
    /// Schedule `PromptMsg::MoveCursorToEnd { generation }` for the next turn
    MoveCursorToEnd { generation: u64 },
}
