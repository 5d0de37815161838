//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. They are the intents
//! a host delivers after translating its raw input events.

/// Direction for history and completion stepping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Older history entry / previous candidate (Up, Shift+Tab)
    Backward,
    /// Newer history entry / next candidate (Down, Tab)
    Forward,
}

impl Direction {
    pub fn delta(self) -> isize {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

/// Target for cursor movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTarget {
    Left,
    Right,
    LineStart,
    LineEnd,
}

/// Text and cursor changes, either performed by the editor's own buffer
/// primitives or reported by a host that owns its own text widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMsg {
    /// Insert a single character
    InsertChar(char),
    /// Insert a string (e.g., from paste)
    InsertText(String),
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character after cursor (Delete)
    DeleteForward,
    /// Move cursor without affecting selection
    Move(MoveTarget),
    /// Move cursor and extend selection
    MoveWithSelection(MoveTarget),
    /// Select all text
    SelectAll,
    /// The host's widget text was edited by the user
    TextEdited { text: String, cursor: usize },
    /// The host's widget cursor or selection moved (selection is `(start, len)`)
    CursorChanged {
        cursor: usize,
        selection: Option<(usize, usize)>,
    },
}

/// Command history messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryMsg {
    /// Up (Backward) / Down (Forward)
    Step(Direction),
    /// Replace the whole history list
    Replace(Vec<String>),
    /// Select an explicit entry; `len` means "back to the typed text"
    SetIndex(usize),
}

/// Completion messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionMsg {
    /// Tab (Forward) requests or cycles; Shift+Tab (Backward) cycles back
    Step(Direction),
    /// Host response to an `AskCompletion` command
    Supply {
        request_id: u64,
        candidates: Vec<String>,
    },
    /// Install candidates without a request (never auto-inserted)
    SetCandidates(Vec<String>),
    /// Accept the proposed candidate
    Accept,
    /// Remove the proposed candidate
    Cancel,
    /// Drop candidates and any pending request
    Reset,
}

/// Prompt-level messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptMsg {
    /// Enter
    Confirm,
    /// Escape
    Cancel,
    /// Clear text and reset history/completion state
    Clear,
    /// Deferred cursor placement scheduled by history navigation
    MoveCursorToEnd { generation: u64 },
    SetShowMatchingHistory(bool),
    SetAutoAcceptLongestCommonPrefix(bool),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Edit(EditMsg),
    History(HistoryMsg),
    Completion(CompletionMsg),
    Prompt(PromptMsg),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Backward.delta(), -1);
        assert_eq!(Direction::Forward.delta(), 1);
    }
}
