//! Model module - the command editor state
//!
//! The editor owns the buffer, the history and the completion state. Hosts
//! read it through the projections below and change it only via
//! [`crate::update::update`].

pub mod completion;
pub mod history;

pub use completion::{longest_common_prefix, CandidatesInstalled, CompletionState};
pub use history::{CommandHistory, HistoryRecall};

use tracing::debug;

use crate::config::EditorConfig;
use crate::editable::EditBuffer;

/// The command line editor state machine.
///
/// Browsing history (`history.index()` is set) and an active completion
/// (candidates loaded, the proposal shown as the buffer selection) are
/// independent axes that can combine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEditor {
    pub(crate) buffer: EditBuffer,
    pub(crate) history: CommandHistory,
    pub(crate) completion: CompletionState,
    pub(crate) ghost_suffix: String,
    pub(crate) show_matching_history: bool,
    pub(crate) auto_accept_longest_common_prefix: bool,
    /// Last issued completion request id
    pub(crate) request_counter: u64,
    /// Bumped by every user edit or cursor move; stale deferred cursor moves compare against it
    pub(crate) cursor_generation: u64,
}

impl Default for CommandEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandEditor {
    pub fn new() -> Self {
        Self {
            buffer: EditBuffer::new(),
            history: CommandHistory::new(),
            completion: CompletionState::new(),
            ghost_suffix: String::new(),
            show_matching_history: false,
            auto_accept_longest_common_prefix: true,
            request_counter: 0,
            cursor_generation: 0,
        }
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            show_matching_history: config.show_matching_history,
            auto_accept_longest_common_prefix: config.auto_accept_longest_common_prefix,
            ..Self::new()
        }
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// `(start, length)` of the selection, if any
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.buffer.selection_range()
    }

    /// Dim trailing suggestion for the host to render; empty means none
    pub fn ghost_suffix(&self) -> &str {
        &self.ghost_suffix
    }

    pub fn candidates(&self) -> &[String] {
        self.completion.candidates()
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn completion(&self) -> &CompletionState {
        &self.completion
    }

    pub fn is_browsing_history(&self) -> bool {
        self.history.is_browsing()
    }

    pub fn is_completion_active(&self) -> bool {
        self.completion.has_candidates() && self.buffer.has_selection()
    }

    pub fn show_matching_history(&self) -> bool {
        self.show_matching_history
    }

    pub fn auto_accept_longest_common_prefix(&self) -> bool {
        self.auto_accept_longest_common_prefix
    }

    pub fn cursor_generation(&self) -> u64 {
        self.cursor_generation
    }

    /// Look up the most recent history entry extending the text and keep its
    /// remainder as the ghost suffix, or clear the ghost.
    pub(crate) fn refresh_ghost(&mut self) {
        let suffix = if self.show_matching_history && !self.buffer.is_empty() {
            self.history.matching_suffix(self.buffer.text())
        } else {
            None
        };

        match suffix {
            Some(suffix) => {
                if self.ghost_suffix != suffix {
                    debug!(target: "ghost", %suffix, "ghost suggestion");
                    self.ghost_suffix = suffix.to_string();
                }
            }
            None => self.ghost_suffix.clear(),
        }
    }

    /// Recompute the ghost when the cursor is at the end, drop it otherwise
    pub(crate) fn refresh_ghost_at_end(&mut self) {
        if self.buffer.cursor_at_end() {
            self.refresh_ghost();
        } else {
            self.ghost_suffix.clear();
        }
    }

    pub(crate) fn next_request_id(&mut self) -> u64 {
        self.request_counter += 1;
        self.request_counter
    }

    pub(crate) fn bump_cursor_generation(&mut self) {
        self.cursor_generation += 1;
    }

    /// Clear the text and reset history browsing and completion
    pub(crate) fn clear(&mut self) {
        self.buffer.clear();
        self.ghost_suffix.clear();
        self.history.reset();
        self.completion.reset();
        self.bump_cursor_generation();
    }

    /// Debug-only validation of the editor invariants.
    /// Panics with `context` in the message when one is broken.
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        let len = self.buffer.len_chars();
        let selection = self.buffer.selection();
        debug_assert!(
            self.buffer.cursor() <= len,
            "[{}] cursor {} past end {}",
            context,
            self.buffer.cursor(),
            len
        );
        debug_assert!(
            selection.end() <= len,
            "[{}] selection {:?} past end {}",
            context,
            selection,
            len
        );
        debug_assert_eq!(
            selection.head,
            self.buffer.cursor(),
            "[{}] selection head must match cursor",
            context
        );
        if let Some(index) = self.history.index() {
            debug_assert!(
                index < self.history.len(),
                "[{}] history index {} out of range",
                context,
                index
            );
        }
        if let Some(index) = self.completion.index() {
            debug_assert!(
                index < self.completion.candidates().len(),
                "[{}] completion index {} without matching candidate",
                context,
                index
            );
        }
        debug_assert!(
            self.completion.pending_request().is_none() || self.completion.is_requested(),
            "[{}] pending completion request without requested flag",
            context
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants_with_context(&self, _context: &str) {}
}
