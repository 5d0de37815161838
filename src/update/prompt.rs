//! Confirm/cancel keys, deferred callbacks and runtime settings

use tracing::debug;

use super::completion::{accept_completion, cancel_completion};
use crate::commands::Cmd;
use crate::messages::PromptMsg;
use crate::model::CommandEditor;

/// Handle prompt-level messages
pub fn update_prompt(editor: &mut CommandEditor, msg: PromptMsg) -> Option<Cmd> {
    match msg {
        PromptMsg::Confirm => {
            if editor.buffer.is_empty() {
                return None;
            }
            if editor.buffer.has_selection() {
                accept_completion(editor);
                return None;
            }
            Some(Cmd::Execute(editor.buffer.text().to_string()))
        }
        PromptMsg::Cancel => {
            if editor.buffer.is_empty() {
                return Some(Cmd::Escape);
            }
            if editor.buffer.has_selection() {
                cancel_completion(editor);
            } else {
                editor.clear();
            }
            None
        }
        PromptMsg::Clear => {
            editor.clear();
            None
        }
        PromptMsg::MoveCursorToEnd { generation } => {
            if generation == editor.cursor_generation {
                let end = editor.buffer.len_chars();
                editor.buffer.set_cursor(end);
            } else {
                debug!(
                    target: "prompt",
                    generation,
                    current = editor.cursor_generation,
                    "ignoring stale cursor move"
                );
            }
            None
        }
        PromptMsg::SetShowMatchingHistory(enabled) => {
            editor.show_matching_history = enabled;
            if enabled {
                editor.refresh_ghost_at_end();
            } else {
                editor.ghost_suffix.clear();
            }
            None
        }
        PromptMsg::SetAutoAcceptLongestCommonPrefix(enabled) => {
            editor.auto_accept_longest_common_prefix = enabled;
            None
        }
    }
}
