//! Completion requests, cycling, acceptance and cancellation

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::{CompletionMsg, Direction};
use crate::model::CommandEditor;

/// Handle completion messages
pub fn update_completion(editor: &mut CommandEditor, msg: CompletionMsg) -> Option<Cmd> {
    match msg {
        CompletionMsg::Step(Direction::Forward) if !editor.completion.has_candidates() => {
            request_completion(editor)
        }
        CompletionMsg::Step(direction) => {
            navigate_completion(editor, direction);
            None
        }
        CompletionMsg::Supply {
            request_id,
            candidates,
        } => {
            if editor.completion.pending_request() != Some(request_id) {
                debug!(
                    target: "completion",
                    request_id,
                    pending = ?editor.completion.pending_request(),
                    "discarding stale completion response"
                );
                return None;
            }
            set_candidates(editor, candidates);
            None
        }
        CompletionMsg::SetCandidates(candidates) => {
            set_candidates(editor, candidates);
            None
        }
        CompletionMsg::Accept => {
            accept_completion(editor);
            None
        }
        CompletionMsg::Cancel => {
            cancel_completion(editor);
            None
        }
        CompletionMsg::Reset => {
            editor.completion.reset();
            None
        }
    }
}

/// Ask the host for candidates, unless a request is already pending
fn request_completion(editor: &mut CommandEditor) -> Option<Cmd> {
    if editor.completion.is_requested() {
        debug!(target: "completion", "request already pending");
        return None;
    }
    let request_id = editor.next_request_id();
    editor.completion.mark_requested(request_id);
    Some(Cmd::AskCompletion {
        command: editor.buffer.text().to_string(),
        cursor_pos: editor.buffer.cursor(),
        request_id,
    })
}

/// Install candidates; with an active request this may insert their common
/// prefix and propose the first one.
pub(crate) fn set_candidates(editor: &mut CommandEditor, candidates: Vec<String>) {
    let installed = editor
        .completion
        .install(candidates, editor.auto_accept_longest_common_prefix);

    if let Some(prefix) = installed.insert_prefix {
        // Editor-driven insertion: must not feed back into a completion reset
        editor.buffer.insert_at_cursor(&prefix, false);
        editor.refresh_ghost_at_end();
    }

    if installed.propose_first {
        navigate_completion(editor, Direction::Forward);
    }
}

/// Propose the previous/next candidate as selected text.
/// Stepping past either end leaves everything unchanged.
pub(crate) fn navigate_completion(editor: &mut CommandEditor, direction: Direction) {
    let Some(candidate) = editor.completion.cycle(direction) else {
        return;
    };
    let candidate = candidate.to_string();
    set_current_completion(editor, &candidate);
}

fn set_current_completion(editor: &mut CommandEditor, candidate: &str) {
    editor.buffer.insert_at_cursor(candidate, true);
    editor.refresh_ghost_at_end();
}

/// Turn the selected proposal into plain text
pub(crate) fn accept_completion(editor: &mut CommandEditor) {
    if !editor.buffer.has_selection() {
        return;
    }
    let accepted = editor.buffer.selected_text();
    cancel_completion(editor);
    editor.buffer.insert_at_cursor(&accepted, false);
    editor.completion.reset();
    editor.refresh_ghost_at_end();
    debug!(target: "completion", %accepted, "completion accepted");
}

/// Remove the selected proposal
pub(crate) fn cancel_completion(editor: &mut CommandEditor) {
    if !editor.buffer.has_selection() {
        return;
    }
    set_current_completion(editor, "");
    editor.completion.reset();
}
