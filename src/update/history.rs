//! History navigation

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::HistoryMsg;
use crate::model::{CommandEditor, HistoryRecall};

/// Handle history messages
pub fn update_history(editor: &mut CommandEditor, msg: HistoryMsg) -> Option<Cmd> {
    match msg {
        HistoryMsg::Step(direction) => {
            let recall = editor.history.navigate(direction)?;
            Some(apply_recall(editor, recall))
        }
        HistoryMsg::SetIndex(index) => {
            let recall = editor.history.set_index(index)?;
            Some(apply_recall(editor, recall))
        }
        HistoryMsg::Replace(entries) => {
            if let Some(typed) = editor.history.replace(entries) {
                debug!(target: "history", "replaced while browsing, restoring typed text");
                editor.buffer.set_text(&typed);
                editor.completion.reset();
            }
            editor.refresh_ghost_at_end();
            None
        }
    }
}

/// Show the recalled text with the cursor at its end.
///
/// The returned callback re-places the cursor on the host's next turn; it is
/// dropped if the user edits or moves the cursor first.
fn apply_recall(editor: &mut CommandEditor, recall: HistoryRecall) -> Cmd {
    editor.ghost_suffix.clear();
    editor.completion.reset();
    editor.buffer.set_text(recall.text());

    if matches!(recall, HistoryRecall::Restored(_)) {
        editor.refresh_ghost();
    }

    Cmd::MoveCursorToEnd {
        generation: editor.cursor_generation,
    }
}
