//! Text edits and cursor moves

use crate::commands::Cmd;
use crate::messages::{EditMsg, MoveTarget};
use crate::model::CommandEditor;

/// Handle text edit and cursor messages
pub fn update_edit(editor: &mut CommandEditor, msg: EditMsg) -> Option<Cmd> {
    match msg {
        EditMsg::InsertChar(ch) => {
            editor.buffer.insert_char(ch);
            on_text_edited(editor);
        }
        EditMsg::InsertText(text) => {
            if !text.is_empty() || editor.buffer.has_selection() {
                editor.buffer.insert_at_cursor(&text, false);
                on_text_edited(editor);
            }
        }
        EditMsg::DeleteBackward => {
            if editor.buffer.delete_backward() {
                on_text_edited(editor);
            }
        }
        EditMsg::DeleteForward => {
            if editor.buffer.delete_forward() {
                on_text_edited(editor);
            }
        }
        EditMsg::Move(target) => {
            move_cursor(editor, target, false);
            on_cursor_changed(editor);
        }
        EditMsg::MoveWithSelection(target) => {
            move_cursor(editor, target, true);
            on_cursor_changed(editor);
        }
        EditMsg::SelectAll => {
            editor.buffer.select_all();
            on_cursor_changed(editor);
        }
        EditMsg::TextEdited { text, cursor } => {
            editor.buffer.set_text(&text);
            editor.buffer.set_cursor(cursor);
            on_text_edited(editor);
        }
        EditMsg::CursorChanged { cursor, selection } => {
            match selection {
                Some((start, len)) if len > 0 => {
                    // Anchor at whichever end the cursor is not on
                    let end = start.saturating_add(len);
                    let anchor = if cursor == start { end } else { start };
                    let head = if cursor == start { start } else { end };
                    editor.buffer.set_selection(anchor, head);
                }
                _ => editor.buffer.set_cursor(cursor),
            }
            on_cursor_changed(editor);
        }
    }
    None
}

fn move_cursor(editor: &mut CommandEditor, target: MoveTarget, extend_selection: bool) {
    match target {
        MoveTarget::Left => editor.buffer.move_left(extend_selection),
        MoveTarget::Right => editor.buffer.move_right(extend_selection),
        MoveTarget::LineStart => editor.buffer.move_line_start(extend_selection),
        MoveTarget::LineEnd => editor.buffer.move_line_end(extend_selection),
    }
}

/// The user changed the text: drop completion, remember the typed text as
/// the history filter, and refresh the ghost.
fn on_text_edited(editor: &mut CommandEditor) {
    editor.bump_cursor_generation();
    editor.completion.reset();
    editor.history.set_prefix_filter(editor.buffer.text());
    editor.refresh_ghost_at_end();
}

/// The user moved the cursor or selection: any pending cycling is invalid.
fn on_cursor_changed(editor: &mut CommandEditor) {
    editor.bump_cursor_generation();
    editor.completion.reset();
    editor.refresh_ghost_at_end();
}
