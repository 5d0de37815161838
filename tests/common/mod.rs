//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use cmdedit::messages::{CompletionMsg, Direction, EditMsg, HistoryMsg, Msg, PromptMsg};
use cmdedit::update::update;
use cmdedit::{Cmd, CommandEditor, EditorConfig};

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Editor with default settings and `text` typed in
pub fn test_editor(text: &str) -> CommandEditor {
    let mut editor = CommandEditor::new();
    type_text(&mut editor, text);
    editor
}

/// Editor that shows matching history, with `history` installed
pub fn editor_with_history(history: &[&str]) -> CommandEditor {
    let config = EditorConfig {
        show_matching_history: true,
        ..EditorConfig::default()
    };
    let mut editor = CommandEditor::with_config(&config);
    update(
        &mut editor,
        Msg::History(HistoryMsg::Replace(strings(history))),
    );
    editor
}

/// Type text one character at a time, like a user would
pub fn type_text(editor: &mut CommandEditor, text: &str) {
    for ch in text.chars() {
        update(editor, Msg::Edit(EditMsg::InsertChar(ch)));
    }
}

/// Host-reported edit that leaves the cursor at `cursor`
pub fn text_edited(editor: &mut CommandEditor, text: &str, cursor: usize) -> Option<Cmd> {
    update(
        editor,
        Msg::Edit(EditMsg::TextEdited {
            text: text.to_string(),
            cursor,
        }),
    )
}

pub fn cursor_moved(editor: &mut CommandEditor, cursor: usize) -> Option<Cmd> {
    update(
        editor,
        Msg::Edit(EditMsg::CursorChanged {
            cursor,
            selection: None,
        }),
    )
}

/// Up arrow, delivering the deferred cursor move like a host would
pub fn history_up(editor: &mut CommandEditor) -> Option<Cmd> {
    history_step(editor, Direction::Backward)
}

/// Down arrow, delivering the deferred cursor move like a host would
pub fn history_down(editor: &mut CommandEditor) -> Option<Cmd> {
    history_step(editor, Direction::Forward)
}

fn history_step(editor: &mut CommandEditor, direction: Direction) -> Option<Cmd> {
    let cmd = update(editor, Msg::History(HistoryMsg::Step(direction)));
    if let Some(Cmd::MoveCursorToEnd { generation }) = cmd {
        update(
            editor,
            Msg::Prompt(PromptMsg::MoveCursorToEnd { generation }),
        );
    }
    cmd
}

pub fn tab(editor: &mut CommandEditor) -> Option<Cmd> {
    update(
        editor,
        Msg::Completion(CompletionMsg::Step(Direction::Forward)),
    )
}

pub fn shift_tab(editor: &mut CommandEditor) -> Option<Cmd> {
    update(
        editor,
        Msg::Completion(CompletionMsg::Step(Direction::Backward)),
    )
}

/// Request id carried by an `AskCompletion`
pub fn request_id(cmd: &Option<Cmd>) -> u64 {
    match cmd {
        Some(Cmd::AskCompletion { request_id, .. }) => *request_id,
        other => panic!("expected AskCompletion, got {:?}", other),
    }
}

/// Press tab and answer the request with `candidates`
pub fn complete_with(editor: &mut CommandEditor, candidates: &[&str]) {
    let cmd = tab(editor);
    let request_id = request_id(&cmd);
    supply(editor, request_id, candidates);
}

pub fn supply(editor: &mut CommandEditor, request_id: u64, candidates: &[&str]) -> Option<Cmd> {
    update(
        editor,
        Msg::Completion(CompletionMsg::Supply {
            request_id,
            candidates: strings(candidates),
        }),
    )
}

/// The selected text, if any
pub fn selected(editor: &CommandEditor) -> Option<String> {
    editor.selection().map(|(start, len)| {
        editor.text().chars().skip(start).take(len).collect()
    })
}
