//! Ghost suggestion tests - matching history shown after the cursor

mod common;

use cmdedit::messages::{EditMsg, HistoryMsg, MoveTarget, Msg, PromptMsg};
use cmdedit::update::update;
use common::{
    complete_with, cursor_moved, editor_with_history, history_up, strings, test_editor,
    type_text,
};

#[test]
fn test_ghost_shows_rest_of_matching_entry() {
    let mut editor = editor_with_history(&["foo bar"]);
    type_text(&mut editor, "foo");
    assert_eq!(editor.ghost_suffix(), " bar");
}

#[test]
fn test_most_recent_match_wins() {
    let mut editor = editor_with_history(&["git status", "git stash"]);
    type_text(&mut editor, "git st");
    assert_eq!(editor.ghost_suffix(), "ash");

    type_text(&mut editor, "at");
    assert_eq!(editor.ghost_suffix(), "us");
}

#[test]
fn test_no_ghost_when_disabled() {
    let mut editor = test_editor("");
    update(
        &mut editor,
        Msg::History(HistoryMsg::Replace(strings(&["foo bar"]))),
    );
    type_text(&mut editor, "foo");
    assert_eq!(editor.ghost_suffix(), "");

    update(&mut editor, Msg::Prompt(PromptMsg::SetShowMatchingHistory(true)));
    assert_eq!(editor.ghost_suffix(), " bar");

    update(&mut editor, Msg::Prompt(PromptMsg::SetShowMatchingHistory(false)));
    assert_eq!(editor.ghost_suffix(), "");
}

#[test]
fn test_no_ghost_for_empty_text() {
    let mut editor = editor_with_history(&["foo bar"]);
    type_text(&mut editor, "f");
    assert_eq!(editor.ghost_suffix(), "oo bar");

    update(&mut editor, Msg::Edit(EditMsg::DeleteBackward));
    assert_eq!(editor.text(), "");
    assert_eq!(editor.ghost_suffix(), "");
}

#[test]
fn test_no_ghost_without_match() {
    let mut editor = editor_with_history(&["foo bar"]);
    type_text(&mut editor, "bar");
    assert_eq!(editor.ghost_suffix(), "");
}

#[test]
fn test_ghost_cleared_when_cursor_leaves_end() {
    let mut editor = editor_with_history(&["foo bar"]);
    type_text(&mut editor, "foo");

    cursor_moved(&mut editor, 1);
    assert_eq!(editor.ghost_suffix(), "");

    update(&mut editor, Msg::Edit(EditMsg::Move(MoveTarget::LineEnd)));
    assert_eq!(editor.ghost_suffix(), " bar");

    update(&mut editor, Msg::Edit(EditMsg::Move(MoveTarget::Left)));
    assert_eq!(editor.ghost_suffix(), "");
}

#[test]
fn test_edit_away_from_end_has_no_ghost() {
    let mut editor = editor_with_history(&["foo bar"]);
    update(
        &mut editor,
        Msg::Edit(EditMsg::TextEdited {
            text: "foo".into(),
            cursor: 2,
        }),
    );
    assert_eq!(editor.ghost_suffix(), "");
}

#[test]
fn test_history_recall_clears_ghost() {
    let mut editor = editor_with_history(&["foo bar", "foo"]);
    type_text(&mut editor, "fo");
    assert_eq!(editor.ghost_suffix(), "o");

    history_up(&mut editor);
    assert_eq!(editor.text(), "foo");
    assert_eq!(editor.ghost_suffix(), "");
}

#[test]
fn test_ghost_follows_completed_prefix() {
    let mut editor = editor_with_history(&["git status"]);
    type_text(&mut editor, "git s");
    complete_with(&mut editor, &["tatus"]);

    assert_eq!(editor.text(), "git status");
    assert_eq!(editor.ghost_suffix(), "");

    let mut editor = editor_with_history(&["git stash list"]);
    type_text(&mut editor, "git s");
    complete_with(&mut editor, &["tash"]);

    assert_eq!(editor.text(), "git stash");
    assert_eq!(editor.ghost_suffix(), " list");
}
