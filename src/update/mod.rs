//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod completion;
mod edit;
mod history;
mod prompt;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::CommandEditor;

#[cfg(debug_assertions)]
use crate::tracing::StateSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use completion::update_completion;
pub use edit::update_edit;
pub use history::update_history;
pub use prompt::update_prompt;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(editor: &mut CommandEditor, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(editor, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(editor, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(editor: &mut CommandEditor, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Edit(m) => edit::update_edit(editor, m),
        Msg::History(m) => history::update_history(editor, m),
        Msg::Completion(m) => completion::update_completion(editor, m),
        Msg::Prompt(m) => prompt::update_prompt(editor, m),
    }
}

/// Update with tracing instrumentation (debug builds only)
#[cfg(debug_assertions)]
fn update_traced(editor: &mut CommandEditor, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = StateSnapshot::from_editor(editor);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(editor, msg);

    if let Some(diff) = before.diff(&StateSnapshot::from_editor(editor)) {
        debug!(target: "state", %diff, "state changed");
    }
    if let Some(cmd) = &result {
        debug!(target: "message", ?cmd, "emitting");
    }

    editor.assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Edit::InsertChar('x')`
/// - `History::Step(Backward)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Edit(m) => format!("Edit::{:?}", m),
        Msg::History(m) => format!("History::{:?}", m),
        Msg::Completion(m) => format!("Completion::{:?}", m),
        Msg::Prompt(m) => format!("Prompt::{:?}", m),
    }
}
