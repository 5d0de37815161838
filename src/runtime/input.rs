//! Stdin intent parsing
//!
//! Each input line names one user intent, e.g. `type ls -la`, `tab`, `up`.
//! An intent maps to the messages a keyboard-driven widget would send.

use thiserror::Error;

use cmdedit::messages::{
    CompletionMsg, Direction, EditMsg, HistoryMsg, MoveTarget, Msg, PromptMsg,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    #[error("unknown intent `{0}`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`key` takes a single character, got `{0}`")]
    NotAChar(String),
}

/// Parse one input line into the messages it produces.
///
/// Blank lines and `#` comments produce no messages.
pub fn parse_intent(line: &str) -> Result<Vec<Msg>, IntentError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (word, rest) = match line.split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (line, None),
    };

    let msgs = match word {
        "" => Vec::new(),
        w if w.starts_with('#') => Vec::new(),
        "type" => {
            let text = rest.ok_or(IntentError::MissingArgument("type"))?;
            text.chars()
                .map(|ch| Msg::Edit(EditMsg::InsertChar(ch)))
                .collect()
        }
        "paste" => {
            let text = rest.ok_or(IntentError::MissingArgument("paste"))?;
            vec![Msg::Edit(EditMsg::InsertText(text.to_string()))]
        }
        "key" => {
            let arg = rest.ok_or(IntentError::MissingArgument("key"))?;
            let mut chars = arg.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => vec![Msg::Edit(EditMsg::InsertChar(ch))],
                _ => return Err(IntentError::NotAChar(arg.to_string())),
            }
        }
        "backspace" => vec![Msg::Edit(EditMsg::DeleteBackward)],
        "delete" => vec![Msg::Edit(EditMsg::DeleteForward)],
        "left" => vec![Msg::Edit(EditMsg::Move(MoveTarget::Left))],
        "right" => vec![Msg::Edit(EditMsg::Move(MoveTarget::Right))],
        "home" => vec![Msg::Edit(EditMsg::Move(MoveTarget::LineStart))],
        "end" => vec![Msg::Edit(EditMsg::Move(MoveTarget::LineEnd))],
        "shift-left" => vec![Msg::Edit(EditMsg::MoveWithSelection(MoveTarget::Left))],
        "shift-right" => vec![Msg::Edit(EditMsg::MoveWithSelection(MoveTarget::Right))],
        "shift-home" => vec![Msg::Edit(EditMsg::MoveWithSelection(MoveTarget::LineStart))],
        "shift-end" => vec![Msg::Edit(EditMsg::MoveWithSelection(MoveTarget::LineEnd))],
        "select-all" => vec![Msg::Edit(EditMsg::SelectAll)],
        "up" => vec![Msg::History(HistoryMsg::Step(Direction::Backward))],
        "down" => vec![Msg::History(HistoryMsg::Step(Direction::Forward))],
        "tab" => vec![Msg::Completion(CompletionMsg::Step(Direction::Forward))],
        "shift-tab" => vec![Msg::Completion(CompletionMsg::Step(Direction::Backward))],
        "enter" => vec![Msg::Prompt(PromptMsg::Confirm)],
        "esc" => vec![Msg::Prompt(PromptMsg::Cancel)],
        other => return Err(IntentError::Unknown(other.to_string())),
    };

    Ok(msgs)
}
