//! Host loop around the command editor
//!
//! Plays the embedding application's part: answers completion requests on a
//! worker thread, delivers deferred callbacks through a message channel, keeps
//! the executed-command history and prints the editor state.

use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::{Context, Result};

use cmdedit::messages::{CompletionMsg, HistoryMsg, Msg, PromptMsg};
use cmdedit::tracing::StateSnapshot;
use cmdedit::{update, Cmd, CommandEditor, EditorConfig, WordCompleter};

use super::input::parse_intent;

/// How long to wait for a worker before giving up on it
const SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

pub struct Host {
    editor: CommandEditor,
    history: Vec<String>,
    completer: WordCompleter,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    /// Messages sent to the channel but not yet received
    in_flight: usize,
    /// Lines announced since the last state print
    events: Vec<String>,
    json: bool,
}

impl Host {
    pub fn new(config: &EditorConfig, history: Vec<String>, json: bool) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let mut host = Self {
            editor: CommandEditor::with_config(config),
            history: Vec::new(),
            completer: WordCompleter::from_config(config),
            msg_tx,
            msg_rx,
            in_flight: 0,
            events: Vec::new(),
            json,
        };
        if !history.is_empty() {
            host.history = history;
            host.dispatch(Msg::History(HistoryMsg::Replace(host.history.clone())));
        }
        host
    }

    #[cfg(test)]
    pub fn editor(&self) -> &CommandEditor {
        &self.editor
    }

    #[cfg(test)]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Read intents until EOF, printing the state after each one
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Failed to read intent")?;
            match parse_intent(&line) {
                Ok(msgs) if msgs.is_empty() => continue,
                Ok(msgs) => {
                    for msg in msgs {
                        self.dispatch(msg);
                    }
                    self.settle();
                }
                Err(e) => {
                    tracing::warn!("Skipping intent {:?}: {}", line, e);
                    writeln!(output, "error: {}", e)?;
                    continue;
                }
            }
            self.print_state(&mut output)?;
        }
        output.flush()?;
        Ok(())
    }

    /// Feed one message to the editor and carry out what it asks for
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.editor, msg) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::Execute(command) => {
                tracing::info!(%command, "execute");
                self.events.push(format!("execute: {}", command));
                self.history.push(command);
                self.dispatch(Msg::Prompt(PromptMsg::Clear));
                self.dispatch(Msg::History(HistoryMsg::Replace(self.history.clone())));
            }
            Cmd::AskCompletion {
                command,
                cursor_pos,
                request_id,
            } => {
                let completer = self.completer.clone();
                let tx = self.msg_tx.clone();
                self.in_flight += 1;
                std::thread::spawn(move || {
                    let candidates = completer.complete(&command, cursor_pos);
                    let _ = tx.send(Msg::Completion(CompletionMsg::Supply {
                        request_id,
                        candidates,
                    }));
                });
            }
            Cmd::Escape => {
                tracing::info!("escape");
                self.events.push("escape".to_string());
            }
            Cmd::MoveCursorToEnd { generation } => {
                // Delivered after the current message has been fully handled
                if self
                    .msg_tx
                    .send(Msg::Prompt(PromptMsg::MoveCursorToEnd { generation }))
                    .is_ok()
                {
                    self.in_flight += 1;
                }
            }
        }
    }

    /// Process channel messages until no work is outstanding
    pub fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.msg_rx.recv_timeout(SETTLE_TIMEOUT) {
                Ok(msg) => {
                    self.in_flight -= 1;
                    self.dispatch(msg);
                }
                Err(e) => {
                    tracing::warn!(pending = self.in_flight, error = %e, "gave up waiting for host work");
                    self.in_flight = 0;
                }
            }
        }
    }

    fn print_state<W: Write>(&mut self, output: &mut W) -> Result<()> {
        for event in self.events.drain(..) {
            writeln!(output, "{}", event)?;
        }

        if self.json {
            let snapshot = StateSnapshot::from_editor(&self.editor);
            writeln!(output, "{}", serde_json::to_string(&snapshot)?)?;
            return Ok(());
        }

        writeln!(output, "{}", render_line(&self.editor))?;
        Ok(())
    }
}

/// `[text]` with `|` at the cursor, the selection in `{}` and the ghost in `()`
fn render_line(editor: &CommandEditor) -> String {
    let text: Vec<char> = editor.text().chars().collect();
    let (sel_start, sel_end) = editor
        .selection()
        .map_or((usize::MAX, usize::MAX), |(start, len)| (start, start + len));

    let mut line = String::with_capacity(text.len() + 8);
    line.push('[');
    for i in 0..=text.len() {
        if i == sel_end {
            line.push('}');
        }
        if i == editor.cursor() {
            line.push('|');
        }
        if i == sel_start {
            line.push('{');
        }
        if let Some(ch) = text.get(i) {
            line.push(*ch);
        }
    }
    if !editor.ghost_suffix().is_empty() {
        line.push('(');
        line.push_str(editor.ghost_suffix());
        line.push(')');
    }
    line.push(']');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(host: &mut Host, script: &str) -> String {
        let mut out = Vec::new();
        host.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn config(words: &[&str]) -> EditorConfig {
        EditorConfig {
            show_matching_history: true,
            completion_words: words.iter().map(|w| w.to_string()).collect(),
            ..EditorConfig::default()
        }
    }

    #[test]
    fn test_render_line() {
        let mut editor = CommandEditor::new();
        update(
            &mut editor,
            Msg::Edit(cmdedit::messages::EditMsg::InsertText("foo".into())),
        );
        assert_eq!(render_line(&editor), "[foo|]");
    }

    #[test]
    fn test_execute_records_history_and_clears() {
        let mut host = Host::new(&config(&[]), vec![], false);
        let out = run(&mut host, "type ls\nenter\n");

        assert!(out.contains("execute: ls"));
        assert_eq!(host.history(), &["ls".to_string()]);
        assert_eq!(host.editor().text(), "");
    }

    #[test]
    fn test_history_recall_places_cursor_at_end() {
        let mut host = Host::new(&config(&[]), vec!["make test".into()], false);
        run(&mut host, "up\n");

        assert_eq!(host.editor().text(), "make test");
        assert_eq!(host.editor().cursor(), 9);
    }

    #[test]
    fn test_tab_completes_through_worker() {
        let mut host = Host::new(&config(&["status", "stash"]), vec![], false);
        let out = run(&mut host, "type st\ntab\n");

        // Common prefix "a" inserted, first candidate proposed as selection
        assert_eq!(host.editor().text(), "status");
        assert_eq!(host.editor().selection(), Some((3, 3)));
        assert_eq!(out.lines().last(), Some("[sta{tus}|]"));
    }

    #[test]
    fn test_ghost_and_json_output() {
        let mut host = Host::new(&config(&[]), vec!["foo bar".into()], true);
        let out = run(&mut host, "type foo\n");
        let last = out.lines().last().unwrap();
        let value: serde_json::Value = serde_json::from_str(last).unwrap();
        assert_eq!(value["ghost"], " bar");
        assert_eq!(value["cursor"], 3);
    }

    #[test]
    fn test_escape_on_empty_prompt() {
        let mut host = Host::new(&config(&[]), vec![], false);
        let out = run(&mut host, "esc\n");
        assert!(out.starts_with("escape"));
    }

    #[test]
    fn test_bad_intent_reports_error() {
        let mut host = Host::new(&config(&[]), vec![], false);
        let out = run(&mut host, "jump\n");
        assert!(out.starts_with("error:"));
    }
}
