//! Word-list completion provider for hosts
//!
//! Answers `Cmd::AskCompletion` by completing the whitespace token that ends
//! at the cursor against a fixed word list.

use tracing::debug;

use crate::config::EditorConfig;
use crate::tokenizer::CommandTokenizer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCompleter {
    words: Vec<String>,
}

impl WordCompleter {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.completion_words.clone())
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Suffixes completing the token that ends at `cursor_pos`, in word-list order.
    ///
    /// Empty when the cursor is not on a token or sits inside one.
    pub fn complete(&self, command: &str, cursor_pos: usize) -> Vec<String> {
        let mut tokenizer = CommandTokenizer::whitespace();
        tokenizer.set_command(command);

        let token = match tokenizer.token_at_char_pos(cursor_pos) {
            Ok(token) => token,
            Err(e) => {
                debug!(target: "completion", error = %e, "no token to complete");
                return Vec::new();
            }
        };

        if token.end != cursor_pos {
            debug!(target: "completion", cursor_pos, "not completing at middle of token");
            return Vec::new();
        }

        self.words
            .iter()
            .filter_map(|word| word.strip_prefix(token.text.as_str()))
            .map(str::to_string)
            .collect()
    }
}
