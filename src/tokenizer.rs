//! Command tokenization
//!
//! Splits a command line into tokens with character ranges so the token under
//! the cursor can be located. A token's `end` is the offset of the boundary
//! that terminated it, and [`Token::overlaps`] is inclusive at both ends, so a
//! cursor standing right after a token still resolves to that token.

use thiserror::Error;

/// A token of a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Lexical class, reserved for richer tokenizers (always 0 for whitespace splitting)
    pub kind: u32,
    /// Character offset of the first character
    pub start: usize,
    /// Character offset of the terminating boundary
    pub end: usize,
}

impl Token {
    /// True if `index` lies in `start..=end`
    pub fn overlaps(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

/// Lookup failures. Both are recoverable and mean "cannot complete here".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("character index {index} out of bounds (command length {len})")]
    OutOfBounds { index: usize, len: usize },
    #[error("no token at character index {index}")]
    NotFound { index: usize },
}

/// A tokenization strategy.
pub trait Tokenizer {
    /// Split `command` into tokens, left to right, with non-overlapping ranges
    fn tokenize(&self, command: &str) -> Vec<Token>;
}

/// Splits on runs of separator characters (space, tab, newline, carriage return by default).
#[derive(Debug, Clone, Copy)]
pub struct WhitespaceTokenizer {
    is_separator: fn(char) -> bool,
}

fn is_default_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

impl Default for WhitespaceTokenizer {
    fn default() -> Self {
        Self {
            is_separator: is_default_separator,
        }
    }
}

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom separator set
    pub fn with_separators(is_separator: fn(char) -> bool) -> Self {
        Self { is_separator }
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, command: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut text = String::new();
        let mut start = 0;
        let mut len = 0;

        for (i, c) in command.chars().enumerate() {
            len = i + 1;
            if (self.is_separator)(c) {
                if !text.is_empty() {
                    tokens.push(Token {
                        text: std::mem::take(&mut text),
                        kind: 0,
                        start,
                        end: i,
                    });
                }
                start = i + 1;
            } else {
                text.push(c);
            }
        }

        if !text.is_empty() {
            tokens.push(Token {
                text,
                kind: 0,
                start,
                end: len,
            });
        }

        tokens
    }
}

/// Holds a command and its tokens, produced by a [`Tokenizer`] strategy.
#[derive(Debug, Clone, Default)]
pub struct CommandTokenizer<T: Tokenizer = WhitespaceTokenizer> {
    strategy: T,
    command_len: usize,
    tokens: Vec<Token>,
}

impl CommandTokenizer<WhitespaceTokenizer> {
    pub fn whitespace() -> Self {
        Self::new(WhitespaceTokenizer::default())
    }
}

impl<T: Tokenizer> CommandTokenizer<T> {
    pub fn new(strategy: T) -> Self {
        Self {
            strategy,
            command_len: 0,
            tokens: Vec::new(),
        }
    }

    /// Reset and re-tokenize
    pub fn set_command(&mut self, command: &str) {
        self.clear();
        self.command_len = command.chars().count();
        self.tokens = self.strategy.tokenize(command);
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Token overlapping character `index`
    pub fn token_at_char_pos(&self, index: usize) -> Result<&Token, TokenizeError> {
        if index > self.command_len {
            return Err(TokenizeError::OutOfBounds {
                index,
                len: self.command_len,
            });
        }
        self.tokens
            .iter()
            .find(|t| t.overlaps(index))
            .ok_or(TokenizeError::NotFound { index })
    }

    pub fn clear(&mut self) {
        self.command_len = 0;
        self.tokens.clear();
    }
}
