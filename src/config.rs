//! Editor configuration
//!
//! Stored in `~/.config/cmdedit/config.yaml`

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Show the most recent matching history entry as a ghost suffix
    #[serde(default)]
    pub show_matching_history: bool,

    /// Insert the longest common prefix of requested completions right away
    #[serde(default = "default_true")]
    pub auto_accept_longest_common_prefix: bool,

    /// Words offered by the built-in completer
    #[serde(default = "default_completion_words")]
    pub completion_words: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_completion_words() -> Vec<String> {
    [
        "True", "False", "None", "and", "as", "assert", "break", "class", "continue", "def",
        "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
        "in", "is", "lambda", "local", "not", "or", "pass", "raise", "return", "try", "while",
        "with", "yield",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            show_matching_history: false,
            auto_accept_longest_common_prefix: true,
            completion_words: default_completion_words(),
        }
    }
}

impl EditorConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`. Missing or unreadable files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::config_file()
            .context("No config directory available")?;
        self.save_to(&path)
    }
}
