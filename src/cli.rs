//! Command-line argument parsing for the demo host

use std::path::PathBuf;

use clap::Parser;

use cmdedit::EditorConfig;

/// Drive a command editor from stdin intents
#[derive(Parser, Debug)]
#[command(
    name = "cmdedit",
    version,
    about = "Drive a command editor from stdin intents"
)]
pub struct CliArgs {
    /// Config file (defaults to ~/.config/cmdedit/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show the most recent matching history entry as a ghost suffix
    #[arg(long)]
    pub show_matching_history: bool,

    /// Do not insert the common prefix of completions automatically
    #[arg(long)]
    pub no_auto_accept_prefix: bool,

    /// Seed the history (repeatable, oldest first)
    #[arg(long = "history", value_name = "ENTRY")]
    pub history: Vec<String>,

    /// Print each state as a JSON line
    #[arg(long)]
    pub json: bool,

    /// Write the effective configuration to the config path and exit
    #[arg(long)]
    pub init_config: bool,
}

impl CliArgs {
    /// Config from file, with command-line flags taking precedence
    pub fn editor_config(&self) -> EditorConfig {
        let mut config = match &self.config {
            Some(path) => EditorConfig::load_from(path),
            None => EditorConfig::load(),
        };
        if self.show_matching_history {
            config.show_matching_history = true;
        }
        if self.no_auto_accept_prefix {
            config.auto_accept_longest_common_prefix = false;
        }
        config
    }
}
