use clap::{Parser, ValueEnum};
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  # Delete a single label.
  github-label-remove --token <token> --repo <owner/repo> --label <label-name-to-delete>
  github-label-remove -t <token> -r <owner/repo> -l <label-name-to-delete>

  # Delete all the default labels.
  github-label-remove -t <token> -r <owner/repo> --defaults
  github-label-remove -t <token> -r <owner/repo> -d";

#[derive(Parser, Debug)]
#[command(
    name = "github-label-remove",
    version,
    about = "Delete labels, or all the default labels, from a GitHub repository",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// GitHub token
    #[arg(long, short = 't', env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub repository as owner/repo
    #[arg(long, short = 'r', value_name = "OWNER/REPO")]
    pub repo: Option<String>,

    /// Custom label to remove
    #[arg(long, short = 'l', value_name = "NAME")]
    pub label: Option<String>,

    /// Custom API URL, e.g. for GitHub Enterprise [default: https://api.github.com]
    #[arg(long, short = 'a', value_name = "URL")]
    pub api: Option<String>,

    /// Delete all default GitHub labels (takes precedence over --label)
    #[arg(long, short = 'd')]
    pub defaults: bool,

    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "LABEL_REMOVE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// `help` prints this message
    #[arg(value_parser = ["help"], hide = true)]
    pub command: Option<String>,
}

impl Cli {
    pub fn wants_help(&self) -> bool {
        self.command.as_deref() == Some("help")
    }
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}
