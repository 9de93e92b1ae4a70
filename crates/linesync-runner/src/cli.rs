use clap::{Parser, Subcommand, ValueEnum};
use linesync_engine::NudgeDirection;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "linesync")]
#[command(about = "Align compiler output with the source lines that produced it")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        match &self.command {
            Commands::Sync(command) => command.verbose,
            Commands::Divider(command) => command.verbose,
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Synchronize an event document and render one row per display line.
    Sync(SyncCommand),
    /// Replay divider drags and key presses against a container.
    Divider(DividerCommand),
}

#[derive(Debug, Clone, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Jsonl,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum KeyArg {
    Left,
    Right,
}

impl From<KeyArg> for NudgeDirection {
    fn from(key: KeyArg) -> Self {
        match key {
            KeyArg::Left => NudgeDirection::Left,
            KeyArg::Right => NudgeDirection::Right,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct SyncCommand {
    /// Event document path, or `-` for stdin.
    #[arg(long)]
    pub events: String,
    #[arg(long)]
    pub source: Option<PathBuf>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub width: Option<usize>,
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DividerCommand {
    #[arg(long)]
    pub container_width: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub container_left: f64,
    #[arg(long = "drag", value_delimiter = ',', allow_negative_numbers = true)]
    pub drag: Vec<f64>,
    #[arg(long = "key", value_enum, value_delimiter = ',')]
    pub keys: Vec<KeyArg>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
