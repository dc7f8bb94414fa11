//! Command line interface

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use glow_tree_core::TreeEdition;

#[derive(Parser, Debug)]
#[command(name = "glow-tree", version, about = "Decorate a tree with hand gestures")]
pub struct Cli {
    /// Config file (default: <config dir>/glow-tree/config.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Play back recorded landmarks (JSON lines) instead of the keyboard simulator
    #[arg(long)]
    pub replay: Option<PathBuf>,

    /// Restart the replay when it ends
    #[arg(long = "loop", requires = "replay")]
    pub loop_replay: bool,

    /// Record every detection to a JSON-lines file
    #[arg(long)]
    pub record: Option<PathBuf>,

    /// Tree color edition
    #[arg(long, value_enum, default_value_t = Edition::Classic)]
    pub edition: Edition,

    /// Frames per second
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=120))]
    pub fps: u32,

    /// Write logs to this file (the terminal is used for drawing)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable the terminal bell feedback
    #[arg(long)]
    pub no_haptics: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edition {
    Classic,
    Pink,
    Silver,
}

impl From<Edition> for TreeEdition {
    fn from(edition: Edition) -> Self {
        match edition {
            Edition::Classic => TreeEdition::Classic,
            Edition::Pink => TreeEdition::Pink,
            Edition::Silver => TreeEdition::Silver,
        }
    }
}
