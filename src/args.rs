use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tictactoe-rewind", about = "Tic-tac-toe with a replayable move history")]
pub struct Args {
    /// SQLite database file (defaults to the platform data directory)
    #[arg(long, value_name = "PATH", conflicts_with = "memory")]
    pub db: Option<PathBuf>,

    /// Keep the game in memory only
    #[arg(long)]
    pub memory: bool,

    /// Clear any saved game before starting
    #[arg(long)]
    pub reset: bool,

    /// Directory for the log file
    #[arg(long, value_name = "DIR", default_value = "logs")]
    pub log_dir: PathBuf,
}
