//! Command-line interface for strictly_timeline.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Timeline - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board configuration file (TOML). Built-in defaults are used if omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives log output while the terminal UI is running
    #[arg(long, default_value = "strictly_timeline.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["strictly_timeline"]).unwrap();
        assert_eq!(cli.config, None);
        assert_eq!(cli.log_file, PathBuf::from("strictly_timeline.log"));
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::try_parse_from(["strictly_timeline", "-c", "board.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("board.toml")));
    }
}
