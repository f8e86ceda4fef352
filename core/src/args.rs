use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "Vantage")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Spatial evaluation of chess positions")]
pub struct Args {
    /// Write debug logs to a file instead of stderr.
    #[arg(short, long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Raise stderr log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Override an analysis parameter, e.g. `--set center_threshold=4`.
    #[arg(long = "set", value_name = "NAME=VALUE", global = true)]
    pub overrides: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate one position and print its metrics as JSON.
    Eval {
        fen: String,

        /// Add strategic insights and training recommendations.
        #[arg(long)]
        insights: bool,
    },

    /// Compare candidate moves (UCI) from one position.
    Compare {
        fen: String,

        #[arg(required = true)]
        moves: Vec<String>,
    },

    /// Track space and center control along a move sequence.
    Progression {
        fen: String,

        moves: Vec<String>,

        /// Plies to record. Defaults to `progression_ply_limit`.
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Evaluate every FEN in a file, one per line.
    Batch { file: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "vantage",
            "compare",
            "8/8/8/8/8/8/8/4K3 w - - 0 1",
            "e1e2",
            "e1d1",
            "-vv",
            "--set",
            "comparison_move_limit=3",
        ])
        .unwrap();

        assert_eq!(args.verbose, 2);
        assert_eq!(args.overrides, vec!["comparison_move_limit=3".to_string()]);
        match args.command {
            Command::Compare { moves, .. } => assert_eq!(moves, vec!["e1e2", "e1d1"]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_compare_needs_moves() {
        assert!(Args::try_parse_from(["vantage", "compare", "fen"]).is_err());
    }
}
