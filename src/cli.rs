//! Command-line interface for diarist
//!
//! Provides argument parsing using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Replay recognizer output through a diarization session
///
/// Reads newline-delimited hypothesis JSON (Vosk-style: partial records
/// carry "partial", final records carry "text" and optionally "spk") and
/// prints each emitted session event as one JSON line.
#[derive(Parser, Debug)]
#[command(name = "diarist", version, about = "Online speaker diarization for streaming speech recognition")]
pub struct Cli {
    /// Hypothesis file to replay (default: stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Similarity threshold override (default from config: 0.45)
    #[arg(long, value_name = "THRESHOLD")]
    pub threshold: Option<f32>,

    /// Suppress status events and the completion summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (-v: info, -vv: debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_defaults() {
        let cli = Cli::parse_from(["diarist"]);
        assert!(cli.input.is_none());
        assert!(cli.config.is_none());
        assert!(cli.threshold.is_none());
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "diarist",
            "session.jsonl",
            "--threshold",
            "0.6",
            "-q",
            "-vv",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("session.jsonl")));
        assert_eq!(cli.threshold, Some(0.6));
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
    }
}
