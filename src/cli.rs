use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Nearby k-nearest-neighbour classifier.
#[derive(Parser)]
#[command(
    name = "nearby",
    version,
    about = "k-nearest-neighbour classifier for delimited numeric data"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Classify a test file against a training file and report accuracy.
    Classify(ClassifyArgs),
}

/// Zero-range handling as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ZeroRangeArg {
    /// Constant features contribute zero distance.
    Ignore,
    /// Constant features are an error.
    Reject,
}

/// Arguments for the `classify` subcommand.
#[derive(clap::Args)]
pub struct ClassifyArgs {
    /// Training data file.
    pub train: PathBuf,

    /// Test data file.
    pub test: PathBuf,

    /// Numeric columns per row, label included.
    pub features: usize,

    /// Number of nearest neighbours to consult.
    pub k: usize,

    /// Optional TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override zero-range handling from config.
    #[arg(long = "zero-range", value_enum)]
    pub zero_range: Option<ZeroRangeArg>,

    /// Write a JSON report with per-instance predictions.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positional_arguments() {
        let cli = Cli::parse_from(["nearby", "classify", "train.csv", "test.csv", "14", "5"]);
        assert_eq!(cli.verbose, 0);
        let Command::Classify(args) = cli.command;
        assert_eq!(args.train, PathBuf::from("train.csv"));
        assert_eq!(args.test, PathBuf::from("test.csv"));
        assert_eq!(args.features, 14);
        assert_eq!(args.k, 5);
        assert!(args.config.is_none());
        assert!(args.zero_range.is_none());
    }

    #[test]
    fn parse_options() {
        let cli = Cli::parse_from([
            "nearby",
            "-vv",
            "classify",
            "a.csv",
            "b.csv",
            "3",
            "1",
            "--zero-range",
            "reject",
            "-o",
            "report.json",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Classify(args) = cli.command;
        assert_eq!(args.zero_range, Some(ZeroRangeArg::Reject));
        assert_eq!(args.output, Some(PathBuf::from("report.json")));
    }

    #[test]
    fn reject_non_numeric_k() {
        let result =
            Cli::try_parse_from(["nearby", "classify", "a.csv", "b.csv", "3", "many"]);
        assert!(result.is_err());
    }
}
