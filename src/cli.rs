use clap::{Parser, ValueEnum};
use dataviva_challenges::Challenge;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dataviva-challenges",
    about = "Runs the five introductory challenges and prints their output",
    version
)]
pub struct Cli {
    /// Run a single challenge instead of all five
    #[arg(long, value_enum)]
    pub only: Option<ChallengeArg>,

    /// Upper bound for FizzBuzz
    #[arg(long, default_value_t = dataviva_challenges::fizzbuzz::DEFAULT_LIMIT)]
    pub fizzbuzz_limit: i64,

    /// CSV file (category,amount) to aggregate instead of the built-in sample
    #[arg(long)]
    pub transactions: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ChallengeArg {
    Fizzbuzz,
    Palindrome,
    Duplicates,
    Brackets,
    Aggregation,
}

impl From<ChallengeArg> for Challenge {
    fn from(arg: ChallengeArg) -> Self {
        match arg {
            ChallengeArg::Fizzbuzz => Challenge::FizzBuzz,
            ChallengeArg::Palindrome => Challenge::Palindrome,
            ChallengeArg::Duplicates => Challenge::Duplicates,
            ChallengeArg::Brackets => Challenge::Brackets,
            ChallengeArg::Aggregation => Challenge::Aggregation,
        }
    }
}
