use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use chomsky_helper::GrammarError;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// What to print
    #[arg(value_enum, required = true)]
    pub outputs: Vec<Output>,

    /// File containing the grammar (default: standard input)
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print in LaTeX format
    #[arg(short, long, conflicts_with = "json")]
    pub latex: bool,

    /// Print in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Amount of sentences to generate
    #[arg(short = 'n', long, value_name = "AMOUNT", default_value_t = 5)]
    pub amount: usize,

    /// Sentence to check for membership, symbols separated by spaces
    #[arg(short, long, value_name = "SENTENCE")]
    pub word: Vec<String>,

    /// Print the grammar after every normalization pass to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Output {
    /// Productions as read
    Prod,
    /// After eliminating epsilon productions
    Eps,
    /// After eliminating unit productions
    Unit,
    /// After eliminating useless symbols
    Useless,
    /// Chomsky normal form
    Cnf,
    /// Every intermediate grammar
    Steps,
    /// Chomsky hierarchy type
    Type,
    /// Random sentences
    Gen,
    /// Membership of the --word sentences
    Check,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {0}: {1}")]
    Read(String, #[source] std::io::Error),
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
