pub mod binarize;
pub mod classify;
pub mod cnf;
pub mod cyk;
pub mod epsilon;
pub mod error;
pub mod generate;
pub mod grammar;
pub mod parse;
pub mod pretty_print;
pub mod unit;
pub mod useless;

pub use cnf::{normalize_to_cnf, Pass};
pub use error::{GrammarError, MalformedGrammar, ParseErrorKind};
pub use grammar::{Alternative, Grammar, Symbol};

pub const EPSILON: &str = "ε";
pub const EPSILON_SPELLINGS: [&str; 3] = ["ε", "ϵ", "epsilon"];
