use indexmap::IndexSet;

use super::error::{GrammarError, ParseErrorKind};
use super::grammar::{Alternative, Symbol};
use super::{Grammar, EPSILON_SPELLINGS};

fn parse_error(line: usize, kind: ParseErrorKind) -> GrammarError {
    GrammarError::Parse { line, kind }
}

impl Grammar {
    /// Parses the `A -> x y | z` notation. Every left side is a nonterminal,
    /// every other symbol a terminal, and the first left side is the start.
    pub fn parse(grammar: &str) -> Result<Self, GrammarError> {
        let mut non_terminals: IndexSet<&str> = IndexSet::new();
        let mut raw_productions: Vec<(&str, &str)> = Vec::new();

        let mut previous_left: Option<&str> = None;
        for (i, line) in grammar.lines().enumerate() {
            if line.chars().all(|c| c.is_whitespace()) {
                continue;
            }
            let parts: Vec<&str> = line.split("->").collect();
            if parts.len() > 2 {
                return Err(parse_error(i + 1, ParseErrorKind::TooManyArrows));
            }
            let (left, rights): (&str, &str) = if parts.len() == 2 {
                let left_str = parts[0].trim();
                if left_str.is_empty() {
                    return Err(parse_error(i + 1, ParseErrorKind::EmptyLeft));
                } else if left_str.split_whitespace().count() != 1 {
                    return Err(parse_error(i + 1, ParseErrorKind::WhitespaceInLeft));
                }
                non_terminals.insert(left_str);
                (left_str, parts[1].trim())
            } else {
                match (previous_left, parts[0].trim().strip_prefix('|')) {
                    (Some(left), Some(rest)) => (left, rest.trim()),
                    _ => return Err(parse_error(i + 1, ParseErrorKind::MissingLeft)),
                }
            };

            previous_left = Some(left);
            raw_productions.push((left, rights));
        }

        let mut terminals: IndexSet<&str> = IndexSet::new();
        let mut productions: Vec<(&str, Alternative)> = Vec::new();
        for (left, rights) in raw_productions {
            for right in rights.split('|') {
                let words: Vec<&str> = right.split_whitespace().collect();
                let symbols: Alternative = match words.as_slice() {
                    [word] if EPSILON_SPELLINGS.contains(word) => Vec::new(),
                    _ => words
                        .iter()
                        .map(|&s| {
                            if non_terminals.contains(s) {
                                Symbol::nt(s)
                            } else {
                                terminals.insert(s);
                                Symbol::t(s)
                            }
                        })
                        .collect(),
                };
                productions.push((left, symbols));
            }
        }

        let start_symbol = non_terminals.first().copied().unwrap_or_default();
        Self::new(start_symbol, non_terminals, terminals, productions)
    }
}
