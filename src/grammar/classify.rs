use std::fmt::Display;

use serde::Serialize;

use super::grammar::Symbol;
use super::Grammar;

/// Position of a grammar in the Chomsky hierarchy. Left sides are always a
/// single nonterminal here, so only types 2 and 3 can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GrammarType {
    Regular,
    ContextFree,
}

impl Display for GrammarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrammarType::Regular => write!(f, "Type-3"),
            GrammarType::ContextFree => write!(f, "Type-2"),
        }
    }
}

impl Grammar {
    pub fn is_right_linear(&self) -> bool {
        self.production_iter().all(|(_, right)| {
            let body = match right.split_last() {
                Some((Symbol::NonTerminal(_), body)) => body,
                _ => right.as_slice(),
            };
            body.iter().all(Symbol::is_terminal)
        })
    }

    pub fn is_left_linear(&self) -> bool {
        self.production_iter().all(|(_, right)| {
            let body = match right.split_first() {
                Some((Symbol::NonTerminal(_), body)) => body,
                _ => right.as_slice(),
            };
            body.iter().all(Symbol::is_terminal)
        })
    }

    pub fn classify(&self) -> GrammarType {
        if self.is_right_linear() || self.is_left_linear() {
            GrammarType::Regular
        } else {
            GrammarType::ContextFree
        }
    }
}
