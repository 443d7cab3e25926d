use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use super::error::{GrammarError, MalformedGrammar};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Symbol {
    NonTerminal(String),
    Terminal(String),
}

impl Symbol {
    pub fn nt(name: &str) -> Self {
        Symbol::NonTerminal(name.to_string())
    }

    pub fn t(name: &str) -> Self {
        Symbol::Terminal(name.to_string())
    }

    pub fn name(&self) -> &str {
        match self {
            Symbol::NonTerminal(e) | Symbol::Terminal(e) => e.as_str(),
        }
    }

    pub fn non_terminal(&self) -> Option<&str> {
        match self {
            Symbol::NonTerminal(e) => Some(e.as_str()),
            Symbol::Terminal(_) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }
}

/// The right side of a production. Empty means epsilon.
pub type Alternative = Vec<Symbol>;

/// A context-free grammar.
///
/// Nonterminals, terminals and the alternatives of every nonterminal keep
/// insertion order, so every transformation is reproducible. Every declared
/// nonterminal owns an entry in `productions`, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    pub(crate) start_symbol: String,
    pub(crate) non_terminals: IndexSet<String>,
    pub(crate) terminals: IndexSet<String>,
    pub(crate) productions: IndexMap<String, IndexSet<Alternative>>,
}

impl Grammar {
    pub fn new<N, T, P, L>(
        start_symbol: &str,
        non_terminals: N,
        terminals: T,
        productions: P,
    ) -> Result<Self, GrammarError>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
        P: IntoIterator<Item = (L, Alternative)>,
        L: Into<String>,
    {
        let non_terminals: IndexSet<String> = non_terminals.into_iter().map(Into::into).collect();
        let terminals: IndexSet<String> = terminals.into_iter().map(Into::into).collect();

        let mut g = Self {
            start_symbol: start_symbol.to_string(),
            productions: non_terminals
                .iter()
                .map(|nt| (nt.clone(), IndexSet::new()))
                .collect(),
            non_terminals,
            terminals,
        };
        for (left, right) in productions {
            g.productions.entry(left.into()).or_default().insert(right);
        }

        g.validate()?;
        Ok(g)
    }

    pub fn validate(&self) -> Result<(), MalformedGrammar> {
        use MalformedGrammar::*;

        if self.non_terminals.is_empty() {
            return Err(NoNonTerminals);
        }
        if self.terminals.is_empty() {
            return Err(NoTerminals);
        }
        if let Some(x) = self.non_terminals.intersection(&self.terminals).next() {
            return Err(TerminalNonTerminal(x.clone()));
        }
        if !self.non_terminals.contains(&self.start_symbol) {
            return Err(UndeclaredStart(self.start_symbol.clone()));
        }

        for (left, alternatives) in &self.productions {
            if !self.non_terminals.contains(left) {
                return Err(ProductionsNotNonTerminal(left.clone()));
            }
            for symbol in alternatives.iter().flatten() {
                match symbol {
                    Symbol::NonTerminal(s) if !self.non_terminals.contains(s) => {
                        return Err(UndeclaredNonTerminal(s.clone(), left.clone()));
                    }
                    Symbol::Terminal(s) if !self.terminals.contains(s) => {
                        return Err(UndeclaredTerminal(s.clone(), left.clone()));
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    pub fn start_symbol(&self) -> &str {
        self.start_symbol.as_str()
    }

    pub fn terminal_iter(&self) -> impl Iterator<Item = &String> {
        self.terminals.iter()
    }

    pub fn non_terminal_iter(&self) -> impl Iterator<Item = &String> {
        self.non_terminals.iter()
    }

    pub fn is_non_terminal(&self, name: &str) -> bool {
        self.non_terminals.contains(name)
    }

    pub fn alternatives(&self, non_terminal: &str) -> impl Iterator<Item = &Alternative> {
        self.productions
            .get(non_terminal)
            .into_iter()
            .flat_map(|alternatives| alternatives.iter())
    }

    pub fn production_iter(&self) -> impl Iterator<Item = (&str, &Alternative)> {
        self.productions
            .iter()
            .flat_map(|(left, rights)| rights.iter().map(move |right| (left.as_str(), right)))
    }

    pub fn production_count(&self) -> usize {
        self.productions.values().map(|rights| rights.len()).sum()
    }

    pub fn has_production(&self, left: &str, right: &[Symbol]) -> bool {
        self.productions
            .get(left)
            .map_or(false, |rights| rights.contains(right))
    }

    pub fn derives_empty(&self) -> bool {
        self.has_production(&self.start_symbol, &[])
    }

    pub fn contains_symbol(&self, name: &str) -> bool {
        self.non_terminals.contains(name) || self.terminals.contains(name)
    }

    pub(crate) fn add_non_terminal(&mut self, name: &str) -> Result<(), GrammarError> {
        if self.contains_symbol(name) {
            return Err(GrammarError::NameCollision(name.to_string()));
        }
        self.non_terminals.insert(name.to_string());
        self.productions.insert(name.to_string(), IndexSet::new());
        Ok(())
    }

    pub(crate) fn add_production(&mut self, left: &str, right: Alternative) {
        self.productions
            .entry(left.to_string())
            .or_default()
            .insert(right);
    }

    /// Drops every nonterminal not accepted by `keep`, together with its
    /// alternatives. The start symbol is always kept.
    pub(crate) fn retain_non_terminals(&mut self, mut keep: impl FnMut(&str) -> bool) {
        let start = self.start_symbol.clone();
        self.non_terminals
            .retain(|nt| *nt == start || keep(nt.as_str()));
        let non_terminals = &self.non_terminals;
        self.productions.retain(|nt, _| non_terminals.contains(nt));
    }

    pub fn get_symbol_prime_name(&self, mut name: String) -> String {
        while self.contains_symbol(&name) {
            name.push('\'');
        }
        name
    }
}
