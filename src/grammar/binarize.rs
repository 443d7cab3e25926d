use indexmap::{IndexMap, IndexSet};

use super::cnf::is_cnf_alternative;
use super::error::GrammarError;
use super::grammar::Symbol;
use super::Grammar;

/// Fresh nonterminal names for one binarization run.
///
/// Chain nonterminals are numbered `V1, V2, ...` by a counter that only grows;
/// terminal wrappers are named `T_<terminal>` and created once per terminal.
/// A preferred name that is already taken gets prime marks appended.
#[derive(Debug, Default)]
pub struct FreshNames {
    counter: usize,
    wrappers: IndexMap<String, String>,
}

impl FreshNames {
    pub fn new() -> Self {
        Self::default()
    }

    fn chain(&mut self, g: &mut Grammar) -> Result<String, GrammarError> {
        self.counter += 1;
        let name = g.get_symbol_prime_name(format!("V{}", self.counter));
        g.add_non_terminal(&name)?;
        Ok(name)
    }

    fn wrapper(&mut self, g: &mut Grammar, terminal: &str) -> Result<String, GrammarError> {
        if let Some(name) = self.wrappers.get(terminal) {
            return Ok(name.clone());
        }
        let name = g.get_symbol_prime_name(format!("T_{}", terminal));
        g.add_non_terminal(&name)?;
        g.add_production(&name, vec![Symbol::Terminal(terminal.to_string())]);
        self.wrappers.insert(terminal.to_string(), name.clone());
        Ok(name)
    }

    fn isolate(&mut self, g: &mut Grammar, symbol: &Symbol) -> Result<Symbol, GrammarError> {
        match symbol {
            Symbol::NonTerminal(_) => Ok(symbol.clone()),
            Symbol::Terminal(t) => Ok(Symbol::NonTerminal(self.wrapper(g, t)?)),
        }
    }
}

impl Grammar {
    pub fn binarize(&mut self) -> Result<(), GrammarError> {
        self.binarize_with(&mut FreshNames::new())
    }

    pub fn binarize_with(&mut self, fresh: &mut FreshNames) -> Result<(), GrammarError> {
        let empty = self
            .non_terminals
            .iter()
            .map(|nt| (nt.clone(), IndexSet::new()))
            .collect();
        let old_productions = std::mem::replace(&mut self.productions, empty);

        for (left, rights) in old_productions {
            for right in rights {
                if right.len() <= 1 || is_cnf_alternative(&right) {
                    self.add_production(&left, right);
                    continue;
                }

                let symbols = right
                    .iter()
                    .map(|s| fresh.isolate(self, s))
                    .collect::<Result<Vec<_>, _>>()?;

                let n = symbols.len();
                let mut current = left.clone();
                for symbol in &symbols[..n - 2] {
                    let next = fresh.chain(self)?;
                    self.add_production(
                        &current,
                        vec![symbol.clone(), Symbol::NonTerminal(next.clone())],
                    );
                    current = next;
                }
                self.add_production(&current, symbols[n - 2..].to_vec());
            }
        }
        Ok(())
    }
}
