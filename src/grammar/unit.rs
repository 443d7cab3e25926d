use std::collections::VecDeque;

use indexmap::{IndexMap, IndexSet};

use super::grammar::{Alternative, Symbol};
use super::Grammar;

fn is_unit(right: &[Symbol]) -> Option<&str> {
    match right {
        [Symbol::NonTerminal(nt)] => Some(nt.as_str()),
        _ => None,
    }
}

impl Grammar {
    /// Nonterminals reachable from `non_terminal` through unit productions,
    /// `non_terminal` itself first.
    pub fn unit_closure(&self, non_terminal: &str) -> IndexSet<String> {
        let mut closure: IndexSet<String> = IndexSet::new();
        let mut q: VecDeque<&str> = VecDeque::new();
        closure.insert(non_terminal.to_string());
        q.push_back(non_terminal);

        while let Some(nt) = q.pop_front() {
            for target in self.alternatives(nt).filter_map(|right| is_unit(right)) {
                if closure.insert(target.to_string()) {
                    q.push_back(target);
                }
            }
        }
        closure
    }

    pub fn eliminate_unit_productions(&mut self) {
        let mut productions: IndexMap<String, IndexSet<Alternative>> = IndexMap::new();
        for left in self.productions.keys() {
            let keep_empty = *left == self.start_symbol;
            let mut new_rights: IndexSet<Alternative> = IndexSet::new();
            for nt in self.unit_closure(left) {
                new_rights.extend(
                    self.alternatives(&nt)
                        .filter(|right| is_unit(right).is_none())
                        .filter(|right| keep_empty || !right.is_empty())
                        .cloned(),
                );
            }
            productions.insert(left.clone(), new_rights);
        }
        self.productions = productions;
    }
}
