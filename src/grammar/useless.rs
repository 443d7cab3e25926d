use std::collections::VecDeque;

use indexmap::IndexSet;

use super::grammar::Symbol;
use super::Grammar;

impl Grammar {
    pub fn calculate_productive(&self) -> IndexSet<String> {
        let mut productive: IndexSet<String> = IndexSet::new();

        let mut changed = true;
        while changed {
            changed = false;
            for (left, rights) in &self.productions {
                if productive.contains(left) {
                    continue;
                }
                let is_productive = rights.iter().any(|right| {
                    right.iter().all(|s| match s {
                        Symbol::Terminal(_) => true,
                        Symbol::NonTerminal(nt) => productive.contains(nt),
                    })
                });

                if is_productive {
                    productive.insert(left.clone());
                    changed = true;
                }
            }
        }
        productive
    }

    pub fn calculate_reachable(&self) -> IndexSet<String> {
        let mut reachable: IndexSet<String> = IndexSet::new();
        let mut q: VecDeque<&str> = VecDeque::new();
        reachable.insert(self.start_symbol.clone());
        q.push_back(self.start_symbol.as_str());

        while let Some(nt) = q.pop_front() {
            for s in self.alternatives(nt).flatten() {
                if let Symbol::NonTerminal(next) = s {
                    if reachable.insert(next.clone()) {
                        q.push_back(next.as_str());
                    }
                }
            }
        }
        reachable
    }

    /// Drops unproductive nonterminals with every alternative using one, then
    /// drops what the start symbol can no longer reach. Terminals left unused
    /// are dropped as well, unless none is used at all.
    pub fn eliminate_useless_symbols(&mut self) {
        let productive = self.calculate_productive();
        for rights in self.productions.values_mut() {
            rights.retain(|right| {
                right
                    .iter()
                    .filter_map(|s| s.non_terminal())
                    .all(|nt| productive.contains(nt))
            });
        }
        self.retain_non_terminals(|nt| productive.contains(nt));

        let reachable = self.calculate_reachable();
        self.retain_non_terminals(|nt| reachable.contains(nt));

        let used: IndexSet<String> = self
            .productions
            .values()
            .flatten()
            .flatten()
            .filter(|s| s.is_terminal())
            .map(|s| s.name().to_string())
            .collect();
        if !used.is_empty() {
            self.terminals.retain(|t| used.contains(t));
        }
    }
}
