use indexmap::{IndexMap, IndexSet};

use super::error::GrammarError;
use super::grammar::{Alternative, Symbol};
use super::Grammar;

impl Grammar {
    pub fn calculate_nullable(&self) -> IndexSet<String> {
        let mut nullable: IndexSet<String> = IndexSet::new();

        let mut changed = true;
        while changed {
            changed = false;
            for (left, rights) in &self.productions {
                if nullable.contains(left) {
                    continue;
                }
                let is_nullable = rights.iter().any(|right| {
                    right.iter().all(|s| match s {
                        Symbol::Terminal(_) => false,
                        Symbol::NonTerminal(nt) => nullable.contains(nt),
                    })
                });

                if is_nullable {
                    nullable.insert(left.clone());
                    changed = true;
                }
            }
        }
        nullable
    }

    /// Removes every epsilon production. Each right side is replaced by all
    /// the variants obtained by dropping nullable occurrences. A nullable
    /// start symbol keeps a single `S -> ε`; if it also occurs on some right
    /// side, a fresh start `S' -> S | ε` takes that role instead.
    pub fn eliminate_epsilon(&mut self) -> Result<(), GrammarError> {
        let nullable = self.calculate_nullable();
        let start_nullable = nullable.contains(&self.start_symbol);
        let new_start = start_nullable && self.start_on_right();

        let mut productions: IndexMap<String, IndexSet<Alternative>> = IndexMap::new();
        for (left, rights) in &self.productions {
            let mut new_rights: IndexSet<Alternative> = IndexSet::new();
            for right in rights {
                new_rights.extend(
                    expand_nullable(right, &nullable)
                        .into_iter()
                        .filter(|r| !r.is_empty()),
                );
            }
            if *left == self.start_symbol && start_nullable && !new_start {
                new_rights.insert(Vec::new());
            }
            productions.insert(left.clone(), new_rights);
        }
        self.productions = productions;

        if new_start {
            let old_start = self.start_symbol.clone();
            let start = self.get_symbol_prime_name(old_start.clone());
            self.add_non_terminal(&start)?;
            self.add_production(&start, vec![Symbol::NonTerminal(old_start)]);
            self.add_production(&start, Vec::new());
            self.start_symbol = start;
        }
        Ok(())
    }

    fn start_on_right(&self) -> bool {
        self.production_iter()
            .flat_map(|(_, right)| right.iter())
            .any(|s| s.non_terminal() == Some(self.start_symbol.as_str()))
    }
}

/// Every right side reachable from `right` by deleting any subset of its
/// nullable positions, the untouched one first.
fn expand_nullable(right: &[Symbol], nullable: &IndexSet<String>) -> Vec<Alternative> {
    let mut expanded: Vec<Alternative> = vec![Vec::new()];
    for symbol in right {
        let optional = symbol
            .non_terminal()
            .map_or(false, |nt| nullable.contains(nt));

        let mut next = Vec::with_capacity(expanded.len() * if optional { 2 } else { 1 });
        for prefix in &expanded {
            let mut kept = prefix.clone();
            kept.push(symbol.clone());
            next.push(kept);
        }
        if optional {
            next.extend(expanded.into_iter());
        }
        expanded = next;
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar(text: &str) -> Grammar {
        Grammar::parse(text).unwrap()
    }

    fn rights(g: &Grammar, left: &str) -> Vec<String> {
        g.alternatives(left)
            .map(|r| r.iter().map(|s| s.name()).collect::<Vec<_>>().join(" "))
            .collect()
    }

    #[test]
    fn nullable_chains_through_nonterminals() {
        let g = grammar("S -> A B\nA -> C\nB -> ε | b\nC -> ε\nD -> A a");
        let nullable: Vec<String> = g.calculate_nullable().into_iter().collect();
        assert_eq!(nullable, ["B", "C", "A", "S"]);
    }

    #[test]
    fn self_reference_terminates() {
        let g = grammar("S -> A\nA -> A | a");
        assert!(g.calculate_nullable().is_empty());
    }

    #[test]
    fn expands_every_subset_of_nullable_positions() {
        let mut g = grammar("S -> A b A\nA -> a | ε");
        g.eliminate_epsilon().unwrap();
        assert_eq!(rights(&g, "S"), ["A b A", "b A", "A b", "b"]);
        assert_eq!(rights(&g, "A"), ["a"]);
    }

    #[test]
    fn recursive_nullable_start_gets_fresh_start() {
        let mut g = grammar("S -> a S b | ε");
        g.eliminate_epsilon().unwrap();
        assert_eq!(g.start_symbol(), "S'");
        assert_eq!(rights(&g, "S"), ["a S b", "a b"]);
        assert_eq!(rights(&g, "S'"), ["S", ""]);
        assert!(g.derives_empty());
        assert!(g.validate().is_ok());
    }

    #[test]
    fn fresh_start_avoids_taken_names() {
        let mut g = grammar("S -> S' S | ε\nS' -> a");
        g.eliminate_epsilon().unwrap();
        assert_eq!(g.start_symbol(), "S''");
        assert_eq!(rights(&g, "S''"), ["S", ""]);
    }

    #[test]
    fn non_recursive_nullable_start_keeps_its_epsilon() {
        let mut g = grammar("S -> a | ε");
        g.eliminate_epsilon().unwrap();
        assert_eq!(g.start_symbol(), "S");
        assert_eq!(rights(&g, "S"), ["a", ""]);
    }

    #[test]
    fn nullable_start_through_other_symbols() {
        let mut g = grammar("S -> A A\nA -> a | ε");
        g.eliminate_epsilon().unwrap();
        assert_eq!(rights(&g, "S"), ["A A", "A", ""]);
    }

    #[test]
    fn course_example() {
        let mut g = grammar(
            "S -> A C | b A | B | a A\n\
             A -> ε | a S | A B A b\n\
             B -> a | A b S A\n\
             C -> a b C\n\
             D -> A B",
        );
        g.eliminate_epsilon().unwrap();
        assert_eq!(rights(&g, "S"), ["A C", "C", "b A", "b", "B", "a A", "a"]);
        assert_eq!(
            rights(&g, "A"),
            ["a S", "A B A b", "B A b", "A B b", "B b"]
        );
        assert_eq!(rights(&g, "B"), ["a", "A b S A", "b S A", "A b S", "b S"]);
        assert_eq!(rights(&g, "C"), ["a b C"]);
        assert_eq!(rights(&g, "D"), ["A B", "B"]);
        assert!(!g.derives_empty());
    }
}
