mod common;

use chomsky_helper::{normalize_to_cnf, Grammar, Symbol};
use proptest::prelude::*;

use common::{earley_accepts, words};

const NON_TERMINALS: [&str; 4] = ["S", "A", "B", "C"];
const TERMINALS: [&str; 2] = ["a", "b"];
const MAX_WORD_LEN: usize = 4;

fn symbol() -> impl Strategy<Value = Symbol> {
    prop_oneof![
        prop::sample::select(NON_TERMINALS.to_vec()).prop_map(Symbol::nt),
        prop::sample::select(TERMINALS.to_vec()).prop_map(Symbol::t),
    ]
}

fn grammar() -> impl Strategy<Value = Grammar> {
    prop::collection::vec(
        prop::collection::vec(prop::collection::vec(symbol(), 0..4), 0..4),
        NON_TERMINALS.len(),
    )
    .prop_map(|rules| {
        let productions: Vec<(&str, Vec<Symbol>)> = NON_TERMINALS
            .iter()
            .zip(rules)
            .flat_map(|(&left, rights)| rights.into_iter().map(move |right| (left, right)))
            .collect();
        Grammar::new("S", NON_TERMINALS, TERMINALS, productions).unwrap()
    })
}

fn start_on_right(g: &Grammar) -> bool {
    g.production_iter()
        .flat_map(|(_, right)| right.iter())
        .any(|s| s.non_terminal() == Some(g.start_symbol()))
}

proptest! {
    #[test]
    fn normalized_grammar_is_cnf(g in grammar()) {
        let cnf = normalize_to_cnf(g).unwrap();
        prop_assert!(cnf.is_cnf(), "not in CNF:\n{}", cnf);
    }

    #[test]
    fn normalization_preserves_language(g in grammar()) {
        let cnf = g.to_cnf().unwrap();
        for word in words(&TERMINALS, MAX_WORD_LEN) {
            prop_assert_eq!(
                earley_accepts(&g, &word),
                cnf.cyk_accepts(&word).unwrap(),
                "word {:?}\n{}\n--\n{}", word, g, cnf
            );
        }
    }

    #[test]
    fn normalized_grammar_has_no_useless_or_unit_symbols(g in grammar()) {
        let cnf = g.to_cnf().unwrap();
        let non_terminals = cnf.non_terminal_iter().count();

        prop_assert_eq!(cnf.calculate_reachable().len(), non_terminals);
        let productive = cnf.calculate_productive().len();
        prop_assert!(
            productive == non_terminals || (non_terminals == 1 && cnf.production_count() == 0),
            "unproductive symbols in\n{}", cnf
        );
        prop_assert!(cnf
            .production_iter()
            .all(|(_, right)| !matches!(right.as_slice(), [Symbol::NonTerminal(_)])));
    }

    #[test]
    fn normalization_is_idempotent(g in grammar()) {
        let once = g.to_cnf().unwrap();
        let twice = once.to_cnf().unwrap();
        prop_assert_eq!(&twice, &once);
    }

    #[test]
    fn start_epsilon_never_appears_with_recursive_start(g in grammar()) {
        let cnf = g.to_cnf().unwrap();
        prop_assert!(!(cnf.derives_empty() && start_on_right(&cnf)), "{}", cnf);
    }

    #[test]
    fn passes_never_lose_declared_start(g in grammar()) {
        for (_, step) in g.cnf_steps().unwrap() {
            prop_assert!(step.is_non_terminal(step.start_symbol()));
            prop_assert!(step.validate().is_ok());
        }
    }
}
