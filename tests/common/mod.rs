#![allow(dead_code)]

use std::collections::HashSet;

use chomsky_helper::{Grammar, Symbol};

fn add(
    charts: &mut [Vec<(usize, usize, usize)>],
    seen: &mut [HashSet<(usize, usize, usize)>],
    k: usize,
    item: (usize, usize, usize),
) {
    if seen[k].insert(item) {
        charts[k].push(item);
    }
}

/// Earley recognizer for arbitrary grammars, epsilon productions included.
/// Nullable nonterminals are skipped over when predicted, so completions
/// of empty derivations are never missed.
pub fn earley_accepts(g: &Grammar, word: &[&str]) -> bool {
    let prods: Vec<(&str, &[Symbol])> = g
        .production_iter()
        .map(|(left, right)| (left, right.as_slice()))
        .collect();
    let nullable = g.calculate_nullable();
    let n = word.len();

    let mut charts: Vec<Vec<(usize, usize, usize)>> = vec![Vec::new(); n + 1];
    let mut seen: Vec<HashSet<(usize, usize, usize)>> = vec![HashSet::new(); n + 1];
    for (p, (left, _)) in prods.iter().enumerate() {
        if *left == g.start_symbol() {
            add(&mut charts, &mut seen, 0, (p, 0, 0));
        }
    }

    for k in 0..=n {
        let mut i = 0;
        while i < charts[k].len() {
            let (p, dot, origin) = charts[k][i];
            let (left, right) = prods[p];
            match right.get(dot) {
                None => {
                    let mut j = 0;
                    while j < charts[origin].len() {
                        let (q, d, o) = charts[origin][j];
                        if matches!(prods[q].1.get(d), Some(Symbol::NonTerminal(b)) if b == left) {
                            add(&mut charts, &mut seen, k, (q, d + 1, o));
                        }
                        j += 1;
                    }
                }
                Some(Symbol::NonTerminal(b)) => {
                    for (q, (l, _)) in prods.iter().enumerate() {
                        if *l == b.as_str() {
                            add(&mut charts, &mut seen, k, (q, 0, k));
                        }
                    }
                    if nullable.contains(b) {
                        add(&mut charts, &mut seen, k, (p, dot + 1, origin));
                    }
                }
                Some(Symbol::Terminal(t)) => {
                    if k < n && word[k] == t.as_str() {
                        add(&mut charts, &mut seen, k + 1, (p, dot + 1, origin));
                    }
                }
            }
            i += 1;
        }
    }

    charts[n].iter().any(|&(p, dot, origin)| {
        let (left, right) = prods[p];
        origin == 0 && dot == right.len() && left == g.start_symbol()
    })
}

/// Every word over `alphabet` of length at most `max_len`, shortest first.
pub fn words<'a>(alphabet: &[&'a str], max_len: usize) -> Vec<Vec<&'a str>> {
    let mut all: Vec<Vec<&'a str>> = vec![Vec::new()];
    let mut last: Vec<Vec<&'a str>> = vec![Vec::new()];
    for _ in 0..max_len {
        let next: Vec<Vec<&'a str>> = last
            .iter()
            .flat_map(|w| {
                alphabet.iter().map(move |&s| {
                    let mut w = w.clone();
                    w.push(s);
                    w
                })
            })
            .collect();
        all.extend(next.iter().cloned());
        last = next;
    }
    all
}

/// Asserts that `cnf` accepts exactly the words `g` derives, up to `max_len`.
pub fn assert_same_language(g: &Grammar, cnf: &Grammar, max_len: usize) {
    let alphabet: Vec<&str> = g.terminal_iter().map(|t| t.as_str()).collect();
    for word in words(&alphabet, max_len) {
        assert_eq!(
            earley_accepts(g, &word),
            cnf.cyk_accepts(&word).unwrap(),
            "disagreement on {:?}",
            word
        );
    }
}
