use indexmap::IndexSet;

use super::error::GrammarError;
use super::grammar::Symbol;
use super::Grammar;

impl Grammar {
    pub fn cyk_accepts(&self, word: &[&str]) -> Result<bool, GrammarError> {
        if !self.is_cnf() {
            return Err(GrammarError::NotInCnf);
        }
        let n = word.len();
        if n == 0 {
            return Ok(self.derives_empty());
        }

        let mut unary: Vec<(&str, &str)> = Vec::new();
        let mut binary: Vec<(&str, &str, &str)> = Vec::new();
        for (left, right) in self.production_iter() {
            match right.as_slice() {
                [Symbol::Terminal(t)] => unary.push((left, t.as_str())),
                [Symbol::NonTerminal(b), Symbol::NonTerminal(c)] => {
                    binary.push((left, b.as_str(), c.as_str()))
                }
                _ => {}
            }
        }

        // table[len - 1][i]: nonterminals deriving word[i..i + len]
        let mut table: Vec<Vec<IndexSet<&str>>> = vec![vec![IndexSet::new(); n]; n];
        for (i, &w) in word.iter().enumerate() {
            for &(left, t) in &unary {
                if t == w {
                    table[0][i].insert(left);
                }
            }
        }

        for len in 2..=n {
            for i in 0..=n - len {
                for split in 1..len {
                    for &(a, b, c) in &binary {
                        if table[split - 1][i].contains(b)
                            && table[len - split - 1][i + split].contains(c)
                        {
                            table[len - 1][i].insert(a);
                        }
                    }
                }
            }
        }

        Ok(table[n - 1][0].contains(self.start_symbol()))
    }

    pub fn cyk_accepts_sentence(&self, sentence: &str) -> Result<bool, GrammarError> {
        let word: Vec<&str> = sentence.split_whitespace().collect();
        self.cyk_accepts(&word)
    }
}
