/*
    Random sentences of a grammar
*/

use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;

use super::error::GrammarError;
use super::grammar::{Alternative, Symbol};
use super::Grammar;

/// Past this depth only the alternatives closest to a terminal string are
/// picked, which bounds every derivation.
pub const MAX_DEPTH: usize = 16;

fn alternative_height(right: &[Symbol], heights: &IndexMap<String, usize>) -> Option<usize> {
    right
        .iter()
        .filter_map(|s| s.non_terminal())
        .try_fold(0, |max, nt| heights.get(nt).map(|&h| max.max(h)))
        .map(|h| h + 1)
}

impl Grammar {
    pub fn derivation_heights(&self) -> IndexMap<String, usize> {
        let mut heights: IndexMap<String, usize> = IndexMap::new();

        let mut changed = true;
        while changed {
            changed = false;
            for (left, rights) in &self.productions {
                let best = rights
                    .iter()
                    .filter_map(|right| alternative_height(right, &heights))
                    .min();
                if let Some(best) = best {
                    if heights.get(left).map_or(true, |&h| best < h) {
                        heights.insert(left.clone(), best);
                        changed = true;
                    }
                }
            }
        }
        heights
    }

    pub fn generate_sentence<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<String>, GrammarError> {
        let heights = self.derivation_heights();
        if !heights.contains_key(&self.start_symbol) {
            return Err(GrammarError::EmptyLanguage);
        }

        let mut sentence = Vec::new();
        self.generate_non_terminal(&self.start_symbol, &heights, 0, rng, &mut sentence)?;
        Ok(sentence)
    }

    pub fn generate_sentences<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
    ) -> Result<Vec<Vec<String>>, GrammarError> {
        (0..count)
            .map(|_| self.generate_sentence(&mut *rng))
            .collect()
    }

    fn generate_non_terminal<R: Rng + ?Sized>(
        &self,
        non_terminal: &str,
        heights: &IndexMap<String, usize>,
        depth: usize,
        rng: &mut R,
        sentence: &mut Vec<String>,
    ) -> Result<(), GrammarError> {
        let mut candidates: Vec<(&Alternative, usize)> = self
            .alternatives(non_terminal)
            .filter_map(|right| alternative_height(right, heights).map(|h| (right, h)))
            .collect();
        if depth >= MAX_DEPTH {
            if let Some(lowest) = candidates.iter().map(|&(_, h)| h).min() {
                candidates.retain(|&(_, h)| h == lowest);
            }
        }

        let (alternative, _) = candidates
            .choose(rng)
            .ok_or(GrammarError::EmptyLanguage)?;
        for symbol in alternative.iter() {
            match symbol {
                Symbol::Terminal(t) => sentence.push(t.clone()),
                Symbol::NonTerminal(nt) => {
                    self.generate_non_terminal(nt, heights, depth + 1, &mut *rng, sentence)?
                }
            }
        }
        Ok(())
    }
}
