use std::fmt::Display;

use super::error::GrammarError;
use super::grammar::Symbol;
use super::Grammar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Epsilon,
    Unit,
    Useless,
    Binarize,
}

impl Pass {
    pub const ALL: [Pass; 4] = [Pass::Epsilon, Pass::Unit, Pass::Useless, Pass::Binarize];

    pub fn apply(self, g: &mut Grammar) -> Result<(), GrammarError> {
        match self {
            Pass::Epsilon => g.eliminate_epsilon()?,
            Pass::Unit => g.eliminate_unit_productions(),
            Pass::Useless => g.eliminate_useless_symbols(),
            Pass::Binarize => g.binarize()?,
        }
        Ok(())
    }
}

impl Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pass::Epsilon => write!(f, "Eliminate epsilon productions"),
            Pass::Unit => write!(f, "Eliminate unit productions"),
            Pass::Useless => write!(f, "Eliminate useless symbols"),
            Pass::Binarize => write!(f, "Binarize"),
        }
    }
}

/// `A -> a` or `A -> B C`.
pub fn is_cnf_alternative(right: &[Symbol]) -> bool {
    matches!(
        right,
        [Symbol::Terminal(_)] | [Symbol::NonTerminal(_), Symbol::NonTerminal(_)]
    )
}

impl Grammar {
    pub fn is_cnf(&self) -> bool {
        self.production_iter().all(|(left, right)| {
            is_cnf_alternative(right) || (right.is_empty() && left == self.start_symbol)
        })
    }

    pub fn cnf_steps(&self) -> Result<Vec<(Pass, Grammar)>, GrammarError> {
        self.validate()?;

        let mut g = self.clone();
        let mut steps = Vec::with_capacity(Pass::ALL.len());
        for pass in Pass::ALL {
            pass.apply(&mut g)?;
            steps.push((pass, g.clone()));
        }
        Ok(steps)
    }

    pub fn to_cnf(&self) -> Result<Grammar, GrammarError> {
        normalize_to_cnf(self.clone())
    }
}

/// Converts `grammar` to Chomsky normal form. Nothing runs unless the
/// grammar is well formed.
pub fn normalize_to_cnf(mut grammar: Grammar) -> Result<Grammar, GrammarError> {
    grammar.validate()?;
    for pass in Pass::ALL {
        pass.apply(&mut grammar)?;
    }
    Ok(grammar)
}
