use std::fmt::Display;

use crowbook_text_processing::escape;
use serde::Serialize;

use super::{Grammar, EPSILON};

#[derive(Debug, Clone, Serialize)]
pub struct ProductionOutput<'a> {
    pub left: &'a str,
    pub rights: Vec<Vec<&'a str>>,
}

fn right_or_epsilon(right: &[&str]) -> String {
    if right.is_empty() {
        EPSILON.to_string()
    } else {
        right.join(" ")
    }
}

impl ProductionOutput<'_> {
    pub fn to_plaintext(&self, left_width: usize, multiline: bool) -> String {
        self.rights
            .iter()
            .map(|right| right_or_epsilon(right))
            .enumerate()
            .map(|(i, right)| {
                if i == 0 {
                    format!("{:>width$} -> {}", self.left, right, width = left_width)
                } else if multiline {
                    format!("{:>width$}  | {}", "", right, width = left_width)
                } else {
                    format!(" | {}", right)
                }
            })
            .collect::<Vec<_>>()
            .join(if multiline { "\n" } else { "" })
    }

    pub fn to_latex(&self, and_sign: bool) -> String {
        if self.rights.is_empty() {
            return String::new();
        }

        let left = if and_sign {
            format!("{} & \\rightarrow &", escape::tex(self.left))
        } else {
            format!("{} \\rightarrow ", escape::tex(self.left))
        };
        let right = self
            .rights
            .iter()
            .map(|right| {
                if right.is_empty() {
                    "\\epsilon".to_string()
                } else {
                    right
                        .iter()
                        .map(|s| escape::tex(*s))
                        .collect::<Vec<_>>()
                        .join(" \\ ")
                }
            })
            .collect::<Vec<_>>()
            .join(" \\mid ");

        left + &right
    }
}

#[derive(Debug, Serialize)]
pub struct ProductionOutputVec<'a> {
    start: &'a str,
    productions: Vec<ProductionOutput<'a>>,
}

impl<'a> ProductionOutputVec<'a> {
    fn non_empty(&self) -> impl Iterator<Item = &ProductionOutput<'a>> {
        self.productions.iter().filter(|p| !p.rights.is_empty())
    }

    pub fn to_plaintext(&self) -> String {
        let left_max_len = self.non_empty().map(|p| p.left.len()).max().unwrap_or(0);
        self.non_empty()
            .map(|s| s.to_plaintext(left_max_len, true))
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        std::iter::once("\\[\\begin{array}{cll}".to_string())
            .chain(self.non_empty().map(|s| s.to_latex(true)))
            .chain(std::iter::once("\\end{array}\\]".to_string()))
            .collect::<Vec<String>>()
            .join("\\\\\n")
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Grammar {
    pub fn to_production_output_vec(&self) -> ProductionOutputVec<'_> {
        let productions = self
            .productions
            .iter()
            .map(|(left, rights)| ProductionOutput {
                left: left.as_str(),
                rights: rights
                    .iter()
                    .map(|right| right.iter().map(|s| s.name()).collect())
                    .collect(),
            })
            .collect();
        ProductionOutputVec {
            start: self.start_symbol(),
            productions,
        }
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_production_output_vec().to_plaintext())
    }
}
