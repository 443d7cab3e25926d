extern crate wasm_bindgen;

use wasm_bindgen::prelude::*;

pub mod grammar;
pub use grammar::{normalize_to_cnf, Grammar, GrammarError, Symbol};

fn error_to_json(e: &dyn std::fmt::Display) -> String {
    serde_json::json!({ "error": e.to_string() }).to_string()
}

#[wasm_bindgen]
pub fn cnf_to_json(grammar: &str) -> String {
    let g = crate::Grammar::parse(grammar).and_then(|g| g.to_cnf());
    match g {
        Ok(g) => match g.to_production_output_vec().to_json() {
            Ok(json) => json,
            Err(e) => error_to_json(&e),
        },
        Err(e) => error_to_json(&e),
    }
}
