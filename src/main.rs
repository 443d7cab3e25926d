mod cli;

use std::io::Read;
use std::{fs, process::ExitCode};

use clap::Parser;
use serde_json::json;

use chomsky_helper::grammar::Pass;
use chomsky_helper::Grammar;
use cli::{Cli, CliError, Output};

enum OutputFormat {
    Plain,
    LaTeX,
    JSON,
}

fn format_grammar(g: &Grammar, output_format: &OutputFormat) -> Result<String, CliError> {
    let t = g.to_production_output_vec();
    Ok(match output_format {
        OutputFormat::Plain => t.to_plaintext(),
        OutputFormat::LaTeX => t.to_latex(),
        OutputFormat::JSON => t.to_json()?,
    })
}

fn read_input(cli: &Cli) -> Result<String, CliError> {
    match &cli.file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CliError::Read(path.display().to_string(), e)),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| CliError::Read("standard input".to_string(), e))?;
            Ok(input)
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let output_format = if cli.latex {
        OutputFormat::LaTeX
    } else if cli.json {
        OutputFormat::JSON
    } else {
        OutputFormat::Plain
    };

    let g = Grammar::parse(&read_input(cli)?)?;
    let steps = g.cnf_steps()?;
    if cli.verbose {
        for (pass, step) in &steps {
            eprintln!("# {}\n{}\n", pass, step);
        }
    }
    let after = |pass: Pass| {
        steps
            .iter()
            .find(|(p, _)| *p == pass)
            .map(|(_, step)| step)
            .unwrap_or(&g)
    };

    for output in &cli.outputs {
        match output {
            Output::Prod => println!("{}", format_grammar(&g, &output_format)?),
            Output::Eps => println!("{}", format_grammar(after(Pass::Epsilon), &output_format)?),
            Output::Unit => println!("{}", format_grammar(after(Pass::Unit), &output_format)?),
            Output::Useless => {
                println!("{}", format_grammar(after(Pass::Useless), &output_format)?)
            }
            Output::Cnf => println!("{}", format_grammar(after(Pass::Binarize), &output_format)?),
            Output::Steps => {
                for (pass, step) in &steps {
                    match output_format {
                        OutputFormat::Plain => println!("# {}", pass),
                        OutputFormat::LaTeX => println!("% {}", pass),
                        OutputFormat::JSON => {}
                    }
                    println!("{}", format_grammar(step, &output_format)?);
                }
            }
            Output::Type => {
                let t = g.classify();
                match output_format {
                    OutputFormat::JSON => println!("{}", json!({ "type": t.to_string() })),
                    _ => println!("{}", t),
                }
            }
            Output::Gen => {
                let sentences = g.generate_sentences(&mut rand::thread_rng(), cli.amount)?;
                match output_format {
                    OutputFormat::JSON => println!("{}", serde_json::to_string(&sentences)?),
                    _ => {
                        for sentence in sentences {
                            println!("{}", sentence.join(" "));
                        }
                    }
                }
            }
            Output::Check => {
                let cnf = after(Pass::Binarize);
                let mut results = Vec::new();
                for word in &cli.word {
                    results.push((word.as_str(), cnf.cyk_accepts_sentence(word)?));
                }
                match output_format {
                    OutputFormat::JSON => {
                        let results: Vec<_> = results
                            .iter()
                            .map(|(word, accepted)| json!({ "sentence": word, "accepted": accepted }))
                            .collect();
                        println!("{}", serde_json::to_string(&results)?);
                    }
                    _ => {
                        for (word, accepted) in results {
                            println!("{}: {}", word, if accepted { "accepted" } else { "rejected" });
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
