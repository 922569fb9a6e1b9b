//! exprtool CLI entry point.
//!
//! Evaluates one expression. Variables can be bound on the command line with
//! `--var name=value`; any variable left unbound is prompted for on stdin.

use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use exprtool::config::{Associativity, EvalConfig, SubstitutionMode};
use exprtool::engine::evaluate_with_config;
use exprtool::prompt::PromptSource;
use exprtool::source::{Bindings, ValueSource, from_fn};

/// Evaluate an arithmetic expression with `+ - * /`, parentheses and variables.
#[derive(Parser, Debug)]
#[command(name = "exprtool", version, about, long_about = None)]
struct Args {
    /// Bind a variable, e.g. `--var x=3.5`. May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// JSON file with an evaluation config, e.g. `{"associativity": "left"}`.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Combine equal-precedence operators left to right.
    #[arg(long)]
    left_assoc: bool,

    /// Substitute only whole variable names.
    #[arg(long)]
    boundary_subst: bool,

    expression: String,
}

fn parse_binding(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, found '{}'", arg))?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(char::is_alphabetic) {
        return Err(format!("variable name must be alphabetic, found '{}'", name));
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value for '{}': {}", name, e))?;
    Ok((name.to_string(), value))
}

fn load_config(args: &Args) -> Result<EvalConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("failed to read config '{}': {}", path.display(), e))?;
            serde_json::from_str(&text)
                .map_err(|e| format!("invalid config '{}': {}", path.display(), e))?
        }
        None => EvalConfig::default(),
    };
    if args.left_assoc {
        config.associativity = Associativity::Left;
    }
    if args.boundary_subst {
        config.substitution = SubstitutionMode::Boundary;
    }
    Ok(config)
}

fn run(args: &Args) -> Result<f64, String> {
    let config = load_config(args)?;

    let mut bound = Bindings::new();
    for (name, value) in &args.vars {
        bound.set(name, *value).map_err(|e| e.to_string())?;
    }

    // stdin is only locked once a variable actually needs prompting.
    let mut prompt = None;
    let mut source = from_fn(|name: &str| match bound.get(name) {
        Some(value) => Ok(value),
        None => prompt.get_or_insert_with(PromptSource::stdio).resolve(name),
    });

    evaluate_with_config(&args.expression, &mut source, &config).map_err(|e| e.to_string())
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(value) => println!("{}", value),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
