// tinylc: Tiny Language Compiler front end with parse visualization data

mod dfa;
mod lexer;
mod parser;
mod report;
mod tree;

use std::fs;
use std::path::Path;

use lexer::tokenize;
use parser::grammar::Grammar;
use parser::ll1::{coarsen, Ll1Parser};
use parser::table::ParseTable;
use tree::ast::build_ast;
use tree::derivation::build_derivation_tree;

fn usage(program_name: &str) {
    eprintln!("Usage: {} <file>              tokenize a source file", program_name);
    eprintln!("       {} --parse \"<expr>\"    parse an expression", program_name);
    eprintln!("       {} --grammar           print both grammar variants", program_name);
    eprintln!("       {} --patterns          print the token patterns", program_name);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} checks.bool", program_name);
    eprintln!("  {} --parse \"a == 3 && !b\"", program_name);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("tinylc");

    match args.get(1).map(|s| s.as_str()) {
        Some("--grammar") => show_grammars(),
        Some("--patterns") => println!("{}", report::token_patterns()),
        Some("--parse") => match args.get(2) {
            Some(expr) => parse_expression(expr),
            None => {
                eprintln!("Error: --parse needs an expression");
                eprintln!();
                usage(program_name);
                std::process::exit(1);
            }
        },
        Some(path) => compile_file(path),
        None => {
            eprintln!("Error: No input provided");
            eprintln!();
            usage(program_name);
            std::process::exit(1);
        }
    }
}

/// Tokenize a source file and show the token table with validity states.
fn compile_file(path: &str) {
    if !Path::new(path).exists() {
        eprintln!("Error: File '{}' not found", path);
        std::process::exit(1);
    }

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Could not read '{}': {}", path, e);
            std::process::exit(1);
        }
    };

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Compilation Error: {}", e);
            std::process::exit(1);
        }
    };

    if tokens.is_empty() {
        println!("No tokens.");
        return;
    }

    println!("{}", report::token_table(&tokens));
    println!("{}", report::lexical_status(&tokens));
}

/// Parse an expression under both grammar variants, then show the trace and
/// both trees.
fn parse_expression(expr: &str) {
    let tokens = match tokenize(expr) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Compilation Error: {}", e);
            std::process::exit(1);
        }
    };
    let terminals = coarsen(&tokens);

    let left_grammar = Grammar::left_factored();
    let left_table = ParseTable::left_factored();
    let left_accepted = Ll1Parser::new(&left_grammar, &left_table).parse(&terminals);

    let right_grammar = Grammar::right_recursive();
    let right_table = ParseTable::right_recursive();
    let (accepted, trace) =
        Ll1Parser::new(&right_grammar, &right_table).parse_traced(&terminals);

    println!("Input terminals: {}", terminals.join(" "));
    println!("Left-factored grammar:   {}", verdict(left_accepted));
    println!("Right-recursive grammar: {}", verdict(accepted));
    println!();
    println!("{}", report::trace_table(&trace, accepted));

    if !accepted {
        eprintln!("Parsing Failed at step {}", trace.stacks.len());
        std::process::exit(1);
    }

    match build_derivation_tree(&trace.moves) {
        Ok(tree) => {
            println!("Parse tree:");
            println!("{}", tree);
        }
        Err(e) => eprintln!("Parse tree error: {}", e),
    }

    // Rebuild the AST from the token texts so multi-character operators
    // arrive as separate symbols however the user spaced the input.
    let spaced: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    match build_ast(&spaced.join(" ")) {
        Ok(tree) => {
            println!("Abstract syntax tree:");
            println!("{}", tree);
        }
        Err(e) => eprintln!("AST error: {}", e),
    }
}

fn verdict(accepted: bool) -> &'static str {
    if accepted {
        "accepted"
    } else {
        "rejected"
    }
}

fn show_grammars() {
    println!("{}", Grammar::left_factored());
    println!();
    println!("{}", Grammar::right_recursive());
}
