use clap::Parser;
use std::io::{self, BufRead};
use std::process;
use yardcalc::Calculator;

/// Evaluate arithmetic expressions. With no EXPR, evaluates each line of stdin.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the lexemes of each expression.
    #[arg(long)]
    tokens: bool,

    /// Print the expression tree as an s-expression.
    #[arg(long)]
    tree: bool,

    /// Don't color error messages.
    #[arg(long)]
    no_color: bool,

    /// The expression. Multiple arguments are joined with spaces.
    expr: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let calculator = Calculator::new();
    let mut ok = true;
    if args.expr.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.unwrap_or_else(|err| {
                eprintln!("Failed to read stdin: {}", err);
                process::exit(1);
            });
            if line.trim().is_empty() {
                continue;
            }
            ok &= run(&calculator, &args, &line);
        }
    } else {
        ok = run(&calculator, &args, &args.expr.join(" "));
    }
    if !ok {
        process::exit(1);
    }
}

fn run(calculator: &Calculator, args: &Args, source: &str) -> bool {
    if args.tokens {
        if let Ok(lexemes) = calculator.tokenize(source) {
            for lexeme in lexemes {
                println!("{:?}\t{:?}", lexeme.token, lexeme.text);
            }
        }
    }
    if args.tree {
        if let Ok(expr) = calculator.parse(source) {
            println!("{}", expr);
        }
    }
    match calculator.eval(source) {
        Ok(value) => {
            println!("{}", value);
            true
        }
        Err(err) => {
            eprintln!("{}", err.report(source));
            false
        }
    }
}
