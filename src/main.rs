use std::io::Read;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tinyc::ast::Arena;
use tinyc::cli::Args;
use tinyc::codegen::{self, CodeGen};
use tinyc::lexer::Lexer;
use tinyc::parser;
use tinyc::vm::Vm;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut source = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut source) {
        eprintln!("failed to read standard input: {err}");
        std::process::exit(1);
    }

    if let Err(err) = run(&source, &args) {
        let _ = err;
        eprintln!("syntax error");
        std::process::exit(1);
    }
}

fn run(source: &str, args: &Args) -> Result<(), tinyc::error::SyntaxError> {
    let arena = Arena::new();
    let mut lexer = Lexer::new(source)?;
    let prog = parser::parse(&mut lexer, &arena)?;
    tracing::debug!("parsed program into an AST");

    if args.dump_ast {
        match serde_json::to_string_pretty(prog) {
            Ok(json) => eprintln!("{json}"),
            Err(err) => tracing::warn!(%err, "failed to serialize AST"),
        }
    }

    let code = CodeGen::compile(prog);
    tracing::debug!(bytecode_len = code.len(), "generated bytecode");

    if args.dump_bytecode {
        eprint!("{}", codegen::disassemble(&code));
    }

    let bank = Vm::new(code).run();
    for (letter, value) in bank.iter() {
        if value != 0 {
            println!("{letter} = {value}");
        }
    }

    Ok(())
}
