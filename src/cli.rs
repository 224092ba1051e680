//! Command-line surface.
//!
//! The default invocation takes no arguments: it reads a program from
//! standard input and prints the nonzero variable bank to standard output.
//! The two flags below are opt-in diagnostics layered on top of that; they
//! write to standard error and never alter the stdout contract.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(version, about = "Compiler and stack-machine executor for the Tiny-C pedagogical language")]
pub struct Args {
    /// Print the parsed syntax tree as JSON to stderr before executing.
    #[arg(long)]
    pub dump_ast: bool,

    /// Print a disassembly of the generated bytecode to stderr before
    /// executing.
    #[arg(long)]
    pub dump_bytecode: bool,
}
