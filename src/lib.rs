//! # Tiny-C
//!
//! A compiler and stack-machine executor for a tiny pedagogical imperative
//! language: assignment, `if`/`else`, `while`, `do`/`while`, block
//! statements, and integer arithmetic over a fixed bank of 26 variables
//! (`a`..`z`).
//!
//! ## Pipeline
//!
//! The program moves through four stages:
//!
//! 1. **Lexer** ([`lexer`]) — a one-token-lookahead tokenizer.
//! 2. **Parser** ([`parser`]) — recursive descent into an arena-allocated
//!    [`ast::Node`] tree.
//! 3. **Code generator** ([`codegen`]) — a tree walk that emits backpatched
//!    stack-machine bytecode ([`opcode`]).
//! 4. **Virtual machine** ([`vm`]) — executes the bytecode to a final
//!    variable bank.
//!
//! ## Example
//!
//! ```rust
//! use tinyc::ast::Arena;
//! use tinyc::codegen::CodeGen;
//! use tinyc::lexer::Lexer;
//! use tinyc::parser::parse;
//! use tinyc::vm::Vm;
//!
//! let arena = Arena::new();
//! let mut lexer = Lexer::new("a=1+2;").unwrap();
//! let prog = parse(&mut lexer, &arena).unwrap();
//! let code = CodeGen::compile(prog);
//! let bank = Vm::new(code).run();
//! assert_eq!(bank.get(0), 3);
//! ```

pub mod ast;
pub mod cli;
pub mod codegen;
pub mod error;
pub mod lexer;
pub mod opcode;
pub mod parser;
pub mod vm;
