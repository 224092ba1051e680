//! Token types for the source language.
//!
//! Each token carries just its kind plus whatever payload that kind needs
//! (the constant value of an `INT`, the variable index of an `ID`). There is
//! no lexeme text and no span: the language has no source-location
//! diagnostics (see [`crate::error::SyntaxError`]), so there is nothing for
//! a span to be used for.

use serde::Serialize;

/// A single lexical token.
///
/// Only one token is ever live at a time — the lexer exposes its current
/// token and an `advance` operation rather than a buffered stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Token {
    DoSym,
    ElseSym,
    IfSym,
    WhileSym,
    LBra,
    RBra,
    LPar,
    RPar,
    Plus,
    Minus,
    Less,
    Semi,
    Equal,
    /// An unsigned decimal integer literal.
    Int(i64),
    /// A single-letter variable name, already resolved to its bank index
    /// (`'a'..='z'` mapped to `0..=25`).
    Id(u8),
    Eoi,
}

/// The fixed reserved-word table, in the order the lexer tests against it.
///
/// Position in this table is what determines which of `DoSym`/`ElseSym`/
/// `IfSym`/`WhileSym` a matching spelling produces — exactly the reference
/// compiler's `words[]` array plus its index-as-enum-value trick.
pub const RESERVED_WORDS: [(&str, Token); 4] = [
    ("do", Token::DoSym),
    ("else", Token::ElseSym),
    ("if", Token::IfSym),
    ("while", Token::WhileSym),
];
