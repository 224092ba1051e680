//! Recursive-descent parser for the source language.
//!
//! Each grammar rule is one function, stratified exactly as the reference
//! grammar lays it out: `expression` dispatches to `comparison`, which
//! dispatches to `sum`, which dispatches to `term`. Every function takes the
//! lexer positioned on the rule's first token and leaves it positioned just
//! past the rule's last token — the parser never looks more than one token
//! ahead, matching the lexer's own one-token-lookahead contract.


use crate::ast::{Arena, Node};
use crate::error::SyntaxError;
use crate::lexer::token::Token;
use crate::lexer::Lexer;

/// Parse a complete program: one statement, followed by end of input.
pub fn parse<'a>(lexer: &mut Lexer<'_>, arena: &'a Arena) -> Result<&'a Node<'a>, SyntaxError> {
    let body = statement(lexer, arena)?;
    expect(lexer, Token::Eoi)?;
    Ok(arena.alloc(Node::Prog(body)))
}

fn expect(lexer: &mut Lexer<'_>, token: Token) -> Result<(), SyntaxError> {
    if lexer.current() != token {
        return Err(SyntaxError);
    }
    lexer.advance()
}

/// `'(' expression ')'`
fn paren_expr<'a>(lexer: &mut Lexer<'_>, arena: &'a Arena) -> Result<&'a Node<'a>, SyntaxError> {
    expect(lexer, Token::LPar)?;
    let node = expression(lexer, arena)?;
    expect(lexer, Token::RPar)?;
    Ok(node)
}

/// A single identifier, an integer constant, or a parenthesized expression.
fn term<'a>(lexer: &mut Lexer<'_>, arena: &'a Arena) -> Result<&'a Node<'a>, SyntaxError> {
    match lexer.current() {
        Token::Id(idx) => {
            lexer.advance()?;
            Ok(arena.alloc(Node::Var(idx)))
        }
        Token::Int(value) => {
            lexer.advance()?;
            Ok(arena.alloc(Node::Cst(value)))
        }
        Token::LPar => paren_expr(lexer, arena),
        _ => Err(SyntaxError),
    }
}

/// `term (('+' | '-') term)*`, left-associative.
fn sum<'a>(lexer: &mut Lexer<'_>, arena: &'a Arena) -> Result<&'a Node<'a>, SyntaxError> {
    let mut node = term(lexer, arena)?;
    loop {
        node = match lexer.current() {
            Token::Plus => {
                lexer.advance()?;
                let rhs = term(lexer, arena)?;
                arena.alloc(Node::Add(node, rhs))
            }
            Token::Minus => {
                lexer.advance()?;
                let rhs = term(lexer, arena)?;
                arena.alloc(Node::Sub(node, rhs))
            }
            _ => break,
        };
    }
    Ok(node)
}

/// `sum ('<' sum)?` — `<` does not chain or associate.
fn comparison<'a>(lexer: &mut Lexer<'_>, arena: &'a Arena) -> Result<&'a Node<'a>, SyntaxError> {
    let lhs = sum(lexer, arena)?;
    if lexer.current() == Token::Less {
        lexer.advance()?;
        let rhs = sum(lexer, arena)?;
        return Ok(arena.alloc(Node::Lt(lhs, rhs)));
    }
    Ok(lhs)
}

/// `Id '=' expression | comparison`
///
/// The grammar only admits assignment as the outermost form: the left side
/// of `=` must be a bare identifier, never a parenthesized or computed
/// expression. This is checked by committing to assignment only when a
/// `Var` term is immediately followed by `=`, which also gives right
/// associativity for chains like `a = b = c`.
fn expression<'a>(lexer: &mut Lexer<'_>, arena: &'a Arena) -> Result<&'a Node<'a>, SyntaxError> {
    if let Token::Id(idx) = lexer.current() {
        let mut lookahead = *lexer;
        lookahead.advance()?;
        if lookahead.current() == Token::Equal {
            *lexer = lookahead;
            lexer.advance()?;
            let rhs = expression(lexer, arena)?;
            return Ok(arena.alloc(Node::Set(idx, rhs)));
        }
    }
    comparison(lexer, arena)
}

/// One statement, per the reference grammar's `statement` production.
fn statement<'a>(lexer: &mut Lexer<'_>, arena: &'a Arena) -> Result<&'a Node<'a>, SyntaxError> {
    match lexer.current() {
        Token::IfSym => {
            lexer.advance()?;
            let cond = paren_expr(lexer, arena)?;
            let then_branch = statement(lexer, arena)?;
            if lexer.current() == Token::ElseSym {
                lexer.advance()?;
                let else_branch = statement(lexer, arena)?;
                Ok(arena.alloc(Node::If2(cond, then_branch, else_branch)))
            } else {
                Ok(arena.alloc(Node::If1(cond, then_branch)))
            }
        }
        Token::WhileSym => {
            lexer.advance()?;
            let cond = paren_expr(lexer, arena)?;
            let body = statement(lexer, arena)?;
            Ok(arena.alloc(Node::While(cond, body)))
        }
        Token::DoSym => {
            lexer.advance()?;
            let body = statement(lexer, arena)?;
            expect(lexer, Token::WhileSym)?;
            let cond = paren_expr(lexer, arena)?;
            expect(lexer, Token::Semi)?;
            Ok(arena.alloc(Node::Do(body, cond)))
        }
        Token::Semi => {
            lexer.advance()?;
            Ok(arena.alloc(Node::Empty))
        }
        Token::LBra => {
            lexer.advance()?;
            let mut node: &Node<'_> = arena.alloc(Node::Empty);
            while lexer.current() != Token::RBra {
                let next = statement(lexer, arena)?;
                node = arena.alloc(Node::Seq(node, next));
            }
            lexer.advance()?;
            Ok(node)
        }
        _ => {
            let expr = expression(lexer, arena)?;
            expect(lexer, Token::Semi)?;
            Ok(arena.alloc(Node::Expr(expr)))
        }
    }
}
