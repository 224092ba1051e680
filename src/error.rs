//! The compiler's one error kind.
//!
//! The source language's diagnostics are deliberately undifferentiated: a
//! lexical problem, a malformed identifier, and an unmet parser expectation
//! are all reported the same way, with no source location. This mirrors the
//! reference compiler's `syntax_error()`, which never says more than
//! `"syntax error"`.

use thiserror::Error;

/// The only way this compiler's front end can fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("syntax error")]
pub struct SyntaxError;
