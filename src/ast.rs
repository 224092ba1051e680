//! The syntax tree built by the parser and walked by the code generator.
//!
//! Nodes are allocated out of a [`bumpalo`] arena and linked by shared
//! references rather than `Box`: the tree is built once, read twice (by the
//! code generator and, optionally, by `--dump-ast`), and never mutated or
//! individually freed, so an arena is a better fit than per-node heap
//! ownership.

use serde::Serialize;

/// Owns the storage for one compilation's syntax tree.
///
/// Dropping the arena frees every node it handed out at once; there is no
/// way to free a single node early, matching the tree's one-shot lifetime.
pub struct Arena {
    bump: bumpalo::Bump,
}

impl Arena {
    pub fn new() -> Self {
        Self {
            bump: bumpalo::Bump::new(),
        }
    }

    /// Allocate `node` in the arena and return a reference to it that lives
    /// as long as the arena does.
    pub fn alloc<'a>(&'a self, node: Node<'a>) -> &'a Node<'a> {
        self.bump.alloc(node)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

/// One node of the syntax tree.
///
/// This mirrors the reference compiler's single `tag`-plus-three-children
/// node shape, but as a proper sum type: each variant only carries the
/// children it actually has, so there's no `NULL`-child convention to get
/// wrong in the code generator.
#[derive(Debug, Serialize)]
pub enum Node<'a> {
    /// A reference to a variable, by its bank index (`0..=25`).
    Var(u8),
    /// An integer constant.
    Cst(i64),
    Add(&'a Node<'a>, &'a Node<'a>),
    Sub(&'a Node<'a>, &'a Node<'a>),
    Lt(&'a Node<'a>, &'a Node<'a>),
    /// `id = expr`, by the variable's bank index.
    Set(u8, &'a Node<'a>),
    /// `if (cond) then`.
    If1(&'a Node<'a>, &'a Node<'a>),
    /// `if (cond) then else alt`.
    If2(&'a Node<'a>, &'a Node<'a>, &'a Node<'a>),
    While(&'a Node<'a>, &'a Node<'a>),
    /// `do body while (cond)`.
    Do(&'a Node<'a>, &'a Node<'a>),
    /// A statement or block with no effect: `;`, or `{}`.
    Empty,
    /// Two statements in sequence.
    Seq(&'a Node<'a>, &'a Node<'a>),
    /// An expression used as a statement, i.e. followed by `;`.
    Expr(&'a Node<'a>),
    /// The whole program: its single top-level statement.
    Prog(&'a Node<'a>),
}
