//! Tree-walking code generator: lowers an [`ast::Node`](crate::ast::Node)
//! into flat stack-machine bytecode.
//!
//! Forward branches (`if`, the exit of `while`) can't have their target
//! written until the code after them has been generated. The generator
//! handles this the way the reference compiler does: reserve a one-cell
//! "hole" at the branch site, keep its index in a local, and write the real
//! offset once the target address is known. No reference into the buffer
//! ever needs to outlive the call that reserved it — just the index.


use crate::ast::Node;
use crate::opcode::Op;

/// Accumulates the bytecode buffer for one compilation.
pub struct CodeGen {
    buf: Vec<i8>,
}

impl CodeGen {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Generate code for a whole program and return the finished buffer.
    pub fn compile(node: &Node) -> Vec<i8> {
        let mut gen = CodeGen::new();
        gen.generate(node);
        gen.buf
    }

    /// Index the next emitted cell will occupy.
    fn here(&self) -> usize {
        self.buf.len()
    }

    fn emit_op(&mut self, op: Op) {
        self.buf.push(op.encode());
    }

    /// Emit an immediate operand cell (a variable index or a constant).
    /// Values outside the signed-byte range are truncated; the reference
    /// compiler does not check this either.
    fn emit_immediate(&mut self, value: i64) {
        self.buf.push(value as i8);
    }

    /// Reserve a one-cell hole for a branch operand, returning its index.
    fn hole(&mut self) -> usize {
        let at = self.here();
        self.buf.push(0);
        at
    }

    /// Write the final relative offset into a previously reserved hole.
    /// The offset is measured from the hole cell itself to `target`.
    fn patch(&mut self, hole: usize, target: usize) {
        let delta = target as i64 - hole as i64;
        self.buf[hole] = delta as i8;
    }

    fn generate(&mut self, node: &Node) {
        match node {
            Node::Var(idx) => {
                self.emit_op(Op::Fetch);
                self.emit_immediate(i64::from(*idx));
            }
            Node::Cst(value) => {
                self.emit_op(Op::Push);
                self.emit_immediate(*value);
            }
            Node::Add(lhs, rhs) => {
                self.generate(lhs);
                self.generate(rhs);
                self.emit_op(Op::Add);
            }
            Node::Sub(lhs, rhs) => {
                self.generate(lhs);
                self.generate(rhs);
                self.emit_op(Op::Sub);
            }
            Node::Lt(lhs, rhs) => {
                self.generate(lhs);
                self.generate(rhs);
                self.emit_op(Op::Lt);
            }
            Node::Set(idx, rhs) => {
                self.generate(rhs);
                self.emit_op(Op::Store);
                self.emit_immediate(i64::from(*idx));
            }
            Node::If1(cond, then) => {
                self.generate(cond);
                self.emit_op(Op::Jz);
                let past_then = self.hole();
                self.generate(then);
                let target = self.here();
                self.patch(past_then, target);
            }
            Node::If2(cond, then, alt) => {
                self.generate(cond);
                self.emit_op(Op::Jz);
                let to_else = self.hole();
                self.generate(then);
                self.emit_op(Op::Jmp);
                let to_end = self.hole();
                let else_target = self.here();
                self.patch(to_else, else_target);
                self.generate(alt);
                let end_target = self.here();
                self.patch(to_end, end_target);
            }
            Node::While(cond, body) => {
                let loop_start = self.here();
                self.generate(cond);
                self.emit_op(Op::Jz);
                let to_end = self.hole();
                self.generate(body);
                self.emit_op(Op::Jmp);
                let back = self.hole();
                self.patch(back, loop_start);
                let end_target = self.here();
                self.patch(to_end, end_target);
            }
            Node::Do(body, cond) => {
                let loop_start = self.here();
                self.generate(body);
                self.generate(cond);
                self.emit_op(Op::Jnz);
                let back = self.hole();
                self.patch(back, loop_start);
            }
            Node::Empty => {}
            Node::Seq(first, second) => {
                self.generate(first);
                self.generate(second);
            }
            Node::Expr(expr) => {
                self.generate(expr);
                self.emit_op(Op::Pop);
            }
            Node::Prog(body) => {
                self.generate(body);
                self.emit_op(Op::Halt);
            }
        }
    }
}

impl Default for CodeGen {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a bytecode buffer as a one-instruction-per-line disassembly, for
/// `--dump-bytecode`.
pub fn disassemble(buf: &[i8]) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let mut pc = 0usize;
    while pc < buf.len() {
        let op = Op::decode(buf[pc]);
        match op {
            Some(op @ (Op::Fetch | Op::Store | Op::Push | Op::Jz | Op::Jnz | Op::Jmp)) => {
                let operand = buf.get(pc + 1).copied().unwrap_or(0);
                let _ = writeln!(out, "{pc:04} {op:?} {operand}");
                pc += 2;
            }
            Some(op) => {
                let _ = writeln!(out, "{pc:04} {op:?}");
                pc += 1;
            }
            None => {
                let _ = writeln!(out, "{pc:04} <unknown {}>", buf[pc]);
                pc += 1;
            }
        }
    }
    out
}
