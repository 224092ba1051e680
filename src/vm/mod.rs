//! The stack machine that executes generated bytecode.

#[cfg(test)]
mod tests;

use crate::opcode::Op;

/// Number of addressable variables, one per lowercase letter.
pub const BANK_SIZE: usize = 26;

/// The fixed bank of integer variables, indexed `0..=25` for `a..=z`.
pub struct VarBank([i64; BANK_SIZE]);

impl VarBank {
    fn new() -> Self {
        Self([0; BANK_SIZE])
    }

    pub fn get(&self, idx: u8) -> i64 {
        self.0[usize::from(idx)]
    }

    /// Every variable paired with its letter, in `a..z` order.
    pub fn iter(&self) -> impl Iterator<Item = (char, i64)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, &v)| ((b'a' + i as u8) as char, v))
    }
}

/// Executes a bytecode buffer to completion and yields the final variable
/// bank.
///
/// The reference machine treats stack underflow, bank-index overflow, an
/// unrecognized opcode, and running off the end of the buffer without
/// hitting `HALT` as unchecked behavior. This implementation panics on
/// those conditions instead of silently misbehaving, since they can only
/// arise from a bug in this crate's own code generator, never from
/// syntactically valid input — see [`crate::error::SyntaxError`]'s doc
/// comment for why no such input can reach the machine with malformed code.
pub struct Vm {
    code: Vec<i8>,
    stack: Vec<i64>,
    bank: VarBank,
    pc: usize,
}

impl Vm {
    pub fn new(code: Vec<i8>) -> Self {
        Self {
            code,
            stack: Vec::new(),
            bank: VarBank::new(),
            pc: 0,
        }
    }

    /// Run until `HALT`, returning the final variable bank.
    pub fn run(mut self) -> VarBank {
        loop {
            let op = Op::decode(self.fetch()).expect("unrecognized opcode");
            match op {
                Op::Fetch => {
                    let idx = self.fetch_operand();
                    self.stack.push(self.bank.get(idx as u8));
                }
                Op::Store => {
                    let idx = self.fetch_operand();
                    let top = *self.stack.last().expect("stack underflow on ISTORE");
                    self.bank.0[idx as usize] = top;
                }
                Op::Push => {
                    let value = self.fetch_operand();
                    self.stack.push(value);
                }
                Op::Pop => {
                    self.stack.pop().expect("stack underflow on IPOP");
                }
                Op::Add => {
                    let rhs = self.pop();
                    let lhs = self.pop();
                    self.stack.push(lhs + rhs);
                }
                Op::Sub => {
                    let rhs = self.pop();
                    let lhs = self.pop();
                    self.stack.push(lhs - rhs);
                }
                Op::Lt => {
                    let rhs = self.pop();
                    let lhs = self.pop();
                    self.stack.push(i64::from(lhs < rhs));
                }
                Op::Jz => {
                    let hole = self.pc;
                    let offset = self.fetch_operand();
                    if self.pop() == 0 {
                        self.pc = (hole as i64 + offset) as usize;
                    }
                }
                Op::Jnz => {
                    let hole = self.pc;
                    let offset = self.fetch_operand();
                    if self.pop() != 0 {
                        self.pc = (hole as i64 + offset) as usize;
                    }
                }
                Op::Jmp => {
                    let hole = self.pc;
                    let offset = self.fetch_operand();
                    self.pc = (hole as i64 + offset) as usize;
                }
                Op::Halt => break,
            }
        }
        self.bank
    }

    fn fetch(&mut self) -> i8 {
        let byte = self.code[self.pc];
        self.pc += 1;
        byte
    }

    /// Read the operand cell following an opcode and advance past it.
    fn fetch_operand(&mut self) -> i64 {
        i64::from(self.fetch())
    }

    fn pop(&mut self) -> i64 {
        self.stack.pop().expect("stack underflow")
    }
}
