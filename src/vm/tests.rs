use crate::opcode::Op;
use crate::vm::Vm;

fn run(code: Vec<i8>) -> [i64; 26] {
    let bank = Vm::new(code).run();
    let mut out = [0i64; 26];
    for (i, (_, v)) in bank.iter().enumerate() {
        out[i] = v;
    }
    out
}

#[test]
fn push_store_leaves_value_on_stack() {
    // a = 5; — ISTORE does not pop, so the explicit IPOP is what empties
    // the stack, not the store itself.
    let code = vec![
        Op::Push.encode(),
        5,
        Op::Store.encode(),
        0,
        Op::Pop.encode(),
        Op::Halt.encode(),
    ];
    let bank = run(code);
    assert_eq!(bank[0], 5);
}

#[test]
fn chained_assignment_propagates_through_non_popping_store() {
    // a = b = 7; compiles to: IPUSH 7, ISTORE 1 (b), ISTORE 0 (a), IPOP, HALT
    let code = vec![
        Op::Push.encode(),
        7,
        Op::Store.encode(),
        1,
        Op::Store.encode(),
        0,
        Op::Pop.encode(),
        Op::Halt.encode(),
    ];
    let bank = run(code);
    assert_eq!(bank[0], 7);
    assert_eq!(bank[1], 7);
}

#[test]
fn arithmetic_operand_order() {
    // 10 - 3, not 3 - 10.
    let code = vec![
        Op::Push.encode(),
        10,
        Op::Push.encode(),
        3,
        Op::Sub.encode(),
        Op::Store.encode(),
        0,
        Op::Pop.encode(),
        Op::Halt.encode(),
    ];
    let bank = run(code);
    assert_eq!(bank[0], 7);
}

#[test]
fn less_than_pushes_one_or_zero() {
    let code = vec![
        Op::Push.encode(),
        2,
        Op::Push.encode(),
        3,
        Op::Lt.encode(),
        Op::Store.encode(),
        0,
        Op::Pop.encode(),
        Op::Halt.encode(),
    ];
    assert_eq!(run(code)[0], 1);

    let code = vec![
        Op::Push.encode(),
        3,
        Op::Push.encode(),
        2,
        Op::Lt.encode(),
        Op::Store.encode(),
        0,
        Op::Pop.encode(),
        Op::Halt.encode(),
    ];
    assert_eq!(run(code)[0], 0);
}

#[test]
fn jz_skips_when_condition_is_zero() {
    // if (0) a = 1;  ->  a stays 0.
    let code = vec![
        Op::Push.encode(),
        0,
        Op::Jz.encode(),
        6, // hole at index 3, target index 9 (HALT) => delta 6
        Op::Push.encode(),
        1,
        Op::Store.encode(),
        0,
        Op::Pop.encode(),
        Op::Halt.encode(),
    ];
    assert_eq!(run(code)[0], 0);
}

#[test]
fn jz_falls_through_when_condition_is_nonzero() {
    let code = vec![
        Op::Push.encode(),
        1,
        Op::Jz.encode(),
        100, // never taken, so the bogus offset is never followed
        Op::Push.encode(),
        1,
        Op::Store.encode(),
        0,
        Op::Pop.encode(),
        Op::Halt.encode(),
    ];
    assert_eq!(run(code)[0], 1);
}

#[test]
fn jmp_unconditional_backward_branch_runs_a_loop() {
    // while (a < 3) a = a + 1;
    let code = crate::codegen::CodeGen::compile({
        let arena = crate::ast::Arena::new();
        let mut lexer = crate::lexer::Lexer::new("while(a<3)a=a+1;").unwrap();
        crate::parser::parse(&mut lexer, &arena).unwrap()
    });
    assert_eq!(run(code)[0], 3);
}

#[test]
fn do_while_runs_body_at_least_once() {
    let code = crate::codegen::CodeGen::compile({
        let arena = crate::ast::Arena::new();
        let mut lexer = crate::lexer::Lexer::new("do a=a+1; while(a<1);").unwrap();
        crate::parser::parse(&mut lexer, &arena).unwrap()
    });
    assert_eq!(run(code)[0], 1);
}

#[test]
fn end_to_end_nested_control_flow() {
    let src = "{i=1;while(i<6){a=a+i;i=i+1;}}";
    let code = crate::codegen::CodeGen::compile({
        let arena = crate::ast::Arena::new();
        let mut lexer = crate::lexer::Lexer::new(src).unwrap();
        crate::parser::parse(&mut lexer, &arena).unwrap()
    });
    let bank = run(code);
    assert_eq!(bank[0], 15); // a = 1+2+3+4+5
    assert_eq!(bank[8], 6); // i
}
