//! Black-box end-to-end tests driving the compiled binary the way a real
//! user would: source text on stdin, the variable bank on stdout.

use assert_cmd::Command;
use predicates::prelude::*;

fn run(source: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("tinyc")
        .unwrap()
        .write_stdin(source)
        .assert()
}

#[test]
fn straight_line_assignment() {
    run("a=1;b=2;c=a+b;")
        .success()
        .stdout("a = 1\nb = 2\nc = 3\n");
}

#[test]
fn chained_assignment_and_comparison() {
    run("a=b=c=2<3;").success().stdout("a = 1\nb = 1\nc = 1\n");
}

#[test]
fn if_else_takes_the_true_branch() {
    run("if(1)a=1;else a=2;").success().stdout("a = 1\n");
}

#[test]
fn if_else_takes_the_false_branch() {
    run("if(0)a=1;else a=2;").success().stdout("a = 2\n");
}

#[test]
fn while_loop_sums_a_range() {
    run("{i=1;while(i<6){a=a+i;i=i+1;}}")
        .success()
        .stdout("a = 15\ni = 6\n");
}

#[test]
fn do_while_runs_the_body_once_even_when_the_condition_starts_false() {
    run("do a=a+1; while(0);").success().stdout("a = 1\n");
}

#[test]
fn zero_valued_variables_are_not_printed() {
    run("a=1;b=0;").success().stdout("a = 1\n");
}

#[test]
fn empty_program_prints_nothing() {
    run(";").success().stdout("");
}

#[test]
fn assignment_target_must_be_a_bare_identifier() {
    run("(a)=1;")
        .failure()
        .code(1)
        .stderr(predicate::str::contains("syntax error"));
}

#[test]
fn missing_semicolon_is_rejected() {
    run("a=1").failure().code(1);
}

#[test]
fn unterminated_block_is_rejected() {
    run("{a=1;").failure().code(1);
}

#[test]
fn multi_letter_identifier_is_rejected() {
    run("foo=1;").failure().code(1);
}

#[test]
fn chained_comparison_is_rejected() {
    run("a=1<2<3;").failure().code(1);
}

#[test]
fn unrecognized_character_is_rejected() {
    run("a=1;$").failure().code(1);
}

#[test]
fn dump_ast_goes_to_stderr_and_does_not_change_stdout() {
    Command::cargo_bin("tinyc")
        .unwrap()
        .arg("--dump-ast")
        .write_stdin("a=1;")
        .assert()
        .success()
        .stdout("a = 1\n")
        .stderr(predicate::str::contains("Set"));
}

#[test]
fn dump_bytecode_goes_to_stderr_and_does_not_change_stdout() {
    Command::cargo_bin("tinyc")
        .unwrap()
        .arg("--dump-bytecode")
        .write_stdin("a=1;")
        .assert()
        .success()
        .stdout("a = 1\n")
        .stderr(predicate::str::contains("Halt"));
}
