//! Full source-to-output pipeline tests, covering the literal scenario
//! table and the stack-balance / determinism properties.

use scriptor_core::vm::StringOutput;
use scriptor_core::{Compiler, Lexer, Parser, Vm};

fn run(source: &str) -> String {
    let tokens = Lexer::new(source).scan().expect("lex");
    let stmts = Parser::new(tokens).parse_program().expect("parse");
    let program = Compiler::new().compile(&stmts).expect("compile");
    let mut out = StringOutput::default();
    Vm::new(program).run(&mut out).expect("run");
    out.into_inner()
}

#[test]
fn arithmetic_with_precedence() {
    assert_eq!(run("print 1 + 2 * 3;"), "7\n");
}

#[test]
fn variable_declaration_and_reassignment() {
    assert_eq!(run("let x = 10; print x; x = x - 3; print x;"), "10\n7\n");
}

#[test]
fn comparisons_and_boolean_negation() {
    assert_eq!(
        run("print 5 > 3; print 5 == 3; print !(1 == 1);"),
        "true\nfalse\nfalse\n"
    );
}

#[test]
fn while_loop() {
    assert_eq!(
        run("let i = 0; while (i < 3) { print i; i = i + 1; }"),
        "0\n1\n2\n"
    );
}

#[test]
fn if_without_else_branch() {
    assert_eq!(run("let x = 0; if (1 < 2) x = 42; print x;"), "42\n");
}

#[test]
fn integer_division_and_modulo() {
    assert_eq!(run("print 10 / 3; print 10 % 3;"), "3\n1\n");
}

#[test]
fn determinism_across_repeated_runs() {
    let source = "let total = 0; let i = 0; while (i < 5) { total = total + i; i = i + 1; } print total;";
    assert_eq!(run(source), run(source));
}

#[test]
fn nested_blocks_share_the_flat_slot_space() {
    assert_eq!(
        run("let x = 1; { let y = 2; x = x + y; } print x;"),
        "3\n"
    );
}

#[test]
fn comment_only_lines_do_not_affect_line_tracking() {
    let source = "// leading comment\nlet x = 1;\nprint x;";
    assert_eq!(run(source), "1\n");
}
