//! Function declarations, hoisting, and definite-return analysis.

mod common;

use common::*;
use slate_core::{DataType, SemanticError};

#[test]
fn functions_call_each_other_regardless_of_order() {
    // callee is declared after caller; hoisting makes it visible.
    let program = program_of_functions(vec![
        function(
            "caller",
            vec![],
            DataType::Int,
            vec![stmt(ret(Some(call("callee", vec![]))))],
        ),
        function("callee", vec![], DataType::Int, vec![stmt(ret(Some(int(7))))]),
    ]);
    assert_ok(&program);
}

#[test]
fn recursion_resolves_through_hoisting() {
    let program = program_of_functions(vec![function(
        "loop_forever",
        vec![],
        DataType::Int,
        vec![stmt(ret(Some(call("loop_forever", vec![]))))],
    )]);
    assert_ok(&program);
}

#[test]
fn duplicate_function_names_are_rejected() {
    let program = program_of_functions(vec![
        function("f", vec![], DataType::Unit, vec![]),
        function("f", vec![], DataType::Unit, vec![]),
    ]);
    assert_eq!(
        expect_error(&program),
        SemanticError::RedeclaredFunction {
            name: "f".to_string(),
        }
    );
}

#[test]
fn duplicate_parameter_names_are_rejected() {
    let program = program_of_functions(vec![function(
        "f",
        vec![param("a", DataType::Int), param("a", DataType::Bool)],
        DataType::Unit,
        vec![],
    )]);
    assert_eq!(
        expect_error(&program),
        SemanticError::RedeclaredIdentifier {
            name: "a".to_string(),
        }
    );
}

#[test]
fn parameters_are_assignable_variables() {
    let program = program_of_functions(vec![function(
        "f",
        vec![param("a", DataType::Int)],
        DataType::Int,
        vec![stmt(assign("a", int(5))), stmt(ret(Some(var("a"))))],
    )]);
    assert_ok(&program);
}

#[test]
fn missing_return_in_non_unit_function() {
    let program = program_of_functions(vec![function(
        "f",
        vec![],
        DataType::Int,
        vec![stmt(print_stmt(int(1)))],
    )]);
    assert_eq!(
        expect_error(&program),
        SemanticError::MissingReturn {
            function: "f".to_string(),
        }
    );
}

#[test]
fn if_else_returning_on_both_paths_satisfies_definite_return() {
    // func f(b: bool) -> int { if b { return 1 } else { return 2 } }
    let program = program_of_functions(vec![function(
        "f",
        vec![param("b", DataType::Bool)],
        DataType::Int,
        vec![stmt(if_stmt(
            var("b"),
            vec![stmt(ret(Some(int(1))))],
            Some(vec![stmt(ret(Some(int(2))))]),
        ))],
    )]);
    assert_ok(&program);
}

#[test]
fn if_without_else_does_not_satisfy_definite_return() {
    let program = program_of_functions(vec![function(
        "f",
        vec![param("b", DataType::Bool)],
        DataType::Int,
        vec![stmt(if_stmt(var("b"), vec![stmt(ret(Some(int(1))))], None))],
    )]);
    assert_eq!(
        expect_error(&program),
        SemanticError::MissingReturn {
            function: "f".to_string(),
        }
    );
}

#[test]
fn while_never_counts_as_returning() {
    // func f() -> int { while true { return 1 } } -- conservative and
    // syntactic: the loop is not a return path even with a literal true.
    let program = program_of_functions(vec![function(
        "f",
        vec![],
        DataType::Int,
        vec![stmt(while_stmt(boolean(true), vec![stmt(ret(Some(int(1))))]))],
    )]);
    assert_eq!(
        expect_error(&program),
        SemanticError::MissingReturn {
            function: "f".to_string(),
        }
    );
}

#[test]
fn unit_function_may_fall_off_the_end() {
    let program = program_of_functions(vec![function(
        "noop",
        vec![],
        DataType::Unit,
        vec![stmt(print_stmt(int(1)))],
    )]);
    assert_ok(&program);
}

#[test]
fn unit_function_accepts_an_empty_return() {
    let program = program_of_functions(vec![function(
        "noop",
        vec![],
        DataType::Unit,
        vec![stmt(ret(None))],
    )]);
    assert_ok(&program);
}

#[test]
fn empty_return_in_int_function_is_a_type_mismatch() {
    let program = program_of_functions(vec![function(
        "f",
        vec![],
        DataType::Int,
        vec![stmt(ret(None))],
    )]);
    assert_eq!(
        expect_error(&program),
        SemanticError::ReturnTypeMismatch {
            function: "f".to_string(),
            expected: DataType::Int,
            actual: DataType::Unit,
        }
    );
}

#[test]
fn returned_value_may_widen_and_coerce() {
    // return 1 from a float function, return 1 from a bool function.
    let program = program_of_functions(vec![
        function("half", vec![], DataType::Float, vec![stmt(ret(Some(int(1))))]),
        function("flag", vec![], DataType::Bool, vec![stmt(ret(Some(int(1))))]),
    ]);
    assert_ok(&program);
}

#[test]
fn returned_float_does_not_narrow() {
    let program = program_of_functions(vec![function(
        "f",
        vec![],
        DataType::Int,
        vec![stmt(ret(Some(float(1.5))))],
    )]);
    assert_eq!(
        expect_error(&program),
        SemanticError::ReturnTypeMismatch {
            function: "f".to_string(),
            expected: DataType::Int,
            actual: DataType::Float,
        }
    );
}

#[test]
fn nested_function_captures_enclosing_bindings() {
    // func outer() -> int { var x: int := 1; func inner() -> int { return x }; return x }
    let program = program_of_functions(vec![function(
        "outer",
        vec![],
        DataType::Int,
        vec![
            local_var(var_decl("x", DataType::Int, Some(int(1)))),
            local_function(function(
                "inner",
                vec![],
                DataType::Int,
                vec![stmt(ret(Some(var("x"))))],
            )),
            stmt(ret(Some(var("x")))),
        ],
    )]);
    assert_ok(&program);
}

#[test]
fn nested_function_scope_ends_with_it() {
    // A nested function's parameter is not visible to the enclosing body.
    let program = program_of_functions(vec![function(
        "outer",
        vec![],
        DataType::Int,
        vec![
            local_function(function(
                "inner",
                vec![param("p", DataType::Int)],
                DataType::Int,
                vec![stmt(ret(Some(var("p"))))],
            )),
            stmt(ret(Some(var("p")))),
        ],
    )]);
    assert_eq!(
        expect_error(&program),
        SemanticError::UndeclaredIdentifier {
            name: "p".to_string(),
        }
    );
}

#[test]
fn reachability_is_restored_around_nested_functions() {
    // inner ends on a return; outer's items after the declaration are
    // still live.
    let program = program_of_functions(vec![function(
        "outer",
        vec![],
        DataType::Int,
        vec![
            local_function(function(
                "inner",
                vec![],
                DataType::Int,
                vec![stmt(ret(Some(int(1))))],
            )),
            stmt(ret(Some(int(2)))),
        ],
    )]);
    assert_ok(&program);
}
