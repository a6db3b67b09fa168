use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_missing_entry_is_one_error_on_program() {
    let diagnostics = check(|b| {
        b.function("f", &[], ReturnType::Void, []);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1001]);
    assert_eq!(diagnostics[0].node, NodeRef::Program);
    assert_eq!(diagnostics[0].message, "program has no entry function");
}

#[test]
fn test_empty_program() {
    let diagnostics = validate(&Program::default());
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1001]);
}

#[test]
fn test_entry_must_be_void() {
    let diagnostics = check(|b| {
        b.entry_returning(ReturnType::Number, []);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1002]);
    assert_eq!(diagnostics[0].node, NodeRef::Function(FunctionRef::Entry));
    assert_eq!(diagnostics[0].property, Some("return_type"));
    assert_eq!(
        diagnostics[0].message,
        "entry function must return `void`, found `number`"
    );
}

#[test]
fn test_duplicate_function_reported_per_extra_copy() {
    let diagnostics = check(|b| {
        b.function("f", &[], ReturnType::Void, []);
        b.function("g", &[], ReturnType::Void, []);
        b.function("f", &[], ReturnType::Void, []);
        b.function("f", &[], ReturnType::Void, []);
        b.entry([]);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1003, ErrorCode::E1003]);
    assert_eq!(
        diagnostics[0].node,
        NodeRef::Function(FunctionRef::Declared(2))
    );
    assert_eq!(
        diagnostics[1].node,
        NodeRef::Function(FunctionRef::Declared(3))
    );
}

#[test]
fn test_duplicate_parameter_is_one_error() {
    let diagnostics = check(|b| {
        b.function(
            "f",
            &[("x", VarType::Number), ("x", VarType::Boolean)],
            ReturnType::Void,
            [],
        );
        b.entry([]);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1004]);
    assert_eq!(
        diagnostics[0].node,
        NodeRef::Param {
            function: FunctionRef::Declared(0),
            index: 1
        }
    );
    assert_eq!(diagnostics[0].message, "duplicate parameter `x`");
}

#[test]
fn test_first_parameter_binding_wins() {
    // `x` resolves to the number parameter, so using it as a distance is fine.
    let diagnostics = check(|b| {
        let x = b.var("x");
        let step = forward(b, x);
        b.function(
            "f",
            &[("x", VarType::Number), ("x", VarType::Boolean)],
            ReturnType::Void,
            [step],
        );
        b.entry([]);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1004]);
}

#[test]
fn test_void_function_cannot_return_value() {
    let diagnostics = check(|b| {
        let one = b.number(1.0);
        let ret = b.ret(Some(one));
        b.function("f", &[], ReturnType::Void, [ret]);
        b.entry([]);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1005]);
    assert_eq!(
        diagnostics[0].message,
        "function `f` returns `void` and cannot return a value"
    );
}

#[test]
fn test_return_in_entry_is_checked() {
    let diagnostics = check(|b| {
        let t = b.boolean(true);
        let ret = b.ret(Some(t));
        let bare = b.ret(None);
        b.entry([bare, ret]);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1005]);
    assert_eq!(
        diagnostics[0].message,
        "entry function returns `void` and cannot return a value"
    );
}

#[test]
fn test_return_value_must_match_declared_type() {
    let diagnostics = check(|b| {
        let t = b.boolean(true);
        let ret = b.ret(Some(t));
        b.function("f", &[], ReturnType::Number, [ret]);
        b.entry([]);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1005]);
    assert_eq!(
        diagnostics[0].message,
        "function `f` returns `number`, found `boolean`"
    );
}

#[test]
fn test_bare_return_in_non_void_function() {
    let diagnostics = check(|b| {
        let ret = b.ret(None);
        b.function("f", &[], ReturnType::Boolean, [ret]);
        b.entry([]);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1005]);
    assert_eq!(diagnostics[0].message, "function `f` must return a `boolean` value");
}

#[test]
fn test_unknown_return_value_is_accepted() {
    // Only the unknown callee is reported, not the return type.
    let diagnostics = check(|b| {
        let call = b.call_expr("missing", []);
        let ret = b.ret(Some(call));
        b.function("f", &[], ReturnType::Number, [ret]);
        b.entry([]);
    });
    assert_eq!(codes(&diagnostics), vec![ErrorCode::E1014]);
}
