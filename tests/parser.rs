use pretty_assertions::assert_eq;
use quill::{
    ast::{BinaryOperator, Expr, FunctionDef, LiteralValue, Statement},
    error::ParseError,
    interpreter::lexer::tokenize,
    parse,
};

fn parse_line(src: &str) -> Vec<Statement> {
    let (tokens, errors) = tokenize(src, 1);
    assert!(errors.is_empty(), "unexpected lex errors: {errors:?}");
    parse(&tokens).unwrap_or_else(|e| panic!("failed to parse {src:?}: {e}"))
}

fn parse_err(src: &str) -> ParseError {
    let (tokens, _) = tokenize(src, 1);
    match parse(&tokens) {
        Ok(statements) => panic!("{src:?} parsed unexpectedly: {statements:?}"),
        Err(e) => e,
    }
}

fn single_expr(src: &str) -> Expr {
    match parse_line(src).as_slice() {
        [Statement::Expression { expr, .. }] => expr.clone(),
        other => panic!("expected one expression statement, got {other:?}"),
    }
}

fn int(n: i64) -> Expr {
    Expr::Literal { value: LiteralValue::Integer(n),
                    line:  1, }
}

fn text(s: &str) -> Expr {
    Expr::Literal { value: LiteralValue::Text(s.to_string()),
                    line:  1, }
}

fn var(name: &str) -> Expr {
    Expr::Variable { name: name.to_string(),
                     line: 1, }
}

fn bin(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line: 1 }
}

fn print(value: Expr) -> Statement {
    Statement::Print { value, line: 1 }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(single_expr("1 + 2 * 3"),
               bin(int(1), BinaryOperator::Add, bin(int(2), BinaryOperator::Mul, int(3))));
}

#[test]
fn same_precedence_is_left_associative() {
    assert_eq!(single_expr("10 - 4 - 3"),
               bin(bin(int(10), BinaryOperator::Sub, int(4)), BinaryOperator::Sub, int(3)));
    assert_eq!(single_expr("8 / 4 * 2"),
               bin(bin(int(8), BinaryOperator::Div, int(4)), BinaryOperator::Mul, int(2)));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(single_expr("(1 + 2) * 3"),
               bin(bin(int(1), BinaryOperator::Add, int(2)), BinaryOperator::Mul, int(3)));
}

#[test]
fn equality_sits_below_arithmetic() {
    assert_eq!(single_expr("x == 1 + 1"),
               Expr::Equal { left:  Box::new(var("x")),
                             right: Box::new(bin(int(1), BinaryOperator::Add, int(1))),
                             line:  1, });
}

#[test]
fn equality_is_not_associative() {
    assert_eq!(parse_err("a == b == c"),
               ParseError::UnexpectedToken { token: "==".to_string(),
                                             line:  1, });
}

#[test]
fn minus_before_a_number_in_operand_position_is_a_negative_literal() {
    assert_eq!(single_expr("5 - -3"), bin(int(5), BinaryOperator::Sub, int(-3)));
    assert_eq!(single_expr("5-3"), bin(int(5), BinaryOperator::Sub, int(3)));
    assert_eq!(parse_line("x = -3"),
               vec![Statement::Assign { name:  "x".to_string(),
                                        value: int(-3),
                                        line:  1, }]);
}

#[test]
fn minus_before_a_variable_is_rejected() {
    assert_eq!(parse_err("x = -y"),
               ParseError::UnexpectedToken { token: "y".to_string(),
                                             line:  1, });
}

#[test]
fn strings_are_whole_expressions() {
    assert_eq!(single_expr("\"hi\""), text("hi"));
    assert_eq!(parse_err("\"a\" + \"b\""),
               ParseError::UnexpectedToken { token: "+".to_string(),
                                             line:  1, });
    assert_eq!(single_expr("(\"a\") + (\"b\")"),
               bin(text("a"), BinaryOperator::Add, text("b")));
}

#[test]
fn calls_take_any_expressions_as_arguments() {
    assert_eq!(single_expr("f(1, g(x), \"s\", a == b)"),
               Expr::Call { name:      "f".to_string(),
                            arguments: vec![int(1),
                                            Expr::Call { name:      "g".to_string(),
                                                         arguments: vec![var("x")],
                                                         line:      1, },
                                            text("s"),
                                            Expr::Equal { left:  Box::new(var("a")),
                                                          right: Box::new(var("b")),
                                                          line:  1, }],
                            line:      1, });
    assert_eq!(single_expr("f()"),
               Expr::Call { name:      "f".to_string(),
                            arguments: vec![],
                            line:      1, });
}

#[test]
fn a_call_is_not_an_operand() {
    assert_eq!(parse_err("f(1) + 2"),
               ParseError::UnexpectedToken { token: "+".to_string(),
                                             line:  1, });
}

#[test]
fn if_with_and_without_else() {
    assert_eq!(parse_line("if (x): print(1) else: print(2)"),
               vec![Statement::If { condition:   var("x"),
                                    then_branch: Box::new(print(int(1))),
                                    else_branch: Some(Box::new(print(int(2)))),
                                    line:        1, }]);
    assert_eq!(parse_line("if (x): y = 1"),
               vec![Statement::If { condition:   var("x"),
                                    then_branch: Box::new(Statement::Assign { name:  "y".to_string(),
                                                                              value: int(1),
                                                                              line:  1, }),
                                    else_branch: None,
                                    line:        1, }]);
}

#[test]
fn else_binds_to_the_nearest_if() {
    let statements = parse_line("if (a): if (b): print(1) else: print(2)");

    let [Statement::If { then_branch,
                         else_branch: None,
                         .. }] = statements.as_slice()
    else {
        panic!("outer if should have no else: {statements:?}");
    };
    assert!(matches!(&**then_branch, Statement::If { else_branch: Some(_), .. }));
}

#[test]
fn while_loop() {
    assert_eq!(parse_line("while (n): n = n - 1"),
               vec![Statement::While { condition: var("n"),
                                       body:      Box::new(Statement::Assign { name:  "n".to_string(),
                                                                               value: bin(var("n"),
                                                                                          BinaryOperator::Sub,
                                                                                          int(1)),
                                                                               line:  1, }),
                                       line:      1, }]);
}

#[test]
fn function_definitions() {
    assert_eq!(parse_line("def add(a, b): print(a + b)"),
               vec![Statement::Function(FunctionDef { name:   "add".to_string(),
                                                      params: vec!["a".to_string(),
                                                                   "b".to_string()],
                                                      body:   Box::new(print(bin(var("a"),
                                                                                 BinaryOperator::Add,
                                                                                 var("b")))),
                                                      line:   1, })]);

    let statements = parse_line("def f(): x = 1");
    let [Statement::Function(def)] = statements.as_slice() else {
        panic!("expected a single definition: {statements:?}");
    };
    assert!(def.params.is_empty());
}

#[test]
fn trailing_comma_in_parameters_is_rejected() {
    assert_eq!(parse_err("def f(a,): x = a"),
               ParseError::UnexpectedToken { token: ")".to_string(),
                                             line:  1, });
}

#[test]
fn several_statements_on_one_line() {
    assert_eq!(parse_line("x = 1 print(x) x"),
               vec![Statement::Assign { name:  "x".to_string(),
                                        value: int(1),
                                        line:  1, },
                    print(var("x")),
                    Statement::Expression { expr: var("x"),
                                            line: 1, }]);
}

#[test]
fn empty_input_is_an_empty_program() {
    assert_eq!(parse_line("   "), vec![]);
}

#[test]
fn premature_end_of_input() {
    assert_eq!(parse_err("print(1"), ParseError::UnexpectedEndOfInput { line: 1 });
    assert_eq!(parse_err("if (x):"), ParseError::UnexpectedEndOfInput { line: 1 });
    assert_eq!(parse_err("x ="), ParseError::UnexpectedEndOfInput { line: 1 });
}

#[test]
fn syntax_error_messages() {
    assert_eq!(parse_err("x = )").to_string(),
               "Syntax error on line 1: Unexpected token ')'.");
    assert_eq!(parse_err("print(").to_string(),
               "Syntax error on line 1: Unexpected end of input.");
}
