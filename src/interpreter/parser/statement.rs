use std::iter::Peekable;

use crate::{
    ast::{Expr, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, parse_identifier},
        },
    },
    stack::ensure_sufficient_stack,
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a `print(...)` statement.
/// - an `if` conditional.
/// - a `while` loop.
/// - a `def` function definition.
/// - an assignment.
/// - an expression used as a statement.
///
/// The leading token decides; an identifier directly followed by `=` is an
/// assignment, anything else falls through to an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    ensure_sufficient_stack(|| {
        let current_line = match tokens.peek() {
            Some((Token::Print, _)) => return parse_print(tokens),
            Some((Token::If, _)) => return parse_if(tokens),
            Some((Token::While, _)) => return parse_while(tokens),
            Some((Token::Def, _)) => return parse_function_definition(tokens),
            Some((_, line)) => *line,
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        };

        if let Some(statement) = parse_assignment(tokens)? {
            return Ok(statement);
        }

        let expr = parse_expression(tokens)?;

        Ok(Statement::Expression { expr,
                                   line: current_line })
    })
}

/// Parses a `print` statement.
///
/// Grammar: `print_statement := "print" "(" expression ")"`
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Print)?;
    expect(tokens, &Token::LParen)?;
    let value = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;

    Ok(Statement::Print { value, line })
}

/// Parses an `if` statement with an optional `else` branch.
///
/// Syntax:
/// ```text
///     if (<condition>): <statement>
///     if (<condition>): <statement> else: <statement>
/// ```
/// Each branch is exactly one statement.
///
/// # Errors
/// - `UnexpectedToken` if the parentheses or colons are missing.
/// - Propagates any errors from sub-statement parsing.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::If)?;
    let condition = parse_condition(tokens)?;
    let then_branch = parse_statement(tokens)?;

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        expect(tokens, &Token::Colon)?;
        Some(Box::new(parse_statement(tokens)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch: Box::new(then_branch),
                       else_branch,
                       line })
}

/// Parses a `while` loop.
///
/// Grammar: `while_loop := "while" "(" expression ")" ":" statement`
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::While)?;
    let condition = parse_condition(tokens)?;
    let body = parse_statement(tokens)?;

    Ok(Statement::While { condition,
                          body: Box::new(body),
                          line })
}

/// Parses the `"(" expression ")" ":"` head shared by `if` and `while`.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &Token::RParen)?;
    expect(tokens, &Token::Colon)?;
    Ok(condition)
}

/// Parses an assignment of the form `<identifier> = <expression>`.
///
/// Peeks one token past the identifier; if it is not `=`, nothing is
/// consumed and `Ok(None)` is returned so the caller can try an expression.
///
/// # Returns
/// - `Ok(Some(Statement::Assign))` for an assignment,
/// - `Ok(None)` if no assignment is present.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(_), _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();
        if let Some((Token::Equals, line)) = lookahead.peek() {
            let line = *line;
            let name = parse_identifier(tokens)?;
            tokens.next();

            let value = parse_expression(tokens)?;
            return Ok(Some(Statement::Assign { name, value, line }));
        }
    }
    Ok(None)
}

/// Parses a function definition of the form
/// `def <name>(param1, param2, ...): <statement>`.
///
/// The parameter list may be empty. The body is a single statement.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name or a parameter is not an identifier,
/// - the parentheses or colon are missing,
/// - the body fails to parse.
fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Def)?;
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::LParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
    expect(tokens, &Token::Colon)?;
    let body = parse_statement(tokens)?;

    Ok(Statement::Function(FunctionDef { name,
                                         params,
                                         body: Box::new(body),
                                         line }))
}
