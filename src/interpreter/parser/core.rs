use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_comparison, statement::parse_statement, unary::parse_call},
    },
    stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program: every statement up to the end of the tokens.
///
/// An empty token stream is an empty program.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The statements, in source order.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();
    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens)?);
    }
    Ok(statements)
}

/// Parses a full expression.
///
/// Parenthesized expressions and call arguments recurse through here, so
/// the stack is grown on demand for deeply nested input.
///
/// A string literal and a function call are complete expressions on their
/// own; they cannot be operands of `+` or `==` without parentheses. Anything
/// else is a comparison or plain arithmetic.
///
/// Grammar:
/// ```text
///     expression := STRING | function_call | comparison
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    ensure_sufficient_stack(|| {
        if is_call(tokens) {
            return parse_call(tokens);
        }
        if let Some((Token::Str(s), line)) = tokens.peek() {
            let expr = Expr::Literal { value: LiteralValue::Text(s.clone()),
                                       line:  *line, };
            tokens.next();
            return Ok(expr);
        }
        parse_comparison(tokens)
    })
}

/// Checks whether the stream starts with an identifier directly followed by
/// `(`.
fn is_call<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    matches!((lookahead.next(), lookahead.next()),
             (Some((Token::Identifier(_), _)), Some((Token::LParen, _))))
}
