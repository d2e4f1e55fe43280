use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, parse_identifier, unexpected},
        },
    },
};

/// Parses a factor, the operand of arithmetic.
///
/// A `-` immediately before an integer literal makes a negative literal;
/// this is the only place a minus sign is not subtraction.
///
/// Grammar:
/// ```text
///     factor := "-"? NUMBER
///             | IDENTIFIER
///             | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
///
/// # Returns
/// The parsed [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), line)) => Ok(Expr::Literal { value: LiteralValue::Integer(*n),
                                                             line:  *line, }),
        Some((Token::Minus, line)) => match tokens.next() {
            Some((Token::Number(n), _)) => Ok(Expr::Literal { value: LiteralValue::Integer(-*n),
                                                              line:  *line, }),
            Some((tok, line)) => Err(unexpected(tok, *line)),
            None => Err(ParseError::UnexpectedEndOfInput { line: *line }),
        },
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                     line: *line, }),
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens)?;
            expect(tokens, &Token::RParen)?;
            Ok(expr)
        },
        Some((tok, line)) => Err(unexpected(tok, *line)),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a function call such as `add(1, x)`.
///
/// Grammar: `function_call := IDENTIFIER "(" (expression ("," expression)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the function name.
///
/// # Returns
/// An `Expr::Call` node.
pub(crate) fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, l)| *l);
    let name = parse_identifier(tokens)?;
    expect(tokens, &Token::LParen)?;
    let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;

    Ok(Expr::Call { name,
                    arguments,
                    line })
}
