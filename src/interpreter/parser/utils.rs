use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Builds the error for a token that does not fit the grammar here.
pub(in crate::interpreter::parser) fn unexpected(token: &Token, line: usize) -> ParseError {
    ParseError::UnexpectedToken { token: token.to_string(),
                                  line }
}

/// Consumes the next token, which must equal `expected`.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// `UnexpectedToken` for any other token, `UnexpectedEndOfInput` if the
/// stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(unexpected(tok, *line)),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// Shared by parameter lists and argument lists. It repeatedly calls
/// `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. A
/// trailing comma is an error.
///
/// Grammar (simplified): `list := (item ("," item)*)?`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
///
/// # Returns
/// A vector of parsed items.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => return Err(unexpected(tok, *line)),
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => Err(unexpected(tok, *line)),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
