use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_factor},
    },
};

/// Parses an equality comparison, or plain arithmetic when no `==` follows.
///
/// `==` is non-associative: after one comparison the expression ends, so
/// `a == b == c` leaves a dangling `==` for the caller to reject.
///
/// The rule is: `comparison := arithmetic ("==" arithmetic)?`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::Equal` node, or the arithmetic expression itself.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_arithmetic(tokens)?;

    if let Some((Token::EqualEqual, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let right = parse_arithmetic(tokens)?;
        return Ok(Expr::Equal { left: Box::new(left),
                                right: Box::new(right),
                                line });
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `arithmetic := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_arithmetic<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_term(tokens)?;
    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        let line = *line;
        tokens.next();
        let right = parse_term(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_factor(tokens)?;
    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        let line = *line;
        tokens.next();
        let right = parse_factor(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Maps a token to its corresponding arithmetic operator.
///
/// # Example
/// ```
/// use quill::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Slash), Some(BinaryOperator::Div));
/// assert_eq!(token_to_binary_operator(&Token::EqualEqual), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
