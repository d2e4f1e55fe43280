use pretty_assertions::assert_eq;
use quill::{
    error::LexError,
    interpreter::lexer::{Token, tokenize},
};

fn kinds(src: &str) -> Vec<Token> {
    let (tokens, errors) = tokenize(src, 1);
    assert!(errors.is_empty(), "unexpected lex errors: {errors:?}");
    tokens.into_iter().map(|(token, _)| token).collect()
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

#[test]
fn keywords_are_exact_words() {
    assert_eq!(kinds("if iffy else while def print printer _if"),
               vec![Token::If,
                    ident("iffy"),
                    Token::Else,
                    Token::While,
                    Token::Def,
                    Token::Print,
                    ident("printer"),
                    ident("_if")]);
}

#[test]
fn double_equals_wins_over_equals() {
    assert_eq!(kinds("a == b = c ==="),
               vec![ident("a"),
                    Token::EqualEqual,
                    ident("b"),
                    Token::Equals,
                    ident("c"),
                    Token::EqualEqual,
                    Token::Equals]);
}

#[test]
fn punctuation_and_operators() {
    assert_eq!(kinds("f(a, b): + - * /"),
               vec![ident("f"),
                    Token::LParen,
                    ident("a"),
                    Token::Comma,
                    ident("b"),
                    Token::RParen,
                    Token::Colon,
                    Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash]);
}

#[test]
fn minus_is_never_part_of_a_number() {
    assert_eq!(kinds("-5"), vec![Token::Minus, Token::Number(5)]);
    assert_eq!(kinds("x-1"), vec![ident("x"), Token::Minus, Token::Number(1)]);
}

#[test]
fn strings_strip_quotes_and_keep_escapes() {
    assert_eq!(kinds(r#""say \"hi\"" "" "a\\b""#),
               vec![Token::Str(r#"say \"hi\""#.to_string()),
                    Token::Str(String::new()),
                    Token::Str(r"a\\b".to_string())]);
}

#[test]
fn illegal_character_is_reported_and_skipped() {
    let (tokens, errors) = tokenize("x = 1 $ y", 1);

    assert_eq!(tokens.into_iter().map(|(t, _)| t).collect::<Vec<_>>(),
               vec![ident("x"), Token::Equals, Token::Number(1), ident("y")]);
    assert_eq!(errors,
               vec![LexError::IllegalCharacter { character: '$',
                                                 position:  6,
                                                 line:      1, }]);
}

#[test]
fn each_illegal_character_is_reported_once() {
    let (tokens, errors) = tokenize("@#1", 1);

    assert_eq!(tokens, vec![(Token::Number(1), 1)]);
    assert_eq!(errors.iter().map(LexError::position).collect::<Vec<_>>(), vec![0, 1]);
}

#[test]
fn unterminated_string_loses_only_the_quote() {
    let (tokens, errors) = tokenize("\"abc", 1);

    assert_eq!(tokens, vec![(ident("abc"), 1)]);
    assert_eq!(errors,
               vec![LexError::IllegalCharacter { character: '"',
                                                 position:  0,
                                                 line:      1, }]);
}

#[test]
fn positions_count_characters() {
    let (_, errors) = tokenize("\"é\" $", 1);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].position(), 4);
}

#[test]
fn oversized_integer_is_an_error() {
    let (tokens, errors) = tokenize("99999999999999999999 + 1", 1);

    assert_eq!(tokens.len(), 2);
    assert!(matches!(&errors[..],
                     [LexError::IntegerTooLarge { literal, position: 0, line: 1 }]
                     if literal == "99999999999999999999"));
}

#[test]
fn lines_start_at_the_given_number() {
    let (tokens, _) = tokenize("a\nb", 7);

    assert_eq!(tokens, vec![(ident("a"), 7), (ident("b"), 8)]);
}

#[test]
fn error_messages_name_character_and_position() {
    let (_, errors) = tokenize("x ?", 4);

    assert_eq!(errors[0].to_string(),
               "Error on line 4: Illegal character '?' at position 2.");
}
