use super::*;

fn kinds(src: &str) -> Vec<TokenKind> {
    let (tokens, errors) = Lexer::new(src).tokenize();
    assert!(errors.is_empty(), "unexpected lex errors: {errors:?}");
    tokens.into_iter().map(|t| t.kind).collect()
}

#[test]
fn empty_input_yields_only_eof() {
    let (tokens, errors) = Lexer::new("").tokenize();
    assert!(errors.is_empty());
    assert_eq!(tokens, vec![Token::new(TokenKind::Eof, "", Span::new(0, 0, 1))]);
}

#[test]
fn single_and_double_char_operators() {
    assert_eq!(
        kinds("! != = == < <= > >="),
        vec![
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn punctuation() {
    assert_eq!(
        kinds("(){},.-+;*/"),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Semicolon,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn keywords_versus_identifiers() {
    assert_eq!(
        kinds("and class else false for fun if nil or print return super this true var while"),
        vec![
            TokenKind::And,
            TokenKind::Class,
            TokenKind::Else,
            TokenKind::False,
            TokenKind::For,
            TokenKind::Fun,
            TokenKind::If,
            TokenKind::Nil,
            TokenKind::Or,
            TokenKind::Print,
            TokenKind::Return,
            TokenKind::Super,
            TokenKind::This,
            TokenKind::True,
            TokenKind::Var,
            TokenKind::While,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("andy"),
        vec![TokenKind::Identifier("andy".to_string()), TokenKind::Eof]
    );
}

#[test]
fn integer_and_float_numbers() {
    assert_eq!(
        kinds("123 3.14"),
        vec![TokenKind::Number(123.0), TokenKind::Number(3.14), TokenKind::Eof]
    );
}

#[test]
fn trailing_dot_without_digit_is_not_consumed() {
    assert_eq!(
        kinds("123."),
        vec![TokenKind::Number(123.0), TokenKind::Dot, TokenKind::Eof]
    );
}

#[test]
fn string_literal_strips_quotes() {
    let (tokens, errors) = Lexer::new("\"hello world\"").tokenize();
    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::String("hello world".to_string()));
    assert_eq!(tokens[0].lexeme, "\"hello world\"");
}

#[test]
fn string_literal_spanning_lines_bumps_line_number() {
    let (tokens, errors) = Lexer::new("\"a\nb\" 1").tokenize();
    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::String("a\nb".to_string()));
    assert_eq!(tokens[1].line(), 2);
}

#[test]
fn unterminated_string_reports_error_and_keeps_scanning() {
    let (tokens, errors) = Lexer::new("\"unterminated\n1").tokenize();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(errors[0].message, "Unterminated string");
    // scanning continues past the error and still finds the trailing `1`.
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Number(1.0)));
}

#[test]
fn unexpected_character_is_reported_but_scanning_continues() {
    let (tokens, errors) = Lexer::new("1 @ 2").tokenize();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LexErrorKind::UnexpectedCharacter);
    assert_eq!(errors[0].message, "Unexpected character: @");
    assert_eq!(
        tokens.iter().map(|t| &t.kind).collect::<Vec<_>>(),
        vec![&TokenKind::Number(1.0), &TokenKind::Number(2.0), &TokenKind::Eof]
    );
}

#[test]
fn line_comments_are_skipped() {
    assert_eq!(kinds("1 // a comment\n2"), vec![TokenKind::Number(1.0), TokenKind::Number(2.0), TokenKind::Eof]);
}

#[test]
fn line_numbers_track_newlines() {
    let (tokens, errors) = Lexer::new("1\n2\n3").tokenize();
    assert!(errors.is_empty());
    let lines: Vec<usize> = tokens.iter().map(Token::line).collect();
    assert_eq!(lines, vec![1, 2, 3, 3]);
}
