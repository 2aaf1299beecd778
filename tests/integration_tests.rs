//! Integration tests for end-to-end tokenization.
//!
//! These tests drive the public API the way a downstream parser would:
//! query string in, token sequence (or a positioned error) out.

use proptest::prelude::*;
use querylex::{
    lexer::{
        lexer::{tokenize, Lexer},
        options::{LexerOptions, LineBreakPolicy},
        splitter::{split, split_strings},
        tokens::{Token, TokenKind},
    },
    render_error,
};

fn pairs(tokens: &[Token]) -> Vec<(TokenKind, String)> {
    tokens
        .iter()
        .map(|token| (token.kind, token.value.clone()))
        .collect()
}

#[test]
fn test_tokenize_select_statement() {
    let tokens = tokenize("SELECT name, age FROM people WHERE age >= 18 && name <> bob").unwrap();

    assert_eq!(
        pairs(&tokens),
        vec![
            (TokenKind::Keyword, "SELECT".to_string()),
            (TokenKind::Id, "name".to_string()),
            (TokenKind::Op, ",".to_string()),
            (TokenKind::Id, "age".to_string()),
            (TokenKind::Keyword, "FROM".to_string()),
            (TokenKind::Id, "people".to_string()),
            (TokenKind::Keyword, "WHERE".to_string()),
            (TokenKind::Id, "age".to_string()),
            (TokenKind::Op, ">=".to_string()),
            (TokenKind::Num, "18".to_string()),
            (TokenKind::Op, "&&".to_string()),
            (TokenKind::Id, "name".to_string()),
            (TokenKind::Op, "<>".to_string()),
            (TokenKind::Id, "bob".to_string()),
        ]
    );
}

#[test]
fn test_tokenize_delete_statement() {
    let tokens = tokenize("delete from table t where !(x==1||y<=2)").unwrap();
    let rendered: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();

    assert_eq!(
        rendered.join(" "),
        "KEYWORD:DELETE KEYWORD:FROM KEYWORD:TABLE ID:t KEYWORD:WHERE OP:! OP:( ID:x OP:== NUM:1 OP:|| ID:y OP:<= NUM:2 OP:)"
    );
}

#[test]
fn test_tokenize_multiline_query() {
    let query = "select a\nfrom t\r\nwhere a > 1";

    let lexer = Lexer::new(LexerOptions::default().with_line_breaks(LineBreakPolicy::Separate));
    let tokens = lexer.tokenize(query).unwrap();
    assert_eq!(tokens.len(), 8);
    assert_eq!(tokens[7].value, "1");

    // By default line breaks are dropped and the runs around them fuse.
    let fused = tokenize(query).unwrap();
    let values: Vec<&str> = fused.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(values, vec!["SELECT", "afrom", "twhere", "a", ">", "1"]);
}

#[test]
fn test_error_rendering_end_to_end() {
    let query = "select * from t where a = 1";
    let error = tokenize(query).unwrap_err();
    let rendered = render_error(&error, query, "query");

    assert!(rendered.starts_with("Error: UnterminatedDoubledOperator (Expected `==`"));
    assert!(rendered.ends_with("------------------------^"));
}

#[test]
fn test_recovering_keeps_going() {
    let (tokens, errors) = Lexer::default().tokenize_recovering("select 1x, 2 from t where a = b");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].get_lexeme(), "1x");
    assert_eq!(errors[1].get_lexeme(), "=");
    assert_eq!(tokens.len(), 8);
}

proptest! {
    #[test]
    fn test_property_whitespace_only_is_empty(input in "[ \t]{0,50}") {
        prop_assert!(split(&input, LexerOptions::default()).unwrap().is_empty());
        prop_assert!(tokenize(&input).unwrap().is_empty());
        prop_assert!(Lexer::new(LexerOptions::strict()).tokenize(&input).unwrap().is_empty());
    }

    #[test]
    fn test_property_separated_lines_match_spaces(words in prop::collection::vec("[a-z_][a-z0-9_]{0,6}", 0..10)) {
        let options = LexerOptions::default().with_line_breaks(LineBreakPolicy::Separate);
        let by_lines = split_strings(&words.join("\r\n"), options).unwrap();
        let by_spaces = split_strings(&words.join(" "), options).unwrap();
        prop_assert_eq!(by_lines, by_spaces);
    }

    #[test]
    fn test_property_no_empty_lexemes(input in "[a-zA-Z0-9_ ()+*/!,<>.;-]{0,80}") {
        let lexemes = split(&input, LexerOptions::default()).unwrap();
        prop_assert!(lexemes.iter().all(|lexeme| !lexeme.text.is_empty()));
    }

    #[test]
    fn test_property_keyword_case_insensitive(
        keyword in prop::sample::select(vec!["select", "from", "where", "delete", "table"]),
        mask in prop::collection::vec(any::<bool>(), 6),
    ) {
        let mixed: String = keyword
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
            .collect();

        let tokens = tokenize(&mixed).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Keyword);
        prop_assert_eq!(tokens[0].value.clone(), keyword.to_ascii_uppercase());
    }

    #[test]
    fn test_property_identifier_keeps_case(input in "[a-zA-Z_][a-zA-Z0-9_]{0,30}") {
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        if tokens[0].kind == TokenKind::Id {
            prop_assert_eq!(tokens[0].value.clone(), input);
        } else {
            prop_assert_eq!(tokens[0].kind, TokenKind::Keyword);
        }
    }

    #[test]
    fn test_property_digit_prefixed_letters_rejected(digits in "[0-9]{1,5}", rest in "[a-zA-Z_][a-zA-Z0-9_]{0,5}") {
        let lexeme = format!("{digits}{rest}");
        let error = tokenize(&lexeme).unwrap_err();
        prop_assert_eq!(error.get_error_name(), "MalformedNumericLexeme");
        prop_assert_eq!(error.get_lexeme(), lexeme);
    }

    #[test]
    fn test_property_space_joined_round_trip(
        words in prop::collection::vec(
            prop_oneof![
                "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
                "[0-9]{1,6}",
                prop::sample::select(vec![
                    "+", "-", "*", "/", "!", "(", ")", ",", "<", "<>", "<=", ">", ">=", "==", "&&", "||",
                ]).prop_map(String::from),
            ],
            0..20,
        )
    ) {
        let query = words.join(" ");
        let first = tokenize(&query).unwrap();

        let rejoined: Vec<String> = first.iter().map(|token| token.value.clone()).collect();
        let second = tokenize(&rejoined.join(" ")).unwrap();

        prop_assert_eq!(pairs(&first), pairs(&second));
        prop_assert_eq!(
            split_strings(&query, LexerOptions::default()).unwrap().len(),
            first.len()
        );
    }
}
