use dzen::lang::{token::*, tokenize, ErrorCode};

fn lex(s: &str) -> Vec<String> {
    let (tokens, _) = tokenize(s).unwrap();
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_every_2_days() {
    assert_eq!(lex("every 2 days"), ["KEYWORD(every)", "NUMBER(2)", "KEYWORD(days)"]);
}

#[test]
fn test_case_folding() {
    assert_eq!(lex("EVERY Monday"), ["KEYWORD(every)", "KEYWORD(monday)"]);
}

#[test]
fn test_ordinal_suffix_any_case() {
    assert_eq!(lex("every 32nd"), ["KEYWORD(every)", "ORDINAL_DATE(32)"]);
    assert_eq!(lex("8TH 2th"), ["ORDINAL_DATE(8)", "ORDINAL_DATE(2)"]);
}

#[test]
fn test_separators() {
    assert_eq!(
        lex("every monday,tuesday , 3rd"),
        [
            "KEYWORD(every)",
            "KEYWORD(monday)",
            "SEPARATOR",
            "KEYWORD(tuesday)",
            "SEPARATOR",
            "ORDINAL_DATE(3)"
        ]
    );
}

#[test]
fn test_comments_are_ignored() {
    assert_eq!(
        lex("every // first\n# second\n/* third\n */ monday"),
        ["KEYWORD(every)", "KEYWORD(monday)"]
    );
}

#[test]
fn test_block_comment_keeps_lines() {
    let (tokens, text) = tokenize("/* a\nb */ every\nmonday").unwrap();
    assert_eq!(&*text, "\n every\nmonday ");
    assert_eq!(tokens[0].range.start.line, 2);
    assert_eq!(tokens[0].range.start.col, 2);
    assert_eq!(tokens[1].range.start.line, 3);
    assert_eq!(tokens[1].range.start.col, 1);
}

#[test]
fn test_code_block() {
    let (tokens, _) = tokenize("every f{:: () => 7 ::}").unwrap();
    assert_eq!(tokens[1].keyword(), Some(Keyword::F));
    assert_eq!(tokens[2].kind, TokenKind::JsCode(" () => 7 ".to_string()));
    assert_eq!(tokens[2].range.slice(), "{:: () => 7 ::}");
}

#[test]
fn test_code_block_escapes() {
    let (tokens, _) = tokenize(r"f{:: '\::}' ::}").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::JsCode(" '::}' ".to_string()));
}

#[test]
fn test_unterminated_code_block() {
    let e = tokenize("every f{:: () => 7").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.details(), Some("Unexpected end of file"));
}

#[test]
fn test_unexpected_word() {
    let e = tokenize("every 2 fortnights").unwrap_err();
    assert_eq!(e.details(), Some("Unexpected word fortnights"));
    let range = e.range().unwrap();
    assert_eq!(range.slice(), "fortnights");
    assert_eq!((range.start.line, range.start.col), (1, 9));
}

#[test]
fn test_unexpected_character() {
    let e = tokenize("every 2 days!").unwrap_err();
    assert_eq!(e.details(), Some("Unexpected character !"));
    assert_eq!(e.range().unwrap().start.col, 13);
}

#[test]
fn test_number_too_large() {
    let e = tokenize("every 99999999999 days").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.details(), Some("Number too large 99999999999"));
}

#[test]
fn test_error_rendering() {
    let e = tokenize("every 2 fortnights").unwrap_err();
    assert_eq!(
        e.to_string(),
        "SyntaxError on line 1 col 9\n  > Unexpected word fortnights\n  > every 2 fortnights \n            ‾‾‾‾‾‾‾‾‾‾"
    );
}
