use super::{token::*, Cursor, Error, Position, PositionRange};
use crate::error;
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

const ORDINAL_SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];
const SYMBOLS: [&str; 1] = [","];
const COMMENTS: [(&str, &str); 3] = [("//", "\n"), ("#", "\n"), ("/*", "*/")];

const JS_BEGIN: &str = "{::";
const JS_END: &str = "::}";
const JS_ESCAPE: char = '\\';

/// Split source text into tokens.
///
/// Comments are stripped first. The returned text is the stripped
/// source every token range points into.
pub fn tokenize(s: &str) -> Result<(Vec<Token>, Arc<str>)> {
    let text: Arc<str> = Arc::from(strip_comments(s));
    let tokens = Lexer::new(text.clone()).tokens()?;
    log::trace!("lexed {} tokens", tokens.len());
    Ok((tokens, text))
}

fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn symbol_kind(s: &str) -> Option<TokenKind> {
    match s {
        "," => Some(TokenKind::Separator),
        _ => None,
    }
}

fn is_symbol_prefix(s: &str) -> bool {
    SYMBOLS.iter().any(|sym| sym.starts_with(s))
}

fn comment_at(cursor: &Cursor) -> Option<(&'static str, &'static str)> {
    COMMENTS
        .iter()
        .find(|(begin, _)| cursor.looking_at(begin))
        .copied()
}

/// Remove comments, keeping line structure intact.
///
/// A line comment keeps its terminating newline. A block comment
/// becomes the newlines it spanned, or a single space. A trailing
/// space marks the end of input.
fn strip_comments(s: &str) -> String {
    let mut cursor = Cursor::new(s);
    let mut stripped = String::new();
    while let Some(ch) = cursor.current() {
        match comment_at(&cursor) {
            Some((begin, end)) => {
                cursor.advance_by(begin.chars().count());
                let mut newlines = 0;
                while cursor.current().is_some() && !cursor.looking_at(end) {
                    if cursor.current() == Some('\n') {
                        newlines += 1;
                    }
                    cursor.advance();
                }
                if end != "\n" {
                    cursor.advance_by(end.chars().count());
                    if newlines == 0 {
                        stripped.push(' ');
                    }
                    stripped.push_str(&"\n".repeat(newlines));
                }
            }
            None => {
                stripped.push(ch);
                cursor.advance();
            }
        }
    }
    stripped.push(' ');
    stripped
}

struct Lexer {
    cursor: Cursor,
    text: Arc<str>,
}

impl Lexer {
    fn new(text: Arc<str>) -> Lexer {
        Lexer {
            cursor: Cursor::new(&text),
            text,
        }
    }

    fn range(&self, start: Position, end: Position) -> PositionRange {
        PositionRange::new(start, end, self.text.clone())
    }

    /// Every tokenizer leaves the cursor on the last character it used.
    fn tokens(&mut self) -> Result<Vec<Token>> {
        self.cursor.rewind();
        let mut tokens = vec![];
        while let Some(ch) = self.cursor.current() {
            if is_whitespace(ch) {
                self.cursor.advance();
                continue;
            }
            let token = if is_digit(ch) {
                self.number()?
            } else if self.cursor.looking_at(JS_BEGIN) {
                self.js_code()?
            } else if is_word(ch) {
                self.word()?
            } else if is_symbol_prefix(&ch.to_string()) {
                self.symbol()?
            } else {
                let start = self.cursor.position();
                let range = self.range(start, self.cursor.position_after());
                return Err(error!(SyntaxError, &range; &format!("Unexpected character {}", ch)));
            };
            tokens.push(token);
            self.cursor.advance();
        }
        Ok(tokens)
    }

    fn number(&mut self) -> Result<Token> {
        let start = self.cursor.position();
        let mut s = String::new();
        while let Some(ch) = self.cursor.current().filter(|c| is_digit(*c)) {
            s.push(ch);
            self.cursor.advance();
        }
        let suffix = self.cursor.peek(2).to_ascii_lowercase();
        self.cursor.retreat();
        let ordinal = ORDINAL_SUFFIXES.contains(&suffix.as_str());
        if ordinal {
            self.cursor.advance_by(2);
        }
        let range = self.range(start, self.cursor.position_after());
        let n = match s.parse::<u32>() {
            Ok(n) => n,
            Err(_) => return Err(error!(SyntaxError, &range; &format!("Number too large {}", s))),
        };
        if ordinal {
            Ok(Token::new(TokenKind::OrdinalDate(n), range))
        } else {
            Ok(Token::new(TokenKind::Number(n), range))
        }
    }

    fn js_code(&mut self) -> Result<Token> {
        let start = self.cursor.position();
        self.cursor.advance_by(JS_BEGIN.chars().count());
        let mut code = String::new();
        while !self.cursor.looking_at(JS_END) {
            let ch = match self.cursor.current() {
                Some(JS_ESCAPE) => {
                    self.cursor.advance();
                    self.cursor.current()
                }
                ch => ch,
            };
            match ch {
                Some(ch) => code.push(ch),
                None => {
                    let range = self.range(start, self.cursor.position());
                    return Err(error!(SyntaxError, &range; "Unexpected end of file"));
                }
            }
            self.cursor.advance();
        }
        self.cursor.advance_by(JS_END.chars().count() - 1);
        let range = self.range(start, self.cursor.position_after());
        Ok(Token::new(TokenKind::JsCode(code), range))
    }

    fn word(&mut self) -> Result<Token> {
        let start = self.cursor.position();
        let mut s = String::new();
        while let Some(ch) = self.cursor.current().filter(|c| is_word(*c)) {
            s.push(ch.to_ascii_lowercase());
            self.cursor.advance();
        }
        self.cursor.retreat();
        let range = self.range(start, self.cursor.position_after());
        match Keyword::from_string(&s) {
            Some(keyword) => Ok(Token::new(TokenKind::Keyword(keyword), range)),
            None => Err(error!(SyntaxError, &range; &format!("Unexpected word {}", s))),
        }
    }

    fn symbol(&mut self) -> Result<Token> {
        let start = self.cursor.position();
        let mut s = String::new();
        while let Some(ch) = self.cursor.current() {
            s.push(ch);
            if !is_symbol_prefix(&s) {
                s.pop();
                break;
            }
            self.cursor.advance();
        }
        self.cursor.retreat();
        let range = self.range(start, self.cursor.position_after());
        match symbol_kind(&s) {
            Some(kind) => Ok(Token::new(kind, range)),
            None => Err(error!(SyntaxError, &range; &format!("Unexpected token {}", s))),
        }
    }
}
