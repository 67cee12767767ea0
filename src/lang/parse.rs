use super::{ast::*, token::*, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Build a query from the tokens of a single phrase.
///
/// ```text
/// query    := "every" command ("," command)*
///           | shorthand ("," command)*
///           | command ("," command)*
/// command  := NUMBER unit | unit | "f" JS_CODE
///           | weekday | ORDINAL_DATE | month ORDINAL_DATE
/// ```
pub fn parse(tokens: &[Token]) -> Result<Query> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    index: usize,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Query> {
        let mut parser = Parser { tokens, index: 0 };
        let query = parser.query()?;
        if let Some(token) = parser.peek() {
            return Err(parser.unexpected(Some(token)));
        }
        log::debug!("parsed {}", query);
        Ok(query)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.index)?;
        self.index += 1;
        Some(token)
    }

    fn next_or_end(&mut self) -> Result<&'a Token> {
        match self.next() {
            Some(token) => Ok(token),
            None => Err(self.unexpected(None)),
        }
    }

    fn unexpected(&self, token: Option<&Token>) -> Error {
        match (token, self.tokens.last()) {
            (Some(token), _) => {
                let name = token
                    .value()
                    .unwrap_or_else(|| token.kind_name().to_string());
                error!(SyntaxError, &token.range; &format!("Unexpected token \"{}\"", name))
            }
            (None, Some(last)) => error!(SyntaxError, &last.range; "Unexpected end of input"),
            (None, None) => error!(SyntaxError; "Unexpected end of input"),
        }
    }

    fn query(&mut self) -> Result<Query> {
        let first = match self.peek() {
            Some(token) => token,
            None => return Err(self.unexpected(None)),
        };
        let mut commands = vec![];
        match first.keyword() {
            Some(Keyword::Every) => {
                self.next();
                commands.push(self.command()?);
            }
            Some(keyword) => match keyword.shorthand_unit() {
                Some(unit) => {
                    self.next();
                    let range = first.range.clone();
                    commands.push(Command::Relative(
                        range.clone(),
                        None,
                        Unit(range, unit),
                    ));
                }
                None => commands.push(self.command()?),
            },
            None => commands.push(self.command()?),
        }
        while let Some(Token {
            kind: TokenKind::Separator,
            ..
        }) = self.peek()
        {
            self.next();
            commands.push(self.command()?);
        }
        let range = match commands.last() {
            Some(command) => first.range.to(command.range()),
            None => first.range.clone(),
        };
        Ok(Query(range, commands))
    }

    fn command(&mut self) -> Result<Command> {
        let token = self.next_or_end()?;
        let range = token.range.clone();
        match &token.kind {
            TokenKind::Number(n) => {
                let unit = self.unit()?;
                Ok(Command::Relative(
                    range.to(&unit.0),
                    Some(Number(range, *n)),
                    unit,
                ))
            }
            TokenKind::OrdinalDate(n) => Ok(Command::Absolute(
                range.clone(),
                Absolute::Date(Date(range, *n)),
            )),
            TokenKind::Keyword(Keyword::F) => {
                let code = self.next_or_end()?;
                match &code.kind {
                    TokenKind::JsCode(s) => Ok(Command::Js(range.to(&code.range), s.clone())),
                    _ => Err(self.unexpected(Some(code))),
                }
            }
            TokenKind::Keyword(k) if k.is_unit() => {
                Ok(Command::Relative(range.clone(), None, Unit(range, *k)))
            }
            TokenKind::Keyword(k) if k.is_day_of_week() => Ok(Command::Absolute(
                range.clone(),
                Absolute::DayOfWeek(DayOfWeek(range, *k)),
            )),
            TokenKind::Keyword(k) if k.is_month() => {
                let date = self.date()?;
                Ok(Command::Absolute(
                    range.to(&date.0),
                    Absolute::MonthDate(Month(range, *k), date),
                ))
            }
            _ => Err(self.unexpected(Some(token))),
        }
    }

    fn unit(&mut self) -> Result<Unit> {
        let token = self.next_or_end()?;
        match token.keyword() {
            Some(k) if k.is_unit() => Ok(Unit(token.range.clone(), k)),
            _ => Err(self.unexpected(Some(token))),
        }
    }

    fn date(&mut self) -> Result<Date> {
        let token = self.next_or_end()?;
        match token.kind {
            TokenKind::OrdinalDate(n) => Ok(Date(token.range.clone(), n)),
            _ => Err(self.unexpected(Some(token))),
        }
    }
}
