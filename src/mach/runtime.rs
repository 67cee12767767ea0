use super::{interpret, Context};
use crate::lang::ast::Query;
use crate::lang::{parse, tokenize, Error, Token};
use chrono::NaiveDate;

type Result<T> = std::result::Result<T, Error>;

/// Runs source text through the lexer, parser, and interpreter.
#[derive(Debug, Clone, Default)]
pub struct Runtime {
    context: Context,
}

impl Runtime {
    pub fn new(context: Context) -> Runtime {
        Runtime { context }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn set_context(&mut self, context: Context) {
        self.context = context;
    }

    /// Resolve text holding exactly one query.
    pub fn run_line(&self, s: &str) -> Result<NaiveDate> {
        let (tokens, _) = tokenize(s)?;
        let query = parse(&tokens)?;
        interpret(&query, &self.context)
    }

    /// Parse text holding any number of queries.
    ///
    /// A lexical error fails the whole block. Parse errors only fail
    /// the query they occur in.
    pub fn parse_block(&self, s: &str) -> Result<Vec<Result<Query>>> {
        let (tokens, _) = tokenize(s)?;
        Ok(split_queries(&tokens).into_iter().map(parse).collect())
    }

    /// Resolve every query in `s`, keeping each parsed query next to
    /// its date. Parse errors take the place of the pair.
    pub fn resolve_block(&self, s: &str) -> Result<Vec<Result<(Query, Result<NaiveDate>)>>> {
        let queries = self.parse_block(s)?;
        Ok(queries
            .into_iter()
            .map(|query| {
                query.map(|query| {
                    let date = interpret(&query, &self.context);
                    (query, date)
                })
            })
            .collect())
    }

    /// Resolve every query in `s`, one result per query.
    pub fn run_block(&self, s: &str) -> Result<Vec<Result<NaiveDate>>> {
        let resolved = self.resolve_block(s)?;
        Ok(resolved
            .into_iter()
            .map(|pair| pair.and_then(|(_, date)| date))
            .collect())
    }
}

/// Split a token stream before every keyword that opens a query.
pub fn split_queries(tokens: &[Token]) -> Vec<&[Token]> {
    let mut queries = vec![];
    let mut start = 0;
    for (index, token) in tokens.iter().enumerate() {
        let opens = token.keyword().map_or(false, |k| k.starts_query());
        if opens && index > start {
            queries.push(&tokens[start..index]);
            start = index;
        }
    }
    if start < tokens.len() {
        queries.push(&tokens[start..]);
    }
    queries
}
