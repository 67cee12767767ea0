/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the Dzen
date language. Source text becomes tokens, tokens become a `Query`.

*/

#[macro_use]
mod error;
mod lex;
mod parse;
mod position;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::tokenize;
pub use parse::parse;
pub use position::{Cursor, Position, PositionRange};
pub use token::{Keyword, Token, TokenKind};

pub mod ast;
pub mod token;
