/*!
## Rust Machine Module

This Rust module evaluates parsed queries against a reference date.

*/

pub mod calendar;
mod context;
mod interpret;
mod runtime;

pub use context::{Context, Evaluate, Settings};
pub use interpret::interpret;
pub use runtime::{split_queries, Runtime};
