//! # Dzen
//!
//! A tiny language for recurring dates. Write when something happens
//! in plain words and get back the next date it happens on.
//!
//! ```text
//! every 2 days          2024-01-03
//! every monday          2024-01-08
//! every february 8th    2024-02-08
//! ```
//!
//! The dates above are relative to Monday, January 1st 2024.
//!
//! Install with `cargo install dzen-lang` then run `dzen` for an
//! interactive prompt, `dzen -e "every 2 days"` for a single phrase,
//! or `dzen FILE` to resolve every phrase in a file.
//!
//! Embedding applications use [`mach::Runtime`]:
//!
//! ```text
//! let runtime = Runtime::new(Context::new(now));
//! let date = runtime.run_line("every 2 weeks")?;
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

pub mod lang;
pub mod mach;
