//! # Dzen
//!
//! Recurring dates in plain words.
//!

mod term;

fn main() {
    term::main();
}
