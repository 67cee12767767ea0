use chrono::{NaiveDate, NaiveDateTime};
use dzen::mach::{Context, Runtime};

/// Midnight on the given day.
pub fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    ymd(y, m, d).and_hms_opt(0, 0, 0).unwrap()
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A runtime whose today is Monday, January 1st 2024.
pub fn monday() -> Runtime {
    Runtime::new(Context::new(at(2024, 1, 1)))
}

pub fn run(runtime: &Runtime, s: &str) -> String {
    match runtime.run_line(s) {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(error) => error.to_string(),
    }
}
