mod common;
use common::*;
use dzen::lang::ErrorCode;
use dzen::mach::{Context, Runtime};

#[test]
fn test_run_line() {
    let r = monday();
    assert_eq!(run(&r, "every 2 days"), "2024-01-03");
    assert_eq!(run(&r, "EVERY Monday"), "2024-01-08");
    assert_eq!(run(&r, "every february 8th"), "2024-02-08");
    assert_eq!(run(&r, "weekly, 3 days"), "2024-01-04");
}

#[test]
fn test_run_line_rejects_two_queries() {
    let r = monday();
    let e = r.run_line("every monday every friday").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.details(), Some("Unexpected token \"every\""));
}

#[test]
fn test_error_output() {
    let r = monday();
    assert_eq!(
        run(&r, "every 32nd"),
        "RuntimeError on line 1 col 7\n  > Invalid day of month. The date should be between 1 and 31\n  > every 32nd \n          ‾‾‾‾"
    );
}

#[test]
fn test_error_output_after_comments() {
    let r = monday();
    assert_eq!(
        run(&r, "/* two\nlines */ every 0 days"),
        "RuntimeError on line 2 col 8\n  > Quantity must be at least 1\n  >  every 0 days \n           ‾"
    );
}

#[test]
fn test_run_block() {
    let r = monday();
    let results = r
        .run_block("every monday // standup\nevery 1st\ndaily\n# nothing\nmonthly, 2 weeks")
        .unwrap();
    let dates: Vec<String> = results
        .into_iter()
        .map(|r| r.unwrap().format("%Y-%m-%d").to_string())
        .collect();
    assert_eq!(dates, ["2024-01-08", "2024-02-01", "2024-01-02", "2024-01-15"]);
}

#[test]
fn test_run_block_isolates_errors() {
    let r = monday();
    let results = r.run_block("every 32nd every friday every 2").unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap_err().code(), ErrorCode::RuntimeError);
    assert_eq!(results[1], Ok(ymd(2024, 1, 5)));
    assert_eq!(results[2].as_ref().unwrap_err().code(), ErrorCode::SyntaxError);
}

#[test]
fn test_run_block_lex_error_fails_everything() {
    let r = monday();
    let e = r.run_block("every monday\nevery fortnight").unwrap_err();
    assert_eq!(e.details(), Some("Unexpected word fortnight"));
    assert_eq!(e.range().unwrap().start.line, 2);
}

#[test]
fn test_run_block_empty() {
    let r = monday();
    assert!(r.run_block("").unwrap().is_empty());
    assert!(r.run_block("// only a comment").unwrap().is_empty());
}

#[test]
fn test_set_context() {
    let mut r = Runtime::default();
    r.set_context(Context::new(at(2024, 2, 28)));
    assert_eq!(run(&r, "every day"), "2024-02-29");
    assert_eq!(r.context().now, at(2024, 2, 28));
}

#[test]
fn test_results_cross_threads() {
    let r = monday();
    let handle = std::thread::spawn(move || r.run_block("every monday every 3rd").unwrap());
    let results = handle.join().unwrap();
    assert_eq!(results, [Ok(ymd(2024, 1, 8)), Ok(ymd(2024, 1, 3))]);
}

