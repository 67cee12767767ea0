use dzen::lang::ast::*;
use dzen::lang::{parse, tokenize, Error, ErrorCode, Keyword};

fn query(s: &str) -> Result<Query, Error> {
    let (tokens, _) = tokenize(s)?;
    parse(&tokens)
}

#[derive(Default)]
struct Leaves {
    found: Vec<String>,
}

impl Visitor for Leaves {
    fn visit_number(&mut self, n: &Number) {
        self.found.push(format!("number {}", n.0.slice()));
    }
    fn visit_unit(&mut self, u: &Unit) {
        self.found.push(format!("unit {}", u.0.slice()));
    }
    fn visit_day_of_week(&mut self, d: &DayOfWeek) {
        self.found.push(format!("day_of_week {}", d.0.slice()));
    }
    fn visit_date(&mut self, d: &Date) {
        self.found.push(format!("date {}", d.0.slice()));
    }
    fn visit_month(&mut self, m: &Month) {
        self.found.push(format!("month {}", m.0.slice()));
    }
    fn visit_command(&mut self, c: &Command) {
        self.found.push(format!("command {}", c.range().slice()));
    }
}

#[test]
fn test_display_forms() {
    assert_eq!(query("every 2 days").unwrap().to_string(), "[EVERY: [RELATIVE: 2 days]]");
    assert_eq!(query("every week").unwrap().to_string(), "[EVERY: [RELATIVE: week]]");
    assert_eq!(
        query("every february 8th").unwrap().to_string(),
        "[EVERY: [ABSOLUTE: february 8th]]"
    );
    assert_eq!(
        query("every 1st, 22nd, friday").unwrap().to_string(),
        "[EVERY: [ABSOLUTE: 1st], [ABSOLUTE: 22nd], [ABSOLUTE: friday]]"
    );
    assert_eq!(
        query("every f{::() => 1::}").unwrap().to_string(),
        "[EVERY: [JSCODE: () => 1]]"
    );
}

#[test]
fn test_leaf_ranges() {
    let q = query("Every 3 Weeks, March 2ND").unwrap();
    let mut leaves = Leaves::default();
    q.accept(&mut leaves);
    assert_eq!(
        leaves.found,
        [
            "number 3",
            "unit Weeks",
            "command 3 Weeks",
            "month March",
            "date 2ND",
            "command March 2ND",
        ]
    );
    assert_eq!(q.range().slice(), "Every 3 Weeks, March 2ND");
}

#[test]
fn test_relative_shape() {
    let q = query("every 2 days").unwrap();
    match &q.commands()[0] {
        Command::Relative(_, Some(Number(_, 2)), Unit(_, Keyword::Days)) => {}
        other => panic!("unexpected {:?}", other),
    }
    let q = query("everyday").unwrap();
    match &q.commands()[0] {
        Command::Relative(_, None, Unit(_, Keyword::Day)) => {}
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_multiline_query() {
    let q = query("every monday,\n  friday").unwrap();
    assert_eq!(q.commands().len(), 2);
    assert_eq!(q.range().start.line, 1);
    assert_eq!(q.range().end.line, 2);
    assert_eq!(q.commands()[1].range().start.col, 3);
}

#[test]
fn test_syntax_errors() {
    let e = query("every").unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.details(), Some("Unexpected end of input"));
    assert_eq!(e.range().unwrap().slice(), "every");

    let e = query("every 2 monday").unwrap_err();
    assert_eq!(e.details(), Some("Unexpected token \"monday\""));

    let e = query("every february 8").unwrap_err();
    assert_eq!(e.details(), Some("Unexpected token \"8\""));

    let e = query("every monday, ").unwrap_err();
    assert_eq!(e.details(), Some("Unexpected end of input"));
    assert_eq!(e.range().unwrap().slice(), ",");

    let e = query("every f 2").unwrap_err();
    assert_eq!(e.details(), Some("Unexpected token \"2\""));
}
