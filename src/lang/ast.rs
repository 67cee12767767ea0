use super::{Keyword, PositionRange};

/// One "every ..." phrase with its comma separated alternatives.
#[derive(Debug, PartialEq, Clone)]
pub struct Query(pub PositionRange, pub Vec<Command>);

#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    Relative(PositionRange, Option<Number>, Unit),
    Absolute(PositionRange, Absolute),
    Js(PositionRange, String),
}

/// Exactly one of the absolute constraints.
#[derive(Debug, PartialEq, Clone)]
pub enum Absolute {
    DayOfWeek(DayOfWeek),
    Date(Date),
    MonthDate(Month, Date),
}

#[derive(Debug, PartialEq, Clone)]
pub struct Number(pub PositionRange, pub u32);

#[derive(Debug, PartialEq, Clone)]
pub struct Unit(pub PositionRange, pub Keyword);

#[derive(Debug, PartialEq, Clone)]
pub struct DayOfWeek(pub PositionRange, pub Keyword);

#[derive(Debug, PartialEq, Clone)]
pub struct Date(pub PositionRange, pub u32);

#[derive(Debug, PartialEq, Clone)]
pub struct Month(pub PositionRange, pub Keyword);

impl Query {
    pub fn range(&self) -> &PositionRange {
        &self.0
    }

    pub fn commands(&self) -> &[Command] {
        &self.1
    }
}

impl Command {
    pub fn range(&self) -> &PositionRange {
        match self {
            Command::Relative(range, ..) | Command::Absolute(range, _) | Command::Js(range, _) => range,
        }
    }
}

pub trait Visitor {
    fn visit_query(&mut self, _: &Query) {}
    fn visit_command(&mut self, _: &Command) {}
    fn visit_number(&mut self, _: &Number) {}
    fn visit_unit(&mut self, _: &Unit) {}
    fn visit_day_of_week(&mut self, _: &DayOfWeek) {}
    fn visit_date(&mut self, _: &Date) {}
    fn visit_month(&mut self, _: &Month) {}
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for Query {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        for command in &self.1 {
            command.accept(visitor);
        }
        visitor.visit_query(self)
    }
}

impl AcceptVisitor for Command {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        match self {
            Command::Relative(_, number, unit) => {
                if let Some(number) = number {
                    visitor.visit_number(number);
                }
                visitor.visit_unit(unit);
            }
            Command::Absolute(_, absolute) => match absolute {
                Absolute::DayOfWeek(dow) => visitor.visit_day_of_week(dow),
                Absolute::Date(date) => visitor.visit_date(date),
                Absolute::MonthDate(month, date) => {
                    visitor.visit_month(month);
                    visitor.visit_date(date);
                }
            },
            Command::Js(..) => {}
        }
        visitor.visit_command(self)
    }
}

fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let commands: Vec<String> = self.1.iter().map(|c| c.to_string()).collect();
        write!(f, "[EVERY: {}]", commands.join(", "))
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Command::Relative(_, Some(Number(_, n)), Unit(_, unit)) => {
                write!(f, "[RELATIVE: {} {}]", n, unit)
            }
            Command::Relative(_, None, Unit(_, unit)) => write!(f, "[RELATIVE: {}]", unit),
            Command::Absolute(_, absolute) => write!(f, "[ABSOLUTE: {}]", absolute),
            Command::Js(_, code) => write!(f, "[JSCODE: {}]", code),
        }
    }
}

impl std::fmt::Display for Absolute {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Absolute::DayOfWeek(dow) => write!(f, "{}", dow.1),
            Absolute::Date(date) => write!(f, "{}", date),
            Absolute::MonthDate(month, date) => write!(f, "{} {}", month.1, date),
        }
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.1, ordinal_suffix(self.1))
    }
}
