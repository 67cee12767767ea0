use super::calendar::{self, CalendarError, TimeUnit};
use super::Context;
use crate::error;
use crate::lang::ast::*;
use crate::lang::{Error, Keyword, PositionRange};
use chrono::{NaiveDate, Weekday};

type Result<T> = std::result::Result<T, Error>;

const MIN_CODE_DAYS: f64 = 1.0;
const MAX_CODE_DAYS: f64 = 9999.0;

/// Resolve a query to the earliest date any of its commands names.
pub fn interpret(query: &Query, context: &Context) -> Result<NaiveDate> {
    Interpreter::new(context).query(query)
}

struct Interpreter<'a> {
    context: &'a Context,
    today: NaiveDate,
}

impl<'a> Interpreter<'a> {
    fn new(context: &'a Context) -> Interpreter<'a> {
        Interpreter {
            context,
            today: context.now.date(),
        }
    }

    fn query(&self, query: &Query) -> Result<NaiveDate> {
        let mut earliest: Option<NaiveDate> = None;
        for command in query.commands() {
            let date = self.command(command)?;
            log::debug!("{} resolved to {}", command, date);
            earliest = match earliest {
                Some(e) if e <= date => Some(e),
                _ => Some(date),
            };
        }
        match earliest {
            Some(date) => Ok(date),
            None => Err(error!(RuntimeError, query.range(); "Empty query")),
        }
    }

    fn command(&self, command: &Command) -> Result<NaiveDate> {
        match command {
            Command::Relative(range, number, unit) => self.relative(range, number.as_ref(), unit),
            Command::Absolute(range, absolute) => self.absolute(range, absolute),
            Command::Js(range, code) => self.js(range, code),
        }
    }

    fn relative(
        &self,
        range: &PositionRange,
        number: Option<&Number>,
        unit: &Unit,
    ) -> Result<NaiveDate> {
        let quantity = match number {
            Some(number) => {
                let quantity = self.number(number);
                if quantity < 1 {
                    return Err(error!(RuntimeError, &number.0; "Quantity must be at least 1"));
                }
                quantity
            }
            None => 1,
        };
        let unit = self.unit(unit)?;
        calendar::add_units(self.today, unit, quantity)
            .map_err(|e| calendar_error(e, range, ""))
    }

    fn absolute(&self, range: &PositionRange, absolute: &Absolute) -> Result<NaiveDate> {
        match absolute {
            Absolute::DayOfWeek(dow) => {
                let weekday = self.day_of_week(dow)?;
                calendar::nearest_weekday(self.today, weekday)
                    .map_err(|e| calendar_error(e, range, ""))
            }
            Absolute::Date(date) => calendar::nearest_date(self.today, self.date(date))
                .map_err(|e| calendar_error(e, range, "between 1 and 31")),
            Absolute::MonthDate(month, date) => {
                let month = self.month(month)?;
                calendar::nearest_month_date(self.today, month, self.date(date)).map_err(|e| {
                    calendar_error(e, range, "between 1 and the number of days in the month")
                })
            }
        }
    }

    fn js(&self, range: &PositionRange, code: &str) -> Result<NaiveDate> {
        if !self.context.settings.allow_unsafe_code_execution {
            log::debug!("refusing to evaluate code block, unsafe code execution is off");
            return Err(error!(RuntimeError, range;
                "Unsafe code execution is not allowed. If you want to allow it, you can do so in the context's settings."));
        }
        let evaluator = match self.context.evaluator() {
            Some(evaluator) => evaluator,
            None => return Err(error!(RuntimeError, range; "No code evaluator is configured")),
        };
        let days = match evaluator.evaluate(code, self.context.now) {
            Ok(days) => days,
            Err(e) => {
                return Err(error!(RuntimeError, range; &format!("Error while executing code: {}", e)))
            }
        };
        if !days.is_finite() {
            return Err(error!(RuntimeError, range; "Code must return a number of days"));
        }
        if days < MIN_CODE_DAYS || days > MAX_CODE_DAYS {
            return Err(error!(RuntimeError, range;
                "Code must return a number of days between 1 and 9999"));
        }
        calendar::add_units(self.today, TimeUnit::Day, days.floor() as u32)
            .map_err(|e| calendar_error(e, range, ""))
    }

    fn number(&self, number: &Number) -> u32 {
        number.1
    }

    fn unit(&self, unit: &Unit) -> Result<TimeUnit> {
        match unit.1 {
            Keyword::Day | Keyword::Days => Ok(TimeUnit::Day),
            Keyword::Week | Keyword::Weeks => Ok(TimeUnit::Week),
            Keyword::Month | Keyword::Months => Ok(TimeUnit::Month),
            Keyword::Year | Keyword::Years => Ok(TimeUnit::Year),
            other => Err(error!(RuntimeError, &unit.0; &format!("Unknown unit: {}", other))),
        }
    }

    fn day_of_week(&self, dow: &DayOfWeek) -> Result<Weekday> {
        use Keyword::*;
        match dow.1 {
            Sunday => Ok(Weekday::Sun),
            Monday => Ok(Weekday::Mon),
            Tuesday => Ok(Weekday::Tue),
            Wednesday => Ok(Weekday::Wed),
            Thursday => Ok(Weekday::Thu),
            Friday => Ok(Weekday::Fri),
            Saturday => Ok(Weekday::Sat),
            other => Err(error!(RuntimeError, &dow.0; &format!("Unknown day of week: {}", other))),
        }
    }

    fn date(&self, date: &Date) -> u32 {
        date.1
    }

    /// Zero based, January is 0.
    fn month(&self, month: &Month) -> Result<u32> {
        use Keyword::*;
        let index = match month.1 {
            January => 0,
            February => 1,
            March => 2,
            April => 3,
            May => 4,
            June => 5,
            July => 6,
            August => 7,
            September => 8,
            October => 9,
            November => 10,
            December => 11,
            other => {
                return Err(error!(RuntimeError, &month.0; &format!("Unknown month: {}", other)))
            }
        };
        Ok(index)
    }
}

fn calendar_error(e: CalendarError, range: &PositionRange, bounds: &str) -> Error {
    match e {
        CalendarError::InvalidDayOfMonth => error!(RuntimeError, range;
            &format!("Invalid day of month. The date should be {}", bounds)),
        CalendarError::InvalidMonth => error!(RuntimeError, range; "Invalid month"),
        CalendarError::OutOfRange => error!(RuntimeError, range; "Resulting date is out of range"),
    }
}
