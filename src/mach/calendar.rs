//! Calendar arithmetic on whole days.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Month lengths used to validate `<month> <day>` phrases.
/// February allows the 29th in every year.
const MONTH_DAYS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TimeUnit {
    Day,
    Week,
    Month,
    Year,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CalendarError {
    InvalidDayOfMonth,
    InvalidMonth,
    OutOfRange,
}

type Result<T> = std::result::Result<T, CalendarError>;

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// `month` is 1 through 12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// `quantity` units after `date`. Months and years keep the day of
/// month. Days a shorter target month lacks spill into the next one.
pub fn add_units(date: NaiveDate, unit: TimeUnit, quantity: u32) -> Result<NaiveDate> {
    let added = match unit {
        TimeUnit::Day => date.checked_add_days(Days::new(quantity.into())),
        TimeUnit::Week => date.checked_add_days(Days::new(u64::from(quantity) * 7)),
        TimeUnit::Month => add_months(date, quantity),
        TimeUnit::Year => quantity
            .checked_mul(12)
            .and_then(|months| add_months(date, months)),
    };
    added.ok_or(CalendarError::OutOfRange)
}

fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.with_day(1)?
        .checked_add_months(Months::new(months))?
        .checked_add_days(Days::new(u64::from(date.day() - 1)))
}

/// The next `weekday` strictly after `today`.
pub fn nearest_weekday(today: NaiveDate, weekday: Weekday) -> Result<NaiveDate> {
    let current = today.weekday().num_days_from_sunday();
    let target = weekday.num_days_from_sunday();
    let distance = match (target + 7 - current) % 7 {
        0 => 7,
        d => d,
    };
    add_units(today, TimeUnit::Day, distance)
}

/// The next `day_of_month` strictly after `today`, skipping months too
/// short to contain it.
pub fn nearest_date(today: NaiveDate, day_of_month: u32) -> Result<NaiveDate> {
    if day_of_month < 1 || day_of_month > 31 {
        return Err(CalendarError::InvalidDayOfMonth);
    }
    let (mut year, mut month) = (today.year(), today.month());
    if today.day() >= day_of_month {
        let next = next_month(year, month);
        year = next.0;
        month = next.1;
    }
    while day_of_month > days_in_month(year, month) {
        let next = next_month(year, month);
        year = next.0;
        month = next.1;
    }
    NaiveDate::from_ymd_opt(year, month, day_of_month).ok_or(CalendarError::OutOfRange)
}

/// The next `month` (0 for January) and `day_of_month` strictly after
/// `today`. February 29th waits for the next leap year.
pub fn nearest_month_date(today: NaiveDate, month: u32, day_of_month: u32) -> Result<NaiveDate> {
    let max = match MONTH_DAYS.get(month as usize) {
        Some(max) => *max,
        None => return Err(CalendarError::InvalidMonth),
    };
    if day_of_month < 1 || day_of_month > max {
        return Err(CalendarError::InvalidDayOfMonth);
    }
    let month = month + 1;
    let mut year = today.year();
    if today.month() > month || (today.month() == month && today.day() >= day_of_month) {
        year += 1;
    }
    while day_of_month > days_in_month(year, month) {
        year += 1;
    }
    NaiveDate::from_ymd_opt(year, month, day_of_month).ok_or(CalendarError::OutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 11), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }

    #[test]
    fn test_add_units() {
        let d = ymd(2024, 1, 31);
        assert_eq!(add_units(d, TimeUnit::Day, 1), Ok(ymd(2024, 2, 1)));
        assert_eq!(add_units(d, TimeUnit::Week, 2), Ok(ymd(2024, 2, 14)));
        assert_eq!(add_units(d, TimeUnit::Year, 1), Ok(ymd(2025, 1, 31)));
        assert_eq!(add_units(ymd(2024, 1, 15), TimeUnit::Month, 1), Ok(ymd(2024, 2, 15)));
        assert_eq!(
            add_units(d, TimeUnit::Year, u32::MAX),
            Err(CalendarError::OutOfRange)
        );
    }

    #[test]
    fn test_short_months_spill_over() {
        assert_eq!(add_units(ymd(2024, 1, 31), TimeUnit::Month, 1), Ok(ymd(2024, 3, 2)));
        assert_eq!(add_units(ymd(2023, 1, 31), TimeUnit::Month, 1), Ok(ymd(2023, 3, 3)));
        assert_eq!(add_units(ymd(2024, 3, 31), TimeUnit::Month, 1), Ok(ymd(2024, 5, 1)));
        assert_eq!(add_units(ymd(2024, 10, 31), TimeUnit::Month, 4), Ok(ymd(2025, 3, 3)));
        assert_eq!(add_units(ymd(2024, 2, 29), TimeUnit::Year, 1), Ok(ymd(2025, 3, 1)));
        assert_eq!(add_units(ymd(2024, 2, 29), TimeUnit::Year, 4), Ok(ymd(2028, 2, 29)));
    }

    #[test]
    fn test_nearest_weekday_never_today() {
        // 2024-01-01 is a Monday.
        let monday = ymd(2024, 1, 1);
        assert_eq!(nearest_weekday(monday, Weekday::Mon), Ok(ymd(2024, 1, 8)));
        assert_eq!(nearest_weekday(monday, Weekday::Tue), Ok(ymd(2024, 1, 2)));
        assert_eq!(nearest_weekday(monday, Weekday::Sun), Ok(ymd(2024, 1, 7)));
    }

    #[test]
    fn test_nearest_date() {
        assert_eq!(nearest_date(ymd(2024, 1, 5), 8), Ok(ymd(2024, 1, 8)));
        assert_eq!(nearest_date(ymd(2024, 1, 8), 8), Ok(ymd(2024, 2, 8)));
        assert_eq!(nearest_date(ymd(2024, 1, 31), 31), Ok(ymd(2024, 3, 31)));
        assert_eq!(nearest_date(ymd(2023, 1, 30), 29), Ok(ymd(2023, 3, 29)));
        assert_eq!(nearest_date(ymd(2024, 12, 31), 1), Ok(ymd(2025, 1, 1)));
        assert_eq!(nearest_date(ymd(2024, 1, 1), 32), Err(CalendarError::InvalidDayOfMonth));
        assert_eq!(nearest_date(ymd(2024, 1, 1), 0), Err(CalendarError::InvalidDayOfMonth));
    }

    #[test]
    fn test_nearest_month_date() {
        let today = ymd(2024, 3, 10);
        assert_eq!(nearest_month_date(today, 1, 8), Ok(ymd(2025, 2, 8)));
        assert_eq!(nearest_month_date(today, 2, 10), Ok(ymd(2025, 3, 10)));
        assert_eq!(nearest_month_date(today, 2, 11), Ok(ymd(2024, 3, 11)));
        assert_eq!(nearest_month_date(today, 11, 25), Ok(ymd(2024, 12, 25)));
        assert_eq!(
            nearest_month_date(today, 3, 31),
            Err(CalendarError::InvalidDayOfMonth)
        );
        assert_eq!(nearest_month_date(today, 12, 1), Err(CalendarError::InvalidMonth));
    }

    #[test]
    fn test_february_29th_waits_for_leap_year() {
        assert_eq!(nearest_month_date(ymd(2024, 3, 1), 1, 29), Ok(ymd(2028, 2, 29)));
        assert_eq!(nearest_month_date(ymd(2024, 1, 1), 1, 29), Ok(ymd(2024, 2, 29)));
        assert_eq!(nearest_month_date(ymd(2097, 1, 1), 1, 29), Ok(ymd(2104, 2, 29)));
    }
}
