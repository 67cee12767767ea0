use super::PositionRange;
use std::collections::HashMap;

thread_local!(
    static STRING_TO_KEYWORD: HashMap<&'static str, Keyword> =
        Keyword::ALL.iter().map(|k| (k.as_str(), *k)).collect();
);

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub range: PositionRange,
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenKind {
    Separator,
    Number(u32),
    OrdinalDate(u32),
    Keyword(Keyword),
    JsCode(String),
}

impl Token {
    pub fn new(kind: TokenKind, range: PositionRange) -> Token {
        Token { kind, range }
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(k) => Some(k),
            _ => None,
        }
    }

    /// Payload rendered as text, if the token has one.
    pub fn value(&self) -> Option<String> {
        use TokenKind::*;
        match &self.kind {
            Separator => None,
            Number(n) | OrdinalDate(n) => Some(n.to_string()),
            Keyword(k) => Some(k.to_string()),
            JsCode(code) => Some(code.clone()),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        use TokenKind::*;
        match self.kind {
            Separator => "SEPARATOR",
            Number(_) => "NUMBER",
            OrdinalDate(_) => "ORDINAL_DATE",
            Keyword(_) => "KEYWORD",
            JsCode(_) => "JS_CODE",
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}({})", self.kind_name(), value),
            None => write!(f, "{}", self.kind_name()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Keyword {
    Every,
    Everyday,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Annually,
    Day,
    Days,
    Week,
    Weeks,
    Month,
    Months,
    Year,
    Years,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
    F,
}

impl Keyword {
    pub const ALL: [Keyword; 35] = [
        Keyword::Every,
        Keyword::Everyday,
        Keyword::Daily,
        Keyword::Weekly,
        Keyword::Monthly,
        Keyword::Yearly,
        Keyword::Annually,
        Keyword::Day,
        Keyword::Days,
        Keyword::Week,
        Keyword::Weeks,
        Keyword::Month,
        Keyword::Months,
        Keyword::Year,
        Keyword::Years,
        Keyword::Sunday,
        Keyword::Monday,
        Keyword::Tuesday,
        Keyword::Wednesday,
        Keyword::Thursday,
        Keyword::Friday,
        Keyword::Saturday,
        Keyword::January,
        Keyword::February,
        Keyword::March,
        Keyword::April,
        Keyword::May,
        Keyword::June,
        Keyword::July,
        Keyword::August,
        Keyword::September,
        Keyword::October,
        Keyword::November,
        Keyword::December,
        Keyword::F,
    ];

    /// Look up a lower-case word.
    pub fn from_string(s: &str) -> Option<Keyword> {
        STRING_TO_KEYWORD.with(|stk| stk.get(s).copied())
    }

    pub fn as_str(&self) -> &'static str {
        use Keyword::*;
        match self {
            Every => "every",
            Everyday => "everyday",
            Daily => "daily",
            Weekly => "weekly",
            Monthly => "monthly",
            Yearly => "yearly",
            Annually => "annually",
            Day => "day",
            Days => "days",
            Week => "week",
            Weeks => "weeks",
            Month => "month",
            Months => "months",
            Year => "year",
            Years => "years",
            Sunday => "sunday",
            Monday => "monday",
            Tuesday => "tuesday",
            Wednesday => "wednesday",
            Thursday => "thursday",
            Friday => "friday",
            Saturday => "saturday",
            January => "january",
            February => "february",
            March => "march",
            April => "april",
            May => "may",
            June => "june",
            July => "july",
            August => "august",
            September => "september",
            October => "october",
            November => "november",
            December => "december",
            F => "f",
        }
    }

    pub fn is_unit(&self) -> bool {
        use Keyword::*;
        matches!(
            self,
            Day | Days | Week | Weeks | Month | Months | Year | Years
        )
    }

    pub fn is_day_of_week(&self) -> bool {
        use Keyword::*;
        matches!(
            self,
            Sunday | Monday | Tuesday | Wednesday | Thursday | Friday | Saturday
        )
    }

    pub fn is_month(&self) -> bool {
        use Keyword::*;
        matches!(
            self,
            January
                | February
                | March
                | April
                | May
                | June
                | July
                | August
                | September
                | October
                | November
                | December
        )
    }

    /// The unit keyword a shorthand stands for: `weekly` is `every week`.
    pub fn shorthand_unit(&self) -> Option<Keyword> {
        use Keyword::*;
        match self {
            Everyday | Daily => Some(Day),
            Weekly => Some(Week),
            Monthly => Some(Month),
            Yearly | Annually => Some(Year),
            _ => None,
        }
    }

    /// Keywords that open a new query in a block of text.
    pub fn starts_query(&self) -> bool {
        *self == Keyword::Every || self.shorthand_unit().is_some()
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
