use super::PositionRange;

const UNDERLINE: char = '‾';
const GUTTER: &str = "  > ";

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    range: Option<PositionRange>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $range:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_range($range)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $range:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_range($range)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            range: None,
            message: String::new(),
        }
    }

    pub fn syntax(details: &str, range: Option<&PositionRange>) -> Error {
        Error::new(ErrorCode::SyntaxError).with(details, range)
    }

    pub fn runtime(details: &str, range: Option<&PositionRange>) -> Error {
        Error::new(ErrorCode::RuntimeError).with(details, range)
    }

    fn with(self, details: &str, range: Option<&PositionRange>) -> Error {
        let error = self.message(details);
        match range {
            Some(range) => error.in_range(range),
            None => error,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn range(&self) -> Option<&PositionRange> {
        self.range.as_ref()
    }

    pub fn details(&self) -> Option<&str> {
        if self.message.is_empty() {
            None
        } else {
            Some(&self.message)
        }
    }

    pub fn in_range(&self, range: &PositionRange) -> Error {
        debug_assert!(self.range.is_none());
        Error {
            code: self.code,
            range: Some(PositionRange::new(range.start, range.end, range.text.clone())),
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            range: self.range.clone(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorCode {
    SyntaxError,
    RuntimeError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ErrorCode::SyntaxError => write!(f, "SyntaxError"),
            ErrorCode::RuntimeError => write!(f, "RuntimeError"),
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(range) = &self.range {
            write!(f, " on line {} col {}", range.start.line, range.start.col)?;
        }
        if !self.message.is_empty() {
            write!(f, "\n{}{}", GUTTER, self.message)?;
        }
        if let Some(range) = &self.range {
            let line = range.line_text();
            let from = range.start.col.saturating_sub(1);
            let to = if range.is_multiline() {
                line.chars().count()
            } else {
                range.end.col.saturating_sub(1)
            };
            write!(f, "\n{}{}", GUTTER, line)?;
            let indent: String = " ".repeat(GUTTER.chars().count() + from);
            let marks: String = std::iter::repeat(UNDERLINE)
                .take(to.saturating_sub(from))
                .collect();
            write!(f, "\n{}{}", indent, marks)?;
        }
        Ok(())
    }
}
