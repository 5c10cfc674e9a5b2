use std::fmt::{Display, Formatter};


/// Token does not match the `<digits>-<digits>` grammar.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FormatError {
    pub token: String,
    pub reason: &'static str
}


impl FormatError {
    pub fn new(token: &str, reason: &'static str) -> Self {
        Self {
            token: token.to_string(),
            reason
        }
    }
}


impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed interval '{}': {}", self.token, self.reason)
    }
}


impl std::error::Error for FormatError {}


#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct InvalidRangeError {
    pub start: u64,
    pub end: u64
}


impl Display for InvalidRangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f, "start of interval can not be greater than its end: {} > {}",
            self.start,
            self.end
        )
    }
}


impl std::error::Error for InvalidRangeError {}


#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseIntervalError {
    Format(FormatError),
    InvalidRange(InvalidRangeError)
}


impl ParseIntervalError {
    pub fn is_format(&self) -> bool {
        matches!(self, ParseIntervalError::Format(_))
    }

    pub fn is_invalid_range(&self) -> bool {
        matches!(self, ParseIntervalError::InvalidRange(_))
    }
}


impl From<FormatError> for ParseIntervalError {
    fn from(value: FormatError) -> Self {
        ParseIntervalError::Format(value)
    }
}


impl From<InvalidRangeError> for ParseIntervalError {
    fn from(value: InvalidRangeError) -> Self {
        ParseIntervalError::InvalidRange(value)
    }
}


impl Display for ParseIntervalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseIntervalError::Format(err) => Display::fmt(err, f),
            ParseIntervalError::InvalidRange(err) => Display::fmt(err, f)
        }
    }
}


impl std::error::Error for ParseIntervalError {}


#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UnorderedIntervals {
    pub position: usize
}


impl Display for UnorderedIntervals {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f, "found unordered or overlapping intervals at position {}",
            self.position
        )
    }
}


impl std::error::Error for UnorderedIntervals {}
