use std::cmp::{max, min};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use crate::error::{FormatError, InvalidRangeError, ParseIntervalError};


/// Closed integer interval `[start, end]`.
///
/// Both bounds are included, so `4-4` covers exactly one value
/// and `1-3`, `4-6` are two separate intervals.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Interval {
    start: u64,
    end: u64
}


impl Interval {
    pub fn new(start: u64, end: u64) -> Result<Self, InvalidRangeError> {
        if start > end {
            return Err(InvalidRangeError {
                start,
                end
            })
        }
        Ok(Self {
            start,
            end
        })
    }

    pub fn point(value: u64) -> Self {
        Self {
            start: value,
            end: value
        }
    }

    /// Parses `"{start}-{end}"`.
    ///
    /// Only non-negative decimal integers are accepted, because `-` is reserved
    /// for the separator.
    pub fn parse(token: &str) -> Result<Self, ParseIntervalError> {
        let mut parts = token.split('-');
        let start = parts.next().unwrap_or_default();
        let end = parts.next().ok_or_else(|| {
            FormatError::new(token, "expected two components separated by '-'")
        })?;
        if parts.next().is_some() {
            return Err(FormatError::new(token, "too many components").into())
        }
        let start = parse_component(token, start)?;
        let end = parse_component(token, end)?;
        Ok(Self::new(start, end)?)
    }

    #[inline]
    pub fn start(&self) -> u64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> u64 {
        self.end
    }

    #[inline]
    pub fn contains(&self, value: u64) -> bool {
        self.start <= value && value <= self.end
    }

    /// Whether the two intervals share at least one value.
    #[inline]
    pub fn intersects(&self, other: &Interval) -> bool {
        !(other.start > self.end || self.start > other.end)
    }

    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        if !self.intersects(other) {
            return None
        }
        Some(Interval {
            start: max(self.start, other.start),
            end: min(self.end, other.end)
        })
    }

    /// Smallest interval enclosing both.
    ///
    /// No overlap check is made, for disjoint inputs the result covers the gap between them.
    pub fn union(&self, other: &Interval) -> Interval {
        Interval {
            start: min(self.start, other.start),
            end: max(self.end, other.end)
        }
    }
}


fn parse_component(token: &str, component: &str) -> Result<u64, FormatError> {
    if component.is_empty() {
        return Err(FormatError::new(token, "empty component"))
    }
    if !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::new(token, "component is not a non-negative integer"))
    }
    component.parse().map_err(|_| {
        FormatError::new(token, "component is out of range")
    })
}


impl FromStr for Interval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::parse(s)
    }
}


impl TryFrom<(u64, u64)> for Interval {
    type Error = InvalidRangeError;

    fn try_from((start, end): (u64, u64)) -> Result<Self, Self::Error> {
        Interval::new(start, end)
    }
}


impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}


impl Debug for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}


#[cfg(feature = "serde")]
impl serde::Serialize for Interval {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}


#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interval {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = <String as serde::Deserialize>::deserialize(deserializer)?;
        Interval::parse(&token).map_err(serde::de::Error::custom)
    }
}
