use std::fmt::{Display, Formatter};

use crate::error::UnorderedIntervals;
use crate::interval::Interval;
use crate::merge::IntervalMerger;
use crate::search::closest_insertion_index_by_key;


/// Sorted list of pairwise disjoint intervals.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct IntervalList {
    intervals: Vec<Interval>
}


impl TryFrom<Vec<Interval>> for IntervalList {
    type Error = UnorderedIntervals;

    fn try_from(intervals: Vec<Interval>) -> Result<Self, Self::Error> {
        for i in 1..intervals.len() {
            let current = &intervals[i];
            let prev = &intervals[i - 1];
            if prev.end() >= current.start() {
                return Err(UnorderedIntervals {
                    position: i
                })
            }
        }
        Ok(Self {
            intervals
        })
    }
}


impl IntervalList {
    /// # Safety
    ///
    /// `intervals` must be sorted by start and pairwise disjoint.
    pub unsafe fn new_unchecked(intervals: Vec<Interval>) -> Self {
        Self {
            intervals
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Interval> + '_ {
        self.intervals.iter().copied()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn into_vec(self) -> Vec<Interval> {
        self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn to_tokens(&self) -> Vec<String> {
        self.intervals.iter().map(|i| i.to_string()).collect()
    }

    pub fn contains(&self, value: u64) -> bool {
        let index = closest_insertion_index_by_key(&self.intervals, &value, Interval::start);
        if self.intervals.get(index).map_or(false, |i| i.start() == value) {
            return true
        }
        index > 0 && self.intervals[index - 1].contains(value)
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut merger = IntervalMerger::with_capacity(self.len() + other.len());
        merger.extend(self.iter());
        merger.extend(other.iter());
        merger.finish()
    }
}


impl IntoIterator for IntervalList {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}


impl Display for IntervalList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", interval)?;
        }
        Ok(())
    }
}


#[cfg(feature = "serde")]
impl serde::Serialize for IntervalList {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.intervals.iter())
    }
}


#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for IntervalList {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let intervals = <Vec<Interval> as serde::Deserialize>::deserialize(deserializer)?;
        IntervalList::try_from(intervals).map_err(serde::de::Error::custom)
    }
}
