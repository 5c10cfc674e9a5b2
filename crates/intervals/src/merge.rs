use tracing::trace;

use crate::error::ParseIntervalError;
use crate::interval::Interval;
use crate::list::IntervalList;
use crate::search::closest_insertion_index;


/// Incrementally builds the minimal sorted set of disjoint intervals
/// covering everything inserted so far.
#[derive(Debug, Default, Clone)]
pub struct IntervalMerger {
    intervals: Vec<Interval>
}


impl IntervalMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intervals: Vec::with_capacity(capacity)
        }
    }

    pub fn insert(&mut self, interval: Interval) {
        let mut index = closest_insertion_index(&self.intervals, &interval, Interval::start);
        let mut replaced = 0;
        let mut candidate = interval;

        // Everything before `index` starts strictly before `interval`,
        // so only the immediate left neighbour can reach into it.
        if index > 0 && self.intervals[index - 1].intersects(&interval) {
            index -= 1;
            replaced = 1;
            candidate = self.intervals[index].union(&interval);
        }

        while let Some(next) = self.intervals.get(index + replaced) {
            if !candidate.intersects(next) {
                break
            }
            candidate = candidate.union(next);
            replaced += 1;
        }

        if replaced > 1 {
            trace!(
                "interval {} absorbed {} existing intervals into {}",
                interval,
                replaced,
                candidate
            );
        }

        self.intervals.splice(index..index + replaced, std::iter::once(candidate));
    }

    pub fn insert_token(&mut self, token: &str) -> Result<(), ParseIntervalError> {
        let interval = Interval::parse(token)?;
        self.insert(interval);
        Ok(())
    }

    /// Inserts all tokens, stopping at the first one that fails to parse.
    pub fn extend_tokens<I, S>(&mut self, tokens: I) -> Result<(), ParseIntervalError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        for token in tokens {
            self.insert_token(token.as_ref())?;
        }
        Ok(())
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn finish(self) -> IntervalList {
        unsafe {
            IntervalList::new_unchecked(self.intervals)
        }
    }
}


impl Extend<Interval> for IntervalMerger {
    fn extend<T: IntoIterator<Item = Interval>>(&mut self, iter: T) {
        for interval in iter {
            self.insert(interval)
        }
    }
}


impl FromIterator<Interval> for IntervalMerger {
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self {
        let mut merger = IntervalMerger::new();
        merger.extend(iter);
        merger
    }
}


pub fn merge_intervals<I: IntoIterator<Item = Interval>>(intervals: I) -> IntervalList {
    intervals.into_iter().collect::<IntervalMerger>().finish()
}


/// Merges `"{start}-{end}"` tokens into the sorted list of disjoint interval tokens
/// covering the same values.
///
/// Fails on the first malformed token, no partial result is produced.
pub fn merge_intersecting_ranges<I, S>(tokens: I) -> Result<Vec<String>, ParseIntervalError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>
{
    let mut merger = IntervalMerger::new();
    merger.extend_tokens(tokens)?;
    Ok(merger.finish().to_tokens())
}


#[cfg(test)]
mod test {
    use super::{merge_intersecting_ranges, IntervalMerger};
    use crate::Interval;


    fn iv(start: u64, end: u64) -> Interval {
        Interval::new(start, end).unwrap()
    }


    #[test]
    fn sample_input() {
        let merged = merge_intersecting_ranges(["1-3", "5-7", "2-4", "8-12", "5-11", "4-4"]).unwrap();
        assert_eq!(merged, vec!["1-4", "5-12"]);
    }

    #[test]
    fn insert_steps() {
        let mut merger = IntervalMerger::new();

        merger.insert(iv(1, 3));
        merger.insert(iv(5, 7));
        assert_eq!(merger.as_slice(), &[iv(1, 3), iv(5, 7)]);

        merger.insert(iv(2, 4));
        assert_eq!(merger.as_slice(), &[iv(1, 4), iv(5, 7)]);

        merger.insert(iv(8, 12));
        assert_eq!(merger.as_slice(), &[iv(1, 4), iv(5, 7), iv(8, 12)]);

        merger.insert(iv(5, 11));
        assert_eq!(merger.as_slice(), &[iv(1, 4), iv(5, 12)]);

        merger.insert(iv(4, 4));
        assert_eq!(merger.as_slice(), &[iv(1, 4), iv(5, 12)]);
    }

    #[test]
    fn bridging_interval_absorbs_whole_run() {
        let mut merger: IntervalMerger = [iv(1, 2), iv(4, 5), iv(7, 8), iv(10, 11), iv(20, 30)]
            .into_iter()
            .collect();
        assert_eq!(merger.len(), 5);

        merger.insert(iv(2, 10));
        assert_eq!(merger.as_slice(), &[iv(1, 11), iv(20, 30)]);
    }

    #[test]
    fn adjacent_intervals_stay_separate() {
        let merged = merge_intersecting_ranges(["4-6", "1-3", "7-7"]).unwrap();
        assert_eq!(merged, vec!["1-3", "4-6", "7-7"]);
    }

    #[test]
    fn same_start_is_merged_with_existing() {
        let merged = merge_intersecting_ranges(["5-6", "5-9", "5-5"]).unwrap();
        assert_eq!(merged, vec!["5-9"]);
    }

    #[test]
    fn fails_fast_on_bad_token() {
        let mut merger = IntervalMerger::new();
        let err = merger.extend_tokens(["1-3", "x-4", "9-1"]).unwrap_err();
        assert!(err.is_format());
        assert_eq!(merger.as_slice(), &[iv(1, 3)]);

        let err = merge_intersecting_ranges(["1-3", "9-1", "x-4"]).unwrap_err();
        assert!(err.is_invalid_range());
    }
}
