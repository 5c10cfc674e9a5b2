mod error;
mod interval;
mod list;
mod merge;
mod search;


pub use error::*;
pub use interval::Interval;
pub use list::IntervalList;
pub use merge::{merge_intersecting_ranges, merge_intervals, IntervalMerger};
pub use search::{closest_insertion_index, closest_insertion_index_by_key};
