/// Returns the leftmost index at which `target` can be inserted into `items`
/// (sorted ascending by `key_of`) without breaking the order.
///
/// When `items` already holds elements with the same key as `target`,
/// the index of the first of them is returned, not the position after the run.
pub fn closest_insertion_index<T, K, F>(items: &[T], target: &T, key_of: F) -> usize
where
    K: PartialOrd,
    F: Fn(&T) -> K
{
    let key = key_of(target);
    closest_insertion_index_by_key(items, &key, key_of)
}


/// Same as [closest_insertion_index], but takes the key directly.
pub fn closest_insertion_index_by_key<T, K, F>(items: &[T], key: &K, key_of: F) -> usize
where
    K: PartialOrd,
    F: Fn(&T) -> K
{
    match items.len() {
        0 => return 0,
        1 => return if *key > key_of(&items[0]) { 1 } else { 0 },
        _ => {}
    }

    // first index holding a key greater than the target
    let mut beg = 0;
    let mut end = items.len();
    while beg < end {
        let mid = beg + (end - beg) / 2;
        if key_of(&items[mid]) <= *key {
            beg = mid + 1;
        } else {
            end = mid;
        }
    }

    let mut index = beg;
    while index > 0 && key_of(&items[index - 1]) == *key {
        index -= 1;
    }
    index
}


#[cfg(test)]
mod test {
    use super::{closest_insertion_index, closest_insertion_index_by_key};


    fn search(items: &[u64], target: u64) -> usize {
        closest_insertion_index(items, &target, |v| *v)
    }


    #[test]
    fn no_equal_elements() {
        assert_eq!(search(&[1, 2, 6, 20, 58], 57), 4);
        assert_eq!(search(&[1, 2, 6, 20, 58], 0), 0);
        assert_eq!(search(&[1, 2, 6, 20, 58], 100), 5);
        assert_eq!(search(&[1, 2, 6, 20, 58], 3), 2);
    }

    #[test]
    fn two_elements() {
        assert_eq!(search(&[1, 5], 8), 2);
        assert_eq!(search(&[2, 5], 1), 0);
        assert_eq!(search(&[2, 5], 3), 1);
    }

    #[test]
    fn shifts_to_start_of_equal_run() {
        assert_eq!(search(&[1, 2, 6, 20, 57, 57, 57, 58], 57), 4);
        assert_eq!(search(&[57, 57, 57], 57), 0);
        assert_eq!(search(&[1, 57, 57], 57), 1);
        assert_eq!(search(&[1, 5, 5], 5), 1);
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(search(&[], 57), 0);
        assert_eq!(search(&[58], 57), 0);
        assert_eq!(search(&[56], 57), 1);
        assert_eq!(search(&[57], 57), 0);
    }

    #[test]
    fn uses_key_function() {
        let items = [(3, 'a'), (7, 'b'), (7, 'c'), (9, 'd')];
        assert_eq!(closest_insertion_index(&items, &(7, 'z'), |p| p.0), 1);
        assert_eq!(closest_insertion_index_by_key(&items, &8, |p| p.0), 3);
    }
}
