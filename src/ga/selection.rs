//! Survivor selection.
//!
//! The interactive loop does not pick parents; it prunes. Selection here
//! means truncating the worst score, plus the fitness ordering used for
//! display.

use std::cmp::Ordering;

/// Keeps every element whose key is strictly greater than the minimum key.
///
/// Relative order of survivors is preserved. In a list of equally valued
/// elements all elements are lowest by definition, so the result is empty.
///
/// # Examples
///
/// ```
/// use evolve_query::ga::without_lowest;
///
/// let kept = without_lowest(vec![0.1, 1.2, 0.1, 2.2], |x| *x);
/// assert_eq!(kept, vec![1.2, 2.2]);
///
/// let kept = without_lowest(vec![5.0, 5.0, 5.0], |x| *x);
/// assert!(kept.is_empty());
/// ```
pub fn without_lowest<T, F>(items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    let lowest = match items.iter().map(&key).min_by(|a, b| a.total_cmp(b)) {
        Some(lowest) => lowest,
        None => return items,
    };
    items.into_iter().filter(|e| key(e) > lowest).collect()
}

/// Sorts by key, highest first.
///
/// The sort is stable: equal keys keep their prior relative order.
/// Incomparable keys (NaN) are treated as equal.
pub fn sort_descending<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> f64,
{
    items.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
}
