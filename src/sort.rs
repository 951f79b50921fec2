//! Classic in-memory sorting algorithms. Every function sorts ascending.
//!
//! The comparison sorts work on any `T: Ord`. Selection, bubble, insertion
//! and quick sort rearrange a slice in place while merge sort and counting sort
//! leave their input alone and return a new `Vec`.
//!
//! | Algorithm | In place | Stable |
//! |-----------|----------|--------|
//! | [`selection_sort`] | yes | no |
//! | [`bubble_sort`] | yes | yes |
//! | [`insertion_sort`] | yes | yes |
//! | [`merge_sort`] | no | yes |
//! | [`quick_sort`] | yes | no |
//! | [`counting_sort`] | no | yes |
//!
//! # Examples
//!
//! ```
//! use bst_sort::sort::{self, SAMPLE};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let expected = [1, 2, 2, 3, 3, 4, 5, 6, 6, 8];
//!
//! let mut data = SAMPLE;
//! sort::quick_sort(&mut data, &mut StdRng::seed_from_u64(7));
//! assert_eq!(data, expected);
//!
//! assert_eq!(sort::counting_sort(&SAMPLE)?, expected);
//! # Ok::<(), bst_sort::Error>(())
//! ```

use std::convert::TryFrom;

use rand::Rng;
use tracing::{debug, trace};

use crate::{Error, Result};

/// The unsorted array every algorithm is demonstrated against.
pub const SAMPLE: [i64; 10] = [4, 2, 2, 8, 3, 3, 6, 6, 5, 1];

/// Repeatedly moves the smallest element of the unsorted suffix to the front
/// of that suffix.
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if items[j] < items[min] {
                min = j;
            }
        }
        items.swap(i, min);
    }
}

/// How much work a call to [`bubble_sort`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BubbleStats {
    /// Number of passes made over the slice, including the final pass that
    /// found nothing to swap.
    pub passes: usize,
    /// Number of adjacent pairs that were exchanged.
    pub swaps: usize,
}

/// Swaps adjacent out-of-order pairs until a whole pass makes no swaps. Each
/// pass carries the largest remaining element to the end of the unsorted
/// prefix so the next pass can stop one element sooner.
///
/// # Examples
///
/// ```
/// use bst_sort::sort::bubble_sort;
///
/// let mut sorted = [1, 2, 3, 4];
/// let stats = bubble_sort(&mut sorted);
///
/// // Already sorted input is detected after a single pass.
/// assert_eq!(stats.passes, 1);
/// assert_eq!(stats.swaps, 0);
/// ```
pub fn bubble_sort<T: Ord>(items: &mut [T]) -> BubbleStats {
    let n = items.len();
    let mut stats = BubbleStats::default();

    for i in 0..n.saturating_sub(1) {
        stats.passes += 1;
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if items[j] > items[j + 1] {
                items.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            debug!(passes = stats.passes, "no swaps in pass, stopping early");
            break;
        }
    }

    stats
}

/// Grows a sorted prefix one element at a time, shifting larger elements of
/// the prefix right until the new element fits.
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1] > items[j] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Splits `items` in half, sorts each half recursively and merges them into a
/// new `Vec`. When the fronts of both halves compare equal the left one is
/// taken first, which keeps the sort stable.
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid]);
    let right = merge_sort(&items[mid..]);
    merge(left, right)
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            _ => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }

    // At most one of these still has anything in it.
    merged.extend(left);
    merged.extend(right);
    merged
}

/// Quicksort with a pivot drawn uniformly at random from the slice by `rng`.
/// Partitioning uses the Lomuto scheme: the pivot is parked at the end, every
/// element `<=` the pivot is swapped behind a moving boundary, and finally the
/// pivot is swapped onto the boundary which is its sorted position.
///
/// Passing a seeded generator makes the sequence of pivots, and so the exact
/// sequence of swaps, reproducible.
///
/// Only the smaller side of each partition is sorted recursively; the larger
/// side is handled by the next round of the loop, so the stack never grows
/// past `log2(len)` frames even when many values are equal.
pub fn quick_sort<T, R>(mut items: &mut [T], rng: &mut R)
where
    T: Ord,
    R: Rng,
{
    while items.len() > 1 {
        let pivot = partition(items, rng);
        let (lower, upper) = std::mem::take(&mut items).split_at_mut(pivot);
        let upper = &mut upper[1..];

        if lower.len() < upper.len() {
            quick_sort(lower, rng);
            items = upper;
        } else {
            quick_sort(upper, rng);
            items = lower;
        }
    }
}

/// Partitions `items` around a random pivot and returns the pivot's final
/// index. `items` must not be empty.
fn partition<T, R>(items: &mut [T], rng: &mut R) -> usize
where
    T: Ord,
    R: Rng,
{
    let high = items.len() - 1;
    let chosen = rng.gen_range(0..=high);
    trace!(chosen, len = items.len(), "picked pivot");
    items.swap(chosen, high);

    let mut boundary = 0;
    for j in 0..high {
        if items[j] <= items[high] {
            items.swap(boundary, j);
            boundary += 1;
        }
    }
    items.swap(boundary, high);

    boundary
}

/// Sorts non-negative integers by counting how often each value occurs.
///
/// # Errors
///
/// [`Error::InvalidInput`] if any value is negative, and
/// [`Error::KeyTooLarge`] if the largest value is too big to count.
///
/// # Examples
///
/// ```
/// use bst_sort::sort::counting_sort;
/// use bst_sort::Error;
///
/// assert_eq!(counting_sort(&[3, 0, 2, 0]), Ok(vec![0, 0, 2, 3]));
/// assert_eq!(
///     counting_sort(&[3, -1]),
///     Err(Error::InvalidInput { index: 1, value: -1 })
/// );
/// ```
pub fn counting_sort(items: &[i64]) -> Result<Vec<i64>> {
    counting_sort_by_key(items, |&value| value)
}

/// Counting sort for records ordered by a non-negative integer key.
///
/// A table of `max_key + 1` counts is built and turned into running totals so
/// each entry holds one past the last output slot for its key. Records are then
/// placed walking the input back to front, decrementing the count for each
/// placement, so records with equal keys keep their input order.
///
/// The table is as large as the largest key, so sparse large keys cost a lot
/// of memory.
///
/// # Errors
///
/// [`Error::InvalidInput`] for the first record whose key is negative, and
/// [`Error::KeyTooLarge`] when the largest key can't be used to size the count
/// table. Inputs of fewer than two records are returned as they are once their
/// keys pass the negativity check.
pub fn counting_sort_by_key<T, F>(items: &[T], key: F) -> Result<Vec<T>>
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    let keys = items
        .iter()
        .enumerate()
        .map(|(index, item)| match key(item) {
            value if value < 0 => Err(Error::InvalidInput { index, value }),
            value => usize::try_from(value).map_err(|_| Error::KeyTooLarge { index, value }),
        })
        .collect::<Result<Vec<_>>>()?;

    if items.len() <= 1 {
        return Ok(items.to_vec());
    }

    let (index, max) = match keys.iter().copied().enumerate().max_by_key(|&(_, k)| k) {
        Some(largest) => largest,
        None => return Ok(Vec::new()),
    };
    let too_large = Error::KeyTooLarge {
        index,
        value: key(&items[index]),
    };
    let len = max.checked_add(1).ok_or_else(|| too_large.clone())?;

    let mut counts: Vec<usize> = Vec::new();
    counts.try_reserve_exact(len).map_err(|_| too_large)?;
    counts.resize(len, 0);
    for &k in &keys {
        counts[k] += 1;
    }
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    let mut output: Vec<Option<&T>> = vec![None; items.len()];
    for (item, &k) in items.iter().zip(&keys).rev() {
        counts[k] -= 1;
        output[counts[k]] = Some(item);
    }

    // Every slot was filled exactly once above.
    Ok(output.into_iter().flatten().cloned().collect())
}
