//! Searching a slice: [binary search] and its bound variants, and
//! [linear search].
//!
//! [binary search]: https://en.wikipedia.org/wiki/Binary_search
//! [linear search]: https://en.wikipedia.org/wiki/Linear_search

use core::cmp::Ordering;

/// Returns the index of the `target` within the sorted array, or [`None`] if
/// it was not found.
///
/// With duplicates, any matching index may be returned.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time. Binary search uses a divide-and-conquer approach
/// and runs in logarithmic time in the worst case, making *O*(*log n*)
/// comparisons, where `n` is the number of elements in the array.
///
/// # Examples
///
/// ```
/// use tortoise::prelude::*;
///
/// let arr = [4, 10, 12, 13, 20, 50, 66];
///
/// assert_eq!(binary_search(&arr, &4), Some(0));
/// assert_eq!(binary_search(&arr, &40), None);
/// ```
pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    search_by(arr, |elem| elem.cmp(target))
}

/// Returns the index of the `target` within an array sorted in *descending*
/// order, or [`None`] if it was not found.
///
/// # Examples
///
/// ```
/// use tortoise::prelude::*;
///
/// let arr = [6, 5, 4, 3, 2, 1];
///
/// assert_eq!(descending_binary_search(&arr, &3), Some(3));
/// assert_eq!(descending_binary_search(&arr, &7), None);
/// ```
pub fn descending_binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    search_by(arr, |elem| target.cmp(elem))
}

/// Half-open binary search; `cmp` orders an element relative to the target.
fn search_by<T, F>(arr: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut lo = 0;
    let mut hi = arr.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        match cmp(&arr[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }

    None
}

/// Returns the index of the first element that is not less than `target`,
/// or `arr.len()` if there is none.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time.
///
/// # Examples
///
/// ```
/// use tortoise::prelude::*;
///
/// let arr = [1, 2, 3, 3, 3, 4, 5, 6];
///
/// assert_eq!(lower_bound(&arr, &3), 2);
/// assert_eq!(lower_bound(&arr, &7), 8);
/// ```
pub fn lower_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    partition(arr, |elem| elem < target)
}

/// Returns the index of the first element greater than `target`, or
/// `arr.len()` if there is none.
///
/// # Time Complexity
///
/// Takes *O*(*log n*) time.
///
/// # Examples
///
/// ```
/// use tortoise::prelude::*;
///
/// let arr = [1, 2, 3, 3, 3, 4, 5, 6];
///
/// assert_eq!(upper_bound(&arr, &3), 5);
/// assert_eq!(upper_bound(&arr, &0), 0);
/// ```
pub fn upper_bound<T: Ord>(arr: &[T], target: &T) -> usize {
    partition(arr, |elem| elem <= target)
}

/// Index of the first element for which `pred` is false; `pred` must hold
/// for a prefix of `arr` and fail for the rest.
fn partition<T, P>(arr: &[T], mut pred: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut lo = 0;
    let mut hi = arr.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);

        if pred(&arr[mid]) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Returns the index of the first element equal to `target`, or [`None`] if
/// it was not found.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. Each element is checked in turn until a match is
/// found or the whole array has been searched.
///
/// # Examples
///
/// ```
/// use tortoise::prelude::*;
///
/// let arr = [11, 4, 30, 110, 20, 2, 70, 45];
///
/// assert_eq!(linear_search(&arr, &4), Some(1));
/// assert_eq!(linear_search(&arr, &40), None);
/// ```
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|elem| elem == target)
}
