//! Quadratic in-place sorts: [selection sort], [bubble sort] and
//! [insertion sort].
//!
//! All three sort ascending and only need [`PartialOrd`]; incomparable
//! elements are left where the comparisons put them.
//!
//! [selection sort]: https://en.wikipedia.org/wiki/Selection_sort
//! [bubble sort]: https://en.wikipedia.org/wiki/Bubble_sort
//! [insertion sort]: https://en.wikipedia.org/wiki/Insertion_sort

/// Sorts the provided array in-place, in ascending order.
///
/// Each pass selects the smallest remaining element and swaps it to the
/// front of the unsorted part. Selection sort is *not* stable.
///
/// # Time Complexity
///
/// Takes *O*(*n^2*) time in every case, but performs at most *n* - 1 swaps.
///
/// # Example
///
/// ```
/// use tortoise::prelude::*;
///
/// let mut arr = [13, 46, 24, 52, 20, 9];
///
/// selection_sort(&mut arr);
///
/// assert_eq!(arr, [9, 13, 20, 24, 46, 52]);
/// ```
pub fn selection_sort<T: PartialOrd>(arr: &mut [T]) {
    for i in 0..arr.len().saturating_sub(1) {
        let mut min = i;

        for j in (i + 1)..arr.len() {
            if arr[j] < arr[min] {
                min = j;
            }
        }

        if min != i {
            arr.swap(i, min);
        }
    }
}

/// Sorts the provided array in-place, in ascending order.
///
/// Bubble sort is `stable` meaning equal elements retain their original
/// relative position.
///
/// # Time Complexity
///
/// Takes *O*(*n^2*) time. Each pass compares adjacent pairs and swaps them if
/// the ordering is incorrect, bubbling the largest remaining element to the
/// end. A pass without swaps means the array is sorted, so an already sorted
/// array takes *O*(*n*) time.
///
/// # Example
///
/// ```
/// use tortoise::prelude::*;
///
/// let mut arr = [10, 323, 11, 35, 76, 2, 11, 393, 14];
///
/// bubble_sort(&mut arr);
///
/// assert_eq!(arr, [2, 10, 11, 11, 14, 35, 76, 323, 393]);
/// ```
pub fn bubble_sort<T: PartialOrd>(arr: &mut [T]) {
    let mut unsorted = arr.len();

    while unsorted > 1 {
        let mut swapped = false;

        for j in 1..unsorted {
            if arr[j] < arr[j - 1] {
                arr.swap(j - 1, j);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
        unsorted -= 1;
    }
}

/// Sorts the provided array in-place, in ascending order.
///
/// Insertion sort is `stable` meaning equal elements retain their original
/// relative position.
///
/// # Time Complexity
///
/// Takes *O*(*n^2*) time. For each element in the array, the algorithm works
/// backwards, swapping it with its predecessor while the predecessor is
/// larger. An already sorted array takes *O*(*n*) time.
///
/// # Example
///
/// ```
/// use tortoise::prelude::*;
///
/// let mut arr = [10, 323, 11, 35, 76, 2, 11, 393, 14];
///
/// insertion_sort(&mut arr);
///
/// assert_eq!(arr, [2, 10, 11, 11, 14, 35, 76, 323, 393]);
/// ```
pub fn insertion_sort<T: PartialOrd>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;

        while j > 0 && arr[j] < arr[j - 1] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SORTS: [(&str, fn(&mut [i32])); 3] = [
        ("selection", selection_sort),
        ("bubble", bubble_sort),
        ("insertion", insertion_sort),
    ];

    #[test]
    fn test_trivial_inputs() {
        for (name, sort) in SORTS {
            let mut empty: [i32; 0] = [];
            sort(&mut empty);
            assert!(empty.is_empty(), "{name}");

            let mut single = [7];
            sort(&mut single);
            assert_eq!(single, [7], "{name}");
        }
    }

    #[test]
    fn test_reversed_and_sorted() {
        for (name, sort) in SORTS {
            let mut reversed = [6, 5, 4, 3, 2, 1];
            sort(&mut reversed);
            assert_eq!(reversed, [1, 2, 3, 4, 5, 6], "{name}");

            sort(&mut reversed);
            assert_eq!(reversed, [1, 2, 3, 4, 5, 6], "{name}");
        }
    }

    #[test]
    fn test_duplicates() {
        for (name, sort) in SORTS {
            let mut arr = [3, 1, 3, 1, 2, 2];
            sort(&mut arr);
            assert_eq!(arr, [1, 1, 2, 2, 3, 3], "{name}");
        }
    }

    #[test]
    fn test_stable_sorts_keep_order_of_equal_keys() {
        #[derive(Debug, Clone, Copy, PartialEq)]
        struct Keyed(u8, char);

        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let input = [Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
        let expected = [Keyed(1, 'b'), Keyed(1, 'd'), Keyed(2, 'a'), Keyed(2, 'c')];

        let mut arr = input;
        bubble_sort(&mut arr);
        assert_eq!(arr, expected);

        let mut arr = input;
        insertion_sort(&mut arr);
        assert_eq!(arr, expected);
    }

    #[test]
    fn test_floats() {
        let mut arr = [2.5, -1.0, 0.0, 10.25];
        insertion_sort(&mut arr);
        assert_eq!(arr, [-1.0, 0.0, 2.5, 10.25]);
    }
}
