//! Middle of a singly-linked list by the tortoise-and-hare traversal.

use crate::algorithms::cycle::{Phase, TortoiseHare};
use crate::collections::{ListArena, NodeId};
use crate::error::ListError;

/// Returns the middle node of the list starting at `head`, or [`None`] if it
/// is empty.
///
/// For a list of *n* nodes this is the node at index *n*/2 (rounded down),
/// so with an even count the second of the two middles is returned.
///
/// The tortoise follows one link for every two the hare follows; when the
/// hare can no longer advance, the tortoise is halfway. On a cyclic list the
/// two pointers meet instead, which never happens on an acyclic one, and
/// [`ListError::Cyclic`] is returned rather than looping.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time and *O*(1) extra memory.
///
/// # Examples
///
/// ```
/// use tortoise::prelude::*;
///
/// let mut arena = ListArena::new();
///
/// let odd = singly!(arena; 1 => 2 => 3 => 4 => 5);
/// let mid = find_middle(&arena, odd).unwrap().unwrap();
/// assert_eq!(arena.value(mid), Some(&3));
///
/// let even = singly!(arena; 1 => 2 => 3 => 4);
/// let mid = find_middle(&arena, even).unwrap().unwrap();
/// assert_eq!(arena.value(mid), Some(&3));
///
/// assert_eq!(find_middle(&arena, None), Ok(None));
/// ```
pub fn find_middle<T>(arena: &ListArena<T>, head: Option<NodeId>) -> Result<Option<NodeId>, ListError> {
    let mut walk = TortoiseHare::new(arena, head);

    match walk.run() {
        Phase::FoundCycle(_) => Err(ListError::Cyclic),
        Phase::Searching | Phase::NoCycle => Ok(walk.slow()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn middle_value(values: &[i32]) -> Option<i32> {
        let mut arena = ListArena::new();
        let head = arena.build_list(values.iter().copied());

        find_middle(&arena, head)
            .unwrap()
            .and_then(|id| arena.value(id).copied())
    }

    #[test]
    fn test_empty() {
        assert_eq!(middle_value(&[]), None);
    }

    #[test]
    fn test_single() {
        assert_eq!(middle_value(&[42]), Some(42));
    }

    #[test]
    fn test_two() {
        assert_eq!(middle_value(&[1, 2]), Some(2));
    }

    #[test]
    fn test_odd() {
        assert_eq!(middle_value(&[1, 2, 3, 4, 5]), Some(3));
        assert_eq!(middle_value(&[1, 2, 3]), Some(2));
    }

    #[test]
    fn test_even() {
        assert_eq!(middle_value(&[1, 2, 3, 4]), Some(3));
        assert_eq!(middle_value(&[1, 2, 3, 4, 5, 6]), Some(4));
    }

    #[test]
    fn test_index_is_half_length() {
        for len in 1..40 {
            let values: Vec<i32> = (0..len).collect();
            assert_eq!(middle_value(&values), Some(len / 2));
        }
    }

    #[test]
    fn test_cyclic() {
        let mut arena = ListArena::new();
        let head = arena.build_list(1..=6);
        arena.link_tail_to(head, 3).unwrap();

        assert_eq!(find_middle(&arena, head), Err(ListError::Cyclic));

        let node = arena.alloc(0);
        arena.set_next(node, Some(node)).unwrap();
        assert_eq!(find_middle(&arena, Some(node)), Err(ListError::Cyclic));
    }
}
