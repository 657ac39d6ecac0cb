//! A [singly-linked list] whose nodes live in an arena.
//!
//! Nodes are addressed by [`NodeId`] handles instead of owning pointers, so a
//! list may link back into itself without forming an ownership cycle. The
//! arena owns every node; a list is nothing more than a head handle and the
//! chain of `next` links reachable from it.
//!
//! Handles are generational: releasing a node bumps the generation of its
//! slot, and any handle still pointing at that slot becomes *stale*. Stale
//! handles are never dereferenced, they read as "no node".
//!
//! [singly-linked list]: https://en.wikipedia.org/wiki/Linked_list

use core::fmt;
use core::mem;

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::algorithms::cycle::has_cycle;
use crate::error::ListError;

/// Builds a list inside an arena from the arguments, returning the head.
///
/// # Examples
///
/// ```
/// use tortoise::prelude::*;
///
/// let mut arena = ListArena::new();
/// let head = singly!(arena; 1 => 2 => 3);
///
/// assert_eq!(arena.len(), 3);
/// assert_eq!(arena.to_vec(head), Ok(vec![1, 2, 3]));
/// ```
#[macro_export]
macro_rules! singly {
    ($arena:expr; $($elem:expr)=>*) => {
        $arena.build_list([$($elem),*])
    };
}

/// Handle to a node stored in a [`ListArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Slot index of the node within its arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}@{}", self.index, self.generation)
    }
}

/// A list node: one value and a link to its successor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

impl<T> Node<T> {
    /// Returns a reference to the value held by the node.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the handle of the successor, or [`None`] for the last node.
    #[inline]
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }
}

#[derive(Debug)]
enum Slot<T> {
    Occupied {
        generation: u32,
        node: Node<T>,
    },
    Vacant {
        generation: u32,
        /// Next slot of the free list.
        next_free: Option<u32>,
    },
}

/// Owner of the nodes of any number of singly-linked lists.
#[derive(Debug)]
pub struct ListArena<T> {
    slots: Vec<Slot<T>>,
    /// Most recently vacated slot, reused first.
    free_head: Option<u32>,
    /// Number of live nodes.
    len: usize,
}

impl<T> ListArena<T> {
    /// Creates a new, empty `ListArena`.
    ///
    /// The arena will not allocate until nodes are added to it.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Creates an empty `ListArena` with room for at least `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Returns the number of live nodes in the arena.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live nodes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Allocates a node holding `value` with no successor.
    ///
    /// Slots vacated by [`free`](Self::free) or [`release`](Self::release)
    /// are reused before the arena grows.
    ///
    /// # Time Complexity
    ///
    /// Takes amortized *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if the arena would hold more than `u32::MAX` slots.
    pub fn alloc(&mut self, value: T) -> NodeId {
        let node = Node { value, next: None };
        self.len += 1;

        if let Some(index) = self.free_head {
            if let Slot::Vacant {
                generation,
                next_free,
            } = self.slots[index as usize]
            {
                self.free_head = next_free;
                self.slots[index as usize] = Slot::Occupied { generation, node };
                return NodeId { index, generation };
            }
        }

        assert!(
            self.slots.len() < u32::MAX as usize,
            "arena capacity overflow"
        );
        let index = self.slots.len() as u32;
        self.slots.push(Slot::Occupied {
            generation: 0,
            node,
        });

        NodeId {
            index,
            generation: 0,
        }
    }

    /// Builds a list from `values`, linking them in order, and returns its
    /// head, or [`None`] if `values` is empty.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. The previous node is remembered while building,
    /// so each value is linked in *constant* time.
    ///
    /// # Examples
    ///
    /// ```
    /// use tortoise::prelude::*;
    ///
    /// let mut arena = ListArena::new();
    /// let head = arena.build_list([4, 5, 6]);
    ///
    /// let values: Vec<_> = arena.iter(head).map(|(_, v)| *v).collect();
    /// assert_eq!(values, [4, 5, 6]);
    ///
    /// assert_eq!(arena.build_list(Vec::<i32>::new()), None);
    /// ```
    pub fn build_list<I>(&mut self, values: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = T>,
    {
        let mut head = None;
        let mut tail: Option<NodeId> = None;
        let mut built = 0usize;

        for value in values {
            let id = self.alloc(value);

            match tail.and_then(|prev| self.get_mut(prev)) {
                Some(prev) => prev.next = Some(id),
                None => head = Some(id),
            }

            tail = Some(id);
            built += 1;
        }

        trace!(len = built, "built list");
        head
    }

    /// Returns `true` if `id` refers to a live node of this arena.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the node behind `id`, or [`None`] if the handle is stale.
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.index as usize)? {
            Slot::Occupied { generation, node } if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id.index as usize)? {
            Slot::Occupied { generation, node } if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    /// Returns the value held by `id`, or [`None`] if the handle is stale.
    #[inline]
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.get(id).map(Node::value)
    }

    /// Returns a mutable reference to the value held by `id`, or [`None`] if
    /// the handle is stale.
    #[inline]
    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.get_mut(id).map(|node| &mut node.value)
    }

    /// Returns the live successor of `id`.
    ///
    /// A stale `id`, a last node, and a link to a released node all read as
    /// [`None`], so traversals stop at them.
    #[inline]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)?.next.filter(|&next| self.contains(next))
    }

    /// Points the link of `id` at `next`, returning the previous successor.
    ///
    /// This is the only way to rewire a list, and the way cycles are built.
    ///
    /// # Examples
    ///
    /// ```
    /// use tortoise::prelude::*;
    ///
    /// let mut arena = ListArena::new();
    /// let node = arena.alloc(7);
    ///
    /// // A single node looping onto itself.
    /// assert_eq!(arena.set_next(node, Some(node)), Ok(None));
    /// assert!(has_cycle(&arena, Some(node)));
    /// ```
    pub fn set_next(
        &mut self,
        id: NodeId,
        next: Option<NodeId>,
    ) -> Result<Option<NodeId>, ListError> {
        if let Some(target) = next {
            if !self.contains(target) {
                return Err(ListError::StaleNode(target));
            }
        }

        let node = self.get_mut(id).ok_or(ListError::StaleNode(id))?;
        Ok(mem::replace(&mut node.next, next))
    }

    /// Returns an iterator following the links from `head`.
    ///
    /// The iterator yields `(handle, value)` pairs. On a cyclic list it never
    /// ends, bound it with [`Iterator::take`] or check
    /// [`has_cycle`](crate::algorithms::cycle::has_cycle) first.
    #[inline]
    pub fn iter(&self, head: Option<NodeId>) -> Iter<'_, T> {
        Iter {
            arena: self,
            curr: head,
        }
    }

    /// Returns the node `k` steps after `head`, or [`None`] if the list ends
    /// first.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*k*) time. Links are followed one at a time.
    #[inline]
    pub fn nth(&self, head: Option<NodeId>, k: usize) -> Option<NodeId> {
        self.iter(head).nth(k).map(|(id, _)| id)
    }

    /// Returns the number of nodes reachable from `head`.
    ///
    /// Returns [`ListError::Cyclic`] when the links loop, since the count
    /// would be unbounded.
    pub fn count(&self, head: Option<NodeId>) -> Result<usize, ListError> {
        if has_cycle(self, head) {
            return Err(ListError::Cyclic);
        }

        Ok(self.iter(head).count())
    }

    /// Returns the last node of the list starting at `head`, or [`None`] if
    /// it is empty.
    pub fn tail(&self, head: Option<NodeId>) -> Result<Option<NodeId>, ListError> {
        if has_cycle(self, head) {
            return Err(ListError::Cyclic);
        }

        Ok(self.iter(head).last().map(|(id, _)| id))
    }

    /// Introduces a cycle by linking the last node back to the node at
    /// position `pos`, returning that node (the entry of the new cycle).
    ///
    /// # Examples
    ///
    /// ```
    /// use tortoise::prelude::*;
    ///
    /// let mut arena = ListArena::new();
    /// let head = singly!(arena; 1 => 2 => 3 => 4 => 5);
    ///
    /// let entry = arena.link_tail_to(head, 2).unwrap();
    /// assert_eq!(arena.value(entry), Some(&3));
    /// assert_eq!(cycle_length(&arena, head), 3);
    ///
    /// assert_eq!(arena.link_tail_to(head, 0), Err(ListError::Cyclic));
    /// ```
    pub fn link_tail_to(&mut self, head: Option<NodeId>, pos: usize) -> Result<NodeId, ListError> {
        let len = self.count(head)?;
        if pos >= len {
            return Err(ListError::PositionOutOfRange { pos, len });
        }

        let (Some(tail), Some(entry)) = (self.nth(head, len - 1), self.nth(head, pos)) else {
            return Err(ListError::PositionOutOfRange { pos, len });
        };

        self.set_next(tail, Some(entry))?;
        debug!(%tail, %entry, pos, len, "linked tail back into list");

        Ok(entry)
    }

    /// Collects the values of the list starting at `head`.
    ///
    /// Returns [`ListError::Cyclic`] instead of looping forever when the
    /// links form a cycle.
    pub fn to_vec(&self, head: Option<NodeId>) -> Result<Vec<T>, ListError>
    where
        T: Clone,
    {
        if has_cycle(self, head) {
            return Err(ListError::Cyclic);
        }

        Ok(self.iter(head).map(|(_, value)| value.clone()).collect())
    }

    /// Releases a single node, returning its value.
    ///
    /// Nodes still linking to it are left dangling; traversals treat such a
    /// link as the end of the list.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(1) time. The vacated slot is pushed onto the free list.
    pub fn free(&mut self, id: NodeId) -> Result<T, ListError> {
        let slot = self
            .slots
            .get_mut(id.index as usize)
            .ok_or(ListError::StaleNode(id))?;
        let vacant = Slot::Vacant {
            generation: id.generation.wrapping_add(1),
            next_free: self.free_head,
        };

        match mem::replace(slot, vacant) {
            Slot::Occupied { generation, node } if generation == id.generation => {
                self.free_head = Some(id.index);
                self.len -= 1;
                Ok(node.value)
            }
            other => {
                *slot = other;
                Err(ListError::StaleNode(id))
            }
        }
    }

    /// Releases every node reachable from `head`, each exactly once, and
    /// returns how many were freed.
    ///
    /// Visited slots are tracked explicitly, so the walk ends on cyclic
    /// lists as well as acyclic ones. Every released handle becomes stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use tortoise::prelude::*;
    ///
    /// let mut arena = ListArena::new();
    /// let head = singly!(arena; 1 => 2 => 3 => 4);
    /// arena.link_tail_to(head, 1).unwrap();
    ///
    /// assert_eq!(arena.release(head), 4);
    /// assert!(arena.is_empty());
    /// ```
    pub fn release(&mut self, head: Option<NodeId>) -> usize {
        let mut visited = FxHashSet::default();
        let mut curr = head;
        let mut freed = 0;

        while let Some(id) = curr {
            if !visited.insert(id.index) {
                break;
            }

            curr = self.next(id);
            if self.free(id).is_err() {
                break;
            }
            freed += 1;
        }

        debug!(freed, live = self.len, "released list");
        freed
    }
}

impl<T> Default for ListArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the `(handle, value)` pairs of a list.
///
/// Created by [`ListArena::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    arena: &'a ListArena<T>,
    curr: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.curr.take()?;
        let node = self.arena.get(id)?;
        self.curr = node.next;

        Some((id, &node.value))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_build_and_traverse() {
        let mut arena = ListArena::new();

        // Try to break an empty list
        let empty = arena.build_list(Vec::<i32>::new());
        assert_eq!(empty, None);
        assert_eq!(arena.to_vec(empty), Ok(vec![]));
        assert_eq!(arena.count(empty), Ok(0));
        assert_eq!(arena.tail(empty), Ok(None));

        let head = arena.build_list([10, 20, 30]);
        assert_eq!(arena.len(), 3);
        assert_eq!(arena.to_vec(head), Ok(vec![10, 20, 30]));
        assert_eq!(arena.count(head), Ok(3));

        let tail = arena.tail(head).unwrap().unwrap();
        assert_eq!(arena.value(tail), Some(&30));
        assert_eq!(arena.next(tail), None);

        assert_eq!(arena.nth(head, 1).and_then(|id| arena.value(id)), Some(&20));
        assert_eq!(arena.nth(head, 3), None);
    }

    #[test]
    fn test_macro() {
        let mut arena = ListArena::new();
        let head = singly!(arena; 'a' => 'b');
        assert_eq!(arena.to_vec(head), Ok(vec!['a', 'b']));

        let single = singly!(arena; 'z');
        assert_eq!(arena.to_vec(single), Ok(vec!['z']));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_value_mut() {
        let mut arena = ListArena::new();
        let head = singly!(arena; 1 => 2);

        if let Some(value) = head.and_then(|id| arena.value_mut(id)) {
            *value = 100;
        }

        assert_eq!(arena.to_vec(head), Ok(vec![100, 2]));
    }

    #[test]
    fn test_free_makes_handles_stale() {
        let mut arena = ListArena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);

        assert_eq!(arena.free(a), Ok(1));
        assert!(!arena.contains(a));
        assert_eq!(arena.value(a), None);
        assert_eq!(arena.free(a), Err(ListError::StaleNode(a)));
        assert_eq!(arena.len(), 1);

        // The vacated slot is reused, but the old handle stays stale.
        let c = arena.alloc(3);
        assert_eq!(c.index(), a.index());
        assert_ne!(c, a);
        assert_eq!(arena.value(c), Some(&3));
        assert_eq!(arena.value(a), None);

        assert_eq!(arena.set_next(a, Some(b)), Err(ListError::StaleNode(a)));
        assert_eq!(arena.set_next(b, Some(a)), Err(ListError::StaleNode(a)));
    }

    #[test]
    fn test_dangling_link_ends_traversal() {
        let mut arena = ListArena::new();
        let head = singly!(arena; 1 => 2 => 3);
        let second = arena.nth(head, 1).unwrap();

        assert_eq!(arena.free(second), Ok(2));
        assert_eq!(arena.to_vec(head), Ok(vec![1]));
        assert_eq!(head.and_then(|id| arena.next(id)), None);
    }

    #[test]
    fn test_set_next_returns_previous() {
        let mut arena = ListArena::new();
        let head = singly!(arena; 1 => 2 => 3).unwrap();
        let second = arena.next(head).unwrap();
        let third = arena.next(second).unwrap();

        assert_eq!(arena.set_next(head, Some(third)), Ok(Some(second)));
        assert_eq!(arena.to_vec(Some(head)), Ok(vec![1, 3]));
        assert_eq!(arena.set_next(head, None), Ok(Some(third)));
        assert_eq!(arena.to_vec(Some(head)), Ok(vec![1]));
    }

    #[test]
    fn test_link_tail_to() {
        let mut arena = ListArena::new();
        let head = singly!(arena; 1 => 2 => 3);

        assert_eq!(
            arena.link_tail_to(head, 3),
            Err(ListError::PositionOutOfRange { pos: 3, len: 3 })
        );
        assert_eq!(
            arena.link_tail_to(None, 0),
            Err(ListError::PositionOutOfRange { pos: 0, len: 0 })
        );

        let entry = arena.link_tail_to(head, 0).unwrap();
        assert_eq!(Some(entry), head);
        assert_eq!(arena.to_vec(head), Err(ListError::Cyclic));
        assert_eq!(arena.count(head), Err(ListError::Cyclic));
        assert_eq!(arena.tail(head), Err(ListError::Cyclic));

        let looped: Vec<_> = arena.iter(head).take(7).map(|(_, v)| *v).collect();
        assert_eq!(looped, [1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn test_release() {
        let mut arena = ListArena::new();
        let acyclic = singly!(arena; 1 => 2 => 3);
        let cyclic = singly!(arena; 4 => 5 => 6 => 7);
        arena.link_tail_to(cyclic, 2).unwrap();
        assert_eq!(arena.len(), 7);

        assert_eq!(arena.release(cyclic), 4);
        assert_eq!(arena.len(), 3);
        assert_eq!(arena.to_vec(acyclic), Ok(vec![1, 2, 3]));

        // Releasing again is a no-op, the handle is stale.
        assert_eq!(arena.release(cyclic), 0);

        assert_eq!(arena.release(acyclic), 3);
        assert!(arena.is_empty());
        assert_eq!(arena.release(None), 0);
    }

    #[test]
    fn test_release_self_loop() {
        let mut arena = ListArena::new();
        let node = arena.alloc("loop");
        arena.set_next(node, Some(node)).unwrap();

        assert_eq!(arena.release(Some(node)), 1);
        assert!(arena.is_empty());
    }

    #[test]
    fn test_display_node_id() {
        let mut arena = ListArena::new();
        let a = arena.alloc(());
        assert_eq!(a.to_string(), "#0@0");

        arena.free(a).unwrap();
        let b = arena.alloc(());
        assert_eq!(b.to_string(), "#0@1");
    }
}
