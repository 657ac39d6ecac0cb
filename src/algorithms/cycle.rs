//! [Cycle Detection]: Floyd's "tortoise and hare" over a singly-linked list.
//!
//! Two pointers start at the head. Each round the tortoise follows one link
//! and the hare follows two. If the hare runs off the end of the list there
//! is no cycle; if the two ever land on the same node, the list loops and
//! that node is the *meeting point*.
//!
//! From the meeting point, walking the loop once gives its length, and
//! walking from the head and the meeting point in lockstep gives its entry.
//!
//! None of the functions here rewrite links; they only follow them.
//!
//! [Cycle Detection]: https://en.wikipedia.org/wiki/Cycle_detection#Floyd's_tortoise_and_hare

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::collections::{ListArena, NodeId};

/// Where a [`TortoiseHare`] traversal stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pointers are still advancing.
    Searching,
    /// The pointers landed on the same node.
    FoundCycle(NodeId),
    /// The hare ran off the end of the list.
    NoCycle,
}

impl Phase {
    /// Returns `true` once the traversal has reached a terminal phase.
    #[inline]
    pub const fn is_done(self) -> bool {
        !matches!(self, Phase::Searching)
    }
}

/// A step-wise tortoise-and-hare traversal.
///
/// Starts in [`Phase::Searching`] (or [`Phase::NoCycle`] for an empty list)
/// and moves to one of the terminal phases, which are absorbing. When it ends
/// in [`Phase::NoCycle`] the tortoise rests on the middle of the list.
///
/// # Examples
///
/// ```
/// use tortoise::prelude::*;
///
/// let mut arena = ListArena::new();
/// let head = singly!(arena; 1 => 2 => 3);
///
/// let mut walk = TortoiseHare::new(&arena, head);
/// assert_eq!(walk.phase(), Phase::Searching);
/// assert_eq!(walk.step(), Phase::Searching);
/// assert_eq!(walk.step(), Phase::NoCycle);
/// assert_eq!(walk.step(), Phase::NoCycle);
///
/// assert_eq!(walk.rounds(), 1);
/// assert_eq!(walk.slow().and_then(|id| arena.value(id)), Some(&2));
/// ```
#[derive(Debug)]
pub struct TortoiseHare<'a, T> {
    arena: &'a ListArena<T>,
    slow: Option<NodeId>,
    fast: Option<NodeId>,
    rounds: usize,
    phase: Phase,
}

impl<'a, T> TortoiseHare<'a, T> {
    /// Places both pointers on `head`.
    pub fn new(arena: &'a ListArena<T>, head: Option<NodeId>) -> Self {
        let head = head.filter(|&id| arena.contains(id));
        let phase = match head {
            Some(_) => Phase::Searching,
            None => Phase::NoCycle,
        };

        Self {
            arena,
            slow: head,
            fast: head,
            rounds: 0,
            phase,
        }
    }

    /// Returns the current phase.
    #[inline]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the node under the tortoise.
    #[inline]
    pub const fn slow(&self) -> Option<NodeId> {
        self.slow
    }

    /// Returns the node under the hare.
    #[inline]
    pub const fn fast(&self) -> Option<NodeId> {
        self.fast
    }

    /// Returns the number of completed rounds.
    #[inline]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Advances the traversal by one round and returns the new phase.
    ///
    /// A round only happens when the hare has at least one successor;
    /// otherwise the traversal ends in [`Phase::NoCycle`] with the tortoise
    /// left where it is.
    pub fn step(&mut self) -> Phase {
        if self.phase.is_done() {
            return self.phase;
        }

        let Some(fast_next) = self.fast.and_then(|id| self.arena.next(id)) else {
            self.phase = Phase::NoCycle;
            return self.phase;
        };

        // The tortoise trails the hare, so it always has a successor here.
        self.slow = self.slow.and_then(|id| self.arena.next(id));
        self.fast = self.arena.next(fast_next);
        self.rounds += 1;

        self.phase = match (self.slow, self.fast) {
            (_, None) => Phase::NoCycle,
            (Some(slow), Some(fast)) if slow == fast => {
                trace!(meeting = %fast, rounds = self.rounds, "pointers met");
                Phase::FoundCycle(fast)
            }
            _ => Phase::Searching,
        };

        self.phase
    }

    /// Steps until a terminal phase is reached.
    ///
    /// # Time Complexity
    ///
    /// Takes *O*(*n*) time. Without a cycle the hare reaches the end in
    /// *n*/2 rounds. With one, the hare gains one node per round on the
    /// tortoise once both are inside the loop, so they meet before the
    /// tortoise completes its first lap.
    pub fn run(&mut self) -> Phase {
        while !self.phase.is_done() {
            self.step();
        }

        self.phase
    }
}

/// How [`has_cycle_with`] should look for a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Tortoise and hare: *O*(*n*) time, *O*(1) extra memory.
    #[default]
    ConstantSpace,
    /// Remember every visited node: *O*(*n*) time, *O*(*n*) extra memory.
    VisitedSet,
}

/// Returns `true` if following links from `head` revisits a node.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time and *O*(1) extra memory, using the tortoise-and-hare
/// traversal.
///
/// # Examples
///
/// ```
/// use tortoise::prelude::*;
///
/// let mut arena = ListArena::new();
/// let head = singly!(arena; 1 => 2 => 3 => 4 => 5);
/// assert!(!has_cycle(&arena, head));
///
/// arena.link_tail_to(head, 2).unwrap();
/// assert!(has_cycle(&arena, head));
///
/// assert!(!has_cycle(&arena, None));
/// ```
pub fn has_cycle<T>(arena: &ListArena<T>, head: Option<NodeId>) -> bool {
    meeting_point(arena, head).is_some()
}

/// Returns `true` if following links from `head` revisits a node, using the
/// chosen [`Strategy`].
pub fn has_cycle_with<T>(arena: &ListArena<T>, head: Option<NodeId>, strategy: Strategy) -> bool {
    match strategy {
        Strategy::ConstantSpace => has_cycle(arena, head),
        Strategy::VisitedSet => has_cycle_visited(arena, head),
    }
}

/// Returns `true` if following links from `head` revisits a node, by
/// recording every node seen in a hash set.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time and *O*(*n*) extra memory. Kept as a reference to
/// check [`has_cycle`] against; prefer that one.
pub fn has_cycle_visited<T>(arena: &ListArena<T>, head: Option<NodeId>) -> bool {
    let mut seen = FxHashSet::default();
    let mut curr = head.filter(|&id| arena.contains(id));

    while let Some(id) = curr {
        if !seen.insert(id) {
            return true;
        }
        curr = arena.next(id);
    }

    false
}

/// Returns the node where the tortoise and hare first meet, or [`None`] if
/// the list has no cycle.
pub fn meeting_point<T>(arena: &ListArena<T>, head: Option<NodeId>) -> Option<NodeId> {
    match TortoiseHare::new(arena, head).run() {
        Phase::FoundCycle(meeting) => Some(meeting),
        Phase::Searching | Phase::NoCycle => None,
    }
}

/// Returns the number of nodes on the cycle, or 0 if the list has none.
///
/// # Examples
///
/// ```
/// use tortoise::prelude::*;
///
/// let mut arena = ListArena::new();
/// let node = arena.alloc(1);
/// assert_eq!(cycle_length(&arena, Some(node)), 0);
///
/// arena.set_next(node, Some(node)).unwrap();
/// assert_eq!(cycle_length(&arena, Some(node)), 1);
/// ```
pub fn cycle_length<T>(arena: &ListArena<T>, head: Option<NodeId>) -> usize {
    meeting_point(arena, head).map_or(0, |meeting| lap_length(arena, meeting))
}

/// Returns the first node of the cycle reached from `head`, or [`None`] if
/// the list has no cycle.
///
/// # Examples
///
/// ```
/// use tortoise::prelude::*;
///
/// let mut arena = ListArena::new();
/// let head = singly!(arena; 1 => 2 => 3 => 4 => 5);
/// arena.link_tail_to(head, 2).unwrap();
///
/// let start = cycle_start(&arena, head).unwrap();
/// assert_eq!(arena.value(start), Some(&3));
/// ```
pub fn cycle_start<T>(arena: &ListArena<T>, head: Option<NodeId>) -> Option<NodeId> {
    let meeting = meeting_point(arena, head)?;
    Some(entry_from(arena, head?, meeting))
}

/// Everything known about the cycle of a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Node where the tortoise and hare met.
    pub meeting_point: Option<NodeId>,
    /// First node of the cycle reached from the head.
    pub start: Option<NodeId>,
    /// Number of nodes on the cycle, 0 without one.
    pub length: usize,
}

impl CycleReport {
    /// Returns `true` if the list has a cycle.
    #[inline]
    pub const fn has_cycle(&self) -> bool {
        self.meeting_point.is_some()
    }
}

/// Detects a cycle and, if there is one, measures it and finds its entry,
/// reusing a single meeting point.
pub fn analyze<T>(arena: &ListArena<T>, head: Option<NodeId>) -> CycleReport {
    let mut walk = TortoiseHare::new(arena, head);
    let (Phase::FoundCycle(meeting), Some(head)) = (walk.run(), head) else {
        debug!(rounds = walk.rounds(), "no cycle");
        return CycleReport::default();
    };

    let length = lap_length(arena, meeting);
    let start = entry_from(arena, head, meeting);
    debug!(rounds = walk.rounds(), %meeting, %start, length, "cycle found");

    CycleReport {
        meeting_point: Some(meeting),
        start: Some(start),
        length,
    }
}

/// Counts the links followed to get from `from` back to itself.
///
/// `from` must lie on a cycle.
fn lap_length<T>(arena: &ListArena<T>, from: NodeId) -> usize {
    let mut len = 1;
    let mut curr = arena.next(from);

    while let Some(id) = curr {
        if id == from {
            break;
        }
        len += 1;
        curr = arena.next(id);
    }

    len
}

/// Walks from `head` and `meeting` in lockstep; they coincide on the entry.
///
/// The distance from the head to the entry equals the distance from the
/// meeting point to the entry, modulo the cycle length.
fn entry_from<T>(arena: &ListArena<T>, head: NodeId, meeting: NodeId) -> NodeId {
    let (mut a, mut b) = (head, meeting);

    while a != b {
        match (arena.next(a), arena.next(b)) {
            (Some(next_a), Some(next_b)) => {
                a = next_a;
                b = next_b;
            }
            _ => break,
        }
    }

    a
}
