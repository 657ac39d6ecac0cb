//! Algorithms over linked lists and slices.

pub mod cycle;
pub mod middle;
pub mod search;
pub mod sort;
