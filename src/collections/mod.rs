//! Collection Types.

pub mod arena_list;

pub use arena_list::{Iter, ListArena, Node, NodeId};
