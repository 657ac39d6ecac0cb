//! Linked-list cycle analysis.
//!
//! Singly-linked lists live in a [`ListArena`](collections::ListArena) and
//! are analysed with the tortoise-and-hare traversal: cycle detection, cycle
//! length and entry, and middle-finding. Sorting and searching routines for
//! slices come along as supporting algorithms.
//!
//! # Examples
//!
//! ```
//! use tortoise::prelude::*;
//!
//! let mut arena = ListArena::new();
//! let head = singly!(arena; 1 => 2 => 3 => 4 => 5);
//!
//! let mid = find_middle(&arena, head).unwrap().unwrap();
//! assert_eq!(arena.value(mid), Some(&3));
//!
//! arena.link_tail_to(head, 2).unwrap();
//! let report = analyze(&arena, head);
//! assert!(report.has_cycle());
//! assert_eq!(report.length, 3);
//!
//! assert_eq!(arena.release(head), 5);
//! ```

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

use std::sync::Once;

pub mod algorithms;
pub mod collections;
pub mod error;

pub use error::ListError;

/// Linked-list cycle analysis prelude.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::singly;

    #[doc(no_inline)]
    pub use super::collections::{ListArena, Node, NodeId};
    #[doc(no_inline)]
    pub use super::error::ListError;

    #[doc(no_inline)]
    pub use super::algorithms::cycle::*;
    #[doc(no_inline)]
    pub use super::algorithms::middle::*;
    #[doc(no_inline)]
    pub use super::algorithms::search::*;
    #[doc(no_inline)]
    pub use super::algorithms::sort::*;
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=tortoise=debug` or `RUST_LOG=tortoise=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
