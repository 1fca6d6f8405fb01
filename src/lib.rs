//! This crate provides a queue of owned strings, built on a doubly-linked list
//! with owned nodes, implemented as a cyclic list.
//!
//! The [`Queue`] inserts and removes at both ends in constant time, and
//! reorders itself in place: sorting, merging, reversing, pair swapping and
//! filtering all rewire links and never copy or reallocate a value.
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::Queue;
//!
//! let mut queue = Queue::new();
//! for value in ["dolphin", "bear", "gerbil", "bear"].iter() {
//!     queue.insert_tail(value).unwrap();
//! }
//!
//! queue.sort();
//! assert_eq!(queue.iter().collect::<Vec<_>>(), ["bear", "bear", "dolphin", "gerbil"]);
//!
//! queue.delete_duplicate_runs(); // drops both "bear"s
//! queue.reverse();
//! assert_eq!(queue.iter().collect::<Vec<_>>(), ["gerbil", "dolphin"]);
//!
//! let head = queue.remove_head(None).unwrap();
//! assert_eq!(head.value(), "gerbil");
//! assert_eq!(queue.size(), 1);
//! ```
//!
//! # Memory Layout
//!
//! A queue is a [`List`] of [`Element`]s. Every node is a heap allocation
//! that starts with a pair of links, `next` and `prev`, followed by the
//! element. The list itself owns one extra allocation holding only a pair of
//! links, the sentinel, which closes the ring:
//!
//! ```text
//!   List ──→ sentinel ⇄ node 0 ⇄ node 1 ⇄ … ⇄ node n-1 ⇄ sentinel
//!           (links)    (links,   (links,      (links,
//!                       value)    value)       value)
//! ```
//!
//! An empty list is a sentinel linked to itself. `sentinel.next` is the
//! first element and `sentinel.prev` the last, so both ends are one hop
//! away. The sentinel carries no element and is never treated as a node.
//! Cutting a run of nodes out of one list and splicing it into another only
//! rewrites the links at the two ends of the run, which keeps `append`,
//! `merge` and the midpoint split of `sort` cheap.
//!
//! The `len` field is kept when the `length` feature is enabled (the default).
//! [`Queue::size`] counts by walking the queue either way.
//!
//! # Allocation
//!
//! A queue asks an [`ElementAllocator`] for every element and value it
//! stores. [`Global`] is the process allocator; [`Budget`] fails after a fixed
//! number of allocations, which is how the all-or-nothing insertion is
//! tested:
//!
//! ```
//! use cyclic_queue::{AllocKind, Budget, Queue};
//!
//! let mut queue = Queue::with_allocator(Budget::new(3));
//! queue.insert_tail("a").unwrap();
//! let err = queue.insert_tail("b").unwrap_err();
//! assert_eq!(err.kind, AllocKind::Value);
//! assert_eq!(queue.iter().collect::<Vec<_>>(), ["a"]);
//! ```
//!
//! # Queue Chains
//!
//! A [`QueueChain`] holds several sorted queues and merges them all into the
//! first one with [`QueueChain::merge_all`].

pub mod chain;
mod error;
pub mod list;
pub mod queue;

pub use crate::chain::{QueueChain, QueueContext};
pub use crate::error::{AllocError, AllocKind};
pub use crate::list::{Iter, IterMut, List};
pub use crate::queue::{Budget, Element, ElementAllocator, Global, Queue};
