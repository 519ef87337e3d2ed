//! Singly-linked list-trees and interfaces to traverse them.
//!
//! # Overview
//! A *list-tree* is a recursive structure in which every node owns a payload, an optional link to
//! its next sibling and an optional link to its first child. The sibling chain starting at a
//! node's first child is that node's list of children, so the whole thing is algebraically a
//! binary tree (left = child, right = sibling) presented as a forest of singly-linked lists.
//!
//! The core of the crate is a single recursive depth-first walk, [`traverse`], driven by a
//! [`Visitor`] whose four hooks (pre-visit, descend, ascend, post-visit) each return a [`Flow`]
//! signal: continue, skip the current node, abandon the current sibling list, or abort the whole
//! walk. Every higher-level operation — [`size`], [`length`], [`depth`], [`find`], rendering —
//! is a specialization of that one walk, built purely through visitor composition. The only
//! deliberate exception is [`Node::locate`], which descends by explicit sibling indices instead.
//!
//! # Ownership
//! Links are single-owner: each node is owned either by a root binding, by its predecessor in the
//! sibling chain, or by its parent through the first-child link. That makes the structure
//! acyclic and whole-tree disposal sound by construction, with no sharing and no runtime checks.
//!
//! # Example
//! ```rust
//! use listree::{Node, algorithms};
//!
//! let mut root = Node::new("etc");
//! root.prepend_child(Node::new("passwd")).unwrap();
//! root.prepend_child(Node::new("hosts")).unwrap();
//!
//! assert_eq!(root.size(), 3);
//! assert_eq!(root.depth(), 2);
//! let hit = algorithms::find(Some(&root), |payload| *payload == "passwd");
//! assert_eq!(hit.map(Node::payload), Some(&"passwd"));
//! ```
//!
//! # Feature flags
//! - `std` (**enabled by default**) — disables `no_std` for the crate, adding an [`Error`] trait
//!   implementation for [`OccupiedLinkError`] and an I/O front-end for the renderer,
//!   [`render_io`]. The crate always requires `alloc`, since links own their targets through
//!   `Box`.
//!
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`traverse`]: traversal/fn.traverse.html " "
//! [`Visitor`]: traversal/trait.Visitor.html " "
//! [`Flow`]: traversal/enum.Flow.html " "
//! [`size`]: traversal/algorithms/fn.size.html " "
//! [`length`]: traversal/algorithms/fn.length.html " "
//! [`depth`]: traversal/algorithms/fn.depth.html " "
//! [`find`]: traversal/algorithms/fn.find.html " "
//! [`Node::locate`]: struct.Node.html#method.locate " "
//! [`OccupiedLinkError`]: struct.OccupiedLinkError.html " "
//! [`render_io`]: render/fn.render_io.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::explicit_iter_loop,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::redundant_closure_for_method_calls,
    clippy::single_match_else,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::dbg_macro,
    clippy::use_debug,
)]
#![deny(anonymous_parameters, bare_trait_objects, clippy::exit)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

mod node;
pub use node::{Children, Link, Node, OccupiedLinkError, Siblings};

mod path;
pub use path::{EmptyPathError, TreePath};

pub mod traversal;
#[doc(no_inline)]
pub use traversal::algorithms;
pub use traversal::{traverse, Flow, Visitor};

pub mod generate;
#[doc(no_inline)]
pub use generate::generate;

pub mod render;
#[doc(no_inline)]
pub use render::{render, RenderStyle};

/// A prelude for using `listree`, containing the most used items in one glob-importable place.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::{
        generate::generate,
        traversal::{
            algorithms::{depth, find, length, size},
            traverse, Flow, Visitor,
        },
        Link, Node, TreePath,
    };
}
