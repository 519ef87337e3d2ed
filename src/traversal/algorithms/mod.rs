//! Canned queries over list-trees, each a visitor composition over [`traverse`].
//!
//! This includes:
//! - Counting every reachable node ([`size`] / [`NodeCounter`])
//! - Counting the top-level sibling list only ([`length`] / [`SiblingCounter`])
//! - Measuring the deepest nesting level ([`depth`] / [`DepthGauge`])
//! - Searching by payload predicate ([`find`] / [`FindFirst`])
//!
//! The functions take `Option<&Node<T>>` so that empty trees are first-class inputs; for a root
//! that is known to exist, the same queries are available as methods on [`Node`].
//!
//! Locating a node by an index path is deliberately *not* here: it is not a whole-tree walk, so
//! it lives on [`Node::locate`] as a direct descent.
//!
//! [`traverse`]: ../fn.traverse.html " "
//! [`size`]: fn.size.html " "
//! [`length`]: fn.length.html " "
//! [`depth`]: fn.depth.html " "
//! [`find`]: fn.find.html " "
//! [`NodeCounter`]: struct.NodeCounter.html " "
//! [`SiblingCounter`]: struct.SiblingCounter.html " "
//! [`DepthGauge`]: struct.DepthGauge.html " "
//! [`FindFirst`]: struct.FindFirst.html " "
//! [`Node`]: ../../struct.Node.html " "
//! [`Node::locate`]: ../../struct.Node.html#method.locate " "

use super::{traverse, Flow, Visitor};
use crate::Node;

/// A [`Visitor`] which counts every node it reaches.
///
/// [`Visitor`]: ../trait.Visitor.html " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodeCounter {
    /// The number of nodes counted so far.
    pub count: usize,
}
impl<T> Visitor<'_, T> for NodeCounter {
    #[inline]
    fn pre_visit(&mut self, _: &Node<T>) -> Flow {
        self.count += 1;
        Flow::Continue
    }
}

/// A [`Visitor`] which counts the nodes of one sibling list without entering their children.
///
/// Skipping each node right after counting it keeps the walk on the current level: the sibling
/// loop still advances, but no descent ever happens.
///
/// [`Visitor`]: ../trait.Visitor.html " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SiblingCounter {
    /// The number of siblings counted so far.
    pub count: usize,
}
impl<T> Visitor<'_, T> for SiblingCounter {
    #[inline]
    fn pre_visit(&mut self, _: &Node<T>) -> Flow {
        self.count += 1;
        Flow::SkipNode
    }
}

/// A [`Visitor`] which tracks the nesting level and records the deepest one reached.
///
/// [`Visitor`]: ../trait.Visitor.html " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DepthGauge {
    /// The nesting level of the list currently being walked, relative to the starting node.
    pub level: usize,
    /// The deepest nesting level seen so far.
    pub max_level: usize,
}
impl<T> Visitor<'_, T> for DepthGauge {
    #[inline]
    fn descend(&mut self) -> Flow {
        self.level += 1;
        Flow::Continue
    }
    #[inline]
    fn ascend(&mut self) -> Flow {
        if self.max_level < self.level {
            self.max_level = self.level;
        }
        self.level -= 1;
        Flow::Continue
    }
}

/// A [`Visitor`] which records the first node, in pre-order, whose payload satisfies a
/// predicate, then aborts the walk.
///
/// [`Visitor`]: ../trait.Visitor.html " "
#[derive(Copy, Clone, Debug)]
pub struct FindFirst<'n, T, P> {
    predicate: P,
    found: Option<&'n Node<T>>,
}
impl<'n, T, P> FindFirst<'n, T, P> {
    /// Creates a visitor searching for the specified predicate, with nothing found yet.
    #[inline]
    pub const fn new(predicate: P) -> Self {
        Self {
            predicate,
            found: None,
        }
    }
    /// Returns the match recorded so far, if any.
    #[inline]
    pub const fn found(&self) -> Option<&'n Node<T>> {
        self.found
    }
    /// Extracts the recorded match, consuming the visitor.
    #[inline]
    pub fn into_found(self) -> Option<&'n Node<T>> {
        self.found
    }
}
impl<'n, T, P> Visitor<'n, T> for FindFirst<'n, T, P>
where
    P: FnMut(&T) -> bool,
{
    #[inline]
    fn pre_visit(&mut self, node: &'n Node<T>) -> Flow {
        // aborting on a match guarantees this hook never runs with a result already recorded
        debug_assert!(self.found.is_none(), "visited a node after a match was found");
        if (self.predicate)(node.payload()) {
            self.found = Some(node);
            Flow::Abort
        } else {
            Flow::Continue
        }
    }
}

/// Counts every node reachable from `root`, the nodes of its sibling chain and their subtrees
/// included. An absent root counts as 0.
#[inline]
pub fn size<T>(root: Option<&Node<T>>) -> usize {
    let mut counter = NodeCounter::default();
    traverse(root, &mut counter);
    counter.count
}

/// Counts the nodes of the top-level sibling list headed by `root`, without descending into any
/// children. An absent root counts as 0.
#[inline]
pub fn length<T>(root: Option<&Node<T>>) -> usize {
    let mut counter = SiblingCounter::default();
    traverse(root, &mut counter);
    counter.count
}

/// Measures the maximum nesting depth reachable from `root`: 0 for an absent root, otherwise
/// one more than the deepest level relative to the top-level list (so a chain of leaves is 1
/// level deep).
#[inline]
pub fn depth<T>(root: Option<&Node<T>>) -> usize {
    if root.is_none() {
        return 0;
    }
    let mut gauge = DepthGauge::default();
    traverse(root, &mut gauge);
    gauge.max_level + 1
}

/// Returns the first node, in pre-order, whose payload satisfies the predicate.
///
/// "Found, traversal aborted early" and "no match, traversal completed naturally" both surface
/// as ordinary values here — `Some` and `None` respectively — never as errors.
#[inline]
pub fn find<'n, T, P>(root: Option<&'n Node<T>>, predicate: P) -> Option<&'n Node<T>>
where
    P: FnMut(&T) -> bool,
{
    let mut finder = FindFirst::new(predicate);
    traverse(root, &mut finder);
    finder.into_found()
}

#[cfg(test)]
mod tests;
