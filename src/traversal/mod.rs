//! The depth-first traversal engine and the visitor interface driving it.
//!
//! The module is home to the following items:
//! - [`Flow`] — the four-valued control signal returned by every visitor hook
//! - [`Visitor`] — *the trait for algorithms with state* walked over a tree, with a hook before a
//!   node, on descending into its children, on returning from them and after the node
//! - [`traverse`] — the single recursive walker; every derived query in [`algorithms`] is a
//!   composition of hooks over this one function, none re-implements the recursion
//!
//! [`Flow`]: enum.Flow.html " "
//! [`Visitor`]: trait.Visitor.html " "
//! [`traverse`]: fn.traverse.html " "
//! [`algorithms`]: algorithms/index.html " "

pub mod algorithms;

use crate::Node;

/// The control signal returned by every visitor hook, directing the traversal.
///
/// The variants form a total order of severity, which the derived [`Ord`] implementation
/// reflects: `Continue < SkipNode < SkipSiblings < Abort`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Flow {
    /// Proceed normally.
    Continue,
    /// Abandon the remaining hooks for the current node only and proceed to its next sibling.
    SkipNode,
    /// Abandon the remainder of the current sibling list — the current node and all of its
    /// following siblings — and return control to the level that entered the list. The abandoned
    /// level is not a failure: the enclosing frame carries on as if the list had simply ended.
    SkipSiblings,
    /// Abort the entire traversal immediately. This signal propagates through every enclosing
    /// recursive frame until it reaches the original caller.
    Abort,
}

/// Stateful algorithms which can be walked over a list-tree by [`traverse`].
///
/// Every hook has a no-op default returning [`Flow::Continue`], so implementors only write the
/// hooks their algorithm needs. The visitor itself is the traversal context: hooks communicate
/// with the caller and with each other solely through `&mut self`.
///
/// The `'n` lifetime is that of the traversed tree, allowing a visitor to retain references to
/// nodes it has seen (the way [`FindFirst`] records its match).
///
/// [`traverse`]: fn.traverse.html " "
/// [`FindFirst`]: algorithms/struct.FindFirst.html " "
pub trait Visitor<'n, T> {
    /// Invoked when a node is reached, before anything else happens to it.
    ///
    /// Returning [`Flow::SkipNode`] or anything more severe prevents the node's remaining hooks
    /// (descend, ascend and post-visit) from running at all.
    #[inline]
    fn pre_visit(&mut self, node: &'n Node<T>) -> Flow {
        let _ = node;
        Flow::Continue
    }
    /// Invoked when the traversal is about to enter the current node's child list.
    ///
    /// Only called for nodes that have children and only after a [`Flow::Continue`] pre-visit.
    /// A non-[`Continue`](Flow::Continue) return prevents the descent and the node's post-visit.
    #[inline]
    fn descend(&mut self) -> Flow {
        Flow::Continue
    }
    /// Invoked when the traversal returns from a completed child list.
    ///
    /// Called in a matching pair with [`descend`](Self::descend) unless the child walk was
    /// aborted. A non-[`Continue`](Flow::Continue) return prevents the node's post-visit.
    #[inline]
    fn ascend(&mut self) -> Flow {
        Flow::Continue
    }
    /// Invoked after the node's child list has been fully processed.
    ///
    /// Called in a matching pair with [`pre_visit`](Self::pre_visit) unless an earlier hook
    /// skipped or aborted first.
    #[inline]
    fn post_visit(&mut self, node: &'n Node<T>) -> Flow {
        let _ = node;
        Flow::Continue
    }
}

// Lets the engine recurse on `&mut V` without the caller noticing, and callers stack visitors
// behind mutable references.
impl<'n, T, V: Visitor<'n, T> + ?Sized> Visitor<'n, T> for &mut V {
    #[inline]
    fn pre_visit(&mut self, node: &'n Node<T>) -> Flow {
        (**self).pre_visit(node)
    }
    #[inline]
    fn descend(&mut self) -> Flow {
        (**self).descend()
    }
    #[inline]
    fn ascend(&mut self) -> Flow {
        (**self).ascend()
    }
    #[inline]
    fn post_visit(&mut self, node: &'n Node<T>) -> Flow {
        (**self).post_visit(node)
    }
}

/// Walks the list headed by `root` depth-first, driving the specified visitor.
///
/// An absent root is a no-op returning [`Flow::Continue`]. For each node of the list, in
/// left-to-right order:
///
/// 1. [`pre_visit`] runs. Anything but [`Continue`] suppresses every later hook for this node.
/// 2. On [`Continue`], if the node has a first child: [`descend`] runs, and if it continues, the
///    child list is traversed recursively; if that recursion completes, [`ascend`] runs. A
///    non-[`Continue`] signal from any of those suppresses the node's post-visit, and
///    [`Abort`] additionally unwinds through every enclosing frame.
/// 3. If nothing was skipped or aborted, [`post_visit`] runs.
/// 4. The node's accumulated signal then steers the sibling loop: [`Continue`] and [`SkipNode`]
///    advance to the next sibling, [`SkipSiblings`] ends this list and reports [`Continue`] to
///    the enclosing level, and [`Abort`] ends everything.
///
/// Consequently the value returned here is only ever [`Continue`] (the walk ran to completion,
/// possibly with skipped parts) or [`Abort`] (a hook cut it short). Every reachable node is
/// visited at most once; pre- and post-visit, like descend and ascend, run in matched pairs
/// unless a skip or abort intervenes between them; a node's child list is fully completed (or
/// explicitly aborted) before that node's post-visit.
///
/// The engine allocates nothing and never inspects payloads — it only threads control flow.
/// Relinking nodes of the tree under traversal from inside a hook is not possible through the
/// shared references it hands out, and going around that via interior mutability is unsupported.
///
/// [`pre_visit`]: trait.Visitor.html#method.pre_visit " "
/// [`descend`]: trait.Visitor.html#method.descend " "
/// [`ascend`]: trait.Visitor.html#method.ascend " "
/// [`post_visit`]: trait.Visitor.html#method.post_visit " "
/// [`Continue`]: enum.Flow.html#variant.Continue " "
/// [`SkipNode`]: enum.Flow.html#variant.SkipNode " "
/// [`SkipSiblings`]: enum.Flow.html#variant.SkipSiblings " "
/// [`Abort`]: enum.Flow.html#variant.Abort " "
pub fn traverse<'n, T, V>(root: Option<&'n Node<T>>, visitor: &mut V) -> Flow
where
    V: Visitor<'n, T> + ?Sized,
{
    let mut current = root;
    while let Some(node) = current {
        match visit_node(node, visitor) {
            Flow::Continue | Flow::SkipNode => {}
            // the abandoned level is absorbed here and does not bubble further
            Flow::SkipSiblings => return Flow::Continue,
            Flow::Abort => return Flow::Abort,
        }
        current = node.next();
    }
    Flow::Continue
}

/// Runs the hook sequence for one node, returning the node's accumulated signal for the sibling
/// loop in [`traverse`] to act upon.
fn visit_node<'n, T, V>(node: &'n Node<T>, visitor: &mut V) -> Flow
where
    V: Visitor<'n, T> + ?Sized,
{
    match visitor.pre_visit(node) {
        Flow::Continue => {}
        other => return other,
    }
    if let Some(child) = node.first_child() {
        match visitor.descend() {
            Flow::Continue => {}
            other => return other,
        }
        match traverse(Some(child), visitor) {
            Flow::Abort => return Flow::Abort,
            // the child walk reports Continue otherwise; see traverse
            _ => {}
        }
        match visitor.ascend() {
            Flow::Continue => {}
            other => return other,
        }
    }
    visitor.post_visit(node)
}

#[cfg(test)]
mod tests;
