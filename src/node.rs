use crate::{
    traversal::{self, algorithms, Flow, Visitor},
    TreePath,
};
use alloc::boxed::Box;
use core::{
    fmt::{self, Display, Formatter},
    iter::FusedIterator,
    mem,
};

/// An owning link to zero or one node: `None` marks the end of a sibling chain or a leaf.
pub type Link<T> = Option<Box<Node<T>>>;

/// A node of a list-tree.
///
/// A node owns its payload, its next sibling and its first child outright. A node whose sibling
/// chain is non-empty is the head of a *list*; a node whose child chain is non-empty is the
/// *parent* of that list. The root of a whole structure is itself just the head of the top-level
/// list and may have further siblings.
///
/// The structure is acyclic by construction: ownership is strictly tree-shaped, so no node can be
/// reachable from itself.
///
/// # Example
/// ```rust
/// use listree::Node;
///
/// let mut tree = Node::new(1);
/// tree.prepend_child(Node::new(3)).unwrap();
/// let second = tree.prepend_child(Node::new(2)).unwrap();
/// second.prepend_child(Node::new(4)).unwrap();
///
/// let children: Vec<_> = tree.children().map(|child| *child.payload()).collect();
/// assert_eq!(children, [2, 3]);
/// assert_eq!(tree.size(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    payload: T,
    next: Link<T>,
    first_child: Link<T>,
}

impl<T> Node<T> {
    /// Creates a singleton node: no siblings, no children.
    #[inline]
    pub const fn new(payload: T) -> Self {
        Self {
            payload,
            next: None,
            first_child: None,
        }
    }
    /// Creates a node with the specified sibling and child chains.
    #[inline]
    pub const fn with_links(payload: T, next: Link<T>, first_child: Link<T>) -> Self {
        Self {
            payload,
            next,
            first_child,
        }
    }

    /// Returns a shared reference to the node's payload.
    #[inline]
    pub const fn payload(&self) -> &T {
        &self.payload
    }
    /// Returns a mutable reference to the node's payload.
    #[inline]
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }
    /// Returns the node's next sibling, or `None` if the node is the last one in its chain.
    #[inline]
    pub fn next(&self) -> Option<&Self> {
        self.next.as_deref()
    }
    /// Returns the node's next sibling mutably.
    #[inline]
    pub fn next_mut(&mut self) -> Option<&mut Self> {
        self.next.as_deref_mut()
    }
    /// Returns the node's first child, or `None` if the node is a leaf.
    #[inline]
    pub fn first_child(&self) -> Option<&Self> {
        self.first_child.as_deref()
    }
    /// Returns the node's first child mutably.
    #[inline]
    pub fn first_child_mut(&mut self) -> Option<&mut Self> {
        self.first_child.as_deref_mut()
    }
    /// Returns `true` if the node has no children.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }
    /// Returns `true` if the node is the last one in its sibling chain.
    #[inline]
    pub const fn is_last(&self) -> bool {
        self.next.is_none()
    }
    /// Decomposes the node into its payload, sibling chain and child chain.
    #[inline]
    pub fn into_parts(self) -> (T, Link<T>, Link<T>) {
        (self.payload, self.next, self.first_child)
    }

    /// Iterates over the node and all of its following siblings, in chain order.
    #[inline]
    pub fn siblings(&self) -> Siblings<'_, T> {
        Siblings { next: Some(self) }
    }
    /// Iterates over the node's children, in chain order.
    #[inline]
    pub fn children(&self) -> Children<'_, T> {
        Siblings {
            next: self.first_child(),
        }
    }

    /// Makes `singleton` the new head of the list currently headed by `self`, relinking `self`
    /// as its next sibling.
    ///
    /// The inserted node must not have a sibling chain of its own. No searching is performed;
    /// `self` need not be the last node of anything, it simply stops being the head.
    ///
    /// # Errors
    /// If `singleton`'s sibling link is already occupied, it is handed back unchanged inside
    /// [`OccupiedLinkError`] and the list is left untouched.
    pub fn prepend(&mut self, singleton: Self) -> Result<(), OccupiedLinkError<T>> {
        if singleton.next.is_some() {
            return Err(OccupiedLinkError {
                rejected: singleton,
            });
        }
        let old_head = mem::replace(self, singleton);
        self.next = Some(Box::new(old_head));
        Ok(())
    }
    /// Links `appendant` after `self`, which must currently be the last node of its chain.
    ///
    /// The appendant may itself be the head of an arbitrarily long chain. No searching is
    /// performed; the caller supplies the exact node whose sibling slot is empty.
    ///
    /// # Errors
    /// If `self` already has a next sibling, `appendant` is handed back unchanged inside
    /// [`OccupiedLinkError`].
    pub fn append(&mut self, appendant: Self) -> Result<(), OccupiedLinkError<T>> {
        if self.next.is_some() {
            return Err(OccupiedLinkError {
                rejected: appendant,
            });
        }
        self.next = Some(Box::new(appendant));
        Ok(())
    }
    /// Makes `new_child` the node's first child, relinking the former first child (if any) as
    /// `new_child`'s next sibling. Returns a mutable reference to the inserted child.
    ///
    /// # Errors
    /// If `new_child`'s sibling link is already occupied, it is handed back unchanged inside
    /// [`OccupiedLinkError`] and the child list is left untouched.
    pub fn prepend_child(&mut self, mut new_child: Self) -> Result<&mut Self, OccupiedLinkError<T>> {
        if new_child.next.is_some() {
            return Err(OccupiedLinkError {
                rejected: new_child,
            });
        }
        new_child.next = self.first_child.take();
        Ok(self.first_child.insert(Box::new(new_child)))
    }

    /// Traverses the subtree rooted at this node depth-first, driving the specified visitor.
    ///
    /// This is [`traversal::traverse`] with a guaranteed-present root; see its documentation for
    /// the exact callback-cancellation semantics. Returns [`Flow::Abort`] if the visitor aborted
    /// the walk and [`Flow::Continue`] otherwise.
    #[inline]
    pub fn traverse<'n, V>(&'n self, visitor: &mut V) -> Flow
    where
        V: Visitor<'n, T> + ?Sized,
    {
        traversal::traverse(Some(self), visitor)
    }

    /// Counts every node reachable from this one, itself and its further siblings included.
    #[inline]
    pub fn size(&self) -> usize {
        algorithms::size(Some(self))
    }
    /// Counts the nodes of the sibling chain starting at this node, without entering children.
    #[inline]
    pub fn length(&self) -> usize {
        algorithms::length(Some(self))
    }
    /// Measures the deepest nesting level reachable from this node, where a chain of leaves is
    /// 1 level deep.
    #[inline]
    pub fn depth(&self) -> usize {
        algorithms::depth(Some(self))
    }
    /// Returns the first node, in pre-order, whose payload satisfies the predicate, or `None`
    /// if no payload matches.
    #[inline]
    pub fn find<P>(&self, predicate: P) -> Option<&Self>
    where
        P: FnMut(&T) -> bool,
    {
        algorithms::find(Some(self), predicate)
    }

    /// Returns the node designated by the specified path of sibling indices, or `None` if the
    /// path runs off the structure.
    ///
    /// Each index selects a sibling (0-based, by walking `next` that many times) at the current
    /// level; every index but the last then descends into that sibling's children, while the
    /// last one selects the target node itself. Indexing past the end of a sibling chain, or
    /// descending past a leaf, yields `None` — an ordinary "not found", not an error. Paths are
    /// non-empty by construction; see [`TreePath`].
    ///
    /// # Example
    /// ```rust
    /// use listree::{Node, TreePath};
    ///
    /// let mut tree = Node::new("a");
    /// tree.prepend_child(Node::new("a1")).unwrap();
    /// tree.append(Node::new("b")).unwrap();
    ///
    /// let path = TreePath::new(&[0, 0]).unwrap();
    /// assert_eq!(tree.locate(path).map(Node::payload), Some(&"a1"));
    /// let path = TreePath::new(&[1]).unwrap();
    /// assert_eq!(tree.locate(path).map(Node::payload), Some(&"b"));
    /// let path = TreePath::new(&[1, 0]).unwrap();
    /// assert_eq!(tree.locate(path), None);
    /// ```
    #[inline]
    pub fn locate(&self, path: TreePath<'_>) -> Option<&Self> {
        Self::locate_in(self, path.indices())
    }
    /// Mutable version of [`locate`](Self::locate).
    #[inline]
    pub fn locate_mut(&mut self, path: TreePath<'_>) -> Option<&mut Self> {
        Self::locate_in_mut(self, path.indices())
    }

    fn locate_in<'n>(list: &'n Self, indices: &[usize]) -> Option<&'n Self> {
        // TreePath guarantees non-emptiness at every recursion step
        let (&first, rest) = indices.split_first()?;
        let mut node = list;
        for _ in 0..first {
            node = node.next()?;
        }
        if rest.is_empty() {
            Some(node)
        } else {
            Self::locate_in(node.first_child()?, rest)
        }
    }
    fn locate_in_mut<'n>(list: &'n mut Self, indices: &[usize]) -> Option<&'n mut Self> {
        let (&first, rest) = indices.split_first()?;
        let mut node = list;
        for _ in 0..first {
            node = node.next.as_deref_mut()?;
        }
        if rest.is_empty() {
            Some(node)
        } else {
            Self::locate_in_mut(node.first_child.as_deref_mut()?, rest)
        }
    }

    /// Consumes the subtree rooted at this node, siblings included, invoking the cleanup
    /// function once per payload.
    ///
    /// Children are disposed strictly before the node that owns them, so a cleanup working on a
    /// child payload never runs after its parent's. The relative order between a node and its
    /// siblings is left unspecified. Simply dropping the tree remains correct when no cleanup
    /// hook is needed.
    #[inline]
    pub fn dispose_with<F>(self, mut cleanup: F)
    where
        F: FnMut(T),
    {
        self.dispose_inner(&mut cleanup);
    }
    fn dispose_inner<F>(self, cleanup: &mut F)
    where
        F: FnMut(T),
    {
        let Self {
            payload,
            next,
            first_child,
        } = self;
        if let Some(child) = first_child {
            child.dispose_inner(cleanup);
        }
        cleanup(payload);
        if let Some(next) = next {
            next.dispose_inner(cleanup);
        }
    }
}

/// An iterator over a sibling chain of a list-tree.
///
/// Created by [`Node::siblings`] and [`Node::children`].
#[derive(Clone, Debug)]
pub struct Siblings<'a, T> {
    next: Option<&'a Node<T>>,
}
impl<'a, T> Iterator for Siblings<'a, T> {
    type Item = &'a Node<T>;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next();
        Some(current)
    }
}
impl<T> FusedIterator for Siblings<'_, T> {}

/// An iterator over the children of a node, i.e. the sibling chain headed by its first child.
pub type Children<'a, T> = Siblings<'a, T>;

/// The error type produced by [`prepend`], [`append`] and [`prepend_child`], indicating that a
/// link which the operation requires to be empty was already occupied.
///
/// The node which was attempted to be inserted is returned back to the caller so that it does
/// not get dropped and the operation can be retried after relinking.
///
/// [`prepend`]: struct.Node.html#method.prepend " "
/// [`append`]: struct.Node.html#method.append " "
/// [`prepend_child`]: struct.Node.html#method.prepend_child " "
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OccupiedLinkError<T> {
    /// The node which was attempted to be inserted, returned back to the caller.
    pub rejected: Node<T>,
}
impl<T> Display for OccupiedLinkError<T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("a link required to be empty was already occupied")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<T: fmt::Debug> std::error::Error for OccupiedLinkError<T> {}
