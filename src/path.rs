use thiserror::Error;

/// A borrowed, non-empty sequence of sibling indices designating one node by its position from
/// the root.
///
/// Read root-to-leaf: each index selects which sibling (0-based, by walking `next` that many
/// times) to descend into at its level, and the final index selects the target node itself. A
/// path of length 0 cannot designate anything, so zero-length paths are rejected at
/// construction — supplying one is a programmer error, not a "not found" outcome, and it never
/// reaches a traversal.
///
/// # Example
/// ```rust
/// use listree::TreePath;
///
/// let indices = [1, 0, 2];
/// let path = TreePath::new(&indices).unwrap();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.indices(), &[1, 0, 2]);
///
/// assert!(TreePath::new(&[]).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TreePath<'a> {
    indices: &'a [usize],
}

impl<'a> TreePath<'a> {
    /// Wraps the specified slice of sibling indices.
    ///
    /// # Errors
    /// Fails with [`EmptyPathError`] if the slice is empty.
    #[inline]
    pub const fn new(indices: &'a [usize]) -> Result<Self, EmptyPathError> {
        if indices.is_empty() {
            Err(EmptyPathError)
        } else {
            Ok(Self { indices })
        }
    }
    /// Returns the underlying slice of sibling indices, guaranteed to be non-empty.
    #[inline]
    pub const fn indices(self) -> &'a [usize] {
        self.indices
    }
    /// Returns the number of levels the path spans.
    #[inline]
    pub const fn len(self) -> usize {
        self.indices.len()
    }
    /// Returns the index at the topmost level.
    #[inline]
    pub const fn first(self) -> usize {
        self.indices[0]
    }
    /// Returns the index selecting the target node at the deepest level.
    #[inline]
    pub const fn last(self) -> usize {
        self.indices[self.indices.len() - 1]
    }
}

impl<'a> TryFrom<&'a [usize]> for TreePath<'a> {
    type Error = EmptyPathError;
    #[inline]
    fn try_from(indices: &'a [usize]) -> Result<Self, Self::Error> {
        Self::new(indices)
    }
}

/// The error type returned when constructing a [`TreePath`] from a zero-length index slice.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Error)]
#[error("a node path must contain at least one sibling index")]
pub struct EmptyPathError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_slices() {
        assert_eq!(TreePath::new(&[]), Err(EmptyPathError));
        assert_eq!(TreePath::try_from(&[][..]), Err(EmptyPathError));
    }

    #[test]
    fn exposes_ends() {
        let path = TreePath::new(&[3, 1, 4]).expect("non-empty path");
        assert_eq!(path.first(), 3);
        assert_eq!(path.last(), 4);
        assert_eq!(path.len(), 3);
    }
}
