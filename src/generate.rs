//! Top-down generation of a whole tree from a procedural rule.
//!
//! The rule is a function from a node's prospective [path] — the sequence of sibling indices
//! from the root down to the candidate, its own index included — to either `Some(payload)`,
//! materializing a node there, or `None`, stating that no node exists at that position.
//! Declining sibling index *k* of a list terminates that list, so indices greater than *k* are
//! never asked about at that position: this is how the rule determines list lengths.
//!
//! Construction is eager and recursive, in the same child-then-sibling shape as the node
//! structure itself. Termination is the rule's obligation — it must decline all paths beyond
//! some finite bound, as no depth limit is enforced here.
//!
//! [path]: ../struct.TreePath.html " "

use crate::{Link, Node};
use alloc::boxed::Box;
use smallvec::SmallVec;

/// Paths stay inline until the candidate tree is more than 16 levels deep.
type PathBuf = SmallVec<[usize; 16]>;

/// Generates a tree from the specified rule, returning `None` if the rule declines even the
/// root position `[0]`.
///
/// The chain of the root's own further siblings is generated too, exactly like any other
/// sibling list: the result is the head of a top-level list of as many nodes as the rule grants
/// at depth 0.
///
/// # Example
/// A full binary tree, two levels below the root, with each payload naming its path:
/// ```rust
/// use listree::{generate, Node, TreePath};
///
/// let tree = generate(|path: &[usize]| {
///     if path.iter().any(|&index| index >= 2) || path.len() > 3 || path[0] > 0 {
///         None
///     } else {
///         Some(format!("{path:?}"))
///     }
/// })
/// .expect("the rule grants the root position");
///
/// assert_eq!(tree.size(), 7);
/// assert_eq!(tree.depth(), 3);
/// let path = TreePath::new(&[0, 1, 0]).unwrap();
/// assert_eq!(tree.locate(path).map(Node::payload), Some(&"[0, 1, 0]".to_string()));
/// ```
pub fn generate<T, F>(mut rule: F) -> Option<Node<T>>
where
    F: FnMut(&[usize]) -> Option<T>,
{
    let mut path = PathBuf::new();
    path.push(0);
    generate_from(&mut rule, &mut path).map(|node| *node)
}

/// Generates the node at the current path, its child list and its following siblings.
///
/// The path buffer is restored to its incoming state on every return.
fn generate_from<T, F>(rule: &mut F, path: &mut PathBuf) -> Link<T>
where
    F: FnMut(&[usize]) -> Option<T>,
{
    let payload = rule(path)?;

    path.push(0);
    let first_child = generate_from(rule, path);
    path.pop();

    *path.last_mut().expect("path is never empty here") += 1;
    let next = generate_from(rule, path);
    *path.last_mut().expect("path is never empty here") -= 1;

    Some(Box::new(Node::with_links(payload, next, first_child)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreePath;
    use pretty_assertions::assert_eq;

    /// The packed-integer rule of the reference test fixture: nodes exist for every path with
    /// all indices below `length` and fewer than `depth` levels; each payload packs the path
    /// base-16, one digit of `1 + index` per level, the leaf's own digit least significant.
    fn packed_int_rule(length: usize, depth: usize) -> impl FnMut(&[usize]) -> Option<i64> {
        move |path: &[usize]| {
            if path.len() > depth || path.iter().any(|&index| index >= length) {
                return None;
            }
            let packed = path
                .iter()
                .rev()
                .enumerate()
                .map(|(place, &index)| ((1 + index) as i64) << (4 * place))
                .sum();
            Some(packed)
        }
    }

    fn packed_int_tree(length: usize, depth: usize) -> Node<i64> {
        generate(packed_int_rule(length, depth)).expect("the rule grants the root position")
    }

    #[test]
    fn declined_root_yields_nothing() {
        assert_eq!(generate(|_: &[usize]| None::<u8>), None);
    }

    #[test]
    fn bounded_rule_generates_uniform_dimensions() {
        let tree = packed_int_tree(3, 4);
        assert_eq!(tree.length(), 3);
        assert_eq!(tree.depth(), 4);
        // 3 + 9 + 27 + 81
        assert_eq!(tree.size(), 120);
    }

    #[test]
    fn payloads_pack_their_paths() {
        let tree = packed_int_tree(3, 4);
        let path = TreePath::new(&[1, 0, 2, 1]).expect("non-empty path");
        let node = tree.locate(path).expect("the path is in bounds");
        assert_eq!(*node.payload(), 0x2132);
        // the packed payloads are unique, so find agrees with locate
        let found = tree.find(|&payload| payload == 0x2132);
        assert_eq!(found.map(Node::payload), Some(&0x2132));
    }

    #[test]
    fn locate_misses_are_ordinary_absences() {
        let tree = packed_int_tree(3, 4);
        // one element too long
        let too_long = TreePath::new(&[1, 0, 2, 1, 2, 5]).expect("non-empty path");
        assert_eq!(tree.locate(too_long), None);
        // last index out of range of its sibling list
        let out_of_range = TreePath::new(&[1, 0, 3]).expect("non-empty path");
        assert_eq!(tree.locate(out_of_range), None);
    }

    #[test]
    fn declining_one_index_terminates_the_list() {
        // grant indices 0 and 2 at the top level but decline 1: the list must end at length 1,
        // and the rule must never even be asked about index 2
        let mut asked = Vec::new();
        let tree = generate(|path: &[usize]| {
            asked.push(path.to_vec());
            if path.len() > 1 || path[0] == 1 {
                None
            } else {
                Some(path[0])
            }
        })
        .expect("the rule grants the root position");
        assert_eq!(tree.length(), 1);
        assert!(!asked.contains(&vec![2]));
    }
}
