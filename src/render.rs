//! Diagnostic textual rendering of a tree to a caller-provided sink.
//!
//! This is the crate's only serialization surface: a depth-first dump in which every payload
//! becomes one caller-formatted line, optionally indented once per nesting level, with optional
//! opening/closing bracket text emitted on every descent and ascent. The sink is any
//! [`core::fmt::Write`]; under the `std` feature, [`render_io`] adapts a [`std::io::Write`]
//! sink instead. Sink lifecycle management belongs to the caller — the renderer only writes.
//!
//! The renderer is itself a [`Visitor`] composition over [`traverse`], like every other derived
//! operation in the crate.
//!
//! [`render_io`]: fn.render_io.html " "
//! [`Visitor`]: ../traversal/trait.Visitor.html " "
//! [`traverse`]: ../traversal/fn.traverse.html " "

use crate::{Flow, Node, Visitor};
use core::fmt::{self, Write};

/// The optional decoration texts of a rendering.
///
/// A `None` for any of the three simply omits that decoration, like the all-`None` [`default`].
///
/// [`default`]: #impl-Default-for-RenderStyle%3C's%3E " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderStyle<'s> {
    /// Text emitted once per nesting level before each payload line.
    pub indent: Option<&'s str>,
    /// Text emitted on every descent into a child list.
    pub opening: Option<&'s str>,
    /// Text emitted on every ascent out of a child list.
    pub closing: Option<&'s str>,
}

impl<'s> RenderStyle<'s> {
    /// A style which indents each level with the specified text and draws no brackets.
    #[inline]
    pub const fn indented(indent: &'s str) -> Self {
        Self {
            indent: Some(indent),
            opening: None,
            closing: None,
        }
    }
    /// A style which draws the specified bracket texts around every child list and does not
    /// indent.
    #[inline]
    pub const fn bracketed(opening: &'s str, closing: &'s str) -> Self {
        Self {
            indent: None,
            opening: Some(opening),
            closing: Some(closing),
        }
    }
}

struct Renderer<'o, W, F> {
    out: &'o mut W,
    node_fmt: F,
    style: RenderStyle<'o>,
    level: usize,
    failed: bool,
}
impl<W: Write, F> Renderer<'_, W, F> {
    fn put(&mut self, text: Option<&str>) -> Flow {
        match text.map_or(Ok(()), |text| self.out.write_str(text)) {
            Ok(()) => Flow::Continue,
            Err(fmt::Error) => {
                self.failed = true;
                Flow::Abort
            }
        }
    }
}
impl<'n, T, W, F> Visitor<'n, T> for Renderer<'_, W, F>
where
    W: Write,
    F: FnMut(&mut W, &T) -> fmt::Result,
{
    fn pre_visit(&mut self, node: &'n Node<T>) -> Flow {
        if let Some(indent) = self.style.indent {
            for _ in 0..self.level {
                if self.put(Some(indent)) == Flow::Abort {
                    return Flow::Abort;
                }
            }
        }
        if (self.node_fmt)(self.out, node.payload()).is_err() {
            self.failed = true;
            return Flow::Abort;
        }
        Flow::Continue
    }
    fn descend(&mut self) -> Flow {
        self.level += 1;
        self.put(self.style.opening)
    }
    fn ascend(&mut self) -> Flow {
        self.level -= 1;
        self.put(self.style.closing)
    }
}

/// Renders the tree headed by `root` to the specified sink, one caller-formatted payload line
/// per node, decorated according to the style.
///
/// The formatting function receives the sink and each payload in the pre-order of the
/// traversal engine; it is expected to terminate its own output lines. A sink failure aborts
/// the walk at the first failed write.
///
/// # Errors
/// Returns the sink's error, which on a plain [`core::fmt::Write`] carries no detail. Use
/// [`render_io`] to retain a real [`std::io::Error`].
///
/// # Example
/// ```rust
/// use core::fmt::Write;
/// use listree::{render, Node, RenderStyle};
///
/// let mut tree = Node::new("spring");
/// tree.prepend_child(Node::new("river")).unwrap();
/// tree.append(Node::new("mountain")).unwrap();
///
/// let mut dump = String::new();
/// render(&tree, RenderStyle::indented("  "), |out, payload| {
///     writeln!(out, "{payload}")
/// }, &mut dump)
/// .unwrap();
/// assert_eq!(dump, "spring\n  river\nmountain\n");
/// ```
///
/// [`render_io`]: fn.render_io.html " "
pub fn render<T, W, F>(
    root: &Node<T>,
    style: RenderStyle<'_>,
    node_fmt: F,
    out: &mut W,
) -> fmt::Result
where
    W: Write,
    F: FnMut(&mut W, &T) -> fmt::Result,
{
    let mut renderer = Renderer {
        out,
        node_fmt,
        style,
        level: 0,
        failed: false,
    };
    root.traverse(&mut renderer);
    if renderer.failed {
        Err(fmt::Error)
    } else {
        Ok(())
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
mod io_front_end {
    use super::{render, Node, RenderStyle};
    use core::fmt;
    use std::io;

    /// Presents an I/O sink as a formatting sink, remembering the first real error.
    struct IoBridge<'w, W: io::Write> {
        inner: &'w mut W,
        error: Option<io::Error>,
    }
    impl<W: io::Write> fmt::Write for IoBridge<'_, W> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            self.inner.write_all(s.as_bytes()).map_err(|error| {
                self.error = Some(error);
                fmt::Error
            })
        }
    }

    /// [`render`], but to a [`std::io::Write`] sink — the formatting function receives a
    /// [`core::fmt::Write`] view of it.
    ///
    /// # Errors
    /// Returns the sink's first I/O error; a failure raised by the formatting function itself
    /// surfaces as [`io::ErrorKind::Other`].
    ///
    /// [`render`]: fn.render.html " "
    pub fn render_io<T, W, F>(
        root: &Node<T>,
        style: RenderStyle<'_>,
        mut node_fmt: F,
        out: &mut W,
    ) -> io::Result<()>
    where
        W: io::Write,
        F: FnMut(&mut dyn fmt::Write, &T) -> fmt::Result,
    {
        let mut bridge = IoBridge {
            inner: out,
            error: None,
        };
        let outcome = render(
            root,
            style,
            |out: &mut IoBridge<'_, W>, payload| node_fmt(out, payload),
            &mut bridge,
        );
        match outcome {
            Ok(()) => Ok(()),
            Err(fmt::Error) => Err(bridge
                .error
                .unwrap_or_else(|| io::Error::other("node formatting failed"))),
        }
    }
}
#[cfg(feature = "std")]
pub use io_front_end::render_io;
