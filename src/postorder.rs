use crate::{debug, keyroots, Error, InvalidTree, Tree};
use std::collections::HashMap;

/// A [Tree] flattened into arrays indexed by postorder position.
///
/// Children are visited from left to right before their parent, so the root is always the last
/// node and the descendants of node `i` are exactly the nodes in `leftmost(i)..i`.
///
/// # Example
///
/// ```rust
/// use zhang_shasha::{Node, Postorder, Tree};
///
/// struct Dir(&'static str, Vec<Dir>);
///
/// impl<'n> Node<'n> for Dir {
///     type Label = &'static str;
///     fn label(&'n self) -> Self::Label {
///         self.0
///     }
/// }
///
/// impl<'t> Tree<'t> for Dir {
///     type Children = &'t [Dir];
///     fn children(&'t self) -> Self::Children {
///         &self.1
///     }
/// }
///
/// let root = Dir("/", vec![Dir("bin", vec![]), Dir("usr", vec![Dir("lib", vec![])])]);
/// let tree = Postorder::new(&root)?;
///
/// assert_eq!(tree.len(), 4);
/// assert_eq!(tree.label(3), &"/");
/// assert_eq!(tree.leftmost(2), 1);
/// assert_eq!(tree.parent(0), Some(3));
/// assert_eq!(tree.keyroots(), &[2, 3]);
/// # Ok::<(), zhang_shasha::Error>(())
/// ```
pub struct Postorder<'t, T: Tree<'t>> {
    nodes: Vec<&'t T>,
    labels: Vec<T::Label>,
    leftmost: Vec<usize>,
    parents: Vec<Option<usize>>,
    keyroots: Box<[usize]>,
    spines: Box<[usize]>,
}

struct Frame<'t, T: Tree<'t>> {
    node: &'t T,
    children: <T::Children as IntoIterator>::IntoIter,
    first: usize,
}

impl<'t, T: Tree<'t>> Frame<'t, T> {
    fn new(node: &'t T, first: usize) -> Self {
        Frame {
            node,
            children: node.children().into_iter(),
            first,
        }
    }
}

impl<'t, T: Tree<'t>> Postorder<'t, T> {
    /// The empty tree.
    pub fn empty() -> Self {
        Postorder {
            nodes: Vec::new(),
            labels: Vec::new(),
            leftmost: Vec::new(),
            parents: Vec::new(),
            keyroots: Box::default(),
            spines: Box::default(),
        }
    }

    /// Flattens the tree rooted at `root`.
    ///
    /// Nodes are identified by address, so the same node reached twice makes the input a graph
    /// rather than a tree.
    pub fn new(root: &'t T) -> Result<Self, Error> {
        let mut this = Self::empty();

        // Whether a node is still waiting for its children to be visited.
        let mut open = HashMap::from([(root as *const T, true)]);

        // Visited children whose parent has not been numbered yet.
        let mut orphans = Vec::new();

        let mut stack = vec![Frame::new(root, 0)];
        while let Some(frame) = stack.last_mut() {
            if let Some(child) = frame.children.next() {
                match open.insert(child as *const T, true) {
                    Some(true) => return Err(InvalidTree::Cycle.into()),
                    Some(false) => return Err(InvalidTree::SharedNode.into()),
                    None => stack.push(Frame::new(child, orphans.len())),
                }
            } else {
                let (node, first) = (frame.node, frame.first);
                stack.pop();

                let i = this.nodes.len();
                let leftmost = orphans.get(first).map_or(i, |&c| this.leftmost[c]);
                for c in orphans.drain(first..) {
                    this.parents[c] = Some(i);
                }

                this.nodes.push(node);
                this.labels.push(node.label());
                this.leftmost.push(leftmost);
                this.parents.push(None);

                open.insert(node as *const T, false);
                orphans.push(i);
            }
        }

        (this.keyroots, this.spines) = keyroots(&this.leftmost);
        debug!(nodes = this.len(), keyroots = this.keyroots.len(), "linearized tree");

        Ok(this)
    }

    /// The number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether this is the empty tree.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The position of the root, unless the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    /// The `i`-th node.
    #[inline]
    pub fn node(&self, i: usize) -> &'t T {
        self.nodes[i]
    }

    /// The label of the `i`-th node.
    #[inline]
    pub fn label(&self, i: usize) -> &T::Label {
        &self.labels[i]
    }

    /// Every label, in postorder.
    #[inline]
    pub fn labels(&self) -> &[T::Label] {
        &self.labels
    }

    /// The position of the leftmost leaf that descends from the `i`-th node.
    ///
    /// This is `i` itself if the node is a leaf.
    #[inline]
    pub fn leftmost(&self, i: usize) -> usize {
        self.leftmost[i]
    }

    /// The position of the parent of the `i`-th node, unless it is the root.
    #[inline]
    pub fn parent(&self, i: usize) -> Option<usize> {
        self.parents[i]
    }

    /// The positions of the keyroots in ascending order.
    ///
    /// A keyroot is either the root or a node that has a left sibling.
    #[inline]
    pub fn keyroots(&self) -> &[usize] {
        &self.keyroots
    }

    /// The index into [keyroots][Postorder::keyroots] of the keyroot that shares the leftmost leaf
    /// of the `i`-th node.
    #[inline]
    pub(crate) fn spine(&self, i: usize) -> usize {
        self.spines[self.leftmost[i]]
    }
}
