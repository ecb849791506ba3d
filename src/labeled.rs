use crate::{Node, Tree};

/// A ready-made [Tree] whose nodes carry a label of type `L`.
///
/// # Example
///
/// ```rust
/// use zhang_shasha::{distance, Labeled, Unit};
///
/// let a = Labeled::new("f").with_children([
///     Labeled::new("d").with_children([
///         Labeled::new("a"),
///         Labeled::new("c").with_children([Labeled::new("b")]),
///     ]),
///     Labeled::new("e"),
/// ]);
///
/// let b = Labeled::new("f").with_children([
///     Labeled::new("c").with_children([
///         Labeled::new("d").with_children([Labeled::new("a"), Labeled::new("b")]),
///     ]),
///     Labeled::new("e"),
/// ]);
///
/// assert_eq!(distance(&a, &b, &Unit), Ok(2));
/// ```
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct Labeled<L> {
    /// The label of this node.
    pub label: L,
    /// The children of this node, from left to right.
    pub children: Vec<Labeled<L>>,
}

impl<L> Labeled<L> {
    /// A leaf labeled `label`.
    pub fn new(label: L) -> Self {
        Labeled {
            label,
            children: Vec::new(),
        }
    }

    /// Appends `children` after the existing children of this node.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }
}

impl<'n, L: 'n> Node<'n> for Labeled<L> {
    type Label = &'n L;
    fn label(&'n self) -> Self::Label {
        &self.label
    }
}

impl<'t, L: 't> Tree<'t> for Labeled<L> {
    type Children = &'t [Self];
    fn children(&'t self) -> Self::Children {
        &self.children
    }
}
