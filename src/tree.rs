/// An abstraction for a labeled tree node.
pub trait Node<'n> {
    /// The type of this [Node]'s [label][Node::label].
    ///
    /// Labels are opaque to the algorithm, only the [CostModel][crate::CostModel] inspects them.
    type Label;

    /// Returns this [Node]'s _label_.
    fn label(&'n self) -> Self::Label;
}

/// An abstraction for a recursive ordered tree.
pub trait Tree<'t>: 't + Node<'t> {
    /// A type that can iterate over this [Tree]'s [children][Tree::children].
    type Children: IntoIterator<Item = &'t Self>;

    /// Returns this [Tree]'s immediate children, from left to right.
    fn children(&'t self) -> Self::Children;
}


#[cfg(test)]
pub(crate) use tests::{tree, MockTree, Size};
