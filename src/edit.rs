/// A single operation of an edit script.
///
/// Nodes are identified by their postorder position, see [Postorder][crate::Postorder]. The
/// left-hand side tree is the one being edited, the right-hand side tree is the target.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Edit {
    /// Remove the node of the left-hand side, its children take its place in its parent.
    Delete(usize),

    /// Map the node of the left-hand side onto the node of the right-hand side.
    ///
    /// Emitted for every node that survives the edit, even if its label is unchanged.
    Relabel(usize, usize),

    /// Insert the node of the right-hand side.
    ///
    /// Its parent is its nearest ancestor in the right-hand side that is already present. Among
    /// that parent's children, it takes the place of the consecutive run of those that descend
    /// from it in the right-hand side, adopting them. If there are none, it is placed before the
    /// first child whose position in the right-hand side is at least the position of its own
    /// leftmost leaf, or last if there is no such child.
    Insert(usize),
}
