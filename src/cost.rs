use pathfinding::num_traits::Zero;

/// Supplies the cost of each elementary edit in terms of node labels.
///
/// Every cost must be non-negative, otherwise the computation fails with
/// [Error::InvalidCost][crate::Error::InvalidCost]. Whether two labels are "equal" is entirely up
/// to [relabel][CostModel::relabel], the algorithm never compares labels by itself.
///
/// # Example
///
/// ```rust
/// use zhang_shasha::CostModel;
///
/// /// Renaming is cheap, but structural changes are expensive.
/// struct Structural;
///
/// impl CostModel<&str> for Structural {
///     type Weight = f64;
///
///     fn insert(&self, _: &&str) -> f64 {
///         2.0
///     }
///
///     fn delete(&self, _: &&str) -> f64 {
///         2.0
///     }
///
///     fn relabel(&self, a: &&str, b: &&str) -> f64 {
///         if a.eq_ignore_ascii_case(b) { 0.0 } else { 0.5 }
///     }
/// }
/// ```
pub trait CostModel<L: ?Sized> {
    /// The type of a cost.
    ///
    /// [Zero::zero] is assumed to be the additive identity.
    type Weight: Zero + Copy + PartialOrd;

    /// Returns the cost of inserting a node labeled `label`.
    fn insert(&self, label: &L) -> Self::Weight;

    /// Returns the cost of deleting a node labeled `label`.
    fn delete(&self, label: &L) -> Self::Weight;

    /// Returns the cost of turning a node labeled `from` into one labeled `to`.
    fn relabel(&self, from: &L, to: &L) -> Self::Weight;
}

/// Every insertion and deletion costs 1, relabeling costs 1 unless the labels are equal.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Unit;

impl<L: PartialEq + ?Sized> CostModel<L> for Unit {
    type Weight = u64;

    #[inline]
    fn insert(&self, _: &L) -> u64 {
        1
    }

    #[inline]
    fn delete(&self, _: &L) -> u64 {
        1
    }

    #[inline]
    fn relabel(&self, from: &L, to: &L) -> u64 {
        u64::from(from != to)
    }
}

/// Constant costs per kind of edit, relabeling is free if the labels are equal.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Weighted<W> {
    /// The cost of any insertion.
    pub insert: W,
    /// The cost of any deletion.
    pub delete: W,
    /// The cost of relabeling a node with a different label.
    pub relabel: W,
}

impl<W> Weighted<W> {
    /// Charges `insert`, `delete` and `relabel` for every edit of the respective kind.
    pub fn new(insert: W, delete: W, relabel: W) -> Self {
        Weighted {
            insert,
            delete,
            relabel,
        }
    }
}

impl<L: PartialEq + ?Sized, W: Zero + Copy + PartialOrd> CostModel<L> for Weighted<W> {
    type Weight = W;

    #[inline]
    fn insert(&self, _: &L) -> W {
        self.insert
    }

    #[inline]
    fn delete(&self, _: &L) -> W {
        self.delete
    }

    #[inline]
    fn relabel(&self, from: &L, to: &L) -> W {
        if from == to {
            W::zero()
        } else {
            self.relabel
        }
    }
}
