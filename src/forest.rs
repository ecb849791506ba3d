use crate::{debug, trace, CostModel, Edit, Error, Postorder, Tree};
use arrayvec::ArrayVec;
use pathfinding::{matrix::Matrix, num_traits::Zero};

/// The operation that leads into a cell of a forest distance table.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Step {
    Delete,
    Insert,
    Relabel,
    Subtree,
}

/// Picks the cheapest candidate, the earliest wins ties.
#[inline]
pub(crate) fn cheapest<W>(candidates: ArrayVec<(Step, W), 3>) -> Option<(Step, W)>
where
    W: Copy + PartialOrd,
{
    candidates
        .into_iter()
        .reduce(|best, next| if next.1 < best.1 { next } else { best })
}

#[inline]
pub(crate) fn total<W: Zero + Copy>(costs: &[W]) -> W {
    costs.iter().fold(W::zero(), |sum, &c| sum + c)
}

#[inline]
fn checked<W: Zero + PartialOrd>(cost: W, edit: Edit) -> Result<W, Error> {
    if cost >= W::zero() {
        Ok(cost)
    } else {
        Err(Error::InvalidCost(edit))
    }
}

/// The Zhang-Shasha tree edit distance algorithm between two [Postorder] trees.
///
/// For every pair of keyroots, the distance between every pair of prefixes of their subtrees is
/// computed by dynamic programming, reusing the distances between whole subtrees computed for
/// earlier pairs of keyroots. This takes `O(n₁·n₂)` space and
/// `O(n₁·n₂·min(depth₁, leaves₁)·min(depth₂, leaves₂))` time.
///
/// # Example
///
/// ```rust
/// use zhang_shasha::{Postorder, Unit, ZhangShasha};
/// # use zhang_shasha::{Node, Tree};
/// #
/// # struct T(char, Vec<T>);
/// #
/// # impl<'n> Node<'n> for T {
/// #     type Label = char;
/// #     fn label(&'n self) -> char {
/// #         self.0
/// #     }
/// # }
/// #
/// # impl<'t> Tree<'t> for T {
/// #     type Children = &'t [T];
/// #     fn children(&'t self) -> Self::Children {
/// #         &self.1
/// #     }
/// # }
///
/// let a = T('a', vec![T('b', vec![]), T('c', vec![])]);
/// let a = Postorder::new(&a)?;
/// let b = T('a', vec![T('c', vec![])]);
/// let b = Postorder::new(&b)?;
///
/// let mut polls = 0;
/// let distance = ZhangShasha::new(&a, &b, &Unit)?.distance_or_cancel(|| {
///     polls += 1;
///     false
/// })?;
///
/// assert_eq!(distance, 1);
/// assert_eq!(polls, a.keyroots().len() * b.keyroots().len());
/// # Ok::<(), zhang_shasha::Error>(())
/// ```
pub struct ZhangShasha<'a, 't, T: Tree<'t>, C: CostModel<T::Label>> {
    pub(crate) a: &'a Postorder<'t, T>,
    pub(crate) b: &'a Postorder<'t, T>,
    model: &'a C,
    pub(crate) deletions: Box<[C::Weight]>,
    pub(crate) insertions: Box<[C::Weight]>,
    pub(crate) distances: Matrix<C::Weight>,
}

impl<'a, 't, T: Tree<'t>, C: CostModel<T::Label>> ZhangShasha<'a, 't, T, C> {
    /// Prepares to compute the edit distance from `a` to `b` under `model`.
    ///
    /// The cost of deleting every node of `a` and inserting every node of `b` is validated here.
    pub fn new(
        a: &'a Postorder<'t, T>,
        b: &'a Postorder<'t, T>,
        model: &'a C,
    ) -> Result<Self, Error> {
        let deletions = a
            .labels()
            .iter()
            .enumerate()
            .map(|(i, l)| checked(model.delete(l), Edit::Delete(i)))
            .collect::<Result<_, _>>()?;

        let insertions = b
            .labels()
            .iter()
            .enumerate()
            .map(|(j, l)| checked(model.insert(l), Edit::Insert(j)))
            .collect::<Result<_, _>>()?;

        // A matrix with rows must also have columns.
        let (rows, columns) = if a.is_empty() || b.is_empty() {
            (0, 0)
        } else {
            (a.len(), b.len())
        };

        Ok(ZhangShasha {
            a,
            b,
            model,
            deletions,
            insertions,
            distances: Matrix::new(rows, columns, C::Weight::zero()),
        })
    }

    /// Computes the edit distance.
    pub fn distance(self) -> Result<C::Weight, Error> {
        self.distance_or_cancel(|| false)
    }

    /// Computes the edit distance, unless `cancelled` returns `true`.
    ///
    /// `cancelled` is polled before each pair of keyroots is processed, in which case
    /// [Error::Cancelled] is returned.
    pub fn distance_or_cancel(
        mut self,
        cancelled: impl FnMut() -> bool,
    ) -> Result<C::Weight, Error> {
        match (self.a.root(), self.b.root()) {
            (Some(i), Some(j)) => {
                self.fill(false, cancelled)?;
                Ok(self.distances[(i, j)])
            }

            _ => Ok(total(&self.deletions) + total(&self.insertions)),
        }
    }

    /// Fills the tree distance table, returning the forest distance table of every pair of
    /// keyroots if `retain` is set.
    pub(crate) fn fill(
        &mut self,
        retain: bool,
        mut cancelled: impl FnMut() -> bool,
    ) -> Result<Vec<Matrix<C::Weight>>, Error> {
        let (a, b) = (self.a, self.b);

        debug!(
            a = a.len(),
            b = b.len(),
            pairs = a.keyroots().len() * b.keyroots().len(),
            "computing tree edit distance"
        );

        let mut forests = Vec::new();
        for &k1 in a.keyroots() {
            for &k2 in b.keyroots() {
                if cancelled() {
                    debug!(k1, k2, "cancelled");
                    return Err(Error::Cancelled);
                }

                let fd = self.forest(k1, k2)?;
                if retain {
                    forests.push(fd);
                }
            }
        }

        Ok(forests)
    }

    /// Computes the distance between every pair of prefixes of the subtrees rooted at `k1` and
    /// `k2`, recording the distance between those prefixes that are whole subtrees.
    fn forest(&mut self, k1: usize, k2: usize) -> Result<Matrix<C::Weight>, Error> {
        let (a, b) = (self.a, self.b);
        let (l1, l2) = (a.leftmost(k1), b.leftmost(k2));
        let mut fd = Matrix::new(k1 - l1 + 2, k2 - l2 + 2, C::Weight::zero());

        trace!(k1, k2, rows = fd.rows, columns = fd.columns, "forest distance");

        for r in 0..fd.rows {
            for c in 0..fd.columns {
                let Some((_, cost)) = cheapest(self.candidates(&fd, l1, l2, r, c)?) else {
                    continue;
                };

                fd[(r, c)] = cost;

                if r > 0 && c > 0 && a.leftmost(l1 + r - 1) == l1 && b.leftmost(l2 + c - 1) == l2 {
                    self.distances[(l1 + r - 1, l2 + c - 1)] = cost;
                }
            }
        }

        Ok(fd)
    }

    /// The ways to reach cell `(r, c)` of the forest distance table `fd`, whose first row and
    /// column stand for the empty forest and whose other rows and columns start at `l1` and `l2`.
    ///
    /// Candidates are listed in order of preference.
    pub(crate) fn candidates(
        &self,
        fd: &Matrix<C::Weight>,
        l1: usize,
        l2: usize,
        r: usize,
        c: usize,
    ) -> Result<ArrayVec<(Step, C::Weight), 3>, Error> {
        let mut candidates = ArrayVec::new();

        if r > 0 {
            let cost = self.deletions[l1 + r - 1];
            candidates.push((Step::Delete, fd[(r - 1, c)] + cost));
        }

        if c > 0 {
            let cost = self.insertions[l2 + c - 1];
            candidates.push((Step::Insert, fd[(r, c - 1)] + cost));
        }

        if r > 0 && c > 0 {
            let (i, j) = (l1 + r - 1, l2 + c - 1);
            let (li, lj) = (self.a.leftmost(i), self.b.leftmost(j));

            if li == l1 && lj == l2 {
                let cost = self.relabel(i, j)?;
                candidates.push((Step::Relabel, fd[(r - 1, c - 1)] + cost));
            } else {
                let cost = self.distances[(i, j)];
                candidates.push((Step::Subtree, fd[(li - l1, lj - l2)] + cost));
            }
        }

        Ok(candidates)
    }

    #[inline]
    fn relabel(&self, i: usize, j: usize) -> Result<C::Weight, Error> {
        let cost = self.model.relabel(self.a.label(i), self.b.label(j));
        checked(cost, Edit::Relabel(i, j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tree, MockTree, Unit, Weighted};
    use assert_matches::assert_matches;
    use proptest::sample::select;
    use test_strategy::proptest;

    #[test]
    fn ties_prefer_the_earliest_candidate() {
        let mut candidates = ArrayVec::new();
        candidates.push((Step::Relabel, 1));
        candidates.push((Step::Insert, 1));
        candidates.push((Step::Delete, 1));
        assert_eq!(cheapest(candidates), Some((Step::Relabel, 1)));

        let mut candidates = ArrayVec::new();
        candidates.push((Step::Delete, 2));
        candidates.push((Step::Insert, 1));
        candidates.push((Step::Subtree, 1));
        assert_eq!(cheapest(candidates), Some((Step::Insert, 1)));

        assert_eq!(cheapest::<u8>(ArrayVec::new()), None);
    }

    #[test]
    fn the_empty_forest_has_no_candidates() {
        let t = tree!('a');
        let p = Postorder::new(&t).unwrap();
        let zs = ZhangShasha::new(&p, &p, &Unit).unwrap();
        let fd = Matrix::new(2, 2, 0);
        assert!(zs.candidates(&fd, 0, 0, 0, 0).unwrap().is_empty());
    }

    #[test]
    fn subtree_distances_are_recorded() {
        // a(b, c) and a(c)
        let x = tree!('a', [tree!('b'), tree!('c')]);
        let y = tree!('a', [tree!('c')]);
        let (p, q) = (Postorder::new(&x).unwrap(), Postorder::new(&y).unwrap());

        let mut zs = ZhangShasha::new(&p, &q, &Unit).unwrap();
        zs.fill(false, || false).unwrap();

        assert_eq!(zs.distances[(0, 0)], 1); // b -> c
        assert_eq!(zs.distances[(1, 0)], 0); // c -> c
        assert_eq!(zs.distances[(2, 0)], 2); // a(b, c) -> c
        assert_eq!(zs.distances[(2, 1)], 1); // a(b, c) -> a(c)
    }

    #[test]
    fn forests_are_retained_per_pair_of_keyroots() {
        let x = tree!('a', [tree!('b'), tree!('c')]);
        let y = tree!('a', [tree!('b', [tree!('d')]), tree!('c')]);
        let (p, q) = (Postorder::new(&x).unwrap(), Postorder::new(&y).unwrap());

        let mut zs = ZhangShasha::new(&p, &q, &Unit).unwrap();
        let forests = zs.fill(true, || false).unwrap();
        assert_eq!(forests.len(), p.keyroots().len() * q.keyroots().len());

        let last = forests.last().unwrap();
        assert_eq!((last.rows, last.columns), (p.len() + 1, q.len() + 1));
        assert_eq!(last[(p.len(), q.len())], 1);
    }

    #[proptest]
    fn cancellation_is_polled_once_per_pair_of_keyroots(a: MockTree<u8>, b: MockTree<u8>) {
        let (p, q) = (Postorder::new(&a).unwrap(), Postorder::new(&b).unwrap());

        let mut polls = 0;
        ZhangShasha::new(&p, &q, &Unit)
            .unwrap()
            .distance_or_cancel(|| {
                polls += 1;
                false
            })
            .unwrap();

        assert_eq!(polls, p.keyroots().len() * q.keyroots().len());
    }

    #[proptest]
    fn cancellation_aborts_the_computation(
        a: MockTree<u8>,
        b: MockTree<u8>,
        #[strategy(0..#a.count() * #b.count())] after: usize,
    ) {
        let (p, q) = (Postorder::new(&a).unwrap(), Postorder::new(&b).unwrap());
        let pairs = p.keyroots().len() * q.keyroots().len();

        let mut polls = 0;
        let result = ZhangShasha::new(&p, &q, &Unit).unwrap().distance_or_cancel(|| {
            polls += 1;
            polls > after
        });

        if after < pairs {
            assert_matches!(result, Err(Error::Cancelled));
            assert_eq!(polls, after + 1);
        } else {
            assert_matches!(result, Ok(_));
        }
    }

    #[proptest]
    fn negative_deletions_are_rejected(a: MockTree<u8>, b: MockTree<u8>) {
        let (p, q) = (Postorder::new(&a).unwrap(), Postorder::new(&b).unwrap());
        let model = Weighted::new(1i64, -1, 1);
        assert_matches!(
            ZhangShasha::new(&p, &q, &model).err(),
            Some(Error::InvalidCost(Edit::Delete(0)))
        );
    }

    #[proptest]
    fn negative_insertions_are_rejected(a: MockTree<u8>, b: MockTree<u8>) {
        let (p, q) = (Postorder::new(&a).unwrap(), Postorder::new(&b).unwrap());
        let model = Weighted::new(-1i64, 1, 1);
        assert_matches!(
            ZhangShasha::new(&p, &q, &model).err(),
            Some(Error::InvalidCost(Edit::Insert(0)))
        );
    }

    #[proptest]
    fn undefined_relabelings_are_rejected(#[strategy(select(vec![-1.0, f64::NAN]))] cost: f64) {
        let (x, y) = (tree!('x'), tree!('y'));
        let (p, q) = (Postorder::new(&x).unwrap(), Postorder::new(&y).unwrap());
        let model = Weighted::new(1.0, 1.0, cost);

        assert_matches!(
            ZhangShasha::new(&p, &q, &model).unwrap().distance(),
            Err(Error::InvalidCost(Edit::Relabel(0, 0)))
        );
    }

    #[test]
    fn either_tree_may_be_empty() {
        let t = tree!('a', [tree!('b'), tree!('c')]);
        let p = Postorder::new(&t).unwrap();
        let e = Postorder::<MockTree<char>>::empty();

        assert_eq!(ZhangShasha::new(&p, &e, &Unit).unwrap().distance(), Ok(3));
        assert_eq!(ZhangShasha::new(&e, &p, &Unit).unwrap().distance(), Ok(3));
        assert_eq!(ZhangShasha::new(&e, &e, &Unit).unwrap().distance(), Ok(0));

        let model = Weighted::new(2, 5, 1);
        assert_eq!(ZhangShasha::new(&p, &e, &model).unwrap().distance(), Ok(15));
        assert_eq!(ZhangShasha::new(&e, &p, &model).unwrap().distance(), Ok(6));
    }

    #[test]
    fn floating_point_costs_are_supported() {
        let (x, y) = (tree!('x'), tree!('x', [tree!('y')]));
        let (p, q) = (Postorder::new(&x).unwrap(), Postorder::new(&y).unwrap());
        let model = Weighted::new(0.25, 4.0, 0.5);

        assert_eq!(ZhangShasha::new(&p, &q, &model).unwrap().distance(), Ok(0.25));
    }
}
