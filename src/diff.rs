use crate::{cheapest, total, CostModel, Edit, Error, Postorder, Step, Tree, ZhangShasha};
use itertools::Itertools;
use pathfinding::matrix::Matrix;

/// The position of an [Edit] in a script that can be replayed front to back.
fn replay_order(edit: &Edit) -> (u8, usize) {
    match *edit {
        Edit::Delete(i) => (0, i),
        Edit::Relabel(i, _) => (1, i),
        Edit::Insert(j) => (2, j),
    }
}

impl<'a, 't, T: Tree<'t>, C: CostModel<T::Label>> ZhangShasha<'a, 't, T, C> {
    /// Computes the edit distance along with the lowest cost sequence of [Edit]s.
    pub fn diff(self) -> Result<(Box<[Edit]>, C::Weight), Error> {
        self.diff_or_cancel(|| false)
    }

    /// Like [diff][ZhangShasha::diff], but polls `cancelled` like
    /// [distance_or_cancel][ZhangShasha::distance_or_cancel] does.
    pub fn diff_or_cancel(
        mut self,
        cancelled: impl FnMut() -> bool,
    ) -> Result<(Box<[Edit]>, C::Weight), Error> {
        let (Some(i), Some(j)) = (self.a.root(), self.b.root()) else {
            let deletions = (0..self.a.len()).map(Edit::Delete);
            let insertions = (0..self.b.len()).map(Edit::Insert);
            let cost = total(&self.deletions) + total(&self.insertions);
            return Ok((deletions.chain(insertions).collect(), cost));
        };

        let forests = self.fill(true, cancelled)?;
        let edits = self.backtrack(&forests, i, j)?;
        Ok((edits, self.distances[(i, j)]))
    }

    /// Walks back from the subtrees rooted at `i` and `j` through the forest distance tables.
    fn backtrack(
        &self,
        forests: &[Matrix<C::Weight>],
        i: usize,
        j: usize,
    ) -> Result<Box<[Edit]>, Error> {
        let (a, b) = (self.a, self.b);
        let mut edits = Vec::with_capacity(a.len() + b.len());
        let mut subtrees = vec![(i, j)];

        while let Some((i, j)) = subtrees.pop() {
            let (l1, l2) = (a.leftmost(i), b.leftmost(j));
            let fd = &forests[a.spine(i) * b.keyroots().len() + b.spine(j)];
            let (mut r, mut c) = (i - l1 + 1, j - l2 + 1);

            while let Some((step, _)) = cheapest(self.candidates(fd, l1, l2, r, c)?) {
                match step {
                    Step::Delete => {
                        edits.push(Edit::Delete(l1 + r - 1));
                        r -= 1;
                    }

                    Step::Insert => {
                        edits.push(Edit::Insert(l2 + c - 1));
                        c -= 1;
                    }

                    Step::Relabel => {
                        edits.push(Edit::Relabel(l1 + r - 1, l2 + c - 1));
                        r -= 1;
                        c -= 1;
                    }

                    Step::Subtree => {
                        let (x, y) = (l1 + r - 1, l2 + c - 1);
                        subtrees.push((x, y));
                        r = a.leftmost(x) - l1;
                        c = b.leftmost(y) - l2;
                    }
                }
            }
        }

        Ok(edits.into_iter().sorted_unstable_by_key(replay_order).collect())
    }
}

/// Finds the tree edit distance between two [Tree]s.
///
/// This is the lowest total cost, according to `model`, of a sequence of node insertions,
/// deletions and relabelings that transforms `a` into `b`.
pub fn distance<'t, T, C>(a: &'t T, b: &'t T, model: &C) -> Result<C::Weight, Error>
where
    T: Tree<'t>,
    C: CostModel<T::Label>,
{
    let (a, b) = (Postorder::new(a)?, Postorder::new(b)?);
    ZhangShasha::new(&a, &b, model)?.distance()
}

/// Finds the lowest cost sequence of [Edit]s that transforms one [Tree] into the other.
///
/// The sequence of [Edit]s is understood to apply to the left-hand side so it becomes the
/// right-hand side. Nodes are identified by their position in [Postorder], and edits are sorted so
/// they can be applied in order: first every deletion, then every relabeling, and finally every
/// insertion, children before parents.
pub fn diff<'t, T, C>(a: &'t T, b: &'t T, model: &C) -> Result<(Box<[Edit]>, C::Weight), Error>
where
    T: Tree<'t>,
    C: CostModel<T::Label>,
{
    let (a, b) = (Postorder::new(a)?, Postorder::new(b)?);
    ZhangShasha::new(&a, &b, model)?.diff()
}
