/// Finds the keyroots of a tree given the leftmost leaf of every node in postorder.
///
/// A node is a keyroot if no node after it in postorder shares its leftmost leaf, which is the
/// case for the root and for every node that has a left sibling. Keyroots are returned in
/// ascending order, together with a table that maps every leaf to the position in that list of
/// the keyroot whose leftmost leaf it is.
pub(crate) fn keyroots(leftmost: &[usize]) -> (Box<[usize]>, Box<[usize]>) {
    let mut last = vec![0; leftmost.len()];
    for (i, &l) in leftmost.iter().enumerate() {
        last[l] = i;
    }

    let keyroots: Box<[usize]> = (0..leftmost.len())
        .filter(|&i| last[leftmost[i]] == i)
        .collect();

    let mut spines = vec![0; leftmost.len()].into_boxed_slice();
    for (k, &i) in keyroots.iter().enumerate() {
        spines[leftmost[i]] = k;
    }

    (keyroots, spines)
}
