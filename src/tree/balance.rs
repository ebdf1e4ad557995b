//! Median-first insertion order
//!
//! The tree never rebalances, so balance has to come from the insertion order.
//! Given a key-sorted list, emitting the middle element before recursing into
//! each half reproduces the pre-order of a perfectly balanced tree.

/// Indices `0..len` in median-first order
///
/// Even-length ranges cut at the lower of the two middle indices.
///
/// # Examples
/// ```
/// use dict_search::tree::balanced_indices;
///
/// assert_eq!(balanced_indices(3), vec![1, 0, 2]);
/// assert_eq!(balanced_indices(4), vec![1, 0, 2, 3]);
/// ```
#[must_use]
pub fn balanced_indices(len: usize) -> Vec<usize> {
    // Half-open range [lo, hi)
    fn visit(lo: usize, hi: usize, out: &mut Vec<usize>) {
        if lo >= hi {
            return;
        }
        let mid = lo + (hi - lo - 1) / 2;
        out.push(mid);
        visit(lo, mid, out);
        visit(mid + 1, hi, out);
    }

    let mut out = Vec::with_capacity(len);
    visit(0, len, &mut out);
    out
}

/// Reorder a sorted slice so sequential insertion yields a minimal-height tree
#[must_use]
pub fn balanced_order<T: Clone>(sorted: &[T]) -> Vec<T> {
    balanced_indices(sorted.len())
        .into_iter()
        .map(|i| sorted[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_single() {
        assert!(balanced_indices(0).is_empty());
        assert_eq!(balanced_indices(1), vec![0]);
    }

    #[test]
    fn even_ranges_take_lower_middle() {
        assert_eq!(balanced_indices(2), vec![0, 1]);
        assert_eq!(balanced_indices(6), vec![2, 0, 1, 4, 3, 5]);
    }

    #[test]
    fn seven_is_perfect_preorder() {
        assert_eq!(balanced_indices(7), vec![3, 1, 0, 2, 5, 4, 6]);
    }

    #[test]
    fn three_words_median_first() {
        let order = balanced_order(&["ant", "bat", "cat"]);
        assert_eq!(order, vec!["bat", "ant", "cat"]);
    }

    #[test]
    fn every_index_emitted_once() {
        for len in 0..64 {
            let mut indices = balanced_indices(len);
            indices.sort_unstable();
            assert_eq!(indices, (0..len).collect::<Vec<_>>());
        }
    }
}
