//! Index arithmetic for an implicit, level-order binary tree stored as a flat array.
//!
//! Node `i` has parent `(i - 1) / 2`, left child `2i + 1` and right child `2i + 2`.
//! A child index `>= N` denotes "no child". These functions are pure and total for
//! all valid `usize` inputs; they never allocate and never panic.

/// Returns the level (depth from the root, root is level 0) of node `i`.
///
/// Equivalent to the position of the highest set bit of `i + 1`.
#[inline]
pub fn level(i: usize) -> u32 {
    (i + 1).ilog2()
}

/// Returns the index of the left child of node `i`.
#[inline]
pub fn left_child(i: usize) -> usize {
    2 * i + 1
}

/// Returns the index of the right child of node `i`.
#[inline]
pub fn right_child(i: usize) -> usize {
    2 * i + 2
}

/// Returns the index of the parent of node `i`, or `None` for the root (`i == 0`).
#[inline]
pub fn parent(i: usize) -> Option<usize> {
    if i == 0 {
        None
    } else {
        Some((i - 1) / 2)
    }
}

/// Returns the number of nodes in `[0, total)` that lie in the subtree rooted at `n`,
/// within an implicit, level-order binary tree of `total` nodes.
///
/// Walks the leftmost spine of the subtree, counting how many of the subtree's nodes
/// at each depth actually fall inside `[0, total)`.
pub fn subtree_size(n: usize, total: usize) -> usize {
    if n >= total {
        return 0;
    }

    let mut size = 0usize;
    let mut width = 1usize;
    let mut first_at_depth = n;

    while first_at_depth < total {
        size += width.min(total - first_at_depth);
        first_at_depth = left_child(first_at_depth);
        width *= 2;
    }

    size
}
