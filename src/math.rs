//! Arithmetic mapping between sizes, buddy levels, and tree indices.
//!
//! A *level* is an absolute depth in the buddy tree: level `MAX_LEVELS - 1`
//! holds the 16-byte leaves, and each level above doubles the block size, so
//! a larger level number always means a smaller block. Trees shallower than
//! `MAX_LEVELS` simply leave the uppermost levels unused.

use crate::polyfill::UsizeExt;
use crate::{MAX_LEVELS, MIN_SIZE, MIN_SIZE_LOG};

/// Returns the smallest `k` such that `2^k >= n`.
pub(crate) fn log2_ceil(n: usize) -> usize {
    assert!(n >= 1);

    let floor = n.log2() as usize;
    if n.is_power_of_two() {
        floor
    } else {
        floor + 1
    }
}

#[inline]
pub(crate) fn pow2(exp: usize) -> usize {
    1 << exp
}

/// Returns the size of the largest block that can begin `offset` bytes into
/// the buddy region, i.e. the largest power of two dividing `offset`.
///
/// Only the region base itself can host the root block, so an offset of zero
/// maps to `buddy_size`.
pub(crate) fn max_block_size_by_addr(offset: usize, buddy_size: usize) -> usize {
    if offset == 0 {
        buddy_size
    } else {
        1 << offset.trailing_zeros()
    }
}

/// Returns the number of levels required to cover `mem_size` bytes.
pub(crate) fn levels_needed(mem_size: usize) -> usize {
    log2_ceil(mem_size / MIN_SIZE) + 1
}

/// Returns the block size on `level`, in bytes.
pub(crate) fn level_to_size(level: usize) -> usize {
    pow2(MAX_LEVELS + MIN_SIZE_LOG - level - 1)
}

/// Returns the level whose blocks are the smallest that satisfy a request
/// for `size` bytes. Requests below [`MIN_SIZE`] map to the leaf level.
pub(crate) fn size_to_level(size: usize) -> usize {
    MAX_LEVELS + MIN_SIZE_LOG - log2_ceil(size.max(MIN_SIZE)) - 1
}

/// Returns the global index of the left child of the node at global index
/// `index`.
#[inline]
pub(crate) fn child_index(index: usize) -> usize {
    2 * index + 1
}
