//! Zero-padding length for block alignment of MAC input

/// Number of zero bytes needed to bring `length` up to the next multiple of
/// `block_size`.
///
/// Returns 0 when `length` is already aligned (including 0) and for a
/// `block_size` of 0.
pub const fn align(length: usize, block_size: usize) -> usize {
    if block_size == 0 {
        return 0;
    }
    (block_size - length % block_size) % block_size
}
