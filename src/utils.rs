//! Cursor arithmetic for power-of-two capacities.
//!
//! Cursors live in a logical index space of `2 * capacity` positions so that
//! a full buffer and an empty one never share the same cursor pair. A
//! logical index maps onto storage by dropping its top bit.

/// Reduces a logical index to the storage slot it refers to.
#[inline]
pub fn wrap_mem(index: usize, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    index & (capacity - 1)
}

/// Reduces an unbounded cursor position into the logical index space.
#[inline]
pub fn wrap_logic(index: usize, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    index & (capacity << 1).wrapping_sub(1)
}

/// Number of bytes between the read and write cursors.
#[inline]
pub fn count(read: usize, write: usize, capacity: usize) -> usize {
    let len = wrap_logic(write.wrapping_sub(read), capacity);
    debug_assert!(len <= capacity, "cnt read={} write={} cap={}", read, write, capacity);
    len
}
