//! Overflow policies for `RingBuffer`.
//!
//! Inherent methods such as `write` take the policy as an explicit argument.
//! The policy attached to the type is what the trait impls (`io::Write`) use,
//! since they have no way to receive one.

/// Tagging trait for providing overflow behaviors to `RingBuffer`.
pub trait Behavior {
    /// Whether writes past the free space cover the oldest buffered bytes.
    const ALLOW_COVER: bool;
}

/// Behavior for `RingBuffer` that specifies covering write semantics.
///
/// Writing more bytes than a buffer **has room for** **overwrites** the
/// oldest buffered bytes, so the buffer always ends up holding the most
/// recent `capacity()` bytes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Wrapping;
impl Behavior for Wrapping {
    const ALLOW_COVER: bool = true;
}

/// Behavior for `RingBuffer` that specifies saturating write semantics.
///
/// Writing more bytes than a buffer **has room for** stores what fits and
/// **drops the rest**, leaving the buffered bytes untouched.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Saturating;
impl Behavior for Saturating {
    const ALLOW_COVER: bool = false;
}
