//! Error types.

#[cfg(feature = "std")]
use std::error::Error;
use core::fmt;

/// Error value indicating a capacity the buffer cannot be built with.
///
/// Capacities must be a non-zero power of two.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct InvalidCapacity {
    /// The rejected capacity.
    pub capacity: usize,
}

impl InvalidCapacity {
    #[inline]
    pub(crate) fn check(capacity: usize) -> Result<usize, InvalidCapacity> {
        if capacity.is_power_of_two() {
            Ok(capacity)
        } else {
            tracing::debug!(capacity, "rejected ring buffer capacity");
            Err(InvalidCapacity { capacity })
        }
    }
}

#[cfg(feature = "std")]
impl Error for InvalidCapacity {}

impl fmt::Display for InvalidCapacity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "capacity must be a power of two, {} is not", self.capacity)
    }
}

impl fmt::Debug for InvalidCapacity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidCapacity: {}", self)
    }
}
