//! Byte blocks a `RingBuffer` can own.

/// Trait for fixed size byte blocks.
///
/// The length of the block is the capacity of the buffer built on top of it,
/// so it must stay the same for the lifetime of the value.
pub trait Storage {
    /// Converts the block to an immutable slice
    fn as_slice(&self) -> &[u8];

    /// Converts the block to a mutable slice
    fn as_mut_slice(&mut self) -> &mut [u8];

    /// Returns the number of bytes the block can hold
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.as_slice().len()
    }
}

impl<const N: usize> Storage for [u8; N] {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }

    #[inline(always)]
    fn capacity(&self) -> usize {
        N
    }
}

/// An exclusive borrow, e.g. of a region that a DMA engine also targets.
impl<'a> Storage for &'a mut [u8] {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}

#[cfg(feature = "std")]
impl Storage for Box<[u8]> {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}

#[cfg(feature = "std")]
impl Storage for Vec<u8> {
    #[inline(always)]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}

#[cfg(feature = "use_generic_array")]
mod generic_impl {
    use super::Storage;
    use generic_array::{ArrayLength, GenericArray};

    impl<N> Storage for GenericArray<u8, N>
    where
        N: ArrayLength<u8>,
    {
        #[inline(always)]
        fn as_slice(&self) -> &[u8] {
            GenericArray::as_slice(self)
        }

        #[inline(always)]
        fn as_mut_slice(&mut self) -> &mut [u8] {
            GenericArray::as_mut_slice(self)
        }

        #[inline(always)]
        fn capacity(&self) -> usize {
            N::to_usize()
        }
    }
}
