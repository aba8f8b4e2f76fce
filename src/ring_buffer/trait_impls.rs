use core::fmt;
use core::marker::PhantomData;
#[cfg(feature = "std")]
use std::io;

use super::{Iter, RingBuffer};
use crate::behavior::Behavior;
use crate::storage::Storage;

impl<S, B> Clone for RingBuffer<S, B>
    where S: Storage + Clone,
          B: Behavior
{
    fn clone(&self) -> Self {
        RingBuffer {
            xs: self.xs.clone(),
            capacity: self.capacity,
            head: self.head,
            tail: self.tail,
            phantom: PhantomData,
        }
    }
}

/// Buffers compare equal when they hold the same bytes in the same order,
/// whatever their storage, capacity or cursor positions.
impl<S, B, T, C> PartialEq<RingBuffer<T, C>> for RingBuffer<S, B>
    where S: Storage,
          B: Behavior,
          T: Storage,
          C: Behavior
{
    fn eq(&self, other: &RingBuffer<T, C>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let (sa, sb) = self.as_slices();
        let (oa, ob) = other.as_slices();
        if sa.len() == oa.len() {
            sa == oa && sb == ob
        } else if sa.len() < oa.len() {
            // Always divisible in three sections, for example:
            // self:  [a b c|d e f]
            // other: [0 1 2 3|4 5]
            // front = 3, mid = 1,
            // [a b c] == [0 1 2] && [d] == [3] && [e f] == [4 5]
            let front = sa.len();
            let mid = oa.len() - front;

            let (oa_front, oa_mid) = oa.split_at(front);
            let (sb_mid, sb_back) = sb.split_at(mid);
            sa == oa_front && sb_mid == oa_mid && sb_back == ob
        } else {
            let front = oa.len();
            let mid = sa.len() - front;

            let (sa_front, sa_mid) = sa.split_at(front);
            let (ob_mid, ob_back) = ob.split_at(mid);
            sa_front == oa && sa_mid == ob_mid && sb == ob_back
        }
    }
}

impl<S: Storage, B: Behavior> Eq for RingBuffer<S, B> {}

impl<'a, S: Storage, B: Behavior> IntoIterator for &'a RingBuffer<S, B> {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<S: Storage, B: Behavior> fmt::Debug for RingBuffer<S, B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// Drains up to `buf.len()` bytes. An empty buffer reads `Ok(0)`; this never
/// blocks.
#[cfg(feature = "std")]
impl<S: Storage, B: Behavior> io::Read for RingBuffer<S, B> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(self.read_into(buf))
    }
}

/// Writes with the overflow policy of `B`. Under `Saturating` a short count
/// means the buffer filled up, and a full buffer accepts `Ok(0)` bytes.
#[cfg(feature = "std")]
impl<S: Storage, B: Behavior> io::Write for RingBuffer<S, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = RingBuffer::write(self, buf, B::ALLOW_COVER);
        // Covering keeps only the tail of `buf`, but all of it was consumed.
        Ok(if B::ALLOW_COVER { buf.len() } else { written })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
