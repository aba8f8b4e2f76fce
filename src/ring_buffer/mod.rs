use core::cmp;
use core::iter;
use core::marker::PhantomData;
use core::slice;

pub use odds::IndexRange as RangeArgument;

use crate::behavior::{Behavior, Saturating, Wrapping};
use crate::error::InvalidCapacity;
use crate::storage::Storage;
use crate::utils::count;

mod internal;
mod trait_impls;

/// `RingBuffer` is a fixed capacity circular byte buffer.
///
/// Bytes are appended at the write cursor with `write` and taken from the
/// read cursor with `read`. Either cursor can also be moved without copying
/// anything (`write_virtual`, `read_virtual`) when another agent, such as a
/// DMA engine, moves the bytes in or out of the storage block itself.
///
/// # Capacity
///
/// The capacity is the length of the storage block and must be a power of
/// two. Unlike buffers that keep one slot free to tell "full" from "empty",
/// every slot is usable: both cursors count modulo `2 * capacity()`, and the
/// buffer is full when they differ by exactly `capacity()`.
///
/// # Concurrency
///
/// Nothing here is synchronized. When one side is driven by hardware or
/// another execution context, the caller must serialize the `*_virtual`
/// calls against the other side's operations.
pub struct RingBuffer<S: Storage, B: Behavior = Wrapping> {
    xs: S,
    capacity: usize,
    /// Logical write cursor.
    head: usize,
    /// Logical read cursor.
    tail: usize,
    phantom: PhantomData<B>,
}

/// `RingBuffer` iterator over the buffered bytes, oldest first.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a> {
    inner: iter::Chain<slice::Iter<'a, u8>, slice::Iter<'a, u8>>,
}

impl<S: Storage> RingBuffer<S> {
    /// Creates an empty `RingBuffer` on top of an existing storage block.
    ///
    /// The capacity is the length of `xs`. Bytes already in `xs` are left as
    /// they are, but the buffer starts out empty.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` unless the length of `xs` is a power of two.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbytes::RingBuffer;
    ///
    /// let buf = RingBuffer::from_storage([0u8; 16]).unwrap();
    /// assert_eq!(buf.capacity(), 16);
    /// assert!(buf.is_empty());
    ///
    /// assert!(RingBuffer::from_storage([0u8; 12]).is_err());
    /// ```
    pub fn from_storage(xs: S) -> Result<Self, InvalidCapacity> {
        let capacity = InvalidCapacity::check(xs.capacity())?;
        Ok(RingBuffer {
            xs,
            capacity,
            head: 0,
            tail: 0,
            phantom: PhantomData,
        })
    }
}

#[cfg(feature = "std")]
impl RingBuffer<Box<[u8]>> {
    /// Creates an empty `RingBuffer` backed by a zeroed heap block of
    /// `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` unless `capacity` is a power of two. Zero is
    /// not a power of two.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbytes::RingBuffer;
    ///
    /// let buf = RingBuffer::new(8).unwrap();
    /// assert_eq!(buf.len(), 0);
    /// assert_eq!(buf.space(), 8);
    ///
    /// let err = RingBuffer::new(6).unwrap_err();
    /// assert_eq!(err.capacity, 6);
    /// ```
    pub fn new(capacity: usize) -> Result<Self, InvalidCapacity> {
        let capacity = InvalidCapacity::check(capacity)?;
        RingBuffer::from_storage(vec![0u8; capacity].into_boxed_slice())
    }
}

impl<S: Storage> RingBuffer<S, Saturating> {
    /// Converts into a `RingBuffer` whose trait impls cover old bytes on
    /// overflow. Contents and cursors are kept.
    pub fn wrapping(self) -> RingBuffer<S, Wrapping> {
        RingBuffer {
            xs: self.xs,
            capacity: self.capacity,
            head: self.head,
            tail: self.tail,
            phantom: PhantomData,
        }
    }
}

impl<S: Storage> RingBuffer<S, Wrapping> {
    /// Converts into a `RingBuffer` whose trait impls drop incoming bytes on
    /// overflow. Contents and cursors are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::Write;
    /// use ringbytes::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4).unwrap().saturating();
    /// assert_eq!(Write::write(&mut buf, &[1, 2, 3, 4, 5, 6]).unwrap(), 4);
    /// assert_eq!(buf.peek(0, 4), Some(vec![1, 2, 3, 4]));
    /// ```
    pub fn saturating(self) -> RingBuffer<S, Saturating> {
        RingBuffer {
            xs: self.xs,
            capacity: self.capacity,
            head: self.head,
            tail: self.tail,
            phantom: PhantomData,
        }
    }
}

impl<S: Storage, B: Behavior> RingBuffer<S, B> {
    /// Returns the capacity of the buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of buffered bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbytes::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4).unwrap();
    /// assert_eq!(buf.len(), 0);
    /// buf.write(&[1, 2], false);
    /// assert_eq!(buf.len(), 2);
    /// ```
    #[doc(alias = "size")]
    #[inline]
    pub fn len(&self) -> usize {
        count(self.tail, self.head, self.capacity)
    }

    /// Returns the number of bytes that can be written without covering.
    #[inline]
    pub fn space(&self) -> usize {
        self.capacity - self.len()
    }

    /// Returns true if the buffer contains no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns true if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbytes::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(2).unwrap();
    /// assert!(!buf.is_full());
    /// buf.write(&[1, 2], false);
    /// assert!(buf.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.tail == self.head ^ self.capacity
    }

    /// Logical write cursor, in `0..2 * capacity()`.
    #[inline]
    pub fn write_index(&self) -> usize {
        self.head
    }

    /// Logical read cursor, in `0..2 * capacity()`.
    #[inline]
    pub fn read_index(&self) -> usize {
        self.tail
    }

    /// Writes `data` at the write cursor and returns the number of bytes
    /// stored.
    ///
    /// If `data` does not fit in `space()`:
    ///
    /// - with `allow_cover == false` only the first `space()` bytes are
    ///   stored and the rest are dropped;
    /// - with `allow_cover == true` the oldest buffered bytes are discarded
    ///   to make room. When `data` is longer than `capacity()` only its last
    ///   `capacity()` bytes are stored, so the buffer ends up holding exactly
    ///   the most recent `capacity()` bytes.
    ///
    /// Covering moves the read cursor, so it must not race a consumer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbytes::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4).unwrap();
    /// assert_eq!(buf.write(&[1, 2, 3], false), 3);
    /// assert_eq!(buf.write(&[4, 5], false), 1);
    /// assert_eq!(buf.write(&[5, 6], true), 2);
    /// assert_eq!(buf.read(4), vec![3, 4, 5, 6]);
    /// ```
    pub fn write(&mut self, data: &[u8], allow_cover: bool) -> usize {
        let space = self.space();
        let mut src = data;
        let mut overflow = false;
        if src.len() > space {
            if allow_cover {
                if src.len() > self.capacity {
                    src = &src[src.len() - self.capacity..];
                }
                overflow = true;
            } else {
                src = &src[..space];
            }
        }

        let head = self.head;
        self.copy_in(head, src);

        if overflow {
            tracing::trace!(discarded = self.len() + src.len() - self.capacity,
                            dropped = data.len() - src.len(),
                            capacity = self.capacity,
                            "write covered oldest bytes");
        }
        self.advance_write(src.len());
        if overflow {
            self.cover_oldest();
        }

        src.len()
    }

    /// Moves the write cursor forward by `len` bytes that an external agent
    /// has already placed in storage. Returns whether that overflowed the
    /// free space.
    ///
    /// The storage block is not touched. On overflow `len` is clamped to
    /// `capacity()` and the read cursor is pushed forward so the buffer holds
    /// the most recent `capacity()` bytes.
    ///
    /// The caller must serialize this with whatever consumes the buffer, or
    /// the write cursor can be pushed over the read cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbytes::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(8).unwrap();
    /// {
    ///     // stand-in for a DMA transfer into the free region
    ///     let (first, _) = buf.vacant_slices_mut();
    ///     first[..3].copy_from_slice(b"abc");
    /// }
    /// assert!(!buf.write_virtual(3));
    /// assert_eq!(buf.read(3), b"abc".to_vec());
    /// ```
    pub fn write_virtual(&mut self, len: usize) -> bool {
        let overflow = len > self.space();
        let len = cmp::min(len, self.capacity);
        if overflow {
            tracing::trace!(discarded = self.len() + len - self.capacity,
                            capacity = self.capacity,
                            "virtual write covered oldest bytes");
        }
        self.advance_write(len);
        if overflow {
            self.cover_oldest();
        }
        overflow
    }

    /// Reads up to `dst.len()` bytes into `dst` and returns how many were
    /// read. Reading from an empty buffer reads nothing.
    pub fn read_into(&mut self, dst: &mut [u8]) -> usize {
        let len = cmp::min(dst.len(), self.len());
        let tail = self.tail;
        self.copy_out(tail, &mut dst[..len]);
        self.advance_read(len);
        len
    }

    /// Removes up to `len` bytes from the read cursor and returns them.
    ///
    /// Fewer bytes come back when fewer are buffered.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbytes::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4).unwrap();
    /// assert!(buf.read(2).is_empty());
    /// buf.write(&[7, 8, 9], false);
    /// assert_eq!(buf.read(2), vec![7, 8]);
    /// assert_eq!(buf.read(2), vec![9]);
    /// ```
    #[cfg(feature = "std")]
    pub fn read(&mut self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; cmp::min(len, self.len())];
        self.read_into(&mut out);
        out
    }

    /// Moves the read cursor forward by `len` bytes that an external agent
    /// has already taken out of storage. Returns whether `len` exceeded the
    /// buffered bytes.
    ///
    /// On overflow `len` is clamped to `len()` and the write cursor is pulled
    /// back onto the read cursor, leaving the buffer empty.
    ///
    /// The caller must serialize this with whatever produces into the
    /// buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbytes::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(8).unwrap();
    /// buf.write(&[1, 2, 3], false);
    /// assert!(!buf.read_virtual(2));
    /// assert_eq!(buf.len(), 1);
    /// assert!(buf.read_virtual(5));
    /// assert!(buf.is_empty());
    /// ```
    pub fn read_virtual(&mut self, len: usize) -> bool {
        let available = self.len();
        let overflow = len > available;
        if overflow {
            tracing::debug!(requested = len, available, "virtual read overran buffered bytes");
        }
        self.advance_read(cmp::min(len, available));
        if overflow {
            self.head = self.tail;
        }
        overflow
    }

    /// Borrows up to `len` bytes starting `start` bytes past the read cursor,
    /// without consuming them. The second slice is non-empty only when the
    /// run wraps around the end of storage.
    ///
    /// Returns `None` when `start >= len()`.
    pub fn peek_slices(&self, start: usize, len: usize) -> Option<(&[u8], &[u8])> {
        let size = self.len();
        if start >= size {
            return None;
        }
        let len = cmp::min(len, size - start);
        Some(self.region(self.tail.wrapping_add(start), len))
    }

    /// Copies up to `len` bytes starting `start` bytes past the read cursor,
    /// without consuming them.
    ///
    /// Returns `None` when `start >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbytes::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(8).unwrap();
    /// buf.write(&[1, 2, 3, 4], false);
    /// assert_eq!(buf.peek(1, 2), Some(vec![2, 3]));
    /// assert_eq!(buf.peek(2, 10), Some(vec![3, 4]));
    /// assert_eq!(buf.peek(4, 1), None);
    /// assert_eq!(buf.len(), 4);
    /// ```
    #[cfg(feature = "std")]
    pub fn peek(&self, start: usize, len: usize) -> Option<Vec<u8>> {
        self.peek_slices(start, len).map(|(a, b)| {
            let mut out = Vec::with_capacity(a.len() + b.len());
            out.extend_from_slice(a);
            out.extend_from_slice(b);
            out
        })
    }

    /// Copies bytes starting `start` bytes past the read cursor into `dst`,
    /// without consuming them. Returns how many bytes were copied, or `None`
    /// when `start >= len()`.
    pub fn peek_into(&self, start: usize, dst: &mut [u8]) -> Option<usize> {
        let (a, b) = self.peek_slices(start, dst.len())?;
        dst[..a.len()].copy_from_slice(a);
        dst[a.len()..a.len() + b.len()].copy_from_slice(b);
        Some(a.len() + b.len())
    }

    /// Borrows the buffered bytes in `range`, counted from the read cursor.
    ///
    /// The range is clamped to the buffered bytes like `peek_slices`, and an
    /// inverted range borrows nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbytes::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(8).unwrap();
    /// buf.write(b"hello", false);
    /// assert_eq!(buf.peek_range(1..3), Some((&b"el"[..], &b""[..])));
    /// assert_eq!(buf.peek_range(3..), Some((&b"lo"[..], &b""[..])));
    /// assert_eq!(buf.peek_range(5..), None);
    /// ```
    pub fn peek_range<R>(&self, range: R) -> Option<(&[u8], &[u8])>
        where R: RangeArgument<usize>
    {
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(usize::MAX);
        self.peek_slices(start, end.saturating_sub(start))
    }

    /// Returns the byte `offset` bytes past the read cursor, or `None` when
    /// fewer than `offset + 1` bytes are buffered.
    #[inline]
    pub fn peek_one(&self, offset: usize) -> Option<u8> {
        if offset >= self.len() {
            return None;
        }
        Some(self.peek_one_forced(offset))
    }

    /// Returns the byte in the storage slot `offset` bytes past the read
    /// cursor, without checking it against the buffered bytes.
    ///
    /// This is for callers that know more than the cursors do, e.g. that a
    /// DMA transfer has landed but `write_virtual` has not been called yet.
    /// Past the write cursor the slot holds whatever was last stored there.
    #[inline]
    pub fn peek_one_forced(&self, offset: usize) -> u8 {
        self.xs.as_slice()[self.wrap_mem(self.tail.wrapping_add(offset))]
    }

    /// Returns a pair of slices which contain, in order, the buffered bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbytes::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4).unwrap();
    /// buf.write(&[1, 2, 3], false);
    /// buf.read(2);
    /// buf.write(&[4, 5], false);
    /// assert_eq!(buf.as_slices(), (&[3, 4][..], &[5][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        self.region(self.tail, self.len())
    }

    /// Returns a pair of slices which cover, in order, the free slots from
    /// the write cursor on.
    ///
    /// Bytes written here become part of the buffer once the write cursor is
    /// moved over them with `write_virtual`.
    #[inline]
    pub fn vacant_slices_mut(&mut self) -> (&mut [u8], &mut [u8]) {
        let (head, space) = (self.head, self.space());
        self.region_mut(head, space)
    }

    /// Returns an iterator over the buffered bytes, oldest first.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        let (a, b) = self.as_slices();
        Iter { inner: a.iter().chain(b.iter()) }
    }

    /// Clears the buffer by resetting both cursors. Storage is not zeroed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbytes::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4).unwrap();
    /// buf.write(&[1, 2, 3, 4], false);
    /// buf.clear();
    /// assert!(buf.is_empty());
    /// assert!(!buf.is_full());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
    }

    /// Returns a reference to the storage block.
    #[inline]
    pub fn storage(&self) -> &S {
        &self.xs
    }

    /// Returns a raw pointer to the first storage slot, e.g. to program a
    /// DMA engine with. No cursor is moved.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.xs.as_mut_slice().as_mut_ptr()
    }

    /// Gives the storage block back, dropping the cursors.
    #[inline]
    pub fn into_storage(self) -> S {
        self.xs
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    #[inline]
    fn next_back(&mut self) -> Option<u8> {
        self.inner.next_back().copied()
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}
