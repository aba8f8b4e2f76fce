use core::cmp;

use super::RingBuffer;
use crate::behavior::Behavior;
use crate::storage::Storage;
use crate::utils::*;

impl<S: Storage, B: Behavior> RingBuffer<S, B> {
    #[inline]
    pub(crate) fn wrap_mem(&self, index: usize) -> usize {
        wrap_mem(index, self.capacity)
    }

    #[inline]
    pub(crate) fn wrap_logic(&self, index: usize) -> usize {
        wrap_logic(index, self.capacity)
    }

    #[inline]
    pub(crate) fn advance_write(&mut self, len: usize) {
        debug_assert!(len <= self.capacity);
        self.head = self.wrap_logic(self.head.wrapping_add(len));
    }

    #[inline]
    pub(crate) fn advance_read(&mut self, len: usize) {
        debug_assert!(len <= self.capacity);
        self.tail = self.wrap_logic(self.tail.wrapping_add(len));
    }

    /// Drops the oldest bytes so that exactly `capacity` bytes end at the
    /// write cursor.
    #[inline]
    pub(crate) fn cover_oldest(&mut self) {
        self.tail = self.wrap_logic(self.head.wrapping_sub(self.capacity));
    }

    /// Splits the `len` slots starting at memory index `mem` into the run up
    /// to the end of storage and the run wrapped around to the front.
    #[inline]
    pub(crate) fn split_run(&self, mem: usize, len: usize) -> (usize, usize) {
        debug_assert!(mem < self.capacity && len <= self.capacity,
                      "run mem={} len={} cap={}",
                      mem,
                      len,
                      self.capacity);
        let pre_wrap_len = cmp::min(self.capacity - mem, len);
        (pre_wrap_len, len - pre_wrap_len)
    }

    /// Copies `src` into storage starting at logical index `at`.
    /// `src` must be no longer than `capacity`.
    pub(crate) fn copy_in(&mut self, at: usize, src: &[u8]) {
        let mem = self.wrap_mem(at);
        let (head, tail) = self.split_run(mem, src.len());
        let buf = self.xs.as_mut_slice();
        buf[mem..mem + head].copy_from_slice(&src[..head]);
        buf[..tail].copy_from_slice(&src[head..]);
    }

    /// Copies `dst.len()` bytes out of storage starting at logical index
    /// `at`. `dst` must be no longer than `capacity`.
    pub(crate) fn copy_out(&self, at: usize, dst: &mut [u8]) {
        let (head, tail) = self.region(at, dst.len());
        let (dst_head, dst_tail) = dst.split_at_mut(head.len());
        dst_head.copy_from_slice(head);
        dst_tail.copy_from_slice(tail);
    }

    /// Borrows the `len` bytes starting at logical index `at` as two slices.
    pub(crate) fn region(&self, at: usize, len: usize) -> (&[u8], &[u8]) {
        let mem = self.wrap_mem(at);
        let (head, tail) = self.split_run(mem, len);
        let buf = self.xs.as_slice();
        (&buf[mem..mem + head], &buf[..tail])
    }

    /// Mutable counterpart of `region`.
    pub(crate) fn region_mut(&mut self, at: usize, len: usize) -> (&mut [u8], &mut [u8]) {
        let mem = self.wrap_mem(at);
        let (head, tail) = self.split_run(mem, len);
        let (front, back) = self.xs.as_mut_slice().split_at_mut(mem);
        (&mut back[..head], &mut front[..tail])
    }
}
