//! A circular byte buffer with fixed, power-of-two capacity.
//!
//! It is meant for staging byte streams between a producer and a consumer,
//! including the case where one of the two is not code at all: a DMA engine
//! that fills or drains the storage block behind the buffer's back. For that
//! case the cursors can be moved without copying (`write_virtual`,
//! `read_virtual`), and the storage block can be handed out as slices or a raw
//! pointer.
//!
//! Every slot of the storage block is usable. Both cursors count modulo twice
//! the capacity, so a full buffer and an empty one are never confused.
//!
//! Operations never fail once the buffer exists: oversized writes and reads
//! are clamped and report how much was actually moved.
//!
//! # Feature Flags
//! The **ringbytes** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd: heap-backed buffers, `Vec`-returning reads and peeks,
//!     `std::io::{Read, Write}` impls
//!
//!
//! - `use_generic_array`
//!   - Optional
//!   - Depend on generic-array and allow using it as RingBuffer storage.
//!
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringbytes = "0.1"
//! ```
//!
//! Without the standard library:
//!
//! ```toml
//! [dependencies]
//! ringbytes = { version = "0.1", default-features = false }
//! ```
//!
//! # Examples
//! ```
//! use ringbytes::RingBuffer;
//!
//! let mut buf = RingBuffer::new(8).unwrap();
//! assert_eq!(buf.capacity(), 8);
//!
//! assert_eq!(buf.write(&[1, 2, 3, 4, 5], false), 5);
//! assert_eq!(buf.len(), 5);
//! assert_eq!(buf.space(), 3);
//!
//! assert_eq!(buf.peek(0, 2), Some(vec![1, 2]));
//! assert_eq!(buf.read(2), vec![1, 2]);
//! assert_eq!(buf.len(), 3);
//! ```
//!
//! # Covering
//! ```
//! use ringbytes::RingBuffer;
//!
//! let mut buf = RingBuffer::new(4).unwrap();
//! buf.write(&[1, 2, 3, 4], false);
//! assert!(buf.is_full());
//!
//! // without covering nothing more fits
//! assert_eq!(buf.write(&[5, 6], false), 0);
//!
//! // with covering the oldest bytes make room
//! assert_eq!(buf.write(&[5, 6], true), 2);
//! assert_eq!(buf.read(4), vec![3, 4, 5, 6]);
//! ```
//!
//! # External producers
//! ```
//! use ringbytes::RingBuffer;
//!
//! let mut region = [0u8; 16];
//! let mut buf = RingBuffer::from_storage(&mut region[..]).unwrap();
//!
//! // a DMA engine would be pointed at the vacant slots...
//! let (first, _) = buf.vacant_slices_mut();
//! first[..4].copy_from_slice(b"ping");
//!
//! // ...and the write cursor caught up once it reports completion
//! assert!(!buf.write_virtual(4));
//! assert_eq!(buf.read(4), b"ping".to_vec());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

mod behavior;
pub mod error;
mod ring_buffer;
mod storage;
mod utils;

pub use behavior::{Behavior, Saturating, Wrapping};
pub use error::InvalidCapacity;
pub use ring_buffer::{Iter, RangeArgument, RingBuffer};
pub use storage::Storage;
