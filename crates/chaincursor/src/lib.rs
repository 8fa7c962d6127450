//! Zero-copy, seekable byte reading over chains of discontiguous segments.
//!
//! A [`Chain`] is a circular sequence of borrowed byte slices; a
//! [`ChainCursor`] is a read position over one. The cursor supports
//! single-byte peeks and pulls, bulk reads, one-step putback that may cross
//! into a preceding segment, and directional seeks, all without copying or
//! owning the underlying bytes. The chain is never mutated; any number of
//! cursors may read it at once.
//!
//! ```
//! use chaincursor::{Chain, ChainCursor, SeekOrigin};
//!
//! let parts: [&[u8]; 2] = [b"hello ", b"world"];
//! let chain = Chain::from_slices(&parts);
//! let mut cursor = ChainCursor::new(&chain);
//!
//! let mut out = [0u8; 11];
//! assert_eq!(cursor.read_block(&mut out), 11);
//! assert_eq!(&out, b"hello world");
//!
//! cursor.seek(-2, SeekOrigin::End)?;
//! let mut tail = [0u8; 2];
//! assert_eq!(cursor.read_block(&mut tail), 2);
//! assert_eq!(&tail, b"ld");
//! # Ok::<(), chaincursor::CursorError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod chain;
mod cursor;
mod error;

pub use chain::{Chain, Segment, SegmentId};
pub use cursor::{ChainCursor, SeekOrigin};
pub use error::CursorError;
