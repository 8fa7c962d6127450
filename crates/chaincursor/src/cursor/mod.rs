//! Read cursor over a segment chain.
//!
//! Overview
//! - A [`ChainCursor`] tracks one segment of a [`Chain`] plus a window of
//!   three offsets `begin <= pos <= end` into that segment's bytes. Reads are
//!   served from the window; when it is exhausted the cursor asks the chain
//!   for the next segment. The chain is never mutated and bytes are never
//!   copied except into caller-provided output.
//! - Wraparound back to the head sentinel is how every forward walk detects
//!   the end of data, and how every backward walk detects the start.
//!
//! Window discipline
//! - Normal forward-reading state: `begin == 0` and `end == segment.len()`.
//! - Transient putback state: after a cross-segment putback the window
//!   narrows to `[len - 1, len - 1, len)`, exposing exactly the one byte made
//!   re-readable. Seeks always commit full windows, so any seek leaves the
//!   putback state behind.
//! - The absolute position is derived from the offset into the segment's
//!   bytes (`pos`), not from `pos - begin`, so it stays truthful while the
//!   window is narrowed.
//!
//! Failure behavior
//! - Every failing operation returns a [`CursorError`] and leaves the cursor
//!   exactly as it was. `EndOfData` is an expected terminal signal, not
//!   misuse.

use crate::{
    chain::{Chain, SegmentId},
    error::CursorError,
};

/// Reference point for [`ChainCursor::seek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOrigin {
    /// Absolute offset from the first byte of the chain; the offset must be
    /// non-negative.
    Start,
    /// Distance back from one past the last byte; the offset must be
    /// non-positive.
    End,
    /// Signed displacement from the current read position.
    Current,
}

/// A sequential, seekable read position over a [`Chain`].
///
/// The cursor borrows the chain and owns nothing but its own position state;
/// cloning one is cheap and clones advance independently. Multiple cursors
/// may read the same chain at the same time.
#[derive(Debug, Clone)]
pub struct ChainCursor<'c> {
    chain: &'c Chain<'c>,
    head: SegmentId,
    cur: SegmentId,
    begin: usize,
    pos: usize,
    end: usize,
}

impl<'c> ChainCursor<'c> {
    /// Creates a cursor positioned on the first byte of the chain.
    pub fn new(chain: &'c Chain<'c>) -> Self {
        let head = chain.head();
        Self {
            chain,
            head,
            cur: head,
            begin: 0,
            pos: 0,
            end: chain.len(head),
        }
    }

    /// The segment the read position currently sits in.
    #[inline]
    pub fn segment(&self) -> SegmentId {
        self.cur
    }

    /// Returns the byte at the read position without consuming it.
    ///
    /// When the current window is exhausted this steps exactly one segment
    /// forward and reports that segment's first byte. If stepping would wrap
    /// back to the head, the chain is exhausted and the cursor is left
    /// untouched. Stepping onto a zero-length segment commits the step but
    /// reports `EndOfData` for this call; the next call resumes behind it.
    /// Zero-length segments are not transparently skipped on the forward
    /// path.
    pub fn peek_byte(&mut self) -> Result<u8, CursorError> {
        if self.pos < self.end {
            return Ok(self.chain.bytes(self.cur)[self.pos]);
        }
        let next = self.chain.next(self.cur);
        if next == self.head {
            return Err(CursorError::EndOfData);
        }
        self.cur = next;
        self.begin = 0;
        self.pos = 0;
        self.end = self.chain.len(next);
        if self.end == 0 {
            return Err(CursorError::EndOfData);
        }
        Ok(self.chain.bytes(next)[0])
    }

    /// Consumes and returns the byte at the read position.
    pub fn read_byte(&mut self) -> Result<u8, CursorError> {
        let byte = self.peek_byte()?;
        self.pos += 1;
        Ok(byte)
    }

    /// Copies bytes from the read position into `out`, walking segment by
    /// segment, until `out` is full or the chain is exhausted.
    ///
    /// Returns the number of bytes copied. A short count is not an error; it
    /// signals the end of available data. The cursor advances over exactly
    /// the bytes copied. Zero-length segments along the walk contribute
    /// nothing and do not stop it.
    pub fn read_block(&mut self, out: &mut [u8]) -> usize {
        let mut copied = 0;
        while copied < out.len() {
            let window = &self.chain.bytes(self.cur)[self.pos..self.end];
            let n = window.len().min(out.len() - copied);
            out[copied..copied + n].copy_from_slice(&window[..n]);
            copied += n;
            self.pos += n;
            if copied == out.len() {
                break;
            }
            let next = self.chain.next(self.cur);
            if next == self.head {
                break;
            }
            self.cur = next;
            self.begin = 0;
            self.pos = 0;
            self.end = self.chain.len(next);
        }
        copied
    }

    /// Number of bytes between the read position and the end of the chain.
    ///
    /// Cost is proportional to the number of remaining segments.
    pub fn bytes_available(&self) -> usize {
        let mut total = self.end - self.pos;
        let mut seg = self.chain.next(self.cur);
        while seg != self.head {
            total += self.chain.len(seg);
            seg = self.chain.next(seg);
        }
        total
    }

    /// Absolute offset of the read position from the start of the chain.
    ///
    /// Not stored; recomputed by walking from the head. Cost is proportional
    /// to the number of preceding segments.
    pub fn position(&self) -> usize {
        let mut sum = 0;
        let mut seg = self.head;
        while seg != self.cur {
            sum += self.chain.len(seg);
            seg = self.chain.next(seg);
        }
        sum + self.pos
    }

    /// Rewinds the read position by exactly one byte.
    ///
    /// `expected` names the byte being stepped back over; it is compared with
    /// the actual preceding byte before any state changes, and a mismatch
    /// fails with [`CursorError::Mismatch`] leaving the cursor untouched.
    /// Inside a window the rewind is a single offset step; at the start of a
    /// window it crosses into a preceding segment via
    /// [`ChainCursor::putback_across`].
    pub fn putback_byte(&mut self, expected: u8) -> Result<u8, CursorError> {
        if self.pos > self.begin {
            let found = self.chain.bytes(self.cur)[self.pos - 1];
            if found != expected {
                return Err(CursorError::Mismatch { expected, found });
            }
            self.pos -= 1;
            return Ok(found);
        }
        self.putback_across(expected)
    }

    /// Rewinds one byte across a segment boundary.
    ///
    /// The read position must sit at the start of its window
    /// ([`CursorError::NotAtBoundary`] otherwise). The walk skips zero-length
    /// segments backward until it finds a byte-bearing one; reaching the head
    /// sentinel with nothing found fails with [`CursorError::AtChainStart`].
    /// On a match the window narrows to exactly the re-readable byte,
    /// `[len - 1, len - 1, len)` on the found segment. No state changes on
    /// any failure.
    pub fn putback_across(&mut self, expected: u8) -> Result<u8, CursorError> {
        if self.pos != self.begin {
            return Err(CursorError::NotAtBoundary);
        }
        if self.cur == self.head {
            return Err(CursorError::AtChainStart);
        }
        let mut seg = self.chain.prev(self.cur);
        while self.chain.len(seg) == 0 && seg != self.head {
            seg = self.chain.prev(seg);
        }
        let len = self.chain.len(seg);
        if len == 0 {
            // Only zero-length segments precede the current one.
            return Err(CursorError::AtChainStart);
        }
        let found = self.chain.bytes(seg)[len - 1];
        if found != expected {
            return Err(CursorError::Mismatch { expected, found });
        }
        self.cur = seg;
        self.begin = len - 1;
        self.pos = len - 1;
        self.end = len;
        Ok(found)
    }

    /// Repositions the cursor and returns the new absolute offset.
    ///
    /// - [`SeekOrigin::Start`]: non-negative offsets only
    ///   ([`CursorError::InvalidRequest`] otherwise); walks forward from the
    ///   head and fails with [`CursorError::OutOfRange`] if the walk wraps
    ///   without finding a fit.
    /// - [`SeekOrigin::End`]: non-positive offsets only, interpreted as a
    ///   distance back from one past the last byte; walks backward from the
    ///   last segment.
    /// - [`SeekOrigin::Current`]: zero is a no-op; otherwise walks within the
    ///   current window first and crosses segments only when the displacement
    ///   leaves it.
    ///
    /// A remaining offset exactly equal to a segment's length resolves within
    /// that segment, at its far edge in the walk direction; in particular
    /// `seek(total_len, Start)` and `seek(0, End)` agree on the end-of-data
    /// position. Failing seeks leave the cursor untouched.
    pub fn seek(&mut self, offset: isize, origin: SeekOrigin) -> Result<usize, CursorError> {
        match origin {
            SeekOrigin::Start => {
                if offset < 0 {
                    return Err(CursorError::InvalidRequest);
                }
                self.settle_forward_from_head(offset.unsigned_abs())
            }
            SeekOrigin::End => {
                if offset > 0 {
                    return Err(CursorError::InvalidRequest);
                }
                self.settle_backward_from_end(offset.unsigned_abs())
            }
            SeekOrigin::Current => match offset {
                0 => Ok(self.position()),
                _ if offset < 0 => self.walk_back(offset.unsigned_abs()),
                _ => self.walk_forward(offset.unsigned_abs()),
            },
        }
    }

    /// Absolute positioning: shorthand for `seek(offset, SeekOrigin::Start)`.
    pub fn seek_to(&mut self, offset: usize) -> Result<usize, CursorError> {
        self.settle_forward_from_head(offset)
    }

    /// Exchanges the two cursors' entire positioning state: chain handle,
    /// head, current segment, and window. Segment bytes are untouched.
    pub fn swap_with(&mut self, other: &mut ChainCursor<'c>) {
        core::mem::swap(self, other);
    }

    fn settle_forward_from_head(&mut self, target: usize) -> Result<usize, CursorError> {
        let mut remaining = target;
        let mut seg = self.head;
        loop {
            let len = self.chain.len(seg);
            if remaining <= len {
                self.commit(seg, remaining);
                return Ok(target);
            }
            remaining -= len;
            seg = self.chain.next(seg);
            if seg == self.head {
                return Err(CursorError::OutOfRange);
            }
        }
    }

    fn settle_backward_from_end(&mut self, distance: usize) -> Result<usize, CursorError> {
        let mut remaining = distance;
        let mut seg = self.chain.prev(self.head);
        loop {
            let len = self.chain.len(seg);
            if remaining <= len {
                self.commit(seg, len - remaining);
                return Ok(self.position());
            }
            remaining -= len;
            if seg == self.head {
                // The distance would precede the first segment.
                return Err(CursorError::OutOfRange);
            }
            seg = self.chain.prev(seg);
        }
    }

    fn walk_back(&mut self, distance: usize) -> Result<usize, CursorError> {
        // The rewindable in-segment range is [begin, pos): in the putback
        // state this is empty, so the walk crosses segments immediately.
        let in_window = self.pos - self.begin;
        if distance <= in_window {
            self.pos -= distance;
            return Ok(self.position());
        }
        let mut remaining = distance - in_window;
        let mut seg = self.cur;
        loop {
            if seg == self.head {
                return Err(CursorError::OutOfRange);
            }
            seg = self.chain.prev(seg);
            let len = self.chain.len(seg);
            if remaining <= len {
                self.commit(seg, len - remaining);
                return Ok(self.position());
            }
            remaining -= len;
        }
    }

    fn walk_forward(&mut self, distance: usize) -> Result<usize, CursorError> {
        let in_window = self.end - self.pos;
        if distance <= in_window {
            self.pos += distance;
            return Ok(self.position());
        }
        let mut remaining = distance - in_window;
        let mut seg = self.cur;
        loop {
            seg = self.chain.next(seg);
            if seg == self.head {
                return Err(CursorError::OutOfRange);
            }
            let len = self.chain.len(seg);
            if remaining <= len {
                self.commit(seg, remaining);
                return Ok(self.position());
            }
            remaining -= len;
        }
    }

    /// Commits a full (non-putback) window on `seg` with the read position at
    /// `offset`.
    fn commit(&mut self, seg: SegmentId, offset: usize) {
        self.cur = seg;
        self.begin = 0;
        self.pos = offset;
        self.end = self.chain.len(seg);
    }
}
