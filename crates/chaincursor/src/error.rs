use thiserror::Error;

/// Recoverable failure signals reported by [`ChainCursor`](crate::ChainCursor).
///
/// None of these are fatal. `EndOfData` in particular is the normal terminal
/// condition of forward reading, while the remaining kinds indicate a request
/// the current chain cannot satisfy. Every operation that fails leaves the
/// cursor exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// Forward reading exhausted the chain.
    #[error("end of chain data")]
    EndOfData,

    /// A putback was requested but no earlier byte exists.
    #[error("read position is at the start of the chain")]
    AtChainStart,

    /// A seek target lies outside the chain.
    #[error("seek target lies outside the chain")]
    OutOfRange,

    /// A boundary putback was attempted while the window still has rewindable
    /// bytes before the read position.
    #[error("putback requires the read position to sit at the window start")]
    NotAtBoundary,

    /// The byte named in a putback does not equal the actual preceding byte.
    #[error("putback byte 0x{expected:02x} does not match preceding byte 0x{found:02x}")]
    Mismatch {
        /// The byte the caller claimed to be stepping back over.
        expected: u8,
        /// The byte actually preceding the read position.
        found: u8,
    },

    /// A seek offset has the wrong sign for its origin.
    #[error("seek offset has the wrong sign for its origin")]
    InvalidRequest,
}
