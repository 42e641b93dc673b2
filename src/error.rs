//! # Error Types
//!
//! This module defines error types used throughout the gbplink library.
//!
//! Note that a checksum mismatch is *not* an error: the real printer accepts
//! the packet anyway and reports the condition through a status bit, so the
//! decoder mirrors that by setting `checksum_valid = false` on the decoded
//! [`Packet`](crate::protocol::Packet). Likewise a truncated stream is not
//! an error — the decoder reports `NeedMore` and stays resumable.

use thiserror::Error;

/// Main error type for gbplink protocol operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Command byte is not one of the five defined command values
    #[error("unrecognized command byte: 0x{0:02X}")]
    UnrecognizedCommand(u8),

    /// Compression flag byte is neither 0x00 nor 0x01
    #[error("unrecognized compression flag: 0x{0:02X}")]
    UnrecognizedCompressionFlag(u8),

    /// An RLE run claims more wire bytes than the packet has left
    #[error("malformed RLE stream: run needs {needed} more wire bytes but only {remaining} remain")]
    MalformedRle {
        /// Wire bytes the current run still requires
        needed: usize,
        /// Wire bytes left in the packet's declared payload length
        remaining: usize,
    },

    /// Payload does not fit in the 16-bit wire length field (encode-time only)
    #[error("payload too large: {0} bytes exceeds the 16-bit length field")]
    PayloadTooLarge(usize),

    /// Print instruction payload is not exactly 4 bytes
    #[error("print instruction payload must be exactly 4 bytes, got {0}")]
    BadPrintInstruction(usize),
}
