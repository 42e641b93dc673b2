//! # Packet Checksum
//!
//! The link protocol protects each packet with a 16-bit wraparound sum over
//! the command, compression, length, and payload bytes (wire order, before
//! any decompression). The two checksum bytes themselves are excluded, as is
//! the sync word.
//!
//! This is a plain modular sum, not a CRC — it catches single glitched bytes
//! on the cable, nothing more.

// ============================================================================
// ACCUMULATOR
// ============================================================================

/// Running 16-bit wraparound sum, fed one byte at a time by the streaming
/// decoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChecksumAccumulator {
    sum: u16,
}

impl ChecksumAccumulator {
    /// Fresh accumulator with a zero sum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one byte to the running sum.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.sum = self.sum.wrapping_add(u16::from(byte));
    }

    /// Add a slice of bytes to the running sum.
    pub fn push_slice(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push(byte);
        }
    }

    /// Current sum.
    #[inline]
    pub fn value(self) -> u16 {
        self.sum
    }

    /// Discard the running sum and start over.
    #[inline]
    pub fn reset(&mut self) {
        self.sum = 0;
    }
}

/// One-shot checksum over a byte slice.
///
/// ## Example
///
/// ```
/// use gbplink::protocol::checksum;
///
/// // Print packet header + payload from the Programming Manual example
/// let bytes = [0x02, 0x00, 0x04, 0x00, 0x01, 0x00, 0x00, 0x40];
/// assert_eq!(checksum::sum(&bytes), 0x47);
/// ```
pub fn sum(bytes: &[u8]) -> u16 {
    let mut acc = ChecksumAccumulator::new();
    acc.push_slice(bytes);
    acc.value()
}

// ============================================================================
// TESTS
// ============================================================================
