//! # Run-Length Compression
//!
//! The printer's payload compression alternates two kinds of runs, selected
//! by the top bit of a tag byte:
//!
//! ```text
//! Tag 0LLL LLLL  →  literal run: (L + 1) bytes follow verbatim   (1..=128)
//! Tag 1LLL LLLL  →  repeat run:  one byte follows, copied (L + 2) times (2..=129)
//! ```
//!
//! Decompression is exposed two ways: a one-shot [`decompress`] for whole
//! buffers, and the byte-at-a-time [`RleDecoder`] the packet decoder drives
//! while payload bytes trickle in. Both enforce the packet's declared wire
//! length: a run that claims more bytes than the length budget has left is a
//! [`ProtocolError::MalformedRle`].
//!
//! The [`compress`] direction is greedy — repeat runs wherever two or more
//! identical bytes sit together, literal runs otherwise. It round-trips
//! exactly but makes no promise of byte-matching the compressor in any
//! particular game cartridge.

use crate::error::ProtocolError;

/// Longest literal run a single tag byte can describe.
const MAX_LITERAL_RUN: usize = 128;

/// Longest repeat run a single tag byte can describe.
const MAX_REPEAT_RUN: usize = 129;

// ============================================================================
// STREAMING DECODER
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
enum RunState {
    /// Next byte is a tag byte
    #[default]
    Tag,
    /// Inside a literal run, n bytes still to copy
    Literal(usize),
    /// Next byte is the value of a repeat run of n copies
    Repeat(usize),
}

/// Byte-at-a-time RLE decompressor.
///
/// Driven by [`PacketDecoder`](crate::protocol::decoder::PacketDecoder)
/// during the payload phase of a compressed packet. Each call hands over one
/// wire byte together with the number of wire bytes still owed by the
/// packet's declared length, so runs that overrun the packet are caught the
/// moment their tag arrives.
#[derive(Debug, Clone, Default)]
pub struct RleDecoder {
    state: RunState,
}

impl RleDecoder {
    /// Decoder positioned at a tag byte.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one wire byte, appending any decompressed output to `out`.
    ///
    /// `remaining` is the number of wire bytes that will still arrive after
    /// this one (per the packet's declared data length).
    pub fn feed(
        &mut self,
        byte: u8,
        remaining: usize,
        out: &mut Vec<u8>,
    ) -> Result<(), ProtocolError> {
        match self.state {
            RunState::Tag => {
                let needed = if byte & 0x80 != 0 {
                    self.state = RunState::Repeat((byte & 0x7F) as usize + 2);
                    1
                } else {
                    let len = (byte & 0x7F) as usize + 1;
                    self.state = RunState::Literal(len);
                    len
                };
                if needed > remaining {
                    self.state = RunState::Tag;
                    return Err(ProtocolError::MalformedRle { needed, remaining });
                }
                Ok(())
            }
            RunState::Literal(n) => {
                out.push(byte);
                self.state = if n > 1 {
                    RunState::Literal(n - 1)
                } else {
                    RunState::Tag
                };
                Ok(())
            }
            RunState::Repeat(n) => {
                out.extend(std::iter::repeat_n(byte, n));
                self.state = RunState::Tag;
                Ok(())
            }
        }
    }

    /// Forget any in-progress run.
    pub fn reset(&mut self) {
        self.state = RunState::Tag;
    }
}

// ============================================================================
// ONE-SHOT API
// ============================================================================

/// Decompress a complete RLE-encoded buffer.
///
/// ## Example
///
/// ```
/// use gbplink::protocol::rle;
///
/// // Repeat run: 0x80 | 1 = three copies of 0xAA, then a 2-byte literal run
/// let wire = [0x81, 0xAA, 0x01, 0x10, 0x20];
/// assert_eq!(rle::decompress(&wire).unwrap(), vec![0xAA, 0xAA, 0xAA, 0x10, 0x20]);
/// ```
pub fn decompress(wire: &[u8]) -> Result<Vec<u8>, ProtocolError> {
    let mut decoder = RleDecoder::new();
    let mut out = Vec::with_capacity(wire.len());
    for (i, &byte) in wire.iter().enumerate() {
        decoder.feed(byte, wire.len() - i - 1, &mut out)?;
    }
    Ok(out)
}

/// Compress a raw buffer into the printer's RLE encoding.
///
/// Greedy: every stretch of ≥2 identical bytes becomes a repeat run (up to
/// 129 per tag), everything else becomes literal runs (up to 128 per tag).
///
/// ## Example
///
/// ```
/// use gbplink::protocol::rle;
///
/// assert_eq!(rle::compress(&[0xAA, 0xAA, 0xAA]), vec![0x81, 0xAA]);
/// assert_eq!(rle::compress(&[0x10, 0x20]), vec![0x01, 0x10, 0x20]);
/// assert_eq!(rle::compress(&[]), Vec::<u8>::new());
/// ```
pub fn compress(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < data.len() {
        // Length of the run of identical bytes starting here
        let mut run = 1;
        while i + run < data.len() && data[i + run] == data[i] && run < MAX_REPEAT_RUN {
            run += 1;
        }
        if run >= 2 {
            out.push(0x80 | (run - 2) as u8);
            out.push(data[i]);
            i += run;
        } else {
            // Literal run: extend until the next pair of identical bytes
            let start = i;
            i += 1;
            while i < data.len() && i - start < MAX_LITERAL_RUN {
                if i + 1 < data.len() && data[i + 1] == data[i] {
                    break;
                }
                i += 1;
            }
            out.push((i - start - 1) as u8);
            out.extend_from_slice(&data[start..i]);
        }
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn round_trip(data: &[u8]) {
        let wire = compress(data);
        assert_eq!(decompress(&wire).unwrap(), data, "wire: {wire:?}");
    }

    #[test]
    fn test_empty() {
        assert_eq!(compress(&[]), Vec::<u8>::new());
        assert_eq!(decompress(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_repeat_run_encoding() {
        // Two copies is the minimum repeat run: tag 0x80
        assert_eq!(compress(&[7, 7]), vec![0x80, 7]);
        assert_eq!(compress(&[7, 7, 7]), vec![0x81, 7]);
    }

    #[test]
    fn test_literal_run_encoding() {
        assert_eq!(compress(&[1]), vec![0x00, 1]);
        assert_eq!(compress(&[1, 2, 3]), vec![0x02, 1, 2, 3]);
    }

    #[test]
    fn test_mixed_runs() {
        // literal [1,2], repeat 3x4, literal [5]
        assert_eq!(
            compress(&[1, 2, 4, 4, 4, 5]),
            vec![0x01, 1, 2, 0x81, 4, 0x00, 5]
        );
    }

    #[test]
    fn test_max_repeat_run_splits() {
        // 130 identical bytes: one 129-run plus one leftover literal
        let data = vec![0x55; 130];
        let wire = compress(&data);
        assert_eq!(wire, vec![0xFF, 0x55, 0x00, 0x55]);
        assert_eq!(decompress(&wire).unwrap(), data);
    }

    #[test]
    fn test_max_literal_run_splits() {
        // 200 distinct-neighbor bytes forces a 128-byte literal then a 72-byte one
        let data: Vec<u8> = (0..200u16).map(|i| (i % 251) as u8).collect();
        let wire = compress(&data);
        assert_eq!(wire[0], 0x7F); // 128-byte literal tag
        assert_eq!(wire[129], 71); // 72-byte literal tag
        assert_eq!(decompress(&wire).unwrap(), data);
    }

    #[test]
    fn test_round_trips() {
        round_trip(&[0; 640]);
        round_trip(&[0xAA; 1000]);
        round_trip(b"abba");
        round_trip(b"aabb");
        let noisy: Vec<u8> = (0..1000u32)
            .map(|i| (i.wrapping_mul(2654435761) >> 24) as u8)
            .collect();
        round_trip(&noisy);
    }

    #[test]
    fn test_truncated_repeat_is_malformed() {
        // Repeat tag with no value byte left in the budget
        assert_eq!(
            decompress(&[0x81]),
            Err(ProtocolError::MalformedRle {
                needed: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn test_overrunning_literal_is_malformed() {
        // Literal tag claims 4 bytes, only 2 remain
        assert_eq!(
            decompress(&[0x03, 1, 2]),
            Err(ProtocolError::MalformedRle {
                needed: 4,
                remaining: 2
            })
        );
    }

    #[test]
    fn test_streaming_matches_one_shot() {
        let data = b"streaming equivalence check, aaaa bbbb cccc";
        let wire = compress(data);
        let mut decoder = RleDecoder::new();
        let mut out = Vec::new();
        for (i, &byte) in wire.iter().enumerate() {
            decoder.feed(byte, wire.len() - i - 1, &mut out).unwrap();
        }
        assert_eq!(out, decompress(&wire).unwrap());
    }
}
