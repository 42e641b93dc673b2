//! # Streaming Packet Decoder
//!
//! The decoder consumes a host → printer byte stream one byte at a time and
//! yields decoded [`Packet`]s. It is a pure state machine: the caller owns
//! all buffering and timing, the decoder never performs I/O, and a stream
//! that stops mid-packet can resume later from the saved state.
//!
//! ## State Machine
//!
//! ```text
//! WaitSync0 → WaitSync1 → Command → Compression → LenLow → LenHigh
//!      ▲                                                      │
//!      │                                              (X = 0) │ (X > 0)
//!      │                                                      ▼
//!      └──── emit ── ChecksumHigh ← ChecksumLow ←──────── Payload
//! ```
//!
//! - `WaitSync0` discards bytes until `0x88`; a following `0x33` opens a
//!   packet. An `0x88` while in `WaitSync1` keeps waiting for `0x33`, so a
//!   run of noise never swallows a real sync word.
//! - Structural errors (unknown command byte, unknown compression flag,
//!   malformed RLE run) abort the current packet and drop back to
//!   `WaitSync0`: the stream self-heals at the next sync word, the way a
//!   real link shrugs off one glitched packet.
//! - A checksum mismatch is *not* structural: the packet is still emitted,
//!   with `checksum_valid = false`, so the consumer can raise the SUM status
//!   bit instead of losing data.
//!
//! ## Compression policy
//!
//! The compression byte is validated strictly: only `0x00` and `0x01` are
//! accepted. Real hardware behavior for other values is undocumented; a
//! value the official software never sends is treated as line noise and
//! resynchronized away rather than guessed at.
//!
//! ## Usage
//!
//! ```
//! use gbplink::protocol::decoder::{DecodeEvent, PacketDecoder};
//! use gbplink::protocol::packet::Command;
//!
//! let mut decoder = PacketDecoder::new();
//! // Inquiry packet: sync, command 0x0F, no compression, zero length,
//! // checksum 0x000F
//! let wire = [0x88, 0x33, 0x0F, 0x00, 0x00, 0x00, 0x0F, 0x00];
//!
//! let mut packets = Vec::new();
//! for byte in wire {
//!     if let DecodeEvent::Packet(p) = decoder.feed(byte) {
//!         packets.push(p);
//!     }
//! }
//!
//! assert_eq!(packets.len(), 1);
//! assert_eq!(packets[0].command, Command::Inquiry);
//! assert!(packets[0].payload.is_empty());
//! assert!(packets[0].checksum_valid);
//! ```

use crate::error::ProtocolError;
use crate::protocol::checksum::ChecksumAccumulator;
use crate::protocol::packet::{
    COMPRESSION_DISABLED, COMPRESSION_ENABLED, Command, Packet, SYNC_WORD_0, SYNC_WORD_1,
};
use crate::protocol::rle::RleDecoder;

// ============================================================================
// DECODE EVENTS
// ============================================================================

/// Outcome of feeding one byte to the decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeEvent {
    /// The byte was consumed; no packet has completed yet
    NeedMore,
    /// A packet just completed
    Packet(Packet),
    /// The current packet is unrecoverable; the decoder has reset and will
    /// resynchronize at the next sync word
    Error(ProtocolError),
}

// ============================================================================
// DECODER
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
enum State {
    #[default]
    WaitSync0,
    WaitSync1,
    Command,
    Compression,
    LenLow,
    LenHigh,
    Payload,
    ChecksumLow,
    ChecksumHigh,
}

/// # Packet Decoder
///
/// Stateful decoder for the host → printer direction. One instance per
/// physical link; instances share nothing, so a multi-link host simply owns
/// one decoder per connection.
///
/// Trailing response bytes (device ID and status slots) are not part of the
/// host → printer packet and fall through `WaitSync0` untouched.
#[derive(Debug, Clone, Default)]
pub struct PacketDecoder {
    state: State,
    command: Option<Command>,
    compressed: bool,
    wire_len: u16,
    wire_remaining: usize,
    payload: Vec<u8>,
    checksum: ChecksumAccumulator,
    checksum_lo: u8,
    rle: RleDecoder,
}

impl PacketDecoder {
    /// Decoder waiting for the first sync byte.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one byte from the link.
    pub fn feed(&mut self, byte: u8) -> DecodeEvent {
        match self.state {
            State::WaitSync0 => {
                if byte == SYNC_WORD_0 {
                    self.state = State::WaitSync1;
                }
                DecodeEvent::NeedMore
            }
            State::WaitSync1 => {
                match byte {
                    SYNC_WORD_1 => {
                        self.begin_packet();
                        self.state = State::Command;
                    }
                    // A second 0x88 may itself start the real sync word
                    SYNC_WORD_0 => {}
                    _ => self.state = State::WaitSync0,
                }
                DecodeEvent::NeedMore
            }
            State::Command => {
                self.checksum.push(byte);
                match Command::from_byte(byte) {
                    Ok(command) => {
                        self.command = Some(command);
                        self.state = State::Compression;
                        DecodeEvent::NeedMore
                    }
                    Err(e) => self.abort(e),
                }
            }
            State::Compression => {
                self.checksum.push(byte);
                match byte {
                    COMPRESSION_DISABLED => self.compressed = false,
                    COMPRESSION_ENABLED => self.compressed = true,
                    other => {
                        return self.abort(ProtocolError::UnrecognizedCompressionFlag(other));
                    }
                }
                self.state = State::LenLow;
                DecodeEvent::NeedMore
            }
            State::LenLow => {
                self.checksum.push(byte);
                self.wire_len = u16::from(byte);
                self.state = State::LenHigh;
                DecodeEvent::NeedMore
            }
            State::LenHigh => {
                self.checksum.push(byte);
                self.wire_len |= u16::from(byte) << 8;
                self.wire_remaining = usize::from(self.wire_len);
                // Zero-length payloads (Init, Inquiry, ...) skip straight
                // to the checksum
                self.state = if self.wire_remaining == 0 {
                    State::ChecksumLow
                } else {
                    State::Payload
                };
                DecodeEvent::NeedMore
            }
            State::Payload => {
                self.checksum.push(byte);
                self.wire_remaining -= 1;
                if self.compressed {
                    if let Err(e) = self.rle.feed(byte, self.wire_remaining, &mut self.payload) {
                        return self.abort(e);
                    }
                } else {
                    self.payload.push(byte);
                }
                if self.wire_remaining == 0 {
                    self.state = State::ChecksumLow;
                }
                DecodeEvent::NeedMore
            }
            State::ChecksumLow => {
                self.checksum_lo = byte;
                self.state = State::ChecksumHigh;
                DecodeEvent::NeedMore
            }
            State::ChecksumHigh => {
                let received = u16::from_le_bytes([self.checksum_lo, byte]);
                let checksum_valid = received == self.checksum.value();
                let Some(command) = self.command.take() else {
                    // Unreachable: Command always precedes ChecksumHigh
                    self.reset();
                    return DecodeEvent::NeedMore;
                };
                let packet = Packet {
                    command,
                    compressed: self.compressed,
                    payload: std::mem::take(&mut self.payload),
                    checksum_valid,
                };
                self.reset();
                DecodeEvent::Packet(packet)
            }
        }
    }

    /// Feed a whole buffer, collecting every packet and error event in
    /// order. `NeedMore` outcomes are dropped.
    ///
    /// Byte-at-a-time [`feed`](Self::feed) and `feed_slice` over the same
    /// bytes produce identical events.
    pub fn feed_slice(&mut self, bytes: &[u8]) -> Vec<DecodeEvent> {
        bytes
            .iter()
            .filter_map(|&byte| match self.feed(byte) {
                DecodeEvent::NeedMore => None,
                event => Some(event),
            })
            .collect()
    }

    /// Drop any partial packet and return to sync search.
    pub fn reset(&mut self) {
        self.state = State::WaitSync0;
        self.command = None;
        self.compressed = false;
        self.wire_len = 0;
        self.wire_remaining = 0;
        self.payload.clear();
        self.checksum.reset();
        self.checksum_lo = 0;
        self.rle.reset();
    }

    fn begin_packet(&mut self) {
        self.command = None;
        self.compressed = false;
        self.wire_len = 0;
        self.wire_remaining = 0;
        self.payload.clear();
        self.checksum.reset();
        self.checksum_lo = 0;
        self.rle.reset();
    }

    fn abort(&mut self, error: ProtocolError) -> DecodeEvent {
        self.reset();
        DecodeEvent::Error(error)
    }
}

// ============================================================================
// TESTS
// ============================================================================
