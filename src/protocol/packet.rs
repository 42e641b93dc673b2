//! # Packet Types and Wire Constants
//!
//! This module defines the constants of the Game Boy Printer link protocol
//! and the decoded packet representation shared by the streaming decoder and
//! the encoder.
//!
//! ## Packet Structure (host → printer)
//!
//! | Offset   | Field           | Size | Values                      |
//! |----------|-----------------|------|-----------------------------|
//! | 0–1      | Sync word       | 2    | `0x88 0x33`                 |
//! | 2        | Command         | 1    | `0x01 0x02 0x04 0x08 0x0F`  |
//! | 3        | Compression     | 1    | `0x00` or `0x01`            |
//! | 4–5      | Data length (X) | 2    | little-endian, `0..=65535`  |
//! | 6..6+X   | Payload         | X    | raw or RLE-encoded          |
//! | 6+X..8+X | Checksum        | 2    | sum of bytes 2..6+X, LE     |
//!
//! Two further byte slots follow on the wire (device ID and status), but
//! they carry meaningful values only in the printer → host direction; see
//! [`response`](crate::protocol::response).
//!
//! ## Reference
//!
//! Game Boy Programming Manual Version 1.0 (DMG-06-4216-001-A),
//! Chapter 7: Pocket Printer.

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

// ============================================================================
// WIRE CONSTANTS
// ============================================================================

/// First sync byte - every packet opens with this marker
///
/// Hex: 0x88, Binary: 0b10001000
pub const SYNC_WORD_0: u8 = 0x88;

/// Second sync byte - confirms the packet boundary after [`SYNC_WORD_0`]
///
/// Hex: 0x33, Binary: 0b00110011
pub const SYNC_WORD_1: u8 = 0x33;

/// Compression flag value for an uncompressed payload
pub const COMPRESSION_DISABLED: u8 = 0x00;

/// Compression flag value for an RLE-compressed payload
pub const COMPRESSION_ENABLED: u8 = 0x01;

/// Encode a u16 value as little-endian bytes [low, high]
///
/// The link protocol uses little-endian encoding for both the data length
/// and the checksum field.
///
/// ## Example
///
/// ```
/// use gbplink::protocol::packet::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(640), [0x80, 0x02]); // Typical Data packet length
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// COMMANDS
// ============================================================================

/// # Printer Command
///
/// The five commands a Game Boy sends to the printer. A typical print job
/// runs `Init → Data … Data → Print → Inquiry … Inquiry` (polling until the
/// busy bit clears).
///
/// | Command   | Byte   | Purpose                                      |
/// |-----------|--------|----------------------------------------------|
/// | `Init`    | `0x01` | Reset printer state, start a new job         |
/// | `Print`   | `0x02` | Print buffered data (4-byte instruction)     |
/// | `Data`    | `0x04` | Transfer tile data (typically 640 bytes)     |
/// | `Break`   | `0x08` | Forcibly stop printing                       |
/// | `Inquiry` | `0x0F` | Report current status, no side effects       |
///
/// Any other byte in the command slot is a decode error, never a silent
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Command {
    /// Reset printer state and begin a new print job
    Init = 0x01,
    /// Print the buffered tile data (payload is a 4-byte [`PrintInstruction`])
    Print = 0x02,
    /// Transfer tile data into the printer's buffer
    Data = 0x04,
    /// Forcibly stop an in-progress print
    Break = 0x08,
    /// Query printer status without side effects
    Inquiry = 0x0F,
}

impl Command {
    /// Parse a wire command byte.
    ///
    /// ## Example
    ///
    /// ```
    /// use gbplink::protocol::packet::Command;
    ///
    /// assert_eq!(Command::from_byte(0x0F), Ok(Command::Inquiry));
    /// assert!(Command::from_byte(0x03).is_err());
    /// ```
    pub fn from_byte(byte: u8) -> Result<Self, ProtocolError> {
        match byte {
            0x01 => Ok(Command::Init),
            0x02 => Ok(Command::Print),
            0x04 => Ok(Command::Data),
            0x08 => Ok(Command::Break),
            0x0F => Ok(Command::Inquiry),
            other => Err(ProtocolError::UnrecognizedCommand(other)),
        }
    }

    /// The byte this command occupies on the wire.
    #[inline]
    pub const fn to_byte(self) -> u8 {
        self as u8
    }
}

// ============================================================================
// DECODED PACKET
// ============================================================================

/// # Decoded Packet
///
/// One fully decoded host → printer protocol message, as produced by
/// [`PacketDecoder`](crate::protocol::decoder::PacketDecoder).
///
/// The payload is always the *logical* payload: if the packet was
/// RLE-compressed on the wire, `payload` holds the decompressed bytes and
/// `compressed` records that the wire form was compressed.
///
/// `checksum_valid` is computed during decoding, not transmitted. A failed
/// checksum does not suppress the packet — hardware flags the condition in
/// its status byte rather than discarding data, and consumers here do the
/// same (see [`PrinterSession`](crate::printer::PrinterSession)).
///
/// ## Length policy
///
/// The decoder does not enforce command-specific payload lengths (e.g. the
/// 4-byte Print payload); packets pass through as received and consumers
/// validate. [`PrintInstruction::from_payload`] is the validating view for
/// Print packets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    /// The command carried by this packet
    pub command: Command,

    /// True if the payload was RLE-encoded on the wire
    pub compressed: bool,

    /// Logical (decompressed) payload bytes
    pub payload: Vec<u8>,

    /// True if the transmitted checksum matched the running sum
    pub checksum_valid: bool,
}

// ============================================================================
// PRINT INSTRUCTION
// ============================================================================

/// # Print Instruction
///
/// Decoded view of a `Print` packet's 4-byte payload.
///
/// | Byte | Field     | Meaning                                            |
/// |------|-----------|----------------------------------------------------|
/// | 0    | Sheets    | Number of sheets, 0 = line feed only               |
/// | 1    | Linefeeds | High nibble: feeds before; low nibble: feeds after |
/// | 2    | Palette   | 2-bit shade mapping, `0x00` = default              |
/// | 3    | Density   | `0x00..=0x7F`; `0x80` and above means default      |
///
/// ## Example
///
/// ```
/// use gbplink::protocol::packet::PrintInstruction;
///
/// let instr = PrintInstruction::from_payload(&[0x01, 0x13, 0x00, 0x40]).unwrap();
/// assert_eq!(instr.sheets, 1);
/// assert_eq!(instr.linefeeds_before, 1);
/// assert_eq!(instr.linefeeds_after, 3);
/// assert_eq!(instr.density, 0x40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintInstruction {
    /// Number of sheets to print (0 = feed only, one feed = 2.64 mm)
    pub sheets: u8,

    /// Line feeds before printing (high nibble of payload byte 1)
    pub linefeeds_before: u8,

    /// Line feeds after printing (low nibble of payload byte 1)
    pub linefeeds_after: u8,

    /// Palette byte: four 2-bit shade entries, high bits first
    pub palette: u8,

    /// Raw density byte as transmitted
    pub density: u8,
}

impl PrintInstruction {
    /// Default print density applied when the transmitted byte is `0x80`
    /// or greater.
    pub const DEFAULT_DENSITY: u8 = 0x40;

    /// Parse the 4-byte Print payload.
    ///
    /// Returns [`ProtocolError::BadPrintInstruction`] if the payload is not
    /// exactly 4 bytes.
    pub fn from_payload(payload: &[u8]) -> Result<Self, ProtocolError> {
        let &[sheets, linefeeds, palette, density] = payload else {
            return Err(ProtocolError::BadPrintInstruction(payload.len()));
        };
        Ok(Self {
            sheets,
            linefeeds_before: linefeeds >> 4,
            linefeeds_after: linefeeds & 0x0F,
            palette,
            density,
        })
    }

    /// Re-pack into the 4 payload bytes.
    ///
    /// Nibble fields are masked to 4 bits; `from_payload` then `to_payload`
    /// reproduces the original bytes.
    pub fn to_payload(&self) -> [u8; 4] {
        let linefeeds = (self.linefeeds_before << 4) | (self.linefeeds_after & 0x0F);
        [self.sheets, linefeeds, self.palette, self.density]
    }

    /// Density the printer will actually apply: the raw byte when it is in
    /// the documented `0x00..=0x7F` range, otherwise [`Self::DEFAULT_DENSITY`].
    #[inline]
    pub fn effective_density(&self) -> u8 {
        if self.density <= 0x7F {
            self.density
        } else {
            Self::DEFAULT_DENSITY
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
