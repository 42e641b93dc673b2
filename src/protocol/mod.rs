//! # Game Boy Printer Link Protocol
//!
//! This module implements the synchronous-serial packet protocol a Game Boy
//! uses to drive the Pocket Printer.
//!
//! ## Module Structure
//!
//! - [`packet`]: Wire constants, [`Command`](packet::Command),
//!   [`Packet`](packet::Packet), and the Print instruction payload
//! - [`decoder`]: Streaming host → printer packet decoder
//! - [`encoder`]: Packet serialization back to wire bytes
//! - [`rle`]: The printer's run-length compression, both directions
//! - [`checksum`]: 16-bit wraparound packet checksum
//! - [`status`]: The printer status bitfield
//! - [`response`]: Device ID and the two-byte response trailer
//!
//! ## Usage Example
//!
//! ```
//! use gbplink::protocol::{decoder::{DecodeEvent, PacketDecoder}, encoder, packet::Command};
//!
//! // Host side: build a Data packet with compressed tile bytes
//! let tiles = vec![0x00; 640];
//! let wire = encoder::encode(Command::Data, true, &tiles).unwrap();
//!
//! // Printer side: decode it back off the link
//! let mut decoder = PacketDecoder::new();
//! let events = decoder.feed_slice(&wire);
//! let DecodeEvent::Packet(packet) = &events[0] else { unreachable!() };
//! assert_eq!(packet.payload, tiles);
//! assert!(packet.checksum_valid);
//! ```
//!
//! ## Protocol Reference
//!
//! Game Boy Programming Manual Version 1.0 (DMG-06-4216-001-A), Chapter 7.

pub mod checksum;
pub mod decoder;
pub mod encoder;
pub mod packet;
pub mod response;
pub mod rle;
pub mod status;

pub use decoder::{DecodeEvent, PacketDecoder};
pub use packet::{Command, Packet, PrintInstruction};
pub use status::PrinterStatus;
