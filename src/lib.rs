//! # gbplink - Game Boy Printer Link Protocol
//!
//! gbplink models the wire protocol a Game Boy uses over its link port to
//! drive the Pocket Printer. It provides:
//!
//! - **Streaming decoder**: byte-at-a-time packet recognition with sync
//!   search, checksum validation, and inline RLE decompression
//! - **Encoder**: byte-exact packet serialization, with optional compression
//! - **RLE codec**: the printer's run-length scheme, both directions
//! - **Status handling**: the 8-flag printer status byte and response trailer
//! - **Printer session**: a minimal printer-side consumer that maintains
//!   status and buffers tile data
//!
//! The crate is pure computation: no I/O, no threads, no timing. The
//! transport (link cable sampling, emulator socket, capture file) owns the
//! bytes and feeds them in; each link gets its own decoder or session
//! instance and nothing is shared between them.
//!
//! ## Quick Start
//!
//! ```
//! use gbplink::{
//!     printer::PrinterSession,
//!     protocol::{encoder, packet::Command},
//! };
//!
//! // Host side: a minimal print job
//! let mut wire = Vec::new();
//! wire.extend(encoder::encode(Command::Init, false, &[]).unwrap());
//! wire.extend(encoder::encode(Command::Data, true, &[0x00; 640]).unwrap());
//! wire.extend(encoder::encode(Command::Data, false, &[]).unwrap());
//! wire.extend(encoder::encode(Command::Print, false, &[0x01, 0x13, 0x00, 0x40]).unwrap());
//!
//! // Printer side: consume the stream, answering each packet
//! let mut session = PrinterSession::new();
//! for byte in wire {
//!     if let Some([device_id, status]) = session.handle_byte(byte) {
//!         assert_eq!(device_id, 0x81);
//!         let _ = status; // clocked back to the host
//!     }
//! }
//!
//! assert!(session.status().printer_busy);
//! assert_eq!(session.tile_data().len(), 640);
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Packet codec, RLE, checksum, status byte |
//! | [`printer`] | Printer-side session and hardware configuration |
//! | [`error`] | Error types |
//!
//! ## Protocol Reference
//!
//! Game Boy Programming Manual Version 1.0 (DMG-06-4216-001-A), Chapter 7:
//! Pocket Printer. Signal-level details (8 kHz clock, CPOL=1/CPHA=1) are out
//! of scope here; this crate starts where bytes exist.

pub mod error;
pub mod printer;
pub mod protocol;

// Re-exports for convenience
pub use error::ProtocolError;
pub use printer::{PrinterConfig, PrinterSession};
pub use protocol::{Command, DecodeEvent, Packet, PacketDecoder, PrintInstruction, PrinterStatus};
