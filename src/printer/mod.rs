//! # Printer Session
//!
//! This module is the printer-side consumer of the protocol stack: it wires
//! a [`PacketDecoder`] to a [`PrinterStatus`] and a tile buffer, mirroring
//! what Pocket Printer emulator firmware does with each decoded packet.
//!
//! ## Modules
//!
//! - [`config`]: Printer hardware specifications
//!
//! ## Packet Handling
//!
//! | Command   | Effect on session                                          |
//! |-----------|------------------------------------------------------------|
//! | `Init`    | Clears buffer, instruction, and operational status flags   |
//! | `Data`    | Appends payload to the buffer, raises UNTRAN (FULL at cap, |
//! |           | ER0 on overflow)                                           |
//! | `Print`   | Latches the print instruction, raises BUSY                 |
//! | `Break`   | Aborts: clears buffer and operational flags                |
//! | `Inquiry` | No state change, just reports                              |
//!
//! Physical conditions raised through
//! [`status_mut`](PrinterSession::status_mut) — low battery, paper jam,
//! other error — survive `Init`; the host cannot fix them by resetting the
//! job.
//!
//! A checksum mismatch on any packet raises SUM for that packet's response;
//! the payload is still accepted, as on hardware. Structural decode errors
//! (garbled command byte, bad RLE) raise the packet-error bit and produce no
//! response — a confused printer leaves the line idle and the host retries.
//!
//! ## Example
//!
//! ```
//! use gbplink::printer::PrinterSession;
//! use gbplink::protocol::{encoder, packet::Command};
//!
//! let mut session = PrinterSession::new();
//!
//! let mut wire = encoder::encode(Command::Init, false, &[]).unwrap();
//! wire.extend(encoder::encode(Command::Data, false, &[0x00; 640]).unwrap());
//! wire.extend(encoder::encode(Command::Print, false, &[0x01, 0x13, 0x00, 0x40]).unwrap());
//!
//! let mut trailers = Vec::new();
//! for byte in wire {
//!     if let Some(trailer) = session.handle_byte(byte) {
//!         trailers.push(trailer);
//!     }
//! }
//!
//! assert_eq!(trailers.len(), 3);
//! assert_eq!(trailers[2][0], 0x81); // device ID on every response
//! assert!(session.status().printer_busy);
//! assert_eq!(session.tile_data().len(), 640);
//! ```

pub mod config;

pub use config::PrinterConfig;

use crate::protocol::decoder::{DecodeEvent, PacketDecoder};
use crate::protocol::packet::{Command, Packet, PrintInstruction};
use crate::protocol::response;
use crate::protocol::status::PrinterStatus;

/// # Printer Session
///
/// One printer on one link: decoder state, status flags, buffered tile
/// data, and the most recent print instruction. Sessions share nothing; a
/// host serving several links owns one session per link.
#[derive(Debug, Clone, Default)]
pub struct PrinterSession {
    decoder: PacketDecoder,
    status: PrinterStatus,
    buffer: Vec<u8>,
    instruction: Option<PrintInstruction>,
    config: PrinterConfig,
}

impl PrinterSession {
    /// Session for the standard Pocket Printer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with explicit hardware parameters.
    pub fn with_config(config: PrinterConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Feed one byte from the link.
    ///
    /// Returns the two-byte response trailer when this byte completes a
    /// packet, `None` otherwise.
    pub fn handle_byte(&mut self, byte: u8) -> Option<[u8; 2]> {
        match self.decoder.feed(byte) {
            DecodeEvent::NeedMore => None,
            DecodeEvent::Error(_) => {
                self.status.packet_error = true;
                None
            }
            DecodeEvent::Packet(packet) => Some(self.handle_packet(&packet)),
        }
    }

    /// Apply one decoded packet to the session and produce the response
    /// trailer.
    pub fn handle_packet(&mut self, packet: &Packet) -> [u8; 2] {
        match packet.command {
            Command::Init => {
                self.buffer.clear();
                self.instruction = None;
                // Only the operational flags reset; physical conditions the
                // host cannot fix (low battery, paper jam, other error)
                // stay raised until the embedder clears them
                self.status.packet_error = false;
                self.status.unprocessed_data = false;
                self.status.print_buffer_full = false;
                self.status.printer_busy = false;
                self.status.checksum_error = false;
            }
            Command::Data => self.accept_data(&packet.payload),
            Command::Print => match PrintInstruction::from_payload(&packet.payload) {
                Ok(instruction) => {
                    self.instruction = Some(instruction);
                    self.status.printer_busy = true;
                }
                Err(_) => self.status.packet_error = true,
            },
            Command::Break => {
                self.buffer.clear();
                self.instruction = None;
                self.status.printer_busy = false;
                self.status.unprocessed_data = false;
                self.status.print_buffer_full = false;
            }
            Command::Inquiry => {}
        }
        // SUM reflects the packet being acknowledged right now
        self.status.checksum_error = !packet.checksum_valid;
        response::trailer(self.status)
    }

    /// Append a Data payload, truncating at the buffer capacity.
    ///
    /// An empty Data packet marks the end of a transfer and changes nothing.
    /// A payload that does not fit is a host-side protocol violation: the
    /// excess is dropped and the packet-error bit is raised alongside FULL.
    fn accept_data(&mut self, payload: &[u8]) {
        if payload.is_empty() {
            return;
        }
        let room = self.config.buffer_capacity - self.buffer.len();
        let taken = payload.len().min(room);
        self.buffer.extend_from_slice(&payload[..taken]);
        self.status.unprocessed_data = true;
        if payload.len() > room {
            self.status.packet_error = true;
        }
        if self.buffer.len() == self.config.buffer_capacity {
            self.status.print_buffer_full = true;
        }
    }

    /// Current status flags.
    #[inline]
    pub fn status(&self) -> PrinterStatus {
        self.status
    }

    /// Mutable status access, for raising conditions the protocol cannot
    /// see (low battery, paper jam).
    #[inline]
    pub fn status_mut(&mut self) -> &mut PrinterStatus {
        &mut self.status
    }

    /// Tile bytes buffered so far.
    #[inline]
    pub fn tile_data(&self) -> &[u8] {
        &self.buffer
    }

    /// The latched print instruction, if a Print packet has arrived.
    #[inline]
    pub fn print_instruction(&self) -> Option<PrintInstruction> {
        self.instruction
    }

    /// Hardware parameters of this session.
    #[inline]
    pub fn config(&self) -> PrinterConfig {
        self.config
    }

    /// Mark the physical print as finished: clears BUSY, UNTRAN, FULL and
    /// the tile buffer. Called by whatever renders the buffered data.
    pub fn finish_print(&mut self) {
        self.buffer.clear();
        self.status.printer_busy = false;
        self.status.unprocessed_data = false;
        self.status.print_buffer_full = false;
    }
}

// ============================================================================
// TESTS
// ============================================================================
