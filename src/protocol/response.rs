//! # Response Trailer
//!
//! The printer answers every packet by clocking out two bytes in the slots
//! that follow the checksum: its device ID, then its status byte. These
//! belong to the printer → host direction only — the packet decoder never
//! sees them as packet content.

use crate::protocol::status::PrinterStatus;

/// Device ID the Pocket Printer reports: MSB always set, low 7 bits are the
/// device number (1).
pub const DEVICE_ID: u8 = 0x81;

/// The two response bytes appended after a packet's acknowledgement.
///
/// ## Example
///
/// ```
/// use gbplink::protocol::response;
/// use gbplink::protocol::status::PrinterStatus;
///
/// let mut status = PrinterStatus::default();
/// status.printer_busy = true;
/// assert_eq!(response::trailer(status), [0x81, 0x02]);
/// ```
#[inline]
pub fn trailer(status: PrinterStatus) -> [u8; 2] {
    [DEVICE_ID, status.to_byte()]
}
