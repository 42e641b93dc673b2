//! # Printer Status Byte
//!
//! The printer reports its condition as a single byte of eight independent
//! flags, returned as the last byte of every response (see
//! [`response`](crate::protocol::response)).
//!
//! ## Bit Layout
//!
//! | Bit | Name   | Meaning                                    |
//! |-----|--------|--------------------------------------------|
//! | 7   | LOWBAT | Battery too low                            |
//! | 6   | ER2    | Other error                                |
//! | 5   | ER1    | Paper jam                                  |
//! | 4   | ER0    | Packet error (e.g. program failure)        |
//! | 3   | UNTRAN | Unprocessed data in the buffer             |
//! | 2   | FULL   | Image data buffer full                     |
//! | 1   | BUSY   | Printer busy                               |
//! | 0   | SUM    | Checksum error                             |
//!
//! Every byte value is a valid status — there are no reserved bits — so
//! [`PrinterStatus::from_byte`] and [`PrinterStatus::to_byte`] form an exact
//! bijection.

use serde::{Deserialize, Serialize};

// ============================================================================
// BIT POSITIONS
// ============================================================================

/// Battery too low
pub const STATUS_BIT_LOWBAT: u8 = 7;
/// Other error
pub const STATUS_BIT_ER2: u8 = 6;
/// Paper jam
pub const STATUS_BIT_ER1: u8 = 5;
/// Packet error
pub const STATUS_BIT_ER0: u8 = 4;
/// Unprocessed data
pub const STATUS_BIT_UNTRAN: u8 = 3;
/// Image data buffer full
pub const STATUS_BIT_FULL: u8 = 2;
/// Printer busy
pub const STATUS_BIT_BUSY: u8 = 1;
/// Checksum error
pub const STATUS_BIT_SUM: u8 = 0;

// ============================================================================
// STATUS BITFIELD
// ============================================================================

/// # Printer Status
///
/// Named view of the printer's status byte. The library only converts
/// between this struct and the wire byte; which flags to raise is the
/// printer-side consumer's business (see
/// [`PrinterSession`](crate::printer::PrinterSession)).
///
/// ## Example
///
/// ```
/// use gbplink::protocol::status::PrinterStatus;
///
/// let mut status = PrinterStatus::default();
/// status.printer_busy = true;
/// status.unprocessed_data = true;
/// assert_eq!(status.to_byte(), 0b0000_1010);
///
/// let back = PrinterStatus::from_byte(0b0000_1010);
/// assert_eq!(back, status);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrinterStatus {
    /// Battery too low (bit 7)
    pub low_battery: bool,
    /// Other error (bit 6)
    pub other_error: bool,
    /// Paper jam (bit 5)
    pub paper_jam: bool,
    /// Packet error (bit 4)
    pub packet_error: bool,
    /// Unprocessed data in the buffer (bit 3)
    pub unprocessed_data: bool,
    /// Image data buffer full (bit 2)
    pub print_buffer_full: bool,
    /// Printer busy (bit 1)
    pub printer_busy: bool,
    /// Checksum error on the last packet (bit 0)
    pub checksum_error: bool,
}

impl PrinterStatus {
    /// Pack the flags into the wire status byte.
    pub fn to_byte(self) -> u8 {
        (u8::from(self.low_battery) << STATUS_BIT_LOWBAT)
            | (u8::from(self.other_error) << STATUS_BIT_ER2)
            | (u8::from(self.paper_jam) << STATUS_BIT_ER1)
            | (u8::from(self.packet_error) << STATUS_BIT_ER0)
            | (u8::from(self.unprocessed_data) << STATUS_BIT_UNTRAN)
            | (u8::from(self.print_buffer_full) << STATUS_BIT_FULL)
            | (u8::from(self.printer_busy) << STATUS_BIT_BUSY)
            | (u8::from(self.checksum_error) << STATUS_BIT_SUM)
    }

    /// Unpack a wire status byte into named flags.
    pub fn from_byte(byte: u8) -> Self {
        let bit = |pos: u8| byte & (1 << pos) != 0;
        Self {
            low_battery: bit(STATUS_BIT_LOWBAT),
            other_error: bit(STATUS_BIT_ER2),
            paper_jam: bit(STATUS_BIT_ER1),
            packet_error: bit(STATUS_BIT_ER0),
            unprocessed_data: bit(STATUS_BIT_UNTRAN),
            print_buffer_full: bit(STATUS_BIT_FULL),
            printer_busy: bit(STATUS_BIT_BUSY),
            checksum_error: bit(STATUS_BIT_SUM),
        }
    }

    /// True if any error flag (LOWBAT, ER2, ER1, ER0, SUM) is raised.
    #[inline]
    pub fn has_error(self) -> bool {
        self.low_battery
            || self.other_error
            || self.paper_jam
            || self.packet_error
            || self.checksum_error
    }
}

// ============================================================================
// TESTS
// ============================================================================
