//! # Printer Configuration
//!
//! Hardware facts about the supported printer, kept in one place so the
//! session logic never hard-codes magic numbers.
//!
//! | Model | Device ID | Buffer | Typical Data packet |
//! |-------|-----------|--------|---------------------|
//! | Game Boy Pocket Printer (MGB-007) | `0x81` | 8 KiB | 640 bytes |

/// # Printer Configuration
///
/// Defines the characteristics of a printer on the link.
///
/// A Data packet normally carries two rows of 20 tiles (2 × 20 × 16 = 640
/// bytes); the printer buffers tile data until a Print packet arrives.
#[derive(Debug, Clone, Copy)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Device ID byte reported in the response trailer
    pub device_id: u8,

    /// Tile data buffer capacity in bytes
    pub buffer_capacity: usize,

    /// Payload length of a standard Data packet
    pub data_packet_len: usize,

    /// Bytes per 8×8 tile (2 bits per pixel, 2 bytes per row)
    pub tile_bytes: usize,
}

impl PrinterConfig {
    /// # Game Boy Pocket Printer (MGB-007)
    ///
    /// The only documented device ID. Prints 160 dots per line on 38 mm
    /// thermal paper; image data arrives as 2bpp tiles, 20 tiles per row.
    pub const POCKET_PRINTER: Self = Self {
        name: "Game Boy Pocket Printer",
        device_id: 0x81,
        buffer_capacity: 0x2000,
        data_packet_len: 640,
        tile_bytes: 16,
    };

    /// Number of whole tiles the buffer can hold.
    #[inline]
    pub fn buffer_tiles(&self) -> usize {
        self.buffer_capacity / self.tile_bytes
    }

    /// Tile rows (20 tiles each) carried by one standard Data packet.
    #[inline]
    pub fn rows_per_data_packet(&self) -> usize {
        self.data_packet_len / (self.tile_bytes * 20)
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::POCKET_PRINTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pocket_printer_geometry() {
        let config = PrinterConfig::POCKET_PRINTER;
        assert_eq!(config.buffer_tiles(), 512);
        assert_eq!(config.rows_per_data_packet(), 2);
        assert_eq!(config.device_id, 0x81);
    }
}
