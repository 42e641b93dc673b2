//! # Packet Encoder
//!
//! Serializes a command + payload back into the exact byte sequence a Game
//! Boy would put on the wire, for driving a printer (real or emulated) or
//! for building test captures.

use std::borrow::Cow;

use crate::error::ProtocolError;
use crate::protocol::checksum;
use crate::protocol::packet::{Command, SYNC_WORD_0, SYNC_WORD_1, u16_le};
use crate::protocol::rle;

/// # Encode a Packet
///
/// Emits sync word, command, compression flag, little-endian wire length,
/// wire payload, and the little-endian checksum over everything between the
/// sync word and the checksum itself.
///
/// With `compress` set, the payload is run through [`rle::compress`] first
/// and the length field describes the *compressed* size, exactly as the
/// decoder expects.
///
/// Fails with [`ProtocolError::PayloadTooLarge`] when the wire payload does
/// not fit the 16-bit length field. Note that RLE can expand incompressible
/// data slightly, so a payload just under 65536 bytes may fit uncompressed
/// yet fail with `compress` set.
///
/// ## Example
///
/// ```
/// use gbplink::protocol::encoder::encode;
/// use gbplink::protocol::packet::Command;
///
/// let wire = encode(Command::Inquiry, false, &[]).unwrap();
/// assert_eq!(wire, vec![0x88, 0x33, 0x0F, 0x00, 0x00, 0x00, 0x0F, 0x00]);
/// ```
pub fn encode(command: Command, compress: bool, payload: &[u8]) -> Result<Vec<u8>, ProtocolError> {
    let wire_payload: Cow<'_, [u8]> = if compress {
        Cow::Owned(rle::compress(payload))
    } else {
        Cow::Borrowed(payload)
    };
    if wire_payload.len() > usize::from(u16::MAX) {
        return Err(ProtocolError::PayloadTooLarge(wire_payload.len()));
    }

    let mut wire = Vec::with_capacity(8 + wire_payload.len());
    wire.push(SYNC_WORD_0);
    wire.push(SYNC_WORD_1);
    wire.push(command.to_byte());
    wire.push(u8::from(compress));
    wire.extend_from_slice(&u16_le(wire_payload.len() as u16));
    wire.extend_from_slice(&wire_payload);

    // Checksum covers command through end of payload, never the sync word
    let sum = checksum::sum(&wire[2..]);
    wire.extend_from_slice(&u16_le(sum));
    Ok(wire)
}

// ============================================================================
// TESTS
// ============================================================================
