//! # Wire Tests
//!
//! End-to-end tests over the protocol stack: encoded packets fed back
//! through the streaming decoder, resynchronization over noisy captures,
//! compression round-trips, and a full printer session.
//!
//! ## Test Coverage
//!
//! - **Round-trips**: every command, compressed and not, over assorted
//!   payload shapes
//! - **Corruption**: single flipped bytes must surface as checksum failures,
//!   never lost packets
//! - **Arrival patterns**: byte-at-a-time and whole-buffer decoding must
//!   agree exactly
//! - **Session**: the Init → Data → Print → Inquiry sequence a real game
//!   performs

use pretty_assertions::assert_eq;

use gbplink::protocol::{
    DecodeEvent, PacketDecoder,
    encoder,
    packet::{Command, Packet},
    rle,
};
use gbplink::{PrinterSession, PrinterStatus, ProtocolError};

const ALL_COMMANDS: [Command; 5] = [
    Command::Init,
    Command::Print,
    Command::Data,
    Command::Break,
    Command::Inquiry,
];

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Decode a buffer in one pass, expecting exactly one packet and no errors.
fn decode_one(wire: &[u8]) -> Packet {
    let events = PacketDecoder::new().feed_slice(wire);
    assert_eq!(events.len(), 1, "expected one event, got {events:?}");
    match events.into_iter().next() {
        Some(DecodeEvent::Packet(packet)) => packet,
        other => panic!("expected a packet, got {other:?}"),
    }
}

/// A payload that mixes compressible stretches with noise.
fn mixed_payload(len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| match (i / 13) % 3 {
            0 => 0x00,
            1 => 0xAA,
            _ => (i.wrapping_mul(31) % 251) as u8,
        })
        .collect()
}

// ============================================================================
// ENCODE / DECODE ROUND-TRIPS
// ============================================================================

#[test]
fn round_trip_every_command() {
    for command in ALL_COMMANDS {
        for compress in [false, true] {
            for payload in [vec![], vec![0x42], mixed_payload(640)] {
                let wire = encoder::encode(command, compress, &payload).unwrap();
                let packet = decode_one(&wire);
                assert_eq!(packet.command, command);
                assert_eq!(packet.compressed, compress);
                assert_eq!(packet.payload, payload);
                assert!(packet.checksum_valid);
            }
        }
    }
}

#[test]
fn compressed_wire_length_matches_compressed_size() {
    let payload = vec![0x00; 640];
    let wire = encoder::encode(Command::Data, true, &payload).unwrap();
    let compressed = rle::compress(&payload);
    let declared = u16::from_le_bytes([wire[4], wire[5]]) as usize;
    assert_eq!(declared, compressed.len());
    assert_eq!(wire.len(), 8 + compressed.len());
}

#[test]
fn corrupting_one_payload_byte_flags_checksum() {
    let payload = mixed_payload(64);
    let wire = encoder::encode(Command::Data, false, &payload).unwrap();
    // Flip each payload byte in turn; every variant must still decode to a
    // packet, just with the checksum flagged
    for i in 6..6 + payload.len() {
        let mut corrupted = wire.clone();
        corrupted[i] ^= 0x01;
        let packet = decode_one(&corrupted);
        assert!(!packet.checksum_valid, "offset {i} not flagged");
        assert_eq!(packet.command, Command::Data);
    }
}

#[test]
fn byte_at_a_time_equals_whole_buffer() {
    let mut wire = Vec::new();
    wire.extend(encoder::encode(Command::Init, false, &[]).unwrap());
    wire.extend(encoder::encode(Command::Data, true, &mixed_payload(640)).unwrap());
    wire.extend([0xFF, 0x13]); // line noise between packets
    wire.extend(encoder::encode(Command::Inquiry, false, &[]).unwrap());

    let batch_events = PacketDecoder::new().feed_slice(&wire);

    let mut slow = PacketDecoder::new();
    let mut slow_events = Vec::new();
    for &byte in &wire {
        match slow.feed(byte) {
            DecodeEvent::NeedMore => {}
            event => slow_events.push(event),
        }
    }

    assert_eq!(slow_events, batch_events);
    assert_eq!(batch_events.len(), 3);
}

#[test]
fn split_anywhere_still_decodes() {
    let wire = encoder::encode(Command::Data, true, &mixed_payload(100)).unwrap();
    for split in 0..wire.len() {
        let mut decoder = PacketDecoder::new();
        let mut events = decoder.feed_slice(&wire[..split]);
        events.extend(decoder.feed_slice(&wire[split..]));
        assert_eq!(events.len(), 1, "split at {split}");
        assert!(matches!(&events[0], DecodeEvent::Packet(p) if p.checksum_valid));
    }
}

// ============================================================================
// RLE PROPERTIES
// ============================================================================

#[test]
fn rle_round_trips_all_lengths() {
    for len in 0..=1000 {
        let payload = mixed_payload(len);
        let wire = rle::compress(&payload);
        assert_eq!(rle::decompress(&wire).unwrap(), payload, "len {len}");
    }
}

#[test]
fn rle_compresses_tile_clears() {
    // A blank 640-byte Data payload must shrink dramatically
    let blank = vec![0x00; 640];
    let wire = rle::compress(&blank);
    assert!(wire.len() <= 10, "blank payload took {} bytes", wire.len());
}

// ============================================================================
// STATUS BYTE PROPERTIES
// ============================================================================

#[test]
fn status_byte_bijection() {
    for byte in 0..=255u8 {
        assert_eq!(PrinterStatus::from_byte(byte).to_byte(), byte);
    }
}

// ============================================================================
// PRINTER SESSION
// ============================================================================

#[test]
fn full_print_job_session() {
    let mut session = PrinterSession::new();
    let tiles = mixed_payload(640);

    let mut wire = Vec::new();
    wire.extend(encoder::encode(Command::Init, false, &[]).unwrap());
    wire.extend(encoder::encode(Command::Data, true, &tiles).unwrap());
    wire.extend(encoder::encode(Command::Data, false, &[]).unwrap());
    wire.extend(encoder::encode(Command::Print, false, &[0x01, 0x13, 0x00, 0x40]).unwrap());
    wire.extend(encoder::encode(Command::Inquiry, false, &[]).unwrap());

    let trailers: Vec<[u8; 2]> = wire
        .iter()
        .filter_map(|&byte| session.handle_byte(byte))
        .collect();

    assert_eq!(trailers.len(), 5);
    assert!(trailers.iter().all(|t| t[0] == 0x81));

    // After Init: all clear. After the tile Data packet: UNTRAN
    assert_eq!(trailers[0][1], 0x00);
    assert!(PrinterStatus::from_byte(trailers[1][1]).unprocessed_data);

    // After Print and on the following Inquiry: BUSY
    assert!(PrinterStatus::from_byte(trailers[3][1]).printer_busy);
    assert!(PrinterStatus::from_byte(trailers[4][1]).printer_busy);

    assert_eq!(session.tile_data(), tiles.as_slice());
    assert_eq!(session.print_instruction().unwrap().sheets, 1);

    session.finish_print();
    assert!(!session.status().printer_busy);
}

#[test]
fn overflowing_data_raises_packet_error() {
    let mut session = PrinterSession::new();
    let packet = encoder::encode(Command::Data, false, &mixed_payload(640)).unwrap();

    // 13 standard Data packets overshoot the 8 KiB buffer on the last one
    let mut last_trailer = [0u8; 2];
    for _ in 0..13 {
        for &byte in &packet {
            if let Some(trailer) = session.handle_byte(byte) {
                last_trailer = trailer;
            }
        }
    }

    let status = PrinterStatus::from_byte(last_trailer[1]);
    assert!(status.print_buffer_full);
    assert!(status.packet_error);
    assert_eq!(
        session.tile_data().len(),
        session.config().buffer_capacity
    );
}

#[test]
fn corrupted_packet_raises_sum_bit() {
    let mut session = PrinterSession::new();
    let mut wire = encoder::encode(Command::Data, false, &[0x55; 16]).unwrap();
    wire[8] ^= 0x80;

    let trailers: Vec<[u8; 2]> = wire
        .iter()
        .filter_map(|&byte| session.handle_byte(byte))
        .collect();
    assert_eq!(trailers.len(), 1);
    assert!(PrinterStatus::from_byte(trailers[0][1]).checksum_error);
}

// ============================================================================
// ERROR SURFACE
// ============================================================================

#[test]
fn oversized_payload_rejected_at_encode() {
    let payload = vec![0x12u8; 70_000];
    // Incompressible-free payload of one value compresses fine...
    assert!(encoder::encode(Command::Data, true, &payload).is_ok());
    // ...but cannot ship uncompressed
    assert_eq!(
        encoder::encode(Command::Data, false, &payload),
        Err(ProtocolError::PayloadTooLarge(70_000))
    );
}

// ============================================================================
// SERIALIZATION
// ============================================================================

#[test]
fn decoded_packet_serializes_for_capture_dumps() {
    let wire = encoder::encode(Command::Print, false, &[0x01, 0x13, 0x00, 0x40]).unwrap();
    let packet = decode_one(&wire);
    let json = serde_json::to_value(&packet).unwrap();
    assert_eq!(json["command"], "Print");
    assert_eq!(json["checksum_valid"], true);
    assert_eq!(json["payload"][3], 0x40);
}
