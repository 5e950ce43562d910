//! Tests for packet building and parsing against reference vectors

mod common;

use common::*;

#[test]
fn test_build_reference_packet() {
    let packet = build_packet(TEST_DEVICE_ID, "1", TEST_MESSAGE, &test_key())
        .expect("failed to build packet");
    assert_eq!(packet, TEST_PACKET);
    assert_eq!(packet.len(), 48);
}

#[test]
fn test_parse_reference_packet() {
    let parsed = parse_packet(TEST_PACKET, &test_key()).expect("failed to parse packet");
    assert_eq!(
        parsed,
        ParsedPacket {
            device_id: TEST_DEVICE_ID.to_string(),
            version: "1".to_string(),
            message: TEST_MESSAGE.to_string(),
        }
    );
}

#[test]
fn test_build_parse_roundtrip() {
    let key = test_key();
    let packet = build_packet(TEST_DEVICE_ID, "2", "status: battery=87%", &key).unwrap();
    let parsed = parse_packet(&packet, &key).unwrap();
    assert_eq!(parsed.device_id, TEST_DEVICE_ID);
    assert_eq!(parsed.version, "2");
    assert_eq!(parsed.message, "status: battery=87%");
}

#[test]
fn test_short_message_packet() {
    let key = test_key();
    let packet = build_packet(TEST_DEVICE_ID, "1", "Hi", &key).unwrap();
    assert_eq!(packet, "WIM1IME_345F45AACBCC1F00C06B");
    assert_eq!(parse_packet(&packet, &key).unwrap().message, "Hi");
}

#[test]
fn test_checksum_compared_case_insensitively() {
    let (body, checksum) = TEST_PACKET.split_at(TEST_PACKET.len() - 4);
    let lowercased = format!("{body}{}", checksum.to_ascii_lowercase());
    let parsed = parse_packet(&lowercased, &test_key()).expect("lowercase checksum rejected");
    assert_eq!(parsed.message, TEST_MESSAGE);
}

#[test]
fn test_empty_payload_packet_is_below_minimum() {
    // The firmware's `len < 26` check implies at least one payload byte, so
    // a packet around an empty message builds fine but never parses.
    let key = test_key();
    let packet = build_packet(TEST_DEVICE_ID, "1", "", &key).unwrap();
    assert_eq!(packet.len(), 24);
    assert_eq!(
        parse_packet(&packet, &key),
        Err(WimError::TooShort {
            actual: 24,
            minimum: MIN_PACKET_LEN
        })
    );
}

#[test]
fn test_strict_build_accepts_exact_fields() {
    let key = test_key();
    let strict = build_packet_strict(TEST_DEVICE_ID, "1", TEST_MESSAGE, &key).unwrap();
    assert_eq!(strict, TEST_PACKET);
}

#[test]
fn test_strict_build_rejects_wrong_device_id_length() {
    match build_packet_strict("SHORT_ID", "1", TEST_MESSAGE, &test_key()) {
        Err(WimError::InvalidField(msg)) => assert!(msg.contains("device id")),
        other => panic!("expected InvalidField, got {other:?}"),
    }
}

#[test]
fn test_strict_build_rejects_wrong_version_length() {
    match build_packet_strict(TEST_DEVICE_ID, "10", TEST_MESSAGE, &test_key()) {
        Err(WimError::InvalidField(msg)) => assert!(msg.contains("version")),
        other => panic!("expected InvalidField, got {other:?}"),
    }
}

#[test]
fn test_lenient_build_passes_fields_through() {
    // Reference parity: without strict mode the framer trusts the caller,
    // and a wrong-length device id simply shifts the field boundaries.
    let key = test_key();
    let packet = build_packet("TOO_SHORT", "1", TEST_MESSAGE, &key).unwrap();
    assert!(packet.starts_with("WIM1TOO_SHORT"));
}

#[test]
fn test_parsed_packet_serializes_to_json() {
    let parsed = parse_packet(TEST_PACKET, &test_key()).unwrap();
    let json = serde_json::to_string(&parsed).unwrap();
    assert!(json.contains("\"device_id\":\"IME_345F45AACBCC\""));
    let back: ParsedPacket = serde_json::from_str(&json).unwrap();
    assert_eq!(back, parsed);
}
