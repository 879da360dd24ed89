//! Binary serialization and deserialization of parsed rulesets.
//!
//! This module provides a stable binary format for persisting parsed
//! [`Robots`](crate::Robots) values, so a crawler can cache a ruleset
//! across runs without re-parsing. The format consists of a 32-byte fixed
//! header followed by a bincode-encoded payload.
//!
//! ## Wire Format
//!
//! ```text
//! Offset  Size  Field
//! 0       4     Magic bytes: b"RBOT"
//! 4       2     Format version (u16, little-endian)
//! 6       2     Engine version (u16, little-endian)
//! 8       4     Flags (u32, reserved)
//! 12      4     Payload length in bytes (u32, little-endian)
//! 16      16    BLAKE3 hash of the payload (truncated to 16 bytes)
//! 32..    var   Bincode-encoded payload
//! ```
//!
//! ## Versioning
//!
//! The format version in the header must match exactly. If it does not,
//! deserialization fails immediately with [`DeserializeError::IncompatibleVersion`].
//! The engine version is informational only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{DirectiveKind, Robots, Rule, RuleGroup};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const MAGIC: &[u8; 4] = b"RBOT";
const FORMAT_VERSION: u16 = 1;
const ENGINE_VERSION: u16 = 1;
const HEADER_SIZE: usize = 32;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur when serializing a [`Robots`](crate::Robots) to bytes.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("failed to encode ruleset: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("I/O error during serialization: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when deserializing a [`Robots`](crate::Robots) from bytes.
#[derive(Debug, Error)]
pub enum DeserializeError {
    #[error("not a robotrules binary: invalid magic bytes")]
    BadMagic,

    #[error("incompatible format version: blob is v{blob}, engine supports v{supported}")]
    IncompatibleVersion { blob: u16, supported: u16 },

    #[error("integrity check failed: BLAKE3 checksum mismatch")]
    ChecksumMismatch,

    #[error("payload length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: u32, actual: usize },

    #[error("failed to decode payload: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("I/O error during deserialization: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Serialized type hierarchy
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
struct SerializedRobots {
    metadata: RobotsMetadata,
    groups: Vec<SerializedGroup>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RobotsMetadata {
    group_count: usize,
    rule_count: usize,
    source_digest: Option<[u8; 32]>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializedGroup {
    global_agent: bool,
    specific_agents: Vec<String>,
    rules: Vec<SerializedRule>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializedRule {
    kind: SerializedKind,
    value: String,
    line: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
enum SerializedKind {
    Allow,
    Disallow,
    Sitemap,
}

// ---------------------------------------------------------------------------
// Kind conversion
// ---------------------------------------------------------------------------

fn serialize_kind(kind: DirectiveKind) -> SerializedKind {
    match kind {
        DirectiveKind::Allow => SerializedKind::Allow,
        DirectiveKind::Disallow => SerializedKind::Disallow,
        DirectiveKind::Sitemap => SerializedKind::Sitemap,
    }
}

fn deserialize_kind(kind: SerializedKind) -> DirectiveKind {
    match kind {
        SerializedKind::Allow => DirectiveKind::Allow,
        SerializedKind::Disallow => DirectiveKind::Disallow,
        SerializedKind::Sitemap => DirectiveKind::Sitemap,
    }
}

// ---------------------------------------------------------------------------
// Robots <-> SerializedRobots
// ---------------------------------------------------------------------------

fn robots_to_serialized(robots: &Robots, source_text: Option<&str>) -> SerializedRobots {
    let source_digest = source_text.map(|s| *blake3::hash(s.as_bytes()).as_bytes());

    let groups: Vec<SerializedGroup> = robots
        .groups
        .iter()
        .map(|group| SerializedGroup {
            global_agent: group.global_agent,
            specific_agents: group.specific_agents.clone(),
            rules: group
                .rules
                .iter()
                .map(|rule| SerializedRule {
                    kind: serialize_kind(rule.kind),
                    value: rule.value.clone(),
                    line: rule.line,
                })
                .collect(),
        })
        .collect();

    let rule_count = groups.iter().map(|g| g.rules.len()).sum();

    SerializedRobots {
        metadata: RobotsMetadata {
            group_count: groups.len(),
            rule_count,
            source_digest,
        },
        groups,
    }
}

fn serialized_to_robots(ser: SerializedRobots) -> Result<Robots, DeserializeError> {
    validate(&ser)?;

    let groups: Vec<RuleGroup> = ser
        .groups
        .into_iter()
        .map(|group| RuleGroup {
            global_agent: group.global_agent,
            specific_agents: group.specific_agents,
            rules: group
                .rules
                .into_iter()
                .map(|rule| Rule {
                    kind: deserialize_kind(rule.kind),
                    value: rule.value,
                    line: rule.line,
                })
                .collect(),
        })
        .collect();

    Ok(Robots::from_groups(groups))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(ser: &SerializedRobots) -> Result<(), DeserializeError> {
    if ser.metadata.group_count != ser.groups.len() {
        return Err(DeserializeError::Validation(format!(
            "metadata says {} groups but payload has {}",
            ser.metadata.group_count,
            ser.groups.len()
        )));
    }

    let rule_count: usize = ser.groups.iter().map(|g| g.rules.len()).sum();
    if ser.metadata.rule_count != rule_count {
        return Err(DeserializeError::Validation(format!(
            "metadata says {} rules but payload has {}",
            ser.metadata.rule_count, rule_count
        )));
    }

    // Source line numbers are 1-based.
    for group in &ser.groups {
        for rule in &group.rules {
            if rule.line == 0 {
                return Err(DeserializeError::Validation(format!(
                    "rule '{}' has line number 0",
                    rule.value
                )));
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Header I/O
// ---------------------------------------------------------------------------

fn write_header(buf: &mut Vec<u8>, payload: &[u8]) {
    let hash = blake3::hash(payload);
    let hash_bytes = hash.as_bytes();

    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    buf.extend_from_slice(&ENGINE_VERSION.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes()); // flags (reserved)
    #[allow(clippy::cast_possible_truncation)] // payload will never exceed 4 GiB
    let payload_len = payload.len() as u32;
    buf.extend_from_slice(&payload_len.to_le_bytes());
    buf.extend_from_slice(&hash_bytes[..16]);
}

#[allow(clippy::cast_possible_truncation)] // HEADER_SIZE is 32, always fits in u32
fn read_header(bytes: &[u8]) -> Result<(u16, u32, [u8; 16]), DeserializeError> {
    if bytes.len() < HEADER_SIZE {
        return Err(DeserializeError::LengthMismatch {
            expected: HEADER_SIZE as u32,
            actual: bytes.len(),
        });
    }

    if &bytes[0..4] != MAGIC {
        return Err(DeserializeError::BadMagic);
    }

    let format_version = u16::from_le_bytes([bytes[4], bytes[5]]);
    // bytes[6..8] is engine_version (informational, not used for checks)
    // bytes[8..12] is flags (reserved)
    let payload_len = u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);

    let mut hash = [0u8; 16];
    hash.copy_from_slice(&bytes[16..32]);

    Ok((format_version, payload_len, hash))
}

// ---------------------------------------------------------------------------
// Public encode/decode
// ---------------------------------------------------------------------------

pub(crate) fn encode(robots: &Robots, source_text: Option<&str>) -> Result<Vec<u8>, SerializeError> {
    let serialized = robots_to_serialized(robots, source_text);
    let payload = bincode::serde::encode_to_vec(&serialized, bincode::config::standard())?;

    let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
    write_header(&mut buf, &payload);
    buf.extend_from_slice(&payload);
    Ok(buf)
}

pub(crate) fn decode(bytes: &[u8]) -> Result<Robots, DeserializeError> {
    let (format_version, payload_len, stored_hash) = read_header(bytes)?;

    if format_version != FORMAT_VERSION {
        return Err(DeserializeError::IncompatibleVersion {
            blob: format_version,
            supported: FORMAT_VERSION,
        });
    }

    let payload_start = HEADER_SIZE;
    let payload_end = payload_start + payload_len as usize;
    if bytes.len() < payload_end {
        return Err(DeserializeError::LengthMismatch {
            expected: payload_len,
            actual: bytes.len() - HEADER_SIZE,
        });
    }
    let payload = &bytes[payload_start..payload_end];

    // Integrity check
    let computed_hash = blake3::hash(payload);
    if computed_hash.as_bytes()[..16] != stored_hash {
        return Err(DeserializeError::ChecksumMismatch);
    }

    let (serialized, _): (SerializedRobots, usize) =
        bincode::serde::decode_from_slice(payload, bincode::config::standard())?;

    serialized_to_robots(serialized)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_serialized() -> SerializedRobots {
        SerializedRobots {
            metadata: RobotsMetadata {
                group_count: 1,
                rule_count: 2,
                source_digest: None,
            },
            groups: vec![SerializedGroup {
                global_agent: false,
                specific_agents: vec!["FooBot".to_owned()],
                rules: vec![
                    SerializedRule {
                        kind: SerializedKind::Disallow,
                        value: "/".to_owned(),
                        line: 2,
                    },
                    SerializedRule {
                        kind: SerializedKind::Allow,
                        value: "/x/".to_owned(),
                        line: 3,
                    },
                ],
            }],
        }
    }

    // -- Kind round-trip --

    #[test]
    fn kind_round_trip() {
        let kinds = [
            DirectiveKind::Allow,
            DirectiveKind::Disallow,
            DirectiveKind::Sitemap,
        ];
        for kind in kinds {
            assert_eq!(deserialize_kind(serialize_kind(kind)), kind);
        }
    }

    // -- Header round-trip --

    #[test]
    fn header_round_trip() {
        let payload = b"test payload data";
        let mut buf = Vec::new();
        write_header(&mut buf, payload);
        assert_eq!(buf.len(), HEADER_SIZE);

        let (format_version, payload_len, hash) = read_header(&buf).unwrap();
        assert_eq!(format_version, FORMAT_VERSION);
        assert_eq!(payload_len as usize, payload.len());

        let expected_hash = blake3::hash(payload);
        assert_eq!(&hash, &expected_hash.as_bytes()[..16]);
    }

    #[test]
    fn header_bad_magic() {
        let mut buf = vec![0u8; HEADER_SIZE];
        buf[0..4].copy_from_slice(b"BAAD");
        assert!(matches!(read_header(&buf), Err(DeserializeError::BadMagic)));
    }

    #[test]
    fn header_too_short() {
        let buf = vec![0u8; 10];
        assert!(matches!(
            read_header(&buf),
            Err(DeserializeError::LengthMismatch { .. })
        ));
    }

    // -- Validation --

    #[test]
    fn validate_accepts_consistent_payload() {
        assert!(validate(&sample_serialized()).is_ok());
    }

    #[test]
    fn validate_group_count_mismatch() {
        let mut ser = sample_serialized();
        ser.metadata.group_count = 5;
        assert!(matches!(
            validate(&ser),
            Err(DeserializeError::Validation(_))
        ));
    }

    #[test]
    fn validate_rule_count_mismatch() {
        let mut ser = sample_serialized();
        ser.metadata.rule_count = 0;
        assert!(matches!(
            validate(&ser),
            Err(DeserializeError::Validation(_))
        ));
    }

    #[test]
    fn validate_zero_line_rejected() {
        let mut ser = sample_serialized();
        ser.groups[0].rules[0].line = 0;
        assert!(matches!(
            validate(&ser),
            Err(DeserializeError::Validation(_))
        ));
    }

    // -- Digest --

    #[test]
    fn source_digest_embedded() {
        let robots = Robots::parse("user-agent: FooBot\ndisallow: /\n");
        let ser = robots_to_serialized(&robots, Some("source body"));
        assert_eq!(
            ser.metadata.source_digest,
            Some(*blake3::hash(b"source body").as_bytes())
        );

        let ser = robots_to_serialized(&robots, None);
        assert_eq!(ser.metadata.source_digest, None);
    }
}
