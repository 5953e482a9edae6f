//! Identifier generation.

use uuid::Uuid;

/// Random RFC 4122 version-4 UUID in hyphenated lowercase form.
pub fn uuid4() -> String {
    Uuid::new_v4().to_string()
}

/// Whether `value` parses as a version-4 UUID.
pub fn is_uuid4(value: &str) -> bool {
    Uuid::parse_str(value)
        .map(|u| u.get_version_num() == 4)
        .unwrap_or(false)
}
