use crate::core::XmsError;
use base64::{engine::general_purpose, Engine as _};
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime, UtcOffset};

/// Wire timestamp layout required by the XMS API: second precision with an
/// explicit numeric UTC offset, never the `Z` shorthand.
const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]+00:00");

/// Encode a binary message body as standard base64 with padding.
pub fn encode_bytes(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Encode header bytes as lowercase hex without separators.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Encode a point in time as an XMS wire timestamp.
///
/// The value is normalized to UTC and truncated to whole seconds, so
/// `2016-12-01T11:03:13.192Z` becomes `2016-12-01T11:03:13+00:00`.
///
/// # Errors
/// Returns [`XmsError::EncodingError`] if the value cannot be represented
/// in UTC or formatted.
pub fn encode_timestamp(value: &OffsetDateTime) -> Result<String, XmsError> {
    value
        .checked_to_offset(UtcOffset::UTC)
        .ok_or_else(|| XmsError::EncodingError("timestamp is not representable in UTC".into()))?
        .format(TIMESTAMP_FORMAT)
        .map_err(|err| XmsError::EncodingError(err.to_string()))
}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;
    use time::macros::datetime;

    #[test_case(&[0x00, 0x01, 0x02, 0x03] => "AAECAw=="; "with padding")]
    #[test_case(b"Hello" => "SGVsbG8="; "ascii body")]
    #[test_case(&[] => ""; "empty body")]
    fn encode_bytes_as_standard_base64(bytes: &[u8]) -> String {
        encode_bytes(bytes)
    }

    #[test_case(&[0xff, 0xfe, 0xfd] => "fffefd"; "high bytes")]
    #[test_case(&[0x00, 0x0a] => "000a"; "leading zero kept")]
    fn encode_bytes_as_lowercase_hex(bytes: &[u8]) -> String {
        encode_hex(bytes)
    }

    #[test]
    fn truncate_timestamp_to_whole_seconds() {
        let sut = datetime!(2016-12-01 11:03:13.192 UTC);
        assert_eq!(
            encode_timestamp(&sut).unwrap(),
            "2016-12-01T11:03:13+00:00"
        );
    }

    #[test]
    fn truncate_instead_of_rounding() {
        let sut = datetime!(2016-12-17 08:15:29.969 UTC);
        assert_eq!(
            encode_timestamp(&sut).unwrap(),
            "2016-12-17T08:15:29+00:00"
        );
    }

    #[test]
    fn normalize_offsets_to_utc() {
        let sut = datetime!(2016-12-01 12:03:13 +01:00);
        assert_eq!(
            encode_timestamp(&sut).unwrap(),
            "2016-12-01T11:03:13+00:00"
        );
    }
}
