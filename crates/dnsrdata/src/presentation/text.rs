//! Character strings and the binary-as-text encodings.

use data_encoding::{BASE64, HEXLOWER_PERMISSIVE};

use crate::{
    octet,
    parse_utils::{fields, parse_decimal},
    Rdf, RdfType, Status,
};

/// A `<character-string>` holds at most this many octets after its length octet
pub const MAX_CHARACTER_STRING_LEN: usize = 255;

/// The token that introduces the generic RDATA notation of RFC 3597
const GENERIC_RDATA_MARKER: &str = "\\#";

fn strip_whitespace(token: &str) -> String {
    fields(token).collect()
}

/// A `<character-string>`, defined in section 3.3 of RFC 1035: a single length octet
/// followed by that number of octets. Escapes and quotes are removed first
pub fn character_string(token: &str) -> Result<Rdf, Status> {
    let decoded = octet::decode(token)?;
    if decoded.len() > MAX_CHARACTER_STRING_LEN {
        return Err(Status::InvalidStr);
    }
    let mut bytes = Vec::with_capacity(decoded.len() + 1);
    bytes.push(decoded.len() as u8);
    bytes.extend(decoded);
    Rdf::new(RdfType::Str, bytes)
}

pub fn b64(token: &str) -> Result<Rdf, Status> {
    let encoded = strip_whitespace(token);
    if encoded.is_empty() {
        return Err(Status::InvalidB64);
    }
    let bytes = BASE64
        .decode(encoded.as_bytes())
        .map_err(|_| Status::InvalidB64)?;
    Rdf::new(RdfType::B64, bytes)
}

pub fn hex(token: &str) -> Result<Rdf, Status> {
    let encoded = strip_whitespace(token);
    if encoded.is_empty() {
        return Err(Status::InvalidHex);
    }
    let bytes = HEXLOWER_PERMISSIVE
        .decode(encoded.as_bytes())
        .map_err(|_| Status::InvalidHex)?;
    Rdf::new(RdfType::Hex, bytes)
}

/// Opaque RDATA in the generic notation of RFC 3597: `\# <length> <hex>...`. The hex
/// may be split over several fields and must decode to exactly `length` octets
pub fn unknown(token: &str) -> Result<Rdf, Status> {
    let mut fields = fields(token);
    if fields.next() != Some(GENERIC_RDATA_MARKER) {
        return Err(Status::Err);
    }
    let length = fields.next().ok_or(Status::Err)?;
    let length: u16 = parse_decimal(length).map_err(|_| Status::Err)?;

    let encoded: String = fields.collect();
    let bytes = HEXLOWER_PERMISSIVE
        .decode(encoded.as_bytes())
        .map_err(|_| Status::InvalidHex)?;
    if bytes.len() != length as usize {
        return Err(Status::Err);
    }
    Rdf::new(RdfType::Unknown, bytes)
}

/// An NSAP address (RFC 1706): `0x` followed by hex digits, with dots allowed anywhere
/// between the digits for readability
pub fn nsap(token: &str) -> Result<Rdf, Status> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .ok_or(Status::InvalidStr)?;
    let digits: String = digits.chars().filter(|&c| c != '.').collect();
    if digits.is_empty() {
        return Err(Status::InvalidHex);
    }
    let bytes = HEXLOWER_PERMISSIVE
        .decode(digits.as_bytes())
        .map_err(|_| Status::InvalidHex)?;
    Rdf::new(RdfType::Nsap, bytes)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_str() {
        let rdf = character_string("\"hello world\"").unwrap();
        assert_eq!(rdf.data(), b"\x0bhello world");
        assert_eq!(rdf.kind(), RdfType::Str);

        let rdf = character_string("a\\000b").unwrap();
        assert_eq!(rdf.data(), &[3, b'a', 0, b'b']);

        let rdf = character_string("\"\"").unwrap();
        assert_eq!(rdf.data(), &[0]);
    }

    #[test]
    fn test_str_length() {
        let longest = "x".repeat(MAX_CHARACTER_STRING_LEN);
        assert_eq!(character_string(&longest).unwrap().size(), 256);
        let too_long = "x".repeat(MAX_CHARACTER_STRING_LEN + 1);
        assert_eq!(character_string(&too_long), Err(Status::InvalidStr));
        // Escapes count once decoded
        let escaped = "\\120".repeat(MAX_CHARACTER_STRING_LEN);
        assert_eq!(character_string(&escaped).unwrap().size(), 256);
    }

    #[test]
    fn test_str_decoder_errors() {
        assert_eq!(character_string("a..b"), Err(Status::EmptyLabel));
        assert_eq!(character_string("\\400"), Err(Status::DdDOverflow));
    }

    #[test]
    fn test_b64() {
        let rdf = b64("Q2VydGlmaWNhdGUgZGF0YQ==").unwrap();
        assert_eq!(rdf.data(), b"Certificate data");
        let rdf = b64("Q2VydGlm aWNhdGUgZGF0YQ==").unwrap();
        assert_eq!(rdf.data(), b"Certificate data");
    }

    #[rstest]
    #[case("")]
    #[case("Invalid_base64")]
    #[case("Q2VydGlmaWNhdGUgZGF0YQ=")]
    fn test_invalid_b64(#[case] token: &str) {
        assert_eq!(b64(token), Err(Status::InvalidB64));
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex("DEADbeef").unwrap().data(), &[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(hex("de ad").unwrap().data(), &[0xde, 0xad]);
        assert_eq!(hex("abc"), Err(Status::InvalidHex));
        assert_eq!(hex("zz"), Err(Status::InvalidHex));
        assert_eq!(hex(""), Err(Status::InvalidHex));
    }

    #[test]
    fn test_unknown() {
        let rdf = unknown("\\# 4 0A000001").unwrap();
        assert_eq!(rdf.data(), &[10, 0, 0, 1]);
        let rdf = unknown("\\# 4 0A00 0001").unwrap();
        assert_eq!(rdf.data(), &[10, 0, 0, 1]);
        let rdf = unknown("\\# 0").unwrap();
        assert_eq!(rdf.size(), 0);
    }

    #[rstest]
    #[case("4 0A000001", Status::Err)]
    #[case("\\# 3 0A000001", Status::Err)]
    #[case("\\# x 0A000001", Status::Err)]
    #[case("\\#", Status::Err)]
    #[case("\\# 2 0G00", Status::InvalidHex)]
    fn test_invalid_unknown(#[case] token: &str, #[case] status: Status) {
        assert_eq!(unknown(token), Err(status));
    }

    #[test]
    fn test_nsap() {
        let rdf = nsap("0x47.0005.80.005a00").unwrap();
        assert_eq!(rdf.data(), &[0x47, 0x00, 0x05, 0x80, 0x00, 0x5a, 0x00]);
        assert_eq!(nsap("47.0005"), Err(Status::InvalidStr));
        assert_eq!(nsap("0x"), Err(Status::InvalidHex));
        assert_eq!(nsap("0x4"), Err(Status::InvalidHex));
    }
}
