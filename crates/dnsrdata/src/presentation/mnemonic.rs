//! Fields written as a mnemonic: RR types, classes, certificate types and DNSSEC
//! algorithms, plus the NSEC type bitmap built from a list of RR types.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::{
    parse_utils::{fields, lookup, mnemonic_or_decimal, parse_decimal},
    rr::{ResourceRecordClass, ResourceRecordType},
    Rdf, RdfType, Status,
};

/// Certificate types of RFC 4398
const CERT_TYPES: [(&str, u16); 9] = [
    ("PKIX", 1),
    ("SPKI", 2),
    ("PGP", 3),
    ("IPKIX", 4),
    ("ISPKI", 5),
    ("IPGP", 6),
    ("ACPKIX", 7),
    ("IACPKIX", 8),
    ("URI", 253),
];

/// DNSSEC algorithm numbers and their mnemonics
const ALGORITHMS: [(&str, u8); 16] = [
    ("RSAMD5", 1),
    ("DH", 2),
    ("DSA", 3),
    ("ECC", 4),
    ("RSASHA1", 5),
    ("DSA-NSEC3-SHA1", 6),
    ("RSASHA1-NSEC3-SHA1", 7),
    ("RSASHA256", 8),
    ("RSASHA512", 10),
    ("ECC-GOST", 12),
    ("ECDSAP256SHA256", 13),
    ("ECDSAP384SHA384", 14),
    ("ED25519", 15),
    ("ED448", 16),
    ("INDIRECT", 252),
    ("PRIVATEDNS", 253),
];

/// The extra mnemonic of the private OID algorithm and certificate type
const PRIVATE_OID: (&str, u8) = ("PRIVATEOID", 254);
const OID_CERT: (&str, u16) = ("OID", 254);

const GENERIC_TYPE_PREFIX: &str = "TYPE";
const GENERIC_CLASS_PREFIX: &str = "CLASS";

/// Strips a prefix such as `TYPE` or `CLASS` without regard to case
fn strip_prefix_ignore_case<'a>(token: &'a str, prefix: &str) -> Option<&'a str> {
    let head = token.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &token[prefix.len()..])
}

/// Resolves an RR type mnemonic, or the `TYPEnnn` form of RFC 3597, to its code
pub fn rr_type_code(token: &str) -> Result<u16, Status> {
    if let Some(rtype) = ResourceRecordType::from_mnemonic(token) {
        return Ok(rtype as u16);
    }
    let number = strip_prefix_ignore_case(token, GENERIC_TYPE_PREFIX).ok_or(Status::Err)?;
    parse_decimal(number).map_err(|_| Status::Err)
}

/// Resolves a class mnemonic, or the `CLASSnnn` form of RFC 3597, to its code
pub fn class_code(token: &str) -> Result<u16, Status> {
    if let Some(class) = ResourceRecordClass::from_mnemonic(token) {
        return Ok(class as u16);
    }
    let number = strip_prefix_ignore_case(token, GENERIC_CLASS_PREFIX).ok_or(Status::Err)?;
    parse_decimal(number).map_err(|_| Status::Err)
}

pub fn rr_type(token: &str) -> Result<Rdf, Status> {
    let code = rr_type_code(token)?;
    Rdf::new(RdfType::Type, code.to_be_bytes().to_vec())
}

pub fn class(token: &str) -> Result<Rdf, Status> {
    let code = class_code(token)?;
    Rdf::new(RdfType::Class, code.to_be_bytes().to_vec())
}

/// A certificate type (RFC 4398 section 2.1), by mnemonic or number
pub fn cert(token: &str) -> Result<Rdf, Status> {
    let code = mnemonic_or_decimal(token, |name| {
        lookup(&CERT_TYPES, name).or_else(|| lookup(&[OID_CERT], name))
    })?;
    Rdf::new(RdfType::Cert, code.to_be_bytes().to_vec())
}

/// A DNSSEC algorithm (RFC 4034 appendix A.1), by mnemonic or number
pub fn alg(token: &str) -> Result<Rdf, Status> {
    let code = mnemonic_or_decimal(token, |name| {
        lookup(&ALGORITHMS, name).or_else(|| lookup(&[PRIVATE_OID], name))
    })?;
    Rdf::new(RdfType::Alg, vec![code])
}

/// The type bitmap of an NSEC record, in the windowed format of RFC 4034 section 4.1.2.
/// Each window holds the types sharing the same high octet, and only carries as many
/// bitmap octets as its highest type needs.
pub fn nsec(token: &str) -> Result<Rdf, Status> {
    let codes: Vec<u16> = fields(token)
        .map(rr_type_code)
        .collect::<Result<Vec<_>, _>>()?;

    let mut windows: BTreeMap<u8, [u8; 32]> = BTreeMap::new();
    for code in codes.into_iter().sorted().dedup() {
        let [window, low] = code.to_be_bytes();
        let bitmap = windows.entry(window).or_insert([0; 32]);
        bitmap[low as usize / 8] |= 0x80 >> (low % 8);
    }

    let mut bytes = Vec::new();
    for (window, bitmap) in windows {
        let len = bitmap.iter().rposition(|&b| b != 0).map_or(0, |pos| pos + 1);
        bytes.push(window);
        bytes.push(len as u8);
        bytes.extend(&bitmap[..len]);
    }
    Rdf::new(RdfType::Nsec, bytes)
}
