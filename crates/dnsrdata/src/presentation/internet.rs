//! Addresses, address prefix lists and well known services.

use std::net::{Ipv4Addr, Ipv6Addr};

use itertools::Itertools;
use nom::{
    bytes::complete::take_till1,
    character::complete::char,
    combinator::{all_consuming, opt},
    sequence::{preceded, tuple},
    IResult,
};

use crate::{
    parse_utils::{decimal, fields, lookup, mnemonic_or_decimal},
    Rdf, RdfType, Status,
};

/// Address family numbers used by APL (RFC 3123)
const AFI_IPV4: u16 = 1;
const AFI_IPV6: u16 = 2;

/// IP protocol numbers that may be written by name in a WKS record
const PROTOCOLS: [(&str, u8); 3] = [("icmp", 1), ("tcp", 6), ("udp", 17)];

/// Service names that may be written instead of a port number
const SERVICES: [(&str, u16); 29] = [
    ("tcpmux", 1),
    ("echo", 7),
    ("discard", 9),
    ("daytime", 13),
    ("ftp-data", 20),
    ("ftp", 21),
    ("ssh", 22),
    ("telnet", 23),
    ("smtp", 25),
    ("time", 37),
    ("whois", 43),
    ("domain", 53),
    ("tftp", 69),
    ("gopher", 70),
    ("finger", 79),
    ("http", 80),
    ("kerberos", 88),
    ("pop3", 110),
    ("sunrpc", 111),
    ("nntp", 119),
    ("ntp", 123),
    ("imap", 143),
    ("snmp", 161),
    ("ldap", 389),
    ("https", 443),
    ("submission", 587),
    ("ldaps", 636),
    ("imaps", 993),
    ("pop3s", 995),
];

fn port(token: &str) -> Result<u16, Status> {
    mnemonic_or_decimal(token, |name| lookup(&SERVICES, name))
}

pub fn a(token: &str) -> Result<Rdf, Status> {
    let address: Ipv4Addr = token.parse().map_err(|_| Status::InvalidIp4)?;
    Rdf::new(RdfType::A, address.octets().to_vec())
}

pub fn aaaa(token: &str) -> Result<Rdf, Status> {
    let address: Ipv6Addr = token.parse().map_err(|_| Status::InvalidIp6)?;
    Rdf::new(RdfType::Aaaa, address.octets().to_vec())
}

/// The pieces of a single `[!]afi:address/prefix` item
struct AplItem<'a> {
    negate: bool,
    afi: u16,
    address: &'a str,
    prefix: u8,
}

fn apl_item(input: &str) -> IResult<&str, AplItem> {
    let (remaining_input, (negate, afi, address, prefix)) = tuple((
        opt(char('!')),
        decimal::<u16>,
        preceded(char(':'), take_till1(|c: char| c == '/')),
        preceded(char('/'), decimal::<u8>),
    ))(input)?;
    Ok((
        remaining_input,
        AplItem {
            negate: negate.is_some(),
            afi,
            address,
            prefix,
        },
    ))
}

impl AplItem<'_> {
    fn to_bytes(&self) -> Result<Vec<u8>, Status> {
        let (octets, max_prefix) = match self.afi {
            AFI_IPV4 => {
                let address: Ipv4Addr =
                    self.address.parse().map_err(|_| Status::InvalidIp4)?;
                (address.octets().to_vec(), 32)
            }
            AFI_IPV6 => {
                let address: Ipv6Addr =
                    self.address.parse().map_err(|_| Status::InvalidIp6)?;
                (address.octets().to_vec(), 128)
            }
            _ => return Err(Status::UnknownInet),
        };
        if self.prefix > max_prefix {
            return Err(Status::AddressError);
        }
        // Trailing zero octets are left out of the AFDPART
        let afd_len = octets.iter().rposition(|&b| b != 0).map_or(0, |pos| pos + 1);
        let mut bytes = Vec::with_capacity(4 + afd_len);
        bytes.extend(self.afi.to_be_bytes());
        bytes.push(self.prefix);
        bytes.push(((self.negate as u8) << 7) | afd_len as u8);
        bytes.extend(&octets[..afd_len]);
        Ok(bytes)
    }
}

/// An address prefix list (RFC 3123): whitespace separated `[!]afi:address/prefix`
/// items. An empty list is allowed
pub fn apl(token: &str) -> Result<Rdf, Status> {
    let bytes = fields(token)
        .map(|field| {
            let (_, item) = all_consuming(apl_item)(field).map_err(|_| Status::Err)?;
            item.to_bytes()
        })
        .flatten_ok()
        .collect::<Result<Vec<u8>, Status>>()?;
    Rdf::new(RdfType::Apl, bytes)
}

/// A service given by name or port number, stored as the 16 bit port
pub fn service(token: &str) -> Result<Rdf, Status> {
    let port = port(token)?;
    Rdf::new(RdfType::Service, port.to_be_bytes().to_vec())
}

/// The protocol and service bitmap of a WKS record (RFC 1035 section 3.4.2), written as
/// a protocol followed by the services offered. Bit `n` of the bitmap is set for port `n`
pub fn wks(token: &str) -> Result<Rdf, Status> {
    let mut fields = fields(token);
    let protocol = fields.next().ok_or(Status::Err)?;
    let protocol = mnemonic_or_decimal(protocol, |name| lookup(&PROTOCOLS, name))?;

    let mut bitmap: Vec<u8> = Vec::new();
    for service in fields {
        let port = port(service)? as usize;
        let idx = port / 8;
        if bitmap.len() <= idx {
            bitmap.resize(idx + 1, 0);
        }
        bitmap[idx] |= 0x80 >> (port % 8);
    }

    let mut bytes = Vec::with_capacity(1 + bitmap.len());
    bytes.push(protocol);
    bytes.extend(bitmap);
    Rdf::new(RdfType::Wks, bytes)
}
