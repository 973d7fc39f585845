use thiserror::Error;

pub mod config;
pub mod domain;
pub mod octet;
pub mod parse_utils;
pub mod presentation;
pub mod rdf;
pub mod rr;

pub use config::ParseConfig;
pub use presentation::{parse_rdf, parse_rdf_tag, PresentationParsers, RdfParser, StandardParsers};
pub use rdf::{Rdf, RdfType};

/// The largest payload a single RDATA field can carry, since RDLENGTH is a 16 bit field
pub const MAX_RDF_SIZE: usize = u16::MAX as usize;

/// The outcome of every fallible operation in this crate. The numeric codes are stable
/// and shared with callers that store or transmit them, so the order of the variants
/// must never change.
///
/// `Ok` is kept for callers that want a flat status code. Functions in this crate return
/// `Result<T, Status>` and never produce `Err(Status::Ok)`.
#[repr(u8)]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    #[error("All OK")]
    Ok = 0,
    #[error("Empty label")]
    EmptyLabel,
    #[error("Label length overflow")]
    LabelOverflow,
    #[error("Domain name length overflow")]
    DomainNameOverflow,
    #[error("Domain name length underflow")]
    DomainNameUnderflow,
    #[error("\\DDD sequence overflow (>255)")]
    DdDOverflow,
    #[error("Packet size overflow")]
    PacketOverflow,
    #[error("Invalid compression pointer")]
    InvalidPointer,
    #[error("Memory allocation failure")]
    MemErr,
    #[error("Internal error")]
    InternalErr,
    #[error("General error")]
    Err,
    #[error("Integer expected")]
    IntExp,
    #[error("Conversion error, ip4 addr expected")]
    InvalidIp4,
    #[error("Conversion error, ip6 addr expected")]
    InvalidIp6,
    #[error("Conversion error, string expected")]
    InvalidStr,
    #[error("Conversion error, b64 encoding expected")]
    InvalidB64,
    #[error("Conversion error, hex encoding expected")]
    InvalidHex,
    #[error("Could not send or receive, because of network error")]
    NetworkError,
    #[error("Could not start AXFR, because of address error")]
    AddressError,
    #[error("Unknown address family")]
    UnknownInet,
    #[error("Not implemented")]
    NotImplemented,
}

impl Status {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    /// Flattens a result into the status code a C-style caller would have received
    pub fn from_result<T>(result: &Result<T, Status>) -> Status {
        match result {
            Ok(_) => Status::Ok,
            Err(status) => *status,
        }
    }
}

impl TryFrom<u8> for Status {
    // Use an empty error, because it's pretty clear what's the issue if this fails
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Status::Ok),
            1 => Ok(Status::EmptyLabel),
            2 => Ok(Status::LabelOverflow),
            3 => Ok(Status::DomainNameOverflow),
            4 => Ok(Status::DomainNameUnderflow),
            5 => Ok(Status::DdDOverflow),
            6 => Ok(Status::PacketOverflow),
            7 => Ok(Status::InvalidPointer),
            8 => Ok(Status::MemErr),
            9 => Ok(Status::InternalErr),
            10 => Ok(Status::Err),
            11 => Ok(Status::IntExp),
            12 => Ok(Status::InvalidIp4),
            13 => Ok(Status::InvalidIp6),
            14 => Ok(Status::InvalidStr),
            15 => Ok(Status::InvalidB64),
            16 => Ok(Status::InvalidHex),
            17 => Ok(Status::NetworkError),
            18 => Ok(Status::AddressError),
            19 => Ok(Status::UnknownInet),
            20 => Ok(Status::NotImplemented),
            _ => Err(()),
        }
    }
}
