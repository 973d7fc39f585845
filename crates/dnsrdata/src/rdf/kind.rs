use crate::Status;

/// The grammar of a single RDATA field. Every variant maps to exactly one presentation
/// parser, and the numeric tags are the ones handed over by zone file tokenizers.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdfType {
    /// Placeholder for a field that carries nothing
    None = 0,
    /// A domain name
    Dname = 1,
    /// An 8 bit integer
    Int8 = 2,
    /// A 16 bit integer
    Int16 = 3,
    /// A 32 bit integer
    Int32 = 4,
    /// An IPv4 address
    A = 5,
    /// An IPv6 address
    Aaaa = 6,
    /// A `<character-string>`
    Str = 7,
    /// An address prefix list (RFC 3123)
    Apl = 8,
    /// Binary data shown as base64
    B64 = 9,
    /// Binary data shown as hex
    Hex = 10,
    /// The type bitmap of an NSEC record
    Nsec = 11,
    /// An RR type mnemonic
    Type = 12,
    /// An RR class mnemonic
    Class = 13,
    /// A certificate type
    Cert = 14,
    /// A DNSSEC algorithm
    Alg = 15,
    /// Opaque data in the RFC 3597 generic notation
    Unknown = 16,
    /// An absolute time, 32 bits of seconds since the epoch
    Time = 17,
    /// A TSIG time, 48 bits of seconds since the epoch
    TsigTime = 18,
    /// A service, identified by name or port number
    Service = 19,
    /// A geographic location (RFC 1876)
    Loc = 20,
    /// A well known services bitmap
    Wks = 21,
    /// A network service access point address
    Nsap = 22,
}

impl RdfType {
    pub const ALL: [RdfType; 23] = [
        RdfType::None,
        RdfType::Dname,
        RdfType::Int8,
        RdfType::Int16,
        RdfType::Int32,
        RdfType::A,
        RdfType::Aaaa,
        RdfType::Str,
        RdfType::Apl,
        RdfType::B64,
        RdfType::Hex,
        RdfType::Nsec,
        RdfType::Type,
        RdfType::Class,
        RdfType::Cert,
        RdfType::Alg,
        RdfType::Unknown,
        RdfType::Time,
        RdfType::TsigTime,
        RdfType::Service,
        RdfType::Loc,
        RdfType::Wks,
        RdfType::Nsap,
    ];

    pub fn tag(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for RdfType {
    type Error = Status;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        RdfType::ALL
            .get(value as usize)
            .copied()
            .ok_or(Status::NotImplemented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_follow_declaration_order() {
        for (idx, kind) in RdfType::ALL.iter().enumerate() {
            assert_eq!(kind.tag() as usize, idx);
            assert_eq!(RdfType::try_from(idx as u8), Ok(*kind));
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(RdfType::try_from(23), Err(Status::NotImplemented));
        assert_eq!(RdfType::try_from(u8::MAX), Err(Status::NotImplemented));
    }
}
