//! RR type and class codes, with the mnemonics used for them in presentation format.

/// An enum of the resource record types that have a mnemonic. Types without one are
/// written as `TYPEnnn` (RFC 3597) and are handled as plain numbers.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceRecordType {
    /// A host address
    A = 1,
    /// An authoritative name server
    Ns = 2,
    /// A mail destination (Obsolete - use MX)
    Md = 3,
    /// A mail forwarder (Obsolete - use MX)
    Mf = 4,
    /// The canonical name for an alias
    Cname = 5,
    /// Marks the start of a zone of authority
    Soa = 6,
    /// A mailbox domain name (EXPERIMENTAL)
    Mb = 7,
    /// A mail group member (EXPERIMENTAL)
    Mg = 8,
    /// A mail rename domain name (EXPERIMENTAL)
    Mr = 9,
    /// A null RR (EXPERIMENTAL)
    Null = 10,
    /// A well known service description
    Wks = 11,
    /// A domain name pointer
    Ptr = 12,
    /// Host information
    Hinfo = 13,
    /// Mailbox or mail list information
    Minfo = 14,
    /// Mail exchange
    Mx = 15,
    /// Text strings
    Txt = 16,
    Rp = 17,
    Afsdb = 18,
    X25 = 19,
    Isdn = 20,
    Rt = 21,
    Nsap = 22,
    NsapPtr = 23,
    Sig = 24,
    Key = 25,
    Px = 26,
    Gpos = 27,
    /// An IPv6 host address
    Aaaa = 28,
    /// Location information
    Loc = 29,
    Nxt = 30,
    Eid = 31,
    Nimloc = 32,
    /// Server selection
    Srv = 33,
    Atma = 34,
    Naptr = 35,
    Kx = 36,
    Cert = 37,
    A6 = 38,
    Dname = 39,
    Sink = 40,
    Opt = 41,
    /// Address prefix list
    Apl = 42,
    Ds = 43,
    Sshfp = 44,
    Ipseckey = 45,
    Rrsig = 46,
    /// Next secure record
    Nsec = 47,
    Dnskey = 48,
    Dhcid = 49,
    Nsec3 = 50,
    Nsec3param = 51,
    Tlsa = 52,
    Hip = 55,
    Cds = 59,
    Cdnskey = 60,
    Openpgpkey = 61,
    Csync = 62,
    Zonemd = 63,
    Svcb = 64,
    Https = 65,
    Spf = 99,
    Tkey = 249,
    Tsig = 250,
    /// An incremental zone transfer
    Ixfr = 251,
    /// A request for a transfer of an entire zone
    Axfr = 252,
    /// A request for mailbox-related records (MB, MG or MR)
    Mailb = 253,
    /// A request for mail agent RRs (Obsolete - see MX)
    Maila = 254,
    /// Represented in RFC 1035 as `*`. A request for all records
    Any = 255,
    Uri = 256,
    Caa = 257,
}

impl ResourceRecordType {
    pub const ALL: [ResourceRecordType; 70] = [
        Self::A,
        Self::Ns,
        Self::Md,
        Self::Mf,
        Self::Cname,
        Self::Soa,
        Self::Mb,
        Self::Mg,
        Self::Mr,
        Self::Null,
        Self::Wks,
        Self::Ptr,
        Self::Hinfo,
        Self::Minfo,
        Self::Mx,
        Self::Txt,
        Self::Rp,
        Self::Afsdb,
        Self::X25,
        Self::Isdn,
        Self::Rt,
        Self::Nsap,
        Self::NsapPtr,
        Self::Sig,
        Self::Key,
        Self::Px,
        Self::Gpos,
        Self::Aaaa,
        Self::Loc,
        Self::Nxt,
        Self::Eid,
        Self::Nimloc,
        Self::Srv,
        Self::Atma,
        Self::Naptr,
        Self::Kx,
        Self::Cert,
        Self::A6,
        Self::Dname,
        Self::Sink,
        Self::Opt,
        Self::Apl,
        Self::Ds,
        Self::Sshfp,
        Self::Ipseckey,
        Self::Rrsig,
        Self::Nsec,
        Self::Dnskey,
        Self::Dhcid,
        Self::Nsec3,
        Self::Nsec3param,
        Self::Tlsa,
        Self::Hip,
        Self::Cds,
        Self::Cdnskey,
        Self::Openpgpkey,
        Self::Csync,
        Self::Zonemd,
        Self::Svcb,
        Self::Https,
        Self::Spf,
        Self::Tkey,
        Self::Tsig,
        Self::Ixfr,
        Self::Axfr,
        Self::Mailb,
        Self::Maila,
        Self::Any,
        Self::Uri,
        Self::Caa,
    ];

    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Ns => "NS",
            Self::Md => "MD",
            Self::Mf => "MF",
            Self::Cname => "CNAME",
            Self::Soa => "SOA",
            Self::Mb => "MB",
            Self::Mg => "MG",
            Self::Mr => "MR",
            Self::Null => "NULL",
            Self::Wks => "WKS",
            Self::Ptr => "PTR",
            Self::Hinfo => "HINFO",
            Self::Minfo => "MINFO",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Rp => "RP",
            Self::Afsdb => "AFSDB",
            Self::X25 => "X25",
            Self::Isdn => "ISDN",
            Self::Rt => "RT",
            Self::Nsap => "NSAP",
            Self::NsapPtr => "NSAP-PTR",
            Self::Sig => "SIG",
            Self::Key => "KEY",
            Self::Px => "PX",
            Self::Gpos => "GPOS",
            Self::Aaaa => "AAAA",
            Self::Loc => "LOC",
            Self::Nxt => "NXT",
            Self::Eid => "EID",
            Self::Nimloc => "NIMLOC",
            Self::Srv => "SRV",
            Self::Atma => "ATMA",
            Self::Naptr => "NAPTR",
            Self::Kx => "KX",
            Self::Cert => "CERT",
            Self::A6 => "A6",
            Self::Dname => "DNAME",
            Self::Sink => "SINK",
            Self::Opt => "OPT",
            Self::Apl => "APL",
            Self::Ds => "DS",
            Self::Sshfp => "SSHFP",
            Self::Ipseckey => "IPSECKEY",
            Self::Rrsig => "RRSIG",
            Self::Nsec => "NSEC",
            Self::Dnskey => "DNSKEY",
            Self::Dhcid => "DHCID",
            Self::Nsec3 => "NSEC3",
            Self::Nsec3param => "NSEC3PARAM",
            Self::Tlsa => "TLSA",
            Self::Hip => "HIP",
            Self::Cds => "CDS",
            Self::Cdnskey => "CDNSKEY",
            Self::Openpgpkey => "OPENPGPKEY",
            Self::Csync => "CSYNC",
            Self::Zonemd => "ZONEMD",
            Self::Svcb => "SVCB",
            Self::Https => "HTTPS",
            Self::Spf => "SPF",
            Self::Tkey => "TKEY",
            Self::Tsig => "TSIG",
            Self::Ixfr => "IXFR",
            Self::Axfr => "AXFR",
            Self::Mailb => "MAILB",
            Self::Maila => "MAILA",
            Self::Any => "ANY",
            Self::Uri => "URI",
            Self::Caa => "CAA",
        }
    }

    /// Looks up a type by its mnemonic, ignoring case
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|rtype| rtype.mnemonic().eq_ignore_ascii_case(mnemonic))
    }
}

/// CLASS fields appear in resource records
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceRecordClass {
    /// The internet
    In = 1,
    /// the CSNET class (Obsolete - used only for examples in some obsolete RFCs)
    Cs = 2,
    /// The CHAOS class
    Ch = 3,
    /// Hesiod [Dyer 87]
    Hs = 4,
    /// Used in dynamic update prerequisites (RFC 2136)
    None = 254,
    /// Any class
    Any = 255,
}

impl ResourceRecordClass {
    pub const ALL: [ResourceRecordClass; 6] =
        [Self::In, Self::Cs, Self::Ch, Self::Hs, Self::None, Self::Any];

    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Cs => "CS",
            Self::Ch => "CH",
            Self::Hs => "HS",
            Self::None => "NONE",
            Self::Any => "ANY",
        }
    }

    /// Looks up a class by its mnemonic, ignoring case
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|class| class.mnemonic().eq_ignore_ascii_case(mnemonic))
    }
}
