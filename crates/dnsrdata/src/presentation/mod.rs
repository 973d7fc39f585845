//! Conversion of presentation format tokens into RDFs.
//!
//! `parse_rdf` picks the parser for the requested `RdfType` out of a
//! `PresentationParsers` set and runs it on the token. The parser either hands back a
//! complete RDF or a `Status`; there is no partially built RDF that could be left
//! behind when a token is rejected.

use tracing::{debug, trace};

use crate::{config::ParseConfig, domain::DomainName, octet, Rdf, RdfType, Status};

pub mod internet;
pub mod loc;
pub mod mnemonic;
pub mod numeric;
pub mod text;

/// The set of per-type parsers used by the dispatcher. Every method has a default that
/// implements the standard grammar, so an implementation only needs to override the
/// grammars it wants to change.
pub trait PresentationParsers {
    fn dname(&self, token: &str) -> Result<Rdf, Status> {
        let name = DomainName::try_from(token)?;
        Rdf::new(RdfType::Dname, name.to_bytes())
    }

    fn int8(&self, token: &str) -> Result<Rdf, Status> {
        numeric::int8(token)
    }

    fn int16(&self, token: &str) -> Result<Rdf, Status> {
        numeric::int16(token)
    }

    fn int32(&self, token: &str) -> Result<Rdf, Status> {
        numeric::int32(token)
    }

    fn a(&self, token: &str) -> Result<Rdf, Status> {
        internet::a(token)
    }

    fn aaaa(&self, token: &str) -> Result<Rdf, Status> {
        internet::aaaa(token)
    }

    fn character_string(&self, token: &str) -> Result<Rdf, Status> {
        text::character_string(token)
    }

    fn apl(&self, token: &str) -> Result<Rdf, Status> {
        internet::apl(token)
    }

    fn b64(&self, token: &str) -> Result<Rdf, Status> {
        text::b64(token)
    }

    fn hex(&self, token: &str) -> Result<Rdf, Status> {
        text::hex(token)
    }

    fn nsec(&self, token: &str) -> Result<Rdf, Status> {
        mnemonic::nsec(token)
    }

    fn rr_type(&self, token: &str) -> Result<Rdf, Status> {
        mnemonic::rr_type(token)
    }

    fn class(&self, token: &str) -> Result<Rdf, Status> {
        mnemonic::class(token)
    }

    fn cert(&self, token: &str) -> Result<Rdf, Status> {
        mnemonic::cert(token)
    }

    fn alg(&self, token: &str) -> Result<Rdf, Status> {
        mnemonic::alg(token)
    }

    fn unknown(&self, token: &str) -> Result<Rdf, Status> {
        text::unknown(token)
    }

    fn time(&self, token: &str) -> Result<Rdf, Status> {
        numeric::time(token)
    }

    fn tsig_time(&self, token: &str) -> Result<Rdf, Status> {
        numeric::tsig_time(token)
    }

    fn service(&self, token: &str) -> Result<Rdf, Status> {
        internet::service(token)
    }

    fn loc(&self, token: &str) -> Result<Rdf, Status> {
        loc::loc(token)
    }

    fn wks(&self, token: &str) -> Result<Rdf, Status> {
        internet::wks(token)
    }

    fn nsap(&self, token: &str) -> Result<Rdf, Status> {
        text::nsap(token)
    }
}

/// The standard grammars for every RDF type
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardParsers;

impl PresentationParsers for StandardParsers {}

/// Parses `token` as an RDF of type `kind`. `RdfType::None` has nothing to parse and
/// yields `Ok(None)`. On success the RDF is tagged with `kind`, whatever the parser
/// tagged it with. Every grammar sees the token only up to its first NUL.
pub fn parse_rdf<P>(parsers: &P, token: &str, kind: RdfType) -> Result<Option<Rdf>, Status>
where
    P: PresentationParsers + ?Sized,
{
    let token = octet::until_nul_str(token);
    trace!(?kind, len = token.len(), "parsing presentation token");
    let parsed = match kind {
        RdfType::None => return Ok(None),
        RdfType::Dname => parsers.dname(token),
        RdfType::Int8 => parsers.int8(token),
        RdfType::Int16 => parsers.int16(token),
        RdfType::Int32 => parsers.int32(token),
        RdfType::A => parsers.a(token),
        RdfType::Aaaa => parsers.aaaa(token),
        RdfType::Str => parsers.character_string(token),
        RdfType::Apl => parsers.apl(token),
        RdfType::B64 => parsers.b64(token),
        RdfType::Hex => parsers.hex(token),
        RdfType::Nsec => parsers.nsec(token),
        RdfType::Type => parsers.rr_type(token),
        RdfType::Class => parsers.class(token),
        RdfType::Cert => parsers.cert(token),
        RdfType::Alg => parsers.alg(token),
        RdfType::Unknown => parsers.unknown(token),
        RdfType::Time => parsers.time(token),
        RdfType::TsigTime => parsers.tsig_time(token),
        RdfType::Service => parsers.service(token),
        RdfType::Loc => parsers.loc(token),
        RdfType::Wks => parsers.wks(token),
        RdfType::Nsap => parsers.nsap(token),
    };
    match parsed {
        Ok(mut rdf) => {
            rdf.set_kind(kind);
            Ok(Some(rdf))
        }
        Err(status) => {
            debug!(?kind, %status, "presentation token rejected");
            Err(status)
        }
    }
}

/// Same as `parse_rdf`, for callers holding the raw numeric type tag. Tags that don't
/// name an `RdfType` fail with `Status::NotImplemented`
pub fn parse_rdf_tag<P>(parsers: &P, token: &str, tag: u8) -> Result<Option<Rdf>, Status>
where
    P: PresentationParsers + ?Sized,
{
    let kind = RdfType::try_from(tag).map_err(|status| {
        debug!(tag, "unknown rdf type tag");
        status
    })?;
    parse_rdf(parsers, token, kind)
}

/// A parser set together with the configuration applied to every token
#[derive(Debug, Clone, Default)]
pub struct RdfParser<P = StandardParsers> {
    config: ParseConfig,
    parsers: P,
}

impl<P: PresentationParsers> RdfParser<P> {
    pub fn new(config: ParseConfig, parsers: P) -> Self {
        Self { config, parsers }
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    pub fn parsers(&self) -> &P {
        &self.parsers
    }

    pub fn parse(&self, token: &str, kind: RdfType) -> Result<Option<Rdf>, Status> {
        self.config.check_token(token)?;
        parse_rdf(&self.parsers, token, kind)
    }

    pub fn parse_tag(&self, token: &str, tag: u8) -> Result<Option<Rdf>, Status> {
        self.config.check_token(token)?;
        parse_rdf_tag(&self.parsers, token, tag)
    }
}

impl RdfParser {
    pub fn with_config(config: ParseConfig) -> Self {
        Self::new(config, StandardParsers)
    }
}

// One parser may be shared by threads parsing different tokens
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StandardParsers>();
    assert_send_sync::<RdfParser>();
    assert_send_sync::<ParseConfig>();
};

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rstest::rstest;

    use super::*;

    /// A parser set whose integer parser tags its output wrongly, and whose address
    /// parser counts how often it ran
    #[derive(Default)]
    struct MisTagging {
        a_calls: Cell<usize>,
    }

    impl PresentationParsers for MisTagging {
        fn int16(&self, token: &str) -> Result<Rdf, Status> {
            let mut rdf = numeric::int16(token)?;
            rdf.set_kind(RdfType::Hex);
            Ok(rdf)
        }

        fn a(&self, token: &str) -> Result<Rdf, Status> {
            self.a_calls.set(self.a_calls.get() + 1);
            internet::a(token)
        }
    }

    #[test]
    fn test_requested_type_is_authoritative() {
        let parsers = MisTagging::default();
        let rdf = parse_rdf(&parsers, "53", RdfType::Int16).unwrap().unwrap();
        assert_eq!(rdf.kind(), RdfType::Int16);
        assert_eq!(rdf.data(), &[0, 53]);
    }

    #[test]
    fn test_failure_propagates() {
        let parsers = MisTagging::default();
        assert_eq!(
            parse_rdf(&parsers, "192.0.2.300", RdfType::A),
            Err(Status::InvalidIp4)
        );
        assert_eq!(parsers.a_calls.get(), 1);
    }

    #[test]
    fn test_none_parses_nothing() {
        let parsers = MisTagging::default();
        assert_eq!(parse_rdf(&parsers, "192.0.2.1", RdfType::None), Ok(None));
        assert_eq!(parsers.a_calls.get(), 0);
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            parse_rdf_tag(&StandardParsers, "1", 200),
            Err(Status::NotImplemented)
        );
        let rdf = parse_rdf_tag(&StandardParsers, "1", RdfType::Int8.tag())
            .unwrap()
            .unwrap();
        assert_eq!(rdf.kind(), RdfType::Int8);
    }

    #[test]
    fn test_trait_object() {
        let parsers: &dyn PresentationParsers = &StandardParsers;
        let rdf = parse_rdf(parsers, "IN", RdfType::Class).unwrap().unwrap();
        assert_eq!(rdf.data(), &[0, 1]);
    }

    #[rstest]
    #[case(RdfType::Dname, "www.example.com.", b"\x03www\x07example\x03com\x00".to_vec())]
    #[case(RdfType::Int8, "7", vec![7])]
    #[case(RdfType::Int16, "1024", vec![4, 0])]
    #[case(RdfType::Int32, "65536", vec![0, 1, 0, 0])]
    #[case(RdfType::A, "10.0.0.1", vec![10, 0, 0, 1])]
    #[case(RdfType::Aaaa, "::1", [vec![0; 15], vec![1]].concat())]
    #[case(RdfType::Str, "\"v=spf1 -all\"", b"\x0bv=spf1 -all".to_vec())]
    #[case(RdfType::Apl, "1:10.0.0.0/8", vec![0, 1, 8, 1, 10])]
    #[case(RdfType::B64, "AQID", vec![1, 2, 3])]
    #[case(RdfType::Hex, "010203", vec![1, 2, 3])]
    #[case(RdfType::Nsec, "A", vec![0, 1, 0x40])]
    #[case(RdfType::Type, "SOA", vec![0, 6])]
    #[case(RdfType::Class, "CH", vec![0, 3])]
    #[case(RdfType::Cert, "PGP", vec![0, 3])]
    #[case(RdfType::Alg, "RSASHA1", vec![5])]
    #[case(RdfType::Unknown, "\\# 2 abcd", vec![0xab, 0xcd])]
    #[case(RdfType::Time, "19700101000010", vec![0, 0, 0, 10])]
    #[case(RdfType::TsigTime, "1", vec![0, 0, 0, 0, 0, 1])]
    #[case(RdfType::Service, "domain", vec![0, 53])]
    #[case(RdfType::Wks, "udp domain", vec![17, 0, 0, 0, 0, 0, 0, 0x04])]
    #[case(RdfType::Nsap, "0x4700", vec![0x47, 0])]
    fn test_dispatch(#[case] kind: RdfType, #[case] token: &str, #[case] expected: Vec<u8>) {
        let rdf = Rdf::from_presentation(token, kind).unwrap().unwrap();
        assert_eq!(rdf.kind(), kind);
        assert_eq!(rdf.data(), expected.as_slice());
        assert_eq!(rdf.size() as usize, expected.len());
    }

    #[rstest]
    #[case(RdfType::Int16, "5\0", vec![0, 5])]
    #[case(RdfType::Int8, "7\09", vec![7])]
    #[case(RdfType::B64, "AQID\0junk", vec![1, 2, 3])]
    #[case(RdfType::Hex, "0102\0zz", vec![1, 2])]
    #[case(RdfType::Type, "MX\0", vec![0, 15])]
    #[case(RdfType::A, "10.0.0.1\0.2", vec![10, 0, 0, 1])]
    #[case(RdfType::Str, "ab\0cd", vec![2, b'a', b'b'])]
    fn test_nul_ends_every_token(
        #[case] kind: RdfType,
        #[case] token: &str,
        #[case] expected: Vec<u8>,
    ) {
        let rdf = parse_rdf(&StandardParsers, token, kind).unwrap().unwrap();
        assert_eq!(rdf.data(), expected.as_slice());
    }

    #[test]
    fn test_nul_only_token() {
        assert_eq!(
            parse_rdf(&StandardParsers, "\0", RdfType::Dname),
            Err(Status::DomainNameUnderflow)
        );
        assert_eq!(
            parse_rdf(&StandardParsers, "\0", RdfType::Int16),
            Err(Status::IntExp)
        );
    }

    #[test]
    fn test_dispatch_loc() {
        let rdf = Rdf::from_presentation("0 N 0 E 0", RdfType::Loc)
            .unwrap()
            .unwrap();
        assert_eq!(rdf.kind(), RdfType::Loc);
        assert_eq!(rdf.size(), 16);
    }

    #[test]
    fn test_token_bound() {
        let parser = RdfParser::with_config(ParseConfig::new(8));
        assert!(parser.parse("12345678", RdfType::Int32).is_ok());
        assert_eq!(
            parser.parse("123456789", RdfType::Int32),
            Err(Status::PacketOverflow)
        );
        assert_eq!(
            parser.parse_tag("123456789", RdfType::Int32.tag()),
            Err(Status::PacketOverflow)
        );
        assert_eq!(parser.config().max_token_len, 8);
    }

    #[test]
    fn test_parser_shared_between_threads() {
        let parser = &RdfParser::with_config(ParseConfig::default());
        let tokens = ["192.0.2.1", "198.51.100.7", "203.0.113.200", "10.1.2.3"];
        let parsed: Vec<Rdf> = std::thread::scope(|scope| {
            let handles: Vec<_> = tokens
                .iter()
                .map(|token| scope.spawn(move || parser.parse(token, RdfType::A)))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap().unwrap().unwrap())
                .collect()
        });
        assert_eq!(parsed[0].data(), &[192, 0, 2, 1]);
        assert_eq!(parsed[3].data(), &[10, 1, 2, 3]);
    }

    #[test]
    fn test_custom_parser_set() {
        let parser = RdfParser::new(ParseConfig::default(), MisTagging::default());
        let rdf = parser.parse("192.0.2.1", RdfType::A).unwrap().unwrap();
        assert_eq!(rdf.data(), &[192, 0, 2, 1]);
        assert_eq!(parser.parsers().a_calls.get(), 1);
    }
}
