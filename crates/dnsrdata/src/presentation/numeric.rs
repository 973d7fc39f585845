//! Fixed width integers and the two time encodings.

use chrono::NaiveDateTime;

use crate::{parse_utils::parse_decimal, Rdf, RdfType, Status};

const TIME_FORMAT: &str = "%Y%m%d%H%M%S";
const TIME_FORMAT_LEN: usize = 14;
const MAX_TSIG_TIME: u64 = (1 << 48) - 1;

pub fn int8(token: &str) -> Result<Rdf, Status> {
    let value: u8 = parse_decimal(token)?;
    Rdf::new(RdfType::Int8, vec![value])
}

pub fn int16(token: &str) -> Result<Rdf, Status> {
    let value: u16 = parse_decimal(token)?;
    Rdf::new(RdfType::Int16, value.to_be_bytes().to_vec())
}

pub fn int32(token: &str) -> Result<Rdf, Status> {
    let value: u32 = parse_decimal(token)?;
    Rdf::new(RdfType::Int32, value.to_be_bytes().to_vec())
}

/// An absolute time as used in RRSIG records (RFC 4034 section 3.2): either
/// `YYYYMMDDHHmmSS` in UTC or a plain number of seconds. The value is stored in serial
/// number arithmetic, so times past 2106 wrap around.
pub fn time(token: &str) -> Result<Rdf, Status> {
    let seconds = if token.len() == TIME_FORMAT_LEN && token.bytes().all(|b| b.is_ascii_digit())
    {
        let timestamp = NaiveDateTime::parse_from_str(token, TIME_FORMAT)
            .map_err(|_| Status::Err)?
            .and_utc()
            .timestamp();
        let timestamp = u64::try_from(timestamp).map_err(|_| Status::Err)?;
        (timestamp % (1 << 32)) as u32
    } else {
        parse_decimal::<u32>(token).map_err(|_| Status::Err)?
    };
    Rdf::new(RdfType::Time, seconds.to_be_bytes().to_vec())
}

/// A TSIG time (RFC 2845): seconds since the epoch in 48 bits
pub fn tsig_time(token: &str) -> Result<Rdf, Status> {
    let seconds: u64 = parse_decimal(token)?;
    if seconds > MAX_TSIG_TIME {
        return Err(Status::IntExp);
    }
    Rdf::new(RdfType::TsigTime, seconds.to_be_bytes()[2..].to_vec())
}
