//! Geographic location, as defined by RFC 1876.
//!
//! The text form is
//! `d1 [m1 [s1]] {N|S} d2 [m2 [s2]] {E|W} alt[m] [siz[m] [hp[m] [vp[m]]]]`
//! and the wire form is 16 octets: version, size, horizontal precision, vertical
//! precision, latitude, longitude and altitude.

use std::iter::Peekable;

use nom::{
    character::complete::{char, digit1},
    combinator::{all_consuming, opt},
    sequence::{preceded, tuple},
    IResult,
};

use crate::{
    parse_utils::{fields, parse_decimal},
    Rdf, RdfType, Status,
};

const LOC_VERSION: u8 = 0;

/// Latitude and longitude are stored as thousandths of an arc second offset by 2^31
const EQUATOR: i64 = 1 << 31;
/// Altitude is stored in centimeters above a base 100,000 m below the WGS 84 spheroid
const ALTITUDE_BASE: i64 = 10_000_000;

/// Defaults for the optional fields, in centimeters
const DEFAULT_SIZE: u64 = 100;
const DEFAULT_HORIZ_PRE: u64 = 1_000_000;
const DEFAULT_VERT_PRE: u64 = 1_000;

/// The largest value the mantissa/exponent encoding can hold, 9 * 10^9 cm
const MAX_PRECISION_CM: u64 = 9_000_000_000;

/// A decimal number with an optional sign, fraction and `m` suffix
fn decimal_parts(input: &str) -> IResult<&str, (Option<char>, &str, Option<&str>)> {
    let (remaining_input, (sign, whole, fraction, _)) = tuple((
        opt(char('-')),
        digit1,
        opt(preceded(char('.'), digit1)),
        opt(char('m')),
    ))(input)?;
    Ok((remaining_input, (sign, whole, fraction)))
}

/// Parses a decimal number into an integer count of `10^-scale` units. More fraction
/// digits than `scale` is an error
fn fixed_point(token: &str, scale: u32, signed: bool) -> Result<i64, Status> {
    let (_, (sign, whole, fraction)) =
        all_consuming(decimal_parts)(token).map_err(|_| Status::Err)?;
    if sign.is_some() && !signed {
        return Err(Status::Err);
    }
    let fraction = fraction.unwrap_or("");
    if fraction.len() > scale as usize {
        return Err(Status::Err);
    }
    let whole: i64 = parse_decimal(whole).map_err(|_| Status::Err)?;
    let padded = format!("{fraction:0<width$}", width = scale as usize);
    let fraction: i64 = if padded.is_empty() {
        0
    } else {
        parse_decimal(&padded).map_err(|_| Status::Err)?
    };
    let value = whole
        .checked_mul(10i64.pow(scale))
        .and_then(|v| v.checked_add(fraction))
        .ok_or(Status::Err)?;
    Ok(if sign.is_some() { -value } else { value })
}

/// Encodes centimeters as the mantissa/exponent octet of RFC 1876. Values that are
/// not a single digit times a power of ten are rounded down
fn precision(cm: u64) -> Result<u8, Status> {
    if cm > MAX_PRECISION_CM {
        return Err(Status::Err);
    }
    let mut mantissa = cm;
    let mut exponent = 0u8;
    while mantissa >= 10 {
        mantissa /= 10;
        exponent += 1;
    }
    Ok(((mantissa as u8) << 4) | exponent)
}

fn precision_field(token: Option<&str>, default: u64) -> Result<u8, Status> {
    let cm = match token {
        Some(token) => fixed_point(token, 2, false)? as u64,
        None => default,
    };
    precision(cm)
}

/// Parses `d [m [s]] H`, returning the offset from the equator or prime meridian in
/// thousandths of an arc second
fn coordinate<'a, I>(
    fields: &mut Peekable<I>,
    max_degrees: i64,
    positive: &str,
    negative: &str,
) -> Result<i64, Status>
where
    I: Iterator<Item = &'a str>,
{
    let is_hemisphere = |field: &str| {
        field.eq_ignore_ascii_case(positive) || field.eq_ignore_ascii_case(negative)
    };

    let degrees: i64 = parse_decimal(fields.next().ok_or(Status::Err)?).map_err(|_| Status::Err)?;
    let mut minutes = 0;
    let mut seconds = 0;
    if let Some(field) = fields.next_if(|field| !is_hemisphere(field)) {
        minutes = parse_decimal(field).map_err(|_| Status::Err)?;
        if let Some(field) = fields.next_if(|field| !is_hemisphere(field)) {
            seconds = fixed_point(field, 3, false)?;
        }
    }
    let hemisphere = fields.next().ok_or(Status::Err)?;
    if !is_hemisphere(hemisphere) {
        return Err(Status::Err);
    }

    // Every part is bounded before the offset is computed, so it cannot overflow
    if degrees > max_degrees || minutes >= 60 || seconds >= 60_000 {
        return Err(Status::Err);
    }
    let offset = ((degrees * 60 + minutes) * 60) * 1000 + seconds;
    if offset > max_degrees * 3_600_000 {
        return Err(Status::Err);
    }
    if hemisphere.eq_ignore_ascii_case(negative) {
        Ok(-offset)
    } else {
        Ok(offset)
    }
}

pub fn loc(token: &str) -> Result<Rdf, Status> {
    let mut fields = fields(token).peekable();

    let latitude = coordinate(&mut fields, 90, "N", "S")?;
    let longitude = coordinate(&mut fields, 180, "E", "W")?;

    let altitude = fixed_point(fields.next().ok_or(Status::Err)?, 2, true)?;
    let altitude = altitude
        .checked_add(ALTITUDE_BASE)
        .and_then(|altitude| u32::try_from(altitude).ok())
        .ok_or(Status::Err)?;

    let size = precision_field(fields.next(), DEFAULT_SIZE)?;
    let horiz_pre = precision_field(fields.next(), DEFAULT_HORIZ_PRE)?;
    let vert_pre = precision_field(fields.next(), DEFAULT_VERT_PRE)?;
    if fields.next().is_some() {
        return Err(Status::Err);
    }

    let mut bytes = vec![LOC_VERSION, size, horiz_pre, vert_pre];
    bytes.extend(((EQUATOR + latitude) as u32).to_be_bytes());
    bytes.extend(((EQUATOR + longitude) as u32).to_be_bytes());
    bytes.extend(altitude.to_be_bytes());
    Rdf::new(RdfType::Loc, bytes)
}
