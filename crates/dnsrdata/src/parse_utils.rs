use std::str::FromStr;

use nom::{
    character::complete::digit1,
    combinator::{all_consuming, map_res},
    IResult,
};

use crate::Status;

/// Parse an unsigned decimal number from the start of the input. Fails when there are
/// no digits, or when the value does not fit into `T`
pub fn decimal<T: FromStr>(input: &str) -> IResult<&str, T> {
    map_res(digit1, str::parse::<T>)(input)
}

/// Parse a whole token as an unsigned decimal number
pub fn parse_decimal<T: FromStr>(token: &str) -> Result<T, Status> {
    all_consuming(decimal::<T>)(token)
        .map(|(_, value)| value)
        .map_err(|_| Status::IntExp)
}

/// Parse a number that is either a mnemonic from `lookup` or a decimal value. A token
/// that starts with a digit is always taken as a number
pub fn mnemonic_or_decimal<T, F>(token: &str, lookup: F) -> Result<T, Status>
where
    T: FromStr,
    F: Fn(&str) -> Option<T>,
{
    if token.starts_with(|c: char| c.is_ascii_digit()) {
        return parse_decimal(token);
    }
    lookup(token).ok_or(Status::Err)
}

/// Find the value of a case insensitive mnemonic in a lookup table
pub fn lookup<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, value)| *value)
}

/// Split a token into its whitespace separated fields
pub fn fields(token: &str) -> impl Iterator<Item = &str> {
    token.split_ascii_whitespace()
}
