//! Decoding of the escapes allowed in presentation format text, following RFC 1035
//! section 5.1. `\DDD` stands for the octet with the decimal value `DDD`, `\X` stands
//! for the character `X` itself, and a double quote delimits a character string.

use ascii::AsciiChar;

use crate::Status;

const DOT: u8 = AsciiChar::Dot as u8;
const BACKSLASH: u8 = AsciiChar::BackSlash as u8;
const QUOTE: u8 = AsciiChar::Quotation as u8;
const NUL: u8 = AsciiChar::Null as u8;

/// One unit of presentation text: a plain character, one of the two escape forms, or a
/// string delimiting quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// An unescaped octet
    Char(u8),
    /// A backslash followed by any character other than a digit triple
    SimpleEscape(u8),
    /// A backslash followed by exactly three decimal digits
    DecimalEscape(u8),
    /// An unescaped double quote
    Quote,
}

impl Symbol {
    /// The octet this symbol stands for. A quote stands for itself
    pub fn octet(self) -> u8 {
        match self {
            Symbol::Char(c) | Symbol::SimpleEscape(c) | Symbol::DecimalEscape(c) => c,
            Symbol::Quote => QUOTE,
        }
    }

    /// Returns true for a dot that separates labels, i.e. one that was not escaped
    pub fn is_label_separator(self) -> bool {
        self == Symbol::Char(DOT)
    }
}

/// The part of a token before its first NUL. A NUL ends a presentation token, so
/// nothing after it is ever parsed
pub fn until_nul(word: &[u8]) -> &[u8] {
    let end = word.iter().position(|&b| b == NUL).unwrap_or(word.len());
    &word[..end]
}

/// String version of `until_nul`
pub fn until_nul_str(word: &str) -> &str {
    word.find(char::from(NUL)).map_or(word, |end| &word[..end])
}

/// An iterator over the symbols of a token. The token ends at its last byte or at the
/// first NUL, whichever comes first. After an error the iterator is exhausted.
pub struct Symbols<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Symbols<'a> {
    pub fn new(word: &'a [u8]) -> Self {
        Self {
            input: until_nul(word),
            pos: 0,
        }
    }

    /// The raw bytes that have not been consumed yet
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    fn decimal_escape(&self) -> Option<u32> {
        let digits = self.input.get(self.pos + 1..self.pos + 4)?;
        if !digits.iter().all(u8::is_ascii_digit) {
            return None;
        }
        Some(
            digits
                .iter()
                .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0')),
        )
    }
}

impl<'a> Iterator for Symbols<'a> {
    type Item = Result<Symbol, Status>;

    fn next(&mut self) -> Option<Self::Item> {
        let c = *self.input.get(self.pos)?;
        let symbol = match c {
            BACKSLASH => match self.decimal_escape() {
                Some(val) => match u8::try_from(val) {
                    // This also handles \000
                    Ok(octet) => {
                        self.pos += 4;
                        Ok(Symbol::DecimalEscape(octet))
                    }
                    Err(_) => Err(Status::DdDOverflow),
                },
                None => match self.input.get(self.pos + 1) {
                    Some(&escaped) => {
                        self.pos += 2;
                        Ok(Symbol::SimpleEscape(escaped))
                    }
                    // Nothing left to escape
                    None => Err(Status::InvalidStr),
                },
            },
            QUOTE => {
                self.pos += 1;
                Ok(Symbol::Quote)
            }
            _ => {
                self.pos += 1;
                Ok(Symbol::Char(c))
            }
        };
        if symbol.is_err() {
            self.pos = self.input.len();
        }
        Some(symbol)
    }
}

/// Removes the escapes from a presentation format token, returning the raw octets.
/// The length of the result is the number of octets emitted.
pub fn decode(word: &str) -> Result<Vec<u8>, Status> {
    decode_bytes(word.as_bytes())
}

/// Byte oriented version of `decode`, for tokens that are not valid UTF-8
pub fn decode_bytes(word: &[u8]) -> Result<Vec<u8>, Status> {
    let mut decoded = Vec::new();
    // Decoding never grows the token
    decoded
        .try_reserve(word.len())
        .map_err(|_| Status::MemErr)?;

    let mut symbols = Symbols::new(word);
    while let Some(symbol) = symbols.next() {
        match symbol? {
            Symbol::Char(DOT) => {
                if symbols.remaining().first() == Some(&DOT) {
                    return Err(Status::EmptyLabel);
                }
                decoded.push(DOT);
            }
            Symbol::Quote => {
                // A closing quote ends the string
                if symbols.remaining().is_empty() {
                    break;
                }
            }
            other => decoded.push(other.octet()),
        }
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("example", b"example".to_vec())]
    #[case("a.b.c", b"a.b.c".to_vec())]
    #[case("\\000", vec![0])]
    #[case("\\255", vec![255])]
    #[case("\\065bc", b"Abc".to_vec())]
    #[case("a\\.b", b"a.b".to_vec())]
    #[case("a\\\\b", b"a\\b".to_vec())]
    #[case("a\\ b", b"a b".to_vec())]
    #[case("\\25a", b"25a".to_vec())]
    #[case("\\2", b"2".to_vec())]
    #[case("\"abc\"", b"abc".to_vec())]
    #[case("\"a b\"", b"a b".to_vec())]
    #[case("a\"b", b"ab".to_vec())]
    #[case("\\\"", b"\"".to_vec())]
    #[case("", Vec::new())]
    fn test_decode(#[case] word: &str, #[case] expected: Vec<u8>) {
        let decoded = decode(word).unwrap();
        assert_eq!(decoded.len(), expected.len());
        assert_eq!(decoded, expected);
    }

    #[test]
    fn test_decode_without_escapes_is_identity() {
        let word = "www.example-site.org";
        let decoded = decode(word).unwrap();
        assert_eq!(decoded.len(), word.len());
        assert_eq!(decoded, word.as_bytes());
    }

    #[rstest]
    #[case("..")]
    #[case("a..b")]
    #[case("example..")]
    fn test_empty_label(#[case] word: &str) {
        assert_eq!(decode(word), Err(Status::EmptyLabel));
    }

    #[test]
    fn test_escaped_dots_are_not_empty_labels() {
        assert_eq!(decode("a\\..b").unwrap(), b"a..b");
        assert_eq!(decode("\\.\\.").unwrap(), b"..");
    }

    #[rstest]
    #[case("\\256")]
    #[case("\\999")]
    #[case("ab\\300cd")]
    fn test_ddd_overflow(#[case] word: &str) {
        assert_eq!(decode(word), Err(Status::DdDOverflow));
    }

    #[test]
    fn test_trailing_backslash() {
        assert_eq!(decode("abc\\"), Err(Status::InvalidStr));
        assert_eq!(decode("\\"), Err(Status::InvalidStr));
    }

    #[test]
    fn test_closing_quote_terminates() {
        let decoded = decode("\"abc\"").unwrap();
        assert_eq!(decoded, b"abc");
        assert_eq!(decoded.len(), 3);
    }

    #[test]
    fn test_nul_ends_token() {
        assert_eq!(decode_bytes(b"ab\0cd").unwrap(), b"ab");
    }

    #[test]
    fn test_until_nul() {
        assert_eq!(until_nul(b"ab\0cd"), b"ab");
        assert_eq!(until_nul(b"abcd"), b"abcd");
        assert_eq!(until_nul_str("\0evil.com"), "");
        assert_eq!(until_nul_str("53\0"), "53");
        assert_eq!(until_nul_str("www"), "www");
    }

    #[test]
    fn test_input_is_untouched() {
        let word = String::from("a\\065\\.b");
        let decoded = decode(&word).unwrap();
        assert_eq!(decoded, b"aA.b");
        assert_eq!(word, "a\\065\\.b");
    }

    #[test]
    fn test_symbols() {
        let symbols = Symbols::new(b"a\\.\\046\"")
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(
            symbols,
            vec![
                Symbol::Char(b'a'),
                Symbol::SimpleEscape(b'.'),
                Symbol::DecimalEscape(b'.'),
                Symbol::Quote,
            ]
        );
        assert!(!symbols[1].is_label_separator());
        assert!(!symbols[2].is_label_separator());
        assert!(Symbol::Char(b'.').is_label_separator());
    }

    #[test]
    fn test_symbols_stop_after_error() {
        let mut symbols = Symbols::new(b"\\999abc");
        assert_eq!(symbols.next(), Some(Err(Status::DdDOverflow)));
        assert_eq!(symbols.next(), None);
    }
}
