use idna::punycode;

use crate::Status;

pub const MAX_LABEL_LENGTH: usize = 63;

const ACE_PREFIX: &str = "xn--";

/// Represents a label within a domain name. According to RFC 1035 Section 3.1,
/// "Domain names in messages are expressed in terms of a sequence of labels.
/// Each label is represented as a one octet length field followed by that
/// number of octets.  Since every domain name ends with the null label of
/// the root, a domain name is terminated by a length byte of zero."
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainLabel {
    len: usize,
    byte_repr: Vec<u8>,
}

impl TryFrom<&[u8]> for DomainLabel {
    type Error = Status;

    /// Builds a label from raw octets. Any octet value is allowed, only the length is
    /// checked
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let len = value.len();
        if len == 0 {
            return Err(Status::EmptyLabel);
        }
        if len > MAX_LABEL_LENGTH {
            return Err(Status::LabelOverflow);
        }
        Ok(Self {
            len,
            byte_repr: [&[len as u8], value].concat(),
        })
    }
}

impl DomainLabel {
    /// Builds a label from Unicode text, converting it to its punycode A-label
    /// (RFC 5890) when it contains non-ASCII characters
    pub fn from_unicode(label: &str) -> Result<Self, Status> {
        if label.is_ascii() {
            return Self::try_from(label.as_bytes());
        }
        let encoded = punycode::encode_str(label).ok_or(Status::InvalidStr)?;
        let a_label = format!("{ACE_PREFIX}{encoded}");
        Self::try_from(a_label.as_bytes())
    }

    /// Creates a new empty `DomainLabel` instance. Mainly for use of terminating
    /// domain names, which are terminanted with a null label
    pub fn new_empty() -> Self {
        Self {
            len: 0,
            byte_repr: vec![0],
        }
    }

    /// Returns a bytes slice representing the domain label. Following RFC 1035, the
    /// first element of the slice will be the length of the label, followed by the
    /// bytes of the label itself
    pub fn as_bytes(&self) -> &[u8] {
        &self.byte_repr
    }

    /// Returns the length of the label, not the total length of the byte slice
    /// that will be returned by `as_bytes`
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the length of the label including its length octet
    pub fn len_bytes(&self) -> usize {
        self.byte_repr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_bytes() {
        let label = DomainLabel::try_from("docs".as_bytes()).unwrap();
        assert_eq!(label.as_bytes(), &[4, b'd', b'o', b'c', b's']);
        assert_eq!(label.len(), 4);
        assert_eq!(label.len_bytes(), 5);

        let empty = DomainLabel::new_empty();
        assert!(empty.is_empty());
        assert_eq!(empty.as_bytes(), &[0]);
    }

    #[test]
    fn test_label_length_limits() {
        let max = [b'a'; MAX_LABEL_LENGTH];
        assert!(DomainLabel::try_from(&max[..]).is_ok());
        let too_long = [b'a'; MAX_LABEL_LENGTH + 1];
        assert_eq!(
            DomainLabel::try_from(&too_long[..]),
            Err(Status::LabelOverflow)
        );
        assert_eq!(DomainLabel::try_from(&[][..]), Err(Status::EmptyLabel));
    }

    #[test]
    fn test_unicode_label() {
        let label = DomainLabel::from_unicode("bücher").unwrap();
        assert_eq!(&label.as_bytes()[1..], b"xn--bcher-kva");

        let ascii = DomainLabel::from_unicode("plain").unwrap();
        assert_eq!(&ascii.as_bytes()[1..], b"plain");
    }
}
