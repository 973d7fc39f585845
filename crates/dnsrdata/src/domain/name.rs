use itertools::Itertools;

use crate::{
    octet::{self, Symbol, Symbols},
    Status,
};

use super::{DomainLabel, MAX_LABEL_LENGTH};

/// The longest a domain name may be in wire format, including every length octet and
/// the terminating root label
pub const MAX_DOMAIN_NAME_LENGTH: usize = 255;

/// An absolute domain name. The root label is implied and not stored in `domain_labels`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DomainName {
    domain_labels: Vec<DomainLabel>,
}

impl DomainName {
    pub fn root() -> Self {
        Self {
            domain_labels: Vec::new(),
        }
    }

    pub fn from_labels(domain_labels: Vec<DomainLabel>) -> Result<Self, Status> {
        let name = Self { domain_labels };
        if name.wire_len() > MAX_DOMAIN_NAME_LENGTH {
            return Err(Status::DomainNameOverflow);
        }
        Ok(name)
    }

    pub fn labels(&self) -> &[DomainLabel] {
        &self.domain_labels
    }

    pub fn is_root(&self) -> bool {
        self.domain_labels.is_empty()
    }

    /// The length of the name in wire format
    pub fn wire_len(&self) -> usize {
        self.domain_labels
            .iter()
            .map(DomainLabel::len_bytes)
            .sum::<usize>()
            + 1
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.domain_labels
            .iter()
            .chain(&[DomainLabel::new_empty()])
            .flat_map(|label| label.as_bytes().iter().copied())
            .collect_vec()
    }
}

/// Collects the octets of one label while the name is being scanned
#[derive(Default)]
struct PendingLabel {
    octets: Vec<u8>,
    /// Non-ASCII characters were written directly rather than as escapes
    unicode: bool,
    /// A non-ASCII octet came from an escape, so the label is raw binary
    raw: bool,
}

impl PendingLabel {
    fn push(&mut self, symbol: Symbol) -> Result<(), Status> {
        let octet = symbol.octet();
        if !octet.is_ascii() {
            match symbol {
                Symbol::Char(_) => self.unicode = true,
                _ => self.raw = true,
            }
        }
        self.octets.push(octet);
        // Unicode text shrinks a little when encoded, so only check the hard limit
        // for labels that will be stored as they are
        if !self.unicode && self.octets.len() > MAX_LABEL_LENGTH {
            return Err(Status::LabelOverflow);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<DomainLabel, Status> {
        let pending = std::mem::take(self);
        if pending.unicode && !pending.raw {
            if let Ok(text) = std::str::from_utf8(&pending.octets) {
                return DomainLabel::from_unicode(text);
            }
        }
        DomainLabel::try_from(pending.octets.as_slice())
    }
}

impl TryFrom<&str> for DomainName {
    type Error = Status;

    /// Parses a domain name in presentation format. Labels are separated by unescaped
    /// dots, `\X` and `\DDD` escapes may appear anywhere, and a trailing dot is optional
    /// since every name is taken as absolute. A lone `.` is the root.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = octet::until_nul_str(value);
        if value.is_empty() {
            return Err(Status::DomainNameUnderflow);
        }
        if value == "." {
            return Ok(Self::root());
        }

        let mut domain_labels: Vec<DomainLabel> = Vec::new();
        let mut wire_len = 1;
        let mut pending = PendingLabel::default();
        for symbol in Symbols::new(value.as_bytes()) {
            let symbol = symbol?;
            if !symbol.is_label_separator() {
                pending.push(symbol)?;
                continue;
            }
            if pending.octets.is_empty() {
                return Err(Status::EmptyLabel);
            }
            let label = pending.finish()?;
            wire_len += label.len_bytes();
            if wire_len > MAX_DOMAIN_NAME_LENGTH {
                return Err(Status::DomainNameOverflow);
            }
            domain_labels.push(label);
        }
        if !pending.octets.is_empty() {
            domain_labels.push(pending.finish()?);
        }
        Self::from_labels(domain_labels)
    }
}
