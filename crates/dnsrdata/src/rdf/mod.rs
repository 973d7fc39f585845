mod kind;

pub use kind::RdfType;

use crate::{config::ParseConfig, presentation::RdfParser, Status, MAX_RDF_SIZE};

/// A single RDATA field in wire format. The RDF is the sole owner of its buffer, and
/// `size` is never stored separately: it is always the length of the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rdf {
    kind: RdfType,
    data: Vec<u8>,
}

impl Rdf {
    /// Wraps `data` without copying it. The contents are not checked against `kind`
    pub fn new(kind: RdfType, data: Vec<u8>) -> Result<Self, Status> {
        if data.len() > MAX_RDF_SIZE {
            return Err(Status::PacketOverflow);
        }
        Ok(Self { kind, data })
    }

    /// Same as `new`, for callers that track the length next to the buffer. A length
    /// that disagrees with the buffer is a programming error on the caller's side
    pub fn with_size(size: u16, kind: RdfType, data: Vec<u8>) -> Result<Self, Status> {
        if size as usize != data.len() {
            return Err(Status::InternalErr);
        }
        Self::new(kind, data)
    }

    /// Parses a presentation token with the default parser set and configuration.
    /// `RdfType::None` yields `Ok(None)`
    pub fn from_presentation(token: &str, kind: RdfType) -> Result<Option<Self>, Status> {
        RdfParser::with_config(ParseConfig::default()).parse(token, kind)
    }

    pub fn size(&self) -> u16 {
        // `new` and every mutator keep the buffer within u16 range
        self.data.len() as u16
    }

    pub fn kind(&self) -> RdfType {
        self.kind
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Resizes the buffer, truncating or filling with zero octets, so the size and the
    /// buffer never disagree
    pub fn set_size(&mut self, size: u16) {
        self.data.resize(size as usize, 0);
    }

    pub fn set_kind(&mut self, kind: RdfType) {
        self.kind = kind;
    }

    /// Replaces the buffer, releasing the previous one. On error the RDF is unchanged
    pub fn set_data(&mut self, data: Vec<u8>) -> Result<(), Status> {
        if data.len() > MAX_RDF_SIZE {
            return Err(Status::PacketOverflow);
        }
        drop(std::mem::replace(&mut self.data, data));
        Ok(())
    }

    /// Releases the RDF and its buffer. The RDF is moved in, so it can't be used or
    /// released again afterwards
    pub fn release(self) {
        drop(self)
    }

    /// Releases the RDF held in a record field slot, leaving the slot empty. Returns
    /// `false` when the slot was already empty, in which case nothing happens
    pub fn release_slot(slot: &mut Option<Rdf>) -> bool {
        match slot.take() {
            Some(rdf) => {
                rdf.release();
                true
            }
            None => false,
        }
    }
}

// An RDF may be moved to and shared between threads
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Rdf>();
    assert_send_sync::<RdfType>();
};

impl AsRef<[u8]> for Rdf {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
