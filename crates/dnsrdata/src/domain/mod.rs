mod label;
mod name;

pub use label::{DomainLabel, MAX_LABEL_LENGTH};
pub use name::{DomainName, MAX_DOMAIN_NAME_LENGTH};
