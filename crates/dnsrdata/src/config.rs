use crate::{Status, MAX_RDF_SIZE};

/// The default bound on a presentation token. The most verbose grammar is a `\DDD`
/// escaped character string, which needs four characters per octet
pub const DEFAULT_MAX_TOKEN_LEN: usize = 4 * MAX_RDF_SIZE;

/// Settings applied by `RdfParser` before a token is handed to a type parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Tokens longer than this many bytes are rejected without being decoded
    pub max_token_len: usize,
}

impl ParseConfig {
    pub fn new(max_token_len: usize) -> Self {
        Self { max_token_len }
    }

    /// Rejects a token that is longer than the configured bound
    pub fn check_token(&self, token: &str) -> Result<(), Status> {
        if token.len() > self.max_token_len {
            return Err(Status::PacketOverflow);
        }
        Ok(())
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TOKEN_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_token() {
        let config = ParseConfig::new(4);
        assert!(config.check_token("abcd").is_ok());
        assert_eq!(config.check_token("abcde"), Err(Status::PacketOverflow));

        let config = ParseConfig::default();
        assert_eq!(config.max_token_len, DEFAULT_MAX_TOKEN_LEN);
        assert!(config.check_token(&"a".repeat(DEFAULT_MAX_TOKEN_LEN)).is_ok());
    }
}
