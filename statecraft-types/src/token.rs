//! The opaque optimistic-concurrency token.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version stamp assigned by the persistence backend on insert/update and
/// required unchanged on the next update.
///
/// The byte layout is owned entirely by the backend; this core only carries
/// the token and compares it for equality. A stale token must surface as a
/// concurrency conflict, never be silently retried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConcurrencyToken(Vec<u8>);

impl ConcurrencyToken {
    /// Wraps backend-assigned token bytes.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw token bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the token, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Display for ConcurrencyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_byte_equality() {
        let a = ConcurrencyToken::from_bytes(vec![1, 2, 3]);
        let b = ConcurrencyToken::from_bytes(vec![1, 2, 3]);
        let c = ConcurrencyToken::from_bytes(vec![1, 2, 4]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_renders_hex() {
        let t = ConcurrencyToken::from_bytes(vec![0x00, 0xab, 0xff]);
        assert_eq!(t.to_string(), "00abff");
    }

    #[test]
    fn serde_is_transparent() {
        let t = ConcurrencyToken::from_bytes(vec![7, 8]);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "[7,8]");
        let back: ConcurrencyToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
