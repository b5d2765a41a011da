use std::fmt;

use base64::{engine::general_purpose, Engine as _};

use crate::crypto::CipherSuite;
use crate::error::DecryptError;

/// Raw symmetric key bytes as supplied by the operator.
///
/// The length is not validated here: a key that fits no AES width is only
/// rejected when the cipher is built, and then as an authentication failure.
#[derive(Clone, PartialEq, Eq)]
pub struct Key(Vec<u8>);

impl Key {
    /// Decode a standard-alphabet, padded base64 key. Surrounding whitespace is
    /// ignored so a key pasted with a trailing newline still works.
    pub fn from_base64(key_b64: &str) -> Result<Self, DecryptError> {
        general_purpose::STANDARD
            .decode(key_b64.trim())
            .map(Key)
            .map_err(|e| DecryptError::InvalidKeyEncoding(e.to_string()))
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Key(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The AES-GCM variant this key length selects, if any.
    pub fn suite(&self) -> Option<CipherSuite> {
        CipherSuite::from_key_len(self.0.len())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({} B, redacted)", self.0.len())
    }
}
