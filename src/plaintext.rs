use crate::error::DecryptError;

/// Bytes recovered from an artifact. Normally the reporter's JSON log array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plaintext(Vec<u8>);

impl Plaintext {
    pub fn new(bytes: Vec<u8>) -> Self {
        Plaintext(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the plaintext as text, failing on anything that is not UTF-8.
    pub fn as_utf8(&self) -> Result<&str, DecryptError> {
        std::str::from_utf8(&self.0).map_err(|_| DecryptError::InvalidPlaintextEncoding)
    }
}

impl AsRef<[u8]> for Plaintext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
