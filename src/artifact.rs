//! Encrypted artifact framing.
//!
//! A pending-log artifact is base64 text (usually newline-terminated) whose
//! decoded bytes are laid out as:
//!
//! ```text
//! [ nonce (12 B) | ciphertext | GCM tag (16 B) ]
//! ```
//!
//! The tag is appended by AES-GCM itself, so this module only splits off the
//! nonce; everything after it is handed to the cipher as one sealed slice.

use base64::{engine::general_purpose, Engine as _};
use tracing::debug;

use crate::error::DecryptError;

/// Byte length of the AES-GCM nonce prefixed to every artifact.
pub const NONCE_LEN: usize = 12;
/// Byte length of the GCM authentication tag trailing the ciphertext.
pub const TAG_LEN: usize = 16;
/// Smallest artifact that can ever authenticate (empty plaintext).
pub const MIN_SEALED_LEN: usize = NONCE_LEN + TAG_LEN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedArtifact {
    nonce:  [u8; NONCE_LEN],
    /// Ciphertext with the GCM tag still attached.
    sealed: Vec<u8>,
}

impl EncryptedArtifact {
    /// Parse the raw contents of an artifact file.
    ///
    /// Surrounding whitespace is trimmed, and line breaks inside the text are
    /// skipped so that wrapped base64 (e.g. `base64 -w 76`) decodes as well.
    pub fn from_file_bytes(file_bytes: &[u8]) -> Result<Self, DecryptError> {
        let text = file_bytes.trim_ascii();
        let compact: Vec<u8> = if text.iter().any(u8::is_ascii_whitespace) {
            text.iter().copied().filter(|b| !b.is_ascii_whitespace()).collect()
        } else {
            text.to_vec()
        };
        let raw = general_purpose::STANDARD
            .decode(&compact)
            .map_err(|e| DecryptError::MalformedArtifact(format!("not valid base64: {e}")))?;
        debug!(encoded_len = file_bytes.len(), decoded_len = raw.len(), "artifact decoded");
        Self::from_raw(&raw)
    }

    /// Split already-decoded artifact bytes into nonce and sealed payload.
    pub fn from_raw(raw: &[u8]) -> Result<Self, DecryptError> {
        if raw.len() < NONCE_LEN {
            return Err(DecryptError::too_short(raw.len()));
        }
        let (nonce_bytes, sealed) = raw.split_at(NONCE_LEN);
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(nonce_bytes);
        Ok(Self { nonce, sealed: sealed.to_vec() })
    }

    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    /// Ciphertext followed by the 16-byte tag.
    pub fn sealed(&self) -> &[u8] {
        &self.sealed
    }

    /// Total decoded length, nonce included.
    pub fn decoded_len(&self) -> usize {
        NONCE_LEN + self.sealed.len()
    }

    /// Whether the sealed part is long enough to hold a tag at all.
    pub fn can_authenticate(&self) -> bool {
        self.decoded_len() >= MIN_SEALED_LEN
    }
}
