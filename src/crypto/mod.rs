//! AES-GCM decryption of reporter pending-log artifacts.
//!
//! Cipher selection: key length picks the AES width
//!   16 B → AES-128-GCM, 24 B → AES-192-GCM, 32 B → AES-256-GCM
//! Decryption:       96-bit nonce taken from the artifact prefix, 128-bit tag,
//!                   no associated data
//!
//! Every cipher-level failure is collapsed into
//! [`DecryptError::AuthenticationFailure`], including a key length that fits no
//! AES width, so the caller cannot probe which part of the input was wrong.

use std::path::Path;

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, AeadCore, KeyInit};
use aes_gcm::aes::Aes192;
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm, Nonce};
use tracing::{debug, warn};

use crate::artifact::EncryptedArtifact;
use crate::error::DecryptError;
use crate::key::Key;
use crate::plaintext::Plaintext;

/// AES-192 with the standard 96-bit nonce; `aes-gcm` only aliases 128 and 256.
pub type Aes192Gcm = AesGcm<Aes192, U12>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherSuite {
    Aes128Gcm,
    Aes192Gcm,
    Aes256Gcm,
}

impl CipherSuite {
    pub fn from_key_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(CipherSuite::Aes128Gcm),
            24 => Some(CipherSuite::Aes192Gcm),
            32 => Some(CipherSuite::Aes256Gcm),
            _  => None,
        }
    }

    pub fn key_len(self) -> usize {
        match self {
            CipherSuite::Aes128Gcm => 16,
            CipherSuite::Aes192Gcm => 24,
            CipherSuite::Aes256Gcm => 32,
        }
    }

    /// Human-readable name (diagnostics only).
    pub fn name(self) -> &'static str {
        match self {
            CipherSuite::Aes128Gcm => "AES-128-GCM",
            CipherSuite::Aes192Gcm => "AES-192-GCM",
            CipherSuite::Aes256Gcm => "AES-256-GCM",
        }
    }
}

/// Decrypt the contents of an artifact file with a base64-encoded key.
///
/// The artifact is decoded before the key, so a malformed artifact is reported
/// as such no matter what key accompanies it.
pub fn decrypt(file_bytes: &[u8], key_b64: &str) -> Result<Plaintext, DecryptError> {
    let artifact = EncryptedArtifact::from_file_bytes(file_bytes)?;
    let key = Key::from_base64(key_b64)?;
    open(&key, &artifact)
}

/// Read `path` and [`decrypt`] its contents.
pub fn decrypt_file(path: &Path, key_b64: &str) -> Result<Plaintext, DecryptError> {
    let file_bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = file_bytes.len(), "artifact read");
    decrypt(&file_bytes, key_b64)
}

/// Authenticate and decrypt an already-parsed artifact.
pub fn open(key: &Key, artifact: &EncryptedArtifact) -> Result<Plaintext, DecryptError> {
    let Some(suite) = key.suite() else {
        debug!(key_len = key.len(), "key length fits no AES-GCM width");
        return Err(DecryptError::AuthenticationFailure);
    };
    debug!(
        suite = suite.name(),
        nonce = %hex::encode(artifact.nonce()),
        sealed_len = artifact.sealed().len(),
        "opening artifact"
    );

    let result = match suite {
        CipherSuite::Aes128Gcm => open_with::<Aes128Gcm>(key, artifact),
        CipherSuite::Aes192Gcm => open_with::<Aes192Gcm>(key, artifact),
        CipherSuite::Aes256Gcm => open_with::<Aes256Gcm>(key, artifact),
    };
    match result {
        Ok(bytes) => Ok(Plaintext::new(bytes)),
        Err(e) => {
            warn!(suite = suite.name(), "artifact failed authentication");
            Err(e)
        }
    }
}

fn open_with<C>(key: &Key, artifact: &EncryptedArtifact) -> Result<Vec<u8>, DecryptError>
where
    C: KeyInit + AeadCore<NonceSize = U12> + Aead,
{
    let cipher = C::new_from_slice(key.as_bytes())
        .map_err(|_| DecryptError::AuthenticationFailure)?;
    let nonce = Nonce::from_slice(artifact.nonce());
    cipher
        .decrypt(nonce, artifact.sealed())
        .map_err(|_| DecryptError::AuthenticationFailure)
}
