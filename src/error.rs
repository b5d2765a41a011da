use std::io;
use thiserror::Error;

use crate::artifact::NONCE_LEN;

/// Everything that can stop a single decrypt invocation.
///
/// `AuthenticationFailure` deliberately carries no detail: a wrong key, a
/// flipped tag bit and a truncated ciphertext all look the same to the caller.
#[derive(Error, Debug)]
pub enum DecryptError {
    #[error("Malformed artifact: {0}")]
    MalformedArtifact(String),
    #[error("Invalid key encoding: {0}")]
    InvalidKeyEncoding(String),
    #[error("Decryption failed — wrong key or corrupted artifact")]
    AuthenticationFailure,
    #[error("Decrypted plaintext is not valid UTF-8")]
    InvalidPlaintextEncoding,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl DecryptError {
    pub(crate) fn too_short(len: usize) -> Self {
        DecryptError::MalformedArtifact(format!(
            "decoded length {len} B is shorter than the {NONCE_LEN} B nonce"
        ))
    }
}
