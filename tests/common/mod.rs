#![allow(dead_code)]

use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, AeadCore, KeyInit};
use aes_gcm::{Aes128Gcm, Aes256Gcm, Nonce};
use base64::{engine::general_purpose, Engine as _};
use pending_decrypt::crypto::Aes192Gcm;

/// Frame `nonce || ciphertext || tag` the way the reporter persists it.
pub fn seal_raw(key: &[u8], nonce: &[u8; 12], plaintext: &[u8]) -> Vec<u8> {
    let ct = match key.len() {
        16 => encrypt::<Aes128Gcm>(key, nonce, plaintext),
        24 => encrypt::<Aes192Gcm>(key, nonce, plaintext),
        32 => encrypt::<Aes256Gcm>(key, nonce, plaintext),
        n  => panic!("no AES width for {n}-byte key"),
    };
    let mut out = nonce.to_vec();
    out.extend_from_slice(&ct);
    out
}

/// Base64 artifact text, newline-terminated like the files on disk.
pub fn seal_file_text(key: &[u8], nonce: &[u8; 12], plaintext: &[u8]) -> String {
    format!("{}\n", b64(&seal_raw(key, nonce, plaintext)))
}

pub fn b64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

fn encrypt<C: KeyInit + AeadCore<NonceSize = U12> + Aead>(key: &[u8], nonce: &[u8; 12], pt: &[u8]) -> Vec<u8> {
    C::new_from_slice(key)
        .unwrap()
        .encrypt(Nonce::from_slice(nonce), pt)
        .unwrap()
}
