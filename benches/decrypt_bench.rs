use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::{engine::general_purpose, Engine as _};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pending_decrypt::decrypt;

fn artifact(key: &[u8; 32], plaintext: &[u8]) -> Vec<u8> {
    let nonce = [0u8; 12];
    let ct = Aes256Gcm::new_from_slice(key)
        .unwrap()
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .unwrap();
    let mut raw = nonce.to_vec();
    raw.extend_from_slice(&ct);
    let mut text = general_purpose::STANDARD.encode(raw).into_bytes();
    text.push(b'\n');
    text
}

fn bench_decrypt(c: &mut Criterion) {
    let key = [7u8; 32];
    let key_b64 = general_purpose::STANDARD.encode(key);
    let small = artifact(&key, b"[]");
    let large = artifact(&key, &vec![b'x'; 1024 * 1024]);

    c.bench_function("decrypt_empty_log", |b| b.iter(|| decrypt(black_box(&small), &key_b64).unwrap()));
    c.bench_function("decrypt_1mb_log", |b| b.iter(|| decrypt(black_box(&large), &key_b64).unwrap()));
}

criterion_group!(benches, bench_decrypt);
criterion_main!(benches);
