pub mod error;
pub mod artifact;
pub mod key;
pub mod crypto;
pub mod plaintext;
pub mod report;
pub mod telemetry;

pub use error::DecryptError;
pub use artifact::{EncryptedArtifact, NONCE_LEN, TAG_LEN};
pub use key::Key;
pub use crypto::{decrypt, decrypt_file, open, CipherSuite};
pub use plaintext::Plaintext;
