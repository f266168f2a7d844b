//! Encrypted amount decryption, performed server-side.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct DecryptRequest {
    /// 0x-prefixed hex, 64 bytes.
    pub ciphertext: String,
    /// 0x-prefixed hex, 32 bytes.
    pub private_key: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DecryptResponse {
    /// Lamports.
    pub amount: i64,
}
