//! ShadowID commitment registry and Merkle tree types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct AutoRegisterRequest {
    pub wallet_address: String,
    /// Base58 encoded signature over `message`.
    pub signature: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AutoRegisterResponse {
    pub success: bool,
    pub commitment: String,
    pub leaf_index: i64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterCommitmentRequest {
    /// Poseidon hash commitment.
    pub commitment: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterCommitmentResponse {
    pub success: bool,
    pub leaf_index: i64,
    pub tx_hash: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MerkleProofRequest {
    pub commitment: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MerkleProofResponse {
    pub commitment: String,
    pub leaf_index: i64,
    /// Sibling hashes from leaf to root.
    pub proof: Vec<String>,
    pub root: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TreeRootResponse {
    pub root: String,
    pub tree_depth: i64,
    pub leaf_count: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationStatusResponse {
    pub commitment: String,
    pub registered: bool,
    pub leaf_index: i64,
}
