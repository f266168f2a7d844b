//! ShadowID 承诺注册与 Merkle 树查询

use shadowpay_client::{
    AutoRegisterRequest, AutoRegisterResponse, MerkleProofRequest, MerkleProofResponse,
    RegisterCommitmentRequest, RegisterCommitmentResponse, RegistrationStatusResponse,
    TreeRootResponse,
};

use super::parse::{field, truncate_display};
use super::{report, status_word, BACK};
use crate::command::Command;
use crate::model::{FormSpec, MenuAction, MenuItem, SharedClient};

/// 哈希类字段的展示长度
const HASH_DISPLAY_LEN: usize = 20;

/// 证明路径最多展示的哈希数
const PROOF_HASHES_SHOWN: usize = 3;

pub static ITEMS: &[MenuItem] = &[
    MenuItem {
        icon: "✅",
        label: "Auto Register",
        action: MenuAction::Form(FormSpec {
            title: "✅ Auto Register ShadowID",
            fields: &["Wallet Address", "Signature (base58)", "Message"],
            submit: auto_register,
        }),
    },
    MenuItem {
        icon: "📝",
        label: "Register Commitment",
        action: MenuAction::Form(FormSpec {
            title: "📝 Register Commitment",
            fields: &["Poseidon Hash Commitment"],
            submit: register,
        }),
    },
    MenuItem {
        icon: "🔍",
        label: "Get Merkle Proof",
        action: MenuAction::Form(FormSpec {
            title: "🔍 Get Merkle Proof",
            fields: &["Commitment"],
            submit: proof,
        }),
    },
    MenuItem {
        icon: "🌳",
        label: "Get Tree Root",
        action: MenuAction::Run(tree_root),
    },
    MenuItem {
        icon: "📋",
        label: "Check Status",
        action: MenuAction::Form(FormSpec {
            title: "📋 Check Registration Status",
            fields: &["Commitment"],
            submit: status,
        }),
    },
    BACK,
];

fn auto_register(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = AutoRegisterRequest {
        wallet_address: field(&values, 0).to_string(),
        signature: field(&values, 1).to_string(),
        message: field(&values, 2).to_string(),
    };

    Ok(Command::new("Registering ShadowID", async move {
        let resp = client
            .auto_register(&req)
            .await
            .map_err(|e| report("auto register", e))?;
        Ok(format_auto_register(&resp))
    }))
}

fn register(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = RegisterCommitmentRequest {
        commitment: field(&values, 0).to_string(),
    };

    Ok(Command::new("Registering commitment", async move {
        let resp = client
            .register_commitment(&req)
            .await
            .map_err(|e| report("register commitment", e))?;
        Ok(format_register(&resp))
    }))
}

fn proof(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let req = MerkleProofRequest {
        commitment: field(&values, 0).to_string(),
    };

    Ok(Command::new("Fetching Merkle proof", async move {
        let resp = client
            .merkle_proof(&req)
            .await
            .map_err(|e| report("merkle proof", e))?;
        Ok(format_proof(&resp))
    }))
}

fn tree_root(client: SharedClient) -> Command {
    Command::new("Loading tree root", async move {
        let resp = client
            .tree_root()
            .await
            .map_err(|e| report("tree root", e))?;
        Ok(format_tree_root(&resp))
    })
}

fn status(client: SharedClient, values: Vec<String>) -> Result<Command, String> {
    let commitment = field(&values, 0).to_string();

    Ok(Command::new("Checking registration status", async move {
        let resp = client
            .registration_status(&commitment)
            .await
            .map_err(|e| report("registration status", e))?;
        Ok(format_status(&resp))
    }))
}

fn format_auto_register(resp: &AutoRegisterResponse) -> String {
    format!(
        "Auto Register: {}\nCommitment: {}\nLeaf Index: {}\n{}",
        status_word(resp.success),
        resp.commitment,
        resp.leaf_index,
        resp.message
    )
}

fn format_register(resp: &RegisterCommitmentResponse) -> String {
    let mut out = format!(
        "Register Commitment: {}\nLeaf Index: {}",
        status_word(resp.success),
        resp.leaf_index
    );
    if !resp.tx_hash.is_empty() {
        out.push_str(&format!("\nTx Hash: {}", resp.tx_hash));
    }
    out.push('\n');
    out.push_str(&resp.message);
    out
}

fn format_proof(resp: &MerkleProofResponse) -> String {
    let mut out = format!(
        "Merkle Proof:\nCommitment: {}\nLeaf Index: {}\nRoot: {}\nProof ({} hashes):",
        truncate_display(&resp.commitment, HASH_DISPLAY_LEN),
        resp.leaf_index,
        truncate_display(&resp.root, HASH_DISPLAY_LEN),
        resp.proof.len()
    );
    for (i, hash) in resp.proof.iter().take(PROOF_HASHES_SHOWN).enumerate() {
        out.push_str(&format!(
            "\n  [{i}] {}",
            truncate_display(hash, HASH_DISPLAY_LEN)
        ));
    }
    if resp.proof.len() > PROOF_HASHES_SHOWN {
        out.push_str(&format!(
            "\n  ... and {} more hashes",
            resp.proof.len() - PROOF_HASHES_SHOWN
        ));
    }
    out
}

fn format_tree_root(resp: &TreeRootResponse) -> String {
    format!(
        "Merkle Tree Root:\nRoot: {}\nTree Depth: {}\nLeaf Count: {}",
        resp.root, resp.tree_depth, resp.leaf_count
    )
}

fn format_status(resp: &RegistrationStatusResponse) -> String {
    let commitment = truncate_display(&resp.commitment, HASH_DISPLAY_LEN);
    if resp.registered {
        format!(
            "Registration Status: Registered ✓\nCommitment: {commitment}\nLeaf Index: {}",
            resp.leaf_index
        )
    } else {
        format!("Registration Status: Not Registered ❌\nCommitment: {commitment}")
    }
}
