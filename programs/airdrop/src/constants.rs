use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds, the canonical claim message size, and the layout of the
 * Ed25519 signature-verify instruction that authorizes a claim.
 */

/// ===== PDA SEED CONSTANTS =====

/// Seed for the singleton state PDA
/// - Used in: ["state"]
/// - The state PDA is also the token authority of the vault
#[constant]
pub const STATE_SEED: &str = "state";

/// Seed for the token vault PDA
/// - Used in: ["vault"]
/// - Holds every token that has not been claimed or withdrawn yet
#[constant]
pub const VAULT_SEED: &str = "vault";

/// Seed for claim record PDAs
/// - Used in: ["claim", claimant_key]
/// - One record per claimant; two claims by the same wallet land on the same address
#[constant]
pub const CLAIM_SEED: &str = "claim";

/// ===== CLAIM MESSAGE =====

/// Size of the signed claim message: claimant (32) || amount as u64 LE (8)
pub const CLAIM_MESSAGE_LEN: usize = 32 + 8;

/// ===== ED25519 INSTRUCTION LAYOUT =====

/// Header of an Ed25519 program instruction: signature count + padding byte
pub const ED25519_HEADER_LEN: usize = 2;

/// Size of one `Ed25519SignatureOffsets` entry (seven u16 fields)
pub const ED25519_OFFSETS_LEN: usize = 14;

/// Start of the inline data section when a single signature is carried
pub const ED25519_DATA_START: usize = ED25519_HEADER_LEN + ED25519_OFFSETS_LEN;

pub const ED25519_PUBKEY_LEN: usize = 32;

pub const ED25519_SIGNATURE_LEN: usize = 64;

/// Instruction index meaning "the data lives in this same instruction"
pub const ED25519_CURRENT_INSTRUCTION: u16 = u16::MAX;
