use anchor_lang::prelude::*;
use crate::constants::CLAIM_MESSAGE_LEN;

/// The statement a signer authorizes: `claimant` may redeem `amount` once.
///
/// Encoded as fixed-width binary, `claimant (32) || amount (u64 LE)`, so no
/// two distinct (claimant, amount) pairs share an encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimMessage {
    pub claimant: Pubkey,
    pub amount: u64,
}

impl ClaimMessage {
    pub fn new(claimant: Pubkey, amount: u64) -> Self {
        Self { claimant, amount }
    }

    pub fn to_bytes(&self) -> [u8; CLAIM_MESSAGE_LEN] {
        let mut out = [0u8; CLAIM_MESSAGE_LEN];
        out[..32].copy_from_slice(self.claimant.as_ref());
        out[32..].copy_from_slice(&self.amount.to_le_bytes());
        out
    }

    /// Inverse of `to_bytes`; `None` unless `data` is exactly one message
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() != CLAIM_MESSAGE_LEN {
            return None;
        }
        let claimant = Pubkey::try_from(&data[..32]).ok()?;
        let amount = u64::from_le_bytes(data[32..].try_into().ok()?);
        Some(Self { claimant, amount })
    }
}
