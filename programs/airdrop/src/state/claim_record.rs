use anchor_lang::prelude::*;
use crate::error::AirdropError;

/**
 * Per-claimant claim record
 *
 * Marks that a wallet has redeemed its authorized amount. The address is a
 * pure function of the claim seed and the claimant key, so every claim attempt
 * by the same wallet targets this one account.
 *
 * Derivation: ["claim", claimant_key]
 *
 * Lifecycle:
 * 1. Created on the first claim attempt (using init_if_needed)
 * 2. Marked claimed in the same transaction
 * 3. Never modified or closed afterwards
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Set exactly once, when the claim succeeds
    pub is_claimed: bool,

    /// Wallet that redeemed
    pub claimant: Pubkey,

    /// Amount redeemed
    pub claimed_amount: u64,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();

    pub fn ensure_unclaimed(&self) -> Result<()> {
        require!(!self.is_claimed, AirdropError::AlreadyClaimed);
        Ok(())
    }

    /// Unclaimed -> Claimed. There is no transition back.
    pub fn mark_claimed(&mut self, claimant: Pubkey, amount: u64, bump: u8) -> Result<()> {
        self.ensure_unclaimed()?;

        self.bump = bump;
        self.is_claimed = true;
        self.claimant = claimant;
        self.claimed_amount = amount;
        Ok(())
    }
}
