use anchor_lang::prelude::*;
use crate::error::AirdropError;

/**
 * Singleton airdrop state account
 *
 * Holds the configuration of one airdrop deployment and the running total of
 * every amount successfully claimed from it.
 *
 * Derivation: ["state"]
 *
 * Lifecycle:
 * 1. Created during initialize (owner, signer and token mint fixed here)
 * 2. Updated once during create_vault (vault key and bump recorded)
 * 3. Updated during claims (total_claimed increments)
 * 4. Never closed
 *
 * The state PDA is the token authority of the vault, so vault funds can only
 * leave through this program's claim and withdraw instructions.
 */
#[account]
#[derive(Default, Debug)]
pub struct AirdropState {
    /// Bump seed of this PDA
    /// - Re-derives the state address when signing vault transfers
    pub bump: u8,

    /// Bump seed of the vault PDA, zero until the vault exists
    pub vault_bump: u8,

    /// Owner of the airdrop
    /// - Creates the vault and is the only identity allowed to withdraw
    pub owner: Pubkey,

    /// Public key whose Ed25519 signatures authorize claims
    /// - Distinct from the owner
    pub signer: Pubkey,

    /// Token mint being distributed
    pub token_mint: Pubkey,

    /// Token vault account address
    /// - Derived from: ["vault"]
    /// - Default key until create_vault runs
    pub token_vault: Pubkey,

    /// Total amount of tokens claimed by all users
    /// - Only ever increases
    pub total_claimed: u64,
}

impl AirdropState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<AirdropState>();

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn has_vault(&self) -> bool {
        self.token_vault != Pubkey::default()
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.is_initialized() && self.owner == *key
    }

    /// Fills a freshly created state record. Owner and signer cannot be
    /// changed afterwards.
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        signer: Pubkey,
        token_mint: Pubkey,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_initialized(), AirdropError::AlreadyInitialized);
        require!(signer != Pubkey::default(), AirdropError::InvalidSigner);

        self.bump = bump;
        self.owner = owner;
        self.signer = signer;
        self.token_mint = token_mint;
        self.token_vault = Pubkey::default();
        self.vault_bump = 0;
        self.total_claimed = 0;
        Ok(())
    }

    /// Records the vault created for this airdrop
    pub fn attach_vault(&mut self, token_vault: Pubkey, vault_bump: u8) -> Result<()> {
        require!(!self.has_vault(), AirdropError::VaultAlreadyExists);

        self.token_vault = token_vault;
        self.vault_bump = vault_bump;
        Ok(())
    }

    /// Total that `record_claim(amount)` would produce, without applying it
    pub fn total_after_claim(&self, amount: u64) -> Result<u64> {
        self.total_claimed
            .checked_add(amount)
            .ok_or_else(|| error!(AirdropError::Overflow))
    }

    /// Adds a redeemed amount to the running total and returns the new total
    pub fn record_claim(&mut self, amount: u64) -> Result<u64> {
        let new_total = self.total_after_claim(amount)?;
        self.total_claimed = new_total;
        Ok(new_total)
    }
}
