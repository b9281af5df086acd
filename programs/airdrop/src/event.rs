use anchor_lang::prelude::*;

/// Event emitted when the airdrop state is initialized
#[event]
pub struct AirdropInitialized {
    /// The state account public key
    pub state: Pubkey,
    /// Owner allowed to create the vault and withdraw
    pub owner: Pubkey,
    /// Key whose signatures authorize claims
    pub signer: Pubkey,
    /// Token mint being distributed
    pub token_mint: Pubkey,
}

/// Event emitted when the token vault is created
#[event]
pub struct VaultCreated {
    pub state: Pubkey,
    pub token_vault: Pubkey,
    pub token_mint: Pubkey,
}

/// Event emitted when a claimant redeems their authorized amount
#[event]
pub struct TokensClaimed {
    /// Address of the claimant
    pub claimant: Pubkey,
    /// Amount transferred to the claimant
    pub amount: u64,
    /// Total amount claimed by all users after this claim
    pub total_claimed: u64,
}

/// Event emitted when the owner withdraws from the vault
#[event]
pub struct TokensWithdrawn {
    pub owner: Pubkey,
    /// Amount of tokens withdrawn
    pub amount: u64,
    /// Vault balance left after the withdrawal
    pub remaining: u64,
}
