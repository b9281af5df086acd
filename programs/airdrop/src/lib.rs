use anchor_lang::prelude::*;

declare_id!("HMsLRRqoo8SpnR9acz49Mq7ht19x93Kp62DdGFKoRTYe");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Airdrop Program
 *
 * A Solana program for one-time token claims authorized by an off-chain
 * signer. The owner funds a vault; a separate signer key authorizes each
 * (claimant, amount) pair with an Ed25519 signature; each wallet redeems its
 * authorization at most once.
 *
 * Key Features:
 * - Ed25519 signature authorization via the native signature-verify program
 * - Fixed-width claim message (claimant || amount) bound to the claiming wallet
 * - Exactly-once claims through a per-claimant claim record PDA
 * - Separate owner and signer roles
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - State PDA ["state"]: owner, signer, mint, vault and running claim total
 * - Token Vault PDA ["vault"]: holds undistributed tokens, authority = state PDA
 * - Claim Record PDAs ["claim", claimant]: mark wallets that have claimed
 *
 * Workflow:
 * 1. Owner initializes the program with the signer key and token mint
 * 2. Owner creates the vault and funds it
 * 3. Signer hands out signatures over (claimant, amount) off-chain
 * 4. Claimants submit [Ed25519 verify, claim] transactions
 * 5. Owner withdraws leftover tokens at any time
 */
#[program]
pub mod airdrop {
    use super::*;

    /**
     * Initializes the airdrop state
     *
     * @param ctx - Account context containing state, mint and owner accounts
     * @param signer - Public key whose signatures authorize claims
     *
     * Access Control: First caller becomes the owner; callable once
     */
    pub fn initialize(ctx: Context<Initialize>, signer: Pubkey) -> Result<()> {
        handle_initialize(ctx, signer)
    }

    /**
     * Creates the token vault controlled by the state PDA
     *
     * Access Control: Owner only; callable once
     */
    pub fn create_vault(ctx: Context<CreateVault>) -> Result<()> {
        handle_create_vault(ctx)
    }

    /**
     * Claims the amount the signer authorized for the calling wallet
     *
     * @param ctx - Account context containing state, claim record and token accounts
     * @param amount - Authorized amount
     * @param signature - Signer's Ed25519 signature over `claimer || amount`
     *
     * Access Control: Any wallet with a valid authorization, once per wallet
     * Note: Requires an Ed25519 verify instruction immediately before this one
     */
    pub fn claim(ctx: Context<Claim>, amount: u64, signature: [u8; 64]) -> Result<()> {
        handle_claim(ctx, amount, signature)
    }

    /**
     * Withdraws tokens from the vault to the owner
     *
     * @param ctx - Account context containing state, vault and owner accounts
     * @param amount - Amount to withdraw
     *
     * Access Control: Owner only
     */
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        handle_withdraw(ctx, amount)
    }
}
