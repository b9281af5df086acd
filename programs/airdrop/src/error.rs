use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Access control errors
    #[msg("Only the owner can perform this action")]
    Unauthorized,

    // Claim authorization errors
    #[msg("Claim signature is missing or does not match the configured signer")]
    InvalidSignature,
    #[msg("This wallet has already claimed")]
    AlreadyClaimed,

    // Lifecycle errors
    #[msg("Airdrop state is already initialized")]
    AlreadyInitialized,
    #[msg("Token vault already exists")]
    VaultAlreadyExists,

    // Amount validation errors
    #[msg("Insufficient vault balance")]
    InsufficientFunds,
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    // Configuration errors
    #[msg("Signer key cannot be the default public key")]
    InvalidSigner,
    #[msg("Token mint does not match the airdrop token mint")]
    TokenMintMismatch,
}
