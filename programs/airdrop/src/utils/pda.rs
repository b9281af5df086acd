use anchor_lang::prelude::*;
use crate::constants::*;

/// Address and bump of the singleton state account
pub fn find_state_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATE_SEED.as_bytes()], program_id)
}

/// Address and bump of the token vault
pub fn find_vault_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED.as_bytes()], program_id)
}

/// Address and bump of the claim record for `claimant`
pub fn find_claim_record_address(program_id: &Pubkey, claimant: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CLAIM_SEED.as_bytes(), claimant.as_ref()], program_id)
}

/// Signer seeds of the state PDA, used when it authorizes vault transfers
pub fn state_signer_seeds(bump: &[u8; 1]) -> [&[u8]; 2] {
    [STATE_SEED.as_bytes(), &bump[..]]
}
