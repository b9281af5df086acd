use anchor_lang::prelude::*;
use anchor_spl::token_interface::{transfer_checked, TransferChecked};
use crate::error::AirdropError;

/// Fails with `InsufficientFunds` unless the vault can pay `amount`.
/// Returns the balance the vault is left with.
pub fn ensure_vault_covers(vault_balance: u64, amount: u64) -> Result<u64> {
    vault_balance
        .checked_sub(amount)
        .ok_or_else(|| error!(AirdropError::InsufficientFunds))
}

/// Moves `amount` out of the vault, signed by the state PDA.
/// Works for both SPL Token and Token 2022.
pub fn transfer_from_vault<'a>(
    state: AccountInfo<'a>,
    vault: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: vault,
        mint,
        to,
        authority: state,
    };

    let cpi_ctx = CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds);

    transfer_checked(cpi_ctx, amount, decimals)
}
