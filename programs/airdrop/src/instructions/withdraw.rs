use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{ensure_vault_covers, state_signer_seeds, transfer_from_vault};

/**
 * Account context for withdrawing from the vault
 *
 * Lets the owner move undistributed tokens out of the vault to their own
 * token account. Independent of the claim state machine.
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The airdrop state account
    /// - Checked first, so any non-owner caller fails with Unauthorized
    #[account(
        seeds = [STATE_SEED.as_bytes()],
        bump = state.bump,
        constraint = state.is_owner(&owner.key()) @ AirdropError::Unauthorized,
    )]
    pub state: Account<'info, AirdropState>,

    /// Token vault holding the undistributed tokens
    /// - Derived from: ["vault"]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = state.vault_bump,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Owner's token account to receive the tokens
    #[account(
        mut,
        token::mint = state.token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint, required by transfer_checked
    #[account(
        address = state.token_mint @ AirdropError::TokenMintMismatch,
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The owner of the airdrop
    pub owner: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// Validates a withdrawal amount against the vault balance and returns the
/// balance left after it.
pub fn process_withdraw(amount: u64, vault_balance: u64) -> Result<u64> {
    require!(amount > 0, AirdropError::InvalidAmount);
    ensure_vault_covers(vault_balance, amount)
}

/**
 * Withdraws tokens from the vault to the owner
 *
 * @param ctx - The account context containing state, vault and owner accounts
 * @param amount - Amount of tokens to withdraw
 */
pub fn handle_withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let remaining = process_withdraw(amount, ctx.accounts.token_vault.amount)?;

    let bump = [ctx.accounts.state.bump];
    let seeds = state_signer_seeds(&bump);
    let signer = &[&seeds[..]];

    transfer_from_vault(
        ctx.accounts.state.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.owner_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        signer,
    )?;

    msg!("[airdrop] withdraw amount={} remaining={}", amount, remaining);

    emit_cpi!(TokensWithdrawn {
        owner: ctx.accounts.owner.key(),
        amount,
        remaining,
    });

    Ok(())
}
