use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating the token vault
 *
 * Creates the vault token account as a PDA whose token authority is the
 * state PDA. Funding the vault happens outside this program (plain token
 * transfers or mints into the vault address).
 *
 * Access Control: Owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreateVault<'info> {
    /// The airdrop state account
    /// - Must be initialized and owned by the caller
    /// - Records the vault key and bump
    #[account(
        mut,
        seeds = [STATE_SEED.as_bytes()],
        bump = state.bump,
        has_one = owner @ AirdropError::Unauthorized,
        has_one = token_mint @ AirdropError::TokenMintMismatch,
    )]
    pub state: Account<'info, AirdropState>,

    /// Token vault account (PDA) that holds the tokens to be distributed
    /// - Controlled by the state PDA as token authority
    /// - Derived from: ["vault"]
    #[account(
        init_if_needed,
        payer = owner,
        token::mint = token_mint,
        token::authority = state,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes()],
        bump,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The token mint configured at initialization
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The owner of the airdrop
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

pub fn handle_create_vault(ctx: Context<CreateVault>) -> Result<()> {
    let state = &mut ctx.accounts.state;

    state.attach_vault(ctx.accounts.token_vault.key(), ctx.bumps.token_vault)?;

    msg!("[airdrop] vault created vault={}", state.token_vault);

    emit_cpi!(VaultCreated {
        state: state.key(),
        token_vault: state.token_vault,
        token_mint: state.token_mint,
    });

    Ok(())
}
