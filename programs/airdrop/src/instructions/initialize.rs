use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for initializing the airdrop
 *
 * Creates the singleton state PDA and fixes the owner, the claim signer key
 * and the token mint for the lifetime of the deployment.
 *
 * Access Control: Whoever initializes first becomes the owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The airdrop state account (PDA)
    /// - Derived from: ["state"]
    /// - An existing record is loaded, and the handler rejects it with AlreadyInitialized
    #[account(
        init_if_needed,
        payer = owner,
        space = AirdropState::LEN,
        seeds = [STATE_SEED.as_bytes()],
        bump
    )]
    pub state: Account<'info, AirdropState>,

    /// The token mint being distributed
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The owner of the airdrop
    /// - Pays for the state account
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Initializes the airdrop state
 *
 * @param ctx - The account context containing the state, mint and owner accounts
 * @param signer - Public key whose signatures will authorize claims
 */
pub fn handle_initialize(ctx: Context<Initialize>, signer: Pubkey) -> Result<()> {
    let state = &mut ctx.accounts.state;

    state.initialize(
        ctx.accounts.owner.key(),
        signer,
        ctx.accounts.token_mint.key(),
        ctx.bumps.state,
    )?;

    msg!(
        "[airdrop] initialized owner={} signer={} mint={}",
        state.owner,
        state.signer,
        state.token_mint
    );

    emit_cpi!(AirdropInitialized {
        state: state.key(),
        owner: state.owner,
        signer: state.signer,
        token_mint: state.token_mint,
    });

    Ok(())
}
