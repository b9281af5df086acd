use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::sysvar::instructions as sysvar_instructions;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::*;

/**
 * Account context for claiming tokens
 *
 * This instruction lets a wallet redeem the amount the airdrop signer
 * authorized for it, exactly once. The transaction must carry an Ed25519
 * verify instruction, placed immediately before this one, over the claim
 * message `claimer || amount` signed by the configured signer.
 *
 * Access Control: Any wallet holding a signer authorization for itself
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The airdrop state account
    /// - Will be modified to update total_claimed
    #[account(
        mut,
        seeds = [STATE_SEED.as_bytes()],
        bump = state.bump,
    )]
    pub state: Account<'info, AirdropState>,

    /// Claim record for this claimer
    /// - Derived from: ["claim", claimer_key]
    /// - Concurrent claims by the same wallet all write this one account
    #[account(
        init_if_needed,
        payer = claimer,
        space = ClaimRecord::LEN,
        seeds = [CLAIM_SEED.as_bytes(), claimer.key().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Token vault holding the tokens to be distributed
    /// - Controlled by the state PDA
    /// - Derived from: ["vault"]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = state.vault_bump,
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Claimer's token account to receive the tokens
    /// - Must be owned by the claimer
    /// - Must be for the airdrop token mint
    #[account(
        mut,
        token::mint = state.token_mint,
        token::authority = claimer,
        token::token_program = token_program,
    )]
    pub claimer_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The token mint, required by transfer_checked
    #[account(
        address = state.token_mint @ AirdropError::TokenMintMismatch,
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// The wallet claiming its authorized amount
    #[account(mut)]
    pub claimer: Signer<'info>,

    /// CHECK: address is constrained to the instructions sysvar
    #[account(address = sysvar_instructions::ID)]
    pub instructions_sysvar: AccountInfo<'info>,

    /// System program for claim record creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/// What the claimer submits, bound to the signing wallet
#[derive(Clone, Copy, Debug)]
pub struct ClaimRequest {
    pub claimant: Pubkey,
    pub amount: u64,
    pub signature: [u8; 64],
}

impl ClaimRequest {
    pub fn message(&self) -> ClaimMessage {
        ClaimMessage::new(self.claimant, self.amount)
    }
}

/**
 * Validates a claim and applies its ledger effects
 *
 * Every check runs before the first mutation, so an error leaves both the
 * state and the claim record untouched. The caller moves the tokens after
 * this returns; the transaction reverts everything if that transfer fails.
 *
 * Check order:
 * 1. Claim record not already claimed (AlreadyClaimed)
 * 2. Non-zero amount (InvalidAmount)
 * 3. Ed25519 instruction binds signer, message and signature (InvalidSignature)
 * 4. Vault covers the amount (InsufficientFunds)
 * 5. Running total does not overflow (Overflow)
 *
 * @returns the new total_claimed
 */
pub fn process_claim(
    state: &mut AirdropState,
    claim_record: &mut ClaimRecord,
    claim_record_bump: u8,
    request: &ClaimRequest,
    ed25519_ix: Option<&Instruction>,
    vault_balance: u64,
) -> Result<u64> {
    // ===== VALIDATION PHASE =====

    claim_record.ensure_unclaimed()?;

    require!(request.amount > 0, AirdropError::InvalidAmount);

    let message = request.message().to_bytes();
    let authorized = ed25519_ix.is_some_and(|ix| {
        verify_ed25519_instruction(ix, state.signer.as_ref(), &message, &request.signature)
    });
    require!(authorized, AirdropError::InvalidSignature);

    ensure_vault_covers(vault_balance, request.amount)?;
    state.total_after_claim(request.amount)?;

    // ===== EFFECTS PHASE =====

    claim_record.mark_claimed(request.claimant, request.amount, claim_record_bump)?;
    state.record_claim(request.amount)
}

/**
 * Processes a signature-authorized claim
 *
 * @param ctx - The account context containing state, claim record and token accounts
 * @param amount - Amount the signer authorized for this claimer
 * @param signature - Signer's Ed25519 signature over `claimer || amount`
 */
pub fn handle_claim(ctx: Context<Claim>, amount: u64, signature: [u8; 64]) -> Result<()> {
    let ed25519_ix = load_preceding_instruction(&ctx.accounts.instructions_sysvar)?;
    let request = ClaimRequest {
        claimant: ctx.accounts.claimer.key(),
        amount,
        signature,
    };

    let total_claimed = process_claim(
        &mut ctx.accounts.state,
        &mut ctx.accounts.claim_record,
        ctx.bumps.claim_record,
        &request,
        ed25519_ix.as_ref(),
        ctx.accounts.token_vault.amount,
    )?;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    let bump = [ctx.accounts.state.bump];
    let seeds = state_signer_seeds(&bump);
    let signer = &[&seeds[..]];

    transfer_from_vault(
        ctx.accounts.state.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.claimer_token_account.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        signer,
    )?;

    msg!(
        "[airdrop] claim claimant={} amount={} total_claimed={}",
        request.claimant,
        amount,
        total_claimed
    );

    emit_cpi!(TokensClaimed {
        claimant: request.claimant,
        amount,
        total_claimed,
    });

    Ok(())
}
