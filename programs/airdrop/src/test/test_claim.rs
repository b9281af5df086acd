use anchor_lang::prelude::Pubkey;
use ed25519_dalek::SigningKey;

use crate::error::AirdropError;
use crate::test::fixtures::*;
use crate::utils::*;

const FUNDED: u64 = 1_000_000_000;
const AIRDROP_AMOUNT: u64 = 100_000_000;

struct Deployment {
    ledger: Ledger,
    owner: Pubkey,
    signer: SigningKey,
    user: Pubkey,
}

/// Owner O and signer S initialize, create the vault and fund it with 1,000,000,000
fn funded_deployment() -> Deployment {
    let owner = wallet(1);
    let signer = signing_key(2);
    let token_mint = wallet(3);
    let user = wallet(4);

    let mut ledger = Ledger::new();
    ledger.initialize(owner, pubkey_of(&signer), token_mint).expect("initialize");
    ledger.create_vault(owner).expect("create vault");
    ledger.fund_vault(FUNDED);

    Deployment { ledger, owner, signer, user }
}

/// Scenario A: the user claims 100,000,000
fn after_first_claim() -> Deployment {
    let mut d = funded_deployment();
    let (signature, ix) = claim_ix(&d.signer, &d.user, AIRDROP_AMOUNT);
    d.ledger.claim(d.user, AIRDROP_AMOUNT, signature, Some(&ix)).expect("claim");
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_and_create_vault() {
        let d = funded_deployment();
        let state = d.ledger.state();

        assert_eq!(state.owner, d.owner);
        assert_eq!(state.signer, pubkey_of(&d.signer));
        assert_eq!(state.token_vault, d.ledger.vault_address());
        assert_eq!(state.vault_bump, find_vault_address(&crate::ID).1);
        assert_eq!(state.total_claimed, 0);
        assert_eq!(d.ledger.vault_balance(), FUNDED);
    }

    #[test]
    fn test_initialize_twice_fails() {
        let mut d = funded_deployment();

        assert_airdrop_error(
            d.ledger.initialize(d.user, d.user, wallet(5)),
            AirdropError::AlreadyInitialized,
        );
        assert_eq!(d.ledger.state().owner, d.owner);
    }

    #[test]
    fn test_create_vault_restrictions() {
        let mut d = funded_deployment();

        assert_airdrop_error(d.ledger.create_vault(d.user), AirdropError::Unauthorized);
        assert_airdrop_error(d.ledger.create_vault(d.owner), AirdropError::VaultAlreadyExists);
        assert_eq!(d.ledger.vault_balance(), FUNDED);
    }

    #[test]
    fn test_scenario_a_claim_succeeds() {
        let d = after_first_claim();

        assert_eq!(d.ledger.balance(&d.user), AIRDROP_AMOUNT);
        assert_eq!(d.ledger.vault_balance(), 900_000_000);
        assert_eq!(d.ledger.state().total_claimed, AIRDROP_AMOUNT);

        let record = d.ledger.claim_record(&d.user).expect("claim record");
        assert!(record.is_claimed);
        assert_eq!(record.claimant, d.user);
        assert_eq!(record.claimed_amount, AIRDROP_AMOUNT);
        assert_eq!(record.bump, find_claim_record_address(&crate::ID, &d.user).1);
    }

    #[test]
    fn test_scenario_b_repeat_claim_fails() {
        let mut d = after_first_claim();
        let (signature, ix) = claim_ix(&d.signer, &d.user, AIRDROP_AMOUNT);

        assert_airdrop_error(
            d.ledger.claim(d.user, AIRDROP_AMOUNT, signature, Some(&ix)),
            AirdropError::AlreadyClaimed,
        );
        assert_eq!(d.ledger.balance(&d.user), AIRDROP_AMOUNT);
        assert_eq!(d.ledger.vault_balance(), 900_000_000);
        assert_eq!(d.ledger.state().total_claimed, AIRDROP_AMOUNT);
    }

    #[test]
    fn test_repeat_claim_with_fresh_authorization_fails() {
        let mut d = after_first_claim();
        // Even a genuine authorization for a different amount cannot reopen the record
        let (signature, ix) = claim_ix(&d.signer, &d.user, 5);

        assert_airdrop_error(d.ledger.claim(d.user, 5, signature, Some(&ix)), AirdropError::AlreadyClaimed);
        assert_eq!(d.ledger.state().total_claimed, AIRDROP_AMOUNT);
        assert_eq!(d.ledger.claim_record(&d.user).unwrap().claimed_amount, AIRDROP_AMOUNT);
    }

    #[test]
    fn test_already_claimed_is_checked_before_signature() {
        let mut d = after_first_claim();

        assert_airdrop_error(d.ledger.claim(d.user, AIRDROP_AMOUNT, [0; 64], None), AirdropError::AlreadyClaimed);
    }

    #[test]
    fn test_scenario_c_owner_withdraws() {
        let mut d = after_first_claim();
        let owner_before = d.ledger.balance(&d.owner);

        d.ledger.withdraw(d.owner, 50_000_000).expect("withdraw");

        assert_eq!(d.ledger.vault_balance(), 850_000_000);
        assert_eq!(d.ledger.balance(&d.owner), owner_before + 50_000_000);
    }

    #[test]
    fn test_scenario_d_non_owner_withdraw_fails() {
        let mut d = after_first_claim();
        d.ledger.withdraw(d.owner, 50_000_000).expect("withdraw");

        assert_airdrop_error(d.ledger.withdraw(d.user, 10_000_000), AirdropError::Unauthorized);
        assert_eq!(d.ledger.vault_balance(), 850_000_000);
        assert_eq!(d.ledger.balance(&d.user), AIRDROP_AMOUNT);

        // the signer key is not an owner either
        assert_airdrop_error(
            d.ledger.withdraw(pubkey_of(&d.signer), 10_000_000),
            AirdropError::Unauthorized,
        );
    }

    #[test]
    fn test_signature_replayed_with_other_amount_fails() {
        let mut d = funded_deployment();
        let (signature, ix) = claim_ix(&d.signer, &d.user, AIRDROP_AMOUNT);

        assert_airdrop_error(
            d.ledger.claim(d.user, AIRDROP_AMOUNT * 2, signature, Some(&ix)),
            AirdropError::InvalidSignature,
        );
        assert!(d.ledger.claim_record(&d.user).is_none());
        assert_eq!(d.ledger.vault_balance(), FUNDED);
        assert_eq!(d.ledger.state().total_claimed, 0);

        // the untouched authorization still works afterwards
        d.ledger.claim(d.user, AIRDROP_AMOUNT, signature, Some(&ix)).expect("claim");
    }

    #[test]
    fn test_signature_replayed_by_other_claimant_fails() {
        let mut d = funded_deployment();
        let thief = wallet(6);
        let (signature, ix) = claim_ix(&d.signer, &d.user, AIRDROP_AMOUNT);

        assert_airdrop_error(
            d.ledger.claim(thief, AIRDROP_AMOUNT, signature, Some(&ix)),
            AirdropError::InvalidSignature,
        );
        assert_eq!(d.ledger.balance(&thief), 0);
        assert!(d.ledger.claim_record(&thief).is_none());
    }

    #[test]
    fn test_authorization_from_other_key_fails() {
        let mut d = funded_deployment();
        let forger = signing_key(7);
        let (signature, ix) = claim_ix(&forger, &d.user, AIRDROP_AMOUNT);

        assert_airdrop_error(
            d.ledger.claim(d.user, AIRDROP_AMOUNT, signature, Some(&ix)),
            AirdropError::InvalidSignature,
        );
        assert_eq!(d.ledger.vault_balance(), FUNDED);
    }

    #[test]
    fn test_owner_key_cannot_authorize_claims() {
        let mut d = funded_deployment();
        let owner_key = signing_key(1);
        let (signature, ix) = claim_ix(&owner_key, &d.user, AIRDROP_AMOUNT);

        assert_airdrop_error(
            d.ledger.claim(d.user, AIRDROP_AMOUNT, signature, Some(&ix)),
            AirdropError::InvalidSignature,
        );
    }

    #[test]
    fn test_missing_verify_instruction_fails() {
        let mut d = funded_deployment();
        let signature = sign_claim(&d.signer, &d.user, AIRDROP_AMOUNT);

        assert_airdrop_error(
            d.ledger.claim(d.user, AIRDROP_AMOUNT, signature, None),
            AirdropError::InvalidSignature,
        );
        assert!(d.ledger.claim_record(&d.user).is_none());
    }

    #[test]
    fn test_forged_signature_rejected_by_runtime() {
        let mut d = funded_deployment();
        let mut signature = sign_claim(&d.signer, &d.user, AIRDROP_AMOUNT);
        signature[10] ^= 0x55;
        let message = ClaimMessage::new(d.user, AIRDROP_AMOUNT).to_bytes();
        let ix = ed25519_ix(&pubkey_of(&d.signer), &signature, &message);

        let err = d
            .ledger
            .claim(d.user, AIRDROP_AMOUNT, signature, Some(&ix))
            .expect_err("forged signature");
        assert_eq!(error_code(&err), Some(PRECOMPILE_INVALID_SIGNATURE));
        assert_eq!(d.ledger.vault_balance(), FUNDED);
        assert!(d.ledger.claim_record(&d.user).is_none());
    }

    #[test]
    fn test_zero_amount_claim_fails() {
        let mut d = funded_deployment();
        let (signature, ix) = claim_ix(&d.signer, &d.user, 0);

        assert_airdrop_error(d.ledger.claim(d.user, 0, signature, Some(&ix)), AirdropError::InvalidAmount);
        assert!(d.ledger.claim_record(&d.user).is_none());
    }

    #[test]
    fn test_claim_beyond_vault_balance_mutates_nothing() {
        let mut d = funded_deployment();
        let amount = FUNDED + 1;
        let (signature, ix) = claim_ix(&d.signer, &d.user, amount);

        assert_airdrop_error(d.ledger.claim(d.user, amount, signature, Some(&ix)), AirdropError::InsufficientFunds);
        assert_eq!(d.ledger.vault_balance(), FUNDED);
        assert_eq!(d.ledger.balance(&d.user), 0);
        assert_eq!(d.ledger.state().total_claimed, 0);
        assert!(d.ledger.claim_record(&d.user).is_none());

        // after a top-up the same authorization goes through
        d.ledger.fund_vault(1);
        d.ledger.claim(d.user, amount, signature, Some(&ix)).expect("claim");
        assert_eq!(d.ledger.vault_balance(), 0);
    }

    #[test]
    fn test_withdraw_beyond_vault_balance_mutates_nothing() {
        let mut d = after_first_claim();

        assert_airdrop_error(d.ledger.withdraw(d.owner, 900_000_001), AirdropError::InsufficientFunds);
        assert_eq!(d.ledger.vault_balance(), 900_000_000);
        assert_eq!(d.ledger.balance(&d.owner), 0);

        d.ledger.withdraw(d.owner, 900_000_000).expect("drain vault");
        assert_eq!(d.ledger.vault_balance(), 0);
    }

    #[test]
    fn test_claim_fails_after_owner_drains_vault() {
        let mut d = funded_deployment();
        d.ledger.withdraw(d.owner, FUNDED).expect("withdraw");
        let (signature, ix) = claim_ix(&d.signer, &d.user, AIRDROP_AMOUNT);

        assert_airdrop_error(
            d.ledger.claim(d.user, AIRDROP_AMOUNT, signature, Some(&ix)),
            AirdropError::InsufficientFunds,
        );
    }

    #[test]
    fn test_total_claimed_matches_claim_records() {
        let mut d = funded_deployment();
        let claims: Vec<(Pubkey, u64)> = (10u8..20).map(|seed| (wallet(seed), seed as u64 * 1_000_000)).collect();

        for (claimant, amount) in &claims {
            let (signature, ix) = claim_ix(&d.signer, claimant, *amount);
            d.ledger.claim(*claimant, *amount, signature, Some(&ix)).expect("claim");
            // a second attempt never changes the totals
            assert!(d.ledger.claim(*claimant, *amount, signature, Some(&ix)).is_err());
        }
        d.ledger.withdraw(d.owner, 7_000_000).expect("withdraw");

        let claimed: u64 = claims.iter().map(|(_, amount)| amount).sum();
        let recorded: u64 = d
            .ledger
            .claim_records
            .values()
            .filter(|record| record.is_claimed)
            .map(|record| record.claimed_amount)
            .sum();

        assert_eq!(d.ledger.state().total_claimed, claimed);
        assert_eq!(recorded, claimed);
        assert_eq!(d.ledger.vault_balance(), FUNDED - claimed - 7_000_000);
        for (claimant, amount) in &claims {
            assert_eq!(d.ledger.balance(claimant), *amount);
        }
    }

    #[test]
    fn test_claim_before_initialize_fails() {
        let mut ledger = Ledger::new();
        let signer = signing_key(2);
        let user = wallet(4);
        let (signature, ix) = claim_ix(&signer, &user, AIRDROP_AMOUNT);

        assert!(ledger.claim(user, AIRDROP_AMOUNT, signature, Some(&ix)).is_err());
        assert!(ledger.claim_record(&user).is_none());
    }
}
