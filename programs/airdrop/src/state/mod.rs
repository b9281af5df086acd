pub mod airdrop_state;
pub mod claim_record;

pub use airdrop_state::*;
pub use claim_record::*;
