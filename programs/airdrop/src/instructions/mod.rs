pub mod initialize;
pub mod create_vault;
pub mod claim;
pub mod withdraw;

pub use initialize::*;
pub use create_vault::*;
pub use claim::*;
pub use withdraw::*;
