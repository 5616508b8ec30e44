pub mod tranche;
pub mod vesting_state;

pub use tranche::*;
pub use vesting_state::*;
