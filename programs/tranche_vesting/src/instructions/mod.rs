pub mod create;
pub mod initialize;
pub mod set_beneficiary;
pub mod deposit;
pub mod pause;
pub mod unpause;
pub mod release;
pub mod withdraw;
pub mod emit_release_quote;
pub mod emit_daily_quote;

pub use create::*;
pub use initialize::*;
pub use set_beneficiary::*;
pub use deposit::*;
pub use pause::*;
pub use unpause::*;
pub use release::*;
pub use withdraw::*;
pub use emit_release_quote::*;
pub use emit_daily_quote::*;
