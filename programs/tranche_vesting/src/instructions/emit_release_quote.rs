use anchor_lang::prelude::*;

use crate::state::VestingState;

/// Read-only release summary at the current time, surfaced as an event.
/// Fails while the ledger is uninitialized or paused.
pub fn emit_release_quote(ctx: Context<EmitReleaseQuote>) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    let now = Clock::get()?.unix_timestamp;
    let info = st.release_info(now)?;

    emit!(ReleaseQuote {
        beneficiary: st.beneficiary,
        released: info.released,
        releasable: info.releasable,
        total: info.total,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitReleaseQuote<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,
}

#[event]
pub struct ReleaseQuote {
    pub beneficiary: Pubkey,
    pub released: u64,
    pub releasable: u64,
    pub total: u64,
    pub timestamp: i64,
}
