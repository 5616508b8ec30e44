use anchor_lang::prelude::*;

use crate::state::VestingState;

/// Per-day release rate of the tranche containing the current time, surfaced
/// as an event. Same gating as the release quote.
pub fn emit_daily_quote(ctx: Context<EmitDailyQuote>) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    let now = Clock::get()?.unix_timestamp;
    let rate = st.daily_releasable(now)?;

    emit!(DailyQuote {
        rate,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitDailyQuote<'info> {
    #[account(seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,
}

#[event]
pub struct DailyQuote {
    pub rate: u64,
    pub timestamp: i64,
}
