use anchor_lang::prelude::*;

use crate::constants::DEFAULT_TRANCHE_CONFIG;
use crate::error::VestingError;
use crate::state::VestingState;

/// One-time activation: fixes the schedule, the start time and the
/// beneficiary, and opens the release gate.
pub fn initialize(
    ctx: Context<Initialize>,
    start_ts: i64,
    beneficiary: Pubkey,
    total_pool: u64,
) -> Result<()> {
    require!(total_pool > 0, VestingError::InvalidConfig);
    require!(start_ts > 0, VestingError::InvalidTimestamp);
    require!(beneficiary != Pubkey::default(), VestingError::InvalidPubkey);

    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        VestingError::UnauthorizedOwner
    );

    st.activate(start_ts, beneficiary, total_pool, &DEFAULT_TRANCHE_CONFIG)?;

    emit!(Initialized {
        owner: st.owner,
        beneficiary,
        start_ts,
        total_pool,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct Initialized {
    pub owner: Pubkey,
    pub beneficiary: Pubkey,
    pub start_ts: i64,
    pub total_pool: u64,
}
