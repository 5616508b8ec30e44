use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingState;

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        VestingError::UnauthorizedOwner
    );
    st.pause()?;
    emit!(LedgerPaused { owner: st.owner });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct LedgerPaused {
    pub owner: Pubkey,
}
