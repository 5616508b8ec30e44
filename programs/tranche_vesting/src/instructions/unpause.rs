use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingState;

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        VestingError::UnauthorizedOwner
    );
    st.resume()?;
    emit!(LedgerUnpaused { owner: st.owner });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct LedgerUnpaused {
    pub owner: Pubkey,
}
