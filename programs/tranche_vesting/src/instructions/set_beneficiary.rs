use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::state::VestingState;

/// Reassigns the release recipient. Legal in any state; never touches
/// `total_released` or the schedule.
pub fn set_beneficiary(ctx: Context<SetBeneficiary>, new_beneficiary: Pubkey) -> Result<()> {
    require!(
        new_beneficiary != Pubkey::default(),
        VestingError::InvalidPubkey
    );

    let st = &mut ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        VestingError::UnauthorizedOwner
    );

    let old = st.beneficiary;
    st.beneficiary = new_beneficiary;

    emit!(BeneficiaryChanged {
        owner: st.owner,
        old_beneficiary: old,
        new_beneficiary,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetBeneficiary<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct BeneficiaryChanged {
    pub owner: Pubkey,
    pub old_beneficiary: Pubkey,
    pub new_beneficiary: Pubkey,
}
