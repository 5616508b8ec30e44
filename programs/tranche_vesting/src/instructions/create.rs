use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::TRANCHE_COUNT;
use crate::state::{LedgerStatus, Tranche, VestingState};

/// Constructor analog: creates the ledger PDA and its vault in the
/// `Uninitialized` state. The release gate stays closed until `initialize`;
/// the owner may already withdraw the full vault balance.
pub fn create(ctx: Context<Create>) -> Result<()> {
    let st = &mut ctx.accounts.vesting_state;
    st.owner = ctx.accounts.owner.key();
    st.mint = ctx.accounts.mint.key();
    st.beneficiary = Pubkey::default();
    st.start_ts = 0;
    st.total_pool = 0;
    st.total_released = 0;
    st.status = LedgerStatus::Uninitialized;
    st.tranches = [Tranche::default(); TRANCHE_COUNT];

    emit!(LedgerCreated {
        owner: st.owner,
        mint: st.mint,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Create<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + VestingState::SIZE,
        seeds = [b"vesting_state"],
        bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = vesting_state,
        seeds = [b"vault", vesting_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct LedgerCreated {
    pub owner: Pubkey,
    pub mint: Pubkey,
}
