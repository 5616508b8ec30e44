use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::VestingState;

/// Transfers the currently releasable amount to the beneficiary. A call with
/// nothing vested since the last release is a no-op: no transfer, no event.
/// `total_released` moves only after the transfer is confirmed, so a failed
/// transfer leaves no partial state.
pub fn release(ctx: Context<Release>) -> Result<()> {
    let vesting_state_ai = ctx.accounts.vesting_state.to_account_info();
    let vesting_state_bump = ctx.bumps.vesting_state;

    let st = &mut ctx.accounts.vesting_state;

    let now = Clock::get()?.unix_timestamp;
    let amount = st.releasable(now)?;
    if amount == 0 {
        return Ok(());
    }

    require_keys_eq!(ctx.accounts.mint.key(), st.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.beneficiary_token.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token.owner,
        st.beneficiary,
        VestingError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.vault.amount >= amount,
        VestingError::TransferFailed
    );

    let signer_seeds: &[&[&[u8]]] = &[&[b"vesting_state", &[vesting_state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_token.to_account_info(),
                authority: vesting_state_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    st.record_release(amount)?;

    emit!(Released {
        beneficiary: st.beneficiary,
        amount,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(mut, seeds = [b"vesting_state"], bump)]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [b"vault", vesting_state.key().as_ref()],
        bump,
        constraint = vault.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Released {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
