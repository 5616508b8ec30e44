use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::state::VestingState;

/// Owner withdrawal of the unreserved portion of the vault. Legal only while
/// the ledger is paused or not yet initialized; tokens still owed to the
/// beneficiary can never leave through this path.
pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidConfig);

    let st = &ctx.accounts.vesting_state;
    require_keys_eq!(
        ctx.accounts.owner.key(),
        st.owner,
        VestingError::UnauthorizedOwner
    );
    st.require_withdraw_allowed()?;

    require_keys_eq!(ctx.accounts.mint.key(), st.mint, VestingError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.owner_destination.mint,
        st.mint,
        VestingError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.owner_destination.owner,
        ctx.accounts.owner.key(),
        VestingError::InvalidTokenAccount
    );

    let withdrawable = st.withdrawable(ctx.accounts.vault.amount);
    require!(amount <= withdrawable, VestingError::InsufficientWithdrawable);

    let signer_seeds: &[&[&[u8]]] = &[&[b"vesting_state", &[ctx.bumps.vesting_state]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.owner_destination.to_account_info(),
                authority: ctx.accounts.vesting_state.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(Withdrawn {
        owner: st.owner,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
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
    pub owner_destination: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct Withdrawn {
    pub owner: Pubkey,
    pub amount: u64,
}
