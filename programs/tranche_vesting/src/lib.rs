use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod tranche_vesting {
    use super::*;

    pub fn create(ctx: Context<Create>) -> Result<()> {
        instructions::create::create(ctx)
    }

    pub fn initialize(
        ctx: Context<Initialize>,
        start_ts: i64,
        beneficiary: Pubkey,
        total_pool: u64,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, start_ts, beneficiary, total_pool)
    }

    pub fn set_beneficiary(ctx: Context<SetBeneficiary>, new_beneficiary: Pubkey) -> Result<()> {
        instructions::set_beneficiary::set_beneficiary(ctx, new_beneficiary)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::deposit(ctx, amount)
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::unpause(ctx)
    }

    pub fn release(ctx: Context<Release>) -> Result<()> {
        instructions::release::release(ctx)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::withdraw(ctx, amount)
    }

    pub fn emit_release_quote(ctx: Context<EmitReleaseQuote>) -> Result<()> {
        instructions::emit_release_quote::emit_release_quote(ctx)
    }

    pub fn emit_daily_quote(ctx: Context<EmitDailyQuote>) -> Result<()> {
        instructions::emit_daily_quote::emit_daily_quote(ctx)
    }
}
