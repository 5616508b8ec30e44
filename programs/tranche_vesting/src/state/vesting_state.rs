use anchor_lang::prelude::*;
use std::result::Result;

use crate::constants::TRANCHE_COUNT;
use crate::error::VestingError;
use crate::state::{Tranche, TrancheConfig};
use crate::utils::schedule;

/// Lifecycle of the ledger. `Uninitialized` behaves like `Paused` for gating
/// purposes: release and the gated queries are illegal, withdraw is legal.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LedgerStatus {
    #[default]
    Uninitialized,
    Active,
    Paused,
}

/// Read-only release summary returned by the quote query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub released: u64,
    pub releasable: u64,
    pub total: u64,
}

/// Singleton vesting ledger PDA.
///
/// Invariants held at every observable point:
/// - `total_released` is monotone non-decreasing
/// - `total_released <= total_vested(now)`
/// - `tranches` is all-zero until `activate`, then fixed for the ledger's life
#[account]
pub struct VestingState {
    /// Owner authority (administrative operations).
    pub owner: Pubkey,
    /// Token mint of the vested allocation.
    pub mint: Pubkey,
    /// Current release recipient; reassignable via `set_beneficiary`.
    pub beneficiary: Pubkey,
    /// Global vesting start timestamp (Unix seconds); 0 until initialized.
    pub start_ts: i64,
    /// Full allocation assigned to the beneficiary, fixed at initialization.
    pub total_pool: u64,
    /// Cumulative amount released to the beneficiary.
    pub total_released: u64,
    /// Gating state machine.
    pub status: LedgerStatus,
    /// Ordered schedule, built once from the configuration table.
    pub tranches: [Tranche; TRANCHE_COUNT],
}

impl VestingState {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        32 + // beneficiary
        8 +  // start_ts
        8 +  // total_pool
        8 +  // total_released
        1 +  // status
        TRANCHE_COUNT * Tranche::SIZE;

    /// One-time activation: builds the schedule and opens the release gate.
    pub fn activate(
        &mut self,
        start_ts: i64,
        beneficiary: Pubkey,
        total_pool: u64,
        config: &[TrancheConfig; TRANCHE_COUNT],
    ) -> Result<(), VestingError> {
        if self.status != LedgerStatus::Uninitialized {
            return Err(VestingError::AlreadyInitialized);
        }
        self.tranches = schedule::build_tranches(start_ts, total_pool, config)?;
        self.start_ts = start_ts;
        self.beneficiary = beneficiary;
        self.total_pool = total_pool;
        self.total_released = 0;
        self.status = LedgerStatus::Active;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), VestingError> {
        if self.status != LedgerStatus::Active {
            return Err(VestingError::InvalidPauseTransition);
        }
        self.status = LedgerStatus::Paused;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), VestingError> {
        if self.status != LedgerStatus::Paused {
            return Err(VestingError::InvalidPauseTransition);
        }
        self.status = LedgerStatus::Active;
        Ok(())
    }

    pub fn require_active(&self) -> Result<(), VestingError> {
        if self.status != LedgerStatus::Active {
            return Err(VestingError::NotActive);
        }
        Ok(())
    }

    /// Withdraw is legal only while the release gate is closed.
    pub fn require_withdraw_allowed(&self) -> Result<(), VestingError> {
        if self.status == LedgerStatus::Active {
            return Err(VestingError::NotPaused);
        }
        Ok(())
    }

    /// Vested-to-date minus already-released. Gated: fails while the ledger
    /// is uninitialized or paused.
    pub fn releasable(&self, now: i64) -> Result<u64, VestingError> {
        self.require_active()?;
        let vested = schedule::total_vested(&self.tranches, now)?;
        vested
            .checked_sub(self.total_released)
            .ok_or(VestingError::MathOverflow)
    }

    /// Release summary at `now`; same gating as `releasable`.
    pub fn release_info(&self, now: i64) -> Result<ReleaseInfo, VestingError> {
        let releasable = self.releasable(now)?;
        let total = self
            .total_released
            .checked_add(releasable)
            .ok_or(VestingError::MathOverflow)?;
        Ok(ReleaseInfo {
            released: self.total_released,
            releasable,
            total,
        })
    }

    /// Per-day release rate at `now`; same gating as `releasable`.
    pub fn daily_releasable(&self, now: i64) -> Result<u64, VestingError> {
        self.require_active()?;
        schedule::daily_rate(&self.tranches, now)
    }

    /// Accumulate a confirmed release. Callers update this only after the
    /// token transfer succeeds, keeping failures free of partial state.
    pub fn record_release(&mut self, amount: u64) -> Result<(), VestingError> {
        self.total_released = self
            .total_released
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    /// Portion of the pool still owed to the beneficiary. Zero before
    /// initialization: no schedule, no obligation.
    pub fn outstanding_obligation(&self) -> u64 {
        if self.status == LedgerStatus::Uninitialized {
            return 0;
        }
        self.total_pool.saturating_sub(self.total_released)
    }

    /// Held balance not reserved for future vesting obligations.
    pub fn withdrawable(&self, balance: u64) -> u64 {
        balance.saturating_sub(self.outstanding_obligation())
    }

    pub fn tranche_count(&self) -> usize {
        if self.status == LedgerStatus::Uninitialized {
            0
        } else {
            TRANCHE_COUNT
        }
    }

    pub fn tranche(&self, index: usize) -> Option<Tranche> {
        if index < self.tranche_count() {
            Some(self.tranches[index])
        } else {
            None
        }
    }
}
