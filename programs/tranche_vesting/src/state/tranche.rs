use anchor_lang::prelude::*;

/// One row of the schedule configuration table: a share of the pool released
/// linearly over `duration_secs`, back-to-back with the previous row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrancheConfig {
    /// Percentage of the total pool (table must sum to 100).
    pub percent: u64,
    /// Length of the segment in seconds (must be positive).
    pub duration_secs: i64,
}

/// A built vesting tranche, immutable for the ledger's lifetime.
/// Ordinal position in the schedule array is the tranche index.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tranche {
    /// Amount of the pool released by this tranche, in atomic token units.
    pub total_amount: u64,
    /// Absolute start timestamp (Unix seconds).
    pub start_ts: i64,
    /// Segment length in seconds.
    pub duration_secs: i64,
}

impl Tranche {
    pub const SIZE: usize =
        8 + // total_amount
        8 + // start_ts
        8;  // duration_secs

    /// Absolute timestamp at which this tranche is fully vested.
    pub fn end_ts(&self) -> i64 {
        self.start_ts.saturating_add(self.duration_secs)
    }

    /// True if `now` falls inside `[start_ts, end_ts)`.
    pub fn contains(&self, now: i64) -> bool {
        now >= self.start_ts && now < self.end_ts()
    }
}
