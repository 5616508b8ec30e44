//! Program-wide constants: the default tranche configuration table.

use crate::state::TrancheConfig;

/// Number of tranches in the vesting schedule.
pub const TRANCHE_COUNT: usize = 6;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Length of one tranche segment (30 days).
pub const TRANCHE_DURATION_SECS: i64 = 30 * SECONDS_PER_DAY;

/// Default schedule: 20/20/15/15/15/15 percent of the pool over six
/// consecutive 30-day segments, no gaps or overlap. Percents must sum to 100.
pub const DEFAULT_TRANCHE_CONFIG: [TrancheConfig; TRANCHE_COUNT] = [
    TrancheConfig { percent: 20, duration_secs: TRANCHE_DURATION_SECS },
    TrancheConfig { percent: 20, duration_secs: TRANCHE_DURATION_SECS },
    TrancheConfig { percent: 15, duration_secs: TRANCHE_DURATION_SECS },
    TrancheConfig { percent: 15, duration_secs: TRANCHE_DURATION_SECS },
    TrancheConfig { percent: 15, duration_secs: TRANCHE_DURATION_SECS },
    TrancheConfig { percent: 15, duration_secs: TRANCHE_DURATION_SECS },
];
