//! Pure vesting arithmetic over the tranche schedule.
//! - amounts are atomic token units (u64), widened through u128 for products
//! - all interpolation uses floor division; truncation dust (at most one unit
//!   per tranche) stays permanently unreleased and is an accepted behavior
//! - `total_vested` is monotone non-decreasing in `now` for a fixed schedule

use crate::constants::{SECONDS_PER_DAY, TRANCHE_COUNT};
use crate::error::VestingError;
use crate::state::{Tranche, TrancheConfig};

/// Build the ordered tranche list from the configuration table, back-to-back
/// starting at `start_ts`. Percent-to-amount conversion floors each share;
/// the rounding remainder is assigned to the last tranche so the amounts sum
/// exactly to `total_pool`.
pub fn build_tranches(
    start_ts: i64,
    total_pool: u64,
    config: &[TrancheConfig; TRANCHE_COUNT],
) -> Result<[Tranche; TRANCHE_COUNT], VestingError> {
    let mut percent_sum: u64 = 0;
    for c in config.iter() {
        if c.duration_secs <= 0 {
            return Err(VestingError::InvalidConfig);
        }
        percent_sum = percent_sum
            .checked_add(c.percent)
            .ok_or(VestingError::MathOverflow)?;
    }
    if percent_sum != 100 {
        return Err(VestingError::InvalidConfig);
    }

    let mut tranches = [Tranche::default(); TRANCHE_COUNT];
    let mut cursor = start_ts;
    let mut assigned: u64 = 0;
    for (i, c) in config.iter().enumerate() {
        let amount = (total_pool as u128)
            .checked_mul(c.percent as u128)
            .ok_or(VestingError::MathOverflow)?
            / 100;
        let amount = u64::try_from(amount).map_err(|_| VestingError::MathOverflow)?;
        tranches[i] = Tranche {
            total_amount: amount,
            start_ts: cursor,
            duration_secs: c.duration_secs,
        };
        assigned = assigned
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        cursor = cursor
            .checked_add(c.duration_secs)
            .ok_or(VestingError::MathOverflow)?;
    }

    // Floors never exceed the pool when percents sum to 100.
    let remainder = total_pool
        .checked_sub(assigned)
        .ok_or(VestingError::MathOverflow)?;
    let last = &mut tranches[TRANCHE_COUNT - 1];
    last.total_amount = last
        .total_amount
        .checked_add(remainder)
        .ok_or(VestingError::MathOverflow)?;

    Ok(tranches)
}

/// Clamped linear interpolation: 0 before the tranche starts, the full amount
/// once it ends, `total_amount * elapsed / duration` (floor) in between.
pub fn vested_amount(tranche: &Tranche, now: i64) -> Result<u64, VestingError> {
    if now <= tranche.start_ts {
        return Ok(0);
    }
    let elapsed = now - tranche.start_ts;
    if elapsed >= tranche.duration_secs {
        return Ok(tranche.total_amount);
    }
    let vested = (tranche.total_amount as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VestingError::MathOverflow)?
        / tranche.duration_secs as u128;
    u64::try_from(vested).map_err(|_| VestingError::MathOverflow)
}

/// Cumulative vested amount across the whole schedule at `now`.
pub fn total_vested(tranches: &[Tranche], now: i64) -> Result<u64, VestingError> {
    let mut total: u64 = 0;
    for t in tranches.iter() {
        total = total
            .checked_add(vested_amount(t, now)?)
            .ok_or(VestingError::MathOverflow)?;
    }
    Ok(total)
}

/// Per-day release rate of the tranche containing `now`.
/// Policy for out-of-range times: before the first tranche the quoted rate is
/// the first tranche's rate; after the last tranche ends the schedule is
/// exhausted and the rate is 0.
pub fn daily_rate(tranches: &[Tranche], now: i64) -> Result<u64, VestingError> {
    let first = match tranches.first() {
        Some(t) => t,
        None => return Ok(0),
    };
    if now < first.start_ts {
        return Ok(rate_of(first));
    }
    for t in tranches.iter() {
        if t.contains(now) {
            return Ok(rate_of(t));
        }
    }
    Ok(0)
}

fn rate_of(tranche: &Tranche) -> u64 {
    let days = tranche.duration_secs / SECONDS_PER_DAY;
    if days <= 0 {
        // Sub-day tranche: the whole amount is the daily rate.
        return tranche.total_amount;
    }
    tranche.total_amount / days as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_TRANCHE_CONFIG, TRANCHE_DURATION_SECS};

    const T0: i64 = 1_700_000_000;
    const POOL: u64 = 100_000_000;

    fn days(n: i64) -> i64 {
        n * SECONDS_PER_DAY
    }

    fn schedule(pool: u64) -> [Tranche; TRANCHE_COUNT] {
        build_tranches(T0, pool, &DEFAULT_TRANCHE_CONFIG).unwrap()
    }

    #[test]
    fn builds_back_to_back_tranches() {
        let tranches = schedule(POOL);
        let expected = [
            20_000_000u64,
            20_000_000,
            15_000_000,
            15_000_000,
            15_000_000,
            15_000_000,
        ];
        for (i, t) in tranches.iter().enumerate() {
            assert_eq!(t.total_amount, expected[i]);
            assert_eq!(t.start_ts, T0 + days(30) * i as i64);
            assert_eq!(t.duration_secs, TRANCHE_DURATION_SECS);
        }
        let sum: u64 = tranches.iter().map(|t| t.total_amount).sum();
        assert_eq!(sum, POOL);
    }

    #[test]
    fn remainder_goes_to_last_tranche() {
        // 101 does not divide evenly: floors are 20+20+15+15+15+15 = 100,
        // the leftover unit lands in the last tranche.
        let tranches = schedule(101);
        assert_eq!(tranches[0].total_amount, 20);
        assert_eq!(tranches[5].total_amount, 16);
        let sum: u64 = tranches.iter().map(|t| t.total_amount).sum();
        assert_eq!(sum, 101);
    }

    #[test]
    fn rejects_bad_config() {
        let mut config = DEFAULT_TRANCHE_CONFIG;
        config[0].percent = 21;
        assert!(matches!(
            build_tranches(T0, POOL, &config),
            Err(VestingError::InvalidConfig)
        ));

        let mut config = DEFAULT_TRANCHE_CONFIG;
        config[3].duration_secs = 0;
        assert!(matches!(
            build_tranches(T0, POOL, &config),
            Err(VestingError::InvalidConfig)
        ));
    }

    #[test]
    fn vests_along_reference_scenario() {
        let tranches = schedule(POOL);
        assert_eq!(total_vested(&tranches, T0).unwrap(), 0);
        assert_eq!(total_vested(&tranches, T0 + days(30)).unwrap(), 20_000_000);
        assert_eq!(total_vested(&tranches, T0 + days(60)).unwrap(), 40_000_000);
        assert_eq!(total_vested(&tranches, T0 + days(90)).unwrap(), 55_000_000);
        assert_eq!(total_vested(&tranches, T0 + days(120)).unwrap(), 70_000_000);
        assert_eq!(total_vested(&tranches, T0 + days(150)).unwrap(), 85_000_000);
        assert_eq!(total_vested(&tranches, T0 + days(180)).unwrap(), 100_000_000);
        // Fully vested, no further growth.
        assert_eq!(total_vested(&tranches, T0 + days(181)).unwrap(), 100_000_000);
    }

    #[test]
    fn interpolates_within_a_tranche() {
        let tranches = schedule(POOL);
        // 99 seconds into the first tranche.
        let expected = 20_000_000u64 * 99 / TRANCHE_DURATION_SECS as u64;
        assert_eq!(total_vested(&tranches, T0 + 99).unwrap(), expected);
        assert_eq!(vested_amount(&tranches[0], T0 + 99).unwrap(), expected);
        // Later tranches contribute nothing yet.
        assert_eq!(vested_amount(&tranches[1], T0 + 99).unwrap(), 0);
        // Before the schedule start nothing is vested.
        assert_eq!(total_vested(&tranches, T0 - 1).unwrap(), 0);
    }

    #[test]
    fn total_vested_is_monotone() {
        let tranches = schedule(POOL);
        let mut last = 0u64;
        let mut t = T0 - days(1);
        while t <= T0 + days(200) {
            let v = total_vested(&tranches, t).unwrap();
            assert!(v >= last, "vested decreased at t={}", t);
            last = v;
            // Uneven step so samples cross tranche boundaries mid-second.
            t += 99_999;
        }
        assert_eq!(last, POOL);
    }

    #[test]
    fn daily_rate_follows_current_tranche() {
        let tranches = schedule(POOL);
        // 20_000_000 / 30 days, floored.
        assert_eq!(daily_rate(&tranches, T0).unwrap(), 666_666);
        // Before the schedule starts the first tranche's rate is quoted.
        assert_eq!(daily_rate(&tranches, T0 - days(5)).unwrap(), 666_666);
        // Inside the fourth tranche (15% share).
        assert_eq!(daily_rate(&tranches, T0 + days(100)).unwrap(), 500_000);
        // Exhausted schedule.
        assert_eq!(daily_rate(&tranches, T0 + days(180)).unwrap(), 0);
        assert_eq!(daily_rate(&tranches, T0 + days(365)).unwrap(), 0);
    }

    #[test]
    fn truncation_dust_is_bounded_by_tranche_count() {
        // A pool that divides badly: each tranche floors away less than one
        // unit, and the end-of-schedule clamp still releases the full pool.
        let tranches = schedule(999_983);
        let sum: u64 = tranches.iter().map(|t| t.total_amount).sum();
        assert_eq!(sum, 999_983);

        // Mid-schedule truncation never exceeds one unit per elapsed tranche.
        let mid = T0 + days(45);
        let vested = total_vested(&tranches, mid).unwrap();
        let exact_floor = tranches[0].total_amount
            + tranches[1].total_amount * (days(15) as u64) / (days(30) as u64);
        assert!(exact_floor - vested <= TRANCHE_COUNT as u64);

        assert_eq!(total_vested(&tranches, T0 + days(180)).unwrap(), 999_983);
    }
}
