//! Payroll calculation for a workday.

/// Flat nominal value of a full jornal, used by the report reducers.
/// Distinct from an entry's computed `valor_jornal` (see the reports module).
pub const JORNAL_VALUE: i64 = 60_000;

/// Standard full-day rate in COP.
pub const FULL_DAY_RATE: i64 = 60_000;

/// Standard hours of a full working day.
pub const STANDARD_DAY_HOURS: i64 = 8;

/// COP per worked hour: 60 000 / 8.
pub const RATE_PER_HOUR: i64 = FULL_DAY_RATE / STANDARD_DAY_HOURS;

/// Pay for a number of worked hours, rounded to the nearest whole peso
/// (half away from zero). Total over non-negative input; validating that
/// hours are positive is the caller's concern.
pub fn payroll(hours: f64) -> i64 {
    (hours * RATE_PER_HOUR as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_day_pays_the_full_rate() {
        assert_eq!(payroll(8.0), 60_000);
    }

    #[test]
    fn half_day_pays_half() {
        assert_eq!(payroll(4.0), 30_000);
    }

    #[test]
    fn zero_hours_pay_nothing() {
        assert_eq!(payroll(0.0), 0);
    }

    #[test]
    fn fractional_hours_round_to_whole_pesos() {
        // 0.1 h * 7500 = 750
        assert_eq!(payroll(0.1), 750);
        // 1.0001 h * 7500 = 7500.75 -> 7501
        assert_eq!(payroll(1.0001), 7_501);
    }
}
