//! Lending Policy
//!
//! Tunable constants for scoring, deadlines, and windows, grouped in one
//! deserializable struct so an embedding application can override them from
//! its own configuration. All date arithmetic and score weighting go
//! through methods here, keeping the formulas pure and testable on plain
//! date values.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Behavioral constants for the lending, search, and reservation engines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LendingPolicy {
    /// Youngest age accepted when registering a member.
    pub minimum_member_age: u32,
    /// Days a `ready` reservation stays claimable before it expires.
    pub hold_period_days: u32,
    /// Assumed days each borrower ahead in a queue keeps a book.
    pub loan_period_days: u32,
    /// Priority bonus for premium members.
    pub premium_bonus: i64,
    /// Priority bonus for reservations carrying a stated reason.
    pub priority_reason_bonus: i64,
    /// Priority penalty applied per late return in the member's history.
    pub late_return_penalty: i64,
    /// Trailing window, in calendar months, for borrowing-trend analytics.
    pub trend_window_months: u32,
    /// Page size used when a search request supplies none.
    pub default_page_limit: u32,
}

impl Default for LendingPolicy {
    fn default() -> Self {
        Self {
            minimum_member_age: 12,
            hold_period_days: 7,
            loan_period_days: 14,
            premium_bonus: 10,
            priority_reason_bonus: 5,
            late_return_penalty: 2,
            trend_window_months: 6,
            default_page_limit: 10,
        }
    }
}

impl LendingPolicy {
    /// Priority score for a reservation, computed from the member's borrow
    /// history snapshot and the request flags. Can be negative.
    pub fn priority_score(
        &self,
        borrow_count: usize,
        late_return_count: usize,
        is_premium: bool,
        has_reason: bool,
    ) -> i64 {
        let mut score = borrow_count as i64 - self.late_return_penalty * late_return_count as i64;
        if is_premium {
            score += self.premium_bonus;
        }
        if has_reason {
            score += self.priority_reason_bonus;
        }
        score
    }

    /// Pickup deadline for a reservation placed on `reserved_on`.
    pub fn pickup_deadline(&self, reserved_on: NaiveDate) -> NaiveDate {
        reserved_on + Days::new(u64::from(self.hold_period_days))
    }

    /// Projected date a queued reservation becomes available, assuming every
    /// holder ahead of it keeps the book for a full loan period. Position 1
    /// projects to `today`.
    pub fn projected_availability(&self, today: NaiveDate, queue_position: u32) -> NaiveDate {
        let slots_ahead = u64::from(queue_position.saturating_sub(1));
        today + Days::new(slots_ahead * u64::from(self.loan_period_days))
    }

    /// First date inside the trailing trend window ending at `today`.
    /// Month arithmetic clamps at month ends (Aug 31 minus 6 months is
    /// Feb 28 or 29).
    pub fn trend_window_start(&self, today: NaiveDate) -> NaiveDate {
        today - Months::new(self.trend_window_months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_score_weights() {
        let policy = LendingPolicy::default();

        assert_eq!(policy.priority_score(0, 0, false, false), 0);
        assert_eq!(policy.priority_score(7, 0, false, false), 7);
        assert_eq!(policy.priority_score(7, 2, false, false), 3);
        assert_eq!(policy.priority_score(0, 0, true, false), 10);
        assert_eq!(policy.priority_score(0, 0, false, true), 5);
        assert_eq!(policy.priority_score(3, 1, true, true), 16);
    }

    #[test]
    fn test_score_can_go_negative() {
        let policy = LendingPolicy::default();

        assert_eq!(policy.priority_score(1, 3, false, false), -5);
    }

    #[test]
    fn test_pickup_deadline_is_seven_days_out() {
        let policy = LendingPolicy::default();

        assert_eq!(
            policy.pickup_deadline(date(2024, 1, 1)),
            date(2024, 1, 8)
        );
        // Rolls across month boundaries.
        assert_eq!(
            policy.pickup_deadline(date(2024, 2, 26)),
            date(2024, 3, 4)
        );
    }

    #[test]
    fn test_projection_front_of_queue_is_today() {
        let policy = LendingPolicy::default();
        let today = date(2024, 6, 1);

        assert_eq!(policy.projected_availability(today, 1), today);
        assert_eq!(policy.projected_availability(today, 2), date(2024, 6, 15));
        assert_eq!(policy.projected_availability(today, 4), date(2024, 7, 13));
    }

    #[test]
    fn test_trend_window_clamps_short_months() {
        let policy = LendingPolicy::default();

        assert_eq!(
            policy.trend_window_start(date(2024, 8, 31)),
            date(2024, 2, 29)
        );
        assert_eq!(
            policy.trend_window_start(date(2024, 6, 15)),
            date(2023, 12, 15)
        );
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let policy: LendingPolicy =
            serde_json::from_str(r#"{"premium_bonus": 25, "loan_period_days": 21}"#).unwrap();

        assert_eq!(policy.premium_bonus, 25);
        assert_eq!(policy.loan_period_days, 21);
        assert_eq!(policy.minimum_member_age, 12);
        assert_eq!(policy.default_page_limit, 10);
    }
}
