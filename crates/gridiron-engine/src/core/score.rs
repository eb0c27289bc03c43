//! Desirability scoring.
//!
//! Every play gets one scalar rating so that all structures can share a
//! single total order. A turnover outweighs any gain, a touchdown or first
//! down outweighs a handful of yards, and yardage is compressed so that long
//! gains do not swamp everything else.

use std::cmp::Ordering;

use serde::Serialize;

use super::{PlayOutcome, PlayRecord};

pub const FIRST_DOWN_WEIGHT: f32 = 10.0;
pub const TOUCHDOWN_WEIGHT: f32 = 10.0;
pub const INTERCEPTION_WEIGHT: f32 = -100.0;
pub const FUMBLE_WEIGHT: f32 = -1000.0;
pub const TWO_POINT_WEIGHT: f32 = 5.0;

/// Exponent applied to the magnitude of resulting yards.
pub const YARDS_EXPONENT: f32 = 0.75;

/// Per-outcome contributions to a play's rating, fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PlayWeights {
    pub first_down: f32,
    pub yards: f32,
    pub touchdown: f32,
    pub interception: f32,
    pub fumble: f32,
    pub two_point: f32,
}

impl PlayWeights {
    #[must_use]
    pub fn from_outcome(outcome: &PlayOutcome) -> Self {
        let flag = |set: bool, weight: f32| if set { weight } else { 0.0 };
        Self {
            first_down: flag(outcome.first_down, FIRST_DOWN_WEIGHT),
            yards: yards_weight(outcome.yards),
            touchdown: flag(outcome.touchdown, TOUCHDOWN_WEIGHT),
            interception: flag(outcome.interception, INTERCEPTION_WEIGHT),
            fumble: flag(outcome.fumble, FUMBLE_WEIGHT),
            two_point: flag(outcome.two_point_success, TWO_POINT_WEIGHT),
        }
    }

    #[must_use]
    pub fn total(&self) -> f32 {
        self.first_down
            + self.yards
            + self.touchdown
            + self.interception
            + self.fumble
            + self.two_point
    }
}

/// Signed `|yards|^0.75`: a gain and a loss of the same length weigh the same
/// with opposite sign.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn yards_weight(yards: i32) -> f32 {
    let magnitude = (yards.unsigned_abs() as f32).powf(YARDS_EXPONENT);
    if yards < 0 { -magnitude } else { magnitude }
}

/// Rates a play; higher is more worth suggesting.
#[must_use]
pub fn score(play: &PlayRecord) -> Rating {
    play.rating()
}

/// Total order over play ratings.
///
/// Ties compare equal; no secondary key is involved.
#[derive(Debug, Clone, Copy, Serialize, derive_more::Display)]
#[display("{_0:.2}")]
#[serde(transparent)]
pub struct Rating(f32);

impl Rating {
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl PartialEq for Rating {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rating {}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rating {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayBuilder;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_yards_weight_known_values() {
        assert_close(yards_weight(0), 0.0);
        assert_close(yards_weight(-8), -4.7568);
        assert_close(yards_weight(27), 11.8447);
        assert_close(yards_weight(1), 1.0);
        assert_close(yards_weight(16), 8.0);
    }

    #[test]
    fn test_yards_weight_is_odd() {
        for yards in [1, 3, 10, 45, 99] {
            assert_close(yards_weight(-yards), -yards_weight(yards));
        }
        assert_close(yards_weight(10), 5.6234);
    }

    #[test]
    fn test_weights_follow_flags() {
        let outcome = PlayOutcome {
            yards: 0,
            first_down: true,
            touchdown: true,
            interception: true,
            fumble: true,
            two_point_success: true,
            ..PlayOutcome::default()
        };
        let weights = PlayWeights::from_outcome(&outcome);
        assert_close(weights.first_down, FIRST_DOWN_WEIGHT);
        assert_close(weights.touchdown, TOUCHDOWN_WEIGHT);
        assert_close(weights.interception, INTERCEPTION_WEIGHT);
        assert_close(weights.fumble, FUMBLE_WEIGHT);
        assert_close(weights.two_point, TWO_POINT_WEIGHT);
        assert_close(weights.total(), 10.0 + 10.0 - 100.0 - 1000.0 + 5.0);

        let none = PlayWeights::from_outcome(&PlayOutcome::default());
        assert_close(none.total(), 0.0);
    }

    #[test]
    fn test_two_point_attempt_without_success_has_no_bonus() {
        let outcome = PlayOutcome {
            two_point_attempt: true,
            ..PlayOutcome::default()
        };
        assert_close(PlayWeights::from_outcome(&outcome).two_point, 0.0);
    }

    #[test]
    fn test_rating_is_sum_of_weights() {
        let play = PlayBuilder::new()
            .yards(27)
            .first_down()
            .touchdown()
            .build()
            .unwrap();
        let w = play.weights();
        let sum = w.first_down + w.yards + w.touchdown + w.interception + w.fumble + w.two_point;
        assert_close(score(&play).value(), sum);
        assert_close(sum, 31.8447);
    }

    #[test]
    fn test_fumble_orders_strictly_lower() {
        let clean = PlayBuilder::new().yards(12).first_down().build().unwrap();
        let fumbled = PlayBuilder::new()
            .yards(12)
            .first_down()
            .fumble()
            .build()
            .unwrap();
        assert!(score(&fumbled) < score(&clean));
    }

    #[test]
    fn test_rating_total_order_handles_ties() {
        assert_eq!(Rating::new(3.5), Rating::new(3.5));
        assert!(Rating::new(-1.0) < Rating::new(0.0));
        assert_eq!(Rating::new(2.0).max(Rating::new(7.0)), Rating::new(7.0));
    }
}
