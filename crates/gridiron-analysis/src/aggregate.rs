//! Outcome statistics over a candidate set.
//!
//! The aggregator walks every candidate once and counts first downs,
//! touchdowns, made field goals and, for two-point queries, successful
//! conversions. Each success is also credited to the play's
//! ([play type](PlayCombo::play_type), [sub-type](PlayCombo::sub_type))
//! combination; the combinations with the highest count become the ideal
//! plays.
//!
//! Aggregation stops early when the top-rated candidate itself gained
//! nothing (see [`PlayOutcome::is_failure`](gridiron_engine::PlayOutcome::is_failure)):
//! the result is then only the game ids of the candidates.
//!
//! # Example
//!
//! ```
//! use gridiron_analysis::aggregate::{Aggregation, OutcomeAggregator};
//! use gridiron_engine::{CandidateSet, PlayBuilder, Situation};
//! use std::sync::Arc;
//!
//! let candidates: CandidateSet = [
//!     PlayBuilder::new().game_id(1).pass("SHORT LEFT").yards(11).first_down(),
//!     PlayBuilder::new().game_id(2).rush("LEFT TACKLE").yards(3),
//! ]
//! .into_iter()
//! .map(|b| Arc::new(b.build().unwrap()))
//! .collect();
//!
//! let query = *candidates.top().unwrap().situation();
//! let Aggregation::Complete(result) = OutcomeAggregator::new(&query).aggregate(&candidates).unwrap() else {
//!     panic!("top play gained yards");
//! };
//! assert_eq!(result.counts.first_downs, 1);
//! assert_eq!(result.likelihoods.first_down.percentage, 50.0);
//! ```

use gridiron_engine::{CandidateSet, PlayRecord, PlayStyle, Situation};
use gridiron_stats::{rate::percentage, tally::Tally};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("candidate set is empty")]
pub struct EmptyCandidateSetError;

/// Successes broken down by offensive style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StyleSplit {
    pub passes: u32,
    pub rushes: u32,
}

impl StyleSplit {
    fn record(&mut self, style: PlayStyle) {
        match style {
            PlayStyle::Pass => self.passes += 1,
            PlayStyle::Rush => self.rushes += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub total: u32,
    pub first_downs: u32,
    pub touchdowns: u32,
    /// Successful two-point tries; only counted for two-point queries.
    pub conversions: u32,
    pub field_goals: u32,
    pub first_down_split: StyleSplit,
    pub touchdown_split: StyleSplit,
    pub conversion_split: StyleSplit,
}

/// A play type paired with its sub-type.
///
/// The sub-type is the pass type of a pass, the rush direction of a rush,
/// the formation of a field goal, or `PASS`/`RUSH` for a two-point try.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PlayCombo {
    pub play_type: String,
    pub sub_type: String,
}

impl PlayCombo {
    #[must_use]
    pub fn new(play_type: impl Into<String>, sub_type: impl Into<String>) -> Self {
        Self {
            play_type: play_type.into(),
            sub_type: sub_type.into(),
        }
    }

    #[must_use]
    pub fn is_field_goal(&self) -> bool {
        self.play_type == gridiron_engine::FIELD_GOAL
    }
}

/// A combination tied for the most successes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdealPlay {
    pub combo: PlayCombo,
    pub successes: u32,
    /// Successes as a share of all candidates.
    pub percentage: f32,
}

/// An outcome's likelihood over all candidates, plus how its successes
/// split between passes and rushes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SplitLikelihood {
    pub percentage: f32,
    pub pass: f32,
    pub rush: f32,
}

impl SplitLikelihood {
    fn new(successes: u32, split: StyleSplit, total: u32) -> Self {
        Self {
            percentage: percentage(successes, total),
            pass: percentage(split.passes, successes),
            rush: percentage(split.rushes, successes),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Likelihoods {
    pub first_down: SplitLikelihood,
    pub touchdown: SplitLikelihood,
    pub field_goal: f32,
    pub conversion: SplitLikelihood,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub two_point_query: bool,
    pub counts: OutcomeCounts,
    pub ideal_plays: Vec<IdealPlay>,
    pub likelihoods: Likelihoods,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Aggregation {
    /// The best candidate gained nothing; ids of every candidate in rating order.
    NoGain { game_ids: Vec<u64> },
    Complete(AggregateResult),
}

/// Computes outcome statistics for one query.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeAggregator {
    two_point_query: bool,
}

impl OutcomeAggregator {
    #[must_use]
    pub fn new(situation: &Situation) -> Self {
        Self {
            two_point_query: situation.is_two_point_attempt(),
        }
    }

    pub fn aggregate(
        &self,
        candidates: &CandidateSet,
    ) -> Result<Aggregation, EmptyCandidateSetError> {
        let top = candidates.top().ok_or(EmptyCandidateSetError)?;
        if top.outcome().is_failure() {
            log::debug!(
                "top candidate from game {} gained nothing, skipping aggregation",
                top.game_id()
            );
            return Ok(Aggregation::NoGain {
                game_ids: candidates.game_ids(),
            });
        }

        let mut counts = OutcomeCounts {
            total: u32::try_from(candidates.len()).unwrap_or(u32::MAX),
            ..OutcomeCounts::default()
        };
        let mut successes = Tally::new();
        for play in candidates {
            if self.counts_as_conversion(play) {
                record_conversion(play, &mut counts, &mut successes);
            } else {
                record_regular(play, &mut counts, &mut successes);
            }
        }

        let ideal_plays = successes
            .leaders()
            .map(|leaders| {
                leaders
                    .keys
                    .into_iter()
                    .map(|combo| IdealPlay {
                        combo: combo.clone(),
                        successes: leaders.count,
                        percentage: percentage(leaders.count, counts.total),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let likelihoods = Likelihoods {
            first_down: SplitLikelihood::new(counts.first_downs, counts.first_down_split, counts.total),
            touchdown: SplitLikelihood::new(counts.touchdowns, counts.touchdown_split, counts.total),
            field_goal: percentage(counts.field_goals, counts.total),
            conversion: SplitLikelihood::new(counts.conversions, counts.conversion_split, counts.total),
        };

        Ok(Aggregation::Complete(AggregateResult {
            two_point_query: self.two_point_query,
            counts,
            ideal_plays,
            likelihoods,
        }))
    }

    fn counts_as_conversion(&self, play: &PlayRecord) -> bool {
        self.two_point_query && play.outcome().two_point_attempt && !play.call().is_extra_point()
    }
}

/// Successful tries only. A try whose description names neither style still
/// counts as a conversion but is not credited to any combination.
fn record_conversion(play: &PlayRecord, counts: &mut OutcomeCounts, successes: &mut Tally<PlayCombo>) {
    if !play.outcome().two_point_success {
        return;
    }
    counts.conversions += 1;
    if let Some(style) = play.call().conversion_style() {
        counts.conversion_split.record(style);
        successes.increment(PlayCombo::new(&play.call().play_type, style.to_string()));
    }
}

/// A play that is both a first down and a touchdown is credited twice.
fn record_regular(play: &PlayRecord, counts: &mut OutcomeCounts, successes: &mut Tally<PlayCombo>) {
    let call = play.call();
    let outcome = play.outcome();
    let mut credit = |split: &mut StyleSplit| {
        if let (Some(style), Some(sub_type)) = (call.style(), call.sub_type()) {
            split.record(style);
            successes.increment(PlayCombo::new(&call.play_type, sub_type));
        }
    };
    if outcome.first_down {
        counts.first_downs += 1;
        credit(&mut counts.first_down_split);
    }
    if outcome.touchdown {
        counts.touchdowns += 1;
        credit(&mut counts.touchdown_split);
    }
    if call.is_successful_field_goal() {
        counts.field_goals += 1;
        successes.increment(PlayCombo::new(&call.play_type, &call.formation));
    }
}
