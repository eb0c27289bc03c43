//! The final answer to a query.

use arrayvec::ArrayVec;
use gridiron_engine::{CandidateSet, PlayRecord, Situation};
use serde::Serialize;

use crate::{
    aggregate::{AggregateResult, Aggregation, EmptyCandidateSetError, IdealPlay, OutcomeAggregator, SplitLikelihood},
    insights::Insights,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    #[display("First Down")]
    FirstDown,
    #[display("Touchdown")]
    Touchdown,
    #[display("Field Goal")]
    FieldGoal,
    #[display("Two Point Conversion")]
    TwoPointConversion,
}

/// One reported likelihood. Field goals carry no pass/rush split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LikelihoodLine {
    pub outcome: OutcomeKind,
    pub percentage: f32,
    pub pass: Option<f32>,
    pub rush: Option<f32>,
}

impl LikelihoodLine {
    fn split(outcome: OutcomeKind, likelihood: SplitLikelihood) -> Self {
        Self {
            outcome,
            percentage: likelihood.percentage,
            pass: Some(likelihood.pass),
            rush: Some(likelihood.rush),
        }
    }
}

/// Everything shown for a query with a usable match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationReport {
    pub situation: Situation,
    pub candidate_count: u32,
    pub ideal_plays: Vec<IdealPlay>,
    /// Two-point queries: the conversion line alone. Otherwise the non-zero
    /// likelihoods, highest first.
    pub likelihoods: ArrayVec<LikelihoodLine, 3>,
    pub best_play: PlayRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<Insights>,
}

impl RecommendationReport {
    #[must_use]
    pub fn assemble(situation: Situation, result: AggregateResult, best_play: PlayRecord) -> Self {
        let likelihoods = likelihood_lines(&result);
        let mut ideal_plays = result.ideal_plays;
        ideal_plays.sort_by(|a, b| b.successes.cmp(&a.successes));
        Self {
            situation,
            candidate_count: result.counts.total,
            ideal_plays,
            likelihoods,
            best_play,
            insights: None,
        }
    }

    #[must_use]
    pub fn with_insights(mut self, insights: Insights) -> Self {
        self.insights = Some(insights);
        self
    }

    #[must_use]
    pub fn is_plural(&self) -> bool {
        self.ideal_plays.len() > 1
    }
}

fn likelihood_lines(result: &AggregateResult) -> ArrayVec<LikelihoodLine, 3> {
    let likelihoods = &result.likelihoods;
    let mut lines = ArrayVec::new();
    if result.two_point_query {
        lines.push(LikelihoodLine::split(
            OutcomeKind::TwoPointConversion,
            likelihoods.conversion,
        ));
        return lines;
    }
    // alphabetical, so equal likelihoods keep a fixed order after the stable sort
    let candidates = [
        LikelihoodLine {
            outcome: OutcomeKind::FieldGoal,
            percentage: likelihoods.field_goal,
            pass: None,
            rush: None,
        },
        LikelihoodLine::split(OutcomeKind::FirstDown, likelihoods.first_down),
        LikelihoodLine::split(OutcomeKind::Touchdown, likelihoods.touchdown),
    ];
    lines.extend(candidates.into_iter().filter(|line| line.percentage > 0.0));
    lines.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    lines
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Recommendation {
    /// No historical play was close enough.
    NoMatch,
    /// The best match gained nothing.
    NoGain { game_ids: Vec<u64> },
    Found(Box<RecommendationReport>),
}

impl Recommendation {
    #[must_use]
    pub fn report(&self) -> Option<&RecommendationReport> {
        match self {
            Self::Found(report) => Some(&**report),
            Self::NoMatch | Self::NoGain { .. } => None,
        }
    }
}

/// Aggregates a candidate set into a [`Recommendation`].
///
/// With `with_insights` the report also carries [`Insights`] over the same
/// candidates.
#[must_use]
pub fn recommend(situation: &Situation, candidates: &CandidateSet, with_insights: bool) -> Recommendation {
    let aggregation = match OutcomeAggregator::new(situation).aggregate(candidates) {
        Ok(aggregation) => aggregation,
        Err(EmptyCandidateSetError) => return Recommendation::NoMatch,
    };
    let result = match aggregation {
        Aggregation::NoGain { game_ids } => return Recommendation::NoGain { game_ids },
        Aggregation::Complete(result) => result,
    };
    let Some(best_play) = candidates.top() else {
        return Recommendation::NoMatch;
    };
    let mut report = RecommendationReport::assemble(*situation, result, PlayRecord::clone(best_play));
    if with_insights {
        report = report.with_insights(Insights::from_candidates(situation, candidates));
    }
    Recommendation::Found(Box::new(report))
}
