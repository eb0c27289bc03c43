//! Supplementary breakdowns over a candidate set.
//!
//! These do not affect the recommendation itself; they are attached to a
//! report on request:
//!
//! - [`RunPassComparison`]: rushes against passes, with a lean toward one side
//! - [`RiskProfile`]: how often similar snaps ended badly
//! - [`Summary`] of resulting yards
//! - [`PlayTypeStats`]: the best-performing play calls, ranked
//! - [`StrategyNote`]: a one-sentence call sheet note built from the above

use std::{collections::BTreeMap, fmt};

use gridiron_engine::{CandidateSet, PlayRecord, Situation};
use gridiron_stats::{
    rate::{percentage, ratio},
    summary::Summary,
};
use serde::Serialize;

use crate::aggregate::PlayCombo;

/// Margin one side's score must clear to win the comparison.
pub const LEAN_MARGIN: f32 = 1.15;

/// Fewest attempts a play call needs to be ranked.
pub const MIN_ATTEMPTS: u32 = 3;

/// Most play calls kept in the breakdown.
pub const MAX_PLAY_TYPES: usize = 8;

/// Turnover percentage above which a strategy note warns about ball security.
pub const BALL_SECURITY_TURNOVER_RATE: f32 = 8.0;

/// First down, touchdown, or a completed gain.
fn is_success(play: &PlayRecord) -> bool {
    let outcome = play.outcome();
    outcome.first_down || outcome.touchdown || (outcome.yards > 0 && !outcome.incomplete)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StyleProfile {
    pub attempts: u32,
    pub success_rate: f32,
    pub avg_yards: f32,
    pub first_down_rate: f32,
    pub turnover_rate: f32,
}

impl StyleProfile {
    /// `turnover` decides which outcomes count as giving the ball away.
    #[expect(clippy::cast_precision_loss)]
    fn new<'a>(plays: impl Iterator<Item = &'a PlayRecord>, turnover: impl Fn(&PlayRecord) -> bool) -> Self {
        let (mut attempts, mut successes, mut first_downs, mut turnovers) = (0, 0, 0, 0);
        let mut yards = 0_i64;
        for play in plays {
            attempts += 1;
            successes += u32::from(is_success(play));
            first_downs += u32::from(play.outcome().first_down);
            turnovers += u32::from(turnover(play));
            yards += i64::from(play.outcome().yards);
        }
        Self {
            attempts,
            success_rate: percentage(successes, attempts),
            avg_yards: if attempts == 0 {
                0.0
            } else {
                yards as f32 / attempts as f32
            },
            first_down_rate: percentage(first_downs, attempts),
            turnover_rate: percentage(turnovers, attempts),
        }
    }

    /// `2 × avg yards + first-down rate − 50 × turnover share`.
    #[must_use]
    pub fn score(&self) -> f32 {
        self.avg_yards * 2.0 + self.first_down_rate - self.turnover_rate / 100.0 * 50.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum Lean {
    #[display("run")]
    Run,
    #[display("pass")]
    Pass,
    #[display("balanced")]
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunPassComparison {
    pub rush: StyleProfile,
    pub pass: StyleProfile,
    pub lean: Lean,
}

impl RunPassComparison {
    #[must_use]
    pub fn new(candidates: &CandidateSet) -> Self {
        let plays = || candidates.iter().map(|play| &**play);
        let rush = StyleProfile::new(
            plays().filter(|p| p.call().is_rush),
            |p| p.outcome().fumble,
        );
        let pass = StyleProfile::new(
            plays().filter(|p| p.call().is_pass),
            |p| p.outcome().is_turnover(),
        );
        let lean = if rush.score() > pass.score() * LEAN_MARGIN {
            Lean::Run
        } else if pass.score() > rush.score() * LEAN_MARGIN {
            Lean::Pass
        } else {
            Lean::Balanced
        };
        Self { rush, pass, lean }
    }
}

/// Rates of bad outcomes. Interceptions, sacks and incompletions are shares
/// of passes; the rest are shares of all candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RiskProfile {
    pub turnover_rate: f32,
    pub interception_rate: f32,
    pub fumble_rate: f32,
    pub sack_rate: f32,
    pub negative_play_rate: f32,
    pub incompletion_rate: f32,
}

impl RiskProfile {
    #[must_use]
    pub fn new(candidates: &CandidateSet) -> Self {
        let mut total = 0;
        let mut passes = 0;
        let (mut turnovers, mut interceptions, mut fumbles) = (0, 0, 0);
        let (mut sacks, mut negatives, mut incompletions) = (0, 0, 0);
        for play in candidates {
            let outcome = play.outcome();
            total += 1;
            turnovers += u32::from(outcome.is_turnover());
            fumbles += u32::from(outcome.fumble);
            negatives += u32::from(outcome.yards < 0);
            if play.call().is_pass {
                passes += 1;
                interceptions += u32::from(outcome.interception);
                sacks += u32::from(outcome.sack);
                incompletions += u32::from(outcome.incomplete);
            }
        }
        Self {
            turnover_rate: percentage(turnovers, total),
            interception_rate: percentage(interceptions, passes),
            fumble_rate: percentage(fumbles, total),
            sack_rate: percentage(sacks, passes),
            negative_play_rate: percentage(negatives, total),
            incompletion_rate: percentage(incompletions, passes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayTypeStats {
    pub combo: PlayCombo,
    pub attempts: u32,
    pub successes: u32,
    pub success_rate: f32,
    pub avg_yards: f32,
    pub touchdowns: u32,
    pub turnovers: u32,
    pub negative_play_rate: f32,
}

impl PlayTypeStats {
    fn empty(combo: PlayCombo) -> Self {
        Self {
            combo,
            attempts: 0,
            successes: 0,
            success_rate: 0.0,
            avg_yards: 0.0,
            touchdowns: 0,
            turnovers: 0,
            negative_play_rate: 0.0,
        }
    }

    /// Success rate damped for small samples and penalized for turnovers.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn rank_score(&self) -> f32 {
        let turnover_share = ratio(self.turnovers, self.attempts.max(1));
        self.success_rate * ((self.attempts + 1) as f32).log10() * (1.0 - 0.5 * turnover_share)
    }

    /// Play calls with at least [`MIN_ATTEMPTS`] attempts, best first, at
    /// most [`MAX_PLAY_TYPES`] of them.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn breakdown(candidates: &CandidateSet) -> Vec<Self> {
        let mut by_combo = BTreeMap::<PlayCombo, (Self, i64, u32)>::new();
        for play in candidates {
            let call = play.call();
            let outcome = play.outcome();
            let combo = PlayCombo::new(&call.play_type, call.sub_type().unwrap_or_default());
            let (stats, yards, negatives) = by_combo
                .entry(combo)
                .or_insert_with_key(|combo| (Self::empty(combo.clone()), 0, 0));
            stats.attempts += 1;
            stats.successes += u32::from(is_success(play));
            stats.touchdowns += u32::from(outcome.touchdown);
            stats.turnovers += u32::from(outcome.is_turnover());
            *yards += i64::from(outcome.yards);
            *negatives += u32::from(outcome.yards < 0);
        }

        let mut ranked: Vec<_> = by_combo
            .into_values()
            .filter(|(stats, _, _)| stats.attempts >= MIN_ATTEMPTS)
            .map(|(mut stats, yards, negatives)| {
                stats.success_rate = percentage(stats.successes, stats.attempts);
                stats.avg_yards = yards as f32 / stats.attempts as f32;
                stats.negative_play_rate = percentage(negatives, stats.attempts);
                stats
            })
            .collect();
        ranked.sort_by(|a, b| b.rank_score().total_cmp(&a.rank_score()));
        ranked.truncate(MAX_PLAY_TYPES);
        ranked
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyNote {
    pub situation: Situation,
    pub lean: Lean,
    pub top_play: Option<PlayTypeStats>,
    pub ball_security_warning: bool,
}

impl StrategyNote {
    #[must_use]
    pub fn new(situation: Situation, lean: Lean, risk: &RiskProfile, play_types: &[PlayTypeStats]) -> Self {
        Self {
            situation,
            lean,
            top_play: play_types.first().cloned(),
            ball_security_warning: risk.turnover_rate > BALL_SECURITY_TURNOVER_RATE,
        }
    }

    fn guidance(&self) -> &'static str {
        match self.lean {
            Lean::Run => "Lean on the ground game: runs are generating safer, more efficient yardage right now",
            Lean::Pass => "Spread the field: passing concepts are outperforming the run in these spots",
            Lean::Balanced => "Mix your calls: neither run nor pass has a decisive edge, so stay unpredictable",
        }
    }
}

impl fmt::Display for StrategyNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.guidance())?;
        if let Some(top) = &self.top_play {
            write!(f, ". Top result: {}", top.combo.play_type)?;
            if !top.combo.sub_type.is_empty() {
                write!(f, " ({})", top.combo.sub_type)?;
            }
            write!(f, " with {:.1}% success across {} reps", top.success_rate, top.attempts)?;
        }
        if self.ball_security_warning {
            f.write_str(". Ball security is a concern: consider quicker throws or conservative concepts")?;
        }
        let situation = &self.situation;
        if situation.is_conversion_down() {
            f.write_str(" for conversion")?;
        } else {
            write!(f, " for down {}", situation.down())?;
        }
        write!(f, ", {} to go inside the {}.", situation.to_go(), situation.yard_line())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub run_pass: RunPassComparison,
    pub risk: RiskProfile,
    pub yardage: Option<Summary<i32>>,
    pub play_types: Vec<PlayTypeStats>,
    pub strategy: StrategyNote,
}

impl Insights {
    #[must_use]
    pub fn from_candidates(situation: &Situation, candidates: &CandidateSet) -> Self {
        let run_pass = RunPassComparison::new(candidates);
        let risk = RiskProfile::new(candidates);
        let play_types = PlayTypeStats::breakdown(candidates);
        let strategy = StrategyNote::new(*situation, run_pass.lean, &risk, &play_types);
        Self {
            run_pass,
            risk,
            yardage: Summary::new(candidates.iter().map(|p| p.outcome().yards)),
            play_types,
            strategy,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use gridiron_engine::{GameClock, PlayBuilder};

    use super::*;

    fn third_and_seven() -> Situation {
        Situation::new(2, 3, 7, 62, GameClock::new(4, 12).unwrap()).unwrap()
    }

    fn candidates(builders: impl IntoIterator<Item = PlayBuilder>) -> CandidateSet {
        builders
            .into_iter()
            .map(|b| Arc::new(b.build().unwrap()))
            .collect()
    }

    #[test]
    fn test_empty_set_is_all_zero() {
        let insights = Insights::from_candidates(&third_and_seven(), &CandidateSet::default());
        assert_eq!(insights.run_pass.rush, StyleProfile::default());
        assert_eq!(insights.run_pass.lean, Lean::Balanced);
        assert_eq!(insights.risk, RiskProfile::default());
        assert_eq!(insights.yardage, None);
        assert!(insights.play_types.is_empty());
    }

    #[test]
    fn test_run_lean_when_rushing_dominates() {
        let set = candidates([
            PlayBuilder::new().rush("LEFT END").yards(8).first_down(),
            PlayBuilder::new().rush("LEFT END").yards(6),
            PlayBuilder::new().pass("SHORT LEFT").incomplete(),
            PlayBuilder::new().pass("SHORT LEFT").yards(2),
        ]);
        let comparison = RunPassComparison::new(&set);
        assert_eq!(comparison.rush.attempts, 2);
        assert_eq!(comparison.rush.avg_yards, 7.0);
        assert_eq!(comparison.rush.success_rate, 100.0);
        assert_eq!(comparison.pass.success_rate, 50.0);
        assert!(comparison.lean.is_run());
    }

    #[test]
    fn test_rush_turnovers_count_fumbles_only() {
        let set = candidates([
            PlayBuilder::new().rush("CENTER").yards(2).fumble(),
            PlayBuilder::new().rush("CENTER").yards(3).interception(),
        ]);
        assert_eq!(RunPassComparison::new(&set).rush.turnover_rate, 50.0);
    }

    #[test]
    fn test_risk_rates_use_pass_denominators() {
        let set = candidates([
            PlayBuilder::new().pass("DEEP LEFT").interception(),
            PlayBuilder::new().pass("SHORT RIGHT").sack().yards(-7),
            PlayBuilder::new().rush("RIGHT END").yards(-2).fumble(),
            PlayBuilder::new().rush("RIGHT END").yards(4),
        ]);
        let risk = RiskProfile::new(&set);
        assert_eq!(risk.turnover_rate, 50.0);
        assert_eq!(risk.interception_rate, 50.0);
        assert_eq!(risk.sack_rate, 50.0);
        assert_eq!(risk.fumble_rate, 25.0);
        assert_eq!(risk.negative_play_rate, 50.0);
        assert_eq!(risk.incompletion_rate, 0.0);
    }

    #[test]
    fn test_breakdown_filters_and_ranks() {
        let mut builders = Vec::new();
        for yards in [5, 7, 9] {
            builders.push(PlayBuilder::new().play_type("RUSH").rush("LEFT END").yards(yards));
        }
        for yards in [4, 0, 0, 0] {
            builders.push(PlayBuilder::new().play_type("PASS").pass("SHORT LEFT").yards(yards));
        }
        builders.push(PlayBuilder::new().play_type("PASS").pass("DEEP RIGHT").yards(40));
        let breakdown = PlayTypeStats::breakdown(&candidates(builders));

        let combos: Vec<_> = breakdown.iter().map(|s| s.combo.sub_type.as_str()).collect();
        assert_eq!(combos, ["LEFT END", "SHORT LEFT"]);
        assert_eq!(breakdown[0].avg_yards, 7.0);
        assert_eq!(breakdown[1].success_rate, 25.0);
        assert_eq!(breakdown[1].attempts, 4);
    }

    #[test]
    fn test_yardage_summary() {
        let set = candidates([
            PlayBuilder::new().yards(10),
            PlayBuilder::new().yards(-4),
            PlayBuilder::new().yards(3),
        ]);
        let summary = Insights::from_candidates(&third_and_seven(), &set).yardage.unwrap();
        assert_eq!((summary.count, summary.min, summary.max, summary.median), (3, -4, 10, 3));
        assert_eq!(summary.mean, 3.0);
    }

    mod strategy {
        use super::*;

        /// `turnovers` fumbled rushes followed by clean 4-yard rushes.
        fn rushes(total: usize, turnovers: usize) -> CandidateSet {
            candidates((0..total).map(|i| {
                let play = PlayBuilder::new().play_type("RUSH").rush("LEFT END").yards(4);
                if i < turnovers { play.fumble() } else { play }
            }))
        }

        #[test]
        fn test_exactly_eight_percent_turnovers_does_not_warn() {
            let set = rushes(25, 2);
            let insights = Insights::from_candidates(&third_and_seven(), &set);
            assert_eq!(insights.risk.turnover_rate, 8.0);
            assert!(!insights.strategy.ball_security_warning);
            assert!(!insights.strategy.to_string().contains("Ball security"));
        }

        #[test]
        fn test_just_over_eight_percent_turnovers_warns() {
            let set = rushes(12, 1);
            let insights = Insights::from_candidates(&third_and_seven(), &set);
            assert!(insights.risk.turnover_rate > BALL_SECURITY_TURNOVER_RATE);
            assert!(insights.strategy.ball_security_warning);
            assert!(
                insights
                    .strategy
                    .to_string()
                    .contains(". Ball security is a concern: consider quicker throws")
            );
        }

        #[test]
        fn test_note_names_lean_top_play_and_situation() {
            let set = rushes(4, 0);
            let note = Insights::from_candidates(&third_and_seven(), &set).strategy;
            assert!(note.lean.is_run());
            assert_eq!(
                note.to_string(),
                "Lean on the ground game: runs are generating safer, more efficient yardage \
                 right now. Top result: RUSH (LEFT END) with 100.0% success across 4 reps \
                 for down 3, 7 to go inside the 62."
            );
        }

        #[test]
        fn test_empty_set_reads_balanced_without_top_play() {
            let situation = Situation::new(4, 0, 0, 98, GameClock::new(0, 40).unwrap()).unwrap();
            let note = Insights::from_candidates(&situation, &CandidateSet::default()).strategy;
            assert_eq!(note.top_play, None);
            assert_eq!(
                note.to_string(),
                "Mix your calls: neither run nor pass has a decisive edge, so stay unpredictable \
                 for conversion, 0 to go inside the 98."
            );
        }
    }
}
