use chrono::NaiveDate;
use serde::Serialize;

use super::{PlayWeights, Rating, Situation};

/// Play type label of a field goal attempt.
pub const FIELD_GOAL: &str = "FIELD GOAL";

/// Play type label of a one-point kick after a touchdown.
pub const EXTRA_POINT: &str = "EXTRA POINT";

const FIELD_GOAL_GOOD_MARKER: &str = "IS GOOD";
const PASS_MARKER: &str = "PASS";
const RUSH_MARKER: &str = "RUSH";

/// Which game a play belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameInfo {
    pub game_id: u64,
    pub game_date: NaiveDate,
    pub offense: String,
    pub defense: String,
}

/// What the offense called.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayCall {
    pub play_type: String,
    pub formation: String,
    pub pass_type: String,
    pub rush_direction: String,
    pub is_pass: bool,
    pub is_rush: bool,
    pub description: String,
}

/// Offensive style of a play: pass or rush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum PlayStyle {
    #[display("PASS")]
    Pass,
    #[display("RUSH")]
    Rush,
}

impl PlayCall {
    #[must_use]
    pub fn is_field_goal(&self) -> bool {
        self.play_type == FIELD_GOAL
    }

    #[must_use]
    pub fn is_extra_point(&self) -> bool {
        self.play_type == EXTRA_POINT
    }

    /// Field goals carry no result flag; the description says "IS GOOD" when made.
    #[must_use]
    pub fn is_successful_field_goal(&self) -> bool {
        self.is_field_goal() && self.description.contains(FIELD_GOAL_GOOD_MARKER)
    }

    /// Style taken from the structured pass/rush flags.
    #[must_use]
    pub fn style(&self) -> Option<PlayStyle> {
        if self.is_pass {
            Some(PlayStyle::Pass)
        } else if self.is_rush {
            Some(PlayStyle::Rush)
        } else {
            None
        }
    }

    /// Style of a two-point try, read from the description text.
    ///
    /// Conversion rows leave both flags unset, so the only hint is a literal,
    /// case-sensitive "PASS" or "RUSH" in the description. "PASS" wins when
    /// both appear.
    #[must_use]
    pub fn conversion_style(&self) -> Option<PlayStyle> {
        if self.description.contains(PASS_MARKER) {
            Some(PlayStyle::Pass)
        } else if self.description.contains(RUSH_MARKER) {
            Some(PlayStyle::Rush)
        } else {
            None
        }
    }

    /// Sub-type shown next to the play type: pass type for passes, rush
    /// direction for rushes.
    #[must_use]
    pub fn sub_type(&self) -> Option<&str> {
        match self.style()? {
            PlayStyle::Pass => Some(&self.pass_type),
            PlayStyle::Rush => Some(&self.rush_direction),
        }
    }
}

/// How the play turned out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[expect(clippy::struct_excessive_bools)]
pub struct PlayOutcome {
    pub yards: i32,
    pub first_down: bool,
    pub touchdown: bool,
    pub incomplete: bool,
    pub interception: bool,
    pub fumble: bool,
    pub sack: bool,
    pub two_point_attempt: bool,
    pub two_point_success: bool,
}

impl PlayOutcome {
    /// Incomplete, intercepted, or lost yardage.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.incomplete || self.interception || self.yards < 0
    }

    #[must_use]
    pub const fn is_turnover(&self) -> bool {
        self.interception || self.fumble
    }
}

/// One historical play.
///
/// Records are built once through [`PlayBuilder`](super::PlayBuilder), which
/// derives the scoring [`PlayWeights`] from the outcome, and are shared
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayRecord {
    game: GameInfo,
    situation: Situation,
    call: PlayCall,
    outcome: PlayOutcome,
    weights: PlayWeights,
}

impl PlayRecord {
    #[must_use]
    pub fn new(game: GameInfo, situation: Situation, call: PlayCall, outcome: PlayOutcome) -> Self {
        let weights = PlayWeights::from_outcome(&outcome);
        Self {
            game,
            situation,
            call,
            outcome,
            weights,
        }
    }

    #[must_use]
    pub const fn game(&self) -> &GameInfo {
        &self.game
    }

    #[must_use]
    pub const fn game_id(&self) -> u64 {
        self.game.game_id
    }

    #[must_use]
    pub const fn situation(&self) -> &Situation {
        &self.situation
    }

    #[must_use]
    pub const fn call(&self) -> &PlayCall {
        &self.call
    }

    #[must_use]
    pub const fn outcome(&self) -> &PlayOutcome {
        &self.outcome
    }

    #[must_use]
    pub const fn weights(&self) -> &PlayWeights {
        &self.weights
    }

    #[must_use]
    pub fn rating(&self) -> Rating {
        Rating::new(self.weights.total())
    }
}
