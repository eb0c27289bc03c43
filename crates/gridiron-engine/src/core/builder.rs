use chrono::NaiveDate;

use super::{ClockError, GameClock, GameInfo, PlayCall, PlayOutcome, PlayRecord, Situation, SituationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PlayBuildError {
    #[display("invalid clock: {_0}")]
    Clock(ClockError),
    #[display("invalid situation: {_0}")]
    Situation(SituationError),
}

/// Assembles a [`PlayRecord`] field by field.
///
/// Unset fields default to a first-and-10 at the 25 with 15:00 left in the
/// first quarter, no gain, and an empty call.
///
/// ```
/// use gridiron_engine::PlayBuilder;
///
/// let play = PlayBuilder::new()
///     .game_id(42)
///     .down(3)
///     .to_go(4)
///     .pass("SHORT RIGHT")
///     .yards(6)
///     .first_down()
///     .build()
///     .unwrap();
/// assert_eq!(play.situation().down(), 3);
/// assert!(play.outcome().first_down);
/// ```
#[derive(Debug, Clone)]
pub struct PlayBuilder {
    game: GameInfo,
    quarter: u8,
    down: u8,
    to_go: u8,
    yard_line: u8,
    minute: u8,
    second: u8,
    call: PlayCall,
    outcome: PlayOutcome,
}

impl Default for PlayBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            game: GameInfo {
                game_id: 0,
                game_date: NaiveDate::MIN,
                offense: String::new(),
                defense: String::new(),
            },
            quarter: 1,
            down: 1,
            to_go: 10,
            yard_line: 25,
            minute: 15,
            second: 0,
            call: PlayCall::default(),
            outcome: PlayOutcome::default(),
        }
    }

    #[must_use]
    pub fn game_id(mut self, game_id: u64) -> Self {
        self.game.game_id = game_id;
        self
    }

    #[must_use]
    pub fn game_date(mut self, game_date: NaiveDate) -> Self {
        self.game.game_date = game_date;
        self
    }

    #[must_use]
    pub fn teams(mut self, offense: impl Into<String>, defense: impl Into<String>) -> Self {
        self.game.offense = offense.into();
        self.game.defense = defense.into();
        self
    }

    #[must_use]
    pub fn quarter(mut self, quarter: u8) -> Self {
        self.quarter = quarter;
        self
    }

    #[must_use]
    pub fn down(mut self, down: u8) -> Self {
        self.down = down;
        self
    }

    #[must_use]
    pub fn to_go(mut self, to_go: u8) -> Self {
        self.to_go = to_go;
        self
    }

    #[must_use]
    pub fn yard_line(mut self, yard_line: u8) -> Self {
        self.yard_line = yard_line;
        self
    }

    #[must_use]
    pub fn clock(mut self, minute: u8, second: u8) -> Self {
        self.minute = minute;
        self.second = second;
        self
    }

    #[must_use]
    pub fn play_type(mut self, play_type: impl Into<String>) -> Self {
        self.call.play_type = play_type.into();
        self
    }

    #[must_use]
    pub fn formation(mut self, formation: impl Into<String>) -> Self {
        self.call.formation = formation.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.call.description = description.into();
        self
    }

    /// Marks the play as a pass of the given type.
    #[must_use]
    pub fn pass(mut self, pass_type: impl Into<String>) -> Self {
        self.call.is_pass = true;
        self.call.pass_type = pass_type.into();
        self
    }

    /// Marks the play as a rush in the given direction.
    #[must_use]
    pub fn rush(mut self, rush_direction: impl Into<String>) -> Self {
        self.call.is_rush = true;
        self.call.rush_direction = rush_direction.into();
        self
    }

    #[must_use]
    pub fn call(mut self, call: PlayCall) -> Self {
        self.call = call;
        self
    }

    #[must_use]
    pub fn outcome(mut self, outcome: PlayOutcome) -> Self {
        self.outcome = outcome;
        self
    }

    #[must_use]
    pub fn yards(mut self, yards: i32) -> Self {
        self.outcome.yards = yards;
        self
    }

    #[must_use]
    pub fn first_down(mut self) -> Self {
        self.outcome.first_down = true;
        self
    }

    #[must_use]
    pub fn touchdown(mut self) -> Self {
        self.outcome.touchdown = true;
        self
    }

    #[must_use]
    pub fn incomplete(mut self) -> Self {
        self.outcome.incomplete = true;
        self
    }

    #[must_use]
    pub fn interception(mut self) -> Self {
        self.outcome.interception = true;
        self
    }

    #[must_use]
    pub fn fumble(mut self) -> Self {
        self.outcome.fumble = true;
        self
    }

    #[must_use]
    pub fn sack(mut self) -> Self {
        self.outcome.sack = true;
        self
    }

    /// Marks the play as a two-point try, successful or not.
    #[must_use]
    pub fn two_point(mut self, success: bool) -> Self {
        self.outcome.two_point_attempt = true;
        self.outcome.two_point_success = success;
        self
    }

    pub fn build(self) -> Result<PlayRecord, PlayBuildError> {
        let clock = GameClock::new(self.minute, self.second)?;
        let situation = Situation::new(self.quarter, self.down, self.to_go, self.yard_line, clock)?;
        Ok(PlayRecord::new(self.game, situation, self.call, self.outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_build() {
        let play = PlayBuilder::new().build().unwrap();
        let s = play.situation();
        assert_eq!((s.quarter(), s.down(), s.to_go(), s.yard_line()), (1, 1, 10, 25));
        assert_eq!(s.clock(), GameClock::FULL_QUARTER);
        assert_eq!(play.rating().value(), 0.0);
    }

    #[test]
    fn test_invalid_fields_surface_errors() {
        assert_eq!(
            PlayBuilder::new().clock(15, 30).build(),
            Err(PlayBuildError::Clock(ClockError::PastQuarterLength))
        );
        assert_eq!(
            PlayBuilder::new().quarter(5).build(),
            Err(PlayBuildError::Situation(SituationError::Quarter { value: 5 }))
        );
    }

    #[test]
    fn test_two_point_sets_both_flags() {
        let play = PlayBuilder::new().down(0).to_go(0).yard_line(98).two_point(true).build().unwrap();
        assert!(play.outcome().two_point_attempt);
        assert!(play.outcome().two_point_success);
        assert!(play.situation().is_two_point_attempt());
    }
}
