use serde::Serialize;

use super::GameClock;

/// Highest yard-line value; 100 is the opponent's goal line.
pub const MAX_YARD_LINE: u8 = 100;

/// Highest yards-to-go value accepted anywhere in the engine.
pub const MAX_TO_GO: u8 = 99;

/// Down value used for try attempts after a touchdown.
pub const CONVERSION_DOWN: u8 = 0;

/// The situational coordinates of a snap.
///
/// Used both as the query a user asks about and as the recorded situation of
/// every [`PlayRecord`](super::PlayRecord). A down of [`CONVERSION_DOWN`] marks
/// a try after a touchdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Situation {
    quarter: u8,
    down: u8,
    to_go: u8,
    yard_line: u8,
    clock: GameClock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SituationError {
    #[display("quarter {value} is outside 1-4")]
    Quarter { value: u8 },
    #[display("down {value} is outside 0-4")]
    Down { value: u8 },
    #[display("yards to go {value} is outside 0-99")]
    ToGo { value: u8 },
    #[display("yard line {value} is outside 0-100")]
    YardLine { value: u8 },
}

impl Situation {
    pub fn new(
        quarter: u8,
        down: u8,
        to_go: u8,
        yard_line: u8,
        clock: GameClock,
    ) -> Result<Self, SituationError> {
        if !(1..=4).contains(&quarter) {
            return Err(SituationError::Quarter { value: quarter });
        }
        if down > 4 {
            return Err(SituationError::Down { value: down });
        }
        if to_go > MAX_TO_GO {
            return Err(SituationError::ToGo { value: to_go });
        }
        if yard_line > MAX_YARD_LINE {
            return Err(SituationError::YardLine { value: yard_line });
        }
        Ok(Self {
            quarter,
            down,
            to_go,
            yard_line,
            clock,
        })
    }

    #[must_use]
    pub const fn quarter(&self) -> u8 {
        self.quarter
    }

    #[must_use]
    pub const fn down(&self) -> u8 {
        self.down
    }

    #[must_use]
    pub const fn to_go(&self) -> u8 {
        self.to_go
    }

    #[must_use]
    pub const fn yard_line(&self) -> u8 {
        self.yard_line
    }

    #[must_use]
    pub const fn clock(&self) -> GameClock {
        self.clock
    }

    #[must_use]
    pub const fn is_conversion_down(&self) -> bool {
        self.down == CONVERSION_DOWN
    }

    /// Whether this situation asks about a two-point try: conversion down,
    /// nothing to go, and the ball at the 98 or 99.
    #[must_use]
    pub const fn is_two_point_attempt(&self) -> bool {
        self.is_conversion_down() && self.to_go == 0 && matches!(self.yard_line, 98 | 99)
    }
}
