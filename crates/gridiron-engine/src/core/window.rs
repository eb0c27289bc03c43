use serde::Serialize;

use super::{GameClock, MAX_TO_GO, QUARTER_SECONDS, Situation};

/// Half-width of the yards-to-go window.
pub const TO_GO_TOLERANCE: u16 = 1;

/// Half-width of the yard-line window.
pub const YARD_LINE_TOLERANCE: u16 = 5;

/// Half-width of the clock window, in game seconds.
pub const CLOCK_TOLERANCE_SECONDS: u16 = 90;

/// Largest yard line a window may reach. 100 is a placeholder value in the
/// recorded data and never matches.
pub const WINDOW_MAX_YARD_LINE: u16 = 99;

/// Yard lines a two-point try may be snapped from.
pub const CONVERSION_YARD_LINES: ToleranceWindow = ToleranceWindow::exact(98, 99);

/// Inclusive range of acceptable values on one situational dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToleranceWindow {
    lower: u16,
    upper: u16,
}

impl ToleranceWindow {
    #[must_use]
    pub const fn exact(lower: u16, upper: u16) -> Self {
        Self { lower, upper }
    }

    /// `center ± half_width`, clamped to `[min, max]`.
    #[must_use]
    pub fn around(center: u16, half_width: u16, min: u16, max: u16) -> Self {
        Self {
            lower: center.saturating_sub(half_width).max(min),
            upper: center.saturating_add(half_width).min(max),
        }
    }

    /// One yard either way, never below 1. Nothing to go only matches nothing to go.
    #[must_use]
    pub fn yards_to_go(to_go: u8) -> Self {
        if to_go == 0 {
            return Self::exact(0, 0);
        }
        Self::around(
            u16::from(to_go),
            TO_GO_TOLERANCE,
            1,
            u16::from(MAX_TO_GO),
        )
    }

    #[must_use]
    pub fn yard_line(yard_line: u8) -> Self {
        Self::around(
            u16::from(yard_line),
            YARD_LINE_TOLERANCE,
            0,
            WINDOW_MAX_YARD_LINE,
        )
    }

    /// 90 game seconds either way, clamped to the quarter and expressed as
    /// clock ordinals (see [`GameClock::ordinal`]).
    #[must_use]
    pub fn clock(clock: GameClock) -> Self {
        let seconds = clock.total_seconds();
        let lower = GameClock::from_total_seconds(seconds.saturating_sub(CLOCK_TOLERANCE_SECONDS));
        let upper = GameClock::from_total_seconds(
            seconds
                .saturating_add(CLOCK_TOLERANCE_SECONDS)
                .min(QUARTER_SECONDS),
        );
        Self::exact(lower.ordinal(), upper.ordinal())
    }

    #[must_use]
    pub const fn lower(&self) -> u16 {
        self.lower
    }

    #[must_use]
    pub const fn upper(&self) -> u16 {
        self.upper
    }

    #[must_use]
    pub const fn contains(&self, value: u16) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// The three windows a candidate must satisfy for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchWindows {
    pub to_go: ToleranceWindow,
    pub yard_line: ToleranceWindow,
    pub clock: ToleranceWindow,
}

impl SearchWindows {
    /// Two-point queries look only at tries from the 98 or 99 with nothing to
    /// go; every other query, other conversion-down shapes included, gets
    /// computed windows.
    #[must_use]
    pub fn for_situation(situation: &Situation) -> Self {
        let clock = ToleranceWindow::clock(situation.clock());
        if situation.is_two_point_attempt() {
            return Self {
                to_go: ToleranceWindow::exact(0, 0),
                yard_line: CONVERSION_YARD_LINES,
                clock,
            };
        }
        Self {
            to_go: ToleranceWindow::yards_to_go(situation.to_go()),
            yard_line: ToleranceWindow::yard_line(situation.yard_line()),
            clock,
        }
    }
}
