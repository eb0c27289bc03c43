use std::{fmt, str::FromStr};

use serde::Serialize;

/// Length of a quarter in minutes.
pub const QUARTER_MINUTES: u8 = 15;

/// Length of a quarter in seconds.
pub const QUARTER_SECONDS: u16 = 900;

const SECONDS_PER_MINUTE: u16 = 60;

/// Time left in the current quarter.
///
/// Besides elapsed-seconds arithmetic the clock exposes an [`ordinal`](Self::ordinal):
/// the minute followed by the zero-padded second read as one number (`10:05` is
/// `1005`). Matching compares plays on that ordinal, so the gap between `10:00`
/// and `9:59` is 41 rather than 1.
///
/// # Example
///
/// ```
/// use gridiron_engine::GameClock;
///
/// let clock: GameClock = "09:45".parse().unwrap();
/// assert_eq!(clock.total_seconds(), 585);
/// assert_eq!(clock.ordinal(), 945);
/// assert_eq!(clock.to_string(), "09:45");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GameClock {
    minute: u8,
    second: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ClockError {
    #[display("minutes exceed 15")]
    MinuteOutOfRange,
    #[display("seconds exceed 59")]
    SecondOutOfRange,
    #[display("time exceeds 15:00")]
    PastQuarterLength,
    #[display("time format is invalid, enter it like 11:24 or 03:20")]
    Malformed,
}

impl GameClock {
    pub const FULL_QUARTER: Self = Self {
        minute: QUARTER_MINUTES,
        second: 0,
    };

    pub const EXPIRED: Self = Self {
        minute: 0,
        second: 0,
    };

    pub fn new(minute: u8, second: u8) -> Result<Self, ClockError> {
        if minute > QUARTER_MINUTES {
            return Err(ClockError::MinuteOutOfRange);
        }
        if u16::from(second) >= SECONDS_PER_MINUTE {
            return Err(ClockError::SecondOutOfRange);
        }
        if minute == QUARTER_MINUTES && second > 0 {
            return Err(ClockError::PastQuarterLength);
        }
        Ok(Self { minute, second })
    }

    /// Builds a clock from seconds left, saturating at a full quarter.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn from_total_seconds(total: u16) -> Self {
        let total = total.min(QUARTER_SECONDS);
        Self {
            minute: (total / SECONDS_PER_MINUTE) as u8,
            second: (total % SECONDS_PER_MINUTE) as u8,
        }
    }

    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    #[must_use]
    pub const fn second(self) -> u8 {
        self.second
    }

    #[must_use]
    pub fn total_seconds(self) -> u16 {
        u16::from(self.minute) * SECONDS_PER_MINUTE + u16::from(self.second)
    }

    /// Minute and zero-padded second concatenated into one integer.
    #[must_use]
    pub fn ordinal(self) -> u16 {
        u16::from(self.minute) * 100 + u16::from(self.second)
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minute, self.second)
    }
}

impl FromStr for GameClock {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (minute, second) = s.trim().split_once(':').ok_or(ClockError::Malformed)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !(1..=2).contains(&minute.len())
            || second.len() != 2
            || !all_digits(minute)
            || !all_digits(second)
        {
            return Err(ClockError::Malformed);
        }
        let minute = minute.parse().map_err(|_| ClockError::Malformed)?;
        let second = second.parse().map_err(|_| ClockError::Malformed)?;
        Self::new(minute, second)
    }
}
