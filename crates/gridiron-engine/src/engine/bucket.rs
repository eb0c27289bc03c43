use std::sync::Arc;

use crate::{LoadError, PlayRecord, Situation, StoreState};

const BUCKET_MODULUS: u16 = 499;

/// Number of buckets in a [`SituationBucketIndex`].
pub const BUCKET_COUNT: usize = BUCKET_MODULUS as usize;

const DOWN_STRIDE: u16 = 1860;
const TO_GO_STRIDE: u16 = 310;
const FIELD_STRIDE: u16 = 31;

/// Raw key of the first conversion band, just past the last regular down.
const CONVERSION_BASE: u16 = 4 * DOWN_STRIDE;

const LATE_FIRST_HALF_SECONDS: u16 = 300;
const LATE_FOURTH_SECONDS: u16 = 600;
const TIME_CLASS_SECONDS: u16 = 30;
const FOURTH_QUARTER_TIME_BASE: u16 = 11;

/// Coarse situational hash used to group plays.
///
/// The down, yards-to-go class, field decile and time class each take their
/// own range of the raw key before it is reduced modulo [`BUCKET_COUNT`].
/// Distinct situations can share a key; the matcher refines bucket members
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BucketKey(u16);

impl BucketKey {
    #[must_use]
    pub fn for_situation(situation: &Situation) -> Self {
        let raw = if situation.is_conversion_down() {
            CONVERSION_BASE + conversion_band(situation.yard_line())
        } else {
            u16::from(situation.down() - 1) * DOWN_STRIDE
                + to_go_class(situation.to_go()) * TO_GO_STRIDE
                + field_class(situation.yard_line()) * FIELD_STRIDE
                + time_class(situation)
        };
        Self(raw % BUCKET_MODULUS)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Breakpoints: 1, 2-3, 4-6, 7-10, 11-16, 17 and longer.
#[must_use]
pub fn to_go_class(to_go: u8) -> u16 {
    match to_go {
        0..=1 => 0,
        2..=3 => 1,
        4..=6 => 2,
        7..=10 => 3,
        11..=16 => 4,
        _ => 5,
    }
}

#[must_use]
pub fn field_class(yard_line: u8) -> u16 {
    u16::from(yard_line / 10)
}

/// 0 outside the late windows (last five minutes of quarters 1-3, last ten
/// of the 4th); otherwise a 30-second slot counted from the end of the quarter.
#[must_use]
pub fn time_class(situation: &Situation) -> u16 {
    let remaining = situation.clock().total_seconds();
    let slot = remaining.saturating_sub(1) / TIME_CLASS_SECONDS;
    if situation.quarter() == 4 {
        if remaining <= LATE_FOURTH_SECONDS {
            FOURTH_QUARTER_TIME_BASE + slot
        } else {
            0
        }
    } else if remaining <= LATE_FIRST_HALF_SECONDS {
        1 + slot
    } else {
        0
    }
}

/// Offset of a conversion snap within the conversion keys: 99, 98, 90-97, 89 and closer.
#[must_use]
pub fn conversion_band(yard_line: u8) -> u16 {
    match yard_line {
        99.. => 0,
        98 => 1,
        90..=97 => 2,
        _ => 3,
    }
}

/// Plays grouped by [`BucketKey`].
///
/// Each bucket owns a list of shared records in load order. Lookup returns
/// the query's whole bucket; quarter is not part of the key, so members can
/// come from any quarter.
#[derive(Debug, Clone)]
pub struct SituationBucketIndex {
    buckets: Vec<Vec<Arc<PlayRecord>>>,
    state: StoreState,
    len: usize,
}

impl Default for SituationBucketIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SituationBucketIndex {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); BUCKET_COUNT],
            state: StoreState::Empty,
            len: 0,
        }
    }

    /// Places every play in its bucket and returns the number of plays indexed.
    pub fn load<I>(&mut self, plays: I) -> Result<usize, LoadError>
    where
        I: IntoIterator<Item = Arc<PlayRecord>>,
    {
        if self.state.is_loaded() {
            return Err(LoadError::AlreadyLoaded);
        }
        for play in plays {
            let key = BucketKey::for_situation(play.situation());
            self.buckets[key.index()].push(play);
            self.len += 1;
        }
        self.state = StoreState::Loaded;
        log::debug!(
            "bucket index loaded with {} plays in {} occupied buckets",
            self.len,
            self.buckets.iter().filter(|b| !b.is_empty()).count()
        );
        Ok(self.len)
    }

    /// Members of the bucket the query falls in, unordered.
    #[must_use]
    pub fn lookup(&self, situation: &Situation) -> &[Arc<PlayRecord>] {
        self.bucket(BucketKey::for_situation(situation))
    }

    #[must_use]
    pub fn bucket(&self, key: BucketKey) -> &[Arc<PlayRecord>] {
        &self.buckets[key.index()]
    }

    /// All buckets in key order, empty ones included.
    pub fn buckets(&self) -> impl ExactSizeIterator<Item = &[Arc<PlayRecord>]> {
        self.buckets.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub const fn state(&self) -> StoreState {
        self.state
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}
