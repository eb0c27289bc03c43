use std::sync::Arc;

use crate::{OrderedPlayStore, PlayRecord, SearchWindows, Situation};

/// Where a matcher draws its plays from.
#[derive(Debug, Clone, Copy)]
pub enum PlaySource<'a> {
    /// Full scan of a loaded store, in rating order.
    Store(&'a OrderedPlayStore),
    /// Members of one bucket; re-ranked before filtering.
    Bucket(&'a [Arc<PlayRecord>]),
}

/// Filters historical plays down to those close to a query situation.
///
/// A candidate must have the query's down and fall inside every
/// [`SearchWindows`] range. A full scan of a store also requires the same
/// quarter; a bucket scan does not, since the bucket key ignores quarter.
/// Two-point queries additionally keep only recorded two-point tries that are
/// not extra-point kicks.
#[derive(Debug, Clone, Copy)]
pub struct SituationMatcher {
    situation: Situation,
    windows: SearchWindows,
}

impl SituationMatcher {
    #[must_use]
    pub fn new(situation: Situation) -> Self {
        Self {
            situation,
            windows: SearchWindows::for_situation(&situation),
        }
    }

    #[must_use]
    pub const fn situation(&self) -> &Situation {
        &self.situation
    }

    #[must_use]
    pub const fn windows(&self) -> &SearchWindows {
        &self.windows
    }

    /// Candidates in descending rating order; empty when nothing is close enough.
    #[must_use]
    pub fn find_candidates(&self, source: PlaySource<'_>) -> CandidateSet {
        let candidates = match source {
            PlaySource::Store(store) => self.scan(store, true),
            PlaySource::Bucket(members) => {
                let ranked = OrderedPlayStore::from_plays(members.iter().cloned());
                self.scan(&ranked, false)
            }
        };
        log::debug!(
            "{} candidates for {:?} ({} source)",
            candidates.len(),
            self.situation,
            match source {
                PlaySource::Store(_) => "store",
                PlaySource::Bucket(_) => "bucket",
            }
        );
        candidates
    }

    fn scan(&self, store: &OrderedPlayStore, check_quarter: bool) -> CandidateSet {
        CandidateSet {
            plays: store
                .snapshot()
                .filter(|play| self.accepts(play, check_quarter))
                .collect(),
        }
    }

    fn accepts(&self, play: &PlayRecord, check_quarter: bool) -> bool {
        let query = &self.situation;
        let recorded = play.situation();
        if check_quarter && recorded.quarter() != query.quarter() {
            return false;
        }
        if recorded.down() != query.down()
            || !self.windows.to_go.contains(u16::from(recorded.to_go()))
            || !self.windows.yard_line.contains(u16::from(recorded.yard_line()))
            || !self.windows.clock.contains(recorded.clock().ordinal())
        {
            return false;
        }
        if query.is_two_point_attempt() {
            return play.outcome().two_point_attempt && !play.call().is_extra_point();
        }
        true
    }
}

/// Shorthand for [`SituationMatcher::new`] followed by
/// [`find_candidates`](SituationMatcher::find_candidates).
#[must_use]
pub fn find_candidates(situation: Situation, source: PlaySource<'_>) -> CandidateSet {
    SituationMatcher::new(situation).find_candidates(source)
}

/// Plays that survived matching, highest rating first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    plays: Vec<Arc<PlayRecord>>,
}

impl CandidateSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// The highest-rated candidate.
    #[must_use]
    pub fn top(&self) -> Option<&Arc<PlayRecord>> {
        self.plays.first()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Arc<PlayRecord>> {
        self.plays.iter()
    }

    #[must_use]
    pub fn plays(&self) -> &[Arc<PlayRecord>] {
        &self.plays
    }

    /// Game ids in candidate order, repeats included.
    #[must_use]
    pub fn game_ids(&self) -> Vec<u64> {
        self.plays.iter().map(|play| play.game_id()).collect()
    }
}

/// Collects plays in any order and ranks them; equal ratings keep their
/// relative order.
impl FromIterator<Arc<PlayRecord>> for CandidateSet {
    fn from_iter<T: IntoIterator<Item = Arc<PlayRecord>>>(iter: T) -> Self {
        let mut plays: Vec<_> = iter.into_iter().collect();
        plays.sort_by(|a, b| b.rating().cmp(&a.rating()));
        Self { plays }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Arc<PlayRecord>;
    type IntoIter = std::slice::Iter<'a, Arc<PlayRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.plays.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameClock, PlayBuilder, SituationBucketIndex};

    fn query(quarter: u8, down: u8, to_go: u8, yard_line: u8, clock: (u8, u8)) -> Situation {
        let clock = GameClock::new(clock.0, clock.1).unwrap();
        Situation::new(quarter, down, to_go, yard_line, clock).unwrap()
    }

    /// First down pass, touchdown rush one yard further downfield, and a
    /// second-down play in the same spot.
    fn three_play_corpus() -> Vec<Arc<PlayRecord>> {
        [
            PlayBuilder::new()
                .game_id(1)
                .quarter(2)
                .down(1)
                .to_go(10)
                .yard_line(50)
                .clock(10, 0)
                .pass("DEEP LEFT")
                .yards(12)
                .first_down(),
            PlayBuilder::new()
                .game_id(2)
                .quarter(2)
                .down(1)
                .to_go(9)
                .yard_line(52)
                .clock(9, 45)
                .rush("RIGHT END")
                .yards(48)
                .touchdown(),
            PlayBuilder::new()
                .game_id(3)
                .quarter(2)
                .down(2)
                .to_go(10)
                .yard_line(50)
                .clock(10, 0)
                .pass("SHORT MIDDLE")
                .yards(30)
                .first_down(),
        ]
        .into_iter()
        .map(|builder| Arc::new(builder.build().unwrap()))
        .collect()
    }

    fn loaded_store(plays: &[Arc<PlayRecord>]) -> OrderedPlayStore {
        let mut store = OrderedPlayStore::new();
        store.load(plays.iter().cloned()).unwrap();
        store
    }

    mod store_scan {
        use super::*;

        #[test]
        fn test_end_to_end_keeps_same_down_within_windows() {
            let store = loaded_store(&three_play_corpus());
            let candidates = find_candidates(query(2, 1, 10, 50, (10, 0)), PlaySource::Store(&store));
            // touchdown rush rates above the first-down pass
            assert_eq!(candidates.game_ids(), [2, 1]);
            assert_eq!(candidates.top().unwrap().game_id(), 2);
        }

        #[test]
        fn test_find_candidates_is_idempotent() {
            let store = loaded_store(&three_play_corpus());
            let matcher = SituationMatcher::new(query(2, 1, 10, 50, (10, 0)));
            let first = matcher.find_candidates(PlaySource::Store(&store));
            let second = matcher.find_candidates(PlaySource::Store(&store));
            assert_eq!(first, second);
            assert_eq!(store.len(), 3);
        }

        #[test]
        fn test_uncovered_situation_yields_empty_set() {
            let store = loaded_store(&three_play_corpus());
            let candidates = find_candidates(query(2, 4, 99, 1, (10, 0)), PlaySource::Store(&store));
            assert!(candidates.is_empty());
            assert!(candidates.top().is_none());
        }

        #[test]
        fn test_other_quarter_is_excluded() {
            let store = loaded_store(&three_play_corpus());
            let candidates = find_candidates(query(3, 1, 10, 50, (10, 0)), PlaySource::Store(&store));
            assert!(candidates.is_empty());
        }

        #[test]
        fn test_clock_window_compares_ordinals() {
            // 8:31 is 89 seconds before 10:00 but its ordinal 831 is inside [830, 1130]
            let inside = PlayBuilder::new().game_id(7).clock(8, 31).build().unwrap();
            // 8:29 is outside by one
            let outside = PlayBuilder::new().game_id(8).clock(8, 29).build().unwrap();
            let store = loaded_store(&[Arc::new(inside), Arc::new(outside)]);
            let candidates = find_candidates(query(1, 1, 10, 25, (10, 0)), PlaySource::Store(&store));
            assert_eq!(candidates.game_ids(), [7]);
        }
    }

    mod two_point {
        use super::*;

        fn try_play(game_id: u64, play_type: &str, attempt: bool) -> Arc<PlayRecord> {
            let builder = PlayBuilder::new()
                .game_id(game_id)
                .quarter(4)
                .down(0)
                .to_go(0)
                .yard_line(98)
                .clock(2, 0)
                .play_type(play_type);
            let builder = if attempt { builder.two_point(true) } else { builder };
            Arc::new(builder.build().unwrap())
        }

        #[test]
        fn test_requires_two_point_flag_and_excludes_extra_points() {
            let store = loaded_store(&[
                try_play(1, "PASS", true),
                try_play(2, "EXTRA POINT", true),
                try_play(3, "RUSH", false),
            ]);
            let candidates = find_candidates(query(4, 0, 0, 98, (2, 30)), PlaySource::Store(&store));
            assert_eq!(candidates.game_ids(), [1]);
        }

        #[test]
        fn test_conversion_down_elsewhere_uses_computed_windows() {
            let midfield = PlayBuilder::new()
                .game_id(1)
                .quarter(4)
                .down(0)
                .to_go(5)
                .yard_line(60)
                .clock(2, 0)
                .build()
                .unwrap();
            let store = loaded_store(&[Arc::new(midfield), try_play(2, "PASS", true)]);
            let situation = query(4, 0, 5, 60, (2, 0));
            assert!(!situation.is_two_point_attempt());
            let candidates = find_candidates(situation, PlaySource::Store(&store));
            assert_eq!(candidates.game_ids(), [1]);
        }
    }

    mod bucket_scan {
        use super::*;

        #[test]
        fn test_bucket_scan_ignores_quarter() {
            let corpus = three_play_corpus();
            let mut index = SituationBucketIndex::new();
            index.load(corpus.iter().cloned()).unwrap();

            // same spot in the 3rd quarter: the store scan finds nothing
            let situation = query(3, 1, 10, 50, (10, 0));
            let candidates = find_candidates(situation, PlaySource::Bucket(index.lookup(&situation)));
            assert_eq!(candidates.game_ids(), [2, 1]);
        }

        #[test]
        fn test_bucket_members_are_ranked() {
            let low = Arc::new(PlayBuilder::new().game_id(1).yards(1).build().unwrap());
            let high = Arc::new(PlayBuilder::new().game_id(2).yards(9).build().unwrap());
            let members = [low, high];
            let candidates = find_candidates(query(1, 1, 10, 25, (15, 0)), PlaySource::Bucket(&members));
            assert_eq!(candidates.game_ids(), [2, 1]);
        }
    }

    #[test]
    fn test_collect_ranks_descending() {
        let set: CandidateSet = [
            Arc::new(PlayBuilder::new().game_id(1).yards(-3).build().unwrap()),
            Arc::new(PlayBuilder::new().game_id(2).yards(15).build().unwrap()),
            Arc::new(PlayBuilder::new().game_id(3).yards(4).build().unwrap()),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.game_ids(), [2, 3, 1]);
        assert_eq!(set.iter().len(), 3);
    }
}
