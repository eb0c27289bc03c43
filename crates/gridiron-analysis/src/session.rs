//! Per-run ownership of the corpus and the structures built over it.

use std::sync::Arc;

use gridiron_engine::{OrderedPlayStore, PlayRecord, PlaySource, Situation, SituationBucketIndex, SituationMatcher};

use crate::report::{Recommendation, recommend};

/// Which structure answers a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum IndexKind {
    /// Full scan of the rating-ordered store.
    #[default]
    #[display("heap")]
    Heap,
    /// Lookup of the query's bucket.
    #[display("buckets")]
    Buckets,
}

/// Holds the decoded corpus for one run.
///
/// The store and the bucket index are each built the first time a query
/// selects them and are reused afterwards; neither is ever loaded twice.
///
/// # Example
///
/// ```
/// use gridiron_analysis::{report::Recommendation, session::{IndexKind, PlaybookSession}};
/// use gridiron_engine::{GameClock, Situation};
///
/// let mut session = PlaybookSession::new(Vec::new());
/// let query = Situation::new(4, 4, 99, 1, GameClock::new(1, 0).unwrap()).unwrap();
/// assert_eq!(session.recommend(&query, IndexKind::Buckets), Recommendation::NoMatch);
/// ```
#[derive(Debug, Clone)]
pub struct PlaybookSession {
    plays: Vec<Arc<PlayRecord>>,
    store: OrderedPlayStore,
    index: SituationBucketIndex,
    insights: bool,
}

impl PlaybookSession {
    #[must_use]
    pub fn new(plays: Vec<Arc<PlayRecord>>) -> Self {
        Self {
            plays,
            store: OrderedPlayStore::new(),
            index: SituationBucketIndex::new(),
            insights: false,
        }
    }

    /// Attach supplementary insights to every report.
    #[must_use]
    pub fn with_insights(mut self, insights: bool) -> Self {
        self.insights = insights;
        self
    }

    #[must_use]
    pub fn plays(&self) -> &[Arc<PlayRecord>] {
        &self.plays
    }

    pub fn store(&mut self) -> &OrderedPlayStore {
        if self.store.state().is_empty() {
            log::info!("Building play heap from {} plays...", self.plays.len());
            match self.store.load(self.plays.iter().cloned()) {
                Ok(count) => log::info!("Loaded {count} plays into the heap"),
                Err(err) => log::warn!("{err}"),
            }
        }
        &self.store
    }

    pub fn index(&mut self) -> &SituationBucketIndex {
        if self.index.state().is_empty() {
            log::info!("Building bucket index from {} plays...", self.plays.len());
            match self.index.load(self.plays.iter().cloned()) {
                Ok(count) => log::info!("Loaded {count} plays into the bucket index"),
                Err(err) => log::warn!("{err}"),
            }
        }
        &self.index
    }

    /// Runs one query end to end.
    pub fn recommend(&mut self, situation: &Situation, kind: IndexKind) -> Recommendation {
        let with_insights = self.insights;
        let matcher = SituationMatcher::new(*situation);
        let candidates = match kind {
            IndexKind::Heap => matcher.find_candidates(PlaySource::Store(self.store())),
            IndexKind::Buckets => {
                let members = self.index().lookup(situation);
                matcher.find_candidates(PlaySource::Bucket(members))
            }
        };
        log::info!("{} similar situations found using the {kind} index", candidates.len());
        recommend(situation, &candidates, with_insights)
    }
}
