use std::{cmp::Ordering, collections::BinaryHeap, iter::FusedIterator, sync::Arc};

use crate::{EmptyStoreError, LoadError, PlayRecord, Rating};

/// Lifecycle of a structure that is loaded once per session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum StoreState {
    #[default]
    Empty,
    Loaded,
}

/// A play paired with its rating; ordered by rating alone.
#[derive(Debug, Clone)]
pub struct RankedPlay {
    rating: Rating,
    play: Arc<PlayRecord>,
}

impl RankedPlay {
    #[must_use]
    pub fn new(play: Arc<PlayRecord>) -> Self {
        Self {
            rating: play.rating(),
            play,
        }
    }

    #[must_use]
    pub const fn rating(&self) -> Rating {
        self.rating
    }

    #[must_use]
    pub const fn play(&self) -> &Arc<PlayRecord> {
        &self.play
    }
}

impl PartialEq for RankedPlay {
    fn eq(&self, other: &Self) -> bool {
        self.rating == other.rating
    }
}

impl Eq for RankedPlay {}

impl PartialOrd for RankedPlay {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedPlay {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rating.cmp(&other.rating)
    }
}

/// Max-heap of plays keyed by [`Rating`].
///
/// Traversal never drains the store: [`snapshot`](Self::snapshot) pops from a
/// private copy of the heap, so every traversal over the same content yields
/// the same order. Records are shared through [`Arc`], which keeps the copy
/// shallow.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use gridiron_engine::{OrderedPlayStore, PlayBuilder};
///
/// let short = Arc::new(PlayBuilder::new().game_id(1).yards(2).build().unwrap());
/// let long = Arc::new(PlayBuilder::new().game_id(2).yards(40).build().unwrap());
///
/// let mut store = OrderedPlayStore::new();
/// assert_eq!(store.load([short, long]).unwrap(), 2);
///
/// let order: Vec<_> = store.snapshot().map(|p| p.game_id()).collect();
/// assert_eq!(order, [2, 1]);
/// assert_eq!(store.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderedPlayStore {
    heap: BinaryHeap<RankedPlay>,
    state: StoreState,
}

impl OrderedPlayStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a loaded store in one step.
    ///
    /// Used to re-rank the members of a bucket for a single query.
    pub fn from_plays<I>(plays: I) -> Self
    where
        I: IntoIterator<Item = Arc<PlayRecord>>,
    {
        Self {
            heap: plays.into_iter().map(RankedPlay::new).collect(),
            state: StoreState::Loaded,
        }
    }

    /// Bulk-inserts the corpus and returns the number of plays stored.
    pub fn load<I>(&mut self, plays: I) -> Result<usize, LoadError>
    where
        I: IntoIterator<Item = Arc<PlayRecord>>,
    {
        if self.state.is_loaded() {
            return Err(LoadError::AlreadyLoaded);
        }
        self.heap = plays.into_iter().map(RankedPlay::new).collect();
        self.state = StoreState::Loaded;
        log::debug!("ordered play store loaded with {} plays", self.heap.len());
        Ok(self.heap.len())
    }

    #[must_use]
    pub const fn state(&self) -> StoreState {
        self.state
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Highest-rated play.
    pub fn top(&self) -> Result<&Arc<PlayRecord>, EmptyStoreError> {
        self.heap.peek().map(RankedPlay::play).ok_or(EmptyStoreError)
    }

    /// Iterates all plays in descending rating order without consuming the store.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            heap: self.heap.clone(),
        }
    }
}

/// Descending-rating traversal over a copy of an [`OrderedPlayStore`].
#[derive(Debug, Clone)]
pub struct Snapshot {
    heap: BinaryHeap<RankedPlay>,
}

impl Iterator for Snapshot {
    type Item = Arc<PlayRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop().map(|ranked| ranked.play)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl ExactSizeIterator for Snapshot {}

impl FusedIterator for Snapshot {}
