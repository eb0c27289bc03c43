//! Structures built over a corpus and the query path through them.
//!
//! - [`OrderedPlayStore`] - every play ordered by [`Rating`](crate::Rating), highest first
//! - [`SituationBucketIndex`] - plays grouped by a coarse situational [`BucketKey`]
//! - [`SituationMatcher`] - filters either source down to a [`CandidateSet`]
//!
//! # Query Flow
//!
//! 1. Load the corpus once into a store, an index, or both
//! 2. Build a [`SituationMatcher`] for the query [`Situation`](crate::Situation)
//! 3. Hand it a [`PlaySource`]: the whole store, or the members of the
//!    query's bucket
//! 4. An empty [`CandidateSet`] means no historical play is close enough
//!
//! Both structures are loaded at most once; a second load is rejected with
//! [`LoadError::AlreadyLoaded`](crate::LoadError::AlreadyLoaded).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use gridiron_engine::{PlayBuilder, PlaySource, SituationBucketIndex, SituationMatcher};
//!
//! let play = Arc::new(PlayBuilder::new().down(3).to_go(2).yard_line(70).yards(3).build().unwrap());
//! let query = *play.situation();
//!
//! let mut index = SituationBucketIndex::new();
//! index.load([Arc::clone(&play)]).unwrap();
//!
//! let members = index.lookup(&query);
//! let candidates = SituationMatcher::new(query).find_candidates(PlaySource::Bucket(members));
//! assert_eq!(candidates.top().map(|p| p.game_id()), Some(play.game_id()));
//! ```

pub use self::{bucket::*, matcher::*, store::*};

mod bucket;
mod matcher;
mod store;
