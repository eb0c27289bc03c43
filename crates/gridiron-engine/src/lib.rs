//! Situational matching engine for historical football plays.
//!
//! The crate is split the same way the play data flows through it:
//!
//! - [`core`] - the data model ([`PlayRecord`], [`Situation`], [`GameClock`]),
//!   the desirability [`Rating`] and the [`ToleranceWindow`]s used for matching
//! - [`engine`] - the structures built over a corpus ([`OrderedPlayStore`],
//!   [`SituationBucketIndex`]) and the [`SituationMatcher`] that turns a query
//!   into a [`CandidateSet`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use gridiron_engine::{GameClock, OrderedPlayStore, PlayBuilder, PlaySource, Situation, SituationMatcher};
//!
//! let play = PlayBuilder::new()
//!     .quarter(2)
//!     .down(1)
//!     .to_go(10)
//!     .yard_line(50)
//!     .clock(10, 0)
//!     .yards(12)
//!     .first_down()
//!     .build()
//!     .unwrap();
//!
//! let mut store = OrderedPlayStore::new();
//! store.load([Arc::new(play)]).unwrap();
//!
//! let query = Situation::new(2, 1, 10, 50, GameClock::new(10, 0).unwrap()).unwrap();
//! let candidates = SituationMatcher::new(query).find_candidates(PlaySource::Store(&store));
//! assert_eq!(candidates.len(), 1);
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("play store is empty")]
pub struct EmptyStoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("plays have already been loaded into this structure")]
    AlreadyLoaded,
}
