//! Turning matched plays into a recommendation.
//!
//! # Modules
//!
//! - [`aggregate`]: Outcome counts, likelihoods and ideal plays over a candidate set
//! - [`report`]: The [`Recommendation`](report::Recommendation) handed to callers
//! - [`insights`]: Optional run/pass, risk, yardage and play-call breakdowns
//! - [`session`]: Corpus ownership and lazy, load-once structures for one run
//!
//! # Query Flow
//!
//! 1. **Match** ([`gridiron_engine::SituationMatcher`]): collect candidates from
//!    the store or the query's bucket
//! 2. **Aggregate** ([`aggregate::OutcomeAggregator`]): count outcomes, or stop
//!    early when the best candidate gained nothing
//! 3. **Report** ([`report::recommend`]): rank likelihoods and attach the best
//!    historical play
//!
//! [`session::PlaybookSession`] runs all three for a query.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use gridiron_analysis::{
//!     report::Recommendation,
//!     session::{IndexKind, PlaybookSession},
//! };
//! use gridiron_engine::PlayBuilder;
//!
//! let play = PlayBuilder::new()
//!     .game_id(7)
//!     .rush("LEFT END")
//!     .yards(8)
//!     .build()
//!     .unwrap();
//! let query = *play.situation();
//!
//! let mut session = PlaybookSession::new(vec![Arc::new(play)]);
//! let Recommendation::Found(report) = session.recommend(&query, IndexKind::Heap) else {
//!     panic!("the play matches its own situation");
//! };
//! assert_eq!(report.candidate_count, 1);
//! ```

pub mod aggregate;
pub mod insights;
pub mod report;
pub mod session;
