//! Core data model and scoring.
//!
//! - [`GameClock`] - time left in the quarter, with the `mmss` ordinal used for matching
//! - [`Situation`] - quarter, down, distance, field position and clock of a snap
//! - [`PlayRecord`] - one historical play with its call, outcome and derived weights
//! - [`PlayBuilder`] - assembles and validates a [`PlayRecord`]
//! - [`PlayWeights`] / [`Rating`] - the desirability score that orders every structure
//! - [`ToleranceWindow`] / [`SearchWindows`] - inclusive ranges a candidate must fall in

pub use self::{builder::*, clock::*, play::*, score::*, situation::*, window::*};

mod builder;
mod clock;
mod play;
mod score;
mod situation;
mod window;
