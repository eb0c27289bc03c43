//! Small statistics toolkit for play outcome analysis.
//!
//! # Modules
//!
//! - [`rate`]: Percentages and ratios that treat an empty denominator as zero
//! - [`tally`]: Counting keyed occurrences and finding every key tied for the lead
//! - [`summary`]: Count, range, mean, median and spread of integer samples
//!
//! # Examples
//!
//! ## Guarded percentages
//!
//! ```
//! use gridiron_stats::rate::percentage;
//!
//! assert_eq!(percentage(1, 4), 25.0);
//! assert_eq!(percentage(3, 0), 0.0);
//! ```
//!
//! ## Finding the leaders of a tally
//!
//! ```
//! use gridiron_stats::tally::Tally;
//!
//! let mut tally = Tally::new();
//! for key in ["slant", "draw", "slant", "screen", "draw"] {
//!     tally.increment(key);
//! }
//! let leaders = tally.leaders().unwrap();
//! assert_eq!(leaders.count, 2);
//! assert_eq!(leaders.keys, [&"draw", &"slant"]);
//! ```
//!
//! ## Summarizing a sample
//!
//! ```
//! use gridiron_stats::summary::Summary;
//!
//! let summary = Summary::new([4, -2, 10, 0]).unwrap();
//! assert_eq!(summary.min, -2);
//! assert_eq!(summary.max, 10);
//! assert_eq!(summary.mean, 3.0);
//! ```

pub mod rate;
pub mod summary;
pub mod tally;
