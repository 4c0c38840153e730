//! Rejection-sampling search for recurrence expressions
//!
//! This module drives the generator and evaluator in an accept/reject loop:
//! - `candidate`: random expression generation under a depth bound
//! - `config`: vocabulary, depth bound, and attempt budget
//! - `rejection`: the matching loop itself
//! - `result`: accepted matches, typed failure, and statistics

pub mod candidate;
pub mod config;
pub mod rejection;
pub mod result;

pub use candidate::random_expr;
pub use config::SearchConfig;
pub use rejection::RejectionSearch;
pub use result::{MatchResult, SearchError, SearchStatistics};
