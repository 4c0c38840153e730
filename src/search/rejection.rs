//! Rejection-sampling search for a recurrence explaining a sequence
//!
//! The algorithm:
//! 1. Draw a random candidate expression bounded by the configured depth
//! 2. Discard it if it fails the structural validity check
//! 3. Replay it as a recurrence over the input sequence, binding `x` and
//!    `y` to the two preceding observed values and `i` to the index
//! 4. Accept the first candidate whose replayed values equal the input at
//!    every index past the two seed positions; otherwise go back to 1
//!
//! The loop is bounded by the configured attempt budget; running out is an
//! explicit [`SearchError::Exhausted`] rather than nontermination.

use crate::eval::{evaluate, Bindings};
use crate::expr::Expr;
use crate::search::candidate::random_expr;
use crate::search::config::SearchConfig;
use crate::search::result::{MatchResult, SearchError, SearchStatistics};
use rand::Rng;
use std::time::Instant;

/// Rejection-sampling search over random candidate expressions
pub struct RejectionSearch {
    statistics: SearchStatistics,
}

impl RejectionSearch {
    pub fn new() -> Self {
        Self {
            statistics: SearchStatistics::default(),
        }
    }

    /// Statistics from the most recent search
    pub fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    /// Reset the search state for a new run
    pub fn reset(&mut self) {
        self.statistics = SearchStatistics::default();
    }

    /// Search for an expression that reproduces `sequence` when evaluated
    /// recurrently.
    ///
    /// Indices 0 and 1 are seed positions and never take part in the
    /// comparison; for a two-element sequence the comparison set is empty
    /// and the first structurally valid candidate is accepted.
    pub fn search<R: Rng>(
        &mut self,
        rng: &mut R,
        sequence: &[i64],
        config: &SearchConfig,
    ) -> Result<MatchResult, SearchError> {
        self.reset();
        let start_time = Instant::now();

        for attempt in 0..config.max_attempts {
            self.statistics.attempts = attempt + 1;

            let candidate = random_expr(rng, config, 0);

            if !candidate.is_valid(&config.vocabulary) {
                self.statistics.rejected_invalid += 1;
                continue;
            }

            if replay_matches(&candidate, sequence) {
                self.statistics.elapsed_time = start_time.elapsed();
                return Ok(MatchResult {
                    expression: candidate,
                    statistics: self.statistics.clone(),
                });
            }
            self.statistics.rejected_mismatch += 1;
        }

        self.statistics.elapsed_time = start_time.elapsed();
        Err(SearchError::Exhausted {
            attempts: config.max_attempts,
        })
    }
}

impl Default for RejectionSearch {
    fn default() -> Self {
        Self::new()
    }
}

/// Replay `candidate` as a recurrence over `sequence` and compare against
/// the observed values at every index past the two seed positions.
///
/// A candidate whose evaluation fails (overflow) cannot match and is
/// treated as a mismatch.
fn replay_matches(candidate: &Expr, sequence: &[i64]) -> bool {
    for i in 2..sequence.len() {
        let bindings = Bindings::for_step(sequence[i - 2], sequence[i - 1], i as i64);
        match evaluate(candidate, &bindings) {
            Ok(predicted) if predicted == sequence[i] => {}
            _ => return false,
        }
    }
    true
}
