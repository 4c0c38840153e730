//! Search outcome types and statistics

use crate::expr::Expr;
use std::time::Duration;

/// A successfully matched recurrence together with the statistics of the
/// search that found it.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// The accepted expression, evaluated recurrently it reproduces the
    /// input sequence at every index past the two seed positions
    pub expression: Expr,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

/// Errors raised by the search loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The attempt budget ran out before any candidate matched
    #[error("no matching expression found within {attempts} attempts")]
    Exhausted { attempts: u64 },
}

/// Statistics from a search run
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Total candidates drawn
    pub attempts: u64,
    /// Candidates discarded by the structural validity check
    pub rejected_invalid: u64,
    /// Candidates whose replayed sequence did not match the input
    pub rejected_mismatch: u64,
    /// Total time spent searching
    pub elapsed_time: Duration,
}

impl SearchStatistics {
    /// Fraction of candidates discarded before evaluation (0.0 to 1.0)
    pub fn invalid_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.rejected_invalid as f64 / self.attempts as f64
        }
    }

    /// Candidates drawn per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.attempts as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Attempts: {}\n", self.attempts));
        s.push_str(&format!("Rejected (invalid): {}\n", self.rejected_invalid));
        s.push_str(&format!("Rejected (mismatch): {}\n", self.rejected_mismatch));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));
        s.push_str(&format!("Throughput: {:.0} candidates/sec\n", self.throughput()));
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_rate() {
        let stats = SearchStatistics {
            attempts: 100,
            rejected_invalid: 25,
            ..Default::default()
        };
        assert!((stats.invalid_rate() - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_throughput() {
        let stats = SearchStatistics {
            attempts: 10_000,
            elapsed_time: Duration::from_secs(10),
            ..Default::default()
        };
        assert!((stats.throughput() - 1000.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_division() {
        let stats = SearchStatistics::default();
        assert_eq!(stats.invalid_rate(), 0.0);
        assert_eq!(stats.throughput(), 0.0);
    }

    #[test]
    fn test_format_summary_mentions_counts() {
        let stats = SearchStatistics {
            attempts: 42,
            ..Default::default()
        };
        assert!(stats.format_summary().contains("Attempts: 42"));
    }
}
