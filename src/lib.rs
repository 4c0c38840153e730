//! seqsynth explains finite numeric sequences by synthesizing a small
//! arithmetic expression that, evaluated as a recurrence over the two
//! preceding values and the current index, reproduces the observed sequence
//! exactly. The accepted expression is then evaluated past the end of the
//! sequence to predict its continuation.
//!
//! The search is plain rejection sampling: draw random expression trees
//! bounded by a maximum depth, keep the first one whose replayed sequence
//! matches the input beyond the two seed positions. There is no guarantee a
//! match exists within the configured vocabulary and depth; the attempt
//! budget turns that case into a typed error instead of nontermination.
//!
//! ```
//! use seqsynth::Predictor;
//!
//! let predictor = Predictor::new().with_seed(42);
//! let rest = predictor.predict_rest(&[2, 4, 6, 8, 10]).unwrap();
//! assert_eq!(rest, vec![12, 14, 16, 18, 20]);
//! ```

pub mod eval;
pub mod expr;
pub mod predictor;
pub mod search;

pub use eval::{evaluate, Bindings, EvalError};
pub use expr::{prune, substitute, BinaryOp, Expr, Variable, Vocabulary};
pub use predictor::{extend, PredictError, Predictor};
pub use search::{MatchResult, RejectionSearch, SearchConfig, SearchError, SearchStatistics};
