//! Public prediction API: match a recurrence, then extrapolate it

use crate::eval::{evaluate, Bindings, EvalError};
use crate::expr::{BinaryOp, Expr, Variable, Vocabulary};
use crate::search::{MatchResult, RejectionSearch, SearchConfig, SearchError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Errors surfaced by the prediction API
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    /// Fewer than two values cannot seed the `x`/`y` bindings
    #[error("sequence must contain at least 2 values, got {len}")]
    SequenceTooShort { len: usize },
    /// The search budget ran out without a match
    #[error(transparent)]
    Search(#[from] SearchError),
    /// Evaluation of the accepted expression failed during extrapolation
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Predicts the continuation of numeric sequences by synthesizing a
/// recurrence expression that reproduces the observed values, then
/// evaluating it past the end of the sequence.
///
/// ```
/// use seqsynth::Predictor;
///
/// let predictor = Predictor::new().with_seed(42);
/// let rest = predictor.predict_rest(&[1, 1, 2, 3, 5, 8]).unwrap();
/// assert_eq!(rest, vec![13, 21, 34, 55, 89]);
/// ```
#[derive(Debug, Clone)]
pub struct Predictor {
    config: SearchConfig,
    horizon: usize,
    seed: Option<u64>,
}

impl Default for Predictor {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            horizon: 5,
            seed: None,
        }
    }
}

impl Predictor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_operators(mut self, operators: Vec<BinaryOp>) -> Self {
        self.config = self.config.with_operators(operators);
        self
    }

    pub fn with_constants(mut self, constants: Vec<i64>) -> Self {
        self.config = self.config.with_constants(constants);
        self
    }

    pub fn with_variables(mut self, variables: Vec<Variable>) -> Self {
        self.config = self.config.with_variables(variables);
        self
    }

    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.config = self.config.with_vocabulary(vocabulary);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config = self.config.with_max_depth(max_depth);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.config = self.config.with_max_attempts(max_attempts);
        self
    }

    /// Number of values `predict_rest` extrapolates
    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    /// Seed for the random number generator (None = OS entropy)
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        }
    }

    /// Find an expression that reproduces `sequence` when evaluated
    /// recurrently, without extrapolating.
    pub fn explain(&self, sequence: &[i64]) -> Result<MatchResult, PredictError> {
        if sequence.len() < 2 {
            return Err(PredictError::SequenceTooShort {
                len: sequence.len(),
            });
        }
        let mut rng = self.rng();
        let mut search = RejectionSearch::new();
        Ok(search.search(&mut rng, sequence, &self.config)?)
    }

    /// Predict the next `horizon` values of `sequence`
    pub fn predict_rest(&self, sequence: &[i64]) -> Result<Vec<i64>, PredictError> {
        self.predict_next(sequence, self.horizon)
    }

    /// Predict the next `count` values of `sequence`
    pub fn predict_next(&self, sequence: &[i64], count: usize) -> Result<Vec<i64>, PredictError> {
        let matched = self.explain(sequence)?;
        extend(sequence, &matched.expression, count)
    }
}

/// Evaluate `expr` recurrently past the end of `sequence`, producing `count`
/// continuation values.
///
/// The working sequence starts as a copy of the input; each new index binds
/// `x` and `y` to the two preceding values (observed or generated) and `i`
/// to the index. Only the newly generated values are returned.
pub fn extend(sequence: &[i64], expr: &Expr, count: usize) -> Result<Vec<i64>, PredictError> {
    if sequence.len() < 2 {
        return Err(PredictError::SequenceTooShort {
            len: sequence.len(),
        });
    }

    let mut result = sequence.to_vec();
    let start = sequence.len();
    for i in start..start + count {
        let bindings = Bindings::for_step(result[i - 2], result[i - 1], i as i64);
        let value = evaluate(expr, &bindings)?;
        result.push(value);
    }
    Ok(result.split_off(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fib_expr() -> Expr {
        Expr::binary(BinaryOp::Add, Expr::Var(Variable::X), Expr::Var(Variable::Y))
    }

    #[test]
    fn test_extend_fibonacci_expression() {
        let rest = extend(&[1, 1], &fib_expr(), 5).unwrap();
        assert_eq!(rest, vec![2, 3, 5, 8, 13]);
    }

    #[test]
    fn test_extend_arithmetic_expression() {
        // (2 * y) - x continues an arithmetic progression
        let expr = Expr::binary(
            BinaryOp::Sub,
            Expr::binary(BinaryOp::Mul, Expr::Const(2), Expr::Var(Variable::Y)),
            Expr::Var(Variable::X),
        );
        let rest = extend(&[2, 4, 6, 8, 10], &expr, 5).unwrap();
        assert_eq!(rest, vec![12, 14, 16, 18, 20]);
    }

    #[test]
    fn test_extend_uses_index_binding() {
        // i * i: values depend only on the index
        let expr = Expr::binary(
            BinaryOp::Mul,
            Expr::Var(Variable::Index),
            Expr::Var(Variable::Index),
        );
        let rest = extend(&[0, 1], &expr, 3).unwrap();
        assert_eq!(rest, vec![4, 9, 16]);
    }

    #[test]
    fn test_extend_zero_count() {
        assert_eq!(extend(&[1, 2], &fib_expr(), 0).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_extend_rejects_short_seed() {
        let result = extend(&[1], &fib_expr(), 5);
        assert_eq!(
            result.unwrap_err(),
            PredictError::SequenceTooShort { len: 1 }
        );
    }

    #[test]
    fn test_extend_surfaces_overflow() {
        // x * y doubles in magnitude every step and must eventually
        // overflow i64 instead of wrapping
        let expr = Expr::binary(BinaryOp::Mul, Expr::Var(Variable::X), Expr::Var(Variable::Y));
        let result = extend(&[1_000_000, 1_000_000], &expr, 5);
        assert!(matches!(result, Err(PredictError::Eval(EvalError::Overflow { .. }))));
    }

    #[test]
    fn test_predict_rest_rejects_short_sequence() {
        let predictor = Predictor::new().with_seed(42);
        assert_eq!(
            predictor.predict_rest(&[3]).unwrap_err(),
            PredictError::SequenceTooShort { len: 1 }
        );
        assert_eq!(
            predictor.predict_rest(&[]).unwrap_err(),
            PredictError::SequenceTooShort { len: 0 }
        );
    }

    #[test]
    fn test_predict_next_respects_count() {
        let predictor = Predictor::new().with_seed(42);
        let rest = predictor.predict_next(&[1, 1, 2, 3, 5, 8], 3).unwrap();
        assert_eq!(rest, vec![13, 21, 34]);
    }

    #[test]
    fn test_horizon_default_is_five() {
        let predictor = Predictor::new().with_seed(42);
        let rest = predictor.predict_rest(&[5, 5, 5, 5]).unwrap();
        assert_eq!(rest.len(), 5);
    }

    #[test]
    fn test_explain_returns_matching_expression() {
        let sequence = [2, 4, 6, 8, 10];
        let predictor = Predictor::new().with_seed(42);
        let matched = predictor.explain(&sequence).unwrap();

        for i in 2..sequence.len() {
            let bindings = Bindings::for_step(sequence[i - 2], sequence[i - 1], i as i64);
            assert_eq!(evaluate(&matched.expression, &bindings), Ok(sequence[i]));
        }
    }

    #[test]
    fn test_exhausted_search_propagates() {
        let predictor = Predictor::new()
            .with_seed(42)
            .with_operators(vec![BinaryOp::Mul])
            .with_constants(vec![1])
            .with_variables(vec![])
            .with_max_attempts(10_000);

        let result = predictor.predict_rest(&[1, 2, 3, 4]);
        assert_eq!(
            result.unwrap_err(),
            PredictError::Search(SearchError::Exhausted { attempts: 10_000 })
        );
    }
}
