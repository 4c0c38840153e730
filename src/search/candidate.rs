//! Random expression generation for the search

use crate::expr::Expr;
use crate::search::config::SearchConfig;
use rand::Rng;

/// Generate a random expression tree, starting at `current_depth`.
///
/// At the configured maximum depth the node is forced to be a leaf.
/// Above it, a fair coin decides leaf versus binary node; binary nodes pick
/// a uniform operator and recurse into both children one level deeper.
/// The 50% leaf probability biases generation toward shallow trees and is a
/// fixed design parameter.
pub fn random_expr<R: Rng>(rng: &mut R, config: &SearchConfig, current_depth: usize) -> Expr {
    if current_depth >= config.max_depth || config.vocabulary.operators.is_empty() {
        return config.vocabulary.random_leaf(rng);
    }

    if rng.random::<f64>() > 0.5 {
        config.vocabulary.random_leaf(rng)
    } else {
        let operators = &config.vocabulary.operators;
        let op = operators[rng.random_range(0..operators.len())];
        Expr::Binary {
            op,
            lhs: Box::new(random_expr(rng, config, current_depth + 1)),
            rhs: Box::new(random_expr(rng, config, current_depth + 1)),
        }
    }
}
