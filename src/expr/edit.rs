//! Structural editing of expression trees
//!
//! These primitives repair and rewrite trees without mutating their input:
//! - `prune` caps a tree at a maximum depth by replacing too-deep subtrees
//!   with fresh random leaves
//! - `substitute` replaces the subtree at a preorder position
//!
//! Neither is invoked by the matching path; they are standalone utilities
//! for tree surgery on already-built expressions.

use crate::expr::tree::{Expr, Vocabulary};
use rand::Rng;

/// Cap `expr` at `max_depth`.
///
/// Leaves are returned unchanged. A binary node sitting exactly at
/// `max_depth` is replaced by a random leaf drawn from the vocabulary,
/// discarding its subtree; shallower binary nodes are rebuilt with pruned
/// children. The result always has depth <= `max_depth`.
pub fn prune<R: Rng>(rng: &mut R, expr: &Expr, max_depth: usize, vocabulary: &Vocabulary) -> Expr {
    prune_at(rng, expr, max_depth, 0, vocabulary)
}

fn prune_at<R: Rng>(
    rng: &mut R,
    expr: &Expr,
    max_depth: usize,
    current_depth: usize,
    vocabulary: &Vocabulary,
) -> Expr {
    match expr {
        Expr::Const(_) | Expr::Var(_) => expr.clone(),
        Expr::Binary { op, lhs, rhs } => {
            if current_depth == max_depth {
                return vocabulary.random_leaf(rng);
            }
            Expr::Binary {
                op: *op,
                lhs: Box::new(prune_at(rng, lhs, max_depth, current_depth + 1, vocabulary)),
                rhs: Box::new(prune_at(rng, rhs, max_depth, current_depth + 1, vocabulary)),
            }
        }
    }
}

/// Replace the subtree of `expr` at preorder `position` with `replacement`.
///
/// Positions follow preorder numbering: root = 0, then the left subtree,
/// then the right subtree. An out-of-range position is a no-op and returns
/// the input tree unchanged.
pub fn substitute(expr: &Expr, replacement: &Expr, position: usize) -> Expr {
    substitute_at(expr, replacement, position, 0)
}

fn substitute_at(expr: &Expr, replacement: &Expr, position: usize, current: usize) -> Expr {
    if position == current {
        return replacement.clone();
    }
    match expr {
        Expr::Const(_) | Expr::Var(_) => expr.clone(),
        Expr::Binary { op, lhs, rhs } => {
            let left_position = current + 1;
            let new_lhs = substitute_at(lhs, replacement, position, left_position);
            let right_position = left_position + lhs.count_nodes();
            let new_rhs = substitute_at(rhs, replacement, position, right_position);
            Expr::Binary {
                op: *op,
                lhs: Box::new(new_lhs),
                rhs: Box::new(new_rhs),
            }
        }
    }
}
