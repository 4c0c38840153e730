//! Core vocabularies for expression trees: operators and variables

use std::fmt;

/// Binary operators usable at internal tree nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl BinaryOp {
    /// Apply the operator to two values with checked arithmetic.
    ///
    /// Returns `None` on i64 overflow; the evaluator turns that into an
    /// explicit error rather than wrapping silently.
    pub fn apply(&self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            BinaryOp::Add => lhs.checked_add(rhs),
            BinaryOp::Sub => lhs.checked_sub(rhs),
            BinaryOp::Mul => lhs.checked_mul(rhs),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Add => write!(f, "+"),
            BinaryOp::Sub => write!(f, "-"),
            BinaryOp::Mul => write!(f, "*"),
        }
    }
}

/// Variables usable at leaf positions.
///
/// During recurrence evaluation `X` is bound to the value two positions
/// back, `Y` to the value one position back, and `Index` to the current
/// sequence index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    X,
    Y,
    Index,
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::X => write!(f, "x"),
            Variable::Y => write!(f, "y"),
            Variable::Index => write!(f, "i"),
        }
    }
}
