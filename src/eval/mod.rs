//! Concrete evaluation of expression trees
//!
//! Each evaluation step builds a fresh [`Bindings`] environment for the
//! variable symbols; operator dispatch is resolved directly through
//! [`BinaryOp::apply`](crate::expr::BinaryOp::apply) rather than through the
//! environment, so variables and operators never share a namespace.

use crate::expr::{Expr, Variable};

/// Errors raised during expression evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A variable was referenced but has no value in the environment
    #[error("variable '{0}' is not bound in the evaluation environment")]
    UnboundVariable(Variable),
    /// A checked i64 operation overflowed
    #[error("arithmetic overflow evaluating {lhs} {op} {rhs}")]
    Overflow {
        op: crate::expr::BinaryOp,
        lhs: i64,
        rhs: i64,
    },
}

/// Per-step variable environment.
///
/// Transient by design: built for a single evaluation call and discarded.
/// Unset variables surface as [`EvalError::UnboundVariable`] instead of a
/// silently missing value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bindings {
    x: Option<i64>,
    y: Option<i64>,
    index: Option<i64>,
}

impl Bindings {
    /// Empty environment with no variables bound
    pub fn new() -> Self {
        Self::default()
    }

    /// Full environment for one recurrence step: `x` two positions back,
    /// `y` one position back, `index` the current sequence index.
    pub fn for_step(x: i64, y: i64, index: i64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            index: Some(index),
        }
    }

    /// Bind a single variable, returning the updated environment
    pub fn bind(mut self, var: Variable, value: i64) -> Self {
        match var {
            Variable::X => self.x = Some(value),
            Variable::Y => self.y = Some(value),
            Variable::Index => self.index = Some(value),
        }
        self
    }

    /// Look up a variable's value
    pub fn get(&self, var: Variable) -> Option<i64> {
        match var {
            Variable::X => self.x,
            Variable::Y => self.y,
            Variable::Index => self.index,
        }
    }
}

/// Evaluate an expression against a binding environment.
///
/// Constants ignore the environment entirely; variables are looked up and
/// must be bound; binary nodes evaluate left then right and apply the
/// operator with checked arithmetic.
pub fn evaluate(expr: &Expr, bindings: &Bindings) -> Result<i64, EvalError> {
    match expr {
        Expr::Const(value) => Ok(*value),
        Expr::Var(var) => bindings
            .get(*var)
            .ok_or(EvalError::UnboundVariable(*var)),
        Expr::Binary { op, lhs, rhs } => {
            let left = evaluate(lhs, bindings)?;
            let right = evaluate(rhs, bindings)?;
            op.apply(left, right).ok_or(EvalError::Overflow {
                op: *op,
                lhs: left,
                rhs: right,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::BinaryOp;

    #[test]
    fn test_constant_ignores_bindings() {
        let expr = Expr::Const(7);
        assert_eq!(evaluate(&expr, &Bindings::new()), Ok(7));
        assert_eq!(evaluate(&expr, &Bindings::for_step(1, 2, 3)), Ok(7));
    }

    #[test]
    fn test_variable_lookup() {
        let bindings = Bindings::for_step(10, 20, 3);
        assert_eq!(evaluate(&Expr::Var(Variable::X), &bindings), Ok(10));
        assert_eq!(evaluate(&Expr::Var(Variable::Y), &bindings), Ok(20));
        assert_eq!(evaluate(&Expr::Var(Variable::Index), &bindings), Ok(3));
    }

    #[test]
    fn test_unbound_variable_is_an_error() {
        let bindings = Bindings::new().bind(Variable::Y, 5);
        assert_eq!(
            evaluate(&Expr::Var(Variable::X), &bindings),
            Err(EvalError::UnboundVariable(Variable::X))
        );
        assert_eq!(evaluate(&Expr::Var(Variable::Y), &bindings), Ok(5));
    }

    #[test]
    fn test_nested_arithmetic() {
        // ((y * 2) - x) with x=4, y=6 => 8
        let expr = Expr::binary(
            BinaryOp::Sub,
            Expr::binary(BinaryOp::Mul, Expr::Var(Variable::Y), Expr::Const(2)),
            Expr::Var(Variable::X),
        );
        let bindings = Bindings::for_step(4, 6, 3);
        assert_eq!(evaluate(&expr, &bindings), Ok(8));
    }

    #[test]
    fn test_left_to_right_operand_order() {
        let expr = Expr::binary(BinaryOp::Sub, Expr::Var(Variable::X), Expr::Var(Variable::Y));
        let bindings = Bindings::for_step(10, 3, 0);
        assert_eq!(evaluate(&expr, &bindings), Ok(7));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let expr = Expr::binary(BinaryOp::Mul, Expr::Var(Variable::X), Expr::Var(Variable::X));
        let bindings = Bindings::for_step(i64::MAX, 0, 0);
        assert_eq!(
            evaluate(&expr, &bindings),
            Err(EvalError::Overflow {
                op: BinaryOp::Mul,
                lhs: i64::MAX,
                rhs: i64::MAX,
            })
        );
    }
}
