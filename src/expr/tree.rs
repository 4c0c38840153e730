//! Expression tree representation and structural queries

use crate::expr::types::{BinaryOp, Variable};
use rand::Rng;
use std::fmt;

/// An expression tree node.
///
/// Leaves are integer constants or variables; internal nodes apply a binary
/// operator to exactly two children. Trees are immutable values: structural
/// edits build new trees instead of mutating in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Const(i64),
    Var(Variable),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Convenience constructor for a binary node
    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Returns true for constant and variable nodes
    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Const(_) | Expr::Var(_))
    }

    /// Depth of the tree: 0 for a leaf, 1 + max child depth for a binary node
    pub fn depth(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Var(_) => 0,
            Expr::Binary { lhs, rhs, .. } => 1 + lhs.depth().max(rhs.depth()),
        }
    }

    /// Total number of nodes in the tree
    pub fn count_nodes(&self) -> usize {
        match self {
            Expr::Const(_) | Expr::Var(_) => 1,
            Expr::Binary { lhs, rhs, .. } => 1 + lhs.count_nodes() + rhs.count_nodes(),
        }
    }

    /// Get the subtree at the given preorder position (root = 0, then left
    /// subtree, then right subtree). Returns `None` if the position is out
    /// of range.
    pub fn subtree_at(&self, position: usize) -> Option<&Expr> {
        if position == 0 {
            return Some(self);
        }
        match self {
            Expr::Const(_) | Expr::Var(_) => None,
            Expr::Binary { lhs, rhs, .. } => {
                let left_count = lhs.count_nodes();
                if position <= left_count {
                    lhs.subtree_at(position - 1)
                } else {
                    rhs.subtree_at(position - 1 - left_count)
                }
            }
        }
    }

    /// Structural sanity check against a vocabulary.
    ///
    /// Constants are always valid; variables must belong to the configured
    /// variable set; binary nodes need an operator from the configured
    /// operator set and two recursively valid children.
    pub fn is_valid(&self, vocabulary: &Vocabulary) -> bool {
        match self {
            Expr::Const(_) => true,
            Expr::Var(var) => vocabulary.variables.contains(var),
            Expr::Binary { op, lhs, rhs } => {
                vocabulary.operators.contains(op)
                    && lhs.is_valid(vocabulary)
                    && rhs.is_valid(vocabulary)
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(value) => write!(f, "{}", value),
            Expr::Var(var) => write!(f, "{}", var),
            Expr::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

/// The operator and leaf sets expressions are built from.
///
/// The leaf set is the union of constant and variable leaves; operator and
/// variable vocabularies are disjoint by construction since they are
/// distinct enum types.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub operators: Vec<BinaryOp>,
    pub constants: Vec<i64>,
    pub variables: Vec<Variable>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            operators: vec![BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul],
            constants: (-2..=2).collect(),
            variables: vec![Variable::X, Variable::Y, Variable::Index],
        }
    }
}

impl Vocabulary {
    /// Size of the combined leaf set
    pub fn leaf_count(&self) -> usize {
        self.constants.len() + self.variables.len()
    }

    /// Draw a uniformly random leaf from the combined constant and variable
    /// set. Falls back to the constant 0 if the vocabulary has no leaves.
    pub fn random_leaf<R: Rng>(&self, rng: &mut R) -> Expr {
        let count = self.leaf_count();
        if count == 0 {
            return Expr::Const(0);
        }
        let choice = rng.random_range(0..count);
        if choice < self.constants.len() {
            Expr::Const(self.constants[choice])
        } else {
            Expr::Var(self.variables[choice - self.constants.len()])
        }
    }
}
