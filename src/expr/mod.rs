//! Expression trees over a configurable operator and leaf vocabulary
//!
//! This module provides the expression representation and its structural
//! primitives:
//! - `types`: operator and variable vocabularies
//! - `tree`: the `Expr` sum type with depth, node count, preorder
//!   addressing, and validity checks
//! - `edit`: depth-bounded pruning and preorder subtree substitution

pub mod edit;
pub mod tree;
pub mod types;

pub use edit::{prune, substitute};
pub use tree::{Expr, Vocabulary};
pub use types::{BinaryOp, Variable};
