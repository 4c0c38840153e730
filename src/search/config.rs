//! Configuration for the rejection-sampling search

use crate::expr::{BinaryOp, Variable, Vocabulary};

/// Search configuration: the expression vocabulary, the generation depth
/// bound, and the attempt budget that bounds the acceptance loop.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Operator and leaf vocabulary candidates are built from
    pub vocabulary: Vocabulary,
    /// Maximum depth of generated expression trees
    pub max_depth: usize,
    /// Maximum number of candidates drawn before the search gives up
    pub max_attempts: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::default(),
            max_depth: 3,
            max_attempts: 1_000_000,
        }
    }
}

impl SearchConfig {
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn with_operators(mut self, operators: Vec<BinaryOp>) -> Self {
        self.vocabulary.operators = operators;
        self
    }

    pub fn with_constants(mut self, constants: Vec<i64>) -> Self {
        self.vocabulary.constants = constants;
        self
    }

    pub fn with_variables(mut self, variables: Vec<Variable>) -> Self {
        self.vocabulary.variables = variables;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.max_attempts, 1_000_000);
        assert_eq!(config.vocabulary.constants, vec![-2, -1, 0, 1, 2]);
        assert_eq!(config.vocabulary.operators.len(), 3);
        assert_eq!(config.vocabulary.variables.len(), 3);
    }

    #[test]
    fn test_config_builder() {
        let config = SearchConfig::default()
            .with_operators(vec![BinaryOp::Mul])
            .with_constants(vec![1])
            .with_variables(vec![])
            .with_max_depth(2)
            .with_max_attempts(10_000);

        assert_eq!(config.vocabulary.operators, vec![BinaryOp::Mul]);
        assert_eq!(config.vocabulary.constants, vec![1]);
        assert!(config.vocabulary.variables.is_empty());
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.max_attempts, 10_000);
    }
}
