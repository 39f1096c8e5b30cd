//! Binary operator tiers.

use letter_ast::{NodeFactory, TokenKind};

/// The left-associative binary tiers, lowest precedence first.
///
/// Each tier folds operands of the next tier joined by its operator class;
/// the highest tier's operands are unary expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
}

impl Tier {
    pub const LOWEST: Tier = Tier::LogicalOr;

    /// The operator token kind this tier consumes.
    pub fn operator(self) -> TokenKind {
        match self {
            Tier::LogicalOr => TokenKind::LogicalOr,
            Tier::LogicalAnd => TokenKind::LogicalAnd,
            Tier::Equality => TokenKind::EqualityOperator,
            Tier::Relational => TokenKind::RelationalOperator,
            Tier::Additive => TokenKind::AdditiveOperator,
            Tier::Multiplicative => TokenKind::MultiplicativeOperator,
        }
    }

    /// The next tighter-binding tier, `None` above multiplicative.
    pub fn next(self) -> Option<Tier> {
        match self {
            Tier::LogicalOr => Some(Tier::LogicalAnd),
            Tier::LogicalAnd => Some(Tier::Equality),
            Tier::Equality => Some(Tier::Relational),
            Tier::Relational => Some(Tier::Additive),
            Tier::Additive => Some(Tier::Multiplicative),
            Tier::Multiplicative => None,
        }
    }

    #[inline]
    pub fn is_logical(self) -> bool {
        matches!(self, Tier::LogicalOr | Tier::LogicalAnd)
    }

    /// Build this tier's node for `left operator right`.
    pub fn build<F: NodeFactory>(self, factory: &F, operator: &str, left: F::Node, right: F::Node) -> F::Node {
        if self.is_logical() {
            factory.logical_expression(operator, left, right)
        } else {
            factory.binary_expression(operator, left, right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_chain_is_ascending() {
        let mut tier = Tier::LOWEST;
        let mut count = 1;
        while let Some(next) = tier.next() {
            assert!(next > tier);
            tier = next;
            count += 1;
        }
        assert_eq!(tier, Tier::Multiplicative);
        assert_eq!(count, 6);
    }

    #[test]
    fn test_logical_tiers() {
        assert!(Tier::LogicalOr.is_logical());
        assert!(Tier::LogicalAnd.is_logical());
        assert!(!Tier::Equality.is_logical());
        assert_eq!(Tier::Relational.operator(), TokenKind::RelationalOperator);
    }
}
