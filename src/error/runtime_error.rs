use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::object::core::ObjectType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// The operands of an infix operator have different types.
    TypeMismatch {
        /// Type of the left operand.
        left:     ObjectType,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    ObjectType,
    },
    /// The operands share a type that does not support the infix operator.
    UnknownInfixOperator {
        /// Type of the left operand.
        left:     ObjectType,
        /// The operator.
        operator: InfixOperator,
        /// Type of the right operand.
        right:    ObjectType,
    },
    /// The operand type does not support the prefix operator.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type of the operand.
        operand:  ObjectType,
    },
    /// Tried to use a name that was never bound with `let`.
    IdentifierNotFound {
        /// The name of the identifier.
        name: String,
    },
    /// Attempted integer division by zero.
    DivisionByZero {
        /// The dividend.
        dividend: i64,
    },
    /// Integer arithmetic left the 64-bit signed range.
    IntegerOverflow {
        /// The overflowing operation, rendered as source.
        operation: String,
    },
    /// A node the evaluator has no rule for.
    InvalidNode {
        /// The node, rendered as source.
        node: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::DivisionByZero { dividend } => write!(f, "division by zero: {dividend} / 0"),
            Self::IntegerOverflow { operation } => write!(f, "integer overflow: {operation}"),
            Self::InvalidNode { node } => write!(f, "invalid node: {node}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
