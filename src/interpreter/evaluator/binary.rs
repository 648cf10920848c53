use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        object::core::Object,
    },
};

impl Context {
    /// Evaluates an infix operation between two evaluated operands.
    ///
    /// Two integers go through [`Context::eval_integer_infix`]. Otherwise `==`
    /// and `!=` compare by identity, operands of different types are a
    /// `TypeMismatch`, and anything else is an `UnknownInfixOperator`.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::InfixOperator,
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         object::core::{FALSE, Object, TRUE},
    ///     },
    /// };
    ///
    /// let (three, four) = (Object::Integer(3), Object::Integer(4));
    /// let sum = Context::eval_infix(InfixOperator::Plus, &three, &four);
    /// assert_eq!(sum.unwrap(), Object::Integer(7));
    ///
    /// let same = Context::eval_infix(InfixOperator::Eq, &TRUE, &TRUE);
    /// assert_eq!(same.unwrap(), TRUE);
    ///
    /// let mixed = Context::eval_infix(InfixOperator::Eq, &Object::Integer(1), &TRUE);
    /// assert_eq!(mixed.unwrap(), FALSE);
    ///
    /// let mismatch = Context::eval_infix(InfixOperator::Plus, &Object::Integer(1), &TRUE);
    /// assert_eq!(mismatch.unwrap_err().to_string(), "type mismatch: INTEGER + BOOLEAN");
    /// ```
    pub fn eval_infix(operator: InfixOperator,
                      left: &Object,
                      right: &Object)
                      -> EvalResult<Object> {
        if let (Object::Integer(l), Object::Integer(r)) = (left, right) {
            return Self::eval_integer_infix(operator, *l, *r);
        }

        match operator {
            InfixOperator::Eq => Ok(Object::from(left.is_identical(right))),
            InfixOperator::NotEq => Ok(Object::from(!left.is_identical(right))),
            _ if left.object_type() != right.object_type() => {
                Err(RuntimeError::TypeMismatch { left: left.object_type(),
                                                 operator,
                                                 right: right.object_type() })
            },
            _ => Err(RuntimeError::UnknownInfixOperator { left: left.object_type(),
                                                          operator,
                                                          right: right.object_type() }),
        }
    }

    /// Applies an infix operator to two integers.
    ///
    /// Arithmetic is checked: leaving the `i64` range is an `IntegerOverflow`
    /// error and dividing by zero is a `DivisionByZero` error. Division
    /// truncates toward zero.
    pub fn eval_integer_infix(operator: InfixOperator,
                              left: i64,
                              right: i64)
                              -> EvalResult<Object> {
        let overflow = || {
            RuntimeError::IntegerOverflow { operation: format!("{left} {operator} {right}") }
        };

        match operator {
            InfixOperator::Plus => {
                left.checked_add(right).map(Object::Integer).ok_or_else(overflow)
            },
            InfixOperator::Minus => {
                left.checked_sub(right).map(Object::Integer).ok_or_else(overflow)
            },
            InfixOperator::Asterisk => {
                left.checked_mul(right).map(Object::Integer).ok_or_else(overflow)
            },
            InfixOperator::Slash => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero { dividend: left });
                }
                left.checked_div(right).map(Object::Integer).ok_or_else(overflow)
            },
            InfixOperator::Lt => Ok(Object::from(left < right)),
            InfixOperator::Gt => Ok(Object::from(left > right)),
            InfixOperator::Eq => Ok(Object::from(left == right)),
            InfixOperator::NotEq => Ok(Object::from(left != right)),
        }
    }
}
