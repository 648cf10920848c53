use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        object::core::Object,
    },
};

impl Context {
    /// Evaluates a prefix operation on an already evaluated operand.
    ///
    /// Supported operators:
    /// - `Bang`: negation of the operand's truthiness. Works on every type.
    /// - `Minus`: integer negation. Any other operand type is an
    ///   `UnknownPrefixOperator` error.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::PrefixOperator,
    ///     interpreter::{
    ///         evaluator::core::Context,
    ///         object::core::{FALSE, Object},
    ///     },
    /// };
    ///
    /// let v = Context::eval_prefix(PrefixOperator::Minus, &Object::Integer(5)).unwrap();
    /// assert_eq!(v, Object::Integer(-5));
    ///
    /// // `0` is truthy, so `!0` is false.
    /// let v = Context::eval_prefix(PrefixOperator::Bang, &Object::Integer(0)).unwrap();
    /// assert_eq!(v, FALSE);
    /// ```
    pub fn eval_prefix(operator: PrefixOperator, operand: &Object) -> EvalResult<Object> {
        match operator {
            PrefixOperator::Bang => Ok(Object::from(!operand.is_truthy())),
            PrefixOperator::Minus => match operand {
                Object::Integer(n) => {
                    n.checked_neg().map(Object::Integer).ok_or_else(|| {
                        RuntimeError::IntegerOverflow { operation: format!("-({n})") }
                    })
                },
                _ => Err(RuntimeError::UnknownPrefixOperator { operator,
                                                               operand: operand.object_type() }),
            },
        }
    }
}
