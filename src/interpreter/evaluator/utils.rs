use crate::{
    ast::{BlockStatement, Expression},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        object::core::{NULL, Object},
    },
};

impl Context {
    /// Evaluates an `if` expression.
    ///
    /// The consequence runs when the condition is truthy, the alternative (if
    /// any) otherwise. With no alternative and a falsy condition the result
    /// is `NULL`.
    pub fn eval_if_expression(&mut self,
                              condition: &Expression,
                              consequence: &BlockStatement,
                              alternative: Option<&BlockStatement>)
                              -> EvalResult<Object> {
        let condition = self.eval_expression(condition)?;
        if condition.is_return_value() {
            return Ok(condition);
        }

        if condition.is_truthy() {
            self.eval_block(consequence)
        } else if let Some(alternative) = alternative {
            self.eval_block(alternative)
        } else {
            Ok(NULL)
        }
    }

    /// Looks up a `let` binding.
    pub fn eval_identifier(&self, name: &str) -> EvalResult<Object> {
        self.environment
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_string() })
    }
}
