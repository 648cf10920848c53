use crate::{
    ast::{BlockStatement, Expression, Node, Program, Statement},
    error::RuntimeError,
    interpreter::object::{
        core::{NULL, Object},
        environment::Environment,
    },
};

/// Result type used by the evaluator.
///
/// A runtime error travels as `Err` inside the evaluator and becomes an
/// [`Object::Error`] at the public boundary, so `?` gives errors the same
/// outward propagation as `return` values.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a node in a fresh context.
///
/// Calls are independent of each other: nothing bound by one call is visible
/// to the next.
///
/// # Example
/// ```
/// use monkey::{
///     interpreter::{evaluator::core::eval, object::core::Object},
///     parse,
/// };
///
/// let (program, errors) = parse("if (10 > 1) { return 10; } 1;");
/// assert!(errors.is_empty());
/// assert_eq!(eval(&program), Object::Integer(10));
/// ```
pub fn eval<'a>(node: impl Into<Node<'a>>) -> Object {
    Context::new().eval(node)
}

/// Stores the runtime evaluation context.
///
/// Holds the bindings made by `let` statements. A context can be reused to
/// evaluate several programs in a row, which is how the REPL keeps earlier
/// lines' bindings alive.
#[derive(Debug, Default)]
pub struct Context {
    /// Values bound with `let`.
    pub environment: Environment,
}

impl Context {
    /// Creates a new evaluation context with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates any AST node and returns the resulting object.
    ///
    /// Failures are reported as an [`Object::Error`] rather than aborting.
    /// Only a [`Program`] unwraps a `return` value; evaluating a block or
    /// statement directly hands back the [`Object::ReturnValue`] itself.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     interpreter::{evaluator::core::Context, object::core::Object},
    ///     parse,
    /// };
    ///
    /// let mut context = Context::new();
    /// let (program, _) = parse("1 + true; 5;");
    ///
    /// let result = context.eval(&program);
    /// assert!(result.is_error());
    /// assert_eq!(result.to_string(), "ERROR: type mismatch: INTEGER + BOOLEAN");
    /// ```
    pub fn eval<'a>(&mut self, node: impl Into<Node<'a>>) -> Object {
        self.eval_node(node.into()).unwrap_or_else(Object::Error)
    }

    /// Evaluates a node, keeping runtime errors on the `Err` side.
    pub fn eval_node(&mut self, node: Node<'_>) -> EvalResult<Object> {
        match node {
            Node::Program(program) => self.eval_program(program),
            Node::Statement(statement) => self.eval_statement(statement),
            Node::Block(block) => self.eval_block(block),
            Node::Expression(expression) => self.eval_expression(expression),
        }
    }

    /// Evaluates the top-level statements in order.
    ///
    /// A `return` ends the program and its wrapped value becomes the result.
    /// An empty program evaluates to `NULL`.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Object> {
        let mut result = NULL;

        for statement in &program.statements {
            result = self.eval_statement(statement)?;
            if let Object::ReturnValue(value) = result {
                return Ok(*value);
            }
        }

        Ok(result)
    }

    /// Evaluates the statements of a block in order.
    ///
    /// Stops at the first `return` and hands the still-wrapped value back,
    /// so it keeps travelling through every enclosing block.
    pub fn eval_block(&mut self, block: &BlockStatement) -> EvalResult<Object> {
        let mut result = NULL;

        for statement in &block.statements {
            result = self.eval_statement(statement)?;
            if result.is_return_value() {
                return Ok(result);
            }
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// A `let` binds its value and evaluates to `NULL`; a `return` wraps its
    /// value in [`Object::ReturnValue`]; an expression statement yields the
    /// expression's value unchanged.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Object> {
        match statement {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value)?;
                if value.is_return_value() {
                    return Ok(value);
                }
                self.environment.set(name.name.clone(), value);
                Ok(NULL)
            },
            Statement::Return { value } => {
                let value = match value {
                    Some(expression) => self.eval_expression(expression)?,
                    None => NULL,
                };
                if value.is_return_value() {
                    return Ok(value);
                }
                Ok(Object::ReturnValue(Box::new(value)))
            },
            Statement::Expression(expression) => self.eval_expression(expression),
        }
    }

    /// Evaluates an expression.
    ///
    /// Operands are evaluated left before right. A `return` reached inside an
    /// operand (an `if` whose block returns) is passed outward instead of
    /// being used as a value.
    pub fn eval_expression(&mut self, expression: &Expression) -> EvalResult<Object> {
        match expression {
            Expression::Identifier(identifier) => self.eval_identifier(&identifier.name),
            Expression::IntegerLiteral(value) => Ok(Object::Integer(*value)),
            Expression::Boolean(value) => Ok(Object::from(*value)),
            Expression::Prefix { operator, operand } => {
                let operand = self.eval_expression(operand)?;
                if operand.is_return_value() {
                    return Ok(operand);
                }
                Self::eval_prefix(*operator, &operand)
            },
            Expression::Infix { left,
                                operator,
                                right, } => {
                let left = self.eval_expression(left)?;
                if left.is_return_value() {
                    return Ok(left);
                }
                let right = self.eval_expression(right)?;
                if right.is_return_value() {
                    return Ok(right);
                }
                Self::eval_infix(*operator, &left, &right)
            },
            Expression::If { condition,
                             consequence,
                             alternative, } => {
                self.eval_if_expression(condition, consequence, alternative.as_ref())
            },
            Expression::FunctionLiteral { .. } => {
                Err(RuntimeError::InvalidNode { node: expression.to_string() })
            },
        }
    }
}
