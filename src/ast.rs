use std::fmt;

/// A name appearing in source code, either as an expression or as the binding
/// target of a `let` or a function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The identifier text.
    pub name: String,
}

impl Identifier {
    /// Creates an identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A unary operator written before its operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT under truthiness (`!x`).
    Bang,
    /// Integer negation (`-x`).
    Minus,
}

/// A binary operator written between its operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Asterisk,
    /// Integer division (`/`)
    Slash,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    NotEq,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every child expression is fully resolved: the parser never builds a node
/// with a missing operand, it drops the node and records an error instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// A 64-bit signed integer literal.
    IntegerLiteral(i64),
    /// A boolean literal: `true` or `false`.
    Boolean(bool),
    /// A prefix operation such as `-a` or `!ok`.
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand expression.
        operand:  Box<Self>,
    },
    /// An infix operation such as `a + b`.
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// Conditional expression: `if (cond) { ... } else { ... }`.
    If {
        /// The condition, evaluated under truthiness.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
    },
    /// Function literal: `fn(x, y) { ... }`.
    FunctionLiteral {
        /// Parameter names in declaration order.
        parameters: Vec<Identifier>,
        /// The function body.
        body:       BlockStatement,
    },
}

/// A statement inside a program or block.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The name being bound.
        name:  Identifier,
        /// The bound expression.
        value: Expression,
    },
    /// `return <value>;`, where the value may be omitted.
    Return {
        /// The returned expression, `None` for a bare `return;`.
        value: Option<Expression>,
    },
    /// An expression evaluated for its value.
    Expression(Expression),
}

/// A brace-delimited sequence of statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockStatement {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// The root of every parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A borrowed view of any AST node, used as the evaluator's input.
///
/// # Example
/// ```
/// use monkey::ast::{Expression, Node};
///
/// let literal = Expression::IntegerLiteral(5);
/// let node = Node::from(&literal);
/// assert_eq!(node.to_string(), "5");
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// The program root.
    Program(&'a Program),
    /// A single statement.
    Statement(&'a Statement),
    /// A block of statements.
    Block(&'a BlockStatement),
    /// A single expression.
    Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Self::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(statement: &'a Statement) -> Self {
        Self::Statement(statement)
    }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
    fn from(block: &'a BlockStatement) -> Self {
        Self::Block(block)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expression: &'a Expression) -> Self {
        Self::Expression(expression)
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Bang => "!",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Renders the canonical, fully parenthesized form used by tests and error
/// messages.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Prefix { operator, operand } => write!(f, "({operator}{operand})"),
            Self::Infix { left,
                          operator,
                          right, } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                let parameters = parameters.iter()
                                           .map(ToString::to_string)
                                           .collect::<Vec<_>>()
                                           .join(",");
                write!(f, "fn({parameters}){body}")
            },
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value: Some(value) } => write!(f, "return {value};"),
            Self::Return { value: None } => write!(f, "return;"),
            Self::Expression(expression) => write!(f, "{expression}"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements
            .iter()
            .try_for_each(|statement| write!(f, "{statement}"))
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements
            .iter()
            .try_for_each(|statement| write!(f, "{statement}"))
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Program(program) => write!(f, "{program}"),
            Self::Statement(statement) => write!(f, "{statement}"),
            Self::Block(block) => write!(f, "{block}"),
            Self::Expression(expression) => write!(f, "{expression}"),
        }
    }
}
