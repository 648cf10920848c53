use crate::error::RuntimeError;

/// The shared `true` object.
pub const TRUE: Object = Object::Boolean(true);
/// The shared `false` object.
pub const FALSE: Object = Object::Boolean(false);
/// The shared `null` object, produced by an `if` without a taken branch.
pub const NULL: Object = Object::Null;

/// Represents a runtime value in the interpreter.
///
/// `ReturnValue` and `Error` are control-flow carriers: no source expression
/// produces them directly, and they propagate outward through every enclosing
/// block until the program root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean. Always one of [`TRUE`] or [`FALSE`].
    Boolean(bool),
    /// The absence of a value. Always [`NULL`].
    Null,
    /// The value of a `return` statement on its way out to the program root.
    ReturnValue(Box<Self>),
    /// A runtime error halting the current evaluation.
    Error(RuntimeError),
}

/// The type tag of an [`Object`], as it appears in error messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ObjectType {
    /// `INTEGER`
    Integer,
    /// `BOOLEAN`
    Boolean,
    /// `NULL`
    Null,
    /// `RETURN_VALUE`
    ReturnValue,
    /// `ERROR`
    Error,
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        if value { TRUE } else { FALSE }
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<RuntimeError> for Object {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

impl Object {
    /// Returns the type tag of the object.
    #[must_use]
    pub const fn object_type(&self) -> ObjectType {
        match self {
            Self::Integer(_) => ObjectType::Integer,
            Self::Boolean(_) => ObjectType::Boolean,
            Self::Null => ObjectType::Null,
            Self::ReturnValue(_) => ObjectType::ReturnValue,
            Self::Error(_) => ObjectType::Error,
        }
    }

    /// Applies the language's truthiness rule.
    ///
    /// `NULL` and `FALSE` are falsy; every other value, including
    /// `Integer(0)`, is truthy.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::object::core::{FALSE, NULL, Object};
    ///
    /// assert!(Object::Integer(0).is_truthy());
    /// assert!(!NULL.is_truthy());
    /// assert!(!FALSE.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false))
    }

    /// Identity comparison between two objects.
    ///
    /// Booleans and null only ever exist as the shared [`TRUE`], [`FALSE`] and
    /// [`NULL`] constants, so two of them are identical exactly when they
    /// carry the same value. Any other pair is never identical: integers are
    /// compared by value before this fallback is reached.
    #[must_use]
    pub const fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Boolean(a), Self::Boolean(b)) => *a == *b,
            (Self::Null, Self::Null) => true,
            _ => false,
        }
    }

    /// Returns `true` if the object is an [`Object::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }

    /// Returns `true` if the object is an [`Object::ReturnValue`].
    #[must_use]
    pub const fn is_return_value(&self) -> bool {
        matches!(self, Self::ReturnValue(..))
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::Null => "NULL",
            Self::ReturnValue => "RETURN_VALUE",
            Self::Error => "ERROR",
        };
        write!(f, "{name}")
    }
}

impl std::fmt::Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::ReturnValue(value) => write!(f, "{value}"),
            Self::Error(error) => write!(f, "ERROR: {error}"),
        }
    }
}
