//! Dynamic value and callable model for target functions.
//!
//! Target functions are opaque to the harness: anything invocable with a
//! slice of [`Value`] arguments that either produces a [`Value`] or a
//! [`CallError`]. Signatures are never validated up front; a replacement
//! with the wrong arity simply fails at invocation time.

use std::sync::Arc;

use thiserror::Error;

/// Argument or return value of a target function.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value.
    Unit,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Double-precision float.
    Float(f64),
    /// Owned string.
    Str(String),
}

impl Value {
    /// Coerce the argument at `index` to `f64`. Integers widen; everything
    /// else is an argument-type error.
    pub fn number(&self, index: usize) -> Result<f64, CallError> {
        match self {
            Value::Int(n) => Ok(*n as f64),
            Value::Float(f) => Ok(*f),
            _ => Err(CallError::ArgumentType {
                index,
                expected: "number",
            }),
        }
    }

    /// Numeric view of this value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

/// Failure raised while invoking a target function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    /// Wrong number of arguments for the bound callable.
    #[error("expected {expected} argument(s), got {got}")]
    Arity {
        /// Arity the callable accepts.
        expected: usize,
        /// Arity it was invoked with.
        got: usize,
    },
    /// An argument had an unusable type.
    #[error("argument {index} must be a {expected}")]
    ArgumentType {
        /// Zero-based argument position.
        index: usize,
        /// Expected type description.
        expected: &'static str,
    },
    /// No callable is bound under this name.
    #[error("unknown symbol `{0}`")]
    UnknownSymbol(String),
    /// Domain error raised by the function itself.
    #[error("{0}")]
    Domain(String),
}

impl CallError {
    /// Build a domain error from any message.
    pub fn domain(message: impl Into<String>) -> Self {
        CallError::Domain(message.into())
    }
}

/// Shared handle to a target function implementation.
pub type NativeFn = Arc<dyn Fn(&[Value]) -> Result<Value, CallError> + Send + Sync>;

/// Wrap a closure as a [`NativeFn`].
pub fn native<F>(f: F) -> NativeFn
where
    F: Fn(&[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
{
    Arc::new(f)
}
