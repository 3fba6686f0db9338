//! Bundled target modules for exercising the harness.
//!
//! Each fixture provides three things: a [`SymbolTable`](crate::harness::SymbolTable)
//! with the module's original implementations, a standard test suite, and a
//! curated list of mutant candidates simulating plausible defects.

use crate::harness::value::{CallError, NativeFn, Value, native};

pub mod calculator;
pub mod converter;

/// Adapt a one-argument numeric function into a [`NativeFn`].
pub(crate) fn unary(f: fn(f64) -> Result<f64, CallError>) -> NativeFn {
    native(move |args| {
        if args.len() != 1 {
            return Err(CallError::Arity {
                expected: 1,
                got: args.len(),
            });
        }
        f(args[0].number(0)?).map(Value::Float)
    })
}

/// Adapt a two-argument numeric function into a [`NativeFn`].
pub(crate) fn binary(f: fn(f64, f64) -> Result<f64, CallError>) -> NativeFn {
    native(move |args| {
        if args.len() != 2 {
            return Err(CallError::Arity {
                expected: 2,
                got: args.len(),
            });
        }
        f(args[0].number(0)?, args[1].number(1)?).map(Value::Float)
    })
}
