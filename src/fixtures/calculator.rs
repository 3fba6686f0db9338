//! Calculator fixture: basic arithmetic with guarded division.

use crate::harness::candidate::MutantCandidate;
use crate::harness::registry::SymbolTable;
use crate::harness::suite::{TestCase, check_close, check_eq, check_rejects};
use crate::harness::value::{CallError, Value, native};

use super::binary;

/// Module name the calculator table is registered under.
pub const MODULE: &str = "calculator";

/// `a + b`.
pub fn add(a: f64, b: f64) -> Result<f64, CallError> {
    Ok(a + b)
}

/// `a - b`.
pub fn subtract(a: f64, b: f64) -> Result<f64, CallError> {
    Ok(a - b)
}

/// `a * b`.
pub fn multiply(a: f64, b: f64) -> Result<f64, CallError> {
    Ok(a * b)
}

/// `a / b`, rejecting a zero divisor.
pub fn divide(a: f64, b: f64) -> Result<f64, CallError> {
    if b == 0.0 {
        return Err(CallError::domain("division by zero is not allowed"));
    }
    Ok(a / b)
}

/// Remainder of `a / b`, rejecting a zero divisor.
pub fn modulo(a: f64, b: f64) -> Result<f64, CallError> {
    if b == 0.0 {
        return Err(CallError::domain("modulo by zero is not allowed"));
    }
    Ok(a % b)
}

/// `base` raised to `exponent`.
pub fn power(base: f64, exponent: f64) -> Result<f64, CallError> {
    Ok(base.powf(exponent))
}

/// Table with the original calculator implementations.
pub fn symbol_table() -> SymbolTable {
    let mut table = SymbolTable::new(MODULE);
    table.bind("add", binary(add));
    table.bind("subtract", binary(subtract));
    table.bind("multiply", binary(multiply));
    table.bind("divide", binary(divide));
    table.bind("modulo", binary(modulo));
    table.bind("power", binary(power));
    table
}

fn call2(table: &SymbolTable, symbol: &str, a: f64, b: f64) -> Result<Value, CallError> {
    table.call(symbol, &[Value::Float(a), Value::Float(b)])
}

/// Standard calculator suite.
pub fn test_suite() -> Vec<TestCase> {
    vec![
        TestCase::new("add_sums_operands", |t: &SymbolTable| {
            check_eq(call2(t, "add", 2.0, 3.0)?, Value::Float(5.0))?;
            check_eq(call2(t, "add", -1.0, 1.0)?, Value::Float(0.0))
        }),
        TestCase::new("subtract_orders_operands", |t: &SymbolTable| {
            check_eq(call2(t, "subtract", 5.0, 3.0)?, Value::Float(2.0))
        }),
        TestCase::new("multiply_scales_operands", |t: &SymbolTable| {
            check_eq(call2(t, "multiply", 7.0, 4.0)?, Value::Float(28.0))
        }),
        TestCase::new("divide_splits_evenly", |t: &SymbolTable| {
            check_eq(call2(t, "divide", 10.0, 4.0)?, Value::Float(2.5))
        }),
        TestCase::new("divide_rejects_zero_divisor", |t: &SymbolTable| {
            check_rejects(call2(t, "divide", 1.0, 0.0))
        }),
        TestCase::new("modulo_wraps", |t: &SymbolTable| {
            check_eq(call2(t, "modulo", 10.0, 3.0)?, Value::Float(1.0))
        }),
        TestCase::new("modulo_rejects_zero_divisor", |t: &SymbolTable| {
            check_rejects(call2(t, "modulo", 10.0, 0.0))
        }),
        TestCase::new("power_zero_exponent_is_one", |t: &SymbolTable| {
            check_eq(call2(t, "power", 5.0, 0.0)?, Value::Float(1.0))
        }),
        TestCase::new("power_zero_base_zero_exponent_is_one", |t: &SymbolTable| {
            check_eq(call2(t, "power", 0.0, 0.0)?, Value::Float(1.0))
        }),
        TestCase::new("power_exponent_one_is_identity", |t: &SymbolTable| {
            check_eq(call2(t, "power", 7.0, 1.0)?, Value::Float(7.0))
        }),
        TestCase::new("power_cubes", |t: &SymbolTable| {
            check_close(call2(t, "power", 2.0, 3.0)?, 8.0, 1e-9)
        }),
    ]
}

/// Curated calculator mutants.
///
/// The zero-exponent short circuit is declared equivalent: `f64::powf`
/// already yields `1` for a zero exponent whatever the base, so the extra
/// branch cannot change any observable result.
pub fn mutants() -> Vec<MutantCandidate> {
    vec![
        MutantCandidate::new(
            "power: zero exponent yields 0",
            "power",
            native(|args| {
                let base = args[0].number(0)?;
                let exponent = args[1].number(1)?;
                if exponent == 0.0 {
                    return Ok(Value::Float(0.0));
                }
                Ok(Value::Float(base.powf(exponent)))
            }),
        ),
        MutantCandidate::new(
            "power: zero exponent yields base",
            "power",
            native(|args| {
                let base = args[0].number(0)?;
                let exponent = args[1].number(1)?;
                if exponent == 0.0 {
                    return Ok(Value::Float(base));
                }
                Ok(Value::Float(base.powf(exponent)))
            }),
        ),
        MutantCandidate::new(
            "power: 0^0 yields 0",
            "power",
            native(|args| {
                let base = args[0].number(0)?;
                let exponent = args[1].number(1)?;
                if base == 0.0 && exponent == 0.0 {
                    return Ok(Value::Float(0.0));
                }
                Ok(Value::Float(base.powf(exponent)))
            }),
        ),
        MutantCandidate::new(
            "power: exponent one yields 1",
            "power",
            native(|args| {
                let base = args[0].number(0)?;
                let exponent = args[1].number(1)?;
                if exponent == 1.0 {
                    return Ok(Value::Float(1.0));
                }
                Ok(Value::Float(base.powf(exponent)))
            }),
        ),
        MutantCandidate::new(
            "power: zero exponent short circuit",
            "power",
            native(|args| {
                let base = args[0].number(0)?;
                let exponent = args[1].number(1)?;
                if exponent == 0.0 {
                    return Ok(Value::Float(1.0));
                }
                Ok(Value::Float(base.powf(exponent)))
            }),
        )
        .marked_equivalent(),
        MutantCandidate::new(
            "add: computes a - b",
            "add",
            native(|args| {
                let a = args[0].number(0)?;
                let b = args[1].number(1)?;
                Ok(Value::Float(a - b))
            }),
        ),
        MutantCandidate::new(
            "multiply: computes a + b",
            "multiply",
            native(|args| {
                let a = args[0].number(0)?;
                let b = args[1].number(1)?;
                Ok(Value::Float(a + b))
            }),
        ),
    ]
}
