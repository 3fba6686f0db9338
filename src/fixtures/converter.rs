//! Unit-conversion fixture: temperatures, distances, masses.

use crate::harness::candidate::MutantCandidate;
use crate::harness::registry::SymbolTable;
use crate::harness::suite::{TestCase, check, check_close, check_rejects};
use crate::harness::value::{CallError, Value, native};

use super::unary;

/// Module name the converter table is registered under.
pub const MODULE: &str = "converter";

/// Miles-to-kilometers coefficient.
pub const MILES_TO_KM: f64 = 1.60934;

/// `F = C * 9/5 + 32`.
pub fn celsius_to_fahrenheit(celsius: f64) -> Result<f64, CallError> {
    Ok(celsius * 9.0 / 5.0 + 32.0)
}

/// `C = (F - 32) * 5/9`.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> Result<f64, CallError> {
    Ok((fahrenheit - 32.0) * 5.0 / 9.0)
}

/// Meters to kilometers; distances cannot be negative.
pub fn meters_to_kilometers(meters: f64) -> Result<f64, CallError> {
    if meters < 0.0 {
        return Err(CallError::domain("distance cannot be negative"));
    }
    Ok(meters / 1000.0)
}

/// Kilograms to grams; masses cannot be negative.
pub fn kilograms_to_grams(kilograms: f64) -> Result<f64, CallError> {
    if kilograms < 0.0 {
        return Err(CallError::domain("mass cannot be negative"));
    }
    Ok(kilograms * 1000.0)
}

/// Miles to kilometers; distances cannot be negative.
pub fn miles_to_kilometers(miles: f64) -> Result<f64, CallError> {
    if miles < 0.0 {
        return Err(CallError::domain("distance cannot be negative"));
    }
    Ok(miles * MILES_TO_KM)
}

/// Table with the original converter implementations.
pub fn symbol_table() -> SymbolTable {
    let mut table = SymbolTable::new(MODULE);
    table.bind("celsius_to_fahrenheit", unary(celsius_to_fahrenheit));
    table.bind("fahrenheit_to_celsius", unary(fahrenheit_to_celsius));
    table.bind("meters_to_kilometers", unary(meters_to_kilometers));
    table.bind("kilograms_to_grams", unary(kilograms_to_grams));
    table.bind("miles_to_kilometers", unary(miles_to_kilometers));
    table
}

fn call1(table: &SymbolTable, symbol: &str, x: f64) -> Result<Value, CallError> {
    table.call(symbol, &[Value::Float(x)])
}

/// Standard converter suite. Tolerances are tight on purpose: a wrong
/// coefficient close to the real one must still be caught.
pub fn test_suite() -> Vec<TestCase> {
    vec![
        TestCase::new("water_boils_at_212f", |t: &SymbolTable| {
            check_close(call1(t, "celsius_to_fahrenheit", 100.0)?, 212.0, 1e-9)
        }),
        TestCase::new("freezing_point_roundtrip", |t: &SymbolTable| {
            check_close(call1(t, "fahrenheit_to_celsius", 32.0)?, 0.0, 1e-9)
        }),
        TestCase::new("meters_scale_down", |t: &SymbolTable| {
            check_close(call1(t, "meters_to_kilometers", 1500.0)?, 1.5, 1e-9)
        }),
        TestCase::new("negative_meters_rejected", |t: &SymbolTable| {
            check_rejects(call1(t, "meters_to_kilometers", -1.0))
        }),
        TestCase::new("kilograms_scale_up", |t: &SymbolTable| {
            check_close(call1(t, "kilograms_to_grams", 2.5)?, 2500.0, 1e-9)
        }),
        TestCase::new("negative_kilograms_rejected", |t: &SymbolTable| {
            check_rejects(call1(t, "kilograms_to_grams", -0.5))
        }),
        TestCase::new("one_mile_in_kilometers", |t: &SymbolTable| {
            check_close(call1(t, "miles_to_kilometers", 1.0)?, MILES_TO_KM, 0.001)
        }),
        TestCase::new("negative_miles_rejected", |t: &SymbolTable| {
            check_rejects(call1(t, "miles_to_kilometers", -5.0))
        }),
        TestCase::new("kilometers_keep_the_sign", |t: &SymbolTable| {
            let km = call1(t, "miles_to_kilometers", 3.0)?;
            check(
                km.as_f64().is_some_and(|v| v > 0.0),
                "conversion lost the sign",
            )
        }),
    ]
}

fn miles_with_coefficient(coefficient: f64) -> MutantCandidate {
    MutantCandidate::new(
        format!("miles_to_kilometers: coefficient {coefficient}"),
        "miles_to_kilometers",
        native(move |args| {
            let miles = args[0].number(0)?;
            if miles < 0.0 {
                return Err(CallError::domain("distance cannot be negative"));
            }
            Ok(Value::Float(miles * coefficient))
        }),
    )
}

/// Curated converter mutants, all targeting `miles_to_kilometers`.
pub fn mutants() -> Vec<MutantCandidate> {
    vec![
        miles_with_coefficient(1.5),
        miles_with_coefficient(1.6),
        miles_with_coefficient(1.4),
        MutantCandidate::new(
            "miles_to_kilometers: missing negative-input check",
            "miles_to_kilometers",
            native(|args| Ok(Value::Float(args[0].number(0)? * MILES_TO_KM))),
        ),
        MutantCandidate::new(
            "miles_to_kilometers: divides by the coefficient",
            "miles_to_kilometers",
            native(|args| {
                let miles = args[0].number(0)?;
                if miles < 0.0 {
                    return Err(CallError::domain("distance cannot be negative"));
                }
                Ok(Value::Float(miles / MILES_TO_KM))
            }),
        ),
        MutantCandidate::new(
            "miles_to_kilometers: returns the input unchanged",
            "miles_to_kilometers",
            native(|args| {
                let miles = args[0].number(0)?;
                if miles < 0.0 {
                    return Err(CallError::domain("distance cannot be negative"));
                }
                Ok(Value::Float(miles))
            }),
        ),
        miles_with_coefficient(1000.0),
    ]
}
