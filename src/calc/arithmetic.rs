//! Integer and floating-point arithmetic over path operands.

use crate::calc::{CalcError, CalcResult};

/// Parse a signed 64-bit integer operand.
pub fn parse_int(raw: &str) -> CalcResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| CalcError::InvalidNumber(raw.to_string()))
}

/// Parse a finite floating-point operand.
///
/// `inf` and `NaN` are accepted by `f64::from_str` but cannot be encoded
/// as JSON numbers, so they are rejected here.
pub fn parse_float(raw: &str) -> CalcResult<f64> {
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(CalcError::InvalidNumber(raw.to_string())),
    }
}

pub fn add(a: i64, b: i64) -> CalcResult<i64> {
    a.checked_add(b).ok_or(CalcError::Overflow)
}

pub fn subtract(a: i64, b: i64) -> CalcResult<i64> {
    a.checked_sub(b).ok_or(CalcError::Overflow)
}

pub fn multiply(a: i64, b: i64) -> CalcResult<i64> {
    a.checked_mul(b).ok_or(CalcError::Overflow)
}

/// Divide as floats. The zero check is on the integer divisor.
pub fn divide(a: i64, b: i64) -> CalcResult<f64> {
    if b == 0 {
        return Err(CalcError::DivideByZero);
    }
    Ok(a as f64 / b as f64)
}

pub fn square(n: i64) -> CalcResult<i64> {
    multiply(n, n)
}

pub fn sqrt(n: f64) -> CalcResult<f64> {
    if n < 0.0 {
        return Err(CalcError::NegativeSqrt);
    }
    Ok(n.sqrt())
}
