//! Bit-exact capture of IEEE-754 `f32`/`f64` values as [`Rational`]s.
//!
//! No rounding ever happens here: the mantissa and binary exponent are read
//! straight off `to_bits()`, and the result is the exact value the bit
//! pattern encodes, represented as `mantissa * 2^e` (collapsed to an integer
//! when `e >= 0`, otherwise `mantissa / 2^(-e)` normalized).

use crate::error::{Error, Result};
use crate::integer::BigInteger;
use crate::number::Number;

struct Decomposed {
    negative: bool,
    mantissa: u64,
    exponent: i32,
}

fn decompose(
    bits: u64,
    mantissa_width: u32,
    exponent_width: u32,
) -> Result<Option<Decomposed>> {
    let bias = (1i64 << (exponent_width - 1)) - 1;
    let exp_mask = (1u64 << exponent_width) - 1;
    let mantissa_mask = (1u64 << mantissa_width) - 1;

    let negative = (bits >> (mantissa_width + exponent_width)) & 1 == 1;
    let raw_exp = (bits >> mantissa_width) & exp_mask;
    let fraction = bits & mantissa_mask;

    if raw_exp == exp_mask {
        // Infinity or NaN.
        return Err(Error::InvalidInput);
    }
    if raw_exp == 0 && fraction == 0 {
        return Ok(None);
    }

    let (mantissa, exponent) = if raw_exp == 0 {
        // Denormal: no implicit leading bit.
        (fraction, 1 - bias - mantissa_width as i64)
    } else {
        // Normal: restore the implicit leading bit.
        (
            fraction | (1u64 << mantissa_width),
            raw_exp as i64 - bias - mantissa_width as i64,
        )
    };

    Ok(Some(Decomposed {
        negative,
        mantissa,
        exponent: exponent as i32,
    }))
}

/// Exact rational capture of an `f32`, rejecting infinities and NaNs.
pub fn from_f32_exact(v: f32) -> Result<Number> {
    from_bits(v.to_bits() as u64, 23, 8)
}

/// Exact rational capture of an `f64`, rejecting infinities and NaNs.
pub fn from_f64_exact(v: f64) -> Result<Number> {
    from_bits(v.to_bits(), 52, 11)
}

fn from_bits(bits: u64, mantissa_width: u32, exponent_width: u32) -> Result<Number> {
    let Some(d) = decompose(bits, mantissa_width, exponent_width)? else {
        return Ok(Number::zero());
    };
    let mantissa = BigInteger::from_magnitude(
        if d.negative { -1 } else { 1 },
        crate::magnitude::BigMagnitude::from_u64(d.mantissa),
    );

    if d.exponent >= 0 {
        let shifted = crate::magnitude::BigMagnitude::shl(mantissa.magnitude(), d.exponent as u64)?;
        Ok(Number::Int(BigInteger::from_magnitude(mantissa.sign(), shifted)))
    } else {
        let denom_mag = crate::magnitude::BigMagnitude::shl(
            &crate::magnitude::BigMagnitude::from_limb(1),
            (-d.exponent) as u64,
        )?;
        let denom = BigInteger::from_magnitude(1, denom_mag);
        Number::from_rational(mantissa, denom)
    }
}
