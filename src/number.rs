//! The public value type: a tagged union of a signed integer or an exact
//! reduced rational.
//!
//! Every arithmetic entry point builds its result into a fresh local value
//! and only returns it on success (the idiomatic by-value replacement for
//! "build into a scratch, then swap into the destination"): a caller who
//! writes `dest = Number::add(&dest, &rhs, &ctx)?` never observes a
//! partially-updated `dest`, because the old `dest` is only dropped once the
//! new value has been produced and assignment succeeds.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::format;
use crate::integer::BigInteger;
use crate::parse;
use crate::rational::Rational;

/// Either an arbitrary-precision signed integer or an exact, fully reduced
/// signed rational.
///
/// Invariant: a `Number::Rat` never has denominator 1 — such a value is
/// always represented as `Number::Int` instead. [`Number::from_rational`]
/// is the only producer of `Rat` values and enforces this by construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Int(BigInteger),
    Rat(Rational),
}

impl Number {
    pub fn zero() -> Self {
        Number::Int(BigInteger::zero())
    }

    /// Reset to integer zero, dropping any owned limb storage.
    pub fn clear(&mut self) {
        *self = Number::zero();
    }

    pub fn from_i64(value: i64) -> Self {
        Number::Int(BigInteger::from_i64(value))
    }

    pub fn from_u64(value: u64) -> Self {
        Number::Int(BigInteger::from_u64(value))
    }

    pub fn from_i32(value: i32) -> Self {
        Number::from_i64(value as i64)
    }

    pub fn from_u32(value: u32) -> Self {
        Number::from_u64(value as u64)
    }

    /// Build a `num/den` rational and normalize it, demoting to `Int` when
    /// the reduced denominator is 1.
    pub fn from_rational(num: BigInteger, den: BigInteger) -> Result<Number> {
        let r = Rational::new(num, den)?;
        Ok(Number::demote(r))
    }

    fn demote(r: Rational) -> Number {
        if r.den_is_one() {
            Number::Int(r.num)
        } else {
            Number::Rat(r)
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(n) => n.is_zero(),
            Number::Rat(r) => r.is_zero(),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Number::Int(n) => n.is_positive(),
            Number::Rat(r) => r.num.is_positive(),
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Number::Int(n) => n.is_negative(),
            Number::Rat(r) => r.num.is_negative(),
        }
    }

    pub fn signum(&self) -> i8 {
        match self {
            Number::Int(n) => n.sign(),
            Number::Rat(r) => r.num.sign(),
        }
    }

    pub fn neg(&self) -> Number {
        match self {
            Number::Int(n) => Number::Int(n.neg()),
            Number::Rat(r) => Number::Rat(r.neg()),
        }
    }

    pub fn abs(&self) -> Number {
        match self {
            Number::Int(n) => Number::Int(n.abs()),
            Number::Rat(r) => Number::Rat(r.abs()),
        }
    }

    pub fn add(a: &Number, b: &Number, ctx: &Context) -> Result<Number> {
        match (a, b) {
            (Number::Int(x), Number::Int(y)) => Ok(Number::Int(BigInteger::add(x, y)?)),
            _ => {
                let ra = to_rational(a);
                let rb = to_rational(b);
                Ok(Number::demote(Rational::add(&ra, &rb, ctx)?))
            }
        }
    }

    pub fn sub(a: &Number, b: &Number, ctx: &Context) -> Result<Number> {
        Number::add(a, &b.neg(), ctx)
    }

    pub fn mul(a: &Number, b: &Number, ctx: &Context) -> Result<Number> {
        match (a, b) {
            (Number::Int(x), Number::Int(y)) => Ok(Number::Int(BigInteger::mul(x, y, ctx)?)),
            _ => {
                let ra = to_rational(a);
                let rb = to_rational(b);
                Ok(Number::demote(Rational::mul(&ra, &rb, ctx)?))
            }
        }
    }

    pub fn div(a: &Number, b: &Number, ctx: &Context) -> Result<Number> {
        if b.is_zero() {
            return Err(Error::DivideByZero);
        }
        match (a, b) {
            (Number::Int(x), Number::Int(y)) => {
                let (q, r) = BigInteger::div_mod(x, y)?;
                if r.is_zero() {
                    Ok(Number::Int(q))
                } else {
                    Number::from_rational(x.clone(), y.clone())
                }
            }
            _ => {
                let ra = to_rational(a);
                let rb = to_rational(b);
                Ok(Number::demote(Rational::div(&ra, &rb, ctx)?))
            }
        }
    }

    pub fn compare(a: &Number, b: &Number, ctx: &Context) -> Result<Ordering> {
        match (a, b) {
            (Number::Int(x), Number::Int(y)) => Ok(BigInteger::compare(x, y)),
            _ => {
                let ra = to_rational(a);
                let rb = to_rational(b);
                Rational::compare(&ra, &rb, ctx)
            }
        }
    }

    pub fn min(a: &Number, b: &Number, ctx: &Context) -> Result<Number> {
        Ok(if Number::compare(a, b, ctx)? == Ordering::Greater {
            b.clone()
        } else {
            a.clone()
        })
    }

    pub fn max(a: &Number, b: &Number, ctx: &Context) -> Result<Number> {
        Ok(if Number::compare(a, b, ctx)? == Ordering::Less {
            b.clone()
        } else {
            a.clone()
        })
    }

    fn as_integer(&self) -> Result<&BigInteger> {
        match self {
            Number::Int(n) => Ok(n),
            Number::Rat(_) => Err(Error::TypeMismatch),
        }
    }

    pub fn gcd(a: &Number, b: &Number) -> Result<Number> {
        Ok(Number::Int(BigInteger::gcd(a.as_integer()?, b.as_integer()?)?))
    }

    pub fn pow(base: &Number, exp: u64, ctx: &Context) -> Result<Number> {
        Ok(Number::Int(BigInteger::pow(base.as_integer()?, exp, ctx)?))
    }

    pub fn mod_exp(base: &Number, exp: u64, modulus: &Number, ctx: &Context) -> Result<Number> {
        Ok(Number::Int(BigInteger::mod_exp(
            base.as_integer()?,
            exp,
            modulus.as_integer()?,
            ctx,
        )?))
    }

    /// Requires an integer value (a `den == 1` rational would also qualify,
    /// but that state is unreachable through normal construction).
    pub fn to_i64(&self) -> Result<i64> {
        self.as_integer()?.to_i64()
    }

    pub fn to_u64(&self) -> Result<u64> {
        self.as_integer()?.to_u64()
    }

    pub fn from_str_radix(s: &str, base: u32, ctx: &Context) -> Result<Number> {
        let (num, den) = parse::parse(s, base, ctx)?;
        match den {
            Some(den) => Number::from_rational(num, den),
            None => Ok(Number::Int(num)),
        }
    }

    pub fn to_string_radix(&self, base: u32) -> Result<String> {
        match self {
            Number::Int(n) => format::format_integer(n, base),
            Number::Rat(r) => {
                let num = format::format_integer(&r.num, base)?;
                let den = format::format_integer(&r.den, base)?;
                Ok(format!("{num}/{den}"))
            }
        }
    }

    /// Upper bound, in bytes, on [`Number::to_string_radix`]'s output.
    pub fn radix_len_upper_bound(&self, base: u32) -> usize {
        match self {
            Number::Int(n) => format::radix_len_upper_bound(n, base),
            Number::Rat(r) => {
                format::radix_len_upper_bound(&r.num, base)
                    + 1
                    + format::radix_len_upper_bound(&r.den, base)
            }
        }
    }

    /// Query-then-fill formatting into a caller-owned buffer: an empty or
    /// undersized `buf` yields `Error::BufferTooSmall`; a sufficient one is
    /// filled with the ASCII text (no trailing terminator — the return
    /// value carries the length) and `Ok(written_len)` is returned.
    pub fn write_radix_into(&self, base: u32, buf: &mut [u8]) -> Result<usize> {
        let text = self.to_string_radix(base)?;
        if buf.len() < text.len() {
            return Err(Error::BufferTooSmall);
        }
        buf[..text.len()].copy_from_slice(text.as_bytes());
        Ok(text.len())
    }
}

fn to_rational(n: &Number) -> Rational {
    match n {
        Number::Int(x) => Rational {
            num: x.clone(),
            den: BigInteger::one(),
        },
        Number::Rat(r) => r.clone(),
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::zero()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_radix(10).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Number> {
        Number::from_str_radix(s, 10, &Context::default())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::from_i64(value)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number::from_u64(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::from_i32(value)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::from_u32(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context::default()
    }

    fn parse_n(s: &str, base: u32) -> Number {
        Number::from_str_radix(s, base, &ctx()).unwrap()
    }

    #[test]
    fn end_to_end_scenario_minus_eight_over_minus_twelve() {
        let n = parse_n("-8/-12", 10);
        assert_eq!(n.to_string_radix(10).unwrap(), "2/3");
    }

    #[test]
    fn end_to_end_scenario_hex_prefix() {
        let n = Number::from_str_radix("0xff", 0, &ctx()).unwrap();
        assert_eq!(n.to_i64().unwrap(), 255);
    }

    #[test]
    fn end_to_end_scenario_add_five_six() {
        let a = Number::from_i64(5);
        let b = Number::from_i64(6);
        let sum = Number::add(&a, &b, &ctx()).unwrap();
        assert_eq!(sum.to_string_radix(10).unwrap(), "11");
    }

    #[test]
    fn end_to_end_scenario_i64_max_overflow() {
        let n = parse_n("9223372036854775807", 10);
        assert_eq!(n.to_i64().unwrap(), i64::MAX);
        let incremented = Number::add(&n, &Number::from_i64(1), &ctx()).unwrap();
        assert_eq!(incremented.to_i64(), Err(Error::OutOfRange));
    }

    #[test]
    fn end_to_end_scenario_double_capture() {
        let n = crate::float_capture::from_f64_exact(0.1).unwrap();
        assert_eq!(
            n.to_string_radix(10).unwrap(),
            "3602879701896397/36028797018963968"
        );
    }

    #[test]
    fn end_to_end_scenario_pow_and_mod_exp() {
        let base = parse_n("-2", 10);
        let powered = Number::pow(&base, 5, &ctx()).unwrap();
        assert_eq!(powered.to_string_radix(10).unwrap(), "-32");

        let me = Number::mod_exp(
            &Number::from_i64(4),
            13,
            &Number::from_i64(497),
            &ctx(),
        )
        .unwrap();
        assert_eq!(me.to_string_radix(10).unwrap(), "445");
    }

    #[test]
    fn auto_promotes_and_demotes() {
        let half = parse_n("1/2", 10);
        assert!(!half.is_integer());
        let doubled = Number::mul(&half, &Number::from_i64(2), &ctx()).unwrap();
        assert!(doubled.is_integer());
        assert_eq!(doubled.to_i64().unwrap(), 1);
    }

    #[test]
    fn division_with_remainder_promotes_to_rational() {
        let n = Number::div(&Number::from_i64(1), &Number::from_i64(3), &ctx()).unwrap();
        assert!(!n.is_integer());
        assert_eq!(n.to_string_radix(10).unwrap(), "1/3");
    }

    #[test]
    fn division_by_zero_errors() {
        assert_eq!(
            Number::div(&Number::from_i64(1), &Number::from_i64(0), &ctx()),
            Err(Error::DivideByZero)
        );
    }

    #[test]
    fn gcd_pow_mod_exp_reject_rationals() {
        let half = parse_n("1/2", 10);
        assert_eq!(Number::gcd(&half, &Number::from_i64(4)), Err(Error::TypeMismatch));
        assert_eq!(Number::pow(&half, 2, &ctx()), Err(Error::TypeMismatch));
        assert_eq!(
            Number::mod_exp(&half, 2, &Number::from_i64(5), &ctx()),
            Err(Error::TypeMismatch)
        );
    }

    #[test]
    fn write_radix_into_buffer_contract() {
        let n = Number::from_i64(255);
        let mut tiny = [0u8; 1];
        assert_eq!(
            n.write_radix_into(16, &mut tiny),
            Err(Error::BufferTooSmall)
        );
        let mut buf = [0u8; 8];
        let len = n.write_radix_into(16, &mut buf).unwrap();
        assert_eq!(&buf[..len], b"ff");
    }

    #[test]
    fn failure_atomicity_destination_unchanged() {
        let dest = parse_n("7", 10);
        let before = dest.clone();
        let err = Number::div(&dest, &Number::from_i64(0), &ctx());
        assert!(err.is_err());
        assert_eq!(dest, before);
    }

    #[test]
    fn min_max_and_predicates() {
        let a = Number::from_i64(3);
        let b = Number::from_i64(-5);
        assert_eq!(Number::min(&a, &b, &ctx()).unwrap(), b);
        assert_eq!(Number::max(&a, &b, &ctx()).unwrap(), a);
        assert!(a.is_positive());
        assert!(b.is_negative());
        assert_eq!(a.signum(), 1);
        assert_eq!(Number::zero().signum(), 0);
    }
}
