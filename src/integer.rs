//! Signed arbitrary-precision integer: a sign in `{-1, 0, 1}` paired with a
//! [`BigMagnitude`].

use std::cmp::Ordering;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::magnitude::BigMagnitude;

/// Signed arbitrary-precision integer.
///
/// Invariant: `sign == 0` if and only if the magnitude is zero.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct BigInteger {
    sign: i8,
    magnitude: BigMagnitude,
}

impl BigInteger {
    pub fn zero() -> Self {
        BigInteger {
            sign: 0,
            magnitude: BigMagnitude::zero(),
        }
    }

    pub fn one() -> Self {
        BigInteger::from_magnitude(1, BigMagnitude::from_limb(1))
    }

    /// Build from an explicit sign and magnitude, normalizing `sign` to 0
    /// whenever the magnitude is zero.
    pub fn from_magnitude(sign: i8, magnitude: BigMagnitude) -> Self {
        let sign = if magnitude.is_zero() { 0 } else { sign.signum() };
        BigInteger { sign, magnitude }
    }

    pub fn from_i64(value: i64) -> Self {
        if value == 0 {
            return BigInteger::zero();
        }
        let sign = if value < 0 { -1 } else { 1 };
        let mag = (value as i128).unsigned_abs() as u64;
        BigInteger::from_magnitude(sign, BigMagnitude::from_u64(mag))
    }

    pub fn from_u64(value: u64) -> Self {
        BigInteger::from_magnitude(1, BigMagnitude::from_u64(value))
    }

    pub fn sign(&self) -> i8 {
        self.sign
    }

    pub fn magnitude(&self) -> &BigMagnitude {
        &self.magnitude
    }

    pub fn is_zero(&self) -> bool {
        self.sign == 0
    }

    pub fn is_positive(&self) -> bool {
        self.sign > 0
    }

    pub fn is_negative(&self) -> bool {
        self.sign < 0
    }

    pub fn is_one(&self) -> bool {
        self.sign == 1 && self.magnitude.limbs() == [1]
    }

    pub fn abs(&self) -> BigInteger {
        BigInteger::from_magnitude(1, self.magnitude.clone())
    }

    pub fn neg(&self) -> BigInteger {
        BigInteger::from_magnitude(-self.sign, self.magnitude.clone())
    }

    /// `a + b`.
    pub fn add(a: &BigInteger, b: &BigInteger) -> Result<BigInteger> {
        if a.sign == 0 {
            return Ok(b.clone());
        }
        if b.sign == 0 {
            return Ok(a.clone());
        }
        if a.sign == b.sign {
            let mag = BigMagnitude::add(&a.magnitude, &b.magnitude)?;
            return Ok(BigInteger::from_magnitude(a.sign, mag));
        }
        match BigMagnitude::compare(&a.magnitude, &b.magnitude) {
            Ordering::Equal => Ok(BigInteger::zero()),
            Ordering::Greater => Ok(BigInteger::from_magnitude(
                a.sign,
                BigMagnitude::sub(&a.magnitude, &b.magnitude),
            )),
            Ordering::Less => Ok(BigInteger::from_magnitude(
                b.sign,
                BigMagnitude::sub(&b.magnitude, &a.magnitude),
            )),
        }
    }

    /// `a - b`.
    pub fn sub(a: &BigInteger, b: &BigInteger) -> Result<BigInteger> {
        BigInteger::add(a, &b.neg())
    }

    /// `a * b`, dispatching to schoolbook or Karatsuba per `ctx`.
    pub fn mul(a: &BigInteger, b: &BigInteger, ctx: &Context) -> Result<BigInteger> {
        if a.sign == 0 || b.sign == 0 {
            return Ok(BigInteger::zero());
        }
        let mag = BigMagnitude::mul_karatsuba(&a.magnitude, &b.magnitude, ctx)?;
        Ok(BigInteger::from_magnitude(a.sign * b.sign, mag))
    }

    /// Truncated division: quotient sign is the product of operand signs,
    /// remainder sign follows the dividend.
    pub fn div_mod(a: &BigInteger, b: &BigInteger) -> Result<(BigInteger, BigInteger)> {
        if b.sign == 0 {
            return Err(Error::DivideByZero);
        }
        let (q_mag, r_mag) = BigMagnitude::div_mod(&a.magnitude, &b.magnitude)?;
        let q = BigInteger::from_magnitude(a.sign * b.sign, q_mag);
        let r = BigInteger::from_magnitude(a.sign, r_mag);
        Ok((q, r))
    }

    /// Truncated remainder only.
    pub fn rem(a: &BigInteger, b: &BigInteger) -> Result<BigInteger> {
        Ok(BigInteger::div_mod(a, b)?.1)
    }

    /// Exact division: errors with `InvalidInput` if the division is not
    /// exact. Used by [`crate::rational::Rational::normalize`] to divide
    /// both halves of a fraction by their GCD.
    pub fn div_exact(a: &BigInteger, b: &BigInteger) -> Result<BigInteger> {
        let (q, r) = BigInteger::div_mod(a, b)?;
        if !r.is_zero() {
            return Err(Error::InvalidInput);
        }
        Ok(q)
    }

    /// Binary (Stein's) GCD. Always non-negative; `gcd(0, 0) == 0`.
    pub fn gcd(a: &BigInteger, b: &BigInteger) -> Result<BigInteger> {
        if a.sign == 0 {
            return Ok(b.abs());
        }
        if b.sign == 0 {
            return Ok(a.abs());
        }
        let mut u = a.magnitude.clone();
        let mut v = b.magnitude.clone();
        let s = u.trailing_zero_bits().min(v.trailing_zero_bits());
        let tz_u = u.trailing_zero_bits();
        BigMagnitude::shr_in_place(&mut u, tz_u);
        let tz_v = v.trailing_zero_bits();
        BigMagnitude::shr_in_place(&mut v, tz_v);

        loop {
            match BigMagnitude::compare(&u, &v) {
                Ordering::Equal => break,
                Ordering::Greater => {
                    u = BigMagnitude::sub(&u, &v);
                    let tz = u.trailing_zero_bits();
                    BigMagnitude::shr_in_place(&mut u, tz);
                }
                Ordering::Less => {
                    v = BigMagnitude::sub(&v, &u);
                    let tz = v.trailing_zero_bits();
                    BigMagnitude::shr_in_place(&mut v, tz);
                }
            }
        }
        let result = BigMagnitude::shl(&u, s)?;
        Ok(BigInteger::from_magnitude(1, result))
    }

    /// `base ^ exp`, square-and-multiply.
    pub fn pow(base: &BigInteger, exp: u64, ctx: &Context) -> Result<BigInteger> {
        if exp == 0 {
            return Ok(BigInteger::one());
        }
        let mut result = BigInteger::one();
        let mut b = base.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = BigInteger::mul(&result, &b, ctx)?;
            }
            e >>= 1;
            if e > 0 {
                b = BigInteger::mul(&b, &b, ctx)?;
            }
        }
        Ok(result)
    }

    /// `base ^ exp mod modulus`, canonicalized into `[0, |modulus|)`.
    pub fn mod_exp(
        base: &BigInteger,
        exp: u64,
        modulus: &BigInteger,
        ctx: &Context,
    ) -> Result<BigInteger> {
        if modulus.is_zero() {
            return Err(Error::DivideByZero);
        }
        let m = modulus.abs();
        let mut reduced = BigInteger::rem(base, &m)?;
        if reduced.is_negative() {
            reduced = BigInteger::add(&reduced, &m)?;
        }
        let mut acc = BigInteger::rem(&BigInteger::one(), &m)?;
        let mut b = reduced;
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                acc = BigInteger::rem(&BigInteger::mul(&acc, &b, ctx)?, &m)?;
            }
            e >>= 1;
            if e > 0 {
                b = BigInteger::rem(&BigInteger::mul(&b, &b, ctx)?, &m)?;
            }
        }
        Ok(acc)
    }

    pub fn compare(a: &BigInteger, b: &BigInteger) -> Ordering {
        match a.sign.cmp(&b.sign) {
            Ordering::Equal => {
                let mag_cmp = BigMagnitude::compare(&a.magnitude, &b.magnitude);
                if a.sign < 0 {
                    mag_cmp.reverse()
                } else {
                    mag_cmp
                }
            }
            other => other,
        }
    }

    pub fn to_i64(&self) -> Result<i64> {
        let limbs = self.magnitude.limbs();
        let unsigned: u128 = limbs
            .iter()
            .enumerate()
            .map(|(i, &l)| (l as u128) << (i as u32 * 32))
            .sum();
        match self.sign {
            0 => Ok(0),
            1 => {
                if unsigned > i64::MAX as u128 {
                    Err(Error::OutOfRange)
                } else {
                    Ok(unsigned as i64)
                }
            }
            _ => {
                if unsigned > (i64::MAX as u128) + 1 {
                    Err(Error::OutOfRange)
                } else if unsigned == (i64::MAX as u128) + 1 {
                    Ok(i64::MIN)
                } else {
                    Ok(-(unsigned as i64))
                }
            }
        }
    }

    pub fn to_u64(&self) -> Result<u64> {
        if self.sign < 0 {
            return Err(Error::OutOfRange);
        }
        let limbs = self.magnitude.limbs();
        let unsigned: u128 = limbs
            .iter()
            .enumerate()
            .map(|(i, &l)| (l as u128) << (i as u32 * 32))
            .sum();
        u64::try_from(unsigned).map_err(|_| Error::OutOfRange)
    }
}
