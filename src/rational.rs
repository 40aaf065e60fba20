//! Exact signed rational built on top of [`BigInteger`].
//!
//! The only way to produce a value in normal form is
//! [`Rational::normalize`]: it moves the sign onto the numerator, reduces by
//! the GCD, and leaves the `den == 1` check for the caller (normally
//! [`crate::number::Number`]) to act on by demoting to a plain integer.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::integer::BigInteger;

/// Numerator/denominator pair. Not guaranteed to be in normal form until
/// [`Rational::normalize`] has run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rational {
    pub num: BigInteger,
    pub den: BigInteger,
}

impl Rational {
    /// Build a (possibly unreduced) rational from a numerator/denominator
    /// pair and normalize it.
    pub fn new(num: BigInteger, den: BigInteger) -> Result<Rational> {
        let mut r = Rational { num, den };
        r.normalize()?;
        Ok(r)
    }

    /// Reduce to lowest terms with a positive denominator.
    ///
    /// 1. zero denominator -> `DivideByZero`.
    /// 2. zero numerator -> denominator collapses to 1 (caller demotes).
    /// 3. negative denominator -> sign moves onto the numerator.
    /// 4. divide both halves by `gcd(|num|, den)`.
    pub fn normalize(&mut self) -> Result<()> {
        if self.den.is_zero() {
            return Err(Error::DivideByZero);
        }
        if self.num.is_zero() {
            self.den = BigInteger::one();
            return Ok(());
        }
        if self.den.is_negative() {
            self.den = self.den.neg();
            self.num = self.num.neg();
        }
        let g = BigInteger::gcd(&self.num, &self.den)?;
        if !g.is_one() {
            self.num = BigInteger::div_exact(&self.num, &g)?;
            self.den = BigInteger::div_exact(&self.den, &g)?;
        }
        Ok(())
    }

    /// `true` once `den == 1`, the point at which the [`crate::number`]
    /// layer must collapse this value to a plain integer.
    pub fn den_is_one(&self) -> bool {
        self.den.is_one()
    }

    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    pub fn neg(&self) -> Rational {
        Rational {
            num: self.num.neg(),
            den: self.den.clone(),
        }
    }

    pub fn abs(&self) -> Rational {
        Rational {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    pub fn add(a: &Rational, b: &Rational, ctx: &Context) -> Result<Rational> {
        let num = BigInteger::add(
            &BigInteger::mul(&a.num, &b.den, ctx)?,
            &BigInteger::mul(&b.num, &a.den, ctx)?,
        )?;
        let den = BigInteger::mul(&a.den, &b.den, ctx)?;
        Rational::new(num, den)
    }

    pub fn sub(a: &Rational, b: &Rational, ctx: &Context) -> Result<Rational> {
        Rational::add(a, &b.neg(), ctx)
    }

    pub fn mul(a: &Rational, b: &Rational, ctx: &Context) -> Result<Rational> {
        let num = BigInteger::mul(&a.num, &b.num, ctx)?;
        let den = BigInteger::mul(&a.den, &b.den, ctx)?;
        Rational::new(num, den)
    }

    pub fn div(a: &Rational, b: &Rational, ctx: &Context) -> Result<Rational> {
        if b.num.is_zero() {
            return Err(Error::DivideByZero);
        }
        let num = BigInteger::mul(&a.num, &b.den, ctx)?;
        let den = BigInteger::mul(&a.den, &b.num, ctx)?;
        Rational::new(num, den)
    }

    /// `sign(a - b)` computed by cross-multiplication, without materializing
    /// the difference as a rational.
    pub fn compare(a: &Rational, b: &Rational, ctx: &Context) -> Result<std::cmp::Ordering> {
        let lhs = BigInteger::mul(&a.num, &b.den, ctx)?;
        let rhs = BigInteger::mul(&b.num, &a.den, ctx)?;
        Ok(BigInteger::compare(&lhs, &rhs))
    }
}
