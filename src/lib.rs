/*!
Arbitrary-precision signed integer and exact rational arithmetic.

This crate provides [`Number`], a single value type that is either an
arbitrarily large signed integer or a fully reduced signed rational,
together with the arithmetic, comparison, conversion, parsing, and
formatting needed to use it as a drop-in replacement for a bounded machine
integer.

## Layering

- [`limb`] - word-sized limb primitives and their double-width companion.
- [`magnitude`] - [`magnitude::BigMagnitude`], an unsigned limb vector with
  add/sub/shift/compare/schoolbook-and-Karatsuba-multiply/binary-divmod.
- [`integer`] - [`integer::BigInteger`], sign-and-magnitude on top of
  `BigMagnitude`, plus binary GCD, `pow`, and `mod_exp`.
- [`rational`] - [`rational::Rational`], a reduced `num/den` pair.
- [`number`] - [`Number`], the façade that auto-promotes to rational on
  inexact division and auto-demotes back to integer whenever the reduced
  denominator is 1.
- [`parse`] / [`format`] - the base 2..36 text grammar (with base-0
  prefix sniffing and an optional `num/den` slash form) and its inverse.
- [`float_capture`] - bit-exact `f32`/`f64` decomposition into `Number`.
- [`context`] - the Karatsuba threshold and a pluggable limb allocator.
- [`error`] - the shared [`error::Error`] taxonomy.

# Examples

```rust
use bignum_rational::{Context, Number};

let ctx = Context::default();
let a = Number::from_str_radix("-8/-12", 10, &ctx).unwrap();
assert_eq!(a.to_string_radix(10).unwrap(), "2/3");

let pow = Number::pow(&Number::from_i64(-2), 5, &ctx).unwrap();
assert_eq!(pow.to_string_radix(10).unwrap(), "-32");
```
*/

pub mod context;
pub mod error;
pub mod float_capture;
pub mod format;
pub mod integer;
pub mod limb;
pub mod magnitude;
pub mod number;
pub mod parse;
pub mod rational;

pub use context::Context;
pub use error::Error;
pub use float_capture::{from_f32_exact, from_f64_exact};
pub use integer::BigInteger;
pub use magnitude::BigMagnitude;
pub use number::Number;
pub use rational::Rational;
