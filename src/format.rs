//! [`Number`](crate::number::Number)-to-text formatting, the inverse of
//! [`crate::parse`].

use crate::error::{Error, Result};
use crate::integer::BigInteger;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Format a single signed integer in `base` (2..=36).
pub fn format_integer(value: &BigInteger, base: u32) -> Result<String> {
    if !(2..=36).contains(&base) {
        return Err(Error::InvalidInput);
    }
    if value.is_zero() {
        return Ok("0".to_string());
    }

    // Base 2 gives the longest possible rendering for a given bit length,
    // so sizing the scratch buffer against it avoids reallocating for any
    // other base in one pass.
    let capacity = value.magnitude().bit_length() as usize + 1;
    let mut digits: Vec<u8> = Vec::with_capacity(capacity);
    let mut mag = value.magnitude().clone();
    while !mag.is_zero() {
        let d = mag.div_mod_small_in_place(base);
        digits.push(DIGITS[d as usize]);
    }
    if value.is_negative() {
        digits.push(b'-');
    }
    digits.reverse();
    Ok(String::from_utf8(digits).expect("digit bytes are always ASCII"))
}

/// Upper bound (not necessarily tight) on the number of ASCII bytes
/// [`format_integer`] will produce, for callers sizing a fixed buffer ahead
/// of time.
pub fn radix_len_upper_bound(value: &BigInteger, base: u32) -> usize {
    let bit_length = value.magnitude().bit_length().max(1);
    // One digit in `base` covers at least one bit (base >= 2), so dividing
    // the bit length by the base's single bit contribution never undershoots.
    let digits = bit_length.div_ceil(base.max(2).ilog2().max(1) as u64);
    digits as usize + 1 // +1 for an optional sign byte
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_formats_as_zero_in_every_base() {
        for base in 2..=36u32 {
            assert_eq!(format_integer(&BigInteger::zero(), base).unwrap(), "0");
        }
    }

    #[test]
    fn negative_gets_leading_minus() {
        assert_eq!(
            format_integer(&BigInteger::from_i64(-255), 16).unwrap(),
            "-ff"
        );
    }

    #[test]
    fn rejects_bad_base() {
        assert_eq!(
            format_integer(&BigInteger::one(), 1).unwrap_err(),
            Error::InvalidInput
        );
        assert_eq!(
            format_integer(&BigInteger::one(), 37).unwrap_err(),
            Error::InvalidInput
        );
    }

    #[test]
    fn upper_bound_is_never_undershot() {
        for v in [0i64, 1, 255, i64::MAX] {
            let n = BigInteger::from_i64(v);
            let actual = format_integer(&n, 2).unwrap().len();
            assert!(radix_len_upper_bound(&n, 2) >= actual);
        }
    }
}
