//! Text-to-[`Number`](crate::number::Number) grammar.
//!
//! ```text
//! number   := ws* sign? digits ws*
//! rational := number ('/' number)?
//! sign     := '+' | '-'
//! digits   := digit+              (one or more, in [0, base))
//! ```
//!
//! Base 0 auto-detects a prefix (`0x`/`0X` -> 16, `0b`/`0B` -> 2, a leading
//! `0` followed by another digit -> 8, otherwise 10); bases 16 and 2 accept
//! but do not require a matching prefix. Bases 0, 1, and anything above 36
//! are rejected.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::integer::BigInteger;
use crate::magnitude::BigMagnitude;

/// One parsed `[sign] digits` integer, plus how many bytes of `s` it consumed.
struct ParsedInt {
    value: BigInteger,
    consumed: usize,
}

fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        'a'..='z' => Some(ch as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(ch as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Parse a single signed integer starting at byte offset 0 of `s`,
/// auto-detecting the base when `base == 0`. Leading whitespace is skipped;
/// trailing content is left unconsumed for the caller (the `/` splitter, or
/// the top-level trailing-whitespace check) to deal with.
fn parse_int(s: &str, base: u32) -> Result<ParsedInt> {
    if base == 1 || base > 36 {
        return Err(Error::InvalidInput);
    }

    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }

    let mut sign: i8 = 1;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        if bytes[i] == b'-' {
            sign = -1;
        }
        i += 1;
    }

    let mut effective_base = base;
    if base == 0 {
        if s[i..].starts_with("0x") || s[i..].starts_with("0X") {
            effective_base = 16;
            i += 2;
        } else if s[i..].starts_with("0b") || s[i..].starts_with("0B") {
            effective_base = 2;
            i += 2;
        } else if bytes.get(i) == Some(&b'0') && bytes.get(i + 1).is_some_and(u8::is_ascii_digit) {
            effective_base = 8;
        } else {
            effective_base = 10;
        }
    } else if (base == 16 && (s[i..].starts_with("0x") || s[i..].starts_with("0X")))
        || (base == 2 && (s[i..].starts_with("0b") || s[i..].starts_with("0B")))
    {
        i += 2;
    }

    let mut magnitude = BigMagnitude::zero();
    let mut any_digit = false;
    while let Some(ch) = s[i..].chars().next() {
        let Some(d) = digit_value(ch) else { break };
        if d >= effective_base {
            break;
        }
        magnitude.mul_small_in_place(effective_base)?;
        magnitude.add_small_in_place(d)?;
        any_digit = true;
        i += ch.len_utf8();
    }

    if !any_digit {
        return Err(Error::ParseError);
    }

    Ok(ParsedInt {
        value: BigInteger::from_magnitude(sign, magnitude),
        consumed: i,
    })
}

/// Parse a full `integer` or `integer/integer` literal, trimming trailing
/// whitespace but rejecting any other trailing content.
pub fn parse(s: &str, base: u32, _ctx: &Context) -> Result<(BigInteger, Option<BigInteger>)> {
    let numerator = parse_int(s, base)?;
    let rest = &s[numerator.consumed..];

    if let Some(rest_after_slash) = rest.strip_prefix('/') {
        let denominator = parse_int(rest_after_slash, base)?;
        let trailing = &rest_after_slash[denominator.consumed..];
        if !trailing.bytes().all(|b| b.is_ascii_whitespace()) {
            return Err(Error::ParseError);
        }
        return Ok((numerator.value, Some(denominator.value)));
    }

    if !rest.bytes().all(|b| b.is_ascii_whitespace()) {
        return Err(Error::ParseError);
    }
    Ok((numerator.value, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str, base: u32) -> Result<(BigInteger, Option<BigInteger>)> {
        parse(s, base, &Context::default())
    }

    #[test]
    fn parses_plain_decimal() {
        let (n, d) = p("42", 10).unwrap();
        assert_eq!(n.to_i64().unwrap(), 42);
        assert!(d.is_none());
    }

    #[test]
    fn parses_sign_and_whitespace() {
        let (n, _) = p("  -42  ", 10).unwrap();
        assert_eq!(n.to_i64().unwrap(), -42);
    }

    #[test]
    fn base_zero_detects_prefixes() {
        assert_eq!(p("0xff", 0).unwrap().0.to_i64().unwrap(), 255);
        assert_eq!(p("0b101", 0).unwrap().0.to_i64().unwrap(), 5);
        assert_eq!(p("017", 0).unwrap().0.to_i64().unwrap(), 15);
        assert_eq!(p("17", 0).unwrap().0.to_i64().unwrap(), 17);
    }

    #[test]
    fn rejects_bad_bases() {
        assert_eq!(p("1", 1).unwrap_err(), Error::InvalidInput);
        assert_eq!(p("1", 37).unwrap_err(), Error::InvalidInput);
    }

    #[test]
    fn empty_and_whitespace_only_are_parse_errors() {
        assert_eq!(p("", 10).unwrap_err(), Error::ParseError);
        assert_eq!(p("   ", 10).unwrap_err(), Error::ParseError);
        assert_eq!(p("-", 10).unwrap_err(), Error::ParseError);
    }

    #[test]
    fn trailing_garbage_is_parse_error() {
        assert_eq!(p("12x", 10).unwrap_err(), Error::ParseError);
    }

    #[test]
    fn slash_splits_rational() {
        let (n, d) = p("-8/-12", 10).unwrap();
        assert_eq!(n.to_i64().unwrap(), -8);
        assert_eq!(d.unwrap().to_i64().unwrap(), -12);
    }

    #[test]
    fn max_radix_digits() {
        let (n, _) = p("zz", 36).unwrap();
        assert_eq!(n.to_i64().unwrap(), 35 * 36 + 35);
    }
}
