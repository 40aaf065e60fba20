use bignum_rational::{Context, Number};

fn ctx() -> Context {
    Context::default()
}

#[test]
fn parse_then_format_round_trips_across_every_base() {
    let samples: Vec<i64> = vec![
        0,
        1,
        -1,
        42,
        -42,
        i64::MAX,
        i64::MIN,
        1_000_000_007,
    ];

    for base in 2..=36u32 {
        for &v in &samples {
            let n = Number::from_i64(v);
            let text = n.to_string_radix(base).unwrap();
            let back = Number::from_str_radix(&text, base, &ctx()).unwrap();
            assert_eq!(back.to_i64().unwrap(), v, "base {base}, value {v}");
        }
    }
}

#[test]
fn rational_round_trips_across_every_base() {
    for base in 2..=36u32 {
        let n = Number::from_str_radix("7/9", 10, &ctx()).unwrap();
        let text = n.to_string_radix(base).unwrap();
        let back = Number::from_str_radix(&text, base, &ctx()).unwrap();
        assert_eq!(back, n, "base {base}");
    }
}

#[test]
fn large_values_round_trip() {
    let digits = "9".repeat(500);
    let n = Number::from_str_radix(&digits, 10, &ctx()).unwrap();
    let text = n.to_string_radix(10).unwrap();
    assert_eq!(text, digits);

    let as_hex = n.to_string_radix(16).unwrap();
    let back = Number::from_str_radix(&as_hex, 16, &ctx()).unwrap();
    assert_eq!(back, n);
}

#[test]
fn leading_zeros_do_not_change_the_value() {
    let a = Number::from_str_radix("007", 10, &ctx()).unwrap();
    let b = Number::from_str_radix("7", 10, &ctx()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn maximum_radix_digits_parse() {
    let n = Number::from_str_radix("zzzzz", 36, &ctx()).unwrap();
    assert_eq!(n.to_string_radix(36).unwrap(), "zzzzz");
}
