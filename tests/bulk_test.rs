use bignum_rational::{Context, Number};

fn ctx() -> Context {
    Context::default()
}

#[test]
fn bidirectional_base_conversion_over_many_values() {
    let values: Vec<i64> = (-500..500).collect();
    for base_a in [2u32, 8, 10, 16, 36] {
        for base_b in [2u32, 8, 10, 16, 36] {
            for &v in &values {
                let n = Number::from_i64(v);
                let text_a = n.to_string_radix(base_a).unwrap();
                let via_a = Number::from_str_radix(&text_a, base_a, &ctx()).unwrap();
                let text_b = via_a.to_string_radix(base_b).unwrap();
                let via_b = Number::from_str_radix(&text_b, base_b, &ctx()).unwrap();
                assert_eq!(via_b.to_i64().unwrap(), v, "{base_a} -> {base_b}, v={v}");
            }
        }
    }
}

#[test]
fn large_repeated_digit_strings_parse_and_reformat() {
    for base in [16u32, 36] {
        let digit = if base == 16 { 'f' } else { 'z' };
        let input = digit.to_string().repeat(200);
        let n = Number::from_str_radix(&input, base, &ctx()).unwrap();
        let out = n.to_string_radix(base).unwrap();
        assert_eq!(out, input);
    }
}

#[test]
fn rational_arithmetic_over_a_grid_stays_reduced() {
    let fracs = ["1/2", "1/3", "2/3", "-5/7", "11/13", "0/9"];
    for a in fracs {
        for b in fracs {
            let na = Number::from_str_radix(a, 10, &ctx()).unwrap();
            let nb = Number::from_str_radix(b, 10, &ctx()).unwrap();
            for result in [
                Number::add(&na, &nb, &ctx()),
                Number::sub(&na, &nb, &ctx()),
                Number::mul(&na, &nb, &ctx()),
            ] {
                let result = result.unwrap();
                // Re-parsing the formatted text must reproduce the exact
                // same reduced value: this is only possible if the result
                // was already in lowest terms.
                let text = result.to_string_radix(10).unwrap();
                let reparsed = Number::from_str_radix(&text, 10, &ctx()).unwrap();
                assert_eq!(reparsed, result, "{a} op {b}");
            }
        }
    }
}
