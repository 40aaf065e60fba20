#![no_main]
use bignum_rational::{Context, Number};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let base = data.first().map_or(0, |&b| (b as u32) % 37);
    let ctx = Context::default();
    if let Ok(n) = Number::from_str_radix(s, base, &ctx) {
        let base = if base == 0 { 10 } else { base };
        let text = n.to_string_radix(base).unwrap();
        let back = Number::from_str_radix(&text, base, &ctx).unwrap();
        assert_eq!(back, n);
    }
});
