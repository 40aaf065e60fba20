#![no_main]
use bignum_rational::{Context, Number};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mid = data.len() / 2;
    let (a_bytes, b_bytes) = data.split_at(mid);
    let (Ok(a_str), Ok(b_str)) = (std::str::from_utf8(a_bytes), std::str::from_utf8(b_bytes)) else {
        return;
    };
    let ctx = Context::default();
    let Ok(a) = Number::from_str_radix(a_str, 10, &ctx) else {
        return;
    };
    let Ok(b) = Number::from_str_radix(b_str, 10, &ctx) else {
        return;
    };
    let _ = Number::add(&a, &b, &ctx);
    let _ = Number::sub(&a, &b, &ctx);
    let _ = Number::mul(&a, &b, &ctx);
    let _ = Number::div(&a, &b, &ctx);
    let _ = Number::compare(&a, &b, &ctx);
});
