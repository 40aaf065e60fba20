use bignum_rational::{Context, Error, Number};

/// Thin CLI wrapper: `<op> <a> [b] [c]`, operands parsed in base 0.
/// Prints `OK:<value>` or `ERR:<status>`. Not part of the library surface.
fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((op, operands)) = args.split_first() else {
        eprintln!("usage: <op> <a> [b] [c]");
        std::process::exit(2);
    };

    match run(op, operands) {
        Ok(value) => println!("OK:{value}"),
        Err(status) => println!("ERR:{status}"),
    }
}

fn run(op: &str, operands: &[String]) -> Result<String, Error> {
    let ctx = Context::default();
    let parse = |s: &str| Number::from_str_radix(s, 0, &ctx);

    let result = match (op, operands) {
        ("add", [a, b]) => Number::add(&parse(a)?, &parse(b)?, &ctx)?,
        ("sub", [a, b]) => Number::sub(&parse(a)?, &parse(b)?, &ctx)?,
        ("mul", [a, b]) => Number::mul(&parse(a)?, &parse(b)?, &ctx)?,
        ("div", [a, b]) => Number::div(&parse(a)?, &parse(b)?, &ctx)?,
        ("gcd", [a, b]) => Number::gcd(&parse(a)?, &parse(b)?)?,
        ("pow", [a, e]) => {
            let exp = parse(e)?.to_u64()?;
            Number::pow(&parse(a)?, exp, &ctx)?
        }
        ("modexp", [a, e, m]) => {
            let exp = parse(e)?.to_u64()?;
            Number::mod_exp(&parse(a)?, exp, &parse(m)?, &ctx)?
        }
        ("neg", [a]) => parse(a)?.neg(),
        ("abs", [a]) => parse(a)?.abs(),
        _ => return Err(Error::InvalidInput),
    };
    result.to_string_radix(10)
}
