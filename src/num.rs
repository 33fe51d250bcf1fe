use std::fmt::Display;

/// A calculation result, printed with a trailing `.0` for integral values and
/// a signed two digit exponent outside `1e-4..1e16`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return write!(f, "nan");
        }
        if value.is_infinite() {
            return match value.is_sign_positive() {
                true => write!(f, "inf"),
                false => write!(f, "-inf"),
            };
        }

        let magnitude = value.abs();
        if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
            return write_exponent(f, value);
        }

        match value.fract() == 0.0 {
            true => write!(f, "{:.1}", value),
            false => write!(f, "{}", value),
        }
    }
}

fn write_exponent(f: &mut std::fmt::Formatter<'_>, value: f64) -> std::fmt::Result {
    let repr = format!("{:e}", value);
    let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    macro_rules! check {
        ($value:expr, $expected:expr) => {
            assert_eq!(Number($value).to_string(), $expected);
        };
    }

    #[test]
    fn test_integral() {
        check!(5.0, "5.0");
        check!(0.0, "0.0");
        check!(-0.0, "-0.0");
        check!(-12.0, "-12.0");
        check!(123456789012345.0, "123456789012345.0");
    }

    #[test]
    fn test_fractional() {
        check!(0.5, "0.5");
        check!(2.5, "2.5");
        check!(0.1 + 0.2, "0.30000000000000004");
        check!(1.0 / 3.0, "0.3333333333333333");
        check!(0.0001, "0.0001");
    }

    #[test]
    fn test_exponent() {
        check!(1e16, "1e+16");
        check!(1e20, "1e+20");
        check!(-2.5e100, "-2.5e+100");
        check!(0.00001, "1e-05");
        check!(1.5e-5, "1.5e-05");
        check!(1e-300, "1e-300");
    }

    #[test]
    fn test_non_finite() {
        check!(f64::INFINITY, "inf");
        check!(f64::NEG_INFINITY, "-inf");
        check!(f64::NAN, "nan");
    }
}
