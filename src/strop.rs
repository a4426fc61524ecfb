//! String formatting of numbers.

use crate::conv::round_dec_digits;
use crate::defs::Kind;
use crate::defs::Radix;
use crate::num::BigFloat;
use core::fmt::Write;

impl BigFloat {
    /// Formats the number using radix `rdx`.
    ///
    /// Decimal output is the canonical scientific form `[-]d.ddd...e±EE`;
    /// NaN, infinities, and zero format as the tokens `nan`, `inf`, `-inf`,
    /// and `0`. Binary and hexadecimal output is the significand digit string
    /// followed by the power-of-two scale.
    pub fn format(&self, rdx: Radix) -> String {
        match self.kind() {
            Kind::Nan => String::from("nan"),
            Kind::Inf => String::from(if self.is_negative() { "-inf" } else { "inf" }),
            Kind::Zero => String::from("0"),
            Kind::Normal => match rdx {
                Radix::Dec => self.format_dec(),
                Radix::Bin | Radix::Hex => {
                    let eff = self.exponent() as i128 - self.bit_len() as i128 + 1;
                    let mut ret = String::new();
                    if self.is_negative() {
                        ret.push('-');
                    }
                    let _ = write!(
                        ret,
                        "{} * 2^{}",
                        self.significand().to_str_radix(rdx as u32),
                        eff
                    );
                    ret
                }
            },
        }
    }

    // Scientific decimal form with up to `precision` significant digits.
    fn format_dec(&self) -> String {
        let (digits, dec_exp) = self.convert_to_dec();

        let mut ret = String::with_capacity(digits.len() + 8);
        if self.is_negative() {
            ret.push('-');
        }

        ret.push((b'0' + digits[0]) as char);
        if digits.len() > 1 {
            ret.push('.');
            for &d in &digits[1..] {
                ret.push((b'0' + d) as char);
            }
        }

        push_exp(&mut ret, dec_exp);
        ret
    }

    /// Formats the number with exactly `n` digits after the decimal point,
    /// rounding ties away from zero.
    pub fn to_fixed(&self, n: usize) -> String {
        match self.kind() {
            Kind::Nan => String::from("nan"),
            Kind::Inf => String::from(if self.is_negative() { "-inf" } else { "inf" }),
            Kind::Zero => zero_fixed(n),
            Kind::Normal => {
                let (mut digits, e) = self.convert_to_dec();
                let mut dec_exp = e as i128;

                // number of digits left of the rounding position
                let keep = dec_exp + n as i128 + 1;

                if keep < 0 {
                    digits.clear();
                } else if keep == 0 {
                    if digits[0] >= 5 {
                        digits.clear();
                        digits.push(1);
                        dec_exp = -(n as i128);
                    } else {
                        digits.clear();
                    }
                } else if round_dec_digits(&mut digits, keep as usize) {
                    dec_exp += 1;
                }

                if digits.is_empty() {
                    let mut ret = zero_fixed(n);
                    if self.is_negative() {
                        ret.insert(0, '-');
                    }
                    return ret;
                }

                let digit_at = |pos: i128| -> char {
                    let idx = dec_exp - pos;
                    if idx >= 0 && (idx as usize) < digits.len() {
                        (b'0' + digits[idx as usize]) as char
                    } else {
                        '0'
                    }
                };

                let mut ret = String::new();
                if self.is_negative() {
                    ret.push('-');
                }

                if dec_exp < 0 {
                    ret.push('0');
                } else {
                    let mut pos = dec_exp;
                    while pos >= 0 {
                        ret.push(digit_at(pos));
                        pos -= 1;
                    }
                }

                if n > 0 {
                    ret.push('.');
                    for i in 1..=n as i128 {
                        ret.push(digit_at(-i));
                    }
                }

                ret
            }
        }
    }

    /// Formats the number in scientific form with exactly `n` digits after
    /// the decimal point of the mantissa.
    pub fn to_exponential(&self, n: usize) -> String {
        match self.kind() {
            Kind::Nan => String::from("nan"),
            Kind::Inf => String::from(if self.is_negative() { "-inf" } else { "inf" }),
            Kind::Zero => {
                let mut ret = zero_fixed(n);
                ret.push_str("e+0");
                ret
            }
            Kind::Normal => {
                let (mut digits, e) = self.convert_to_dec();
                let mut dec_exp = e;

                if round_dec_digits(&mut digits, n + 1) {
                    dec_exp += 1;
                }

                let mut ret = String::with_capacity(n + 8);
                if self.is_negative() {
                    ret.push('-');
                }

                ret.push((b'0' + digits[0]) as char);
                if n > 0 {
                    ret.push('.');
                    for i in 1..=n {
                        let d = if i < digits.len() { digits[i] } else { 0 };
                        ret.push((b'0' + d) as char);
                    }
                }

                push_exp(&mut ret, dec_exp);
                ret
            }
        }
    }

    /// Formats the number with `n` significant digits, choosing between the
    /// fixed and the scientific form by the decimal exponent.
    pub fn to_precision(&self, n: usize) -> String {
        let n = n.max(1);
        match self.kind() {
            Kind::Nan => String::from("nan"),
            Kind::Inf => String::from(if self.is_negative() { "-inf" } else { "inf" }),
            Kind::Zero => zero_fixed(n - 1),
            Kind::Normal => {
                let (_, dec_exp) = self.convert_to_dec();

                if dec_exp < -6 || dec_exp >= n as i64 {
                    self.to_exponential(n - 1)
                } else {
                    self.to_fixed((n as i64 - dec_exp - 1) as usize)
                }
            }
        }
    }
}

// "0", or "0.000...0" with n places.
fn zero_fixed(n: usize) -> String {
    let mut ret = String::with_capacity(n + 2);
    ret.push('0');
    if n > 0 {
        ret.push('.');
        for _ in 0..n {
            ret.push('0');
        }
    }
    ret
}

fn push_exp(ret: &mut String, dec_exp: i64) {
    let _ = if dec_exp < 0 {
        write!(ret, "e-{}", -(dec_exp as i128))
    } else {
        write!(ret, "e+{}", dec_exp)
    };
}

impl core::fmt::Display for BigFloat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.format(Radix::Dec))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::RoundingMode;
    use crate::defs::Sign;
    use itertools::izip;

    #[test]
    fn test_format() {
        let p = 40;
        let rm = RoundingMode::Nearest;

        // special tokens
        assert_eq!(BigFloat::nan().format(Radix::Dec), "nan");
        assert_eq!(BigFloat::inf(Sign::Pos).format(Radix::Dec), "inf");
        assert_eq!(BigFloat::inf(Sign::Neg).format(Radix::Dec), "-inf");
        assert_eq!(BigFloat::new(p).format(Radix::Dec), "0");

        // canonical scientific form
        let inputs = ["1", "-12345", "0.5", "1.25e2", "0.03125", "-1e-3"];
        let outputs = ["1e+0", "-1.2345e+4", "5e-1", "1.25e+2", "3.125e-2", "-1e-3"];
        for (i, o) in izip!(inputs, outputs) {
            let d1 = BigFloat::parse(i, p, rm);
            assert_eq!(d1.format(Radix::Dec), o, "{}", i);
        }

        // Display matches format
        let d1 = BigFloat::parse("-12345", p, rm);
        assert_eq!(format!("{}", d1), "-1.2345e+4");

        // binary and hexadecimal output
        let d1 = BigFloat::from_u64(10, p, rm);
        assert_eq!(d1.format(Radix::Bin), "1010 * 2^0");
        let d1 = BigFloat::from_u64(255, p, rm);
        assert_eq!(d1.format(Radix::Hex), "ff * 2^0");
        let d1 = BigFloat::from_f64(0.5, p, rm);
        assert_eq!(d1.format(Radix::Bin), "1 * 2^-1");
    }

    #[test]
    fn test_to_fixed() {
        let p = 40;
        let rm = RoundingMode::Nearest;

        let cases = [
            ("1.25", 1, "1.3"),
            ("1.25", 3, "1.250"),
            ("1.25", 0, "1"),
            ("-1.25", 1, "-1.3"),
            ("12345", 2, "12345.00"),
            ("0.0625", 2, "0.06"),
            ("0.0625", 4, "0.0625"),
            ("0.04", 1, "0.0"),
            ("0.06", 1, "0.1"),
            ("0.004", 1, "0.0"),
            ("9.9375", 1, "9.9"),
            ("9.96875", 1, "10.0"),
            ("2.5", 0, "3"),
            ("0.5", 0, "1"),
            ("-0.5", 0, "-1"),
            ("123.456", 2, "123.46"),
        ];
        for (i, n, o) in cases {
            let d1 = BigFloat::parse(i, p, rm);
            assert_eq!(d1.to_fixed(n), o, "{} fixed {}", i, n);
        }

        assert_eq!(BigFloat::new(p).to_fixed(3), "0.000");
        assert_eq!(BigFloat::new(p).to_fixed(0), "0");
        assert_eq!(BigFloat::nan().to_fixed(2), "nan");
        assert_eq!(BigFloat::inf(Sign::Neg).to_fixed(2), "-inf");
    }

    #[test]
    fn test_to_exponential() {
        let p = 40;
        let rm = RoundingMode::Nearest;

        let cases = [
            ("1.25", 3, "1.250e+0"),
            ("1.25", 1, "1.3e+0"),
            ("1.25", 0, "1e+0"),
            ("-12345", 2, "-1.23e+4"),
            ("0.0625", 2, "6.25e-2"),
            ("99.5", 1, "1.0e+2"),
            ("0.001", 4, "1.0000e-3"),
        ];
        for (i, n, o) in cases {
            let d1 = BigFloat::parse(i, p, rm);
            assert_eq!(d1.to_exponential(n), o, "{} exp {}", i, n);
        }

        assert_eq!(BigFloat::new(p).to_exponential(2), "0.00e+0");
    }

    #[test]
    fn test_to_precision() {
        let p = 40;
        let rm = RoundingMode::Nearest;

        let cases = [
            ("123.456", 4, "123.5"),
            ("123.456", 2, "1.2e+2"),
            ("123.456", 6, "123.456"),
            ("0.000012345", 3, "0.0000123"),
            ("0.00000012345", 3, "1.23e-7"),
            ("0.00012345", 3, "0.000123"),
            ("12345", 5, "12345"),
            ("12345", 7, "12345.00"),
            ("-1.5", 2, "-1.5"),
        ];
        for (i, n, o) in cases {
            let d1 = BigFloat::parse(i, p, rm);
            assert_eq!(d1.to_precision(n), o, "{} prec {}", i, n);
        }

        assert_eq!(BigFloat::new(p).to_precision(3), "0.00");
    }

    #[test]
    fn test_round_trip() {
        use rand::random;

        let p = 40;
        let rm = RoundingMode::Nearest;

        // parsing the canonical rendering back recovers the value up to the
        // last digit of the decimal precision, and the rendering itself is
        // stable from then on
        let mut eps = BigFloat::from_u64(1, p, rm);
        for _ in 0..1000 {
            let mut f: f64 = random();
            f = f.powi(random::<i32>().abs() % 200 + 1);
            if f == 0.0 || !f.is_finite() {
                continue;
            }
            if random::<u8>() & 1 == 0 {
                f = -f;
            }

            let d1 = BigFloat::from_f64(f, p, rm);
            let s1 = d1.format(Radix::Dec);
            let d2 = BigFloat::parse(&s1, p, rm);

            eps.set_exponent(d1.exponent() - 128);
            assert!(d1.sub(&d2).abs().cmp(&eps) == Some(-1), "{} {}", f, s1);
            assert_eq!(s1, d2.format(Radix::Dec), "{}", f);
        }
    }
}
