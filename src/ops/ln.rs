//! Natural logarithm.

use crate::common::consts::ONE;
use crate::common::util::log2_ceil;
use crate::defs::Kind;
use crate::defs::RoundingMode;
use crate::num::BigFloat;
use crate::ops::consts::CONSTS;
use crate::ops::series::series_run;
use crate::ops::series::PolycoeffGen;

// Coefficients 1/3, 1/5, 1/7, ... of the atanh series.
struct AtanhPolycoeffGen {
    one_full_p: BigFloat,
    val: BigFloat,
    k: u64,
}

impl AtanhPolycoeffGen {
    fn new(p: usize) -> Self {
        AtanhPolycoeffGen {
            one_full_p: BigFloat::from_u64_p(1, p),
            val: BigFloat::from_u64_p(1, p),
            k: 1,
        }
    }
}

impl PolycoeffGen for AtanhPolycoeffGen {
    fn next(&mut self) -> &BigFloat {
        self.k += 2;
        self.val = self.one_full_p.div(&BigFloat::from_u64_p(self.k, 1));
        &self.val
    }
}

impl BigFloat {
    /// Computes the natural logarithm of the number.
    ///
    /// The logarithm of a zero or negative number is NaN, and the logarithm
    /// of positive infinity is positive infinity.
    pub fn ln(&self) -> Self {
        match self.kind() {
            Kind::Nan => Self::nan(),
            Kind::Zero => Self::nan(),
            Kind::Inf => {
                if self.is_negative() {
                    Self::nan()
                } else {
                    self.clone()
                }
            }
            Kind::Normal => {
                if self.is_negative() {
                    return Self::nan();
                }

                let p = self.precision();
                let e = self.exponent();

                // factoring: ln(m * 2^e) = ln(m) + e*ln(2), 1 <= m < 2
                // reduction: ln(m) = 2*ln(sqrt(m))
                // replacement: ln(m) = 2*atanh((m-1)/(m+1))
                // atanh(x) = x + x^3/3 + x^5/5 + ...

                // square root the mantissa until it is within 0.001 of 1
                let mf = {
                    let mut t = self.clone();
                    t.set_exponent(0);
                    t.to_f64()
                };
                let k = if mf <= 1.001 {
                    0
                } else {
                    (mf.ln() / 1.001f64.ln()).log2().ceil() as usize
                };

                let wp = p + k + log2_ceil(p.max(2)) + 6;

                let mut w = self.with_prec(wp);
                w.set_exponent(0);
                for _ in 0..k {
                    w = w.sqrt();
                }

                let z = w.sub(&ONE).div(&w.add(&ONE));

                let x_step = z.mul(&z);
                let x_first = z.mul(&x_step);
                let mut polycoeff_gen = AtanhPolycoeffGen::new(wp);

                let mut ret = series_run(z, x_first, x_step, &mut polycoeff_gen);
                ret.add_to_exponent(k as i128 + 1);

                if e != 0 {
                    let p2 = CONSTS.with(|cc| cc.borrow_mut().ln_2(wp, RoundingMode::Nearest));
                    let n = Self::from_i64(e, wp, self.rounding_mode());
                    ret = ret.add(&p2.mul(&n));
                }

                ret.set_rounding_mode(self.rounding_mode());
                ret.set_precision(p);
                ret
            }
        }
    }

    /// Alias of [`BigFloat::ln`].
    pub fn log(&self) -> Self {
        self.ln()
    }

    /// Computes the decimal logarithm of the number as ln(x) / ln(10).
    pub fn log10(&self) -> Self {
        match self.kind() {
            Kind::Nan | Kind::Zero => Self::nan(),
            _ => {
                if self.is_negative() {
                    return Self::nan();
                }

                let p = self.precision();
                let wp = p + 4;
                let l = self.with_prec(wp).ln();
                if !l.is_finite() {
                    return l;
                }
                let ln10 = CONSTS.with(|cc| cc.borrow_mut().ln_10(wp, RoundingMode::Nearest));
                let mut ret = l.div(&ln10);
                ret.set_rounding_mode(self.rounding_mode());
                ret.set_precision(p);
                ret
            }
        }
    }
}
