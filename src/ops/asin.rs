//! Arcsine.

use crate::common::consts::ONE;
use crate::defs::Kind;
use crate::num::BigFloat;
use crate::ops::consts::CONSTS;
use crate::ops::series::bisection_count;
use crate::ops::series::series_run;
use crate::ops::series::PolycoeffGen;

// Coefficients (2k)! / (4^k * (k!)^2 * (2k+1)) of the arcsine series.
struct AsinPolycoeffGen {
    fct: BigFloat,
    k: u64,
}

impl AsinPolycoeffGen {
    fn new(p: usize) -> Self {
        AsinPolycoeffGen {
            fct: BigFloat::from_u64_p(1, p),
            k: 0,
        }
    }
}

impl PolycoeffGen for AsinPolycoeffGen {
    fn next(&mut self) -> &BigFloat {
        self.k += 1;
        let k = self.k;
        // c(k) = c(k-1) * (2k-1)^2 / (2k * (2k+1))
        self.fct = self
            .fct
            .mul(&BigFloat::from_u64_p((2 * k - 1) * (2 * k - 1), 1))
            .div(&BigFloat::from_u64_p(2 * k * (2 * k + 1), 1));
        &self.fct
    }
}

impl BigFloat {
    /// Computes the arcsine of the number. The domain is `[-1, 1]`; values
    /// outside of it give NaN.
    pub fn asin(&self) -> Self {
        match self.kind() {
            Kind::Nan | Kind::Inf => Self::nan(),
            Kind::Zero => self.clone(),
            Kind::Normal => {
                match self.abs().cmp(&ONE) {
                    Some(1) => return Self::nan(),
                    Some(0) => {
                        // asin(1) = pi/2
                        let mut ret = CONSTS.with(|cc| {
                            cc.borrow_mut()
                                .pi(self.precision(), self.rounding_mode())
                        });
                        ret.add_to_exponent(-1);
                        ret.set_sign(self.sign());
                        return ret;
                    }
                    _ => {}
                }

                let p = self.precision();
                let k = bisection_count(p);
                let wp = p + k + 8;

                let sqrt2 = Self::sqrt_2(wp);
                let mut x = self.abs().with_prec(wp);

                // asin(x) = 2*asin(x / (sqrt(2) * sqrt(1 + sqrt(1 - x^2))))
                for _ in 0..k {
                    let t = ONE.sub(&x.mul(&x)).sqrt();
                    x = x.div(&sqrt2.mul(&ONE.add(&t).sqrt()));
                }

                // asin(x) = x + x^3/6 + 3*x^5/40 + ...
                let acc = x.clone();
                let x_step = x.mul(&x);
                let x_first = x.mul(&x_step);
                let mut polycoeff_gen = AsinPolycoeffGen::new(wp);

                let mut ret = series_run(acc, x_first, x_step, &mut polycoeff_gen);
                ret.add_to_exponent(k as i128);

                ret.set_sign(self.sign());
                ret.set_rounding_mode(self.rounding_mode());
                ret.set_precision(p);
                ret
            }
        }
    }
}
