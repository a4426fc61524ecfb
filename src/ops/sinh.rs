//! Hyperbolic sine.

use crate::common::consts::FOUR;
use crate::common::consts::THREE;
use crate::defs::Kind;
use crate::num::BigFloat;
use crate::ops::series::series_run;
use crate::ops::series::trisection_count;
use crate::ops::series::PolycoeffGen;

// Coefficients 1/3!, 1/5!, 1/7!, ... of the sinh series.
struct SinhPolycoeffGen {
    fct: BigFloat,
    k: u64,
}

impl SinhPolycoeffGen {
    fn new(p: usize) -> Self {
        SinhPolycoeffGen {
            fct: BigFloat::from_u64_p(1, p),
            k: 1,
        }
    }
}

impl PolycoeffGen for SinhPolycoeffGen {
    fn next(&mut self) -> &BigFloat {
        self.k += 2;
        self.fct = self
            .fct
            .div(&BigFloat::from_u64_p(self.k * (self.k - 1), 1));
        &self.fct
    }
}

impl BigFloat {
    /// Computes the hyperbolic sine of the number.
    pub fn sinh(&self) -> Self {
        match self.kind() {
            Kind::Nan => Self::nan(),
            Kind::Inf => self.clone(),
            Kind::Zero => self.clone(),
            Kind::Normal => {
                let p = self.precision();
                let k = trisection_count(p, self.exponent());
                let wp = p + k + 10;

                let mut x = self.abs().with_prec(wp);

                // trisection of the argument
                for _ in 0..k {
                    x = x.div(&THREE);
                }

                // sinh(x) = x + x^3/3! + x^5/5! + ...
                let acc = x.clone();
                let x_step = x.mul(&x);
                let x_first = x.mul(&x_step);
                let mut polycoeff_gen = SinhPolycoeffGen::new(wp);

                let mut ret = series_run(acc, x_first, x_step, &mut polycoeff_gen);

                // sinh(3*x) = sinh(x) * (3 + 4*sinh(x)^2)
                for _ in 0..k {
                    let sq = ret.mul(&ret);
                    ret = ret.mul(&THREE.add(&FOUR.mul(&sq)));
                }

                ret.set_sign(self.sign());
                ret.set_rounding_mode(self.rounding_mode());
                ret.set_precision(p);
                ret
            }
        }
    }
}
