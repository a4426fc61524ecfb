//! Hyperbolic cosine.

use crate::common::consts::FOUR;
use crate::common::consts::THREE;
use crate::defs::Kind;
use crate::defs::Sign;
use crate::num::BigFloat;
use crate::ops::series::series_run;
use crate::ops::series::trisection_count;
use crate::ops::series::PolycoeffGen;

// Coefficients 1/2!, 1/4!, 1/6!, ... of the cosh series.
struct CoshPolycoeffGen {
    fct: BigFloat,
    k: u64,
}

impl CoshPolycoeffGen {
    fn new(p: usize) -> Self {
        CoshPolycoeffGen {
            fct: BigFloat::from_u64_p(1, p),
            k: 0,
        }
    }
}

impl PolycoeffGen for CoshPolycoeffGen {
    fn next(&mut self) -> &BigFloat {
        self.k += 2;
        self.fct = self
            .fct
            .div(&BigFloat::from_u64_p(self.k * (self.k - 1), 1));
        &self.fct
    }
}

impl BigFloat {
    /// Computes the hyperbolic cosine of the number.
    pub fn cosh(&self) -> Self {
        match self.kind() {
            Kind::Nan => Self::nan(),
            Kind::Inf => Self::inf_with(Sign::Pos, self.precision(), self.rounding_mode()),
            Kind::Zero => Self::from_u64(1, self.precision(), self.rounding_mode()),
            Kind::Normal => {
                let p = self.precision();
                let k = trisection_count(p, self.exponent());
                let wp = p + k + 10;

                let mut x = self.abs().with_prec(wp);

                for _ in 0..k {
                    x = x.div(&THREE);
                }

                // cosh(x) = 1 + x^2/2! + x^4/4! + ...
                let acc = Self::from_u64_p(1, wp);
                let x_step = x.mul(&x);
                let x_first = x_step.clone();
                let mut polycoeff_gen = CoshPolycoeffGen::new(wp);

                let mut ret = series_run(acc, x_first, x_step, &mut polycoeff_gen);

                // cosh(3*x) = cosh(x) * (4*cosh(x)^2 - 3)
                for _ in 0..k {
                    let sq = ret.mul(&ret);
                    ret = ret.mul(&FOUR.mul(&sq).sub(&THREE));
                }

                ret.set_rounding_mode(self.rounding_mode());
                ret.set_precision(p);
                ret
            }
        }
    }
}
