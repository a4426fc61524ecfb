//! Inverse hyperbolic sine.

use crate::common::consts::ONE;
use crate::defs::Kind;
use crate::num::BigFloat;

impl BigFloat {
    /// Computes the inverse hyperbolic sine of the number as
    /// `ln(x + sqrt(x^2 + 1))`.
    pub fn asinh(&self) -> Self {
        match self.kind() {
            Kind::Nan => Self::nan(),
            Kind::Inf => self.clone(),
            Kind::Zero => self.clone(),
            Kind::Normal => {
                let p = self.precision();
                let wp = p + 8;

                // work on the magnitude: for negative arguments the direct
                // identity cancels catastrophically
                let x = self.abs().with_prec(wp);
                let mut ret = x.add(&x.mul(&x).add(&ONE).sqrt()).ln();

                ret.set_sign(self.sign());
                ret.set_rounding_mode(self.rounding_mode());
                ret.set_precision(p);
                ret
            }
        }
    }
}
