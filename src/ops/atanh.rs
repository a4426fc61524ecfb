//! Inverse hyperbolic tangent.

use crate::common::consts::ONE;
use crate::defs::Kind;
use crate::num::BigFloat;

impl BigFloat {
    /// Computes the inverse hyperbolic tangent of the number as
    /// `ln((1 + x)/(1 - x)) / 2`. The domain is `|x| < 1`; values outside of
    /// it give NaN, and `x = 1` or `x = -1` give a signed infinity.
    pub fn atanh(&self) -> Self {
        match self.kind() {
            Kind::Nan | Kind::Inf => Self::nan(),
            Kind::Zero => self.clone(),
            Kind::Normal => {
                match self.abs().cmp(&ONE) {
                    Some(1) => return Self::nan(),
                    Some(0) => {
                        return Self::inf_with(self.sign(), self.precision(), self.rounding_mode())
                    }
                    _ => {}
                }

                let p = self.precision();
                let wp = p + 8;

                let x = self.with_prec(wp);
                let mut ret = ONE.add(&x).div(&ONE.sub(&x)).ln();
                ret.add_to_exponent(-1);

                ret.set_rounding_mode(self.rounding_mode());
                ret.set_precision(p);
                ret
            }
        }
    }
}
