//! Inverse hyperbolic cosine.

use crate::common::consts::ONE;
use crate::defs::Kind;
use crate::num::BigFloat;

impl BigFloat {
    /// Computes the inverse hyperbolic cosine of the number as
    /// `ln(x + sqrt(x^2 - 1))`. The domain is `x >= 1`; values outside of it
    /// give NaN.
    pub fn acosh(&self) -> Self {
        match self.kind() {
            Kind::Nan | Kind::Zero => Self::nan(),
            Kind::Inf => {
                if self.is_negative() {
                    Self::nan()
                } else {
                    self.clone()
                }
            }
            Kind::Normal => {
                if self.cmp(&ONE) == Some(-1) {
                    return Self::nan();
                }

                let p = self.precision();
                let wp = p + 8;

                let x = self.with_prec(wp);
                let mut ret = x.add(&x.mul(&x).sub(&ONE).sqrt()).ln();

                ret.set_rounding_mode(self.rounding_mode());
                ret.set_precision(p);
                ret
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::RoundingMode;
    use crate::defs::Sign;

    #[test]
    fn test_acosh() {
        let p = 40;
        let rm = RoundingMode::Nearest;
        let mut eps = BigFloat::from_u64(1, p, rm);

        // special values and the domain
        assert!(BigFloat::nan().acosh().is_nan());
        assert!(BigFloat::inf(Sign::Pos).acosh().is_inf_pos());
        assert!(BigFloat::inf(Sign::Neg).acosh().is_nan());
        assert!(BigFloat::new(p).acosh().is_nan());
        assert!(BigFloat::from_f64(0.5, p, rm).acosh().is_nan());
        assert!(BigFloat::from_f64(-2.0, p, rm).acosh().is_nan());

        // acosh(1) = 0
        assert!(BigFloat::from_u64(1, p, rm).acosh().is_zero());

        // acosh(cosh(x)) = x
        for f in [0.5f64, 1.0, 2.25, 8.0] {
            let d1 = BigFloat::from_f64(f, p, rm);
            let d2 = d1.cosh().acosh();
            eps.set_exponent(d1.exponent() - 110);
            assert!(d1.sub(&d2).abs().cmp(&eps) == Some(-1), "{}", f);
        }
    }
}
