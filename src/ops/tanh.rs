//! Hyperbolic tangent.

use crate::common::consts::ONE;
use crate::defs::Kind;
use crate::num::BigFloat;

impl BigFloat {
    /// Computes the hyperbolic tangent of the number.
    pub fn tanh(&self) -> Self {
        match self.kind() {
            Kind::Nan => Self::nan(),
            Kind::Inf => {
                let mut ret = Self::from_u64(1, self.precision(), self.rounding_mode());
                ret.set_sign(self.sign());
                ret
            }
            Kind::Zero => self.clone(),
            Kind::Normal => {
                let p = self.precision();
                let wp = p + 8;

                // tanh(x) = (e^(2x) - 1) / (e^(2x) + 1)
                let mut x2 = self.with_prec(wp);
                x2.add_to_exponent(1);
                let t = x2.exp();

                // saturation for large arguments
                if t.is_inf() {
                    let mut ret = Self::from_u64(1, p, self.rounding_mode());
                    ret.set_sign(self.sign());
                    return ret;
                }
                if t.is_zero() {
                    let mut ret = Self::from_u64(1, p, self.rounding_mode());
                    ret.set_sign(self.sign().invert());
                    return ret;
                }

                let mut ret = t.sub(&ONE).div(&t.add(&ONE));
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
    fn test_tanh() {
        let p = 40;
        let rm = RoundingMode::Nearest;
        let mut eps = BigFloat::from_u64(1, p, rm);
        let one = BigFloat::from_u64(1, p, rm);

        // special values
        assert!(BigFloat::nan().tanh().is_nan());
        assert!(BigFloat::inf(Sign::Pos).tanh().to_f64() == 1.0);
        assert!(BigFloat::inf(Sign::Neg).tanh().to_f64() == -1.0);
        assert!(BigFloat::new(p).tanh().is_zero());

        // tanh is odd
        let d1 = BigFloat::from_f64(0.75, p, rm);
        assert!(d1.tanh().cmp(&d1.neg().tanh().neg()) == Some(0));

        // |tanh| < 1
        for f in [0.125f64, 1.0, 5.0, 50.0] {
            let d1 = BigFloat::from_f64(f, p, rm).tanh();
            assert!(d1.cmp(&one) == Some(-1));
            assert!(d1.is_positive());
        }

        // tanh(x) = sinh(x)/cosh(x)
        for f in [0.25f64, 1.5, 3.0] {
            let d1 = BigFloat::from_f64(f, p, rm);
            let d2 = d1.tanh();
            let d3 = d1.sinh().div(&d1.cosh());
            eps.set_exponent(d2.exponent() - 120);
            assert!(d2.sub(&d3).abs().cmp(&eps) == Some(-1), "{}", f);
        }
    }
}
