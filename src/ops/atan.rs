//! Arctangent.

use crate::common::consts::ONE;
use crate::defs::Kind;
use crate::defs::RoundingMode;
use crate::num::BigFloat;
use crate::ops::consts::CONSTS;
use crate::ops::series::bisection_count;
use crate::ops::series::series_run;
use crate::ops::series::PolycoeffGen;

// Coefficients -1/3, 1/5, -1/7, ... of the arctangent series.
struct AtanPolycoeffGen {
    one_full_p: BigFloat,
    val: BigFloat,
    k: u64,
    sign: i8,
}

impl AtanPolycoeffGen {
    fn new(p: usize) -> Self {
        AtanPolycoeffGen {
            one_full_p: BigFloat::from_u64_p(1, p),
            val: BigFloat::from_u64_p(1, p),
            k: 1,
            sign: 1,
        }
    }
}

impl PolycoeffGen for AtanPolycoeffGen {
    fn next(&mut self) -> &BigFloat {
        self.k += 2;
        self.sign = -self.sign;
        self.val = self.one_full_p.div(&BigFloat::from_i64(
            self.sign as i64 * self.k as i64,
            1,
            RoundingMode::Nearest,
        ));
        &self.val
    }
}

impl BigFloat {
    /// Computes the arctangent of the number. The arctangent of an infinity
    /// is pi/2 with the sign of the argument.
    pub fn atan(&self) -> Self {
        match self.kind() {
            Kind::Nan => Self::nan(),
            Kind::Zero => self.clone(),
            Kind::Inf => {
                let mut ret = CONSTS
                    .with(|cc| cc.borrow_mut().pi(self.precision(), self.rounding_mode()));
                ret.add_to_exponent(-1);
                ret.set_sign(self.sign());
                ret
            }
            Kind::Normal => {
                let p = self.precision();
                let k = bisection_count(p);
                let wp = p + k + 8;

                let mut x = self.abs().with_prec(wp);

                // atan(x) = 2*atan(x / (1 + sqrt(1 + x^2)))
                for _ in 0..k {
                    x = x.div(&ONE.add(&ONE.add(&x.mul(&x)).sqrt()));
                }

                // atan(x) = x - x^3/3 + x^5/5 - ...
                let acc = x.clone();
                let x_step = x.mul(&x);
                let x_first = x.mul(&x_step);
                let mut polycoeff_gen = AtanPolycoeffGen::new(wp);

                let mut ret = series_run(acc, x_first, x_step, &mut polycoeff_gen);
                ret.add_to_exponent(k as i128);

                ret.set_sign(self.sign());
                ret.set_rounding_mode(self.rounding_mode());
                ret.set_precision(p);
                ret
            }
        }
    }

    /// Computes the four-quadrant arctangent of `self / x`, where `self` is
    /// the ordinate.
    pub fn atan2(&self, x: &Self) -> Self {
        let p = self.precision().max(x.precision());
        let rm = self.rounding_mode();

        if self.kind() == Kind::Nan || x.kind() == Kind::Nan {
            return Self::nan();
        }

        // both arguments infinite leave the direction undefined
        if self.kind() == Kind::Inf && x.kind() == Kind::Inf {
            return Self::nan();
        }

        let pi_at = |prec: usize, rmode| CONSTS.with(|cc| cc.borrow_mut().pi(prec, rmode));

        // the ordinate is zero: 0 for a positive abscissa, pi otherwise
        if self.is_zero() {
            return if x.is_negative() {
                let mut ret = pi_at(p, rm);
                ret.set_sign(self.sign());
                ret
            } else {
                Self::zero_signed(self.sign(), p, rm)
            };
        }

        // the abscissa is zero: the angle is pi/2 with the sign of the ordinate
        if x.is_zero() {
            let mut ret = pi_at(p, rm);
            ret.add_to_exponent(-1);
            ret.set_sign(self.sign());
            return ret;
        }

        // an infinite ordinate dominates: pi/2 with its sign
        if self.kind() == Kind::Inf {
            let mut ret = pi_at(p, rm);
            ret.add_to_exponent(-1);
            ret.set_sign(self.sign());
            return ret;
        }

        // an infinite abscissa gives 0 or pi with the sign of the ordinate
        if x.kind() == Kind::Inf {
            return if x.is_positive() {
                Self::zero_signed(self.sign(), p, rm)
            } else {
                let mut ret = pi_at(p, rm);
                ret.set_sign(self.sign());
                ret
            };
        }

        let wp = p + 8;
        let mut ret = self.with_prec(wp).div(&x.with_prec(wp)).atan();

        // correction in the left half-plane
        if x.is_negative() {
            let mut pi = pi_at(wp, RoundingMode::Nearest);
            pi.set_sign(self.sign());
            ret = ret.add(&pi);
        }

        ret.set_rounding_mode(rm);
        ret.set_precision(p);
        ret
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::Sign;

    #[test]
    fn test_atan() {
        let p = 40;
        let rm = RoundingMode::Nearest;
        let mut eps = BigFloat::from_u64(1, p, rm);

        // special values
        assert!(BigFloat::nan().atan().is_nan());
        assert!(BigFloat::new(p).atan().is_zero());

        let mut pi_half = BigFloat::pi(p + 10);
        pi_half.add_to_exponent(-1);
        let d1 = BigFloat::inf(Sign::Pos).atan();
        eps.set_exponent(-125);
        assert!(d1.sub(&pi_half).abs().cmp(&eps) == Some(-1));
        assert!(BigFloat::inf(Sign::Neg).atan().is_negative());

        // atan is odd
        let d1 = BigFloat::from_f64(0.5, p, rm);
        assert!(d1.atan().cmp(&d1.neg().atan().neg()) == Some(0));

        // atan(1) = pi/4
        let d1 = BigFloat::from_u64(1, p, rm).atan();
        let mut d2 = BigFloat::pi(p + 10);
        d2.add_to_exponent(-2);
        assert!(d1.sub(&d2).abs().cmp(&eps) == Some(-1));

        // atan(tan(x)) = x on (-pi/2, pi/2)
        for f in [0.125f64, 0.5, 1.0, -1.25] {
            let d1 = BigFloat::from_f64(f, p, rm);
            let d2 = d1.tan().atan();
            eps.set_exponent(d1.exponent() - 115);
            assert!(d1.sub(&d2).abs().cmp(&eps) == Some(-1), "{}", f);
        }

        // large arguments approach pi/2
        let d1 = BigFloat::from_f64(1e300, p, rm).atan();
        eps.set_exponent(-120);
        assert!(d1.sub(&pi_half).abs().cmp(&eps) == Some(-1));
    }

    #[test]
    fn test_atan2() {
        let p = 40;
        let rm = RoundingMode::Nearest;
        let mut eps = BigFloat::from_u64(1, p, rm);
        eps.set_exponent(-120);

        let one = BigFloat::from_u64(1, p, rm);
        let zero = BigFloat::new(p);
        let pi = BigFloat::pi(p + 10);
        let mut pi_half = pi.clone();
        pi_half.add_to_exponent(-1);
        let mut pi_quarter = pi.clone();
        pi_quarter.add_to_exponent(-2);

        // axis cases
        assert!(zero.atan2(&one).is_zero());
        assert!(zero.atan2(&one.neg()).sub(&pi).abs().cmp(&eps) == Some(-1));
        assert!(one.atan2(&zero).sub(&pi_half).abs().cmp(&eps) == Some(-1));
        assert!(one.neg().atan2(&zero).add(&pi_half).abs().cmp(&eps) == Some(-1));

        // quadrants
        let d1 = one.atan2(&one);
        assert!(d1.sub(&pi_quarter).abs().cmp(&eps) == Some(-1));
        let d1 = one.atan2(&one.neg());
        let d2 = pi.sub(&pi_quarter);
        assert!(d1.sub(&d2).abs().cmp(&eps) == Some(-1));
        let d1 = one.neg().atan2(&one.neg());
        assert!(d1.add(&d2).abs().cmp(&eps) == Some(-1));

        // infinities
        assert!(one.atan2(&BigFloat::inf(Sign::Pos)).is_zero());
        let d1 = one.atan2(&BigFloat::inf(Sign::Neg));
        assert!(d1.sub(&pi).abs().cmp(&eps) == Some(-1));
        let d1 = BigFloat::inf(Sign::Pos).atan2(&one);
        assert!(d1.sub(&pi_half).abs().cmp(&eps) == Some(-1));
        assert!(BigFloat::inf(Sign::Pos).atan2(&BigFloat::inf(Sign::Neg)).is_nan());

        // antisymmetry: atan2(-y, x) = -atan2(y, x)
        for (fy, fx) in [(1.0f64, 2.0f64), (3.0, -0.5), (0.25, 0.125)] {
            let y = BigFloat::from_f64(fy, p, rm);
            let x = BigFloat::from_f64(fx, p, rm);
            let d1 = y.atan2(&x);
            let d2 = y.neg().atan2(&x);
            assert!(d1.add(&d2).abs().cmp(&eps) == Some(-1), "{} {}", fy, fx);
        }
    }
}
