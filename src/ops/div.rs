//! Reciprocal and division.

use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::common::util::log2_ceil;
use crate::common::util::prec_bits;
use crate::defs::Exponent;
use crate::defs::Kind;
use crate::defs::Sign;
use crate::num::BigFloat;

impl BigFloat {
    /// Returns the reciprocal of the number, computed by Newton iteration.
    ///
    /// `1/NaN` is NaN, `1/0` is positive infinity, and `1/Inf` is positive zero.
    pub fn recip(&self) -> Self {
        match self.kind() {
            Kind::Nan => Self::nan(),
            Kind::Zero => Self::inf_with(Sign::Pos, self.precision(), self.rounding_mode()),
            Kind::Inf => Self::zero(self.precision(), self.rounding_mode()),
            Kind::Normal => {
                let mut ret = self.recip_internal(self.precision() + 2);
                ret.set_precision(self.precision());
                ret
            }
        }
    }

    // Newton iteration for 1/self on a normal operand; the result carries
    // precision `p`.
    pub(crate) fn recip_internal(&self, p: usize) -> Self {
        let wp = p + 8;
        let wbits = prec_bits(wp) as Exponent;

        // the operand scaled into [1, 2)
        let mut v = self.abs().with_prec(wp);
        v.set_exponent(0);

        let mut u = Self::from_f64(1.0 / v.to_f64(), wp, self.rounding_mode());

        // each step roughly doubles the number of correct bits
        let niter = log2_ceil(wbits as usize) + 2;
        for _ in 0..niter {
            let r = TWO.sub(&v.mul(&u));
            u = u.mul(&r);

            let dev = r.sub(&ONE);
            if dev.is_zero() || dev.exponent() < -wbits {
                break;
            }
        }

        u.add_to_exponent(-(self.exponent() as i128));
        u.set_sign(self.sign());
        u.set_precision(p);
        u
    }

    /// Division operation.
    pub fn div(&self, d2: &Self) -> Self {
        let p = self.precision().max(d2.precision());
        let rm = self.rounding_mode();

        if self.kind() == Kind::Nan || d2.kind() == Kind::Nan {
            return Self::nan();
        }

        let s = self.sign().product(d2.sign());

        match (self.kind(), d2.kind()) {
            (Kind::Inf, Kind::Inf) => Self::nan(),
            (Kind::Inf, _) => Self::inf_with(s, p, rm),
            (_, Kind::Inf) => Self::zero_signed(s, p, rm),
            (Kind::Zero, Kind::Zero) => Self::nan(),
            (_, Kind::Zero) => Self::inf_with(s, p, rm),
            (Kind::Zero, _) => Self::zero_signed(s, p, rm),
            _ => {
                // the divisor is an exact power of two: the quotient is a
                // pure exponent adjustment, which also covers the case of
                // both operands being powers of two
                if d2.is_pow2_significand() {
                    let mut ret = self.with_prec(p);
                    ret.set_sign(s);
                    ret.add_to_exponent(-(d2.exponent() as i128));
                    return ret;
                }

                // the dividend is 1
                if self.is_one() {
                    let mut ret = d2.recip_internal(p + 2);
                    ret.set_precision(p);
                    return ret;
                }

                // the divisor is 1
                if d2.is_one() {
                    let mut ret = self.with_prec(p);
                    ret.set_sign(s);
                    return ret;
                }

                let wp = p + 2;
                let inv = d2.recip_internal(wp);
                let mut ret = self.with_prec(wp).mul(&inv);
                ret.set_precision(p);
                ret
            }
        }
    }
}
