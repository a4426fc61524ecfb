//! Square root.

use crate::common::consts::THREE;
use crate::common::util::log2_ceil;
use crate::common::util::prec_bits;
use crate::defs::Exponent;
use crate::defs::Kind;
use crate::defs::Sign;
use crate::num::BigFloat;
use num_bigint::BigInt;
use num_traits::One;

impl BigFloat {
    /// Computes the square root of the number.
    ///
    /// The square root of a negative number is NaN; the square root of a zero
    /// or positive infinity is the argument itself.
    pub fn sqrt(&self) -> Self {
        match self.kind() {
            Kind::Nan => Self::nan(),
            Kind::Zero => self.clone(),
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

                // exact powers of four reduce to exponent halving
                if self.is_pow2_significand() && self.exponent() & 1 == 0 {
                    return Self::from_raw(
                        Sign::Pos,
                        BigInt::one(),
                        self.exponent() as i128 / 2,
                        self.precision(),
                        self.rounding_mode(),
                    );
                }

                let p = self.precision();
                let wp = p + 8;
                let wbits = prec_bits(wp) as Exponent;

                // split the exponent as e = 2*h + r, and scale the operand
                // into [1, 4)
                let e = self.exponent();
                let r = e.rem_euclid(2);
                let h = (e - r) / 2;

                let mut y = self.with_prec(wp);
                y.set_exponent(r);

                // division-free Newton for the reciprocal square root:
                // x <- x * (3 - y*x^2) / 2
                let mut x = Self::from_f64(1.0 / y.to_f64().sqrt(), wp, self.rounding_mode());

                let niter = log2_ceil(wbits as usize) + 2;
                for _ in 0..niter {
                    let yx2 = y.mul(&x).mul(&x);
                    let mut xn = x.mul(&THREE.sub(&yx2));
                    xn.add_to_exponent(-1);

                    let dev = xn.sub(&x);
                    let done =
                        dev.is_zero() || dev.exponent() < xn.exponent() - wbits + 2;
                    x = xn;
                    if done {
                        break;
                    }
                }

                let mut ret = y.mul(&x);
                ret.add_to_exponent(h as i128);
                ret.set_precision(p);
                ret
            }
        }
    }
}
