//! Exponentiation.

use crate::common::consts::ONE;
use crate::common::util::log2_ceil;
use crate::defs::Kind;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::num::BigFloat;
use crate::ops::consts::CONSTS;
use num_integer::Integer;
use num_traits::ToPrimitive;

impl BigFloat {
    /// Computes e to the power of the number.
    ///
    /// Overflowing results become positive infinity, underflowing results
    /// become positive zero.
    pub fn exp(&self) -> Self {
        match self.kind() {
            Kind::Nan => Self::nan(),
            Kind::Inf => {
                if self.is_negative() {
                    Self::zero(self.precision(), self.rounding_mode())
                } else {
                    self.clone()
                }
            }
            Kind::Zero => Self::from_u64(1, self.precision(), self.rounding_mode()),
            Kind::Normal => {
                let p = self.precision();

                // e^(2^63) does not fit the exponent range
                if self.exponent() >= 63 {
                    return if self.is_negative() {
                        Self::zero(p, self.rounding_mode())
                    } else {
                        Self::inf_with(Sign::Pos, p, self.rounding_mode())
                    };
                }

                let wp = p + 8;

                // integer arguments short-circuit to a power of the constant e
                if self.is_int() {
                    // the conversion cannot fail: the value is finite and the
                    // exponent is below 63
                    let n = self.to_bigint().unwrap().to_i64().unwrap_or(i64::MAX);
                    let e_const =
                        CONSTS.with(|cc| cc.borrow_mut().e(wp + 20, RoundingMode::Nearest));
                    let mut ret = e_const.powi(n);
                    ret.set_rounding_mode(self.rounding_mode());
                    ret.set_precision(p);
                    return ret;
                }

                // exp(x) = sinh(x) + sqrt(1 + sinh(x)^2), and
                // exp(-x) = 1/exp(x) to avoid cancellation
                let w = self.abs().with_prec(wp);
                let sh = w.sinh();
                let mut ret = sh.add(&ONE.add(&sh.mul(&sh)).sqrt());

                if self.is_negative() {
                    ret = ret.recip();
                }

                ret.set_rounding_mode(self.rounding_mode());
                ret.set_precision(p);
                ret
            }
        }
    }

    /// Computes the power of the number to the integer `n` by binary
    /// exponentiation.
    pub fn powi(&self, n: i64) -> Self {
        let p = self.precision();
        let rm = self.rounding_mode();

        match self.kind() {
            Kind::Nan => Self::nan(),
            Kind::Zero => {
                if n == 0 {
                    // 0^0
                    Self::nan()
                } else if n > 0 {
                    Self::zero_signed(if n & 1 == 1 { self.sign() } else { Sign::Pos }, p, rm)
                } else {
                    Self::inf_with(if n & 1 == 1 { self.sign() } else { Sign::Pos }, p, rm)
                }
            }
            Kind::Inf => {
                if n == 0 {
                    Self::from_u64(1, p, rm)
                } else {
                    let s = if n & 1 == 1 { self.sign() } else { Sign::Pos };
                    if n > 0 {
                        Self::inf_with(s, p, rm)
                    } else {
                        Self::zero_signed(s, p, rm)
                    }
                }
            }
            Kind::Normal => {
                if n == 0 {
                    return Self::from_u64(1, p, rm);
                }
                if n == 1 {
                    return self.clone();
                }

                let s = if self.is_negative() && n & 1 == 1 {
                    Sign::Neg
                } else {
                    Sign::Pos
                };
                let na = n.unsigned_abs();

                // a pure power of two needs only exponent arithmetic
                if self.is_pow2_significand() {
                    let e = self.exponent() as i128 * n as i128;
                    let mut ret = Self::from_raw(s, num_bigint::BigInt::from(1u8), 0, p, rm);
                    ret.add_to_exponent(e);
                    return ret;
                }

                let wp = p + log2_ceil(na as usize) + 4;

                let mut base = self.abs().with_prec(wp);
                let mut ret = Self::from_u64(1, wp, rm);
                let mut i = na;
                while i > 0 {
                    if i & 1 == 1 {
                        ret = ret.mul(&base);
                    }
                    i >>= 1;
                    if i > 0 {
                        base = base.mul(&base);
                    }
                }

                if n < 0 {
                    ret = ret.recip();
                }

                ret.set_sign(s);
                ret.set_precision(p);
                ret
            }
        }
    }

    /// Computes the power of the number to the exponent `n`.
    ///
    /// A negative base with a non-integer exponent gives NaN, and `0^0` gives
    /// NaN. For an integer exponent the power is computed by binary
    /// exponentiation, otherwise as `exp(n * ln(self))`.
    pub fn pow(&self, n: &Self) -> Self {
        let p = self.precision().max(n.precision());
        let rm = self.rounding_mode();

        if self.kind() == Kind::Nan || n.kind() == Kind::Nan {
            return Self::nan();
        }

        // x^0 = 1, except 0^0 which has no value
        if n.is_zero() {
            return if self.is_zero() {
                Self::nan()
            } else {
                Self::from_u64(1, p, rm)
            };
        }

        // 0^n = 0 for positive n, +Inf for negative n
        if self.is_zero() {
            return if n.is_negative() {
                Self::inf_with(Sign::Pos, p, rm)
            } else {
                Self::zero(p, rm)
            };
        }

        // 1^n = 1 for every n including infinities
        if self.is_one() {
            return Self::from_u64(1, p, rm);
        }

        // x^Inf by comparison of |x| against 1
        if n.kind() == Kind::Inf {
            let mag = self.abs().cmp(&ONE).unwrap_or(0);
            return if mag == 0 {
                Self::from_u64(1, p, rm)
            } else if (mag > 0) == n.is_positive() {
                Self::inf_with(Sign::Pos, p, rm)
            } else {
                Self::zero(p, rm)
            };
        }

        // Inf^n by the sign of n and the parity of an integer n
        if self.kind() == Kind::Inf {
            let odd = n.is_int() && n.to_bigint().map(|v| v.is_odd()).unwrap_or(false);
            let s = if self.is_negative() && odd {
                Sign::Neg
            } else {
                Sign::Pos
            };
            return if n.is_positive() {
                Self::inf_with(s, p, rm)
            } else {
                Self::zero_signed(s, p, rm)
            };
        }

        // integer exponents take the fast path
        if n.is_int() {
            if let Some(i) = n.to_bigint().ok().and_then(|v| v.to_i64()) {
                let mut ret = self.with_prec(p).powi(i);
                ret.set_precision(p);
                return ret;
            }
        }

        // non-integer exponent requires a positive base
        if self.is_negative() {
            return Self::nan();
        }

        let wp = p + 8;
        let x = self.with_prec(wp);
        let mut ret = n.with_prec(wp).mul(&x.ln()).exp();
        ret.set_rounding_mode(rm);
        ret.set_precision(p);
        ret
    }
}
