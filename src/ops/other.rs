//! Rounding to an integer and other auxiliary operations.

use crate::common::consts::ONE;
use crate::common::util::bin_to_dec;
use crate::defs::Exponent;
use crate::defs::Kind;
use crate::num::BigFloat;
use num_bigint::BigInt;
use num_traits::One;

impl BigFloat {
    /// Returns the largest integer less than or equal to the number.
    pub fn floor(&self) -> Self {
        match self.kind() {
            Kind::Nan => Self::nan(),
            Kind::Inf | Kind::Zero => self.clone(),
            Kind::Normal => {
                let int = self.int();
                if self.is_negative() && !self.fract().is_zero() {
                    int.sub(&ONE)
                } else {
                    int
                }
            }
        }
    }

    /// Returns the smallest integer greater than or equal to the number.
    pub fn ceil(&self) -> Self {
        match self.kind() {
            Kind::Nan => Self::nan(),
            Kind::Inf | Kind::Zero => self.clone(),
            Kind::Normal => {
                let int = self.int();
                if self.is_positive() && !self.fract().is_zero() {
                    int.add(&ONE)
                } else {
                    int
                }
            }
        }
    }

    /// Returns the integer part of the number.
    pub fn trunc(&self) -> Self {
        self.int()
    }

    /// Rounds to the nearest integer, breaking halfway cases away from zero.
    pub fn round(&self) -> Self {
        match self.kind() {
            Kind::Nan => Self::nan(),
            Kind::Inf | Kind::Zero => self.clone(),
            Kind::Normal => {
                let b = self.bit_len() as i128;
                let e = self.exponent() as i128;
                let frac_bits = b - 1 - e;

                if frac_bits <= 0 {
                    return self.clone();
                }

                let magnitude = if frac_bits >= b {
                    // |x| < 1 rounds away from zero only from 0.5 upwards
                    if e == -1 {
                        BigInt::one()
                    } else {
                        BigInt::from(0u8)
                    }
                } else {
                    let mut int_m: BigInt = self.significand() >> (frac_bits as usize);
                    let top_frac: BigInt = (self.significand() >> ((frac_bits - 1) as usize))
                        & BigInt::one();
                    if top_frac.is_one() {
                        int_m += 1;
                    }
                    int_m
                };

                let signed = if self.is_negative() {
                    -magnitude
                } else {
                    magnitude
                };
                let mut ret = Self::from_bigint(&signed, self.precision(), self.rounding_mode());
                if ret.is_zero() {
                    ret.set_sign(self.sign());
                }
                ret
            }
        }
    }

    /// Returns the remainder `self - trunc(self/d2) * d2`.
    pub fn fmod(&self, d2: &Self) -> Self {
        let p = self.precision().max(d2.precision());

        if self.kind() == Kind::Nan || d2.kind() == Kind::Nan {
            return Self::nan();
        }

        match (self.kind(), d2.kind()) {
            (Kind::Inf, _) => Self::nan(),
            (_, Kind::Zero) => Self::nan(),
            (_, Kind::Inf) => self.with_prec(p),
            (Kind::Zero, _) => self.with_prec(p),
            _ => {
                // the quotient needs enough digits to hold its integer part
                let ediff = (self.exponent() as i128 - d2.exponent() as i128).max(0) as u64;
                let wp = p + bin_to_dec(ediff) as usize + 4;

                let a = self.with_prec(wp);
                let b = d2.with_prec(wp);

                let q = a.div(&b).trunc();
                let mut ret = a.sub(&q.mul(&b));
                ret.set_precision(p);
                ret
            }
        }
    }

    /// Decomposes the number into its integer and fractional parts.
    pub fn modf(&self) -> (Self, Self) {
        (self.int(), self.fract())
    }

    /// Decomposes the number into a value in `[0.5, 1)` and a power of two,
    /// such that `self = ret.0 * 2^(ret.1)`.
    pub fn frexp(&self) -> (Self, Exponent) {
        match self.kind() {
            Kind::Normal => {
                let mut ret = self.clone();
                ret.set_exponent(-1);
                (ret, self.exponent() + 1)
            }
            _ => (self.clone(), 0),
        }
    }

    /// Multiplies the number by `2^n`.
    pub fn ldexp(&self, n: Exponent) -> Self {
        let mut ret = self.clone();
        ret.add_to_exponent(n as i128);
        ret
    }

    /// Returns the number increased by one unit in the last place of its
    /// decimal precision.
    pub fn succ(&self) -> Self {
        match self.kind() {
            Kind::Nan => Self::nan(),
            Kind::Inf => self.clone(),
            _ => self.add(&self.ulp()),
        }
    }

    /// Returns the number decreased by one unit in the last place of its
    /// decimal precision.
    pub fn pred(&self) -> Self {
        match self.kind() {
            Kind::Nan => Self::nan(),
            Kind::Inf => self.clone(),
            _ => self.sub(&self.ulp()),
        }
    }

    /// Returns the number advanced by one unit in the last place toward `d2`.
    pub fn nextafter(&self, d2: &Self) -> Self {
        if self.kind() == Kind::Nan || d2.kind() == Kind::Nan {
            return Self::nan();
        }
        match self.cmp(d2) {
            Some(-1) => self.succ(),
            Some(1) => self.pred(),
            _ => self.clone(),
        }
    }
}
