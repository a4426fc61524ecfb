//! BigFloat definition and basic arithmetic, comparison, and number manipulation operations.

use crate::common::util::bin_to_dec;
use crate::common::util::prec_bits;
use crate::ctx;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Kind;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::defs::EXPONENT_MAX;
use crate::defs::EXPONENT_MIN;
use core::num::FpCategory;
use num_bigint::BigInt;
use num_bigint::Sign as IntSign;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// BigFloat represents a floating point number with an arbitrary precision
/// significand held in a big integer, a binary exponent, a sign, and the
/// decimal precision and rounding mode the value was created with.
///
/// A normal value equals `sign * significand * 2^(exponent - bit_len + 1)`,
/// i.e. `exponent` is the binary exponent of the most significant bit of the
/// significand.
#[derive(Debug, Clone)]
pub struct BigFloat {
    kind: Kind,
    s: Sign,
    m: BigInt,
    e: Exponent,
    p: usize,
    rm: RoundingMode,
}

/// Low-level operations on a number.
impl BigFloat {
    /// Returns a new number with the value of 0, precision `p`, and the
    /// default rounding mode.
    pub fn new(p: usize) -> Self {
        Self::zero(p.max(1), ctx::default_rounding_mode())
    }

    /// Returns a NaN value. By convention NaN carries a positive sign.
    pub fn nan() -> Self {
        BigFloat {
            kind: Kind::Nan,
            s: Sign::Pos,
            m: BigInt::zero(),
            e: 0,
            p: ctx::default_precision(),
            rm: ctx::default_rounding_mode(),
        }
    }

    /// Returns an infinity with sign `s`.
    pub fn inf(s: Sign) -> Self {
        Self::inf_with(s, ctx::default_precision(), ctx::default_rounding_mode())
    }

    pub(crate) fn inf_with(s: Sign, p: usize, rm: RoundingMode) -> Self {
        BigFloat {
            kind: Kind::Inf,
            s,
            m: BigInt::zero(),
            e: 0,
            p,
            rm,
        }
    }

    pub(crate) fn zero(p: usize, rm: RoundingMode) -> Self {
        BigFloat {
            kind: Kind::Zero,
            s: Sign::Pos,
            m: BigInt::zero(),
            e: 0,
            p,
            rm,
        }
    }

    pub(crate) fn zero_signed(s: Sign, p: usize, rm: RoundingMode) -> Self {
        let mut ret = Self::zero(p, rm);
        ret.s = s;
        ret
    }

    /// Constructs a number from the sign `s`, the non-negative significand
    /// `m`, and the binary exponent `e` of the most significant bit of `m`,
    /// rounding the significand to precision `p` with rounding mode `rm`.
    ///
    /// A magnitude too large for the exponent range becomes an infinity, and
    /// a magnitude too small becomes a signed zero.
    pub(crate) fn from_raw(s: Sign, mut m: BigInt, mut e: i128, p: usize, rm: RoundingMode) -> Self {
        debug_assert!(m.sign() != IntSign::Minus);

        if m.is_zero() {
            return Self::zero(p, rm);
        }

        Self::round_significand(&mut m, &mut e, p, rm, s);

        if e > EXPONENT_MAX as i128 {
            return Self::inf_with(s, p, rm);
        }
        if e < EXPONENT_MIN as i128 {
            return Self::zero_signed(s, p, rm);
        }

        BigFloat {
            kind: Kind::Normal,
            s,
            m,
            e: e as Exponent,
            p,
            rm,
        }
    }

    // Reduce the significand to the binary working width of precision `p`.
    // The exponent of the leading bit only moves when rounding up grows the
    // bit length.
    fn round_significand(m: &mut BigInt, e: &mut i128, p: usize, rm: RoundingMode, s: Sign) {
        let w = prec_bits(p);
        let b = m.bits();
        if b <= w {
            return;
        }

        let d = (b - w) as usize;
        let q: BigInt = &*m >> d;
        let dropped: BigInt = &*m - (&q << d);
        *m = q;

        let round_up = match rm {
            RoundingMode::Nearest => (&dropped >> (d - 1)).is_one(),
            RoundingMode::Up => s == Sign::Pos && !dropped.is_zero(),
            RoundingMode::Down => s == Sign::Neg && !dropped.is_zero(),
            RoundingMode::ToZero => false,
        };

        if round_up {
            *m += 1;
            if m.bits() > w {
                // carry through: the significand became 2^w
                *m >>= 1;
                *e += 1;
            }
        }
    }

    /// Constructs a number with precision `p` from an f64 value, rounded with `rm`.
    pub fn from_f64(f: f64, p: usize, rm: RoundingMode) -> Self {
        let p = p.max(1);
        if f.is_nan() {
            let mut ret = Self::nan();
            ret.p = p;
            ret.rm = rm;
            return ret;
        }
        if f.is_infinite() {
            return Self::inf_with(if f < 0.0 { Sign::Neg } else { Sign::Pos }, p, rm);
        }
        if f == 0.0 {
            return Self::zero_signed(
                if f.is_sign_negative() { Sign::Neg } else { Sign::Pos },
                p,
                rm,
            );
        }

        let u = f.to_bits();
        let s = if u >> 63 != 0 { Sign::Neg } else { Sign::Pos };
        let biased = ((u >> 52) & 0x7ff) as i128;
        let frac = u & 0xf_ffff_ffff_ffff;

        let (m, e) = if biased != 0 {
            // normal: implicit leading bit at position 52
            (BigInt::from(frac | (1u64 << 52)), biased - 1023)
        } else {
            // subnormal: value is frac * 2^-1074
            let b = 64 - frac.leading_zeros() as i128;
            (BigInt::from(frac), b - 1 - 1074)
        };

        Self::from_raw(s, m, e, p, rm)
    }

    /// Constructs a number with precision `p` from a big integer, rounded with `rm`.
    pub fn from_bigint(i: &BigInt, p: usize, rm: RoundingMode) -> Self {
        let s = if i.sign() == IntSign::Minus {
            Sign::Neg
        } else {
            Sign::Pos
        };
        let m = i.abs();
        let e = m.bits() as i128 - 1;
        Self::from_raw(s, m, e, p.max(1), rm)
    }

    /// Constructs a number with precision `p` from an i64 value, rounded with `rm`.
    pub fn from_i64(i: i64, p: usize, rm: RoundingMode) -> Self {
        Self::from_bigint(&BigInt::from(i), p, rm)
    }

    /// Constructs a number with precision `p` from a u64 value, rounded with `rm`.
    pub fn from_u64(u: u64, p: usize, rm: RoundingMode) -> Self {
        Self::from_bigint(&BigInt::from(u), p, rm)
    }

    // Small positive constant at precision `p` with the default tie rounding.
    pub(crate) fn from_u64_p(u: u64, p: usize) -> Self {
        Self::from_u64(u, p, RoundingMode::Nearest)
    }

    /// Converts the number to an f64 value. Magnitudes outside of the f64
    /// range clamp to infinity or zero of the matching sign.
    pub fn to_f64(&self) -> f64 {
        match self.kind {
            Kind::Nan => f64::NAN,
            Kind::Inf => match self.s {
                Sign::Pos => f64::INFINITY,
                Sign::Neg => f64::NEG_INFINITY,
            },
            Kind::Zero => match self.s {
                Sign::Pos => 0.0,
                Sign::Neg => -0.0,
            },
            Kind::Normal => {
                let b = self.bit_len();
                let (top, shift) = if b > 64 {
                    let t: BigInt = &self.m >> ((b - 64) as usize);
                    (t.to_u64().unwrap_or(u64::MAX), self.e as i128 - 63)
                } else {
                    (
                        self.m.to_u64().unwrap_or(u64::MAX),
                        self.e as i128 - b as i128 + 1,
                    )
                };
                let shift = shift.clamp(-1200, 1200) as i32;
                let f = top as f64 * 2f64.powi(shift);
                match self.s {
                    Sign::Pos => f,
                    Sign::Neg => -f,
                }
            }
        }
    }

    /// Converts the number to a big integer, truncating the fractional part.
    ///
    /// ## Errors
    ///
    ///  - NotFinite: the value is NaN or infinite.
    pub fn to_bigint(&self) -> Result<BigInt, Error> {
        match self.kind {
            Kind::Nan | Kind::Inf => Err(Error::NotFinite),
            Kind::Zero => Ok(BigInt::zero()),
            Kind::Normal => {
                let frac_bits = self.bit_len() as i128 - 1 - self.e as i128;
                let magnitude = if frac_bits <= 0 {
                    &self.m << ((-frac_bits) as usize)
                } else if frac_bits >= self.bit_len() as i128 {
                    BigInt::zero()
                } else {
                    &self.m >> (frac_bits as usize)
                };
                Ok(match self.s {
                    Sign::Pos => magnitude,
                    Sign::Neg => -magnitude,
                })
            }
        }
    }

    /// Returns the sign of the number.
    pub fn sign(&self) -> Sign {
        self.s
    }

    /// Returns true if the number is positive.
    pub fn is_positive(&self) -> bool {
        self.s == Sign::Pos
    }

    /// Returns true if the number is negative.
    pub fn is_negative(&self) -> bool {
        self.s == Sign::Neg
    }

    /// Returns the binary exponent of the most significant bit of the significand.
    pub fn exponent(&self) -> Exponent {
        self.e
    }

    /// Returns the decimal precision of the number in digits.
    pub fn precision(&self) -> usize {
        self.p
    }

    /// Returns the rounding mode of the number.
    pub fn rounding_mode(&self) -> RoundingMode {
        self.rm
    }

    /// Returns the bit length of the significand.
    pub fn bit_len(&self) -> u64 {
        self.m.bits()
    }

    /// Returns a reference to the significand of the number.
    pub fn significand(&self) -> &BigInt {
        &self.m
    }

    // Kind of the value.
    pub(crate) fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns true if the number is NaN.
    pub fn is_nan(&self) -> bool {
        self.kind == Kind::Nan
    }

    /// Returns true if the number is infinite.
    pub fn is_inf(&self) -> bool {
        self.kind == Kind::Inf
    }

    /// Returns true if the number is positive infinity.
    pub fn is_inf_pos(&self) -> bool {
        self.kind == Kind::Inf && self.s == Sign::Pos
    }

    /// Returns true if the number is negative infinity.
    pub fn is_inf_neg(&self) -> bool {
        self.kind == Kind::Inf && self.s == Sign::Neg
    }

    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        self.kind == Kind::Zero
    }

    /// Returns true if the number is finite, i.e. zero or normal.
    pub fn is_finite(&self) -> bool {
        matches!(self.kind, Kind::Zero | Kind::Normal)
    }

    /// Returns the floating point category of the number.
    pub fn classify(&self) -> FpCategory {
        match self.kind {
            Kind::Nan => FpCategory::Nan,
            Kind::Inf => FpCategory::Infinite,
            Kind::Zero => FpCategory::Zero,
            Kind::Normal => FpCategory::Normal,
        }
    }

    /// Returns true if the number is an integer.
    pub fn is_int(&self) -> bool {
        match self.kind {
            Kind::Zero => true,
            Kind::Nan | Kind::Inf => false,
            Kind::Normal => {
                let frac_bits = self.bit_len() as i128 - 1 - self.e as i128;
                if frac_bits <= 0 {
                    true
                } else if frac_bits >= self.bit_len() as i128 {
                    false
                } else {
                    let mask: BigInt = (BigInt::one() << (frac_bits as usize)) - 1;
                    (&self.m & &mask).is_zero()
                }
            }
        }
    }

    /// Sets the binary exponent of the number.
    pub fn set_exponent(&mut self, e: Exponent) {
        self.e = e;
    }

    /// Sets the sign of the number.
    pub fn set_sign(&mut self, s: Sign) {
        self.s = s;
    }

    /// Reverses the sign of the number. NaN is unaffected.
    pub fn inv_sign(&mut self) {
        if self.kind != Kind::Nan {
            self.s = self.s.invert();
        }
    }

    /// Sets the decimal precision of the number to `p` digits, rounding the
    /// significand with the number's rounding mode if `p` is smaller than the
    /// current precision.
    pub fn set_precision(&mut self, p: usize) {
        let p = p.max(1);
        self.p = p;
        if self.kind == Kind::Normal {
            let mut e = self.e as i128;
            Self::round_significand(&mut self.m, &mut e, p, self.rm, self.s);
            if e > EXPONENT_MAX as i128 {
                *self = Self::inf_with(self.s, p, self.rm);
            } else {
                self.e = e as Exponent;
            }
        }
    }

    /// Sets the rounding mode of the number.
    pub fn set_rounding_mode(&mut self, rm: RoundingMode) {
        self.rm = rm;
    }

    // A copy with precision `p`; used to raise the working precision of
    // intermediate values.
    pub(crate) fn with_prec(&self, p: usize) -> Self {
        let mut ret = self.clone();
        ret.set_precision(p);
        ret
    }

    /// Returns the negation of the number.
    pub fn neg(&self) -> Self {
        let mut ret = self.clone();
        ret.inv_sign();
        ret
    }

    /// Returns the absolute value of the number.
    pub fn abs(&self) -> Self {
        let mut ret = self.clone();
        if ret.kind != Kind::Nan {
            ret.s = Sign::Pos;
        }
        ret
    }

    /// Returns 1 or -1 with the sign of `self`, a zero for zero, and NaN for NaN.
    pub fn signum(&self) -> Self {
        match self.kind {
            Kind::Nan => Self::nan(),
            Kind::Zero => self.clone(),
            _ => {
                let mut ret = Self::from_u64(1, self.p, self.rm);
                ret.s = self.s;
                ret
            }
        }
    }

    // Binary exponent of the least significant bit of the significand.
    pub(crate) fn eff_exp(&self) -> i128 {
        self.e as i128 - self.bit_len() as i128 + 1
    }

    // The significand with the sign applied.
    fn signed_significand(&self) -> BigInt {
        match self.s {
            Sign::Pos => self.m.clone(),
            Sign::Neg => -self.m.clone(),
        }
    }

    /// Summation operation.
    pub fn add(&self, d2: &Self) -> Self {
        self.add_sub(d2, 1)
    }

    /// Subtraction operation.
    pub fn sub(&self, d2: &Self) -> Self {
        self.add_sub(d2, -1)
    }

    // Combined add and sub operations. `op` < 0 subtracts d2 from self.
    fn add_sub(&self, d2: &Self, op: i8) -> Self {
        let p = self.p.max(d2.p);
        let rm = self.rm;

        if self.kind == Kind::Nan || d2.kind == Kind::Nan {
            return Self::nan();
        }

        let s2 = if op < 0 { d2.s.invert() } else { d2.s };

        match (self.kind, d2.kind) {
            (Kind::Inf, Kind::Inf) => {
                if self.s == s2 {
                    Self::inf_with(self.s, p, rm)
                } else {
                    Self::nan()
                }
            }
            (Kind::Inf, _) => Self::inf_with(self.s, p, rm),
            (_, Kind::Inf) => Self::inf_with(s2, p, rm),
            (Kind::Zero, Kind::Zero) => Self::zero(p, rm),
            (Kind::Zero, _) => {
                let mut ret = d2.with_prec(p);
                ret.s = s2;
                ret.rm = rm;
                ret
            }
            (_, Kind::Zero) => self.with_prec(p),
            _ => {
                let ea = self.eff_exp();
                let eb = d2.eff_exp();
                let common = ea.min(eb);

                let mut m1 = self.signed_significand();
                if ea > common {
                    m1 <<= (ea - common) as usize;
                }
                let mut m2 = d2.signed_significand();
                if op < 0 {
                    m2 = -m2;
                }
                if eb > common {
                    m2 <<= (eb - common) as usize;
                }

                let sum = m1 + m2;
                if sum.is_zero() {
                    return Self::zero(p, rm);
                }

                let s = if sum.sign() == IntSign::Minus {
                    Sign::Neg
                } else {
                    Sign::Pos
                };
                let m = sum.abs();
                let e = common + m.bits() as i128 - 1;

                Self::from_raw(s, m, e, p, rm)
            }
        }
    }

    /// Multiplication operation.
    pub fn mul(&self, d2: &Self) -> Self {
        self.mul_unrounded(d2, self.p.max(d2.p))
    }

    // Multiplication that rounds the product to precision `p`. Used directly
    // by `fma` with an elevated `p` to keep the full product.
    pub(crate) fn mul_unrounded(&self, d2: &Self, p: usize) -> Self {
        let rm = self.rm;

        if self.kind == Kind::Nan || d2.kind == Kind::Nan {
            return Self::nan();
        }

        let s = self.s.product(d2.s);

        match (self.kind, d2.kind) {
            (Kind::Inf, Kind::Zero) | (Kind::Zero, Kind::Inf) => Self::nan(),
            (Kind::Inf, _) | (_, Kind::Inf) => Self::inf_with(s, p, rm),
            (Kind::Zero, _) | (_, Kind::Zero) => Self::zero(p, rm),
            _ => {
                let b1 = self.bit_len();
                let b2 = d2.bit_len();

                let m = &self.m * &d2.m;

                // the product of two values in [1, 2) lands in [1, 4) and may
                // cross the 2-boundary
                let mut e = self.e as i128 + d2.e as i128;
                if m.bits() == b1 + b2 {
                    e += 1;
                }

                Self::from_raw(s, m, e, p, rm)
            }
        }
    }

    /// Fused multiply-add: `self * d2 + d3` with the product kept unrounded.
    pub fn fma(&self, d2: &Self, d3: &Self) -> Self {
        let p = self.p.max(d2.p).max(d3.p);
        let p_full = if self.kind == Kind::Normal && d2.kind == Kind::Normal {
            (bin_to_dec(self.bit_len() + d2.bit_len()) as usize + 2).max(p)
        } else {
            p
        };
        let prod = self.mul_unrounded(d2, p_full);
        let mut ret = prod.add(d3);
        ret.set_precision(p);
        ret
    }

    /// Compares `self` to `d2`. Returns `1` if `self` is greater, `-1` if
    /// `self` is smaller, `0` if the values are equal, and `None` if either
    /// operand is NaN.
    ///
    /// Zeros compare equal regardless of sign, and two infinities compare
    /// equal when their signs match.
    pub fn cmp(&self, d2: &Self) -> Option<i8> {
        if self.kind == Kind::Nan || d2.kind == Kind::Nan {
            return None;
        }

        Some(match (self.kind, d2.kind) {
            (Kind::Zero, Kind::Zero) => 0,
            (Kind::Zero, _) => -(d2.s as i8),
            (_, Kind::Zero) => self.s as i8,
            (Kind::Inf, Kind::Inf) => {
                if self.s == d2.s {
                    0
                } else {
                    self.s as i8
                }
            }
            (Kind::Inf, _) => self.s as i8,
            (_, Kind::Inf) => -(d2.s as i8),
            _ => {
                if self.s != d2.s {
                    self.s as i8
                } else {
                    let ord = self.abs_cmp_normal(d2);
                    if self.s == Sign::Neg {
                        -ord
                    } else {
                        ord
                    }
                }
            }
        })
    }

    // Compare magnitudes of two normal values.
    fn abs_cmp_normal(&self, d2: &Self) -> i8 {
        // the top bit of the significand is always set, so the leading
        // exponents order the magnitudes directly
        if self.e != d2.e {
            return if self.e > d2.e { 1 } else { -1 };
        }

        let ea = self.eff_exp();
        let eb = d2.eff_exp();
        let common = ea.min(eb);

        let mut m1 = self.m.clone();
        if ea > common {
            m1 <<= (ea - common) as usize;
        }
        let mut m2 = d2.m.clone();
        if eb > common {
            m2 <<= (eb - common) as usize;
        }

        match m1.cmp(&m2) {
            core::cmp::Ordering::Less => -1,
            core::cmp::Ordering::Equal => 0,
            core::cmp::Ordering::Greater => 1,
        }
    }

    /// Returns the integer part of the number.
    pub fn int(&self) -> Self {
        match self.kind {
            Kind::Nan => Self::nan(),
            Kind::Inf => self.clone(),
            Kind::Zero => self.clone(),
            Kind::Normal => {
                let frac_bits = self.bit_len() as i128 - 1 - self.e as i128;
                if frac_bits <= 0 {
                    self.clone()
                } else if frac_bits >= self.bit_len() as i128 {
                    Self::zero_signed(self.s, self.p, self.rm)
                } else {
                    let m: BigInt = &self.m >> (frac_bits as usize);
                    Self::from_raw(self.s, m, self.e as i128, self.p, self.rm)
                }
            }
        }
    }

    /// Returns the fractional part of the number.
    pub fn fract(&self) -> Self {
        match self.kind {
            Kind::Nan => Self::nan(),
            Kind::Inf => Self::nan(),
            Kind::Zero => self.clone(),
            Kind::Normal => {
                let frac_bits = self.bit_len() as i128 - 1 - self.e as i128;
                if frac_bits <= 0 {
                    Self::zero_signed(self.s, self.p, self.rm)
                } else if frac_bits >= self.bit_len() as i128 {
                    self.clone()
                } else {
                    let mask: BigInt = (BigInt::one() << (frac_bits as usize)) - 1;
                    let m: BigInt = &self.m & &mask;
                    let eff = self.eff_exp();
                    let e = eff + m.bits() as i128 - 1;
                    Self::from_raw(self.s, m, e, self.p, self.rm)
                }
            }
        }
    }

    // True if the significand is exactly a power of two.
    pub(crate) fn is_pow2_significand(&self) -> bool {
        self.kind == Kind::Normal && self.m.is_one()
    }

    // True if the value is exactly 1.
    pub(crate) fn is_one(&self) -> bool {
        self.kind == Kind::Normal && self.s == Sign::Pos && self.e == 0 && self.m.is_one()
    }

    /// Adds `delta` to the binary exponent. The value becomes an infinity on
    /// overflow and a signed zero on underflow.
    pub(crate) fn add_to_exponent(&mut self, delta: i128) {
        if self.kind != Kind::Normal {
            return;
        }
        let e = self.e as i128 + delta;
        if e > EXPONENT_MAX as i128 {
            *self = Self::inf_with(self.s, self.p, self.rm);
        } else if e < EXPONENT_MIN as i128 {
            *self = Self::zero_signed(self.s, self.p, self.rm);
        } else {
            self.e = e as Exponent;
        }
    }

    /// One unit in the last place at the decimal precision of `self`.
    pub(crate) fn ulp(&self) -> Self {
        Self::from_raw(
            Sign::Pos,
            BigInt::one(),
            crate::common::util::ulp_exponent(self.p) as i128,
            self.p,
            self.rm,
        )
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::random;

    fn random_f64() -> f64 {
        let mut f: f64 = random();
        f = f.powi(random::<i32>().abs() % 308 + 1);
        if random::<i8>() & 1 == 0 {
            f = -f;
        }
        f
    }

    #[test]
    fn test_number() {
        let p = 40;
        let rm = RoundingMode::Nearest;

        // nan
        let d1 = BigFloat::from_f64(f64::NAN, p, rm);
        assert!(d1.is_nan());
        assert!(d1.sign() == Sign::Pos);

        // inf
        assert!(BigFloat::from_f64(f64::INFINITY, p, rm).is_inf_pos());
        assert!(BigFloat::from_f64(f64::NEG_INFINITY, p, rm).is_inf_neg());

        // 0.0
        assert!(BigFloat::from_f64(0.0, p, rm).is_zero());
        assert!(BigFloat::from_f64(-0.0, p, rm).is_zero());
        assert!(BigFloat::from_f64(-0.0, p, rm).is_negative());

        // f64 round trip
        for _ in 0..10000 {
            let f = random_f64();
            if f.is_finite() {
                let d1 = BigFloat::from_f64(f, p, rm);
                assert!(d1.to_f64() == f);
            }
        }

        // subnormal f64
        let f = f64::from_bits(0x000f_ffff_ffff_ffffu64);
        let d1 = BigFloat::from_f64(f, p, rm);
        assert!(d1.to_f64() == f);

        // values of 1 and 10
        let d1 = BigFloat::from_u64(1, p, rm);
        assert!(d1.exponent() == 0);
        assert!(d1.bit_len() == 1);
        let d1 = BigFloat::from_u64(10, p, rm);
        assert!(d1.exponent() == 3);

        // add & sub
        let d1 = BigFloat::from_f64(3.5, p, rm);
        let d2 = BigFloat::from_f64(-1.25, p, rm);
        assert!(d1.add(&d2).to_f64() == 2.25);
        assert!(d1.sub(&d2).to_f64() == 4.75);
        assert!(d2.add(&d1).to_f64() == 2.25);

        // sum of opposites gives zero
        let d3 = d1.sub(&d1);
        assert!(d3.is_zero());
        assert!(d3.is_positive());

        // mul
        let d3 = d1.mul(&d2);
        assert!(d3.to_f64() == -4.375);
        assert!(d1.mul(&d1).to_f64() == 12.25);

        // mul of values crossing the 2-boundary
        let d1 = BigFloat::from_f64(1.5, p, rm);
        assert!(d1.mul(&d1).to_f64() == 2.25);
        let d1 = BigFloat::from_f64(1.25, p, rm);
        assert!(d1.mul(&d1).to_f64() == 1.5625);

        // fma keeps the product unrounded
        let d1 = BigFloat::from_f64(3.0, p, rm);
        let d2 = BigFloat::from_f64(4.0, p, rm);
        let d3 = BigFloat::from_f64(-12.0, p, rm);
        assert!(d1.fma(&d2, &d3).is_zero());

        // int & fract
        let d1 = BigFloat::from_f64(12345.6789, p, rm);
        assert!(d1.int().to_f64() == 12345.0);
        assert!(d1.fract().to_f64() == 12345.6789f64.fract());

        let d1 = BigFloat::from_f64(-0.006789, p, rm);
        assert!(d1.int().is_zero());
        assert!(d1.fract().cmp(&d1) == Some(0));

        let d1 = BigFloat::from_f64(-1234567890.0, p, rm);
        assert!(d1.fract().is_zero());
        assert!(d1.int().cmp(&d1) == Some(0));

        // is_int
        assert!(BigFloat::from_f64(3.0, p, rm).is_int());
        assert!(BigFloat::from_f64(-3.0, p, rm).is_int());
        assert!(!BigFloat::from_f64(3.5, p, rm).is_int());
        assert!(BigFloat::new(p).is_int());
        assert!(!BigFloat::nan().is_int());

        // neg & abs & signum
        let d1 = BigFloat::from_f64(-12.3, p, rm);
        assert!(d1.abs().to_f64() == 12.3);
        assert!(d1.neg().to_f64() == 12.3);
        assert!(d1.signum().to_f64() == -1.0);
        assert!(BigFloat::nan().neg().is_nan());

        // to_bigint
        let d1 = BigFloat::from_f64(-12345.6789, p, rm);
        assert!(d1.to_bigint().unwrap() == BigInt::from(-12345));
        assert!(BigFloat::nan().to_bigint().unwrap_err() == Error::NotFinite);
        assert!(BigFloat::inf(Sign::Pos).to_bigint().unwrap_err() == Error::NotFinite);
        assert!(BigFloat::new(p).to_bigint().unwrap() == BigInt::zero());

        // big integer round trip
        for _ in 0..1000 {
            let i = BigInt::from(random::<i128>());
            let d1 = BigFloat::from_bigint(&i, p, rm);
            assert!(d1.to_bigint().unwrap() == i);
        }
    }

    #[test]
    fn test_rounding() {
        // 5 bits of significand rounded to 1 decimal digit (7 bits of width):
        // no rounding happens
        let d1 = BigFloat::from_raw(Sign::Pos, BigInt::from(0b10111u32), 4, 1, RoundingMode::Nearest);
        assert!(d1.to_f64() == 23.0);

        // 0b101011001 (345) rounded to 7 bits
        for (rm, expected) in [
            (RoundingMode::Nearest, 0b1010110u32 << 2), // dropped bits are 01
            (RoundingMode::Up, 0b1010111u32 << 2),
            (RoundingMode::Down, 0b1010110u32 << 2),
            (RoundingMode::ToZero, 0b1010110u32 << 2),
        ] {
            let d1 = BigFloat::from_raw(Sign::Pos, BigInt::from(345u32), 8, 1, rm);
            assert!(d1.to_bigint().unwrap() == BigInt::from(expected), "{:?}", rm);
        }

        // negative magnitudes mirror Up and Down
        for (rm, expected) in [
            (RoundingMode::Nearest, 0b1010110u32 << 2),
            (RoundingMode::Up, 0b1010110u32 << 2),
            (RoundingMode::Down, 0b1010111u32 << 2),
            (RoundingMode::ToZero, 0b1010110u32 << 2),
        ] {
            let d1 = BigFloat::from_raw(Sign::Neg, BigInt::from(345u32), 8, 1, rm);
            assert!(d1.to_bigint().unwrap() == -BigInt::from(expected), "{:?}", rm);
        }

        // half-way value rounds up the magnitude in Nearest mode
        let d1 = BigFloat::from_raw(Sign::Pos, BigInt::from(0b101011010u32), 8, 1, RoundingMode::Nearest);
        assert!(d1.to_bigint().unwrap() == BigInt::from(0b1010111u32 << 2));

        // carry grows the significand to a power of two: 0b1111111 11 -> 2^7
        let d1 = BigFloat::from_raw(Sign::Pos, BigInt::from(0b111111111u32), 8, 1, RoundingMode::Nearest);
        assert!(d1.to_bigint().unwrap() == BigInt::from(1u32 << 9));
        assert!(d1.exponent() == 9);

        // rounding determinism
        for _ in 0..100 {
            let v = random::<u128>();
            let d1 = BigFloat::from_raw(Sign::Pos, BigInt::from(v), 127, 20, RoundingMode::Nearest);
            let d2 = BigFloat::from_raw(Sign::Pos, BigInt::from(v), 127, 20, RoundingMode::Nearest);
            assert!(d1.cmp(&d2) == Some(0));
        }
    }

    #[test]
    fn test_special_values() {
        let p = 40;
        let rm = RoundingMode::Nearest;

        let nan = BigFloat::nan();
        let inf = BigFloat::inf(Sign::Pos);
        let ninf = BigFloat::inf(Sign::Neg);
        let zero = BigFloat::new(p);
        let d1 = BigFloat::from_f64(1.5, p, rm);

        // nan contagion
        assert!(nan.add(&d1).is_nan());
        assert!(d1.add(&nan).is_nan());
        assert!(nan.sub(&nan).is_nan());
        assert!(nan.mul(&inf).is_nan());
        assert!(zero.mul(&nan).is_nan());

        // inf arithmetic
        assert!(inf.add(&d1).is_inf_pos());
        assert!(ninf.add(&d1).is_inf_neg());
        assert!(inf.add(&inf).is_inf_pos());
        assert!(inf.sub(&inf).is_nan());
        assert!(inf.add(&ninf).is_nan());
        assert!(d1.sub(&inf).is_inf_neg());
        assert!(inf.mul(&d1).is_inf_pos());
        assert!(inf.mul(&d1.neg()).is_inf_neg());
        assert!(ninf.mul(&ninf).is_inf_pos());
        assert!(inf.mul(&zero).is_nan());
        assert!(zero.mul(&inf).is_nan());

        // zero arithmetic
        assert!(zero.add(&zero).is_zero());
        assert!(zero.add(&d1).cmp(&d1) == Some(0));
        assert!(d1.add(&zero).cmp(&d1) == Some(0));
        assert!(zero.sub(&d1).cmp(&d1.neg()) == Some(0));
        assert!(zero.mul(&d1).is_zero());

        // comparisons
        assert!(nan.cmp(&nan).is_none());
        assert!(nan.cmp(&d1).is_none());
        assert!(inf.cmp(&inf) == Some(0));
        assert!(inf.cmp(&ninf) == Some(1));
        assert!(ninf.cmp(&d1) == Some(-1));
        assert!(inf.cmp(&d1) == Some(1));
        assert!(zero.cmp(&BigFloat::new(p)) == Some(0));
        assert!(zero.cmp(&d1) == Some(-1));
        assert!(zero.cmp(&d1.neg()) == Some(1));

        // zeros compare equal regardless of sign
        let nzero = BigFloat::new(p).neg();
        assert!(zero.cmp(&nzero) == Some(0));
    }

    #[test]
    fn test_cmp_normal() {
        let p = 40;
        let rm = RoundingMode::Nearest;

        for _ in 0..10000 {
            let f1 = random_f64();
            let f2 = random_f64();
            if f1.is_finite() && f2.is_finite() {
                let d1 = BigFloat::from_f64(f1, p, rm);
                let d2 = BigFloat::from_f64(f2, p, rm);
                let res = d1.cmp(&d2).unwrap();
                if f1 > f2 {
                    assert!(res == 1);
                } else if f1 < f2 {
                    assert!(res == -1);
                } else {
                    assert!(res == 0);
                }
            }
        }

        // representations with different trailing zero counts compare equal
        let d1 = BigFloat::from_raw(Sign::Pos, BigInt::from(2u32), 1, 40, rm);
        let d2 = BigFloat::from_raw(Sign::Pos, BigInt::from(1u32), 1, 40, rm);
        assert!(d1.cmp(&d2) == Some(0));
    }

    #[test]
    fn test_add_sub_random() {
        let p = 40;
        let rm = RoundingMode::Nearest;
        let mut eps = BigFloat::from_u64(1, p, rm);

        for _ in 0..1000 {
            let f1 = random_f64();
            let f2 = random_f64();
            if !f1.is_finite() || !f2.is_finite() || f1 == 0.0 || f2 == 0.0 {
                continue;
            }
            let d1 = BigFloat::from_f64(f1, p, rm);
            let d2 = BigFloat::from_f64(f2, p, rm);

            // (d1 - d2) + d2 recovers d1 up to the working precision
            let d3 = d1.sub(&d2).add(&d2);
            eps.set_exponent(d1.exponent().max(d2.exponent()) - 130);
            assert!(d1.sub(&d3).abs().cmp(&eps) == Some(-1));

            // commutativity is exact
            assert!(d1.add(&d2).cmp(&d2.add(&d1)) == Some(0));
            assert!(d1.mul(&d2).cmp(&d2.mul(&d1)) == Some(0));
        }
    }
}
