//! Standard operator and conversion traits for BigFloat.

use crate::ctx;
use crate::num::BigFloat;
use core::cmp::Ordering;
use num_bigint::BigInt;

impl core::ops::Neg for BigFloat {
    type Output = BigFloat;
    fn neg(self) -> BigFloat {
        BigFloat::neg(&self)
    }
}

impl core::ops::Neg for &BigFloat {
    type Output = BigFloat;
    fn neg(self) -> BigFloat {
        BigFloat::neg(self)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $fname:ident) => {
        impl core::ops::$trait<BigFloat> for BigFloat {
            type Output = BigFloat;
            fn $fname(self, rhs: BigFloat) -> BigFloat {
                BigFloat::$fname(&self, &rhs)
            }
        }

        impl core::ops::$trait<&BigFloat> for &BigFloat {
            type Output = BigFloat;
            fn $fname(self, rhs: &BigFloat) -> BigFloat {
                BigFloat::$fname(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);
impl_binary_op!(Div, div);

impl PartialEq for BigFloat {
    /// NaN compares unequal to every value including itself; zeros are equal
    /// regardless of sign.
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Some(0)
    }
}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.cmp(other).map(|v| v.cmp(&0))
    }
}

impl From<f64> for BigFloat {
    /// Conversion with the process-wide default precision and rounding mode.
    fn from(f: f64) -> Self {
        BigFloat::from_f64(f, ctx::default_precision(), ctx::default_rounding_mode())
    }
}

impl From<f32> for BigFloat {
    fn from(f: f32) -> Self {
        BigFloat::from_f64(
            f as f64,
            ctx::default_precision(),
            ctx::default_rounding_mode(),
        )
    }
}

impl From<i64> for BigFloat {
    fn from(i: i64) -> Self {
        BigFloat::from_i64(i, ctx::default_precision(), ctx::default_rounding_mode())
    }
}

impl From<i32> for BigFloat {
    fn from(i: i32) -> Self {
        BigFloat::from_i64(
            i as i64,
            ctx::default_precision(),
            ctx::default_rounding_mode(),
        )
    }
}

impl From<u64> for BigFloat {
    fn from(u: u64) -> Self {
        BigFloat::from_u64(u, ctx::default_precision(), ctx::default_rounding_mode())
    }
}

impl From<u32> for BigFloat {
    fn from(u: u32) -> Self {
        BigFloat::from_u64(
            u as u64,
            ctx::default_precision(),
            ctx::default_rounding_mode(),
        )
    }
}

impl From<&BigInt> for BigFloat {
    fn from(i: &BigInt) -> Self {
        BigFloat::from_bigint(i, ctx::default_precision(), ctx::default_rounding_mode())
    }
}

impl From<BigInt> for BigFloat {
    fn from(i: BigInt) -> Self {
        BigFloat::from(&i)
    }
}

impl From<&str> for BigFloat {
    /// Parsing with the process-wide defaults; malformed input becomes NaN.
    fn from(s: &str) -> Self {
        BigFloat::parse(s, ctx::default_precision(), ctx::default_rounding_mode())
    }
}
