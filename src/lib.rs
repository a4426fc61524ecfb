//! Decafloat implements arbitrary precision binary floating point numbers with decimal precision control.
//!
//! ## Introduction
//!
//! **Numbers**
//!
//!
//! The number is defined by the data type `BigFloat`. Each number consists of a big integer significand,
//! a binary exponent of the most significant bit of the significand, and the sign of the number.
//! In addition every number carries the decimal precision and the rounding mode it was created with.
//!
//!
//! Creation operations take the decimal precision in digits and one of four rounding modes as arguments,
//! or read the process-wide defaults when the short constructors are used. The binary width of the
//! significand is derived from the decimal precision. Results of operations are rounded to the precision
//! of the operation arguments; when the arguments differ in precision, the result takes the highest one.
//!
//!
//! Apart from finite values, a number can be an infinity or NaN. Domain errors, overflow, and malformed
//! input all stay in-band: they produce NaN, an infinity, or a signed zero, and never panic. NaN is
//! contagious, and compares unequal to every value including itself. The only fallible conversion is
//! [`BigFloat::to_bigint`] of a non-finite value.
//!
//!
//! **Constants**
//!
//!
//! Constants such as pi or the Euler number have arbitrary precision and are evaluated lazily by binary
//! splitting, and then cached in a thread-local cache.
//!
//!
//! ## Examples
//!
//! ```rust
//! use decafloat::BigFloat;
//! use decafloat::RoundingMode;
//!
//! let p = 50;
//! let rm = RoundingMode::Nearest;
//!
//! // sqrt(4) = 2
//! let d1 = BigFloat::from_u64(4, p, rm).sqrt();
//! assert_eq!(d1.to_fixed(2), "2.00");
//!
//! // 0.1 + 0.2 = 0.3 at 50 decimal digits
//! let d2 = BigFloat::parse("0.1", p, rm).add(&BigFloat::parse("0.2", p, rm));
//! assert_eq!(d2.to_fixed(5), "0.30000");
//!
//! // the number of atoms in the observable universe does not overflow
//! let d3 = BigFloat::parse("1e80", p, rm).mul(&BigFloat::parse("1e80", p, rm));
//! assert_eq!(d3.format(decafloat::Radix::Dec), "1e+160");
//! ```

#![deny(clippy::suspicious)]

mod common;
mod conv;
mod ctx;
mod defs;
mod ext;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::ctx::default_precision;
pub use crate::ctx::default_rounding_mode;
pub use crate::ctx::set_default_precision;
pub use crate::ctx::set_default_rounding_mode;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Radix;
pub use crate::defs::RoundingMode;
pub use crate::defs::Sign;
pub use crate::defs::DEFAULT_P;
pub use crate::defs::DEFAULT_RM;
pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::EXPONENT_MIN;
pub use crate::num::BigFloat;
pub use crate::ops::consts::Consts;
