//! Process-wide defaults consulted by constructors.

use crate::defs::RoundingMode;
use crate::defs::DEFAULT_P;
use crate::defs::DEFAULT_RM;
use core::sync::atomic::AtomicU8;
use core::sync::atomic::AtomicUsize;
use core::sync::atomic::Ordering;

static DEFAULT_PRECISION: AtomicUsize = AtomicUsize::new(DEFAULT_P);
static DEFAULT_ROUNDING: AtomicU8 = AtomicU8::new(DEFAULT_RM as u8);

/// Returns the default decimal precision used by constructors that do not
/// take a precision argument.
pub fn default_precision() -> usize {
    DEFAULT_PRECISION.load(Ordering::Relaxed)
}

/// Sets the default decimal precision. A value of 0 is treated as 1.
///
/// The change affects subsequently constructed values only; existing values
/// keep the precision they were created with. No locking protects the
/// setting: programs updating it from several threads must serialize the
/// updates themselves.
pub fn set_default_precision(p: usize) {
    DEFAULT_PRECISION.store(p.max(1), Ordering::Relaxed);
}

/// Returns the default rounding mode used by constructors that do not take a
/// rounding mode argument.
pub fn default_rounding_mode() -> RoundingMode {
    RoundingMode::from_u8(DEFAULT_ROUNDING.load(Ordering::Relaxed))
}

/// Sets the default rounding mode.
///
/// The change affects subsequently constructed values only. No locking
/// protects the setting.
pub fn set_default_rounding_mode(rm: RoundingMode) {
    DEFAULT_ROUNDING.store(rm as u8, Ordering::Relaxed);
}
