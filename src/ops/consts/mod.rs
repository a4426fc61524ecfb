//! Cached arbitrary-precision mathematical constants.

mod e;
mod ln2;
mod ln5;
mod pi;

use crate::common::util::ten_pow;
use crate::defs::RoundingMode;
use crate::num::BigFloat;
use crate::ops::consts::e::ECache;
use crate::ops::consts::ln2::Ln2Cache;
use crate::ops::consts::ln5::Ln5Cache;
use crate::ops::consts::pi::PiCache;
use std::cell::RefCell;

/// Constants cache contains arbitrary-precision mathematical constants.
pub struct Consts {
    pi: PiCache,
    e: ECache,
    ln2: Ln2Cache,
    ln5: Ln5Cache,
}

impl Consts {
    pub fn new() -> Self {
        Consts {
            pi: PiCache::new(),
            e: ECache::new(),
            ln2: Ln2Cache::new(),
            ln5: Ln5Cache::new(),
        }
    }

    /// Returns the value of π with precision `p` rounded with `rm`.
    pub fn pi(&mut self, p: usize, rm: RoundingMode) -> BigFloat {
        self.pi.for_prec(p, rm)
    }

    /// Returns the value of the Euler number with precision `p` rounded with `rm`.
    pub fn e(&mut self, p: usize, rm: RoundingMode) -> BigFloat {
        self.e.for_prec(p, rm)
    }

    /// Returns the value of ln(2) with precision `p` rounded with `rm`.
    pub fn ln_2(&mut self, p: usize, rm: RoundingMode) -> BigFloat {
        self.ln2.for_prec(p, rm)
    }

    /// Returns the value of ln(5) with precision `p` rounded with `rm`.
    pub fn ln_5(&mut self, p: usize, rm: RoundingMode) -> BigFloat {
        self.ln5.for_prec(p, rm)
    }

    /// Returns the value of ln(10) with precision `p` rounded with `rm`.
    /// The value is synthesized as ln(2) + ln(5).
    pub fn ln_10(&mut self, p: usize, rm: RoundingMode) -> BigFloat {
        let wp = p + 2;
        let mut ret = self
            .ln2
            .for_prec(wp, RoundingMode::Nearest)
            .add(&self.ln5.for_prec(wp, RoundingMode::Nearest));
        ret.set_rounding_mode(rm);
        ret.set_precision(p);
        ret
    }
}

impl Default for Consts {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {

    /// Thread-local cache of the constants consulted by the transcendental
    /// operations.
    pub(crate) static CONSTS: RefCell<Consts> = RefCell::new(Consts::new());
}

// The public constants are rounded to nearest: they are exact mathematical
// values, and their rounding must not depend on the mutable process defaults.
impl BigFloat {
    /// Returns π with decimal precision `p`.
    pub fn pi(p: usize) -> Self {
        CONSTS.with(|cc| cc.borrow_mut().pi(p.max(1), RoundingMode::Nearest))
    }

    /// Returns the Euler number with decimal precision `p`.
    pub fn e(p: usize) -> Self {
        CONSTS.with(|cc| cc.borrow_mut().e(p.max(1), RoundingMode::Nearest))
    }

    /// Returns ln(2) with decimal precision `p`.
    pub fn ln_2(p: usize) -> Self {
        CONSTS.with(|cc| cc.borrow_mut().ln_2(p.max(1), RoundingMode::Nearest))
    }

    /// Returns ln(5) with decimal precision `p`.
    pub fn ln_5(p: usize) -> Self {
        CONSTS.with(|cc| cc.borrow_mut().ln_5(p.max(1), RoundingMode::Nearest))
    }

    /// Returns ln(10) with decimal precision `p`.
    pub fn ln_10(p: usize) -> Self {
        CONSTS.with(|cc| cc.borrow_mut().ln_10(p.max(1), RoundingMode::Nearest))
    }

    /// Returns the square root of 2 with decimal precision `p`.
    pub fn sqrt_2(p: usize) -> Self {
        let p = p.max(1);
        let mut ret = Self::from_u64(2, p + 2, RoundingMode::Nearest).sqrt();
        ret.set_precision(p);
        ret
    }

    /// Returns the machine epsilon at decimal precision `p`, i.e. 10^(-p).
    pub fn epsilon(p: usize) -> Self {
        let p = p.max(1);
        let mut ret = Self::from_bigint(&ten_pow(p as u64), p + 2, RoundingMode::Nearest).recip();
        ret.set_precision(p);
        ret
    }
}
