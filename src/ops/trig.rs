//! Trigonometric argument reduction.

use crate::common::util::bin_to_dec;
use crate::defs::RoundingMode;
use crate::num::BigFloat;
use crate::ops::consts::CONSTS;

impl BigFloat {
    /// Reduces a positive normal argument modulo 2π into `[0, 2π)`.
    ///
    /// The period is computed with enough extra precision to cover the binary
    /// magnitude of the argument, so the reduced value keeps `wp` digits of
    /// absolute accuracy.
    pub(crate) fn reduce_trig_arg(&self, wp: usize) -> Self {
        let extra = bin_to_dec(self.exponent().max(0) as u64) as usize + 4;
        let wp2 = wp + extra;

        let mut two_pi = CONSTS.with(|cc| cc.borrow_mut().pi(wp2, RoundingMode::Nearest));
        two_pi.add_to_exponent(1);

        let x = self.with_prec(wp2);

        if x.cmp(&two_pi) == Some(-1) {
            let mut r = x;
            r.set_precision(wp);
            return r;
        }

        let q = x.div(&two_pi).int();
        let mut r = x.sub(&q.mul(&two_pi));

        // the quotient may be off by one unit in the last place
        if r.is_negative() {
            r = r.add(&two_pi);
        } else if r.cmp(&two_pi) != Some(-1) {
            r = r.sub(&two_pi);
        }

        r.set_precision(wp);
        r
    }
}
