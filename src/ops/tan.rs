//! Tangent.

use crate::common::consts::ONE;
use crate::common::util::bin_to_dec;
use crate::defs::Kind;
use crate::defs::RoundingMode;
use crate::num::BigFloat;
use crate::ops::consts::CONSTS;

impl BigFloat {
    /// Computes the tangent of the number. The tangent of an infinity is NaN.
    pub fn tan(&self) -> Self {
        match self.kind() {
            Kind::Nan | Kind::Inf => Self::nan(),
            Kind::Zero => self.clone(),
            Kind::Normal => {
                let p = self.precision();

                let mut extra = 8usize;
                let mut ret;
                loop {
                    let wp = p + extra;

                    let r = self.abs().reduce_trig_arg(wp);
                    let pi = CONSTS.with(|cc| cc.borrow_mut().pi(wp, RoundingMode::Nearest));
                    let mut pi_half = pi.clone();
                    pi_half.add_to_exponent(-1);

                    // the tangent is periodic over pi
                    let mut v = r;
                    if v.cmp(&pi) != Some(-1) {
                        v = v.sub(&pi);
                    }

                    let tenth = Self::from_f64(0.1, 1, RoundingMode::Nearest);
                    let delta = v.sub(&pi_half);

                    ret = if delta.abs().cmp(&tenth) == Some(-1) {
                        // tan(pi/2 + d) = -1/tan(d)
                        let s = delta.sin_series();
                        let t = s.div(&ONE.sub(&s.mul(&s)).sqrt());
                        t.recip().neg()
                    } else {
                        // tan(v) = sin(v)/sqrt(1 - sin(v)^2), negative past pi/2
                        let s = v.sin_series();
                        let mut t = s.div(&ONE.sub(&s.mul(&s)).sqrt());
                        if v.cmp(&pi_half) == Some(1) {
                            t.inv_sign();
                        }
                        t
                    };

                    let lost = match ret.kind() {
                        Kind::Normal => bin_to_dec(ret.exponent().unsigned_abs()) as usize,
                        _ => 0,
                    };
                    if lost + 8 > extra && extra < p + 64 {
                        extra = lost + 16;
                        continue;
                    }
                    break;
                }

                if self.is_negative() {
                    ret.inv_sign();
                }

                ret.set_rounding_mode(self.rounding_mode());
                ret.set_precision(p);
                ret
            }
        }
    }
}
