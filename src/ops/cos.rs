//! Cosine.

use crate::common::consts::ONE;
use crate::common::util::bin_to_dec;
use crate::defs::Kind;
use crate::defs::RoundingMode;
use crate::defs::Sign;
use crate::num::BigFloat;
use crate::ops::consts::CONSTS;

impl BigFloat {
    /// Computes the cosine of the number. The cosine of an infinity is NaN.
    pub fn cos(&self) -> Self {
        match self.kind() {
            Kind::Nan | Kind::Inf => Self::nan(),
            Kind::Zero => Self::from_u64(1, self.precision(), self.rounding_mode()),
            Kind::Normal => {
                let p = self.precision();

                let mut extra = 8usize;
                let mut ret;
                loop {
                    let wp = p + extra;

                    // cosine is even
                    let r = self.abs().reduce_trig_arg(wp);

                    let pi = CONSTS.with(|cc| cc.borrow_mut().pi(wp, RoundingMode::Nearest));
                    let mut pi_half = pi.clone();
                    pi_half.add_to_exponent(-1);
                    let mut two_pi = pi.clone();
                    two_pi.add_to_exponent(1);
                    let three_pi_half = pi.add(&pi_half);

                    // the sign is fixed by the quadrant
                    let neg = r.cmp(&pi_half) == Some(1) && r.cmp(&three_pi_half) == Some(-1);

                    // fold [0, 2*pi) into [0, pi/2] by two reflections
                    let mut v = r;
                    if v.cmp(&pi) != Some(-1) {
                        v = two_pi.sub(&v);
                    }
                    if v.cmp(&pi_half) == Some(1) {
                        v = pi.sub(&v);
                    }

                    let tenth = Self::from_f64(0.1, 1, RoundingMode::Nearest);
                    ret = if pi_half.sub(&v).abs().cmp(&tenth) == Some(-1) {
                        // cos(v) = sin(pi/2 - v) avoids the cancellation of
                        // sqrt(1 - sin(v)^2) near pi/2
                        pi_half.sub(&v).sin_series()
                    } else {
                        let s = v.sin_series();
                        ONE.sub(&s.mul(&s)).sqrt()
                    };

                    let lost = match ret.kind() {
                        Kind::Normal if ret.exponent() < 0 => {
                            bin_to_dec(ret.exponent().unsigned_abs()) as usize
                        }
                        _ => 0,
                    };
                    if lost + 8 > extra && extra < p + 64 {
                        extra = lost + 16;
                        continue;
                    }

                    if neg {
                        ret.set_sign(Sign::Neg);
                    }
                    break;
                }

                ret.set_rounding_mode(self.rounding_mode());
                ret.set_precision(p);
                ret
            }
        }
    }
}
