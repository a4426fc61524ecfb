//! Arccosine.

use crate::common::consts::ONE;
use crate::common::util::bin_to_dec;
use crate::defs::Kind;
use crate::defs::RoundingMode;
use crate::num::BigFloat;
use crate::ops::consts::CONSTS;

impl BigFloat {
    /// Computes the arccosine of the number as `pi/2 - asin(x)`. The domain
    /// is `[-1, 1]`; values outside of it give NaN.
    pub fn acos(&self) -> Self {
        match self.kind() {
            Kind::Nan | Kind::Inf => Self::nan(),
            Kind::Zero => {
                let mut ret = CONSTS
                    .with(|cc| cc.borrow_mut().pi(self.precision(), self.rounding_mode()));
                ret.add_to_exponent(-1);
                ret
            }
            Kind::Normal => {
                match self.abs().cmp(&ONE) {
                    Some(1) => return Self::nan(),
                    Some(0) => {
                        return if self.is_negative() {
                            CONSTS.with(|cc| {
                                cc.borrow_mut().pi(self.precision(), self.rounding_mode())
                            })
                        } else {
                            Self::zero(self.precision(), self.rounding_mode())
                        };
                    }
                    _ => {}
                }

                let p = self.precision();

                // extra digits recover the cancellation when the argument is
                // close to 1 and the result is close to zero
                let mut extra = 8usize;
                let mut ret;
                loop {
                    let wp = p + extra;

                    let mut pi_half =
                        CONSTS.with(|cc| cc.borrow_mut().pi(wp, RoundingMode::Nearest));
                    pi_half.add_to_exponent(-1);

                    ret = pi_half.sub(&self.with_prec(wp).asin());

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
                    break;
                }

                ret.set_rounding_mode(self.rounding_mode());
                ret.set_precision(p);
                ret
            }
        }
    }
}
