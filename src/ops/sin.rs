//! Sine.

use crate::common::consts::FOUR;
use crate::common::consts::THREE;
use crate::common::util::bin_to_dec;
use crate::defs::Kind;
use crate::defs::RoundingMode;
use crate::num::BigFloat;
use crate::ops::consts::CONSTS;
use crate::ops::series::series_run;
use crate::ops::series::trisection_count;
use crate::ops::series::PolycoeffGen;

// Coefficients -1/3!, 1/5!, -1/7!, ... of the sine series.
struct SinPolycoeffGen {
    fct: BigFloat,
    k: u64,
}

impl SinPolycoeffGen {
    fn new(p: usize) -> Self {
        SinPolycoeffGen {
            fct: BigFloat::from_u64_p(1, p),
            k: 1,
        }
    }
}

impl PolycoeffGen for SinPolycoeffGen {
    fn next(&mut self) -> &BigFloat {
        self.k += 2;
        // dividing by a negative factor alternates the sign of the coefficient
        self.fct = self.fct.div(&BigFloat::from_i64(
            -((self.k * (self.k - 1)) as i64),
            1,
            RoundingMode::Nearest,
        ));
        &self.fct
    }
}

impl BigFloat {
    /// Computes the sine of the number. The sine of an infinity is NaN.
    pub fn sin(&self) -> Self {
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

                    // fold [0, 2*pi) into [0, pi): sin(pi + u) = -sin(u)
                    let (arg, flip) = if r.cmp(&pi) != Some(-1) {
                        (r.sub(&pi), true)
                    } else {
                        (r, false)
                    };

                    ret = arg.sin_series();

                    // a result close to zero means cancellation took digits
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

                    if flip {
                        ret.inv_sign();
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

    // Sine by trisection and Taylor series for a small non-negative argument.
    pub(crate) fn sin_series(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        let p = self.precision();
        let k = trisection_count(p, self.exponent());
        let wp = p + k + 10;

        let mut x = self.with_prec(wp);
        for _ in 0..k {
            x = x.div(&THREE);
        }

        // sin(x) = x - x^3/3! + x^5/5! - ...
        let acc = x.clone();
        let x_step = x.mul(&x);
        let x_first = x.mul(&x_step);
        let mut polycoeff_gen = SinPolycoeffGen::new(wp);

        let mut ret = series_run(acc, x_first, x_step, &mut polycoeff_gen);

        // sin(3*x) = 3*sin(x) - 4*sin(x)^3
        for _ in 0..k {
            let cub = ret.mul(&ret).mul(&ret);
            ret = THREE.mul(&ret).sub(&FOUR.mul(&cub));
        }

        ret.set_precision(p);
        ret
    }
}
