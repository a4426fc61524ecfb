//! Euler's number.

use crate::defs::RoundingMode;
use crate::num::BigFloat;
use num_bigint::BigInt;
use num_traits::One;

// Binary splitting of sum(1/k!) over the term range (a, b].
fn pq(a: u64, b: u64) -> (BigInt, BigInt) {
    if a == b - 1 {
        (BigInt::one(), BigInt::from(b))
    } else {
        let m = (a + b) / 2;

        let (pa, qa) = pq(a, m);
        let (pb, qb) = pq(m, b);

        let p = pa * &qb + pb;
        let q = qa * qb;

        (p, q)
    }
}

fn pq_inc(pa: &BigInt, qa: &BigInt, m: u64) -> (BigInt, BigInt, u64) {
    let b = m * 2;

    let (pb, qb) = pq(m, b);

    let p = pa * &qb + pb;
    let q = qa * qb;

    (p, q, b)
}

/// Holds the state of the incrementally computed Euler's number.
pub struct ECache {
    b: u64,
    pk: BigInt,
    qk: BigInt,
    val: BigFloat,
    val_p: usize,
}

impl ECache {
    // e = 1 + P/Q
    fn calc_e(p: &BigInt, q: &BigInt, prec: usize) -> BigFloat {
        let f0 = BigFloat::from_bigint(p, prec, RoundingMode::Nearest);
        let f1 = BigFloat::from_bigint(q, prec, RoundingMode::Nearest);

        f0.div(&f1).add(&BigFloat::from_u64_p(1, 1))
    }

    // Smallest number of terms k such that the series remainder stays under
    // the precision, found with Newton iteration on the Stirling bound
    // k*(ln(k) - 1) + ln(2*pi*k)/2 = (p + 1)*ln(10).
    fn terms_for(p: usize) -> u64 {
        let target = (p as f64 + 1.0) * core::f64::consts::LN_10;

        let mut k = (target / target.ln()).max(4.0);
        for _ in 0..32 {
            let f = k * (k.ln() - 1.0) + 0.5 * (2.0 * core::f64::consts::PI * k).ln() - target;
            let fd = k.ln() + 0.5 / k;
            k -= f / fd;
            if k < 4.0 {
                k = 4.0;
            }
        }

        k as u64 + 2
    }

    pub fn new() -> Self {
        let (p01, q01) = pq(0, 16);

        let val = Self::calc_e(&p01, &q01, 16);

        ECache {
            b: 16,
            pk: p01,
            qk: q01,
            val,
            val_p: 16,
        }
    }

    /// Returns the value of e with precision `p` rounded with `rm`.
    pub fn for_prec(&mut self, p: usize, rm: RoundingMode) -> BigFloat {
        let wp = p + 4;
        let k = Self::terms_for(wp);

        if k > self.b {
            let (mut pk, mut qk, mut bb) = pq_inc(&self.pk, &self.qk, self.b);

            while bb < k {
                (pk, qk, bb) = pq_inc(&pk, &qk, bb);
            }

            self.pk = pk;
            self.qk = qk;
            self.b = bb;

            self.val = Self::calc_e(&self.pk, &self.qk, wp);
            self.val_p = wp;
        } else if self.val_p < wp {
            self.val = Self::calc_e(&self.pk, &self.qk, wp);
            self.val_p = wp;
        }

        let mut ret = self.val.clone();
        ret.set_rounding_mode(rm);
        ret.set_precision(p);
        ret
    }
}
