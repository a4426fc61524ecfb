//! Natural logarithm of 5.

use crate::common::util::prec_bits;
use crate::defs::RoundingMode;
use crate::num::BigFloat;
use num_bigint::BigInt;

// Bits gained per series term: log2(9/4).
const BITS_PER_TERM: f64 = 1.1699250014423124;

// Binary splitting of the series ln(5) = 2*atanh(2/3) over the term range
// (a, b]. The term product in `r` carries the 4^k numerator of the argument.
fn pqr(a: u64, b: u64) -> (BigInt, BigInt, BigInt) {
    if a == b - 1 {
        let p = BigInt::from(4u8);
        let q = BigInt::from((2 * b + 1) * 9);
        let r = BigInt::from((2 * b + 1) * 4);

        (p, q, r)
    } else {
        let m = (a + b) / 2;

        let (pa, qa, ra) = pqr(a, m);
        let (pb, qb, rb) = pqr(m, b);

        let p = &pa * &qb + &pb * &ra;
        let q = qa * qb;
        let r = ra * rb;

        (p, q, r)
    }
}

fn pqr_inc(pa: &BigInt, qa: &BigInt, ra: &BigInt, m: u64) -> (BigInt, BigInt, BigInt, u64) {
    let b = m * 2;

    let (pb, qb, rb) = pqr(m, b);

    let p = pa * &qb + &pb * ra;
    let q = qa * qb;
    let r = ra * rb;

    (p, q, r, b)
}

/// Holds the state of the incrementally computed ln(5).
pub struct Ln5Cache {
    b: u64,
    pk: BigInt,
    qk: BigInt,
    rk: BigInt,
    val: BigFloat,
    val_p: usize,
}

impl Ln5Cache {
    // ln(5) = 4 * (1 + P/Q) / 3
    fn calc_ln5(p: &BigInt, q: &BigInt, prec: usize) -> BigFloat {
        let f0 = BigFloat::from_bigint(p, prec, RoundingMode::Nearest);
        let f1 = BigFloat::from_bigint(q, prec, RoundingMode::Nearest);

        let mut ret = f0
            .div(&f1)
            .add(&BigFloat::from_u64_p(1, 1))
            .div(&BigFloat::from_u64_p(3, 1));
        ret.add_to_exponent(2);
        ret
    }

    fn terms_for(p: usize) -> u64 {
        (prec_bits(p) as f64 / BITS_PER_TERM) as u64 + 2
    }

    pub fn new() -> Self {
        let (p01, q01, r01) = pqr(0, 1);

        let val = Self::calc_ln5(&p01, &q01, 1);

        Ln5Cache {
            b: 1,
            pk: p01,
            qk: q01,
            rk: r01,
            val,
            val_p: 1,
        }
    }

    /// Returns the value of ln(5) with precision `p` rounded with `rm`.
    pub fn for_prec(&mut self, p: usize, rm: RoundingMode) -> BigFloat {
        let wp = p + 4;
        let k = Self::terms_for(wp);

        if k > self.b {
            let (mut pk, mut qk, mut rk, mut bb) = pqr_inc(&self.pk, &self.qk, &self.rk, self.b);

            while bb < k {
                (pk, qk, rk, bb) = pqr_inc(&pk, &qk, &rk, bb);
            }

            self.pk = pk;
            self.qk = qk;
            self.rk = rk;
            self.b = bb;

            self.val = Self::calc_ln5(&self.pk, &self.qk, wp);
            self.val_p = wp;
        } else if self.val_p < wp {
            self.val = Self::calc_ln5(&self.pk, &self.qk, wp);
            self.val_p = wp;
        }

        let mut ret = self.val.clone();
        ret.set_rounding_mode(rm);
        ret.set_precision(p);
        ret
    }
}
