//! π number.

use crate::defs::RoundingMode;
use crate::num::BigFloat;
use num_bigint::BigInt;

// Decimal digits contributed by one term of the Chudnovsky series:
// ln(151931373056000) / ln(10).
const DIGITS_PER_TERM: f64 = 14.181647462725477;

// Binary splitting of the Chudnovsky series over the term range (a, b].
fn pqr(a: u64, b: u64) -> (BigInt, BigInt, BigInt) {
    if a == b - 1 {
        let n0 = BigInt::from(6 * b - 5);
        let n1 = BigInt::from(2 * b - 1);
        let n2 = BigInt::from(6 * b - 1);

        let r = n0 * n1 * n2;

        let q = BigInt::from(10939058860032000u64)
            * BigInt::from(b)
            * BigInt::from(b)
            * BigInt::from(b);

        let mut p = &r * BigInt::from(13591409u128 + 545140134u128 * b as u128);
        if b & 1 != 0 {
            p = -p;
        }

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

// Doubles the covered term range of the partial sums.
fn pqr_inc(pa: &BigInt, qa: &BigInt, ra: &BigInt, m: u64) -> (BigInt, BigInt, BigInt, u64) {
    let b = m * 2;

    let (pb, qb, rb) = pqr(m, b);

    let p = pa * &qb + &pb * ra;
    let q = qa * qb;
    let r = ra * rb;

    (p, q, r, b)
}

/// Holds the state of the incrementally computed π value.
pub struct PiCache {
    b: u64,
    pk: BigInt,
    qk: BigInt,
    rk: BigInt,
    val: BigFloat,
    val_p: usize,
}

impl PiCache {
    // pi = 426880 * sqrt(10005) * Q / (13591409*Q + P)
    fn calc_pi(p: &BigInt, q: &BigInt, prec: usize) -> BigFloat {
        let q0 = q * BigInt::from(4270934400u64);
        let p0 = p + q * BigInt::from(13591409u64);

        let f0 = BigFloat::from_bigint(&q0, prec, RoundingMode::Nearest);
        let f1 = BigFloat::from_bigint(&p0, prec, RoundingMode::Nearest);
        let f2 = BigFloat::from_u64(10005, prec, RoundingMode::Nearest).sqrt();

        f0.div(&f1.mul(&f2))
    }

    // Number of series terms covering `p` decimal digits.
    fn terms_for(p: usize) -> u64 {
        (p as f64 / DIGITS_PER_TERM) as u64 + 2
    }

    pub fn new() -> Self {
        let (p01, q01, r01) = pqr(0, 1);

        let val = Self::calc_pi(&p01, &q01, 1);

        PiCache {
            b: 1,
            pk: p01,
            qk: q01,
            rk: r01,
            val,
            val_p: 1,
        }
    }

    /// Returns the value of π with precision `p` rounded with `rm`.
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

            self.val = Self::calc_pi(&self.pk, &self.qk, wp);
            self.val_p = wp;
        } else if self.val_p < wp {
            self.val = Self::calc_pi(&self.pk, &self.qk, wp);
            self.val_p = wp;
        }

        let mut ret = self.val.clone();
        ret.set_rounding_mode(rm);
        ret.set_precision(p);
        ret
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_pi_const() {
        let mut pi = PiCache::new();

        let c = pi.for_prec(45, RoundingMode::Nearest);
        assert_eq!(
            c.to_fixed(44),
            "3.14159265358979323846264338327950288419716940"
        );

        // requesting lower precision after higher serves from the cache
        let c1 = pi.for_prec(100, RoundingMode::Nearest);
        let c2 = pi.for_prec(45, RoundingMode::Nearest);
        assert_eq!(c2.to_fixed(44), c.to_fixed(44));
        assert!(c1.precision() == 100);
    }
}
