//! Power series computation appliance.

use crate::common::util::prec_bits;
use crate::defs::Exponent;
use crate::num::BigFloat;

/// Generator of polynomial coefficients.
pub(crate) trait PolycoeffGen {
    /// Returns the next polynomial coefficient value.
    fn next(&mut self) -> &BigFloat;
}

/// Runs a power series to convergence.
///
/// `acc` holds the series value accumulated so far (usually the first term),
/// `x_first` is the next power of the argument, and `x_step` is the factor
/// between consecutive powers. The iteration stops when the exponent of a new
/// term falls below the binary working width of the accumulator precision, or
/// when adding a term leaves the accumulator unchanged.
pub(crate) fn series_run(
    mut acc: BigFloat,
    x_first: BigFloat,
    x_step: BigFloat,
    polycoeff_gen: &mut impl PolycoeffGen,
) -> BigFloat {
    let thres = -(prec_bits(acc.precision()) as Exponent) - 2;
    let mut x_pow = x_first;

    loop {
        let coeff = polycoeff_gen.next();
        let part = x_pow.mul(coeff);

        if part.is_zero() || !part.is_finite() || part.exponent() < thres {
            break;
        }

        let next = acc.add(&part);
        if next.cmp(&acc) == Some(0) {
            break;
        }

        acc = next;
        x_pow = x_pow.mul(&x_step);
    }

    acc
}

/// Number of trisection reductions for a series argument with binary
/// magnitude `e` at decimal precision `p`.
pub(crate) fn trisection_count(p: usize, e: Exponent) -> usize {
    let base = (core::f64::consts::LN_2 * (p.max(2) as f64).ln()).ceil() as usize * 5;
    base + e.max(0) as usize
}

/// Number of angle halving reductions at decimal precision `p`.
pub(crate) fn bisection_count(p: usize) -> usize {
    (core::f64::consts::LN_2 * (p.max(2) as f64).ln()).ceil() as usize * 5
}
