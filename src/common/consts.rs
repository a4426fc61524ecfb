//! Static constants.

use crate::num::BigFloat;
use lazy_static::lazy_static;

lazy_static! {

    /// 1
    pub static ref ONE: BigFloat = BigFloat::from_u64_p(1, 1);

    /// 2
    pub static ref TWO: BigFloat = BigFloat::from_u64_p(2, 1);

    /// 3
    pub static ref THREE: BigFloat = BigFloat::from_u64_p(3, 1);

    /// 4
    pub static ref FOUR: BigFloat = BigFloat::from_u64_p(4, 1);

    /// 10
    pub static ref TEN: BigFloat = BigFloat::from_u64_p(10, 1);
}
