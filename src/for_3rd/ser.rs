//! Serialization of BigFloat.
//! Serialization uses the canonical decimal string form.

use crate::defs::Radix;
use crate::num::BigFloat;
use serde::{Serialize, Serializer};

impl Serialize for BigFloat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format(Radix::Dec))
    }
}
