//! Deserialization of BigFloat.

use core::fmt::Formatter;

use crate::ctx;
use crate::num::BigFloat;
use serde::de::Error;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer};

pub struct BigFloatVisitor {}

impl<'de> Deserialize<'de> for BigFloat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BigFloatVisitor {})
    }
}

impl<'de> Visitor<'de> for BigFloatVisitor {
    type Value = BigFloat;

    fn expecting(&self, formatter: &mut Formatter) -> core::fmt::Result {
        write!(formatter, "expect `String` or `Number`")
    }

    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BigFloat::from_i64(
            v,
            ctx::default_precision(),
            ctx::default_rounding_mode(),
        ))
    }

    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BigFloat::from_u64(
            v,
            ctx::default_precision(),
            ctx::default_rounding_mode(),
        ))
    }

    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(BigFloat::from_f64(
            v,
            ctx::default_precision(),
            ctx::default_rounding_mode(),
        ))
    }

    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(BigFloat::parse(
            v,
            ctx::default_precision(),
            ctx::default_rounding_mode(),
        ))
    }

    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        self.visit_str(&v)
    }
}
