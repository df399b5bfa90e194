//! Serde adapter for monetary amounts.
//!
//! Amounts travel as JSON numbers carrying their exact decimal text, both
//! ways. serde_json is built with `arbitrary_precision`, so neither side
//! passes through `f64`. Numeric strings are accepted on the way in.

use bigdecimal::BigDecimal;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::str::FromStr;

pub fn serialize<S>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let number = serde_json::Number::from_str(&value.to_string()).map_err(S::Error::custom)?;
    number.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text,
        other => return Err(D::Error::custom(format!("expected an amount, got {}", other))),
    };
    BigDecimal::from_str(&text)
        .map_err(|e| D::Error::custom(format!("invalid amount {:?}: {}", text, e)))
}
