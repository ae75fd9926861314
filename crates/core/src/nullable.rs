//! Serde helpers for CMS fields that may be `null` as well as absent.
//!
//! Use together with `#[serde(default)]` so a missing key and an explicit
//! `null` both produce the type's default (empty list, empty string).

use serde::{Deserialize, Deserializer};

pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
