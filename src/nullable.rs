//! Deserialization helpers for peers that write empty values as `null`.
//!
//! Some peers encode an unset map, list or pointer as an explicit `null`
//! instead of leaving the key out. `#[serde(default)]` only covers the
//! absent key; these helpers cover the `null`.

use serde::{Deserialize, Deserializer};

/// Deserializes `T`, mapping an explicit `null` to `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
