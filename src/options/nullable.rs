//! `null`-tolerant field decoders
//!
//! A JSON `null` leaves a scalar or nested object at its zero value and
//! empties a sequence; `null` elements inside a sequence decode to the
//! element's zero value.

use serde::{Deserialize, Deserializer};

/// `null` decodes to `T::default()`.
pub(crate) fn value<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` decodes to an empty sequence; `null` elements to `T::default()`.
pub(crate) fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Like [`seq`], but marks the key as present.
pub(crate) fn present_seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    seq(deserializer).map(Some)
}
