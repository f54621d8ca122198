use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use common::prelude::{MultiHash, MultiHashError};

use super::ApiError;

/**
 * Response decoding happens in two explicit stages:
 *  1. the body is parsed into a wire record that mirrors the
 *     daemon's JSON exactly (failure: `MalformedResponse`)
 *  2. the wire record is mapped into the public domain type,
 *     re-parsing every hash string along the way
 *     (failure: `InvalidIdentifier`)
 * The mapping must be total for well-formed records; the only thing
 *  allowed to go wrong there is a bad identifier.
 */
pub trait WireShape: DeserializeOwned {
    type Domain;

    fn into_domain(self) -> Result<Self::Domain, MultiHashError>;
}

/// Parse `body` as `W` and map it into `W::Domain`.
pub fn decode_json<W: WireShape>(body: &[u8]) -> Result<W::Domain, ApiError> {
    let wire: W = serde_json::from_slice(body)?;
    Ok(wire.into_domain()?)
}

/// Parse `body` straight into a record that carries no identifiers.
pub fn decode_plain<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

/// Treat an explicit JSON `null` like a missing field.
///
/// Use together with `#[serde(default)]`; the daemon sends `null` for
/// empty lists as often as it leaves them out.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse every hash string in `values`, stopping at the first bad one.
pub fn parse_hashes<C, I>(values: I) -> Result<C, MultiHashError>
where
    I: IntoIterator<Item = String>,
    C: FromIterator<MultiHash>,
{
    values
        .into_iter()
        .map(|value| value.parse::<MultiHash>())
        .collect()
}
