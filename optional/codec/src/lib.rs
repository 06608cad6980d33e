//! Wire codecs for [`Optional`] values.
//!
//! Every codec here encodes an optional as the bare encoding of its value.
//! An empty optional is encoded as the zero value of its type, which makes
//! `Optional::empty()` and `Optional::of(zero)` byte-identical on the wire.
//! Decoding never produces an empty optional.

use std::any::type_name;

use optional_core::{Optional, Zero};
use serde::{de::DeserializeOwned, Serialize};

pub mod brief;
pub mod error;
pub mod json;
pub mod xml;

pub use brief::Brief;
pub use error::XmlError;
pub use json::Json;
pub use xml::Xml;

/// A byte-oriented wire format backed by serde.
///
/// Errors are the format's own; implementations must not recover from or
/// reinterpret them.
pub trait WireCodec {
    type Error: std::error::Error;

    /// Encodes a value to bytes.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, Self::Error>;
    /// Decodes a value from bytes.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, Self::Error>;
}

/// Encodes an optional using `codec`. An empty optional is encoded as the
/// zero value of `T`.
pub fn encode<C, T>(codec: &C, optional: &Optional<T>) -> Result<Vec<u8>, C::Error>
where
    C: WireCodec,
    T: Serialize + Zero,
{
    if optional.is_empty() {
        log::debug!("encoding empty Optional<{}> as its zero value", type_name::<T>());
    }
    let bytes = codec.encode(optional)?;
    log::trace!("encoded Optional<{}> to {} bytes", type_name::<T>(), bytes.len());
    Ok(bytes)
}

/// Decodes a present optional using `codec`.
pub fn decode<C, T>(codec: &C, bytes: &[u8]) -> Result<Optional<T>, C::Error>
where
    C: WireCodec,
    T: DeserializeOwned,
{
    log::trace!("decoding Optional<{}> from {} bytes", type_name::<T>(), bytes.len());
    codec.decode(bytes)
}
