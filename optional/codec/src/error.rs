use quick_xml::{de::DeError, se::SeError};
use thiserror::Error;

/// Error raised by the XML codec.
///
/// quick-xml reports serialization and deserialization failures with
/// separate types. Both are carried as-is.
#[derive(Debug, Error)]
pub enum XmlError {
    #[error(transparent)]
    Encode(#[from] SeError),
    #[error(transparent)]
    Decode(#[from] DeError),
}
