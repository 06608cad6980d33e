use std::borrow::Cow;

use serde::{de::DeserializeOwned, Serialize};

use crate::{error::XmlError, WireCodec};

/// Element name used by [`Xml::default`].
pub const DEFAULT_ELEMENT: &str = "value";

/// XML codec. A value is written as the content of a single element.
///
/// The element name is only used when encoding; decoding accepts any
/// root element name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xml {
    element: Cow<'static, str>,
}

impl Default for Xml {
    fn default() -> Self {
        Self {
            element: Cow::Borrowed(DEFAULT_ELEMENT),
        }
    }
}

impl Xml {
    /// Creates a codec writing [`DEFAULT_ELEMENT`] elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `element` as the name of the encoded element.
    pub fn with_element<S: Into<Cow<'static, str>>>(element: S) -> Self {
        Self {
            element: element.into(),
        }
    }

    /// Returns the name of the encoded element.
    pub fn element(&self) -> &str {
        &self.element
    }
}

impl WireCodec for Xml {
    type Error = XmlError;

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, Self::Error> {
        let text = quick_xml::se::to_string_with_root(&self.element, value)?;
        Ok(text.into_bytes())
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, Self::Error> {
        Ok(quick_xml::de::from_reader(bytes)?)
    }
}
