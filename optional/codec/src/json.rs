use serde::{de::DeserializeOwned, Serialize};

use crate::WireCodec;

/// JSON codec. Values are written without any wrapper object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Json {
    pretty: bool,
}

impl Json {
    /// Writes JSON with no insignificant whitespace.
    pub const fn compact() -> Self {
        Self { pretty: false }
    }

    /// Writes indented JSON.
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Returns true if output is indented.
    pub const fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl WireCodec for Json {
    type Error = serde_json::Error;

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, Self::Error> {
        match self.pretty {
            true => serde_json::to_vec_pretty(value),
            false => serde_json::to_vec(value),
        }
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, Self::Error> {
        serde_json::from_slice(bytes)
    }
}
