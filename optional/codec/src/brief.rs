use std::num::NonZero;

use serde::{de::DeserializeOwned, Serialize};

use crate::WireCodec;

const SERDE_BRIEF_CFG: serde_brief::Config = serde_brief::Config {
    max_size: NonZero::new(16 * (2 << 10)),
    error_on_excess_data: true,
    use_indices: false,
};

/// Compact binary codec backed by `serde-brief`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Brief;

impl WireCodec for Brief {
    type Error = serde_brief::Error;

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, Self::Error> {
        serde_brief::to_vec_with_config(value, SERDE_BRIEF_CFG.clone())
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, Self::Error> {
        serde_brief::from_reader_with_config::<_, T>(bytes, SERDE_BRIEF_CFG.clone())
    }
}
