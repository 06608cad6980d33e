//! Serde support for [`Optional`].
//!
//! An optional serializes as its bare value, with no wrapper and no tag. An
//! empty optional serializes as the zero value of its type, so `Empty` and
//! `Present(zero)` are indistinguishable once encoded. Deserializing always
//! produces a present value.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Optional, Zero};

impl<T: Serialize + Zero> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Optional::Present(value) => value.serialize(serializer),
            Optional::Empty => T::zero().serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Optional::Present)
    }
}
