//! Zero-or-one value containers for scalar types.
//!
//! [`Optional<T>`] holds either nothing or exactly one `T`. Every scalar it is
//! used with has a zero value (see [`Zero`]), which is what an empty optional
//! falls back to when it has to produce a value anyway.

mod optional;
pub mod scalar;
#[cfg(feature = "serde")]
mod wire;

pub use optional::Optional;
pub use scalar::Zero;
