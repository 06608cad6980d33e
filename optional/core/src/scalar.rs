//! Zero values and the named scalar instantiations of [`Optional`].

use num_complex::Complex;

use crate::Optional;

/// A type with a canonical zero value.
///
/// An empty [`Optional`] falls back to this value wherever it has to produce
/// a `T`: [`Optional::else_zero`], [`Optional::get`], its `Display` output and
/// its serialized form.
pub trait Zero {
    /// Returns the zero value.
    fn zero() -> Self;
}

macro_rules! impl_zero {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Zero for $ty {
                #[inline]
                fn zero() -> Self {
                    $zero
                }
            }
        )*
    };
}

impl_zero! {
    bool => false,
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    usize => 0,
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    isize => 0,
    f32 => 0.0,
    f64 => 0.0,
    char => '\0',
    String => String::new(),
    Complex<f32> => Complex::new(0.0, 0.0),
    Complex<f64> => Complex::new(0.0, 0.0),
}

// NAMED INSTANTIATIONS
// ===============================================
// Complex names count the bits of the whole number, not of each part.

pub type Bool = Optional<bool>;
pub type Byte = Optional<u8>;
pub type Complex64 = Optional<Complex<f32>>;
pub type Complex128 = Optional<Complex<f64>>;
pub type Float32 = Optional<f32>;
pub type Float64 = Optional<f64>;
/// Platform-sized signed integer.
pub type Int = Optional<isize>;
pub type Int8 = Optional<i8>;
pub type Int16 = Optional<i16>;
pub type Int32 = Optional<i32>;
pub type Int64 = Optional<i64>;
/// A Unicode code point, carried as its integer value.
pub type Rune = Optional<i32>;
pub type Str = Optional<String>;
/// Platform-sized unsigned integer.
pub type Uint = Optional<usize>;
pub type Uint8 = Optional<u8>;
pub type Uint16 = Optional<u16>;
pub type Uint32 = Optional<u32>;
pub type Uint64 = Optional<u64>;
/// Integer wide enough to hold a pointer.
pub type Uintptr = Optional<usize>;

impl Rune {
    /// Wraps the code point of `value`.
    pub const fn of_char(value: char) -> Self {
        Self::Present(value as i32)
    }
}
