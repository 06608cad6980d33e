use std::fmt;

use crate::scalar::Zero;

/// A container holding either no value or exactly one value of type `T`.
///
/// Values are never mutated through an `Optional`: every operation either
/// reads the held value or produces a new one. Copying an `Optional` copies
/// its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// No value is held.
    Empty,
    /// A value is held.
    Present(T),
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> Optional<T> {
    /// Wraps `value`.
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns an optional holding nothing.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Copies the referenced value into a new optional, or returns an empty
    /// optional if there is no reference.
    ///
    /// The result does not borrow from `ptr`; changing the pointee afterwards
    /// does not affect it.
    pub fn from_ptr(ptr: Option<&T>) -> Self
    where
        T: Clone,
    {
        match ptr {
            Some(value) => Self::Present(value.clone()),
            None => Self::Empty,
        }
    }

    /// Raw pointer form of [`Optional::from_ptr`]. A null pointer yields an
    /// empty optional.
    ///
    /// # Safety
    /// `ptr` must either be null or be valid for reads of a properly
    /// initialized `T` for the duration of the call.
    pub unsafe fn from_raw(ptr: *const T) -> Self
    where
        T: Clone,
    {
        // SAFETY: the caller guarantees ptr is null or points to a valid T.
        // The pointee is cloned before the reference goes out of scope.
        Self::from_ptr(unsafe { ptr.as_ref() })
    }

    /// Returns true if there is a value wrapped by this optional.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns true if there is no value wrapped by this optional.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.is_present()
    }

    /// Calls `visit` with the held value, if there is one.
    pub fn if_present<F: FnOnce(&T)>(&self, visit: F) {
        if let Self::Present(value) = self {
            visit(value);
        }
    }

    /// Returns the held value, or the result of `supply` if there is none.
    /// `supply` is only called when the optional is empty.
    pub fn else_compute<F: FnOnce() -> T>(self, supply: F) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => supply(),
        }
    }

    /// Returns the held value, or `default` if there is none.
    pub fn else_value(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            Self::Empty => default,
        }
    }

    /// Borrows the held value.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Empty => Optional::Empty,
        }
    }

    /// Borrows the held value as a standard [`Option`].
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Empty => None,
        }
    }

    /// Converts into a standard [`Option`].
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T: Zero> Optional<T> {
    /// Returns the held value, or the zero value of `T` if there is none.
    pub fn else_zero(self) -> T {
        self.else_compute(T::zero)
    }

    /// Returns a copy of the held value and `true`, or the zero value of `T`
    /// and `false` if there is none.
    pub fn get(&self) -> (T, bool)
    where
        T: Clone,
    {
        match self {
            Self::Present(value) => (value.clone(), true),
            Self::Empty => (T::zero(), false),
        }
    }
}

/// Renders the held value, or the zero value of `T` when empty. Absence is
/// never rendered as blank text of its own.
impl<T: fmt::Display + Zero> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => value.fmt(f),
            Self::Empty => T::zero().fmt(f),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Empty,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use num_complex::Complex64;

    use super::Optional;

    #[test]
    fn test_presence() {
        assert!(Optional::of(true).is_present());
        assert!(!Optional::of(true).is_empty());
        assert!(!Optional::<bool>::empty().is_present());
        assert!(Optional::<bool>::empty().is_empty());
        assert!(Optional::of(String::new()).is_present());
        assert_eq!(Optional::<u8>::default(), Optional::empty());
    }

    #[test]
    fn test_get() {
        assert_eq!(Optional::of(42i64).get(), (42, true));
        assert_eq!(Optional::<i64>::empty().get(), (0, false));
        assert_eq!(Optional::of(String::from("s")).get(), (String::from("s"), true));
        assert_eq!(Optional::<String>::empty().get(), (String::new(), false));
        assert_eq!(
            Optional::<Complex64>::empty().get(),
            (Complex64::new(0.0, 0.0), false)
        );
    }

    #[test]
    fn test_else_value() {
        assert_eq!(Optional::of(42).else_value(7), 42);
        assert_eq!(Optional::<i32>::empty().else_value(7), 7);
    }

    #[test]
    fn test_else_compute_short_circuits() {
        let calls = Cell::new(0u32);
        let supply = || {
            calls.set(calls.get() + 1);
            3.5f64
        };

        assert_eq!(Optional::of(1.25f64).else_compute(supply), 1.25);
        assert_eq!(calls.get(), 0, "supplier ran for a present value");

        assert_eq!(Optional::<f64>::empty().else_compute(supply), 3.5);
        assert_eq!(calls.get(), 1, "supplier should run exactly once");
    }

    #[test]
    fn test_else_zero() {
        assert_eq!(Optional::of('x').else_zero(), 'x');
        assert_eq!(Optional::<char>::empty().else_zero(), '\0');
        assert!(!Optional::<bool>::empty().else_zero());
        assert_eq!(Optional::<u64>::empty().else_zero(), 0);
    }

    #[test]
    fn test_if_present() {
        let mut seen = Vec::new();
        Optional::of(5u16).if_present(|value| seen.push(*value));
        Optional::<u16>::empty().if_present(|value| seen.push(*value));
        assert_eq!(seen, [5]);
    }

    #[test]
    fn test_from_ptr_copies() {
        assert_eq!(Optional::<i32>::from_ptr(None), Optional::empty());

        let mut x = 9;
        let optional = Optional::from_ptr(Some(&x));
        x = 10;
        assert_eq!(optional, Optional::of(9));
        assert_eq!(x, 10);
    }

    #[test]
    fn test_from_raw() {
        let empty = unsafe { Optional::<u32>::from_raw(std::ptr::null()) };
        assert_eq!(empty, Optional::empty());

        let mut name = String::from("ptr to string");
        let optional = unsafe { Optional::from_raw(&name as *const String) };
        name.push_str(" (changed)");
        assert_eq!(optional, Optional::of(String::from("ptr to string")));
    }

    #[test]
    fn test_display() {
        assert_eq!(Optional::of("hello".to_owned()).to_string(), "hello");
        assert_eq!(Optional::<String>::empty().to_string(), "");
        assert_eq!(Optional::of(true).to_string(), "true");
        assert_eq!(Optional::<bool>::empty().to_string(), "false");
        assert_eq!(Optional::<i8>::empty().to_string(), "0");
        assert_eq!(Optional::of(-3i8).to_string(), "-3");
    }

    #[test]
    fn test_option_bridge() {
        assert_eq!(Optional::from(Some(4u8)), Optional::of(4));
        assert_eq!(Optional::<u8>::from(None), Optional::empty());
        assert_eq!(Optional::of(4u8).into_option(), Some(4));
        assert_eq!(Option::<u8>::from(Optional::empty()), None);

        let name = Optional::of(String::from("abc"));
        assert_eq!(name.value().map(String::len), Some(3));
        assert_eq!(name.as_ref(), Optional::of(&String::from("abc")));
        assert_eq!(Optional::<String>::empty().value(), None);
    }
}
