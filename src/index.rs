use core::fmt::{Debug, Display};

use num_traits::{FromPrimitive, PrimInt, Signed, WrappingAdd, WrappingSub};

/// Index type used when none is given explicitly.
///
/// With the `compat` feature this is `i32`, so every position handed to a
/// host without unsigned arithmetic fits in `2^31 - 1`.
#[cfg(feature = "compat")]
pub type DefaultIndex = i32;

/// Index type used when none is given explicitly.
///
/// With the `compat` feature this is `i32`, so every position handed to a
/// host without unsigned arithmetic fits in `2^31 - 1`.
#[cfg(not(feature = "compat"))]
pub type DefaultIndex = i64;

mod sealed {
    pub trait Sealed {}
}

/// Signed integer usable as a ring position, cursor and length counter.
///
/// Implemented for `i32`, `i64` and `isize`. The width is picked at the type
/// level, so narrowing it costs nothing at runtime.
pub trait RingIndex:
    PrimInt
    + Signed
    + WrappingAdd
    + WrappingSub
    + FromPrimitive
    + Debug
    + Display
    + sealed::Sealed
    + 'static
{
    /// Reduces `self` into `[0, capacity)` and returns it as a slot offset.
    ///
    /// `capacity` must be positive.
    fn slot(self, capacity: Self) -> usize;
}

macro_rules! ring_index {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl RingIndex for $t {
            #[inline(always)]
            fn slot(self, capacity: Self) -> usize {
                // rem_euclid is non-negative for a positive divisor
                self.rem_euclid(capacity) as usize
            }
        }
    )*};
}

ring_index!(i32, i64, isize);
