use std::fmt::Debug;
use std::time::Duration;

/// Numbers that can be compared within a tolerance
pub trait Numeric: Copy + PartialEq + Debug {
    /// Whether this value may be used as a tolerance
    fn is_valid_delta(self) -> bool;

    /// `|expected - self| <= delta` for finite, non-NaN operands
    fn within(self, expected: Self, delta: Self) -> bool;

    fn is_nan(self) -> bool {
        false
    }

    fn is_infinite(self) -> bool {
        false
    }
}

macro_rules! impl_signed {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl Numeric for $t {
            fn is_valid_delta(self) -> bool {
                self >= 0
            }

            fn within(self, expected: Self, delta: Self) -> bool {
                expected.abs_diff(self) <= delta as $u
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl Numeric for $t {
            fn is_valid_delta(self) -> bool {
                true
            }

            fn within(self, expected: Self, delta: Self) -> bool {
                expected.abs_diff(self) <= delta
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {$(
        impl Numeric for $t {
            fn is_valid_delta(self) -> bool {
                // NaN fails this comparison too
                self >= 0.0
            }

            fn within(self, expected: Self, delta: Self) -> bool {
                let diff = expected - self;
                diff >= -delta && diff <= delta
            }

            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            fn is_infinite(self) -> bool {
                <$t>::is_infinite(self)
            }
        }
    )*};
}

impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

impl Numeric for Duration {
    fn is_valid_delta(self) -> bool {
        true
    }

    fn within(self, expected: Self, delta: Self) -> bool {
        expected.abs_diff(self) <= delta
    }
}

/// Check that two numbers differ by at most `delta`.
///
/// Two NaNs are equal, a single NaN never is. Opposite infinities never
/// match; a single infinity matches only under an infinite delta.
///
/// # Panics
///
/// When `delta` is negative or NaN.
#[track_caller]
pub fn equal_delta<T: Numeric>(actual: T, expected: T, delta: T) -> bool {
    if !delta.is_valid_delta() {
        panic!("delta must not be negative, got {:?}", delta);
    }

    if actual == expected {
        return true;
    }

    match (actual.is_nan(), expected.is_nan()) {
        (true, true) => return true,
        (true, false) | (false, true) => return false,
        (false, false) => {}
    }

    if actual.is_infinite() && expected.is_infinite() {
        return false;
    }

    actual.within(expected, delta)
}
