//! Leveled assertions for internal search invariants.
//!
//! The level is fixed at compile time; enabling the `debug-checks` feature turns on the more
//! expensive checks (such as re-validating every emitted solution against the whole graph).

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const WATTLE_ASSERT_LEVEL_DEFINITION: u8 = WATTLE_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const WATTLE_ASSERT_LEVEL_DEFINITION: u8 = WATTLE_ASSERT_ADVANCED;

pub const WATTLE_ASSERT_SIMPLE: u8 = 1;
pub const WATTLE_ASSERT_MODERATE: u8 = 2;
pub const WATTLE_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! wattle_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::WATTLE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::WATTLE_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! wattle_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::WATTLE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::WATTLE_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! wattle_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::WATTLE_ASSERT_LEVEL_DEFINITION >= $crate::asserts::WATTLE_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
