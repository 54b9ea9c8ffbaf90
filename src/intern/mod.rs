//! Process-wide interning of Ints, Floats and Strings.
//!
//! The decoder uses these when [`Options::intern_keys`] or
//! [`Options::intern_values`] is set, so that repeated values across every
//! tree decoded by the process share one allocation:
//!
//! ```
//! use std::sync::Arc;
//! use nbtcodec::intern;
//!
//! let a = intern::intern_i32(100_000);
//! let b = intern::intern_i32(100_000);
//! assert!(Arc::ptr_eq(&a, &b));
//! ```
//!
//! The pools never keep a value alive. Once every tree holding a value is
//! dropped, its entry is reused by the next intern of the same value or swept
//! by later inserts.
//!
//! Ints in the `i8` range skip the pool and come from a fixed table.
//!
//! [`Options::intern_keys`]: crate::Options::intern_keys
//! [`Options::intern_values`]: crate::Options::intern_values
use std::sync::Arc;

use once_cell::sync::Lazy;

mod pool;

pub use self::pool::{FloatInternPool, IntegerInternPool, InternPool, StringInternPool};

static SMALL_INTS: Lazy<Vec<Arc<i32>>> =
    Lazy::new(|| (i8::MIN as i32..=i8::MAX as i32).map(Arc::new).collect());

static INTEGERS: Lazy<IntegerInternPool> = Lazy::new(InternPool::new);
static FLOATS: Lazy<FloatInternPool> = Lazy::new(InternPool::new);
static STRINGS: Lazy<StringInternPool> = Lazy::new(InternPool::new);

/// The canonical shared instance of `v`.
pub fn intern_i32(v: i32) -> Arc<i32> {
    match i8::try_from(v) {
        Ok(small) => Arc::clone(&SMALL_INTS[(small as i16 - i8::MIN as i16) as usize]),
        Err(_) => INTEGERS.intern(v),
    }
}

/// The canonical shared instance of `v`. All NaNs share one instance, `0.0`
/// and `-0.0` do not.
pub fn intern_f32(v: f32) -> Arc<f32> {
    FLOATS.intern(v)
}

/// The canonical shared copy of `s`.
pub fn intern_str(s: &str) -> Arc<str> {
    STRINGS.intern(s)
}

/// The process-wide Int pool. Values in the `i8` range never enter it.
pub fn integers() -> &'static IntegerInternPool {
    &INTEGERS
}

pub fn floats() -> &'static FloatInternPool {
    &FLOATS
}

pub fn strings() -> &'static StringInternPool {
    &STRINGS
}
