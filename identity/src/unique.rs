//! Raw value types able to produce fresh values for `Identifier::unique`.
//!
//! UUIDs are random (version 4). Integers come from a process-wide counter
//! per integer type, starting at 1. Integer values are distinct only until
//! the counter reaches the type's `MAX`; it then restarts at 1 and reissues
//! earlier values, logging a warning when it does.

use std::sync::atomic::{
    AtomicI8, AtomicI16, AtomicI32, AtomicI64, AtomicIsize, AtomicU8, AtomicU16, AtomicU32,
    AtomicU64, AtomicUsize, Ordering,
};

/// A raw value type that can generate fresh values.
///
/// Random types (`Uuid`, and `String` holding UUID text) give values that are
/// distinct in practice. Integer types cycle: after issuing `MAX` the next
/// value is 1 again, so callers needing more than `MAX` live identifiers
/// should choose a wider raw type or a UUID.
pub trait UniqueRawValue: Sized {
    /// Produce the next value.
    #[must_use]
    fn unique() -> Self;
}

#[cfg(feature = "uuid")]
impl UniqueRawValue for uuid::Uuid {
    fn unique() -> Self {
        Self::new_v4()
    }
}

/// Random UUID text, for identifiers backed by strings.
#[cfg(feature = "uuid")]
impl UniqueRawValue for String {
    fn unique() -> Self {
        uuid::Uuid::new_v4().to_string()
    }
}

macro_rules! sequential_unique {
    ($($int:ty => $atomic:ty),* $(,)?) => {$(
        impl UniqueRawValue for $int {
            fn unique() -> Self {
                static NEXT: $atomic = <$atomic>::new(1);
                // Only uniqueness of the fetched value is required.
                let issued = NEXT
                    .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                        Some(if current == <$int>::MAX { 1 } else { current + 1 })
                    })
                    .unwrap_or_else(|current| current);
                if issued == <$int>::MAX {
                    tracing::warn!(
                        raw_value_type = stringify!($int),
                        "sequential identifier counter exhausted; restarting at 1"
                    );
                }
                issued
            }
        }
    )*};
}

sequential_unique! {
    u8 => AtomicU8,
    u16 => AtomicU16,
    u32 => AtomicU32,
    u64 => AtomicU64,
    usize => AtomicUsize,
    i8 => AtomicI8,
    i16 => AtomicI16,
    i32 => AtomicI32,
    i64 => AtomicI64,
    isize => AtomicIsize,
}
