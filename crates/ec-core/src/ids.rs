//! Strongly typed identifier wrappers.
//!
//! `DeviceId` is dense (`0..N`) and indexes per-device arrays directly.
//! `PlaceId` is whatever the configuration assigned; it is unique but not
//! necessarily dense, so the catalog maps it to a storage index.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// A mobile device.  Devices are numbered `0..device_count`.
    pub struct DeviceId(u32);
}

typed_id! {
    /// A place (edge datacenter / access point) as named by configuration.
    pub struct PlaceId(u32);
}

typed_id! {
    /// Attractiveness category of a place.  Selects the mean dwell time.
    pub struct AttractivenessClass(u8);
}
