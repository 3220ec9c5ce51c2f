//! Identifier newtypes for vehicles, lanes and intersections.
//!
//! `LaneId` and `IntersectionId` are arena indices: `id.index()` is the
//! position in the owning store.  `VehicleId` is a label chosen by whoever
//! creates the vehicle and is never used to index anything.

use std::fmt;

/// Declare `u32` id newtypes with a `u32::MAX` sentinel.
macro_rules! ids {
    ($($(#[$doc:meta])* $name:ident;)+) => {$(
        $(#[$doc])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u32);

        impl $name {
            /// Placeholder for "no such id" (`u32::MAX`).
            pub const INVALID: $name = $name(u32::MAX);

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        /// Defaults to [`INVALID`](Self::INVALID).
        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))?;
                write!(f, "({})", self.0)
            }
        }

        impl From<$name> for usize {
            fn from(id: $name) -> usize {
                id.index()
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;

            fn try_from(i: usize) -> Result<Self, Self::Error> {
                Ok($name(u32::try_from(i)?))
            }
        }
    )+};
}

ids! {
    /// Label of a single vehicle.  Uniqueness is up to the caller.
    VehicleId;

    /// Position of a lane in a `LaneStore`.
    LaneId;

    /// Position of an intersection in a `TrafficNetwork`.
    IntersectionId;
}
