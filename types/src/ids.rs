//! Object identifiers.
//!
//! Every persistent object is addressed by a `space.type.instance` triple.
//! Only the instance number is stored; the space and type are fixed per id kind.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! object_id {
    ($(#[$meta:meta])* $name:ident, $space:expr, $kind:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(u64);

        impl $name {
            pub const SPACE: u8 = $space;
            pub const TYPE: u8 = $kind;

            pub const fn new(instance: u64) -> Self {
                Self(instance)
            }

            pub fn instance(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}.{}.{}", Self::SPACE, Self::TYPE, self.0)
            }
        }

        impl From<u64> for $name {
            fn from(instance: u64) -> Self {
                Self(instance)
            }
        }
    };
}

object_id!(
    /// An account on the ledger (`1.2.N`).
    AccountId,
    1,
    2
);

object_id!(
    /// An asset definition (`1.3.N`). Instance 0 is the core asset.
    AssetId,
    1,
    3
);

object_id!(
    /// A limit order placed on the market (`1.7.N`).
    OrderId,
    1,
    7
);

object_id!(
    /// A payment splitter object (`1.17.N`).
    SplitterId,
    1,
    17
);

impl AssetId {
    /// The core asset, in which chain fees are denominated.
    pub const CORE: Self = Self(0);
}
