//! Platform identity newtypes.
//!
//! Snowflake-style 64-bit ids, wrapped so a channel id can never be passed
//! where a message id is expected.

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Serialize,
            Deserialize,
            derive_more::Display,
            derive_more::From,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Create an id from its raw value.
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// The raw id value.
            pub const fn get(self) -> u64 {
                self.0
            }
        }
    };
}

id_type! {
    /// Identity of a platform user.
    UserId
}

id_type! {
    /// Identity of a guild or private channel.
    ChannelId
}

id_type! {
    /// Identity of a single message.
    MessageId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        let id = MessageId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(format!("{id}"), "42");
    }
}
