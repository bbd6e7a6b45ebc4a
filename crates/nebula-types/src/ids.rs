//! Type-safe identifier wrappers for galaxy entities.
//!
//! Every generated entity carries a strongly-typed ID so that a planet
//! identifier can never be passed where a star identifier is expected.
//! The textual form is `"{prefix}-{suffix}"`, where the prefix is fixed per
//! type and the suffix is a random base36 fragment chosen by the generator.
//!
//! Uniqueness is probabilistic. Two entities sharing an ID is tolerated and
//! never treated as an error.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around [`String`] with a fixed prefix.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub String);

        impl $name {
            /// Prefix shared by every identifier of this type.
            pub const PREFIX: &'static str = $prefix;

            /// Build an identifier from a random suffix.
            pub fn with_suffix(suffix: &str) -> Self {
                Self(format!("{}-{suffix}", Self::PREFIX))
            }

            /// Return the prefix of this identifier type.
            pub const fn prefix(&self) -> &'static str {
                Self::PREFIX
            }

            /// Borrow the full textual identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the random part after `"{prefix}-"`, if well formed.
            pub fn suffix(&self) -> Option<&str> {
                self.0
                    .strip_prefix(Self::PREFIX)
                    .and_then(|rest| rest.strip_prefix('-'))
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a generated galaxy.
    GalaxyId, "galaxy"
}

define_id! {
    /// Unique identifier for a solar system within a galaxy.
    SystemId, "system"
}

define_id! {
    /// Unique identifier for the star at the centre of a solar system.
    StarId, "star"
}

define_id! {
    /// Unique identifier for a planet orbiting a star.
    PlanetId, "planet"
}

define_id! {
    /// Unique identifier for a star anomaly.
    AnomalyId, "anomaly"
}

define_id! {
    /// Unique identifier for an asteroid belt.
    BeltId, "belt"
}
