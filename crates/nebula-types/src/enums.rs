//! Enumeration types for the galaxy data model.
//!
//! Wire names follow the dashboard contract: resources and belt richness
//! are lowercase, anomaly kinds are kebab-case and spectral types are
//! single capital letters.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// A resource tracked in every planet's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ResourceType {
    /// Structural metal extracted by mines.
    Metal,
    /// Crystalline minerals.
    Minerals,
    /// Refined starship fuel.
    Fuel,
    /// Stored energy. Tracked in inventories but never produced by a planet.
    Energy,
    /// Research points.
    Research,
}

impl ResourceType {
    /// Every resource type, in inventory order.
    pub const ALL: [Self; 5] = [
        Self::Metal,
        Self::Minerals,
        Self::Fuel,
        Self::Energy,
        Self::Research,
    ];

    /// Resource types a planet can carry a production source for.
    pub const PLANET_ELIGIBLE: [Self; 4] =
        [Self::Metal, Self::Minerals, Self::Fuel, Self::Research];

    /// Resource types an asteroid belt can yield.
    pub const BELT_ELIGIBLE: [Self; 2] = [Self::Metal, Self::Minerals];

    /// Lowercase wire name of this resource.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metal => "metal",
            Self::Minerals => "minerals",
            Self::Fuel => "fuel",
            Self::Energy => "energy",
            Self::Research => "research",
        }
    }

    /// Whether a planet may carry a production source for this resource.
    pub const fn is_planet_eligible(self) -> bool {
        !matches!(self, Self::Energy)
    }
}

// ---------------------------------------------------------------------------
// Stars
// ---------------------------------------------------------------------------

/// Morgan-Keenan spectral class of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum StarType {
    /// Blue, hottest class.
    O,
    /// Blue-white.
    B,
    /// White.
    A,
    /// Yellow-white.
    F,
    /// Yellow, Sun-like.
    G,
    /// Orange.
    K,
    /// Red dwarf.
    M,
}

impl StarType {
    /// Every spectral class, hottest first.
    pub const ALL: [Self; 7] = [
        Self::O,
        Self::B,
        Self::A,
        Self::F,
        Self::G,
        Self::K,
        Self::M,
    ];
}

// ---------------------------------------------------------------------------
// Anomalies
// ---------------------------------------------------------------------------

/// Kind of anomaly a star may host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "bindings/")]
pub enum AnomalyType {
    /// Localized gravity disturbances.
    GravityWell,
    /// High-energy particle storms.
    RadiationStorm,
    /// Pockets of time dilation.
    TemporalDistortion,
    /// An abandoned megastructure.
    Derelict,
}

impl AnomalyType {
    /// Every anomaly kind.
    pub const ALL: [Self; 4] = [
        Self::GravityWell,
        Self::RadiationStorm,
        Self::TemporalDistortion,
        Self::Derelict,
    ];
}

// ---------------------------------------------------------------------------
// Asteroid belts
// ---------------------------------------------------------------------------

/// Richness tier of an asteroid belt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum BeltRichness {
    /// Thin field, half the base yield.
    Sparse,
    /// Baseline yield.
    Moderate,
    /// Dense field, boosted yield.
    Rich,
}

impl BeltRichness {
    /// Every richness tier, poorest first.
    pub const ALL: [Self; 3] = [Self::Sparse, Self::Moderate, Self::Rich];
}
