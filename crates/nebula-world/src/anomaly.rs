//! Star anomaly generation.
//!
//! Each anomaly kind has fixed flavour text, a fixed resource bias and a
//! modifier range the generated impact is sampled from.

use std::ops::Range;

use nebula_types::{AnomalyImpact, AnomalyType, ResourceType, StarAnomaly};
use rand::Rng;

use crate::constants::ANOMALY_CHANCE;
use crate::naming;
use crate::sampling::{chance, pick, round_to, uniform};

/// Static description of one anomaly kind.
#[derive(Debug, Clone, PartialEq)]
pub struct AnomalyProfile {
    /// Flavour text shown on the dashboard.
    pub description: &'static str,
    /// Range the impact modifier is sampled from.
    pub modifier_range: Range<f64>,
    /// Resource the anomaly affects.
    pub resource_bias: ResourceType,
}

/// Look up the fixed profile of an anomaly kind.
pub const fn profile(anomaly_type: AnomalyType) -> AnomalyProfile {
    match anomaly_type {
        AnomalyType::GravityWell => AnomalyProfile {
            description: "Localized gravity disturbances affect orbital traffic patterns.",
            modifier_range: 0.8..1.2,
            resource_bias: ResourceType::Fuel,
        },
        AnomalyType::RadiationStorm => AnomalyProfile {
            description: "Charged particles bombard the system with high-energy storms.",
            modifier_range: 0.7..0.95,
            resource_bias: ResourceType::Minerals,
        },
        AnomalyType::TemporalDistortion => AnomalyProfile {
            description: "Chronal anomalies create unpredictable time dilation pockets.",
            modifier_range: 1.05..1.3,
            resource_bias: ResourceType::Research,
        },
        AnomalyType::Derelict => AnomalyProfile {
            description: "A derelict megastructure drifts in the system awaiting salvage.",
            modifier_range: 1.1..1.5,
            resource_bias: ResourceType::Metal,
        },
    }
}

/// Generate a single anomaly of a uniformly chosen kind.
pub fn generate_anomaly(rng: &mut impl Rng) -> StarAnomaly {
    let anomaly_type = pick(rng, &AnomalyType::ALL).unwrap_or(AnomalyType::Derelict);
    let profile = profile(anomaly_type);
    let modifier = round_to(uniform(rng, profile.modifier_range), 2);

    StarAnomaly {
        id: naming::anomaly_id(rng),
        anomaly_type,
        description: profile.description.to_owned(),
        impact: AnomalyImpact {
            resource: Some(profile.resource_bias),
            modifier,
        },
    }
}

/// Generate the anomalies of a star: one with probability 0.6, else none.
pub fn generate_anomalies(rng: &mut impl Rng) -> Vec<StarAnomaly> {
    if chance(rng, ANOMALY_CHANCE) {
        vec![generate_anomaly(rng)]
    } else {
        Vec::new()
    }
}
