//! Galaxy generation and its validated configuration.
//!
//! [`generate_galaxy`] is a pure function of its configuration, the random
//! source it is handed and the creation instant. Seeding the random source
//! makes the result fully reproducible.

use nebula_types::{Galaxy, SolarSystem};
use rand::Rng;
use tracing::debug;

use crate::constants::{DEFAULT_SOLAR_SYSTEM_COUNT, MAX_SOLAR_SYSTEM_COUNT};
use crate::error::WorldError;
use crate::naming;
use crate::star::generate_star;

/// Validated galaxy generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalaxyConfig {
    solar_system_count: u32,
}

impl GalaxyConfig {
    /// Build a configuration for `solar_system_count` systems.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidSystemCount`] if the count exceeds
    /// [`MAX_SOLAR_SYSTEM_COUNT`].
    pub fn new(solar_system_count: u32) -> Result<Self, WorldError> {
        if solar_system_count > MAX_SOLAR_SYSTEM_COUNT {
            return Err(WorldError::InvalidSystemCount {
                requested: i64::from(solar_system_count),
                max: MAX_SOLAR_SYSTEM_COUNT,
            });
        }
        Ok(Self { solar_system_count })
    }

    /// Build a configuration from an untrusted signed count.
    ///
    /// Negative counts are rejected rather than clamped.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidSystemCount`] if the count is negative
    /// or exceeds [`MAX_SOLAR_SYSTEM_COUNT`].
    pub fn from_signed(solar_system_count: i64) -> Result<Self, WorldError> {
        let Ok(count) = u32::try_from(solar_system_count) else {
            return Err(WorldError::InvalidSystemCount {
                requested: solar_system_count,
                max: MAX_SOLAR_SYSTEM_COUNT,
            });
        };
        Self::new(count)
    }

    /// Number of solar systems to generate.
    pub const fn solar_system_count(self) -> u32 {
        self.solar_system_count
    }
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            solar_system_count: DEFAULT_SOLAR_SYSTEM_COUNT,
        }
    }
}

/// Generate one solar system around a freshly generated star.
pub fn generate_solar_system(rng: &mut impl Rng, now_ms: i64) -> SolarSystem {
    let star = generate_star(rng, now_ms);
    SolarSystem {
        id: naming::system_id(rng),
        name: naming::system_name(&star.name),
        star,
    }
}

/// Generate a complete galaxy.
///
/// Produces exactly `config.solar_system_count()` independent systems.
/// Every planet is stamped with `now_ms`. The first planet of the first
/// system, if there is one, is the only planet marked as controlled.
pub fn generate_galaxy(config: GalaxyConfig, rng: &mut impl Rng, now_ms: i64) -> Galaxy {
    let mut solar_systems: Vec<SolarSystem> = (0..config.solar_system_count())
        .map(|_| generate_solar_system(rng, now_ms))
        .collect();

    if let Some(home) = solar_systems
        .first_mut()
        .and_then(|system| system.star.planets.first_mut())
    {
        home.is_controlled = true;
    }

    let galaxy = Galaxy {
        id: naming::galaxy_id(rng),
        name: naming::galaxy_name(rng),
        solar_systems,
    };

    debug!(
        galaxy_id = %galaxy.id,
        systems = galaxy.solar_systems.len(),
        planets = galaxy.planet_count(),
        "Galaxy generated"
    );

    galaxy
}
