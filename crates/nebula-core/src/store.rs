//! Ownership of the single live galaxy.
//!
//! [`GalaxyStore`] is the only place the galaxy is mutated. Both boundary
//! operations take the same lock, so an accrual pass and a regeneration
//! never interleave, and each accrual pass samples the clock exactly once.
//!
//! An accrual pass runs on a working copy that is committed only when
//! every planet advanced successfully; a failed pass leaves the stored
//! galaxy untouched.

use std::sync::Arc;

use nebula_types::Galaxy;
use nebula_world::{AccrualSummary, GalaxyConfig, WorldError, advance_galaxy, generate_galaxy};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::config::{ConfigError, GalaxySettings};

/// Errors surfaced by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Resource accrual failed.
    #[error("accrual failed: {0}")]
    World(#[from] WorldError),
}

#[derive(Debug)]
struct Inner {
    galaxy: Galaxy,
    /// Number of galaxies generated so far, including the current one.
    generation: u64,
}

/// Owner of the current galaxy, its clock, and its generation settings.
pub struct GalaxyStore {
    inner: Mutex<Inner>,
    clock: Arc<dyn Clock>,
    default_config: GalaxyConfig,
    seed: Option<u64>,
}

impl std::fmt::Debug for GalaxyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalaxyStore")
            .field("default_config", &self.default_config)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl GalaxyStore {
    /// Create a store and generate its first galaxy at the clock's current
    /// instant.
    ///
    /// With `seed` set, the `k`-th galaxy (0-based) is drawn from
    /// `StdRng::seed_from_u64(seed + k)`, so a restarted server replays the
    /// same sequence of galaxies.
    pub fn new(clock: Arc<dyn Clock>, default_config: GalaxyConfig, seed: Option<u64>) -> Self {
        let now_ms = clock.now_ms();
        let galaxy = generate_galaxy(default_config, &mut rng_for(seed, 0), now_ms);
        log_generated(&galaxy, 1, now_ms);

        Self {
            inner: Mutex::new(Inner {
                galaxy,
                generation: 1,
            }),
            clock,
            default_config,
            seed,
        }
    }

    /// Create a store from the `galaxy` section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the configured system count is
    /// out of range.
    pub fn from_settings(
        settings: &GalaxySettings,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        let config = settings.generation_config()?;
        Ok(Self::new(clock, config, settings.seed))
    }

    /// Advance every planet to the clock's current instant and return a
    /// copy of the result.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::World`] if accrual overflows. The stored
    /// galaxy is unchanged in that case.
    pub async fn query(&self) -> Result<Galaxy, StoreError> {
        let mut inner = self.inner.lock().await;
        let now_ms = self.clock.now_ms();
        Self::accrue(&mut inner, now_ms)
    }

    /// Like [`GalaxyStore::query`] but at a caller-supplied instant.
    ///
    /// # Errors
    ///
    /// Same as [`GalaxyStore::query`].
    pub async fn query_at(&self, now_ms: i64) -> Result<Galaxy, StoreError> {
        let mut inner = self.inner.lock().await;
        Self::accrue(&mut inner, now_ms)
    }

    /// Discard the current galaxy and generate a new one.
    ///
    /// `config` overrides the store's default for this galaxy only. The new
    /// galaxy's planets are stamped with the regeneration instant, so they
    /// start accruing from zero.
    pub async fn regenerate(&self, config: Option<GalaxyConfig>) -> Galaxy {
        let config = config.unwrap_or(self.default_config);
        let mut inner = self.inner.lock().await;
        let now_ms = self.clock.now_ms();

        let galaxy = generate_galaxy(config, &mut rng_for(self.seed, inner.generation), now_ms);
        let previous = std::mem::replace(&mut inner.galaxy, galaxy.clone());
        inner.generation = inner.generation.saturating_add(1);

        info!(
            previous_id = %previous.id,
            generation = inner.generation,
            "Galaxy regenerated"
        );
        log_generated(&galaxy, inner.generation, now_ms);
        galaxy
    }

    /// Number of galaxies this store has generated, including the current one.
    pub async fn generation(&self) -> u64 {
        self.inner.lock().await.generation
    }

    /// System count used when [`GalaxyStore::regenerate`] gets no override.
    pub const fn default_config(&self) -> GalaxyConfig {
        self.default_config
    }

    fn accrue(inner: &mut Inner, now_ms: i64) -> Result<Galaxy, StoreError> {
        let mut next = inner.galaxy.clone();
        let AccrualSummary { advanced, skipped } = advance_galaxy(&mut next, now_ms)?;
        inner.galaxy.clone_from(&next);
        debug!(now_ms, advanced, skipped, "Galaxy queried");
        Ok(next)
    }
}

fn rng_for(seed: Option<u64>, generation: u64) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, |seed| {
        StdRng::seed_from_u64(seed.wrapping_add(generation))
    })
}

fn log_generated(galaxy: &Galaxy, generation: u64, now_ms: i64) {
    info!(
        galaxy_id = %galaxy.id,
        name = %galaxy.name,
        systems = galaxy.solar_systems.len(),
        planets = galaxy.planet_count(),
        generation,
        now_ms,
        "Galaxy generated"
    );
}
