//! Configuration, clock, and galaxy ownership for the Nebula dashboard.
//!
//! This crate sits between the pure generators in `nebula-world` and the
//! HTTP boundary. It owns the one live galaxy and exposes the two boundary
//! operations, query and regenerate.
//!
//! # Modules
//!
//! - [`clock`] -- [`Clock`] trait with system and manual implementations.
//! - [`config`] -- Configuration loading from `nebula-config.yaml` into
//!   strongly-typed structs.
//! - [`store`] -- [`GalaxyStore`], the owner of the current galaxy.
//!
//! [`Clock`]: clock::Clock
//! [`GalaxyStore`]: store::GalaxyStore

pub mod clock;
pub mod config;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, NebulaConfig};
pub use store::{GalaxyStore, StoreError};
