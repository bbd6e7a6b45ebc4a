//! Shared application state for the Observer API server.

use std::path::PathBuf;
use std::sync::Arc;

use nebula_core::GalaxyStore;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The store
/// serializes access to the galaxy itself; the directories are fixed at
/// startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Owner of the live galaxy.
    pub store: Arc<GalaxyStore>,
    /// Built dashboard served at the root, with `index.html` as fallback.
    pub public_dir: PathBuf,
    /// Planet and star artwork served under `/images`.
    pub images_dir: PathBuf,
}

impl AppState {
    /// Create state around `store` with the default `public` and `images`
    /// directories.
    pub fn new(store: Arc<GalaxyStore>) -> Self {
        Self {
            store,
            public_dir: PathBuf::from("public"),
            images_dir: PathBuf::from("images"),
        }
    }

    /// Replace the static asset directories.
    #[must_use]
    pub fn with_dirs(mut self, public_dir: PathBuf, images_dir: PathBuf) -> Self {
        self.public_dir = public_dir;
        self.images_dir = images_dir;
        self
    }

    /// Whether a built dashboard is present in [`AppState::public_dir`].
    pub fn has_dashboard(&self) -> bool {
        self.public_dir.join("index.html").is_file()
    }
}
