//! REST API endpoint handlers for the Observer server.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/galaxy` | Galaxy with resources advanced to now |
//! | `POST` | `/api/galaxy/regenerate` | Replace the galaxy (`?solarSystemCount=N`) |
//! | `GET` | `/api/health` | Liveness and generation counter |
//! | `GET` | `/` | HTML status page when no dashboard is built |

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::{Html, IntoResponse};
use nebula_types::Galaxy;
use nebula_world::GalaxyConfig;
use tracing::info;

use crate::error::ObserverError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for `POST /api/galaxy/regenerate`.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateQuery {
    /// Number of solar systems in the new galaxy. Omitted means the
    /// server's configured default.
    pub solar_system_count: Option<i64>,
}

impl RegenerateQuery {
    /// Validated generator configuration, if a count was supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError::InvalidQuery`] for negative or oversized
    /// counts.
    pub fn galaxy_config(&self) -> Result<Option<GalaxyConfig>, ObserverError> {
        self.solar_system_count
            .map(GalaxyConfig::from_signed)
            .transpose()
            .map_err(ObserverError::from)
    }
}

// ---------------------------------------------------------------------------
// GET /api/galaxy
// ---------------------------------------------------------------------------

/// Return the current galaxy with every planet's resources advanced to the
/// moment of the request.
pub async fn get_galaxy(State(state): State<Arc<AppState>>) -> Result<Json<Galaxy>, ObserverError> {
    let galaxy = state.store.query().await?;
    Ok(Json(galaxy))
}

// ---------------------------------------------------------------------------
// POST /api/galaxy/regenerate
// ---------------------------------------------------------------------------

/// Discard the current galaxy and return a freshly generated one.
pub async fn regenerate_galaxy(
    State(state): State<Arc<AppState>>,
    query: Result<Query<RegenerateQuery>, QueryRejection>,
) -> Result<Json<Galaxy>, ObserverError> {
    let Query(params) = query.map_err(|rejection| ObserverError::InvalidQuery(rejection.body_text()))?;
    let config = params.galaxy_config()?;

    let galaxy = state.store.regenerate(config).await;
    info!(
        galaxy_id = %galaxy.id,
        systems = galaxy.solar_systems.len(),
        "Regeneration requested over HTTP"
    );
    Ok(Json(galaxy))
}

// ---------------------------------------------------------------------------
// GET /api/health
// ---------------------------------------------------------------------------

/// Report liveness and how many galaxies have been generated.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let generation = state.store.generation().await;
    Json(serde_json::json!({
        "status": "ok",
        "generation": generation,
    }))
}

// ---------------------------------------------------------------------------
// Fallback -- HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML status page at `/` when no dashboard is built.
///
/// Any other unmatched path is a JSON 404.
pub async fn index(
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> Result<Html<String>, ObserverError> {
    if uri.path() != "/" {
        return Err(ObserverError::NotFound(uri.path().to_owned()));
    }

    let galaxy = state.store.query().await?;
    let generation = state.store.generation().await;
    let name = &galaxy.name;
    let system_count = galaxy.solar_systems.len();
    let planet_count = galaxy.planet_count();
    let controlled = galaxy
        .controlled_planet()
        .map_or_else(|| String::from("none"), |p| p.name.clone());

    Ok(Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Nebula</title>
    <style>
        body {{
            background: #0b0e1a;
            color: #c9d1d9;
            font-family: 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #a371f7; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #151a2d;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #a371f7; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #a371f7; text-decoration: none; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
    </style>
</head>
<body>
    <h1>{name}</h1>
    <p class="subtitle">No dashboard build found; serving status only.</p>

    <div>
        <div class="metric">
            <div class="label">Systems</div>
            <div class="value">{system_count}</div>
        </div>
        <div class="metric">
            <div class="label">Planets</div>
            <div class="value">{planet_count}</div>
        </div>
        <div class="metric">
            <div class="label">Controlled</div>
            <div class="value">{controlled}</div>
        </div>
        <div class="metric">
            <div class="label">Generation</div>
            <div class="value">{generation}</div>
        </div>
    </div>

    <h2>API Endpoints</h2>
    <ul>
        <li>GET <a href="/api/galaxy">/api/galaxy</a> -- Galaxy with live resources</li>
        <li>POST /api/galaxy/regenerate?solarSystemCount=N -- New galaxy</li>
        <li>GET <a href="/api/health">/api/health</a> -- Liveness</li>
    </ul>
</body>
</html>"#
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_count_means_default() {
        let query = RegenerateQuery::default();
        assert!(matches!(query.galaxy_config(), Ok(None)));
    }

    #[test]
    fn count_is_validated() {
        let ok = RegenerateQuery {
            solar_system_count: Some(6),
        };
        let config = ok.galaxy_config().ok().flatten();
        assert_eq!(config.map(GalaxyConfig::solar_system_count), Some(6));

        for bad in [-1, 257, i64::MAX] {
            let query = RegenerateQuery {
                solar_system_count: Some(bad),
            };
            assert!(matches!(
                query.galaxy_config(),
                Err(ObserverError::InvalidQuery(_))
            ));
        }
    }
}
