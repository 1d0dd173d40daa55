//! Application state and router builder
//!
//! The router exposes a public health check plus the two administrative
//! endpoints. Both admin endpoints sit behind the same gate: bearer token
//! extraction, token verification, then the `Admins` group requirement.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use yami_api::{app::AppState, config::Config};
//! use yami_shared::auth::StaticVerifier;
//! use yami_shared::directory::MockDirectory;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let state = AppState::new(
//!     Arc::new(MockDirectory::new()),
//!     Arc::new(StaticVerifier::new()),
//!     config,
//! );
//! let app = yami_api::app::build_router(state);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{config::Config, error::ApiError, routes};
use yami_shared::auth::{extract_bearer, require_group, TokenVerifier, ADMIN_GROUP};
use yami_shared::directory::Directory;

/// Shared application state
///
/// Cloned per request via Axum's `State` extractor. The directory and
/// verifier are process-wide reusable clients, read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Identity provider admin API
    pub directory: Arc<dyn Directory>,

    /// Bearer token verifier
    pub verifier: Arc<dyn TokenVerifier>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(
        directory: Arc<dyn Directory>,
        verifier: Arc<dyn TokenVerifier>,
        config: Config,
    ) -> Self {
        Self {
            directory,
            verifier,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router
///
/// # Routes
///
/// ```text
/// /
/// ├── GET  /health        # Liveness probe (public)
/// ├── POST /assign-role   # Add a user to a group (admin gate)
/// └── GET  /fetch-users   # List users partitioned by role (admin gate)
/// ```
///
/// # Middleware Stack
///
/// 1. Logging (tower-http TraceLayer)
/// 2. CORS (permissive, matching the deployed front door)
/// 3. Admin gate (the two protected routes only)
pub fn build_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/assign-role", post(routes::assign_role::assign_role))
        .route("/fetch-users", get(routes::fetch_users::fetch_users))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            admin_gate,
        ));

    Router::new()
        .route("/health", get(routes::health::health_check))
        .merge(admin_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Admin gate middleware
///
/// Distinguishes three rejections:
/// - no bearer token at all → 401 Unauthorized
/// - token fails verification → 403 "Invalid token"
/// - verified token without the admin group → 403 "Admins only"
///
/// On success the verified claims are stored in request extensions for the
/// handler to read.
async fn admin_gate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let token = extract_bearer(header_value).ok_or(ApiError::Unauthorized)?;

    let claims = state.verifier.verify(token).await?;
    require_group(&claims, ADMIN_GROUP)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
