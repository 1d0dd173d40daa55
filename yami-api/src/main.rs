//! # Yami API Server
//!
//! Admin-facing HTTP surface for the Yami user pool:
//! role assignment and user listing, both gated on a verified admin token.
//!
//! ## Usage
//!
//! ```bash
//! USER_POOL_ID=us-east-2_AbCdEfGhI cargo run -p yami-api
//! ```

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yami_api::{
    app::{build_router, AppState},
    config::Config,
};
use yami_shared::auth::JwksVerifier;
use yami_shared::directory::CognitoDirectory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yami_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Yami API Server v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.pool.region.clone()))
        .load()
        .await;

    // The app client id lives in Secrets Manager, resolved once at startup.
    // A missing secret should fail the boot, not the first request.
    let secrets = aws_sdk_secretsmanager::Client::new(&aws_config);
    let client_id = secrets
        .get_secret_value()
        .secret_id(&config.pool.client_id_secret_name)
        .send()
        .await?
        .secret_string()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("client id secret has no string value"))?;
    tracing::info!(
        secret = %config.pool.client_id_secret_name,
        "resolved app client id ({} chars)",
        client_id.len()
    );

    let cognito = aws_sdk_cognitoidentityprovider::Client::new(&aws_config);
    let directory = CognitoDirectory::new(cognito, config.pool.user_pool_id.clone());
    let verifier = JwksVerifier::new(&config.pool.region, &config.pool.user_pool_id);

    let bind_address = config.bind_address();
    let state = AppState::new(Arc::new(directory), Arc::new(verifier), config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
