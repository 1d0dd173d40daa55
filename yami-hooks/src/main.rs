//! Post-confirmation trigger binary
//!
//! Invoked by the identity provider after a signup is confirmed. Writes
//! the account record to the user table named by `USER_TABLE_NAME` and
//! returns the event unchanged. Errors propagate to the runtime so the
//! provider fails the signup rather than losing the record.

use std::sync::Arc;

use aws_config::BehaviorVersion;
use aws_lambda_events::event::cognito::CognitoEventUserPoolsPostConfirmation;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::error;

use yami_hooks::handle_post_confirmation;
use yami_shared::store::DynamoStore;

async fn function_handler(
    store: Arc<DynamoStore>,
    event: LambdaEvent<CognitoEventUserPoolsPostConfirmation>,
) -> Result<CognitoEventUserPoolsPostConfirmation, Error> {
    match handle_post_confirmation(store.as_ref(), event.payload).await {
        Ok(event) => Ok(event),
        Err(e) => {
            error!("Failed to record confirmed signup: {}", e);
            Err(e.into())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let table_name = std::env::var("USER_TABLE_NAME")
        .map_err(|_| Error::from("USER_TABLE_NAME environment variable is required"))?;

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store = Arc::new(DynamoStore::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        table_name,
    ));

    run(service_fn(move |event| {
        let store = store.clone();
        async move { function_handler(store, event).await }
    }))
    .await
}
