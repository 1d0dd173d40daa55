//! Account record persistence
//!
//! The post-confirmation trigger writes one [`AccountRecord`] per signup.
//! [`DynamoStore`] is the production implementation; [`MemoryStore`] backs
//! the tests.
//!
//! [`AccountRecord`]: crate::models::AccountRecord

pub mod dynamo;
pub mod memory;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::models::AccountRecord;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The table write failed
    #[error("Account write failed: {0}")]
    Write(String),
}

/// Contract for writing account records
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Writes one account record, keyed by its user id
    async fn put_account(&self, record: &AccountRecord) -> Result<(), StoreError>;
}
