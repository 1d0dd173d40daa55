//! In-memory account store for tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::{AccountStore, StoreError};
use crate::models::AccountRecord;

/// Store that keeps written records in memory for assertions
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<AccountRecord>>,
    failure: Option<String>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every write fail with the given error text
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// All records written so far
    pub fn records(&self) -> Vec<AccountRecord> {
        self.records.lock().expect("records lock poisoned").clone()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn put_account(&self, record: &AccountRecord) -> Result<(), StoreError> {
        if let Some(message) = &self.failure {
            return Err(StoreError::Write(message.clone()));
        }

        self.records
            .lock()
            .expect("records lock poisoned")
            .push(record.clone());
        Ok(())
    }
}
