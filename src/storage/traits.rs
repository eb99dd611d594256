//! Storage trait definitions for registered clients.
//!
//! The store is only a lookup seam; the model never persists anything itself.

use crate::errors::StorageError;
use crate::oauth::clients::{Client, DefaultClient};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Trait for storing and retrieving registered clients
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Store or replace a client record
    async fn store_client(&self, client: &DefaultClient) -> Result<()>;

    /// Retrieve a client by ID
    async fn get_client(&self, client_id: &str) -> Result<Option<Box<dyn Client>>>;

    /// Delete a client
    async fn delete_client(&self, client_id: &str) -> Result<()>;

    /// List stored clients ordered by ID (for admin purposes)
    async fn list_clients(&self, limit: Option<usize>) -> Result<Vec<DefaultClient>>;
}
