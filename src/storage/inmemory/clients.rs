//! In-memory client store
//!
//! Keeps `DefaultClient` records in a map. Suitable for development and tests.

use crate::errors::{ClientError, StorageError};
use crate::oauth::clients::{Client, DefaultClient};
use crate::storage::traits::*;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory implementation of [`ClientStore`]
#[derive(Debug, Default)]
pub struct MemoryClientStore {
    clients: Mutex<HashMap<String, DefaultClient>>,
}

impl MemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reload a cached client copy from the stored record.
    ///
    /// Fails with `InvalidArgument` and leaves `cached` untouched if the
    /// record no longer exists.
    pub async fn refresh(&self, cached: &mut DefaultClient) -> std::result::Result<(), ClientError> {
        let current = self.get_client(&cached.id).await?;
        cached.try_copy_from(current.as_deref())?;
        tracing::debug!(client_id = %cached.id, "refreshed cached client");
        Ok(())
    }
}

#[async_trait]
impl ClientStore for MemoryClientStore {
    async fn store_client(&self, client: &DefaultClient) -> Result<()> {
        let mut clients = self
            .clients
            .lock()
            .map_err(|e| StorageError::LockPoisoned(format!("Lock error: {}", e)))?;
        clients.insert(client.id.clone(), client.clone());
        Ok(())
    }

    async fn get_client(&self, client_id: &str) -> Result<Option<Box<dyn Client>>> {
        let clients = self
            .clients
            .lock()
            .map_err(|e| StorageError::LockPoisoned(format!("Lock error: {}", e)))?;
        Ok(clients
            .get(client_id)
            .cloned()
            .map(|client| Box::new(client) as Box<dyn Client>))
    }

    async fn delete_client(&self, client_id: &str) -> Result<()> {
        let mut clients = self
            .clients
            .lock()
            .map_err(|e| StorageError::LockPoisoned(format!("Lock error: {}", e)))?;
        clients
            .remove(client_id)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(format!("client {}", client_id)))
    }

    async fn list_clients(&self, limit: Option<usize>) -> Result<Vec<DefaultClient>> {
        let clients = self
            .clients
            .lock()
            .map_err(|e| StorageError::LockPoisoned(format!("Lock error: {}", e)))?;
        let mut result: Vec<DefaultClient> = clients.values().cloned().collect();
        result.sort_by(|a, b| a.id.cmp(&b.id));
        if let Some(limit) = limit {
            result.truncate(limit);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_store_and_get_client() {
        let store = MemoryClientStore::new();
        let client = DefaultClient::new("c1", "s1", "https://a/cb", json!({"team": "x"}));
        store.store_client(&client).await.unwrap();

        let found = store.get_client("c1").await.unwrap().unwrap();
        assert_eq!(found.id(), "c1");
        assert_eq!(found.secret(), "s1");
        assert_eq!(found.redirect_uri(), "https://a/cb");
        assert_eq!(found.user_data(), json!({"team": "x"}));

        assert!(store.get_client("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_client() {
        let store = MemoryClientStore::new();
        store
            .store_client(&DefaultClient::new("c1", "s1", "", json!(null)))
            .await
            .unwrap();

        store.delete_client("c1").await.unwrap();
        assert!(store.get_client("c1").await.unwrap().is_none());

        let err = store.delete_client("c1").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_clients_sorted_and_limited() {
        let store = MemoryClientStore::new();
        for id in ["b", "c", "a"] {
            store
                .store_client(&DefaultClient::new(id, "", "", json!(null)))
                .await
                .unwrap();
        }

        let all = store.list_clients(None).await.unwrap();
        let ids: Vec<_> = all.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        let limited = store.list_clients(Some(2)).await.unwrap();
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[1].id, "b");
    }

    #[tokio::test]
    async fn test_refresh_cached_copy() {
        let store = MemoryClientStore::new();
        let mut cached = DefaultClient::new("c1", "old", "https://old/cb", json!(1));
        store
            .store_client(&DefaultClient::new("c1", "new", "https://new/cb", json!(2)))
            .await
            .unwrap();

        store.refresh(&mut cached).await.unwrap();
        assert_eq!(cached.secret, "new");
        assert_eq!(cached.redirect_uri, "https://new/cb");
        assert_eq!(cached.user_data, json!(2));

        store.delete_client("c1").await.unwrap();
        let err = store.refresh(&mut cached).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidArgument(_)));
        assert_eq!(cached.secret, "new");
    }
}
