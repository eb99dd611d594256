//! Store-backed client authentication and combo client resolution.

use std::sync::Arc;

use crate::errors::{ClientError, Result};
use crate::oauth::clients::client::Client;
use crate::oauth::clients::combo_client::ComboClient;
use crate::oauth::clients::matching::client_secret_matches;
use crate::oauth::clients::secret::SecretVerifier;
use crate::storage::traits::ClientStore;

/// Look up `client_id` and verify `secret` against it
pub async fn authenticate_client(
    store: &dyn ClientStore,
    client_id: &str,
    secret: &str,
) -> Result<Box<dyn Client>> {
    let client = store
        .get_client(client_id)
        .await?
        .ok_or_else(|| ClientError::ClientNotFound(client_id.to_string()))?;

    if !client_secret_matches(client.as_ref(), secret) {
        tracing::warn!(client_id, "client secret did not match");
        return Err(ClientError::InvalidSecret(client_id.to_string()));
    }

    tracing::debug!(client_id, "client authenticated");
    Ok(client)
}

/// Build a combo client for `audience`, one stored client per entry.
///
/// Constituent secrets are expected to be Argon2 hashes.
pub async fn resolve_combo_client(
    store: &dyn ClientStore,
    audience: &[String],
) -> Result<ComboClient> {
    let clients = load_constituents(store, audience).await?;
    ComboClient::new(audience.to_vec(), clients)
}

/// Like [`resolve_combo_client`], verifying constituent secrets with `verifier`
pub async fn resolve_combo_client_with_verifier(
    store: &dyn ClientStore,
    audience: &[String],
    verifier: Arc<dyn SecretVerifier>,
) -> Result<ComboClient> {
    let clients = load_constituents(store, audience).await?;
    ComboClient::with_verifier(audience.to_vec(), clients, verifier)
}

async fn load_constituents(
    store: &dyn ClientStore,
    audience: &[String],
) -> Result<Vec<Box<dyn Client>>> {
    let mut clients = Vec::with_capacity(audience.len());
    for client_id in audience {
        let client = store
            .get_client(client_id)
            .await?
            .ok_or_else(|| ClientError::ClientNotFound(client_id.clone()))?;
        clients.push(client);
    }
    tracing::debug!(audience = ?audience, "resolved combo client constituents");
    Ok(clients)
}
