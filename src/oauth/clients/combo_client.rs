//! Composite client presenting several registered clients as one identity.
//!
//! A `ComboClient` is used when a single token must assert multiple
//! audiences. Its id, secret, redirect URI and user data are views over the
//! constituent clients, recomputed on every call.

use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;

use crate::errors::{ClientError, Result};
use crate::oauth::clients::client::{Client, ClientIdMatcher, ClientSecretMatcher};
use crate::oauth::clients::secret::{Argon2SecretVerifier, SecretVerifier};

/// Separator used when joining constituent attributes
pub const COMBO_SEPARATOR: &str = ",";

/// Client aggregating one constituent per audience entry.
///
/// `audience[i]` names `clients[i]`. Secret matching uses OR semantics: a
/// candidate that verifies against any one constituent authenticates the whole
/// composite.
#[derive(Debug)]
pub struct ComboClient {
    audience: Vec<String>,
    clients: Vec<Box<dyn Client>>,
    verifier: Arc<dyn SecretVerifier>,
}

impl ComboClient {
    /// Build a combo client verifying constituent secrets with Argon2.
    ///
    /// Fails if the audience is empty, contains duplicates, or does not have
    /// exactly one entry per client.
    pub fn new(audience: Vec<String>, clients: Vec<Box<dyn Client>>) -> Result<Self> {
        Self::with_verifier(audience, clients, Arc::new(Argon2SecretVerifier))
    }

    /// Build a combo client with a custom secret verifier
    pub fn with_verifier(
        audience: Vec<String>,
        clients: Vec<Box<dyn Client>>,
        verifier: Arc<dyn SecretVerifier>,
    ) -> Result<Self> {
        if audience.is_empty() {
            return Err(ClientError::EmptyAudience);
        }

        let mut seen = HashSet::with_capacity(audience.len());
        for entry in &audience {
            if !seen.insert(entry.as_str()) {
                return Err(ClientError::DuplicateAudience(entry.clone()));
            }
        }

        if audience.len() != clients.len() {
            return Err(ClientError::AudienceMismatch {
                audience: audience.len(),
                clients: clients.len(),
            });
        }

        Ok(Self {
            audience,
            clients,
            verifier,
        })
    }

    /// Audience entries in construction order
    pub fn audience(&self) -> &[String] {
        &self.audience
    }

    /// Constituent clients in construction order
    pub fn clients(&self) -> &[Box<dyn Client>] {
        &self.clients
    }

    /// User data of every constituent, in order
    pub fn user_data_list(&self) -> Vec<Value> {
        self.clients.iter().map(|c| c.user_data()).collect()
    }

    fn join_clients<'a>(&'a self, attr: impl Fn(&'a dyn Client) -> Cow<'a, str>) -> String {
        self.clients
            .iter()
            .map(|c| attr(c.as_ref()))
            .collect::<Vec<_>>()
            .join(COMBO_SEPARATOR)
    }
}

impl Client for ComboClient {
    fn id(&self) -> Cow<'_, str> {
        Cow::Owned(self.audience.join(COMBO_SEPARATOR))
    }

    fn secret(&self) -> Cow<'_, str> {
        Cow::Owned(self.join_clients(|c| c.secret()))
    }

    fn redirect_uri(&self) -> Cow<'_, str> {
        Cow::Owned(self.join_clients(|c| c.redirect_uri()))
    }

    fn user_data(&self) -> Value {
        Value::Array(self.user_data_list())
    }

    fn as_secret_matcher(&self) -> Option<&dyn ClientSecretMatcher> {
        Some(self)
    }

    fn as_id_matcher(&self) -> Option<&dyn ClientIdMatcher> {
        Some(self)
    }
}

impl ClientSecretMatcher for ComboClient {
    fn client_secret_matches(&self, secret: &str) -> bool {
        let matched = self
            .clients
            .iter()
            .find(|c| self.verifier.verify(&c.secret(), secret));

        match matched {
            Some(client) => {
                tracing::debug!(combo = %self.id(), constituent = %client.id(), "combo client secret matched");
                true
            }
            None => false,
        }
    }
}

impl ClientIdMatcher for ComboClient {
    fn client_id_matches(&self, id: &str) -> bool {
        self.audience.iter().any(|entry| entry == id)
    }
}
