//! Single client record holding every attribute directly.

use crate::errors::{ClientError, Result};
use crate::oauth::clients::client::{Client, ClientSecretMatcher};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

/// Client that stores all data in struct fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultClient {
    /// Unique client identifier
    pub id: String,
    /// Client secret (empty for public clients)
    #[serde(default)]
    pub secret: String,
    /// Base redirect URI
    pub redirect_uri: String,
    /// Opaque data round-tripped through storage
    #[serde(default)]
    pub user_data: Value,
}

impl DefaultClient {
    pub fn new(
        id: impl Into<String>,
        secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        user_data: Value,
    ) -> Self {
        Self {
            id: id.into(),
            secret: secret.into(),
            redirect_uri: redirect_uri.into(),
            user_data,
        }
    }

    /// Overwrite every field with the values of `source`
    pub fn copy_from(&mut self, source: &dyn Client) {
        self.id = source.id().into_owned();
        self.secret = source.secret().into_owned();
        self.redirect_uri = source.redirect_uri().into_owned();
        self.user_data = source.user_data();
    }

    /// Like [`DefaultClient::copy_from`], but rejects an absent source and
    /// leaves `self` untouched in that case.
    pub fn try_copy_from(&mut self, source: Option<&dyn Client>) -> Result<()> {
        let source = source.ok_or_else(|| {
            ClientError::InvalidArgument(format!("no source client to copy into {}", self.id))
        })?;
        self.copy_from(source);
        Ok(())
    }
}

impl Client for DefaultClient {
    fn id(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn secret(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.secret)
    }

    fn redirect_uri(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.redirect_uri)
    }

    fn user_data(&self) -> Value {
        self.user_data.clone()
    }

    fn as_secret_matcher(&self) -> Option<&dyn ClientSecretMatcher> {
        Some(self)
    }
}

impl ClientSecretMatcher for DefaultClient {
    fn client_secret_matches(&self, secret: &str) -> bool {
        self.secret == secret
    }
}
