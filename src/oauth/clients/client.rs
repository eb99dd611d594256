//! Client capability traits.
//!
//! `Client` is the interface the authorization engine holds. The optional
//! secret and id matching capabilities are separate traits that a client type
//! exposes through `as_secret_matcher` / `as_id_matcher`, so callers probe for
//! them at runtime instead of every client carrying matching logic.

use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// Registered OAuth client
pub trait Client: Send + Sync + fmt::Debug {
    /// Client identifier, the lookup key of the client store
    fn id(&self) -> Cow<'_, str>;

    /// Cleartext client secret; empty for public clients.
    ///
    /// Must not be used for authentication when [`Client::as_secret_matcher`]
    /// returns `Some`.
    fn secret(&self) -> Cow<'_, str>;

    /// Base redirect URI
    fn redirect_uri(&self) -> Cow<'_, str>;

    /// Data passed through to storage. Never interpreted here.
    fn user_data(&self) -> Value;

    /// Secret matching capability, if this client owns its verification
    fn as_secret_matcher(&self) -> Option<&dyn ClientSecretMatcher> {
        None
    }

    /// Id matching capability, if this client matches more than its own id
    fn as_id_matcher(&self) -> Option<&dyn ClientIdMatcher> {
        None
    }
}

/// Client-owned secret verification.
///
/// When a client exposes this capability callers must use it exclusively and
/// never compare against [`Client::secret`].
pub trait ClientSecretMatcher {
    /// Returns true if `secret` is a valid secret for this client
    fn client_secret_matches(&self, secret: &str) -> bool;
}

/// Client-owned id matching
pub trait ClientIdMatcher {
    /// Returns true if `id` identifies this client
    fn client_id_matches(&self, id: &str) -> bool;
}
