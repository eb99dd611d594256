//! Capability probing used by the authorization engine.

use crate::oauth::clients::client::Client;

/// Check `candidate` as a secret for `client`.
///
/// A client exposing a secret matcher is verified through it alone; only
/// clients without one are compared against [`Client::secret`].
pub fn client_secret_matches(client: &dyn Client, candidate: &str) -> bool {
    match client.as_secret_matcher() {
        Some(matcher) => matcher.client_secret_matches(candidate),
        None => client.secret() == candidate,
    }
}

/// Check whether `candidate` (an id or token audience) identifies `client`
pub fn client_id_matches(client: &dyn Client, candidate: &str) -> bool {
    match client.as_id_matcher() {
        Some(matcher) => matcher.client_id_matches(candidate),
        None => client.id() == candidate,
    }
}
