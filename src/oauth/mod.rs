//! OAuth client identity model consumed by an authorization engine.

pub mod clients;

// Re-export frequently used items
pub use crate::storage::{inmemory::MemoryClientStore, traits::ClientStore};
pub use clients::{
    Client, ClientIdMatcher, ClientSecretMatcher, ComboClient, DefaultClient,
    authenticate_client, client_id_matches, client_secret_matches, resolve_combo_client,
};
