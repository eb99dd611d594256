//! Registered client identities.
//!
//! Defines the `Client` capability trait, its optional secret and id matching
//! capabilities, the single-record `DefaultClient`, and the multi-audience
//! `ComboClient`.

pub mod client;
pub mod combo_client;
pub mod default_client;
pub mod lookup;
pub mod matching;
pub mod secret;

// Re-export main types and helpers
pub use client::{Client, ClientIdMatcher, ClientSecretMatcher};
pub use combo_client::{COMBO_SEPARATOR, ComboClient};
pub use default_client::DefaultClient;
pub use lookup::{authenticate_client, resolve_combo_client, resolve_combo_client_with_verifier};
pub use matching::{client_id_matches, client_secret_matches};
pub use secret::{
    Argon2SecretVerifier, PlaintextSecretVerifier, SecretHashParams, SecretVerifier,
    generate_client_secret, hash_client_secret,
};
