//! Client secret generation, hashing, and verification.
//!
//! Stored secrets for composite clients are Argon2id PHC strings. Verification
//! goes through the [`SecretVerifier`] seam so a deployment can substitute its
//! own primitive.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use base64::prelude::*;
use rand::Rng;
use std::fmt;
use subtle::ConstantTimeEq;

use crate::errors::{ClientError, Result};

/// Password-verification primitive used against stored client secrets
pub trait SecretVerifier: Send + Sync + fmt::Debug {
    /// Returns true if `candidate` verifies against `stored`
    fn verify(&self, stored: &str, candidate: &str) -> bool;
}

/// Verifies candidates against Argon2 PHC hash strings
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2SecretVerifier;

impl SecretVerifier for Argon2SecretVerifier {
    fn verify(&self, stored: &str, candidate: &str) -> bool {
        let parsed = match PasswordHash::new(stored) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!(error = ?err, "stored client secret is not a PHC hash");
                return false;
            }
        };
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Compares cleartext secrets in constant time
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextSecretVerifier;

impl SecretVerifier for PlaintextSecretVerifier {
    fn verify(&self, stored: &str, candidate: &str) -> bool {
        stored.as_bytes().ct_eq(candidate.as_bytes()).into()
    }
}

/// Argon2id cost parameters for hashing new secrets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretHashParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for SecretHashParams {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Hash a client secret into an Argon2id PHC string
pub fn hash_client_secret(secret: &str, params: &SecretHashParams) -> Result<String> {
    let params = Params::new(params.memory_kib, params.iterations, params.parallelism, None)
        .map_err(|e| ClientError::SecretHashingFailed(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| ClientError::SecretHashingFailed(e.to_string()))?;
    Ok(hash.to_string())
}

/// Generate a random client secret
pub fn generate_client_secret() -> String {
    let bytes: [u8; 32] = rand::thread_rng().r#gen();
    BASE64_URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
pub(crate) fn test_hash_params() -> SecretHashParams {
    SecretHashParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argon2_round_trip() {
        let hash = hash_client_secret("s3cret", &test_hash_params()).unwrap();
        assert!(hash.starts_with("$argon2id$"));

        let verifier = Argon2SecretVerifier;
        assert!(verifier.verify(&hash, "s3cret"));
        assert!(!verifier.verify(&hash, "S3cret"));
        assert!(!verifier.verify(&hash, ""));
    }

    #[test]
    fn test_argon2_rejects_cleartext_stored_secret() {
        let verifier = Argon2SecretVerifier;
        assert!(!verifier.verify("s3cret", "s3cret"));
        assert!(!verifier.verify("", ""));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_client_secret("same", &test_hash_params()).unwrap();
        let second = hash_client_secret("same", &test_hash_params()).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_invalid_params_are_reported() {
        let params = SecretHashParams {
            memory_kib: 1,
            iterations: 1,
            parallelism: 1,
        };
        let err = hash_client_secret("s", &params).unwrap_err();
        assert!(matches!(err, ClientError::SecretHashingFailed(_)));
    }

    #[test]
    fn test_plaintext_verifier() {
        let verifier = PlaintextSecretVerifier;
        assert!(verifier.verify("s1", "s1"));
        assert!(!verifier.verify("s1", "s2"));
        assert!(!verifier.verify("s1", "s1x"));
        assert!(verifier.verify("", ""));
    }

    #[test]
    fn test_generate_client_secret() {
        let secret = generate_client_secret();
        assert_eq!(secret.len(), 43);
        assert_ne!(secret, generate_client_secret());
    }
}
