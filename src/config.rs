//! Environment-based configuration for client secret handling.

use anyhow::Result;

use crate::errors::ConfigError;
use crate::oauth::clients::secret::SecretHashParams;

/// Argon2 memory cost in KiB
#[derive(Clone, Debug)]
pub struct SecretHashMemoryKib(u32);

/// Argon2 iteration count
#[derive(Clone, Debug)]
pub struct SecretHashIterations(u32);

/// Argon2 degree of parallelism
#[derive(Clone, Debug)]
pub struct SecretHashParallelism(u32);

/// Main application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub version: String,
    pub secret_hash_memory_kib: SecretHashMemoryKib,
    pub secret_hash_iterations: SecretHashIterations,
    pub secret_hash_parallelism: SecretHashParallelism,
}

impl Config {
    /// Create a new configuration from environment variables
    pub fn new() -> Result<Self> {
        let secret_hash_memory_kib: SecretHashMemoryKib =
            default_env("SECRET_HASH_MEMORY_KIB", "19456").try_into()?;
        let secret_hash_iterations: SecretHashIterations =
            default_env("SECRET_HASH_ITERATIONS", "2").try_into()?;
        let secret_hash_parallelism: SecretHashParallelism =
            default_env("SECRET_HASH_PARALLELISM", "1").try_into()?;

        Ok(Self {
            version: version()?,
            secret_hash_memory_kib,
            secret_hash_iterations,
            secret_hash_parallelism,
        })
    }

    /// Argon2 parameters used when hashing new client secrets
    pub fn secret_hash_params(&self) -> SecretHashParams {
        SecretHashParams {
            memory_kib: *self.secret_hash_memory_kib.as_ref(),
            iterations: *self.secret_hash_iterations.as_ref(),
            parallelism: *self.secret_hash_parallelism.as_ref(),
        }
    }
}

/// Get application version from build environment
pub fn version() -> Result<String> {
    option_env!("CARGO_PKG_VERSION")
        .map(|val| val.to_string())
        .ok_or(ConfigError::VersionNotSet.into())
}

fn default_env(name: &str, default_value: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default_value.to_string())
}

fn parse_positive(name: &str, value: &str) -> Result<u32, ConfigError> {
    let parsed = value
        .trim()
        .parse::<u32>()
        .map_err(|err| ConfigError::NumberParsingFailed(name.to_string(), err))?;
    if parsed == 0 {
        return Err(ConfigError::EnvVarInvalid(
            name.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(parsed)
}

impl TryFrom<String> for SecretHashMemoryKib {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let kib = parse_positive("SECRET_HASH_MEMORY_KIB", &value)?;
        // argon2 requires at least 8 KiB per lane
        if kib < 8 {
            return Err(ConfigError::EnvVarInvalid(
                "SECRET_HASH_MEMORY_KIB".to_string(),
                format!("{} is below the 8 KiB minimum", kib),
            )
            .into());
        }
        Ok(Self(kib))
    }
}

impl AsRef<u32> for SecretHashMemoryKib {
    fn as_ref(&self) -> &u32 {
        &self.0
    }
}

impl TryFrom<String> for SecretHashIterations {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(Self(parse_positive("SECRET_HASH_ITERATIONS", &value)?))
    }
}

impl AsRef<u32> for SecretHashIterations {
    fn as_ref(&self) -> &u32 {
        &self.0
    }
}

impl TryFrom<String> for SecretHashParallelism {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(Self(parse_positive("SECRET_HASH_PARALLELISM", &value)?))
    }
}

impl AsRef<u32> for SecretHashParallelism {
    fn as_ref(&self) -> &u32 {
        &self.0
    }
}
