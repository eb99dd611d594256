//! Client secret management CLI.
//!
//! Produces and checks the Argon2 secret hashes stored for clients that are
//! grouped into combo clients.
//!
//! ```bash
//! # New random secret plus its hash
//! client-secret generate
//!
//! # Hash an existing secret
//! client-secret hash "my-secret"
//!
//! # Check a candidate against a stored hash
//! client-secret verify --hash '$argon2id$v=19$...' "my-secret"
//! ```
//!
//! Hash cost is read from `SECRET_HASH_MEMORY_KIB`, `SECRET_HASH_ITERATIONS`
//! and `SECRET_HASH_PARALLELISM`.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Verification failed
//! - 2: Configuration or hashing error

use anyhow::Result;
use clap::{Parser, Subcommand};
use client_identity::{
    config::Config,
    oauth::clients::{
        Argon2SecretVerifier, SecretVerifier, generate_client_secret, hash_client_secret,
    },
};
use std::process;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "client-secret", version, about = "Generate, hash and verify client secrets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random secret and print it with its hash
    Generate,
    /// Print the Argon2 hash of a secret
    Hash {
        /// Cleartext secret
        secret: String,
    },
    /// Check a candidate secret against a stored hash
    Verify {
        /// Stored Argon2 PHC hash
        #[arg(long)]
        hash: String,
        /// Candidate secret
        candidate: String,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "client_identity=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("Error: {err:#}");
            process::exit(2);
        }
    }
}

fn run(command: Commands) -> Result<bool> {
    match command {
        Commands::Generate => {
            let config = Config::new()?;
            let secret = generate_client_secret();
            let hash = hash_client_secret(&secret, &config.secret_hash_params())?;
            println!("secret: {secret}");
            println!("hash:   {hash}");
            Ok(true)
        }
        Commands::Hash { secret } => {
            let config = Config::new()?;
            tracing::debug!(params = ?config.secret_hash_params(), "hashing client secret");
            println!("{}", hash_client_secret(&secret, &config.secret_hash_params())?);
            Ok(true)
        }
        Commands::Verify { hash, candidate } => {
            let matched = Argon2SecretVerifier.verify(&hash, &candidate);
            println!("{}", if matched { "match" } else { "no match" });
            Ok(matched)
        }
    }
}
