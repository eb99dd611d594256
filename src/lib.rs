//! OAuth client identity library crate.
//!
//! Provides the pluggable client abstraction an OAuth 2 authorization engine
//! consumes: single clients, composite multi-audience clients, optional
//! secret and id matching capabilities, and a client store seam.

pub mod config;
pub mod errors;
pub mod oauth;
pub mod storage;
