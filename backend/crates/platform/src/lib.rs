//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (secure randomness, hex, constant-time comparison)
//! - Credential hashing (salted scrypt, `salt.digestHex` encoding)
//! - Environment-driven configuration helpers

pub mod crypto;
pub mod env;
pub mod password;
