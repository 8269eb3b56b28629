//! Utility functions and helpers for server operations.
//!
//! Password hashing and generation for accounts, and the constant-time comparison
//! used to check marketplace webhook tokens.

pub mod password;
pub mod token;
