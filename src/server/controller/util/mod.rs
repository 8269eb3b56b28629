//! Utility functions for controller request handling.
//!
//! Resolves the account behind a session for protected endpoints and enforces the admin
//! role for catalog administration.

pub mod get_user;
