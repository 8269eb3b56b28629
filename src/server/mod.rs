//! Server application core modules.
//!
//! This module contains all server-side functionality for Lectern, including HTTP routing,
//! session authentication, database access, the content tree resolver and the marketplace
//! purchase fulfillment pipeline.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
