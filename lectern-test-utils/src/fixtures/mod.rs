//! Test fixture modules for database record creation.
//!
//! - `account` - identity directory records
//! - `content` - courses, modules, lessons and enrollments
//! - `factory` - in-memory models that never touch the database

pub mod account;
pub mod content;
pub mod factory;
