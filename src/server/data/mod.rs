//! Data access layer repositories.
//!
//! Repositories wrap the SeaORM queries for each store: the identity directory (`account`),
//! the content catalog (`course`, `course_module`, `lesson`) and the entitlement store
//! (`enrollment`). They are generic over `ConnectionTrait` so callers can pass either the
//! shared connection or an open transaction.

pub mod account;
pub mod course;
pub mod course_module;
pub mod enrollment;
pub mod lesson;
