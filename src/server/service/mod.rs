//! Service layer for business logic and orchestration.
//!
//! Services coordinate the repositories of the identity directory, content catalog and
//! entitlement store. They cover account registration and login, fulfillment of
//! marketplace purchases, and resolution and administration of the content tree.

pub mod account;
pub mod content;
pub mod fulfillment;
