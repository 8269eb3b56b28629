//! Lectern: course delivery backend.
//!
//! Students log in and watch the lessons of the courses they are enrolled in, admins manage
//! the catalog, and Hotmart purchases are fulfilled through a webhook that provisions the
//! buyer's account and enrollment.

pub mod model;
pub mod server;
