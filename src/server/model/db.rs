//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the server, so
//! signatures don't need to reach into the generated `entity` crate directly.

/// Account in the identity directory.
///
/// # Fields (from `entity::account::Model`)
/// - `id` - Primary key, opaque account identifier
/// - `email` - Unique, stored trimmed and lowercased
/// - `display_name` - Name shown to the account holder
/// - `password_hash` - Argon2 PHC string
/// - `role` - Persisted authorization role (admin or student)
/// - `email_confirmed_at` - Set on creation for marketplace-provisioned accounts
/// - `last_seen_at` - Updated by the session heartbeat
/// - `created_at` - Timestamp when the account was created
pub type AccountModel = entity::account::Model;

/// Root of the content tree, optionally mapped to a Hotmart product.
pub type CourseModel = entity::course::Model;

/// Module owned by exactly one course.
pub type CourseModuleModel = entity::course_module::Model;

/// Lesson owned by exactly one module.
pub type LessonModel = entity::lesson::Model;

/// Entitlement of an account to a course, unique per (user, course) pair.
pub type EnrollmentModel = entity::enrollment::Model;
