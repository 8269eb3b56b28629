/// Shared webhook token configured on the test application state.
pub static TEST_HOTTOK: &str = "test-hottok-secret";

/// Email used for administrator accounts in tests.
pub static TEST_ADMIN_EMAIL: &str = "admin@example.com";

/// Placeholder password hash stored by account fixtures.
///
/// It is a well-formed PHC string that no password verifies against; tests that
/// exercise login insert a hash of their own.
pub static TEST_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
