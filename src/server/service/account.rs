use dioxus_logger::tracing;
use entity::sea_orm_active_enums::AccountRole;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::{RoleDto, UserDto},
    server::{
        config::AdminSeed,
        data::account::{AccountRepository, NewAccount},
        error::{auth::AuthError, is_unique_violation, Error},
        util::password::{hash_password, verify_password},
    },
};

const MIN_PASSWORD_LENGTH: usize = 8;

/// Normalises an email for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Part of the email before `@`, used when no display name is given
fn local_part(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}

impl From<entity::account::Model> for UserDto {
    fn from(account: entity::account::Model) -> Self {
        Self {
            id: account.id,
            email: account.email,
            display_name: account.display_name,
            role: match account.role {
                AccountRole::Admin => RoleDto::Admin,
                AccountRole::Student => RoleDto::Student,
            },
        }
    }
}

/// Service for the identity directory.
pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new instance of [`AccountService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an account with a password chosen by the user
    ///
    /// The account is confirmed immediately and is always a student, whatever its email.
    ///
    /// # Returns
    /// - `Ok(UserDto)`: The created account
    /// - `Err(AuthError::InvalidRegistration)`: The email or password is not acceptable
    /// - `Err(AuthError::EmailAlreadyRegistered)`: An account with the email already exists
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: Option<String>,
    ) -> Result<UserDto, Error> {
        let email = normalize_email(email);
        if email.is_empty() || !email.contains('@') {
            return Err(AuthError::InvalidRegistration("A valid email is required".to_string()).into());
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::InvalidRegistration(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ))
            .into());
        }

        let account_repo = AccountRepository::new(self.db);
        if account_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered(email).into());
        }

        let display_name = display_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| local_part(&email));

        let account = account_repo
            .create(NewAccount {
                role: AccountRole::Student,
                password_hash: hash_password(password)?,
                display_name,
                email: email.clone(),
                confirmed: true,
            })
            .await
            .map_err(|err| {
                // Lost a race against a concurrent registration for the same email
                if is_unique_violation(&err) {
                    Error::from(AuthError::EmailAlreadyRegistered(email))
                } else {
                    Error::from(err)
                }
            })?;

        Ok(account.into())
    }

    /// Provisions the configured administrator
    ///
    /// Creates the account when the email is unknown. An existing account with the email is
    /// promoted and its password replaced with the configured one, so whoever registered the
    /// address first cannot keep using it.
    pub async fn seed_admin(&self, seed: &AdminSeed) -> Result<UserDto, Error> {
        let password_hash = hash_password(&seed.password)?;
        let account_repo = AccountRepository::new(self.db);

        let promoted = match account_repo.find_by_email(&seed.email).await? {
            Some(account) => {
                account_repo
                    .grant_admin(account.id, password_hash.clone())
                    .await?
            }
            None => None,
        };

        let account = match promoted {
            Some(account) => account,
            None => {
                account_repo
                    .create(NewAccount {
                        email: seed.email.clone(),
                        display_name: local_part(&seed.email),
                        password_hash,
                        role: AccountRole::Admin,
                        confirmed: true,
                    })
                    .await?
            }
        };

        tracing::info!(user_id = %account.id, "Administrator account provisioned");

        Ok(account.into())
    }

    /// Checks an email and password pair
    ///
    /// Unknown emails and wrong passwords produce the same error.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<UserDto, Error> {
        let email = normalize_email(email);

        let Some(account) = AccountRepository::new(self.db)
            .find_by_email(&email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials(email).into());
        };

        if !verify_password(password, &account.password_hash)? {
            return Err(AuthError::InvalidCredentials(email).into());
        }

        Ok(account.into())
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let account = AccountRepository::new(self.db).get_by_id(user_id).await?;

        Ok(account.map(UserDto::from))
    }

    /// Records activity for the account, returning false if it no longer exists
    pub async fn record_heartbeat(&self, user_id: i32) -> Result<bool, Error> {
        let account = AccountRepository::new(self.db)
            .update_last_seen(user_id)
            .await?;

        Ok(account.is_some())
    }
}
