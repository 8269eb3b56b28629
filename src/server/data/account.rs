use chrono::Utc;
use entity::sea_orm_active_enums::AccountRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Fields required to create an account in the identity directory.
pub struct NewAccount {
    /// Already normalised (trimmed, lowercased)
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
    pub role: AccountRole,
    /// Marks the email as confirmed at creation time
    pub confirmed: bool,
}

pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new instance of [`AccountRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new account
    ///
    /// Fails with a unique constraint violation when the email is already registered.
    pub async fn create(&self, account: NewAccount) -> Result<entity::account::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let account = entity::account::ActiveModel {
            email: ActiveValue::Set(account.email),
            display_name: ActiveValue::Set(account.display_name),
            password_hash: ActiveValue::Set(account.password_hash),
            role: ActiveValue::Set(account.role),
            email_confirmed_at: ActiveValue::Set(account.confirmed.then_some(now)),
            last_seen_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };

        account.insert(self.db).await
    }

    pub async fn get_by_id(&self, account_id: i32) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gives an existing account the admin role and replaces its password hash
    ///
    /// Returns `Ok(None)` if the account does not exist.
    pub async fn grant_admin(
        &self,
        account_id: i32,
        password_hash: String,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        let Some(account) = entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let confirmed = account.email_confirmed_at.is_some();

        let mut account_am = account.into_active_model();
        account_am.role = ActiveValue::Set(AccountRole::Admin);
        account_am.password_hash = ActiveValue::Set(password_hash);
        if !confirmed {
            account_am.email_confirmed_at = ActiveValue::Set(Some(Utc::now().naive_utc()));
        }

        let account = account_am.update(self.db).await?;

        Ok(Some(account))
    }

    /// Records the current time as the account's last activity
    ///
    /// Returns `Ok(None)` if the account does not exist.
    pub async fn update_last_seen(
        &self,
        account_id: i32,
    ) -> Result<Option<entity::account::Model>, DbErr> {
        let account = match entity::prelude::Account::find_by_id(account_id)
            .one(self.db)
            .await?
        {
            Some(account) => account,
            None => return Ok(None),
        };

        let mut account_am = account.into_active_model();
        account_am.last_seen_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        let account = account_am.update(self.db).await?;

        Ok(Some(account))
    }
}
