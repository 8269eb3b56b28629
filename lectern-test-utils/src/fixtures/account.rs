use chrono::Utc;
use entity::sea_orm_active_enums::AccountRole;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{constant::TEST_PASSWORD_HASH, error::TestError, TestSetup};

impl TestSetup {
    /// Insert a confirmed account with the placeholder password hash.
    pub async fn insert_account(
        &self,
        email: &str,
        role: AccountRole,
    ) -> Result<entity::account::Model, TestError> {
        self.insert_account_with_password_hash(email, role, TEST_PASSWORD_HASH)
            .await
    }

    /// Insert a confirmed account with the provided password hash.
    pub async fn insert_account_with_password_hash(
        &self,
        email: &str,
        role: AccountRole,
        password_hash: &str,
    ) -> Result<entity::account::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Account::insert(entity::account::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                display_name: ActiveValue::Set("Test Account".to_string()),
                password_hash: ActiveValue::Set(password_hash.to_string()),
                role: ActiveValue::Set(role),
                email_confirmed_at: ActiveValue::Set(Some(now)),
                last_seen_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }

    /// Count accounts registered under the provided email.
    pub async fn count_accounts_by_email(&self, email: &str) -> Result<u64, TestError> {
        Ok(entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .count(&self.state.db)
            .await?)
    }
}
