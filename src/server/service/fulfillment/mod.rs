//! Fulfillment of marketplace purchases.
//!
//! A delivery is authenticated and decoded by [`payload`], after which
//! [`FulfillmentService::fulfill`] reconciles the sale with the identity directory and the
//! entitlement store. Replays converge: the buyer's account is looked up before it is
//! created and the enrollment insert is a no-op when the pair already exists.

pub mod payload;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use entity::sea_orm_active_enums::AccountRole;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        account::{AccountRepository, NewAccount},
        course::CourseRepository,
        enrollment::EnrollmentRepository,
    },
    error::{fulfillment::FulfillmentError, is_unique_violation},
    service::fulfillment::payload::SaleEvent,
    util::password::{generate_password, hash_password},
};

/// Result of a delivery that was processed without error.
#[derive(Debug, PartialEq, Eq)]
pub enum FulfillmentOutcome {
    /// No course is sold as the delivered product, nothing was written
    Skipped { product_id: String },
    Fulfilled {
        course_title: String,
        user_id: i32,
        /// The buyer had no account before this delivery
        account_created: bool,
    },
}

pub struct FulfillmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FulfillmentService<'a> {
    /// Creates a new instance of [`FulfillmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Grants the buyer of a sale access to the course sold as the product
    ///
    /// For a buyer without an account, the account and the enrollment are written in one
    /// transaction so a failed enrollment leaves no orphaned account behind.
    ///
    /// # Returns
    /// - `Ok(FulfillmentOutcome::Skipped)`: No course is mapped to the product ID
    /// - `Ok(FulfillmentOutcome::Fulfilled)`: The buyer is enrolled, possibly already was
    /// - `Err(FulfillmentError::ConsistencyConflict)`: The email lookup missed an account that
    ///   the insert then collided with, typically a concurrent delivery for the same buyer
    /// - `Err(FulfillmentError::AccountCreation)`: The account could not be created
    /// - `Err(FulfillmentError::EnrollmentFailed)`: The enrollment could not be written
    pub async fn fulfill(&self, sale: SaleEvent) -> Result<FulfillmentOutcome, FulfillmentError> {
        let Some(course) = CourseRepository::new(self.db)
            .find_by_hotmart_id(&sale.product_id)
            .await?
        else {
            tracing::info!(
                product_id = %sale.product_id,
                "No course is sold as the delivered product, skipping"
            );

            return Ok(FulfillmentOutcome::Skipped {
                product_id: sale.product_id,
            });
        };

        let existing = AccountRepository::new(self.db)
            .find_by_email(&sale.email)
            .await?;

        let (user_id, account_created) = match existing {
            Some(account) => {
                enroll(self.db, account.id, course.id).await?;

                (account.id, false)
            }
            None => {
                let txn = self.db.begin().await?;

                let account = create_account(&txn, &sale).await?;
                enroll(&txn, account.id, course.id).await?;

                txn.commit().await?;

                (account.id, true)
            }
        };

        tracing::info!(
            user_id = %user_id,
            course_id = %course.id,
            account_created = account_created,
            "Fulfilled purchase"
        );

        Ok(FulfillmentOutcome::Fulfilled {
            course_title: course.title,
            user_id,
            account_created,
        })
    }
}

/// Creates a confirmed student account with a random password for a buyer
async fn create_account<C: ConnectionTrait>(
    conn: &C,
    sale: &SaleEvent,
) -> Result<entity::account::Model, FulfillmentError> {
    let password_hash = hash_password(&generate_password())
        .map_err(|e| FulfillmentError::AccountCreation(e.to_string()))?;

    AccountRepository::new(conn)
        .create(NewAccount {
            email: sale.email.clone(),
            display_name: sale.display_name.clone(),
            password_hash,
            role: AccountRole::Student,
            confirmed: true,
        })
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                FulfillmentError::ConsistencyConflict(sale.email.clone())
            } else {
                FulfillmentError::AccountCreation(err.to_string())
            }
        })
}

async fn enroll<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    course_id: i32,
) -> Result<(), FulfillmentError> {
    let created = EnrollmentRepository::new(conn)
        .upsert(user_id, course_id)
        .await
        .map_err(|err| FulfillmentError::EnrollmentFailed {
            user_id,
            course_id,
            reason: err.to_string(),
        })?;

    if !created {
        tracing::debug!(
            user_id = %user_id,
            course_id = %course_id,
            "User was already enrolled"
        );
    }

    Ok(())
}
