use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250310_000001_account::Account, m20250310_000002_course::Course};

static PK_ENROLLMENT: &str = "pk-enrollment";
static IDX_ENROLLMENT_COURSE_ID: &str = "idx-enrollment-course_id";
static FK_ENROLLMENT_USER_ID: &str = "fk-enrollment-user_id";
static FK_ENROLLMENT_COURSE_ID: &str = "fk-enrollment-course_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The composite primary key doubles as the (user, course) uniqueness
        // constraint that enrollment upserts conflict on.
        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(integer(Enrollment::UserId))
                    .col(integer(Enrollment::CourseId))
                    .col(timestamp(Enrollment::CreatedAt))
                    .primary_key(
                        Index::create()
                            .name(PK_ENROLLMENT)
                            .col(Enrollment::UserId)
                            .col(Enrollment::CourseId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ENROLLMENT_COURSE_ID)
                    .table(Enrollment::Table)
                    .col(Enrollment::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ENROLLMENT_USER_ID)
                    .from_tbl(Enrollment::Table)
                    .from_col(Enrollment::UserId)
                    .to_tbl(Account::Table)
                    .to_col(Account::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ENROLLMENT_COURSE_ID)
                    .from_tbl(Enrollment::Table)
                    .from_col(Enrollment::CourseId)
                    .to_tbl(Course::Table)
                    .to_col(Course::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ENROLLMENT_COURSE_ID)
                    .table(Enrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ENROLLMENT_USER_ID)
                    .table(Enrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ENROLLMENT_COURSE_ID)
                    .table(Enrollment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Enrollment {
    Table,
    UserId,
    CourseId,
    CreatedAt,
}
