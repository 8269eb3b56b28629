use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250310_000002_course::Course;

static IDX_COURSE_MODULE_COURSE_ID: &str = "idx-course_module-course_id";
static FK_COURSE_MODULE_COURSE_ID: &str = "fk-course_module-course_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseModule::Table)
                    .if_not_exists()
                    .col(pk_auto(CourseModule::Id))
                    .col(integer(CourseModule::CourseId))
                    .col(string(CourseModule::Title))
                    .col(string_null(CourseModule::Thumbnail))
                    .col(integer_null(CourseModule::OrderIndex))
                    .col(timestamp(CourseModule::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COURSE_MODULE_COURSE_ID)
                    .table(CourseModule::Table)
                    .col(CourseModule::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COURSE_MODULE_COURSE_ID)
                    .from_tbl(CourseModule::Table)
                    .from_col(CourseModule::CourseId)
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
                    .name(FK_COURSE_MODULE_COURSE_ID)
                    .table(CourseModule::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COURSE_MODULE_COURSE_ID)
                    .table(CourseModule::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CourseModule::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CourseModule {
    Table,
    Id,
    CourseId,
    Title,
    Thumbnail,
    OrderIndex,
    CreatedAt,
}
