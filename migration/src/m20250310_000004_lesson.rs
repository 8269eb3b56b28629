use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250310_000003_course_module::CourseModule;

static IDX_LESSON_MODULE_ID: &str = "idx-lesson-module_id";
static FK_LESSON_MODULE_ID: &str = "fk-lesson-module_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lesson::Table)
                    .if_not_exists()
                    .col(pk_auto(Lesson::Id))
                    .col(integer(Lesson::ModuleId))
                    .col(string(Lesson::Title))
                    .col(string(Lesson::VideoUrl))
                    .col(string_null(Lesson::Duration))
                    .col(text(Lesson::Description).default(""))
                    .col(string_null(Lesson::Resources))
                    .col(integer_null(Lesson::OrderIndex))
                    .col(timestamp(Lesson::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LESSON_MODULE_ID)
                    .table(Lesson::Table)
                    .col(Lesson::ModuleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LESSON_MODULE_ID)
                    .from_tbl(Lesson::Table)
                    .from_col(Lesson::ModuleId)
                    .to_tbl(CourseModule::Table)
                    .to_col(CourseModule::Id)
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
                    .name(FK_LESSON_MODULE_ID)
                    .table(Lesson::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LESSON_MODULE_ID)
                    .table(Lesson::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Lesson::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Lesson {
    Table,
    Id,
    ModuleId,
    Title,
    VideoUrl,
    Duration,
    Description,
    Resources,
    OrderIndex,
    CreatedAt,
}
