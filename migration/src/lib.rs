pub use sea_orm_migration::prelude::*;

mod m20250310_000001_account;
mod m20250310_000002_course;
mod m20250310_000003_course_module;
mod m20250310_000004_lesson;
mod m20250310_000005_enrollment;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_000001_account::Migration),
            Box::new(m20250310_000002_course::Migration),
            Box::new(m20250310_000003_course_module::Migration),
            Box::new(m20250310_000004_lesson::Migration),
            Box::new(m20250310_000005_enrollment::Migration),
        ]
    }
}
