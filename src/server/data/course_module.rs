use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct CourseModuleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseModuleRepository<'a, C> {
    /// Creates a new instance of [`CourseModuleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a module owned by the provided course
    ///
    /// Fails with a foreign key violation if the course does not exist.
    pub async fn create(
        &self,
        course_id: i32,
        title: String,
    ) -> Result<entity::course_module::Model, DbErr> {
        let module = entity::course_module::ActiveModel {
            course_id: ActiveValue::Set(course_id),
            title: ActiveValue::Set(title),
            thumbnail: ActiveValue::Set(None),
            order_index: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        module.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        module_id: i32,
    ) -> Result<Option<entity::course_module::Model>, DbErr> {
        entity::prelude::CourseModule::find_by_id(module_id)
            .one(self.db)
            .await
    }

    /// Gets the modules of the provided courses in creation order
    pub async fn get_many_by_course_ids(
        &self,
        course_ids: &[i32],
    ) -> Result<Vec<entity::course_module::Model>, DbErr> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::CourseModule::find()
            .filter(entity::course_module::Column::CourseId.is_in(course_ids.iter().copied()))
            .order_by_asc(entity::course_module::Column::CreatedAt)
            .order_by_asc(entity::course_module::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a module and its lessons
    ///
    /// Returns OK regardless of module existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, module_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::CourseModule::delete_by_id(module_id)
            .exec(self.db)
            .await
    }
}
