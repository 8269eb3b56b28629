use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Fields required to create a lesson.
pub struct NewLesson {
    pub module_id: i32,
    pub title: String,
    pub video_url: String,
    pub duration: Option<String>,
    pub description: String,
    pub resources: Option<String>,
}

pub struct LessonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LessonRepository<'a, C> {
    /// Creates a new instance of [`LessonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a lesson owned by the provided module
    ///
    /// Fails with a foreign key violation if the module does not exist.
    pub async fn create(&self, lesson: NewLesson) -> Result<entity::lesson::Model, DbErr> {
        let lesson = entity::lesson::ActiveModel {
            module_id: ActiveValue::Set(lesson.module_id),
            title: ActiveValue::Set(lesson.title),
            video_url: ActiveValue::Set(lesson.video_url),
            duration: ActiveValue::Set(lesson.duration),
            description: ActiveValue::Set(lesson.description),
            resources: ActiveValue::Set(lesson.resources),
            order_index: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        lesson.insert(self.db).await
    }

    /// Gets a lesson along with the module that owns it
    pub async fn get_with_module(
        &self,
        lesson_id: i32,
    ) -> Result<Option<(entity::lesson::Model, Option<entity::course_module::Model>)>, DbErr> {
        entity::prelude::Lesson::find_by_id(lesson_id)
            .find_also_related(entity::course_module::Entity)
            .one(self.db)
            .await
    }

    /// Gets the lessons of the provided modules in creation order
    pub async fn get_many_by_module_ids(
        &self,
        module_ids: &[i32],
    ) -> Result<Vec<entity::lesson::Model>, DbErr> {
        if module_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::ModuleId.is_in(module_ids.iter().copied()))
            .order_by_asc(entity::lesson::Column::CreatedAt)
            .order_by_asc(entity::lesson::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a lesson
    ///
    /// Returns OK regardless of lesson existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, lesson_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Lesson::delete_by_id(lesson_id)
            .exec(self.db)
            .await
    }
}
