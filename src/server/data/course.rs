use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

/// Changes applied by [`CourseRepository::update`], `None` leaves a field untouched.
#[derive(Default)]
pub struct CourseUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<Option<String>>,
    pub hotmart_id: Option<Option<String>>,
}

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    /// Creates a new instance of [`CourseRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a course with an empty description and no product mapping
    pub async fn create(&self, title: String) -> Result<entity::course::Model, DbErr> {
        let course = entity::course::ActiveModel {
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(String::new()),
            thumbnail: ActiveValue::Set(None),
            hotmart_id: ActiveValue::Set(None),
            order_index: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        course.insert(self.db).await
    }

    pub async fn get_by_id(&self, course_id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(course_id)
            .one(self.db)
            .await
    }

    /// Finds the course sold as the provided Hotmart product
    pub async fn find_by_hotmart_id(
        &self,
        hotmart_id: &str,
    ) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .filter(entity::course::Column::HotmartId.eq(hotmart_id))
            .one(self.db)
            .await
    }

    /// Gets every course in creation order
    pub async fn get_all(&self) -> Result<Vec<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::CreatedAt)
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies partial changes to a course
    ///
    /// Returns `Ok(None)` if the course does not exist.
    pub async fn update(
        &self,
        course_id: i32,
        changes: CourseUpdate,
    ) -> Result<Option<entity::course::Model>, DbErr> {
        let course = match entity::prelude::Course::find_by_id(course_id)
            .one(self.db)
            .await?
        {
            Some(course) => course,
            None => return Ok(None),
        };

        let mut course_am = course.into_active_model();
        if let Some(title) = changes.title {
            course_am.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            course_am.description = ActiveValue::Set(description);
        }
        if let Some(thumbnail) = changes.thumbnail {
            course_am.thumbnail = ActiveValue::Set(thumbnail);
        }
        if let Some(hotmart_id) = changes.hotmart_id {
            course_am.hotmart_id = ActiveValue::Set(hotmart_id);
        }

        let course = course_am.update(self.db).await?;

        Ok(Some(course))
    }

    /// Deletes a course, its modules and lessons and its enrollments
    ///
    /// Returns OK regardless of course existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, course_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Course::delete_by_id(course_id)
            .exec(self.db)
            .await
    }
}
