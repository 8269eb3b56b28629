use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    /// Insert a course without an external product mapping.
    pub async fn insert_course(&self, title: &str) -> Result<entity::course::Model, TestError> {
        self.insert_course_with_hotmart_id(title, None).await
    }

    /// Insert a course, optionally mapped to a Hotmart product ID.
    pub async fn insert_course_with_hotmart_id(
        &self,
        title: &str,
        hotmart_id: Option<&str>,
    ) -> Result<entity::course::Model, TestError> {
        Ok(
            entity::prelude::Course::insert(entity::course::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                description: ActiveValue::Set(format!("Description of {}", title)),
                thumbnail: ActiveValue::Set(None),
                hotmart_id: ActiveValue::Set(hotmart_id.map(str::to_string)),
                order_index: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }

    pub async fn insert_module(
        &self,
        course_id: i32,
        title: &str,
    ) -> Result<entity::course_module::Model, TestError> {
        Ok(
            entity::prelude::CourseModule::insert(entity::course_module::ActiveModel {
                course_id: ActiveValue::Set(course_id),
                title: ActiveValue::Set(title.to_string()),
                thumbnail: ActiveValue::Set(None),
                order_index: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }

    pub async fn insert_lesson(
        &self,
        module_id: i32,
        title: &str,
    ) -> Result<entity::lesson::Model, TestError> {
        Ok(
            entity::prelude::Lesson::insert(entity::lesson::ActiveModel {
                module_id: ActiveValue::Set(module_id),
                title: ActiveValue::Set(title.to_string()),
                video_url: ActiveValue::Set(format!(
                    "https://videos.example.com/{}",
                    title.to_lowercase().replace(' ', "-")
                )),
                duration: ActiveValue::Set(Some("10:00".to_string())),
                description: ActiveValue::Set(String::new()),
                resources: ActiveValue::Set(None),
                order_index: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }

    pub async fn insert_enrollment(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<entity::enrollment::Model, TestError> {
        Ok(
            entity::prelude::Enrollment::insert(entity::enrollment::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                course_id: ActiveValue::Set(course_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.state.db)
            .await?,
        )
    }

    /// Count every enrollment row, regardless of user or course.
    pub async fn count_enrollments(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::Enrollment::find()
            .count(&self.state.db)
            .await?)
    }
}
