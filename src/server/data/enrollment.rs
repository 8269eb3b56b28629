use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect,
};

pub struct EnrollmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EnrollmentRepository<'a, C> {
    /// Creates a new instance of [`EnrollmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Grants a user access to a course
    ///
    /// An enrollment that already exists is left untouched.
    ///
    /// # Returns
    /// - `Ok(true)`: A new enrollment was created
    /// - `Ok(false)`: The user was already enrolled
    pub async fn upsert(&self, user_id: i32, course_id: i32) -> Result<bool, DbErr> {
        let enrollment = entity::enrollment::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            course_id: ActiveValue::Set(course_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        let result = entity::prelude::Enrollment::insert(enrollment)
            .on_conflict(
                OnConflict::columns([
                    entity::enrollment::Column::UserId,
                    entity::enrollment::Column::CourseId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(self.db)
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub async fn exists(&self, user_id: i32, course_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::UserId.eq(user_id))
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the IDs of every course the user is enrolled in
    pub async fn get_course_ids_by_user_id(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Enrollment::find()
            .select_only()
            .column(entity::enrollment::Column::CourseId)
            .filter(entity::enrollment::Column::UserId.eq(user_id))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
