//! Content tree resolution and administration.
//!
//! The student tree lists every course with its modules and lessons, each course
//! annotated with whether the viewer is entitled to it. The administrative tree lists
//! courses and modules only. Administrative mutations are expected to be followed by a
//! fresh read of the administrative tree.

pub mod tree;


use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        content::{
            AdminCourseDto, CreateCourseDto, CreateLessonDto, CreateModuleDto, LessonDto,
            StudentTreeDto, UpdateCourseDto,
        },
        user::{RoleDto, UserDto},
    },
    server::{
        data::{
            course::{CourseRepository, CourseUpdate},
            course_module::CourseModuleRepository,
            enrollment::EnrollmentRepository,
            lesson::{LessonRepository, NewLesson},
        },
        error::{content::ContentError, is_unique_violation, Error},
        model::db::{CourseModel, CourseModuleModel, LessonModel},
    },
};

/// Trims a required text field, rejecting it when nothing is left
fn required_text(value: &str, field: &str) -> Result<String, ContentError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ContentError::InvalidInput(format!("{} is required", field)));
    }

    Ok(value.to_string())
}

/// Maps an optional text update, where an empty string clears the field
fn clearable_text(value: Option<String>) -> Option<Option<String>> {
    value.map(|value| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

pub struct ContentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentService<'a> {
    /// Creates a new instance of [`ContentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the full content tree as seen by the viewer
    ///
    /// Admins have access to every course; students to the courses they are enrolled in.
    pub async fn student_tree(&self, viewer: &UserDto) -> Result<StudentTreeDto, Error> {
        let (courses, modules) = self.courses_with_modules().await?;
        let module_ids: Vec<i32> = modules.iter().map(|m| m.id).collect();
        let lessons = LessonRepository::new(self.db)
            .get_many_by_module_ids(&module_ids)
            .await?;

        let tree = if viewer.role == RoleDto::Admin {
            tree::assemble_student_tree(courses, modules, lessons, |_| true)
        } else {
            let enrolled: HashSet<i32> = EnrollmentRepository::new(self.db)
                .get_course_ids_by_user_id(viewer.id)
                .await?
                .into_iter()
                .collect();

            tree::assemble_student_tree(courses, modules, lessons, |course_id| {
                enrolled.contains(&course_id)
            })
        };

        Ok(tree)
    }

    /// Resolves the administrative tree of courses and their modules
    pub async fn admin_tree(&self) -> Result<Vec<AdminCourseDto>, Error> {
        let (courses, modules) = self.courses_with_modules().await?;

        Ok(tree::assemble_admin_tree(courses, modules))
    }

    async fn courses_with_modules(
        &self,
    ) -> Result<(Vec<CourseModel>, Vec<CourseModuleModel>), Error> {
        let courses = CourseRepository::new(self.db).get_all().await?;
        let course_ids: Vec<i32> = courses.iter().map(|c| c.id).collect();
        let modules = CourseModuleRepository::new(self.db)
            .get_many_by_course_ids(&course_ids)
            .await?;

        Ok((courses, modules))
    }

    /// Gets a single lesson with its media
    ///
    /// # Returns
    /// - `Ok(LessonDto)`: The viewer is an admin or is enrolled in the owning course
    /// - `Err(ContentError::LessonNotFound)`: No lesson with the ID exists
    /// - `Err(ContentError::LessonLocked)`: The viewer is not entitled to the owning course
    pub async fn get_lesson(&self, viewer: &UserDto, lesson_id: i32) -> Result<LessonDto, Error> {
        let Some((lesson, Some(module))) = LessonRepository::new(self.db)
            .get_with_module(lesson_id)
            .await?
        else {
            return Err(ContentError::LessonNotFound(lesson_id).into());
        };

        if viewer.role != RoleDto::Admin
            && !EnrollmentRepository::new(self.db)
                .exists(viewer.id, module.course_id)
                .await?
        {
            return Err(ContentError::LessonLocked {
                user_id: viewer.id,
                lesson_id,
            }
            .into());
        }

        Ok(tree::lesson_dto(lesson, true))
    }

    pub async fn create_course(&self, course: CreateCourseDto) -> Result<CourseModel, Error> {
        let title = required_text(&course.title, "Title")?;

        Ok(CourseRepository::new(self.db).create(title).await?)
    }

    /// Applies a partial update to a course
    ///
    /// Fails with `HotmartIdInUse` when another course is already sold as the product.
    pub async fn update_course(
        &self,
        course_id: i32,
        changes: UpdateCourseDto,
    ) -> Result<CourseModel, Error> {
        let title = match changes.title {
            Some(title) => Some(required_text(&title, "Title")?),
            None => None,
        };
        let hotmart_id = clearable_text(changes.hotmart_id);
        let conflicting_id = hotmart_id.clone().flatten();

        let update = CourseUpdate {
            title,
            description: changes.description.map(|d| d.trim().to_string()),
            thumbnail: clearable_text(changes.thumbnail),
            hotmart_id,
        };

        let course = CourseRepository::new(self.db)
            .update(course_id, update)
            .await
            .map_err(|err| match conflicting_id {
                Some(hotmart_id) if is_unique_violation(&err) => {
                    Error::from(ContentError::HotmartIdInUse(hotmart_id))
                }
                _ => Error::from(err),
            })?;

        course.ok_or_else(|| ContentError::CourseNotFound(course_id).into())
    }

    /// Deletes a course along with its modules, lessons and enrollments
    pub async fn delete_course(&self, course_id: i32) -> Result<(), Error> {
        let result = CourseRepository::new(self.db).delete(course_id).await?;
        if result.rows_affected == 0 {
            return Err(ContentError::CourseNotFound(course_id).into());
        }

        Ok(())
    }

    pub async fn create_module(&self, module: CreateModuleDto) -> Result<CourseModuleModel, Error> {
        let title = required_text(&module.title, "Title")?;

        if CourseRepository::new(self.db)
            .get_by_id(module.course_id)
            .await?
            .is_none()
        {
            return Err(ContentError::CourseNotFound(module.course_id).into());
        }

        Ok(CourseModuleRepository::new(self.db)
            .create(module.course_id, title)
            .await?)
    }

    /// Deletes a module along with its lessons
    pub async fn delete_module(&self, module_id: i32) -> Result<(), Error> {
        let result = CourseModuleRepository::new(self.db).delete(module_id).await?;
        if result.rows_affected == 0 {
            return Err(ContentError::ModuleNotFound(module_id).into());
        }

        Ok(())
    }

    pub async fn create_lesson(&self, lesson: CreateLessonDto) -> Result<LessonModel, Error> {
        let title = required_text(&lesson.title, "Title")?;
        let video_url = required_text(&lesson.video_url, "Video URL")?;

        if CourseModuleRepository::new(self.db)
            .get_by_id(lesson.module_id)
            .await?
            .is_none()
        {
            return Err(ContentError::ModuleNotFound(lesson.module_id).into());
        }

        Ok(LessonRepository::new(self.db)
            .create(NewLesson {
                module_id: lesson.module_id,
                title,
                video_url,
                duration: clearable_text(lesson.duration).flatten(),
                description: lesson.description.trim().to_string(),
                resources: clearable_text(lesson.resources).flatten(),
            })
            .await?)
    }

    pub async fn delete_lesson(&self, lesson_id: i32) -> Result<(), Error> {
        let result = LessonRepository::new(self.db).delete(lesson_id).await?;
        if result.rows_affected == 0 {
            return Err(ContentError::LessonNotFound(lesson_id).into());
        }

        Ok(())
    }
}
