use serde::{Deserialize, Serialize};

/// Content tree presented to a student
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StudentTreeDto {
    pub courses: Vec<CourseTreeDto>,
    /// Lesson to open when the dashboard is first loaded, `None` when the
    /// catalog has no lessons at all
    pub active_lesson_id: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CourseTreeDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    /// Whether the viewer is entitled to watch this course's lessons
    pub has_access: bool,
    pub modules: Vec<ModuleTreeDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ModuleTreeDto {
    pub id: i32,
    pub title: String,
    pub thumbnail: Option<String>,
    pub lessons: Vec<LessonDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LessonDto {
    pub id: i32,
    pub module_id: i32,
    pub title: String,
    pub description: String,
    pub duration: Option<String>,
    /// Withheld unless the viewer has access to the owning course
    pub video_url: Option<String>,
    /// Withheld unless the viewer has access to the owning course
    pub resources: Option<String>,
}

/// Course as shown in the administrative view, modules only
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdminCourseDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub hotmart_id: Option<String>,
    pub modules: Vec<AdminModuleDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdminModuleDto {
    pub id: i32,
    pub title: String,
    pub thumbnail: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateCourseDto {
    pub title: String,
}

/// Partial course update, omitted fields are left untouched
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateCourseDto {
    pub title: Option<String>,
    pub description: Option<String>,
    /// An empty string removes the thumbnail
    pub thumbnail: Option<String>,
    /// An empty string removes the marketplace product mapping
    pub hotmart_id: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateModuleDto {
    pub title: String,
    pub course_id: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateLessonDto {
    pub module_id: i32,
    pub title: String,
    pub video_url: String,
    pub duration: Option<String>,
    #[serde(default)]
    pub description: String,
    pub resources: Option<String>,
}
