//! Assembly of content trees from flat catalog rows.
//!
//! Courses, modules and lessons are each ordered by creation time, ties broken by ID,
//! regardless of the order the rows are passed in.

use std::collections::HashMap;

use crate::{
    model::content::{
        AdminCourseDto, AdminModuleDto, CourseTreeDto, LessonDto, ModuleTreeDto, StudentTreeDto,
    },
    server::model::db::{CourseModel, CourseModuleModel, LessonModel},
};

fn sort_courses(courses: &mut [CourseModel]) {
    courses.sort_by_key(|c| (c.created_at, c.id));
}

/// Groups modules by owning course, each group in display order
fn group_modules(mut modules: Vec<CourseModuleModel>) -> HashMap<i32, Vec<CourseModuleModel>> {
    modules.sort_by_key(|m| (m.created_at, m.id));

    let mut by_course: HashMap<i32, Vec<CourseModuleModel>> = HashMap::new();
    for module in modules {
        by_course.entry(module.course_id).or_default().push(module);
    }

    by_course
}

/// Groups lessons by owning module, each group in display order
fn group_lessons(mut lessons: Vec<LessonModel>) -> HashMap<i32, Vec<LessonModel>> {
    lessons.sort_by_key(|l| (l.created_at, l.id));

    let mut by_module: HashMap<i32, Vec<LessonModel>> = HashMap::new();
    for lesson in lessons {
        by_module.entry(lesson.module_id).or_default().push(lesson);
    }

    by_module
}

/// Converts a lesson for display, withholding its media when the viewer lacks access
pub fn lesson_dto(lesson: LessonModel, has_access: bool) -> LessonDto {
    LessonDto {
        id: lesson.id,
        module_id: lesson.module_id,
        title: lesson.title,
        description: lesson.description,
        duration: lesson.duration,
        video_url: has_access.then_some(lesson.video_url),
        resources: lesson.resources.filter(|_| has_access),
    }
}

/// Builds the student tree, annotating each course with whether `has_access` grants it
pub fn assemble_student_tree<F>(
    mut courses: Vec<CourseModel>,
    modules: Vec<CourseModuleModel>,
    lessons: Vec<LessonModel>,
    has_access: F,
) -> StudentTreeDto
where
    F: Fn(i32) -> bool,
{
    sort_courses(&mut courses);
    let mut modules = group_modules(modules);
    let mut lessons = group_lessons(lessons);

    let courses: Vec<CourseTreeDto> = courses
        .into_iter()
        .map(|course| {
            let access = has_access(course.id);

            let modules = modules
                .remove(&course.id)
                .unwrap_or_default()
                .into_iter()
                .map(|module| ModuleTreeDto {
                    lessons: lessons
                        .remove(&module.id)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|lesson| lesson_dto(lesson, access))
                        .collect(),
                    id: module.id,
                    title: module.title,
                    thumbnail: module.thumbnail,
                })
                .collect();

            CourseTreeDto {
                id: course.id,
                title: course.title,
                description: course.description,
                thumbnail: course.thumbnail,
                has_access: access,
                modules,
            }
        })
        .collect();

    let active_lesson_id = initial_lesson_id(&courses);

    StudentTreeDto {
        courses,
        active_lesson_id,
    }
}

/// First lesson in display order, `None` when the catalog holds no lessons
pub fn initial_lesson_id(courses: &[CourseTreeDto]) -> Option<i32> {
    courses
        .iter()
        .flat_map(|course| &course.modules)
        .flat_map(|module| &module.lessons)
        .map(|lesson| lesson.id)
        .next()
}

/// Builds the administrative tree, which lists modules but no lessons
pub fn assemble_admin_tree(
    mut courses: Vec<CourseModel>,
    modules: Vec<CourseModuleModel>,
) -> Vec<AdminCourseDto> {
    sort_courses(&mut courses);
    let mut modules = group_modules(modules);

    courses
        .into_iter()
        .map(|course| AdminCourseDto {
            modules: modules
                .remove(&course.id)
                .unwrap_or_default()
                .into_iter()
                .map(|module| AdminModuleDto {
                    id: module.id,
                    title: module.title,
                    thumbnail: module.thumbnail,
                })
                .collect(),
            id: course.id,
            title: course.title,
            description: course.description,
            thumbnail: course.thumbnail,
            hotmart_id: course.hotmart_id,
        })
        .collect()
}
