//! Factory functions for generating in-memory content models.
//!
//! These build catalog models with explicit IDs and creation times so ordering
//! logic can be exercised without a database.

use chrono::{DateTime, NaiveDateTime};

/// Build a timestamp `offset_secs` seconds after the Unix epoch.
pub fn timestamp(offset_secs: i64) -> NaiveDateTime {
    DateTime::from_timestamp(offset_secs, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}

pub fn mock_course_model(id: i32, created_at: NaiveDateTime) -> entity::course::Model {
    entity::course::Model {
        id,
        title: format!("Course {}", id),
        description: String::new(),
        thumbnail: None,
        hotmart_id: None,
        order_index: None,
        created_at,
    }
}

pub fn mock_module_model(
    id: i32,
    course_id: i32,
    created_at: NaiveDateTime,
) -> entity::course_module::Model {
    entity::course_module::Model {
        id,
        course_id,
        title: format!("Module {}", id),
        thumbnail: None,
        order_index: None,
        created_at,
    }
}

pub fn mock_lesson_model(
    id: i32,
    module_id: i32,
    created_at: NaiveDateTime,
) -> entity::lesson::Model {
    entity::lesson::Model {
        id,
        module_id,
        title: format!("Lesson {}", id),
        video_url: format!("https://videos.example.com/{}", id),
        duration: None,
        description: String::new(),
        resources: None,
        order_index: None,
        created_at,
    }
}
