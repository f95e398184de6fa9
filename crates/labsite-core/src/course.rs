//! Course — teaching listed on the courses page.

use serde::{Deserialize, Serialize};

use crate::record::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
  pub id:            EntityId,
  pub title:         String,
  pub code:          String,
  pub semester:      String,
  pub instructor:    String,
  pub credits:       u8,
  pub students:      u32,
  pub description:   String,
  pub syllabus:      Vec<String>,
  pub prerequisites: Vec<String>,
  pub textbook:      String,
  pub schedule:      String,
}

/// Input to `add_course`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
  pub title:         String,
  pub code:          String,
  pub semester:      String,
  pub instructor:    String,
  pub credits:       u8,
  pub students:      u32,
  pub description:   String,
  pub syllabus:      Vec<String>,
  pub prerequisites: Vec<String>,
  pub textbook:      String,
  pub schedule:      String,
}

impl NewCourse {
  pub fn into_course(self, id: EntityId) -> Course {
    Course {
      id,
      title: self.title,
      code: self.code,
      semester: self.semester,
      instructor: self.instructor,
      credits: self.credits,
      students: self.students,
      description: self.description,
      syllabus: self.syllabus,
      prerequisites: self.prerequisites,
      textbook: self.textbook,
      schedule: self.schedule,
    }
  }
}

/// Partial update for [`Course`]. Fields left `None` are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
  pub title:         Option<String>,
  pub code:          Option<String>,
  pub semester:      Option<String>,
  pub instructor:    Option<String>,
  pub credits:       Option<u8>,
  pub students:      Option<u32>,
  pub description:   Option<String>,
  pub syllabus:      Option<Vec<String>>,
  pub prerequisites: Option<Vec<String>>,
  pub textbook:      Option<String>,
  pub schedule:      Option<String>,
}

impl CoursePatch {
  /// Shallow-merge this patch into `course`.
  pub fn apply(self, course: &mut Course) {
    if let Some(v) = self.title { course.title = v; }
    if let Some(v) = self.code { course.code = v; }
    if let Some(v) = self.semester { course.semester = v; }
    if let Some(v) = self.instructor { course.instructor = v; }
    if let Some(v) = self.credits { course.credits = v; }
    if let Some(v) = self.students { course.students = v; }
    if let Some(v) = self.description { course.description = v; }
    if let Some(v) = self.syllabus { course.syllabus = v; }
    if let Some(v) = self.prerequisites { course.prerequisites = v; }
    if let Some(v) = self.textbook { course.textbook = v; }
    if let Some(v) = self.schedule { course.schedule = v; }
  }
}
