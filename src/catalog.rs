//! Course catalog loaded from YAML.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lesson pages need each lesson's chapter titles and repository URL to build
//! the lesson navbar. The host reads them from a static YAML file at startup
//! and serves lookups from memory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate course id: {0}")]
    DuplicateCourse(String),

    #[error("duplicate lesson id {lesson} in course {course}")]
    DuplicateLesson { course: String, lesson: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub github_url: String,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

/// Response body of the single-lesson lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonSummary {
    pub course_id: String,
    pub lesson_id: String,
    pub github_url: String,
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    courses: Vec<Course>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or ids repeat.
    pub fn from_yaml(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_yaml::from_str(raw)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read and parse the catalog at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails `from_yaml`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read { path: path.to_owned(), source })?;
        Self::from_yaml(&raw)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut course_ids = HashSet::new();
        for course in &self.courses {
            if !course_ids.insert(course.id.as_str()) {
                return Err(CatalogError::DuplicateCourse(course.id.clone()));
            }
            let mut lesson_ids = HashSet::new();
            for lesson in &course.lessons {
                if !lesson_ids.insert(lesson.id.as_str()) {
                    return Err(CatalogError::DuplicateLesson { course: course.id.clone(), lesson: lesson.id.clone() });
                }
            }
        }
        Ok(())
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn lesson(&self, course_id: &str, lesson_id: &str) -> Option<LessonSummary> {
        let course = self.courses.iter().find(|c| c.id == course_id)?;
        let lesson = course.lessons.iter().find(|l| l.id == lesson_id)?;
        Some(LessonSummary {
            course_id: course.id.clone(),
            lesson_id: lesson.id.clone(),
            github_url: course.github_url.clone(),
            chapters: lesson.chapters.clone(),
        })
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
