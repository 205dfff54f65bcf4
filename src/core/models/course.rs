//! Course model

use super::activity::Activity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive fields of a course, gathered before any activities exist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseDetails {
    /// Course code (e.g., "COM1001")
    pub code: String,

    /// Course name (e.g., "Introduction to Software Engineering")
    pub name: String,

    /// Free-text description shown in the catalogue
    pub description: String,

    /// Whether sessions need a computer room
    pub requires_computers: bool,

    /// Course organiser name
    pub course_organiser_name: String,

    /// Course organiser email, notified when the course changes
    pub course_organiser_email: String,

    /// Course secretary name
    pub course_secretary_name: String,

    /// Course secretary email
    pub course_secretary_email: String,

    /// Number of tutorials a student has to pick
    pub required_tutorials: u32,

    /// Number of labs a student has to pick
    pub required_labs: u32,
}

/// A course in the catalogue together with its scheduled activities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Descriptive fields
    pub details: CourseDetails,

    /// Scheduled activities, ids unique within the course
    pub activities: Vec<Activity>,
}

impl Course {
    /// Create a new course with no activities yet
    #[must_use]
    pub const fn new(details: CourseDetails) -> Self {
        Self {
            details,
            activities: Vec::new(),
        }
    }

    /// The course code, the key the catalogue stores this course under
    #[must_use]
    pub fn code(&self) -> &str {
        &self.details.code
    }

    /// Whether an activity with the given id is already scheduled
    #[must_use]
    pub fn has_activity_with_id(&self, id: u32) -> bool {
        self.activities.iter().any(|a| a.id == id)
    }

    /// Whether the activity with the given id is a lecture without a recording
    #[must_use]
    pub fn is_unrecorded_lecture(&self, id: u32) -> bool {
        self.activities
            .iter()
            .any(|a| a.id == id && a.is_unrecorded_lecture())
    }

    /// Add an activity to the course
    ///
    /// # Errors
    /// Returns an error if an activity with the same id already exists.
    pub fn add_activity(&mut self, activity: Activity) -> Result<(), String> {
        if self.has_activity_with_id(activity.id) {
            return Err(format!("Activity with ID {} already exists.", activity.id));
        }
        self.activities.push(activity);
        Ok(())
    }

    /// All activities as a newline-separated block for course details views
    #[must_use]
    pub fn activities_as_string(&self) -> String {
        if self.activities.is_empty() {
            return "No activities assigned.".to_string();
        }
        let mut out = String::new();
        for activity in &self.activities {
            out.push_str(&activity.to_string());
            out.push('\n');
        }
        out.trim().to_string()
    }
}

/// Courses are identified by their code
impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.details.code == other.details.code
    }
}

impl Eq for Course {}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.details;
        write!(
            f,
            "{} - {}\nOrganiser: {} <{}>\nSecretary: {} <{}>\nRequires Computers: {}\nRequired Tutorials: {}, Labs: {}\nDescription: {}\nActivities:\n{}",
            d.code,
            d.name,
            d.course_organiser_name,
            d.course_organiser_email,
            d.course_secretary_name,
            d.course_secretary_email,
            d.requires_computers,
            d.required_tutorials,
            d.required_labs,
            d.description,
            self.activities_as_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::activity::ActivityKind;
    use super::*;
    use chrono::{NaiveDate, Weekday};

    fn details(code: &str) -> CourseDetails {
        CourseDetails {
            code: code.to_string(),
            name: "Introduction to Software Engineering".to_string(),
            description: "Foundations of modern software development".to_string(),
            requires_computers: true,
            course_organiser_name: "Ada Lovelace".to_string(),
            course_organiser_email: "a.lovelace@hindeburg.ac.uk".to_string(),
            course_secretary_name: "Charles Babbage".to_string(),
            course_secretary_email: "c.babbage@hindeburg.ac.uk".to_string(),
            required_tutorials: 1,
            required_labs: 1,
        }
    }

    fn tutorial(id: u32) -> Activity {
        Activity::new(
            id,
            NaiveDate::from_ymd_opt(2025, 3, 26).unwrap(),
            "10:00:00".parse().unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
            "11:00:00".parse().unwrap(),
            "Room B12".to_string(),
            Weekday::Tue,
            ActivityKind::Tutorial { capacity: 25 },
        )
    }

    #[test]
    fn test_course_creation() {
        let course = Course::new(details("COM1001"));
        assert_eq!(course.code(), "COM1001");
        assert!(course.activities.is_empty());
    }

    #[test]
    fn test_add_activity_rejects_duplicate_id() {
        let mut course = Course::new(details("COM1001"));
        assert!(course.add_activity(tutorial(101)).is_ok());
        let err = course.add_activity(tutorial(101)).unwrap_err();
        assert_eq!(err, "Activity with ID 101 already exists.");
        assert_eq!(course.activities.len(), 1);
    }

    #[test]
    fn test_unrecorded_lecture_lookup() {
        let mut course = Course::new(details("COM1001"));
        course
            .add_activity(Activity::new(
                1,
                NaiveDate::from_ymd_opt(2025, 3, 26).unwrap(),
                "09:00:00".parse().unwrap(),
                NaiveDate::from_ymd_opt(2025, 4, 30).unwrap(),
                "10:00:00".parse().unwrap(),
                "Lecture Hall 1".to_string(),
                Weekday::Mon,
                ActivityKind::Lecture { recorded: false },
            ))
            .unwrap();
        course.add_activity(tutorial(2)).unwrap();

        assert!(course.is_unrecorded_lecture(1));
        assert!(!course.is_unrecorded_lecture(2));
        assert!(!course.is_unrecorded_lecture(99));
    }

    #[test]
    fn test_activities_string_when_empty() {
        let course = Course::new(details("COM1001"));
        assert_eq!(course.activities_as_string(), "No activities assigned.");
    }

    #[test]
    fn test_display_includes_metadata_and_activities() {
        let mut course = Course::new(details("COM1001"));
        course.add_activity(tutorial(101)).unwrap();

        let text = course.to_string();
        assert!(text.starts_with("COM1001 - Introduction to Software Engineering\n"));
        assert!(text.contains("Organiser: Ada Lovelace <a.lovelace@hindeburg.ac.uk>"));
        assert!(text.contains("Requires Computers: true"));
        assert!(text.contains("Required Tutorials: 1, Labs: 1"));
        assert!(text.contains("[Tutorial #101] TUESDAY 10:00-11:00 Room B12"));
    }

    #[test]
    fn test_equality_is_by_code() {
        let a = Course::new(details("COM1001"));
        let mut b = Course::new(details("COM1001"));
        b.details.name = "Renamed".to_string();
        assert_eq!(a, b);
    }
}
