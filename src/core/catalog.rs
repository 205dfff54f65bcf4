//! Course catalogue and the timetable operations built on top of it
//!
//! The catalogue owns every course in the system, keyed by course code.
//! Student-facing operations (adding a course to a timetable, choosing an
//! activity) live here too: they read the catalogue and mutate a
//! [`TimetableStore`] passed in by the caller. Each mutating operation
//! records one line in the audit trail.

use super::audit;
use super::models::{Activity, Course, CourseDetails, TimeSlot, TimeSlotStatus, TimetableStore};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Three uppercase letters followed by four digits
static COURSE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[A-Z]{3}[0-9]{4}$").expect("Failed to compile course code pattern")
});

/// Whether a course code has the required `ABC1234` shape
fn check_course_code(code: &str) -> bool {
    COURSE_CODE_RE.is_match(code)
}

/// Outcome of an attempt to add a course to the catalogue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCourseResult {
    /// Whether the course was stored
    pub success: bool,

    /// Message to show the user
    pub message: String,
}

impl AddCourseResult {
    fn failure(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
        }
    }
}

/// All courses in the system, keyed by course code
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseCatalog {
    courses: BTreeMap<String, Course>,
}

impl CourseCatalog {
    /// Add a new course if its code is well-formed and unique.
    ///
    /// The attempt is recorded in the audit trail under the acting user,
    /// whether it succeeds or not.
    pub fn add_course(&mut self, details: CourseDetails, added_by: &str) -> AddCourseResult {
        let input_summary = format!(
            "code={}, name={}, requiresComputers={}",
            details.code, details.name, details.requires_computers
        );

        if details.code.trim().is_empty() {
            audit::log_action(
                added_by,
                "addCourse",
                &input_summary,
                "FAILURE (Error: Required course info not provided)",
            );
            return AddCourseResult::failure("Required course info not provided.");
        }

        if !check_course_code(&details.code) {
            audit::log_action(
                added_by,
                "addCourse",
                &input_summary,
                "FAILURE (Error: Provided courseCode is invalid)",
            );
            return AddCourseResult::failure("Provided courseCode is invalid.");
        }

        if self.courses.contains_key(&details.code) {
            audit::log_action(
                added_by,
                "addCourse",
                &input_summary,
                "FAILURE (Error: Course with that code already exists)",
            );
            return AddCourseResult::failure("Course with that code already exists.");
        }

        let code = details.code.clone();
        self.courses.insert(code, Course::new(details));

        audit::log_action(added_by, "addCourse", &input_summary, audit::SUCCESS);
        AddCourseResult {
            success: true,
            message: "Course added successfully.".to_string(),
        }
    }

    /// Whether a course with the given code exists
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.courses.contains_key(code)
    }

    /// Whether the catalogue holds no courses at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Look up a course by code
    #[must_use]
    pub fn get_course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// Iterate over all courses in code order
    pub fn all_courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// One `code - name` line per course, or a fixed message when empty
    #[must_use]
    pub fn view_courses(&self) -> String {
        if self.courses.is_empty() {
            return "No courses available.".to_string();
        }

        let mut out = String::new();
        for course in self.courses.values() {
            out.push_str(course.code());
            out.push_str(" - ");
            out.push_str(&course.details.name);
            out.push('\n');
        }
        out.trim().to_string()
    }

    /// Full details of one course, or `None` if the code is unknown
    #[must_use]
    pub fn view_course(&self, code: &str) -> Option<String> {
        self.courses.get(code).map(Course::to_string)
    }

    /// Schedule an activity on an existing course
    ///
    /// # Errors
    /// Returns an error if the course is unknown or the activity id is
    /// already taken within the course.
    pub fn add_activity_to_course(&mut self, code: &str, activity: Activity) -> Result<(), String> {
        match self.courses.get_mut(code) {
            Some(course) => course.add_activity(activity),
            None => Err(format!("Course not found: {code}")),
        }
    }

    /// Remove a course and purge it from every student timetable.
    ///
    /// Returns the addresses to notify: the course organiser first, then
    /// every student whose timetable held a slot for the course. `None`
    /// means the course was not found.
    pub fn remove_course(
        &mut self,
        timetables: &mut TimetableStore,
        code: &str,
        removed_by: &str,
    ) -> Option<Vec<String>> {
        let removed = match self.courses.remove(code) {
            Some(course) => course,
            None => {
                audit::log_action(removed_by, "removeCourse", code, "FAILURE (Course not found)");
                return None;
            }
        };

        let mut emails_to_notify = vec![removed.details.course_organiser_email.clone()];
        for timetable in timetables.values_mut() {
            if timetable.has_slots_for_course(code) {
                emails_to_notify.push(timetable.student_email.clone());
                timetable.remove_slots_for_course(code);
            }
        }

        audit::log_action(removed_by, "removeCourse", code, audit::SUCCESS);
        Some(emails_to_notify)
    }

    /// Add every activity of a course to a student's timetable.
    ///
    /// The operation is atomic: all activities are checked against the
    /// student's existing slots first, and if any of them clashes with a
    /// slot whose activity is an unrecorded lecture, nothing is inserted.
    /// Other clashes only produce warnings. Lectures are inserted as
    /// chosen; tutorials, labs and general activities start unchosen, and
    /// a final warning reminds the student if the chosen tutorial/lab
    /// count is still below what the course requires.
    ///
    /// On success the returned warnings are in detection order.
    ///
    /// # Errors
    /// Returns an error for a blank course code, an unknown course, or an
    /// unrecorded-lecture clash.
    pub fn add_course_to_student_timetable(
        &self,
        timetables: &mut TimetableStore,
        student_email: &str,
        code: &str,
    ) -> Result<Vec<String>, String> {
        let code = code.trim();
        if code.is_empty() {
            return Err("Invalid course code provided.".to_string());
        }

        let course = match self.courses.get(code) {
            Some(course) => course,
            None => {
                audit::log_action(
                    student_email,
                    "addCourseToStudentTimetable",
                    code,
                    "FAILURE (Error: Course does not exist)",
                );
                return Err(format!("Course {code} does not exist."));
            }
        };

        let timetable = timetables.get_or_create(student_email);
        let mut warnings = Vec::new();

        // Check every activity against the existing slots before touching
        // the timetable, so a hard stop leaves it untouched.
        for activity in &course.activities {
            let conflict = timetable.check_conflicts(
                activity.start_date,
                activity.start_time,
                activity.end_date,
                activity.end_time,
            );
            if let Some((conflict_code, conflict_id)) = conflict {
                let is_hard_stop = self
                    .courses
                    .get(&conflict_code)
                    .is_some_and(|c| c.is_unrecorded_lecture(conflict_id));

                if is_hard_stop {
                    audit::log_action(
                        student_email,
                        "addCourseToStudentTimetable",
                        code,
                        "FAILURE (Error: Conflict with unrecorded lecture)",
                    );
                    return Err(format!(
                        "Conflict detected: activity {conflict_id} of course {conflict_code} is an unrecorded lecture."
                    ));
                }

                audit::log_action(
                    student_email,
                    "addCourseToStudentTimetable",
                    code,
                    &format!("WARNING (Conflict with activity {conflict_id} of course {conflict_code})"),
                );
                warnings.push(format!(
                    "Conflict detected: activity {} of course {code} overlaps with activity {conflict_id} of course {conflict_code}.",
                    activity.id
                ));
            }
        }

        for activity in &course.activities {
            let status = if activity.kind.is_lecture() {
                TimeSlotStatus::Chosen
            } else {
                TimeSlotStatus::Unchosen
            };
            timetable.add_slot(TimeSlot::new(
                activity.day,
                activity.start_date,
                activity.start_time,
                activity.end_date,
                activity.end_time,
                code.to_string(),
                activity.id,
                status,
            ));
        }

        let required = course.details.required_tutorials + course.details.required_labs;
        let mut chosen: u32 = 0;
        for slot in &timetable.slots {
            if slot.has_course_code(code)
                && slot.is_chosen()
                && course
                    .activities
                    .iter()
                    .any(|a| a.id == slot.activity_id && a.kind.is_tutorial_or_lab())
            {
                chosen += 1;
            }
        }
        if chosen < required {
            warnings.push(format!(
                "You have not yet chosen all required tutorials/labs ({chosen}/{required}) for course {code}."
            ));
        }

        audit::log_action(
            student_email,
            "addCourseToStudentTimetable",
            code,
            audit::SUCCESS,
        );
        Ok(warnings)
    }

    /// Mark one activity of a timetabled course as chosen
    ///
    /// # Errors
    /// Returns an error if the course is unknown, the course has no slots
    /// on the student's timetable, or no slot matches the activity id.
    pub fn choose_activity_for_course(
        &self,
        timetables: &mut TimetableStore,
        student_email: &str,
        code: &str,
        activity_id: u32,
    ) -> Result<(), String> {
        let input_summary = format!("code={code}, activityId={activity_id}");

        if !self.courses.contains_key(code) {
            audit::log_action(
                student_email,
                "chooseActivityForCourse",
                &input_summary,
                "FAILURE (Error: Course does not exist)",
            );
            return Err(format!("Course {code} does not exist."));
        }

        let timetable = timetables.get_or_create(student_email);
        if !timetable.has_slots_for_course(code) {
            audit::log_action(
                student_email,
                "chooseActivityForCourse",
                &input_summary,
                "FAILURE (Error: Course not in timetable)",
            );
            return Err(format!("Course {code} is not in your timetable."));
        }

        if !timetable.choose_activity(code, activity_id) {
            audit::log_action(
                student_email,
                "chooseActivityForCourse",
                &input_summary,
                "FAILURE (Error: Activity not found)",
            );
            return Err(format!("Activity {activity_id} not found for course {code}."));
        }

        audit::log_action(
            student_email,
            "chooseActivityForCourse",
            &input_summary,
            audit::SUCCESS,
        );
        Ok(())
    }
}
