//! Student timetable model

use super::activity::day_name;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Whether a student has committed to attending a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSlotStatus {
    /// The student attends this slot
    Chosen,
    /// The slot is on the timetable but not picked yet
    Unchosen,
}

impl fmt::Display for TimeSlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Chosen => "CHOSEN",
            Self::Unchosen => "UNCHOSEN",
        })
    }
}

/// One entry in a student's timetable, derived from a course activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day of the week the slot repeats on
    pub day: Weekday,

    /// First date the slot runs
    pub start_date: NaiveDate,

    /// Weekly start time
    pub start_time: NaiveTime,

    /// Last date the slot runs
    pub end_date: NaiveDate,

    /// Weekly end time
    pub end_time: NaiveTime,

    /// Code of the course the slot belongs to
    pub course_code: String,

    /// Id of the activity the slot was created from
    pub activity_id: u32,

    /// Chosen or unchosen
    pub status: TimeSlotStatus,
}

impl TimeSlot {
    /// Create a new time slot
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        day: Weekday,
        start_date: NaiveDate,
        start_time: NaiveTime,
        end_date: NaiveDate,
        end_time: NaiveTime,
        course_code: String,
        activity_id: u32,
        status: TimeSlotStatus,
    ) -> Self {
        Self {
            day,
            start_date,
            start_time,
            end_date,
            end_time,
            course_code,
            activity_id,
            status,
        }
    }

    /// Case-insensitive course code match, ignoring surrounding whitespace
    #[must_use]
    pub fn has_course_code(&self, code: &str) -> bool {
        self.course_code.eq_ignore_ascii_case(code.trim())
    }

    /// Whether this slot was created from the given activity id
    #[must_use]
    pub const fn has_activity_id(&self, id: u32) -> bool {
        self.activity_id == id
    }

    /// Whether the student committed to this slot
    #[must_use]
    pub fn is_chosen(&self) -> bool {
        self.status == TimeSlotStatus::Chosen
    }

    /// Combined start date and time
    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start_date.and_time(self.start_time)
    }

    /// Combined end date and time
    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end_date.and_time(self.end_time)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} - {} - {}] {} {}-{} ({} to {}) {}",
            self.course_code,
            self.activity_id,
            self.status,
            day_name(self.day),
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d"),
            if self.is_chosen() { "✓" } else { "" },
        )
    }
}

/// A student's personal timetable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timetable {
    /// Email of the student the timetable belongs to
    pub student_email: String,

    /// Slots in insertion order
    pub slots: Vec<TimeSlot>,
}

impl Timetable {
    /// Create an empty timetable for a student
    #[must_use]
    pub const fn new(student_email: String) -> Self {
        Self {
            student_email,
            slots: Vec::new(),
        }
    }

    /// Append a slot to the timetable
    pub fn add_slot(&mut self, slot: TimeSlot) {
        self.slots.push(slot);
    }

    /// Whether any slot belongs to the given course (blank codes never match)
    #[must_use]
    pub fn has_slots_for_course(&self, course_code: &str) -> bool {
        let normalized = course_code.trim();
        if normalized.is_empty() {
            return false;
        }
        self.slots.iter().any(|slot| slot.has_course_code(normalized))
    }

    /// Remove every slot belonging to the given course (blank codes are a no-op)
    pub fn remove_slots_for_course(&mut self, course_code: &str) {
        let normalized = course_code.trim();
        if normalized.is_empty() {
            return;
        }
        self.slots.retain(|slot| !slot.has_course_code(normalized));
    }

    /// Number of chosen slots for the given course
    #[must_use]
    pub fn num_chosen_activities(&self, course_code: &str) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.has_course_code(course_code) && slot.is_chosen())
            .count()
    }

    /// Mark the slot for the given course and activity as chosen.
    /// Returns false if no such slot exists.
    pub fn choose_activity(&mut self, course_code: &str, activity_id: u32) -> bool {
        for slot in &mut self.slots {
            if slot.has_course_code(course_code) && slot.has_activity_id(activity_id) {
                slot.status = TimeSlotStatus::Chosen;
                return true;
            }
        }
        false
    }

    /// Check a proposed date-time range against every existing slot.
    ///
    /// The comparison is half-open over the combined `[start, end)` range
    /// of each slot and deliberately ignores the day of week: a slot that
    /// runs anywhere inside the proposed dates counts as a conflict. The
    /// first conflicting slot is reported as `(course_code, activity_id)`.
    #[must_use]
    pub fn check_conflicts(
        &self,
        start_date: NaiveDate,
        start_time: NaiveTime,
        end_date: NaiveDate,
        end_time: NaiveTime,
    ) -> Option<(String, u32)> {
        let new_start = start_date.and_time(start_time);
        let new_end = end_date.and_time(end_time);

        self.slots
            .iter()
            .find(|slot| new_start < slot.end() && new_end > slot.start())
            .map(|slot| (slot.course_code.clone(), slot.activity_id))
    }

    /// Render the Monday-to-Friday part of the timetable, sorted by day
    /// and start time
    #[must_use]
    pub fn to_working_week_string(&self) -> String {
        let mut out = format!("Timetable for {} (Working Week):\n", self.student_email);

        let mut sorted: Vec<&TimeSlot> = self.slots.iter().collect();
        sorted.sort_by_key(|slot| (slot.day.num_days_from_monday(), slot.start_time));

        let mut has_working_week_slots = false;
        for slot in sorted {
            if slot.day.num_days_from_monday() <= 4 {
                out.push_str(&slot.to_string());
                out.push('\n');
                has_working_week_slots = true;
            }
        }

        if !has_working_week_slots {
            return "No scheduled activities for the working week.".to_string();
        }

        out.trim().to_string()
    }
}

impl fmt::Display for Timetable {
    /// Full timetable including weekend slots, sorted by day and start time
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.slots.is_empty() {
            return f.write_str("No scheduled activities.");
        }

        let mut sorted: Vec<&TimeSlot> = self.slots.iter().collect();
        sorted.sort_by_key(|slot| (slot.day.num_days_from_monday(), slot.start_time));

        let mut out = format!("Timetable for {}:\n", self.student_email);
        for slot in sorted {
            out.push_str(&slot.to_string());
            out.push('\n');
        }
        f.write_str(out.trim())
    }
}

/// All student timetables, created lazily per student email
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimetableStore {
    timetables: BTreeMap<String, Timetable>,
}

impl TimetableStore {
    /// Get the timetable for a student, creating an empty one on first use
    pub fn get_or_create(&mut self, student_email: &str) -> &mut Timetable {
        self.timetables
            .entry(student_email.to_string())
            .or_insert_with(|| Timetable::new(student_email.to_string()))
    }

    /// Look up an existing timetable
    #[must_use]
    pub fn get(&self, student_email: &str) -> Option<&Timetable> {
        self.timetables.get(student_email)
    }

    /// Iterate over all timetables mutably, in student email order
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Timetable> {
        self.timetables.values_mut()
    }
}
