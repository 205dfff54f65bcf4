//! Course activity model

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper-case day name as printed in timetables (e.g., "MONDAY")
#[must_use]
pub const fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}

/// The kind of a scheduled activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    /// Weekly lecture, possibly recorded for later viewing
    Lecture {
        /// Whether a recording is published after the session
        recorded: bool,
    },
    /// Small-group tutorial with a seat limit
    Tutorial {
        /// Maximum number of students
        capacity: u32,
    },
    /// Supervised lab session with a seat limit
    Lab {
        /// Maximum number of students
        capacity: u32,
    },
    /// Anything else on the course schedule (seminars, field trips, ...)
    General,
}

impl ActivityKind {
    /// Human-readable label used when printing activities
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Lecture { recorded: true } => "Lecture (Recorded)",
            Self::Lecture { recorded: false } => "Lecture (Unrecorded)",
            Self::Tutorial { .. } => "Tutorial",
            Self::Lab { .. } => "Lab",
            Self::General => "GeneralActivity",
        }
    }

    /// Whether this is a lecture of any kind
    #[must_use]
    pub const fn is_lecture(&self) -> bool {
        matches!(self, Self::Lecture { .. })
    }

    /// Whether this counts towards the tutorial/lab selection requirement
    #[must_use]
    pub const fn is_tutorial_or_lab(&self) -> bool {
        matches!(self, Self::Tutorial { .. } | Self::Lab { .. })
    }
}

/// A recurring scheduled activity belonging to a course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Identifier, unique within the owning course
    pub id: u32,

    /// First date the activity runs
    pub start_date: NaiveDate,

    /// Weekly start time
    pub start_time: NaiveTime,

    /// Last date the activity runs
    pub end_date: NaiveDate,

    /// Weekly end time
    pub end_time: NaiveTime,

    /// Room or venue
    pub location: String,

    /// Day of the week the activity repeats on
    pub day: Weekday,

    /// Lecture, tutorial, lab or general
    pub kind: ActivityKind,
}

impl Activity {
    /// Create a new activity
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub const fn new(
        id: u32,
        start_date: NaiveDate,
        start_time: NaiveTime,
        end_date: NaiveDate,
        end_time: NaiveTime,
        location: String,
        day: Weekday,
        kind: ActivityKind,
    ) -> Self {
        Self {
            id,
            start_date,
            start_time,
            end_date,
            end_time,
            location,
            day,
            kind,
        }
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

    /// Whether this is a lecture without a published recording
    #[must_use]
    pub const fn is_unrecorded_lecture(&self) -> bool {
        matches!(self.kind, ActivityKind::Lecture { recorded: false })
    }

    /// Check whether two activities overlap.
    ///
    /// Activities on different days never overlap. On the same day their
    /// full `[start, end)` date-time ranges are compared half-open, so a
    /// session ending exactly when another starts does not conflict.
    #[must_use]
    pub fn overlaps_with(&self, other: &Self) -> bool {
        self.day == other.day && self.start() < other.end() && self.end() > other.start()
    }
}

/// Activities are identified by their id within a course
impl PartialEq for Activity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Activity {}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} #{}] {} {}-{} {} from {} to {}",
            self.kind.label(),
            self.id,
            day_name(self.day),
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
            self.location,
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d"),
        )
    }
}
