//! Data models for the self service portal

pub mod activity;
pub mod course;
pub mod inquiry;
pub mod timetable;
pub mod user;

pub use activity::{Activity, ActivityKind};
pub use course::{Course, CourseDetails};
pub use inquiry::Inquiry;
pub use timetable::{TimeSlot, TimeSlotStatus, Timetable, TimetableStore};
pub use user::{Role, User};
