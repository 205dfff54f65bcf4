//! Inquiry model

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A message sent through "contact staff", waiting for a response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    /// When the inquiry was recorded
    pub created_at: NaiveDateTime,

    /// Address any response is sent to
    pub inquirer_email: String,

    /// Short subject line
    pub subject: String,

    /// Full text of the inquiry
    pub content: String,

    /// Teaching staff member the inquiry was redirected to, if any
    pub assigned_to: Option<String>,
}

impl Inquiry {
    /// Record a new unassigned inquiry, stamped with the current local time
    #[must_use]
    pub fn new(inquirer_email: String, subject: String, content: String) -> Self {
        Self {
            created_at: Local::now().naive_local(),
            inquirer_email,
            subject,
            content,
            assigned_to: None,
        }
    }
}
