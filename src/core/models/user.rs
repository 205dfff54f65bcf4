//! Portal user model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of an authenticated portal user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Enrolled student
    Student,
    /// Teaching staff member
    TeachingStaff,
    /// Administrative staff member
    AdminStaff,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Student" => Ok(Self::Student),
            "TeachingStaff" => Ok(Self::TeachingStaff),
            "AdminStaff" => Ok(Self::AdminStaff),
            _ => Err(format!("Unsupported user role {s}")),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Student => "Student",
            Self::TeachingStaff => "TeachingStaff",
            Self::AdminStaff => "AdminStaff",
        })
    }
}

/// The user currently driving the menus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum User {
    /// Anonymous visitor, allowed to browse and submit inquiries
    #[default]
    Guest,
    /// Logged-in member of the university
    Authenticated {
        /// Email the member logged in with
        email: String,
        /// Role controlling which menu the member sees
        role: Role,
    },
}

impl User {
    /// Email of the current user, if authenticated
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Guest => None,
            Self::Authenticated { email, .. } => Some(email),
        }
    }

    /// Role of the current user, if authenticated
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        match self {
            Self::Guest => None,
            Self::Authenticated { role, .. } => Some(*role),
        }
    }

    /// Whether the current user is an anonymous guest
    #[must_use]
    pub const fn is_guest(&self) -> bool {
        matches!(self, Self::Guest)
    }
}
