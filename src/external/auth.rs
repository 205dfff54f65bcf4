//! Authentication collaborator

use crate::core::models::Role;
use serde::Deserialize;

/// One credentials record in the bundled mock user file
#[derive(Debug, Clone, Deserialize)]
struct MockUserRecord {
    username: String,
    password: String,
    email: String,
    role: String,
}

/// Shape of the bundled mock user file
#[derive(Debug, Clone, Deserialize)]
struct MockUserFile {
    #[serde(default)]
    users: Vec<MockUserRecord>,
}

/// Successful login: who the user is and what they may do
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    /// The username that was entered
    pub username: String,

    /// Email address on record for the user
    pub email: String,

    /// Role controlling which menu the user sees
    pub role: Role,
}

/// Boundary contract for credential checks
pub trait AuthenticationService {
    /// Verify a username/password pair
    ///
    /// # Errors
    /// Returns a user-displayable message when the credentials are wrong
    /// or the stored record is unusable.
    fn login(&self, username: &str, password: &str) -> Result<AuthenticatedSession, String>;
}

/// Credential store backed by the compiled-in mock user records
#[derive(Debug, Clone)]
pub struct MockAuthenticationService {
    users: Vec<MockUserRecord>,
}

impl MockAuthenticationService {
    /// Parse the bundled user records
    ///
    /// # Errors
    /// Returns an error if the bundled TOML cannot be parsed.
    pub fn new() -> Result<Self, String> {
        let file: MockUserFile = toml::from_str(include_str!("../assets/MockUsers.toml"))
            .map_err(|e| format!("Failed to parse mock user records: {e}"))?;
        Ok(Self { users: file.users })
    }
}

impl AuthenticationService for MockAuthenticationService {
    /// Exact match on both fields: usernames and passwords are
    /// case-sensitive.
    fn login(&self, username: &str, password: &str) -> Result<AuthenticatedSession, String> {
        let record = self
            .users
            .iter()
            .find(|u| u.username == username && u.password == password)
            .ok_or_else(|| "Wrong username or password".to_string())?;

        if record.email.trim().is_empty() {
            return Err("User email cannot be empty!".to_string());
        }
        let role = record.role.parse::<Role>()?;
        Ok(AuthenticatedSession {
            username: record.username.clone(),
            email: record.email.clone(),
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> MockAuthenticationService {
        MockAuthenticationService::new().expect("bundled mock users parse")
    }

    #[test]
    fn test_login_with_valid_credentials() {
        let session = service().login("admin1", "admin1pass").unwrap();
        assert_eq!(session.username, "admin1");
        assert_eq!(session.email, "admin1@hindeburg.ac.uk");
        assert_eq!(session.role, Role::AdminStaff);

        assert_eq!(
            service().login("teacher1", "teacher1pass").unwrap().role,
            Role::TeachingStaff
        );
        assert_eq!(
            service().login("student1", "student1pass").unwrap().role,
            Role::Student
        );
    }

    #[test]
    fn test_login_with_wrong_password() {
        let err = service().login("admin1", "nottherightone").unwrap_err();
        assert_eq!(err, "Wrong username or password");
    }

    #[test]
    fn test_login_is_case_sensitive() {
        assert!(service().login("Admin1", "admin1pass").is_err());
        assert!(service().login("admin1", "ADMIN1PASS").is_err());
    }

    #[test]
    fn test_login_with_empty_fields() {
        assert!(service().login("", "admin1pass").is_err());
        assert!(service().login("admin1", "").is_err());
        assert!(service().login("", "").is_err());
    }

    #[test]
    fn test_unusable_records_are_rejected() {
        let no_email = MockAuthenticationService {
            users: vec![MockUserRecord {
                username: "ghost1".to_string(),
                password: "ghost1pass".to_string(),
                email: "  ".to_string(),
                role: "Student".to_string(),
            }],
        };
        let err = no_email.login("ghost1", "ghost1pass").unwrap_err();
        assert_eq!(err, "User email cannot be empty!");

        let bad_role = MockAuthenticationService {
            users: vec![MockUserRecord {
                username: "ghost2".to_string(),
                password: "ghost2pass".to_string(),
                email: "ghost2@hindeburg.ac.uk".to_string(),
                role: "Visitor".to_string(),
            }],
        };
        let err = bad_role.login("ghost2", "ghost2pass").unwrap_err();
        assert_eq!(err, "Unsupported user role Visitor");
    }
}
