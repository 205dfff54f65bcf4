//! External service collaborators
//!
//! The portal touches two boundary services: authentication and email.
//! Both are traits with mock implementations, since the university test
//! environment runs without real infrastructure behind either.

pub mod auth;
pub mod email;

pub use auth::{AuthenticatedSession, AuthenticationService, MockAuthenticationService};
pub use email::{EmailService, EmailStatus, MockEmailService};
