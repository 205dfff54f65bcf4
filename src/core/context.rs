//! Shared session state
//!
//! The original design here is a process-wide singleton; instead one
//! [`SharedContext`] is built at startup and handed to every menu, which
//! keeps tests isolated from each other.

use super::catalog::CourseCatalog;
use super::faq::Faq;
use super::models::{Inquiry, TimetableStore, User};
use std::collections::{BTreeMap, BTreeSet};

/// Inbox that receives new inquiries unless another address is configured
pub const ADMIN_STAFF_EMAIL: &str = "inquiries@hindeburg.ac.nz";

/// Sender address for outgoing notifications unless another is configured
pub const NOREPLY_EMAIL: &str = "noreply@hindeburg.ac.nz";

/// Everything the menus share: the current user, the course catalogue,
/// student timetables, the FAQ forest, pending inquiries and the FAQ
/// subscription registry.
#[derive(Debug, Clone)]
pub struct SharedContext {
    /// The user currently driving the menus
    pub current_user: User,

    /// Inquiries waiting for a response, in submission order
    pub inquiries: Vec<Inquiry>,

    /// The FAQ forest
    pub faq: Faq,

    /// All courses in the system
    pub catalog: CourseCatalog,

    /// All student timetables
    pub timetables: TimetableStore,

    /// Inbox that receives new inquiries
    pub admin_staff_email: String,

    /// Sender address used for outgoing notifications
    pub noreply_email: String,

    /// Subscribers per FAQ topic path (see [`Faq::topic_path`])
    faq_topic_subscribers: BTreeMap<String, BTreeSet<String>>,
}

impl SharedContext {
    /// Create a fresh context with the given notification addresses
    #[must_use]
    pub fn new(admin_staff_email: String, noreply_email: String) -> Self {
        Self {
            current_user: User::Guest,
            inquiries: Vec::new(),
            faq: Faq::default(),
            catalog: CourseCatalog::default(),
            timetables: TimetableStore::default(),
            admin_staff_email,
            noreply_email,
            faq_topic_subscribers: BTreeMap::new(),
        }
    }

    /// Actor name for audit lines: the user's email, or "Guest"
    #[must_use]
    pub fn current_user_email(&self) -> String {
        self.current_user
            .email()
            .unwrap_or("Guest")
            .to_string()
    }

    /// Subscribe an email address to updates on an FAQ topic path.
    /// Returns false if it was already subscribed.
    pub fn register_for_faq_updates(&mut self, email: &str, topic_path: &str) -> bool {
        self.faq_topic_subscribers
            .entry(topic_path.to_string())
            .or_default()
            .insert(email.to_string())
    }

    /// Remove a subscription. Returns false if there was none.
    pub fn unregister_for_faq_updates(&mut self, email: &str, topic_path: &str) -> bool {
        self.faq_topic_subscribers
            .get_mut(topic_path)
            .is_some_and(|subscribers| subscribers.remove(email))
    }

    /// All subscribers of an FAQ topic path, in address order
    #[must_use]
    pub fn subscribers_for_topic(&self, topic_path: &str) -> Vec<String> {
        self.faq_topic_subscribers
            .get(topic_path)
            .map(|subscribers| subscribers.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for SharedContext {
    fn default() -> Self {
        Self::new(ADMIN_STAFF_EMAIL.to_string(), NOREPLY_EMAIL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Role;

    #[test]
    fn test_guest_actor_name() {
        let ctx = SharedContext::default();
        assert_eq!(ctx.current_user_email(), "Guest");
    }

    #[test]
    fn test_authenticated_actor_name() {
        let mut ctx = SharedContext::default();
        ctx.current_user = User::Authenticated {
            email: "student1@hindeburg.ac.uk".to_string(),
            role: Role::Student,
        };
        assert_eq!(ctx.current_user_email(), "student1@hindeburg.ac.uk");
    }

    #[test]
    fn test_register_is_idempotent_per_subscriber() {
        let mut ctx = SharedContext::default();
        assert!(ctx.register_for_faq_updates("student1@hindeburg.ac.uk", "Courses/Deadlines"));
        assert!(!ctx.register_for_faq_updates("student1@hindeburg.ac.uk", "Courses/Deadlines"));
        assert_eq!(
            ctx.subscribers_for_topic("Courses/Deadlines"),
            vec!["student1@hindeburg.ac.uk".to_string()]
        );
    }

    #[test]
    fn test_unregister_unknown_subscription() {
        let mut ctx = SharedContext::default();
        assert!(!ctx.unregister_for_faq_updates("student1@hindeburg.ac.uk", "Courses"));

        ctx.register_for_faq_updates("student1@hindeburg.ac.uk", "Courses");
        assert!(ctx.unregister_for_faq_updates("student1@hindeburg.ac.uk", "Courses"));
        assert!(ctx.subscribers_for_topic("Courses").is_empty());
    }

    #[test]
    fn test_same_topic_under_different_parents_is_kept_apart() {
        let mut ctx = SharedContext::default();
        ctx.register_for_faq_updates("a@hindeburg.ac.uk", "Courses/Deadlines");
        ctx.register_for_faq_updates("b@hindeburg.ac.uk", "Exams/Deadlines");

        assert_eq!(
            ctx.subscribers_for_topic("Courses/Deadlines"),
            vec!["a@hindeburg.ac.uk".to_string()]
        );
        assert_eq!(
            ctx.subscribers_for_topic("Exams/Deadlines"),
            vec!["b@hindeburg.ac.uk".to_string()]
        );
    }
}
