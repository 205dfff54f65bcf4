//! Hierarchical FAQ tree
//!
//! Topics form a forest: root sections with arbitrarily nested subsections,
//! each holding question/answer items. Items may carry a course-code tag so
//! the consultation flow can filter them. Item ids are sequential within
//! their owning section, in the same way menu positions are: nothing here is
//! globally unique across the tree.

use serde::{Deserialize, Serialize};

/// A single question and answer, optionally tagged with a course code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    /// Sequential id within the owning section
    pub id: usize,

    /// The question text
    pub question: String,

    /// The answer text
    pub answer: String,

    /// Course code this item relates to, if any
    pub course_tag: Option<String>,
}

impl FaqItem {
    /// Whether the item is tagged with exactly the given course code
    #[must_use]
    pub fn has_tag(&self, course_tag: &str) -> bool {
        self.course_tag.as_deref() == Some(course_tag)
    }
}

/// A topic node holding items and nested subsections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqSection {
    /// Topic title shown in menus
    pub topic: String,

    /// Items in insertion order, ids assigned by [`add_item`](Self::add_item)
    pub items: Vec<FaqItem>,

    /// Nested subsections in insertion order
    pub subsections: Vec<FaqSection>,
}

impl FaqSection {
    /// Create an empty section for a topic
    #[must_use]
    pub const fn new(topic: String) -> Self {
        Self {
            topic,
            items: Vec::new(),
            subsections: Vec::new(),
        }
    }

    /// Append a subsection and return its index.
    ///
    /// Duplicate topics are not checked here: callers that care look for an
    /// existing sibling first via [`find_subsection`](Self::find_subsection).
    pub fn add_subsection(&mut self, section: Self) -> usize {
        self.subsections.push(section);
        self.subsections.len() - 1
    }

    /// Add an item, assigning it the next sequential id in this section
    pub fn add_item(
        &mut self,
        question: String,
        answer: String,
        course_tag: Option<String>,
    ) -> usize {
        let id = self.items.len();
        self.items.push(FaqItem {
            id,
            question,
            answer,
            course_tag,
        });
        id
    }

    /// Remove the first item with the given id. Returns false if absent.
    pub fn remove_item(&mut self, item_id: usize) -> bool {
        if let Some(pos) = self.items.iter().position(|item| item.id == item_id) {
            self.items.remove(pos);
            return true;
        }
        false
    }

    /// Whether this section covers the given topic
    #[must_use]
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topic == topic
    }

    /// Index of the direct subsection with the given topic, if any
    #[must_use]
    pub fn find_subsection(&self, topic: &str) -> Option<usize> {
        self.subsections.iter().position(|s| s.has_topic(topic))
    }
}

/// The FAQ forest, navigated by index paths from the root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    /// Root sections in insertion order
    pub sections: Vec<FaqSection>,
}

impl Faq {
    /// Get or create a root section for a topic.
    ///
    /// Returns the section index and whether a new section was created.
    /// An existing root section with the same topic is reused.
    pub fn add_section(&mut self, topic: &str) -> (usize, bool) {
        if let Some(idx) = self.sections.iter().position(|s| s.has_topic(topic)) {
            return (idx, false);
        }
        self.sections.push(FaqSection::new(topic.to_string()));
        (self.sections.len() - 1, true)
    }

    /// Walk an index path from the root down to a section
    #[must_use]
    pub fn section_at(&self, path: &[usize]) -> Option<&FaqSection> {
        let (first, rest) = path.split_first()?;
        let mut section = self.sections.get(*first)?;
        for &idx in rest {
            section = section.subsections.get(idx)?;
        }
        Some(section)
    }

    /// Mutable variant of [`section_at`](Self::section_at)
    pub fn section_at_mut(&mut self, path: &[usize]) -> Option<&mut FaqSection> {
        let (first, rest) = path.split_first()?;
        let mut section = self.sections.get_mut(*first)?;
        for &idx in rest {
            section = section.subsections.get_mut(idx)?;
        }
        Some(section)
    }

    /// Topic names along an index path, joined with `/`.
    ///
    /// This is the identity subscriptions are keyed by: two sections with
    /// the same topic text under different parents get different paths.
    #[must_use]
    pub fn topic_path(&self, path: &[usize]) -> Option<String> {
        let (first, rest) = path.split_first()?;
        let mut section = self.sections.get(*first)?;
        let mut topics = vec![section.topic.clone()];
        for &idx in rest {
            section = section.subsections.get(idx)?;
            topics.push(section.topic.clone());
        }
        Some(topics.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_section_is_reused_for_duplicate_topic() {
        let mut faq = Faq::default();
        let (first, created) = faq.add_section("Enrolment");
        assert!(created);

        let (second, created) = faq.add_section("Enrolment");
        assert!(!created);
        assert_eq!(first, second);
        assert_eq!(faq.sections.len(), 1);
    }

    #[test]
    fn test_first_item_in_new_section_has_id_zero() {
        let mut faq = Faq::default();
        let (idx, _) = faq.add_section("Enrolment");
        let id = faq.sections[idx].add_item(
            "When does enrolment close?".to_string(),
            "Two weeks into the semester.".to_string(),
            None,
        );
        assert_eq!(id, 0);
    }

    #[test]
    fn test_item_ids_restart_per_section() {
        let mut faq = Faq::default();
        let (a, _) = faq.add_section("Enrolment");
        let (b, _) = faq.add_section("Exams");

        faq.sections[a].add_item("Q1".to_string(), "A1".to_string(), None);
        faq.sections[a].add_item("Q2".to_string(), "A2".to_string(), None);
        let id = faq.sections[b].add_item("Q3".to_string(), "A3".to_string(), None);

        assert_eq!(id, 0);
    }

    #[test]
    fn test_item_id_can_repeat_after_removal() {
        let mut section = FaqSection::new("Enrolment".to_string());
        section.add_item("Q1".to_string(), "A1".to_string(), None);
        section.add_item("Q2".to_string(), "A2".to_string(), None);

        assert!(section.remove_item(0));
        assert!(!section.remove_item(0));

        // Ids are positional at insertion time, so the next item repeats id 1
        let id = section.add_item("Q3".to_string(), "A3".to_string(), None);
        assert_eq!(id, 1);
        assert_eq!(section.items.len(), 2);
    }

    #[test]
    fn test_section_at_walks_nested_path() {
        let mut faq = Faq::default();
        let (root, _) = faq.add_section("Courses");
        let child = faq.sections[root].add_subsection(FaqSection::new("Timetables".to_string()));
        faq.sections[root].subsections[child]
            .add_subsection(FaqSection::new("Clashes".to_string()));

        let section = faq.section_at(&[root, child, 0]).unwrap();
        assert_eq!(section.topic, "Clashes");
        assert!(faq.section_at(&[root, child, 7]).is_none());
        assert!(faq.section_at(&[]).is_none());
    }

    #[test]
    fn test_topic_path_distinguishes_same_topic_under_different_parents() {
        let mut faq = Faq::default();
        let (courses, _) = faq.add_section("Courses");
        let (exams, _) = faq.add_section("Exams");
        faq.sections[courses].add_subsection(FaqSection::new("Deadlines".to_string()));
        faq.sections[exams].add_subsection(FaqSection::new("Deadlines".to_string()));

        assert_eq!(
            faq.topic_path(&[courses, 0]).unwrap(),
            "Courses/Deadlines"
        );
        assert_eq!(faq.topic_path(&[exams, 0]).unwrap(), "Exams/Deadlines");
    }

    #[test]
    fn test_tag_match_is_exact() {
        let item = FaqItem {
            id: 0,
            question: "Is COM1001 examined?".to_string(),
            answer: "Yes, in semester two.".to_string(),
            course_tag: Some("COM1001".to_string()),
        };
        assert!(item.has_tag("COM1001"));
        assert!(!item.has_tag("com1001"));

        let untagged = FaqItem {
            id: 1,
            question: "General question".to_string(),
            answer: "General answer".to_string(),
            course_tag: None,
        };
        assert!(!untagged.has_tag("COM1001"));
    }
}
