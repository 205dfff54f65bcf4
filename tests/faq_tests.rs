//! Integration tests for FAQ topic management and update subscriptions

use hindeburg_ssp::core::context::SharedContext;
use hindeburg_ssp::core::faq::FaqSection;

const STUDENT: &str = "student1@hindeburg.ac.uk";

/// A context whose FAQ holds Courses/Deadlines and Exams/Deadlines
fn context_with_faq_tree() -> SharedContext {
    let mut ctx = SharedContext::default();

    let (courses, created) = ctx.faq.add_section("Courses");
    assert!(created);
    ctx.faq
        .section_at_mut(&[courses])
        .expect("section was just added")
        .add_subsection(FaqSection::new("Deadlines".to_string()));

    let (exams, created) = ctx.faq.add_section("Exams");
    assert!(created);
    ctx.faq
        .section_at_mut(&[exams])
        .expect("section was just added")
        .add_subsection(FaqSection::new("Deadlines".to_string()));

    ctx
}

#[test]
fn test_subscription_keys_come_from_topic_paths() {
    let mut ctx = context_with_faq_tree();

    let courses_deadlines = ctx
        .faq
        .topic_path(&[0, 0])
        .expect("path exists");
    let exams_deadlines = ctx
        .faq
        .topic_path(&[1, 0])
        .expect("path exists");
    assert_eq!(courses_deadlines, "Courses/Deadlines");
    assert_eq!(exams_deadlines, "Exams/Deadlines");

    assert!(ctx.register_for_faq_updates(STUDENT, &courses_deadlines));

    // The topics share a name but not a path, so only one key matches
    assert_eq!(
        ctx.subscribers_for_topic(&courses_deadlines),
        vec![STUDENT.to_string()]
    );
    assert!(ctx.subscribers_for_topic(&exams_deadlines).is_empty());
}

#[test]
fn test_subscribers_are_listed_in_address_order() {
    let mut ctx = context_with_faq_tree();

    assert!(ctx.register_for_faq_updates("carol@hindeburg.ac.uk", "Courses/Deadlines"));
    assert!(ctx.register_for_faq_updates("alice@hindeburg.ac.uk", "Courses/Deadlines"));
    assert!(ctx.register_for_faq_updates("bob@hindeburg.ac.uk", "Courses/Deadlines"));

    assert_eq!(
        ctx.subscribers_for_topic("Courses/Deadlines"),
        vec![
            "alice@hindeburg.ac.uk".to_string(),
            "bob@hindeburg.ac.uk".to_string(),
            "carol@hindeburg.ac.uk".to_string(),
        ]
    );
}

#[test]
fn test_unregister_removes_only_that_subscription() {
    let mut ctx = context_with_faq_tree();

    assert!(ctx.register_for_faq_updates(STUDENT, "Courses/Deadlines"));
    assert!(ctx.register_for_faq_updates(STUDENT, "Exams/Deadlines"));

    assert!(ctx.unregister_for_faq_updates(STUDENT, "Courses/Deadlines"));
    assert!(!ctx.unregister_for_faq_updates(STUDENT, "Courses/Deadlines"));

    assert!(ctx.subscribers_for_topic("Courses/Deadlines").is_empty());
    assert_eq!(
        ctx.subscribers_for_topic("Exams/Deadlines"),
        vec![STUDENT.to_string()]
    );
}

#[test]
fn test_new_topic_is_created_under_the_browse_position() {
    let mut ctx = context_with_faq_tree();

    // Reuse an existing subtopic instead of duplicating it
    let courses = ctx.faq.section_at_mut(&[0]).expect("root section");
    assert_eq!(courses.find_subsection("Deadlines"), Some(0));
    assert_eq!(courses.subsections.len(), 1);

    // A fresh subtopic lands next to it
    assert_eq!(courses.find_subsection("Marking"), None);
    let marking = courses.add_subsection(FaqSection::new("Marking".to_string()));
    assert_eq!(marking, 1);

    let item_id = ctx
        .faq
        .section_at_mut(&[0, marking])
        .expect("subsection was just added")
        .add_item(
            "When are marks released?".to_string(),
            "Four weeks after the exam board.".to_string(),
            None,
        );
    assert_eq!(item_id, 0);

    assert_eq!(
        ctx.faq.topic_path(&[0, marking]).expect("path exists"),
        "Courses/Marking"
    );
}
