//! FAQ consultation and staff contact, open to guests and authenticated users

use hindeburg_ssp::core::audit;
use hindeburg_ssp::core::context::SharedContext;
use hindeburg_ssp::core::faq::{FaqItem, FaqSection};
use hindeburg_ssp::core::models::Inquiry;
use hindeburg_ssp::external::email::is_valid_email;
use hindeburg_ssp::external::EmailService;

use super::faq_parent_topic;
use crate::console::Console;

/// Browse the FAQ tree, optionally filtered by course code.
///
/// Inside a topic, `[-2]`/`[-3]` subscribe to or unsubscribe from update
/// notifications for that topic.
pub fn consult_faq(ctx: &mut SharedContext, console: &Console) {
    let actor = ctx.current_user_email();

    let mut course_tag: Option<String> = None;
    if console.get_yes_no_input("Would you like to filter by course code?") {
        let tag = console.get_input("Enter the course code");
        if tag.trim().is_empty() {
            // blank means no filter
        } else if ctx.catalog.has_code(&tag) {
            course_tag = Some(tag);
        } else {
            console.display_error(&format!(
                "Course with code {tag} does not exist. Showing all FAQ items"
            ));
            audit::log_action(
                &actor,
                "consultFAQ",
                &tag,
                "FAILURE (Error: The tag must correspond to a course code)",
            );
        }
    }

    let mut path: Vec<usize> = Vec::new();
    loop {
        if path.is_empty() {
            console.display_faq(&ctx.faq);
            console.display_info("[-1] Return to main menu");
        } else {
            let Some(section) = ctx.faq.section_at(&path) else {
                path.clear();
                continue;
            };
            display_section(console, section, course_tag.as_deref());
            console.display_info(&format!(
                "[-1] Return to {}",
                faq_parent_topic(&ctx.faq, &path)
            ));
            console.display_info("[-2] Request updates for this topic");
            console.display_info("[-3] Stop receiving updates for this topic");
        }

        let input = console.get_input("Please choose an option: ");
        match input.parse::<i32>() {
            Ok(-1) => {
                if path.is_empty() {
                    break;
                }
                path.pop();
            }
            Ok(-2) if !path.is_empty() => subscribe_to_topic(ctx, console, &path),
            Ok(-3) if !path.is_empty() => unsubscribe_from_topic(ctx, console, &path),
            Ok(option_no) => {
                let section_count = if path.is_empty() {
                    ctx.faq.sections.len()
                } else {
                    ctx.faq
                        .section_at(&path)
                        .map_or(0, |section| section.subsections.len())
                };
                match usize::try_from(option_no) {
                    Ok(index) if index < section_count => path.push(index),
                    _ => console.display_error(&format!("Invalid option: {option_no}")),
                }
            }
            Err(_) => console.display_error(&format!("Invalid option: {input}")),
        }
    }

    let input_summary =
        course_tag.map_or_else(|| "-".to_string(), |tag| format!("courseTag={tag}"));
    audit::log_action(&actor, "consultFAQ", &input_summary, audit::SUCCESS);
}

/// Record an inquiry to staff, prompting guests for a reply address
pub fn contact_staff(ctx: &mut SharedContext, console: &Console, email: &dyn EmailService) {
    let inquirer_email = match ctx.current_user.email() {
        Some(address) => address.to_string(),
        None => {
            let entered = console.get_input("Enter your email address: ");
            if !is_valid_email(&entered) {
                console.display_error("Invalid email address! Please try again");
                return;
            }
            entered
        }
    };

    let subject = console.get_input("Describe the topic of your inquiry in a few words: ");
    if subject.trim().is_empty() {
        console.display_error("Inquiry subject cannot be blank! Please try again");
        return;
    }

    let content = console.get_input("Write your inquiry:\n");
    if content.trim().is_empty() {
        console.display_error("Inquiry content cannot be blank! Please try again");
        return;
    }

    ctx.inquiries
        .push(Inquiry::new(inquirer_email.clone(), subject.clone(), content));

    email.send_email(
        &ctx.admin_staff_email,
        &ctx.admin_staff_email,
        &format!("New inquiry from {inquirer_email}"),
        &format!(
            "Subject: {subject}\nPlease log into the Self Service Portal to review and respond to the inquiry."
        ),
    );
    audit::log_action(&inquirer_email, "contactStaff", &subject, audit::SUCCESS);
    console.display_success("Your inquiry has been recorded. Someone will be in touch via email soon!");
}

fn display_section(console: &Console, section: &FaqSection, course_tag: Option<&str>) {
    match course_tag {
        Some(tag) => console.display_info(&format!("{} (Filtered by  {tag})", section.topic)),
        None => console.display_info(&section.topic),
    }
    console.display_divider();

    let relevant_items: Vec<&FaqItem> = match course_tag {
        Some(tag) => section
            .items
            .iter()
            .filter(|item| item.has_tag(tag))
            .collect(),
        None => section.items.iter().collect(),
    };

    if relevant_items.is_empty() {
        if let Some(tag) = course_tag {
            console.display_info(&format!(
                "There are no questions for course '{tag}' in this topic."
            ));
            console.display_info("You can navigate to other topics to find relevant questions.");
        }
    } else {
        for item in relevant_items {
            console.display_info(&format!("{} {}", item.id, item.question));
            console.display_info(&format!("> {}", item.answer));
            // course tags only appear when not already filtering by one
            if course_tag.is_none() {
                if let Some(tag) = item.course_tag.as_deref().filter(|tag| !tag.is_empty()) {
                    console.display_info(&format!("> {tag}"));
                }
            }
            console.display_divider();
        }
    }

    if !section.subsections.is_empty() {
        console.display_info("Subsections:");
        for (i, subsection) in section.subsections.iter().enumerate() {
            console.display_info(&format!("[{i}] {}", subsection.topic));
        }
    }
}

/// Address to subscribe with: the session email, or a prompted and
/// validated one for guests
fn subscriber_email(ctx: &SharedContext, console: &Console) -> Option<String> {
    if let Some(address) = ctx.current_user.email() {
        return Some(address.to_string());
    }
    let entered = console.get_input("Enter your email address: ");
    if is_valid_email(&entered) {
        Some(entered)
    } else {
        console.display_error("Invalid email address! Please try again");
        None
    }
}

fn subscribe_to_topic(ctx: &mut SharedContext, console: &Console, path: &[usize]) {
    let Some(topic) = ctx.faq.topic_path(path) else {
        return;
    };
    let Some(address) = subscriber_email(ctx, console) else {
        return;
    };
    if ctx.register_for_faq_updates(&address, &topic) {
        console.display_success(&format!(
            "Successfully registered for updates on topic '{topic}'."
        ));
    } else {
        console.display_warning(&format!(
            "You are already registered for updates on topic '{topic}'."
        ));
    }
}

fn unsubscribe_from_topic(ctx: &mut SharedContext, console: &Console, path: &[usize]) {
    let Some(topic) = ctx.faq.topic_path(path) else {
        return;
    };
    let Some(address) = subscriber_email(ctx, console) else {
        return;
    };
    if ctx.unregister_for_faq_updates(&address, &topic) {
        console.display_success(&format!(
            "Successfully unregistered from updates on topic '{topic}'."
        ));
    } else {
        console.display_warning(&format!(
            "You are not registered for updates on topic '{topic}'."
        ));
    }
}
