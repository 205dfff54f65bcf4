//! Inquiry handling shared by teaching and admin staff

use hindeburg_ssp::core::audit;
use hindeburg_ssp::core::context::SharedContext;
use hindeburg_ssp::core::models::Inquiry;
use hindeburg_ssp::external::EmailService;

use super::select_from_menu;
use crate::console::Console;

/// Trimmed inquiry subjects, used as menu options
pub(crate) fn inquiry_titles(inquiries: &[Inquiry]) -> Vec<String> {
    inquiries
        .iter()
        .map(|inquiry| inquiry.subject.trim().to_string())
        .collect()
}

/// Prompt for a subject and response, email the inquirer, and drop the
/// inquiry from the pending list
pub(crate) fn respond_to_inquiry(
    ctx: &mut SharedContext,
    console: &Console,
    email: &dyn EmailService,
    inquiry_index: usize,
) {
    let subject = console.get_input("Enter subject: ");
    let response = console.get_input("Enter response:\n");

    let Some(staff_email) = ctx.current_user.email().map(str::to_string) else {
        return;
    };
    if inquiry_index >= ctx.inquiries.len() {
        return;
    }
    let inquiry = ctx.inquiries.remove(inquiry_index);
    email.send_email(&staff_email, &inquiry.inquirer_email, &subject, &response);
    audit::log_action(
        &staff_email,
        "respondToInquiry",
        &inquiry.inquirer_email,
        audit::SUCCESS,
    );
    console.display_success("Email response sent!");
}

/// Work through the inquiries assigned to the current teaching staff member
pub fn manage_received_inquiries(
    ctx: &mut SharedContext,
    console: &Console,
    email: &dyn EmailService,
) {
    loop {
        let Some(staff_email) = ctx.current_user.email().map(str::to_string) else {
            return;
        };
        // Recomputed every pass so responded inquiries drop out of the menu
        let assigned: Vec<usize> = ctx
            .inquiries
            .iter()
            .enumerate()
            .filter(|(_, inquiry)| inquiry.assigned_to.as_deref() == Some(staff_email.as_str()))
            .map(|(index, _)| index)
            .collect();
        let titles: Vec<String> = assigned
            .iter()
            .map(|&index| ctx.inquiries[index].subject.trim().to_string())
            .collect();

        console.display_info("Assigned inquiries");
        let Some(selection) = select_from_menu(console, &titles, "Back to main menu") else {
            return;
        };
        let inquiry_index = assigned[selection];

        loop {
            console.display_divider();
            if let Some(inquiry) = ctx.inquiries.get(inquiry_index) {
                console.display_inquiry(inquiry);
            }
            console.display_divider();
            let follow_up_options = ["Respond to inquiry"];
            match select_from_menu(console, &follow_up_options, "Back to assigned inquiries") {
                None => break,
                Some(_) => {
                    respond_to_inquiry(ctx, console, email, inquiry_index);
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inquiry_titles_trims_subjects() {
        let inquiries = vec![
            Inquiry::new(
                "alice@hindeburg.ac.uk".into(),
                "  Exam dates  ".into(),
                "When are the exams?".into(),
            ),
            Inquiry::new(
                "bob@hindeburg.ac.uk".into(),
                "Lab access".into(),
                "My card stopped working.".into(),
            ),
        ];

        let titles = inquiry_titles(&inquiries);
        assert_eq!(titles, vec!["Exam dates", "Lab access"]);
    }
}
