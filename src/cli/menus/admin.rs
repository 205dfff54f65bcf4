//! Admin staff flows: FAQ maintenance, inquiry dispatch and course management

use std::fmt;

use hindeburg_ssp::core::context::SharedContext;
use hindeburg_ssp::core::faq::FaqSection;
use hindeburg_ssp::core::models::{Activity, ActivityKind, CourseDetails};
use hindeburg_ssp::external::EmailService;

use super::staff::{inquiry_titles, respond_to_inquiry};
use super::{faq_parent_topic, select_from_menu};
use crate::console::Console;

/// Course management submenu actions
#[derive(Debug, Clone, Copy)]
enum ManageCoursesOption {
    AddCourse,
    RemoveCourse,
    ViewAllCourses,
}

impl ManageCoursesOption {
    const ALL: [Self; 3] = [Self::AddCourse, Self::RemoveCourse, Self::ViewAllCourses];
}

impl fmt::Display for ManageCoursesOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AddCourse => "ADD_COURSE",
            Self::RemoveCourse => "REMOVE_COURSE",
            Self::ViewAllCourses => "VIEW_ALL_COURSES",
        })
    }
}

/// Browse the FAQ tree with the option to add an item at any level
pub fn manage_faq(ctx: &mut SharedContext, console: &Console, email: &dyn EmailService) {
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
            console.display_faq_section(section);
            console.display_info(&format!("[-1] Return to {}", faq_parent_topic(&ctx.faq, &path)));
        }
        console.display_info("[-2] Add FAQ item");

        let input = console.get_input("Please choose an option: ");
        match input.parse::<i32>() {
            Ok(-2) => add_faq_item(ctx, console, email, &path),
            Ok(-1) => {
                if path.is_empty() {
                    return;
                }
                path.pop();
            }
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
}

/// Add a FAQ item under the section at `path`, creating or reusing a
/// topic on the way, then notify admin staff and topic subscribers.
///
/// The browsing position in [`manage_faq`] is left where it was, even
/// when a new topic is created.
fn add_faq_item(
    ctx: &mut SharedContext,
    console: &Console,
    email: &dyn EmailService,
    path: &[usize],
) {
    // Adding at the root always goes through a topic
    let create_section = path.is_empty()
        || console.get_yes_no_input("Would you like to create a new topic for the FAQ item?");

    let mut target: Vec<usize> = path.to_vec();
    if create_section {
        let new_topic = console.get_input("Enter new topic title: ");
        if path.is_empty() {
            let (index, created) = ctx.faq.add_section(&new_topic);
            if created {
                console.display_info(&format!("Created topic '{new_topic}'"));
            } else {
                console.display_warning(&format!("Topic '{new_topic}' already exists!"));
            }
            target = vec![index];
        } else {
            let Some(section) = ctx.faq.section_at_mut(path) else {
                return;
            };
            if let Some(index) = section.find_subsection(&new_topic) {
                console.display_warning(&format!(
                    "Topic '{new_topic}' already exists under '{}'!",
                    section.topic
                ));
                target.push(index);
            } else {
                let parent_topic = section.topic.clone();
                let index = section.add_subsection(FaqSection::new(new_topic.clone()));
                console.display_info(&format!(
                    "Created topic '{new_topic}' under '{parent_topic}'"
                ));
                target.push(index);
            }
        }
    }

    let question = console.get_input("Enter the question for new FAQ item: ");
    if question.trim().is_empty() {
        console.display_error("The question cannot be empty");
        return;
    }
    let answer = console.get_input("Enter the answer for new FAQ item: ");
    if answer.trim().is_empty() {
        console.display_error("The answer cannot be empty");
        return;
    }

    let mut course_tag: Option<String> = None;
    if console.get_yes_no_input("Would you like to add a course tag?") {
        let tag = console.get_input("Enter the course code for the tag: ");
        if !ctx.catalog.has_code(&tag) {
            console.display_error("The tag must correspond to a course code");
            return;
        }
        course_tag = Some(tag);
    }

    let (topic, subject, body) = {
        let Some(section) = ctx.faq.section_at_mut(&target) else {
            return;
        };
        section.add_item(question, answer, course_tag);

        let subject = format!("FAQ topic '{}' updated", section.topic);
        let mut body = String::from("Updated Q&As:");
        for item in &section.items {
            body.push_str(&format!("\n\nQ: {}\nA: {}", item.question, item.answer));
        }
        (section.topic.clone(), subject, body)
    };

    let sender = ctx.current_user_email();
    email.send_email(&sender, &ctx.admin_staff_email, &subject, &body);

    let topic_path = ctx.faq.topic_path(&target).unwrap_or(topic);
    for subscriber in ctx.subscribers_for_topic(&topic_path) {
        email.send_email(&ctx.admin_staff_email, &subscriber, &subject, &body);
    }
    console.display_success("Created new FAQ item");
}

/// Work through all pending inquiries, redirecting or responding
pub fn manage_inquiries(ctx: &mut SharedContext, console: &Console, email: &dyn EmailService) {
    loop {
        let titles = inquiry_titles(&ctx.inquiries);
        console.display_info("Pending inquiries");
        let Some(selection) = select_from_menu(console, &titles, "Back to main menu") else {
            return;
        };

        loop {
            console.display_divider();
            if let Some(inquiry) = ctx.inquiries.get(selection) {
                console.display_inquiry(inquiry);
            }
            console.display_divider();
            let follow_up_options = ["Redirect inquiry", "Respond to inquiry"];
            match select_from_menu(console, &follow_up_options, "Back to all inquiries") {
                None => break,
                Some(0) => redirect_inquiry(ctx, console, email, selection),
                Some(_) => {
                    respond_to_inquiry(ctx, console, email, selection);
                    break;
                }
            }
        }
    }
}

/// Assign an inquiry to a staff member and notify them by email
fn redirect_inquiry(
    ctx: &mut SharedContext,
    console: &Console,
    email: &dyn EmailService,
    inquiry_index: usize,
) {
    let assignee = console.get_input("Enter assignee email: ");
    let Some(inquiry) = ctx.inquiries.get_mut(inquiry_index) else {
        return;
    };
    inquiry.assigned_to = Some(assignee.clone());
    email.send_email(
        &ctx.admin_staff_email,
        &assignee,
        &format!("New inquiry from {}", inquiry.inquirer_email),
        &format!(
            "Subject: {}\nPlease log into the Self Service Portal to review and respond to the inquiry.",
            inquiry.subject
        ),
    );
    console.display_success("Inquiry has been reassigned");
}

/// Course management submenu: add, remove or list courses
pub fn manage_courses(ctx: &mut SharedContext, console: &Console, email: &dyn EmailService) {
    loop {
        let Some(selection) = select_from_menu(console, &ManageCoursesOption::ALL, "Back to main menu")
        else {
            return;
        };
        match ManageCoursesOption::ALL[selection] {
            ManageCoursesOption::AddCourse => add_course(ctx, console, email),
            ManageCoursesOption::RemoveCourse => remove_course(ctx, console, email),
            ManageCoursesOption::ViewAllCourses => view_all_courses(ctx, console),
        }
    }
}

/// Collect course details and activities, then confirm to the organiser
/// by email
fn add_course(ctx: &mut SharedContext, console: &Console, email: &dyn EmailService) {
    console.display_info("=== Add Course ===");

    let code = console.get_input("Enter course code: ");
    let name = console.get_input("Enter course name: ");
    let description = console.get_input("Enter description: ");
    let requires_computers = console.get_yes_no_input("Requires computers? (y/n): ");
    let course_organiser_name = console.get_input("Enter organiser name: ");
    let course_organiser_email = console.get_input("Enter organiser email: ");
    let course_secretary_name = console.get_input("Enter secretary name: ");
    let course_secretary_email = console.get_input("Enter secretary email: ");
    let required_tutorials = console.get_unsigned_input("Enter number of required tutorials: ");
    let required_labs = console.get_unsigned_input("Enter number of required labs: ");

    let added_by = ctx.current_user_email();
    let details = CourseDetails {
        code: code.clone(),
        name,
        description,
        requires_computers,
        course_organiser_name,
        course_organiser_email: course_organiser_email.clone(),
        course_secretary_name,
        course_secretary_email,
        required_tutorials,
        required_labs,
    };

    let result = ctx.catalog.add_course(details, &added_by);
    if !result.success {
        console.display_error(&result.message);
        return;
    }

    console.display_info("=== Add Course - Activities ===");
    loop {
        if !console.get_yes_no_input("Do you want to add an activity to this course? (y/n): ") {
            break;
        }
        match read_activity(console) {
            Ok(activity) => {
                if let Err(message) = ctx.catalog.add_activity_to_course(&code, activity) {
                    console.display_error(&message);
                }
            }
            Err(_) => console.display_error("Invalid activity input. Please try again."),
        }
    }

    console.display_success("Course has been successfully created.");

    let course_text = ctx.catalog.view_course(&code).unwrap_or_default();
    let status = email.send_email(
        &ctx.noreply_email,
        &course_organiser_email,
        &format!("Course Created - {code}"),
        &format!("A course has been provided with the following details:\n\n{course_text}"),
    );
    if status.is_success() {
        console.display_success("Confirmation email sent to course organiser.");
    } else {
        console.display_warning(&format!(
            "Failed to send confirmation email. Status code: {}",
            status.code()
        ));
    }
}

/// Prompt for one activity; any malformed field aborts the whole entry
fn read_activity(console: &Console) -> Result<Activity, String> {
    let id = console
        .get_input("Enter activity ID (as integer): ")
        .parse::<u32>()
        .map_err(|e| e.to_string())?;
    let start_time = console.get_time_input("Enter start time (e.g., 09:00): ")?;
    let end_time = console.get_time_input("Enter end time (e.g., 10:00): ")?;
    let start_date = console.get_date_input("Enter start date (e.g., 2025-03-26): ")?;
    let end_date = console.get_date_input("Enter end date (e.g., 2025-04-30): ")?;
    let location = console.get_input("Enter location: ");
    let day = console.get_weekday_input("Enter day of week (e.g., MONDAY): ")?;
    let kind = read_activity_kind(console)?;

    Ok(Activity::new(
        id, start_date, start_time, end_date, end_time, location, day, kind,
    ))
}

fn read_activity_kind(console: &Console) -> Result<ActivityKind, String> {
    let kind = console.get_input("Enter activity type (lecture/tutorial/lab/other): ");
    match kind.trim().to_lowercase().as_str() {
        "lecture" => Ok(ActivityKind::Lecture {
            recorded: console.get_yes_no_input("Is the lecture recorded? (y/n): "),
        }),
        "tutorial" => Ok(ActivityKind::Tutorial {
            capacity: console.get_unsigned_input("Enter capacity: "),
        }),
        "lab" => Ok(ActivityKind::Lab {
            capacity: console.get_unsigned_input("Enter capacity: "),
        }),
        // plain scheduled activity when no type is given
        "other" | "" => Ok(ActivityKind::General),
        other => Err(format!("Unknown activity type '{other}'")),
    }
}

/// Remove a course and notify its organiser plus every student whose
/// timetable carried it
fn remove_course(ctx: &mut SharedContext, console: &Console, email: &dyn EmailService) {
    console.display_info("=== Delete Course ===");

    let code = console.get_input("Enter course code to delete: ");
    let removed_by = ctx.current_user_email();

    let Some(emails_to_notify) = ctx.catalog.remove_course(&mut ctx.timetables, &code, &removed_by)
    else {
        console.display_error(&format!("Course not found: {code}"));
        return;
    };

    console.display_success(&format!("Course {code} removed successfully."));

    for recipient in emails_to_notify {
        email.send_email(
            &ctx.noreply_email,
            &recipient,
            &format!("Course Removed - {code}"),
            &format!("Please be informed that course {code} has been removed."),
        );
    }
}

/// List the full record of every course
fn view_all_courses(ctx: &SharedContext, console: &Console) {
    if ctx.catalog.is_empty() {
        console.display_info("No courses found.");
        return;
    }

    console.display_info("=== All Courses ===");
    for course in ctx.catalog.all_courses() {
        console.display_info(&format!("Course Code: {}", course.code()));
        console.display_info(&format!("Name: {}", course.details.name));
        console.display_info(&format!("Description: {}", course.details.description));
        console.display_info(&format!(
            "Requires Computers: {}",
            course.details.requires_computers
        ));
        console.display_info(&format!(
            "Organiser: {} <{}>",
            course.details.course_organiser_name, course.details.course_organiser_email
        ));
        console.display_info(&format!(
            "Secretary: {} <{}>",
            course.details.course_secretary_name, course.details.course_secretary_email
        ));
        console.display_info(&format!(
            "Tutorials Required: {}",
            course.details.required_tutorials
        ));
        console.display_info(&format!("Labs Required: {}", course.details.required_labs));
        console.display_divider();
    }
}
