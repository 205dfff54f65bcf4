//! Role-gated interactive menus for the portal loop

pub mod admin;
pub mod guest;
pub mod inquirer;
pub mod staff;
pub mod student;
pub mod viewer;

use std::fmt;

use hindeburg_ssp::core::context::SharedContext;
use hindeburg_ssp::core::faq::Faq;
use hindeburg_ssp::core::models::{Role, User};
use hindeburg_ssp::external::{AuthenticationService, EmailService};

use crate::console::Console;

/// Top-level actions available to an unauthenticated visitor
#[derive(Debug, Clone, Copy)]
enum GuestMenuOption {
    Login,
    ConsultFaq,
    ContactStaff,
    ViewCourses,
    ViewSpecificCourse,
}

impl GuestMenuOption {
    const ALL: [Self; 5] = [
        Self::Login,
        Self::ConsultFaq,
        Self::ContactStaff,
        Self::ViewCourses,
        Self::ViewSpecificCourse,
    ];
}

impl fmt::Display for GuestMenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Login => "LOGIN",
            Self::ConsultFaq => "CONSULT_FAQ",
            Self::ContactStaff => "CONTACT_STAFF",
            Self::ViewCourses => "VIEW_COURSES",
            Self::ViewSpecificCourse => "VIEW_SPECIFIC_COURSE",
        })
    }
}

/// Top-level actions available to a logged-in student
#[derive(Debug, Clone, Copy)]
enum StudentMenuOption {
    Logout,
    ConsultFaq,
    ContactStaff,
    AddCourseToTimetable,
    ViewTimetable,
    ChooseActivityForCourse,
    RemoveCourseFromTimetable,
    ViewCourses,
    ViewSpecificCourse,
}

impl StudentMenuOption {
    const ALL: [Self; 9] = [
        Self::Logout,
        Self::ConsultFaq,
        Self::ContactStaff,
        Self::AddCourseToTimetable,
        Self::ViewTimetable,
        Self::ChooseActivityForCourse,
        Self::RemoveCourseFromTimetable,
        Self::ViewCourses,
        Self::ViewSpecificCourse,
    ];
}

impl fmt::Display for StudentMenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Logout => "LOGOUT",
            Self::ConsultFaq => "CONSULT_FAQ",
            Self::ContactStaff => "CONTACT_STAFF",
            Self::AddCourseToTimetable => "ADD_COURSE_TO_TIMETABLE",
            Self::ViewTimetable => "VIEW_TIMETABLE",
            Self::ChooseActivityForCourse => "CHOOSE_ACTIVITY_FOR_COURSE",
            Self::RemoveCourseFromTimetable => "REMOVE_COURSE_FROM_TIMETABLE",
            Self::ViewCourses => "VIEW_COURSES",
            Self::ViewSpecificCourse => "VIEW_SPECIFIC_COURSE",
        })
    }
}

/// Top-level actions available to teaching staff
#[derive(Debug, Clone, Copy)]
enum TeachingStaffMenuOption {
    Logout,
    ManageReceivedQueries,
    ViewCourses,
    ViewSpecificCourse,
}

impl TeachingStaffMenuOption {
    const ALL: [Self; 4] = [
        Self::Logout,
        Self::ManageReceivedQueries,
        Self::ViewCourses,
        Self::ViewSpecificCourse,
    ];
}

impl fmt::Display for TeachingStaffMenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Logout => "LOGOUT",
            Self::ManageReceivedQueries => "MANAGE_RECEIVED_QUERIES",
            Self::ViewCourses => "VIEW_COURSES",
            Self::ViewSpecificCourse => "VIEW_SPECIFIC_COURSE",
        })
    }
}

/// Top-level actions available to admin staff
#[derive(Debug, Clone, Copy)]
enum AdminStaffMenuOption {
    Logout,
    ManageQueries,
    ManageFaq,
    ManageCourses,
    ViewCourses,
    ViewSpecificCourse,
}

impl AdminStaffMenuOption {
    const ALL: [Self; 6] = [
        Self::Logout,
        Self::ManageQueries,
        Self::ManageFaq,
        Self::ManageCourses,
        Self::ViewCourses,
        Self::ViewSpecificCourse,
    ];
}

impl fmt::Display for AdminStaffMenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Logout => "LOGOUT",
            Self::ManageQueries => "MANAGE_QUERIES",
            Self::ManageFaq => "MANAGE_FAQ",
            Self::ManageCourses => "MANAGE_COURSES",
            Self::ViewCourses => "VIEW_COURSES",
            Self::ViewSpecificCourse => "VIEW_SPECIFIC_COURSE",
        })
    }
}

/// Run the portal's main menu loop until the user chooses to exit
pub fn main_menu(
    ctx: &mut SharedContext,
    console: &Console,
    auth: &dyn AuthenticationService,
    email: &dyn EmailService,
) {
    let mut end_loop = false;
    while !end_loop {
        console.display_info("Hello! What would you like to do?");
        end_loop = match ctx.current_user.role() {
            None => handle_guest_main_menu(ctx, console, auth, email),
            Some(Role::Student) => handle_student_main_menu(ctx, console, email),
            Some(Role::TeachingStaff) => handle_teaching_staff_main_menu(ctx, console, email),
            Some(Role::AdminStaff) => handle_admin_staff_main_menu(ctx, console, email),
        };
    }
    console.display_info("Bye bye!");
}

fn handle_guest_main_menu(
    ctx: &mut SharedContext,
    console: &Console,
    auth: &dyn AuthenticationService,
    email: &dyn EmailService,
) -> bool {
    let Some(selection) = select_from_menu(console, &GuestMenuOption::ALL, "Exit") else {
        return true;
    };
    match GuestMenuOption::ALL[selection] {
        GuestMenuOption::Login => guest::login(ctx, console, auth),
        GuestMenuOption::ConsultFaq => inquirer::consult_faq(ctx, console),
        GuestMenuOption::ContactStaff => inquirer::contact_staff(ctx, console, email),
        GuestMenuOption::ViewCourses => viewer::view_courses(ctx, console),
        GuestMenuOption::ViewSpecificCourse => prompt_view_specific_course(ctx, console),
    }
    false
}

fn handle_student_main_menu(
    ctx: &mut SharedContext,
    console: &Console,
    email: &dyn EmailService,
) -> bool {
    let Some(selection) = select_from_menu(console, &StudentMenuOption::ALL, "Exit") else {
        return true;
    };
    match StudentMenuOption::ALL[selection] {
        StudentMenuOption::Logout => logout(ctx, console),
        StudentMenuOption::ConsultFaq => inquirer::consult_faq(ctx, console),
        StudentMenuOption::ContactStaff => inquirer::contact_staff(ctx, console, email),
        StudentMenuOption::AddCourseToTimetable => student::add_course_to_timetable(ctx, console),
        StudentMenuOption::ViewTimetable => student::view_timetable(ctx, console),
        StudentMenuOption::ChooseActivityForCourse => {
            student::choose_activity_for_course(ctx, console);
        }
        StudentMenuOption::RemoveCourseFromTimetable => {
            student::remove_course_from_timetable(ctx, console);
        }
        StudentMenuOption::ViewCourses => viewer::view_courses(ctx, console),
        StudentMenuOption::ViewSpecificCourse => prompt_view_specific_course(ctx, console),
    }
    false
}

fn handle_teaching_staff_main_menu(
    ctx: &mut SharedContext,
    console: &Console,
    email: &dyn EmailService,
) -> bool {
    let Some(selection) = select_from_menu(console, &TeachingStaffMenuOption::ALL, "Exit") else {
        return true;
    };
    match TeachingStaffMenuOption::ALL[selection] {
        TeachingStaffMenuOption::Logout => logout(ctx, console),
        TeachingStaffMenuOption::ManageReceivedQueries => {
            staff::manage_received_inquiries(ctx, console, email);
        }
        TeachingStaffMenuOption::ViewCourses => viewer::view_courses(ctx, console),
        TeachingStaffMenuOption::ViewSpecificCourse => prompt_view_specific_course(ctx, console),
    }
    false
}

fn handle_admin_staff_main_menu(
    ctx: &mut SharedContext,
    console: &Console,
    email: &dyn EmailService,
) -> bool {
    let Some(selection) = select_from_menu(console, &AdminStaffMenuOption::ALL, "Exit") else {
        return true;
    };
    match AdminStaffMenuOption::ALL[selection] {
        AdminStaffMenuOption::Logout => logout(ctx, console),
        AdminStaffMenuOption::ManageQueries => admin::manage_inquiries(ctx, console, email),
        AdminStaffMenuOption::ManageFaq => admin::manage_faq(ctx, console, email),
        AdminStaffMenuOption::ManageCourses => admin::manage_courses(ctx, console, email),
        AdminStaffMenuOption::ViewCourses => viewer::view_courses(ctx, console),
        AdminStaffMenuOption::ViewSpecificCourse => prompt_view_specific_course(ctx, console),
    }
    false
}

fn prompt_view_specific_course(ctx: &SharedContext, console: &Console) {
    let course_code = console.get_input("Enter course code: ");
    viewer::view_specific_course(ctx, console, &course_code);
}

/// Present numbered options plus a `[-1]` exit line and return the chosen
/// index, or `None` when the user picks the exit option
pub(crate) fn select_from_menu<T: fmt::Display>(
    console: &Console,
    options: &[T],
    exit_option: &str,
) -> Option<usize> {
    loop {
        console.display_divider();
        for (i, option) in options.iter().enumerate() {
            console.display_info(&format!("[{i}] {option}"));
        }
        console.display_info(&format!("[-1] {exit_option}"));
        console.display_divider();

        let input = console.get_input("Please choose an option: ");
        match input.parse::<i32>() {
            Ok(-1) => return None,
            Ok(option_no) => match usize::try_from(option_no) {
                Ok(i) if i < options.len() => return Some(i),
                _ => console.display_error(&format!("Invalid option {option_no}")),
            },
            Err(_) => console.display_error(&format!("Invalid option {input}")),
        }
    }
}

/// Topic of the section one level up from `path`, or `FAQ` at the top
pub(crate) fn faq_parent_topic(faq: &Faq, path: &[usize]) -> String {
    if path.len() <= 1 {
        return "FAQ".to_string();
    }
    faq.section_at(&path[..path.len() - 1])
        .map_or_else(|| "FAQ".to_string(), |parent| parent.topic.clone())
}

/// End the current session, restoring the guest user
fn logout(ctx: &mut SharedContext, console: &Console) {
    if ctx.current_user.is_guest() {
        console.display_error("Guest users cannot logout!");
        return;
    }
    ctx.current_user = User::Guest;
    console.display_success("Logged out!");
}
