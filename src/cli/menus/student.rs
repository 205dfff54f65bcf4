//! Student timetable actions

use hindeburg_ssp::core::audit;
use hindeburg_ssp::core::context::SharedContext;

use crate::console::Console;

/// Ask for a course code and add all of its activities to the
/// student's timetable
pub fn add_course_to_timetable(ctx: &mut SharedContext, console: &Console) {
    let course_code = console.get_input("Enter the course code to add to your timetable: ");
    let Some(student_email) = ctx.current_user.email().map(str::to_string) else {
        return;
    };

    match ctx
        .catalog
        .add_course_to_student_timetable(&mut ctx.timetables, &student_email, &course_code)
    {
        Ok(warnings) => {
            for warning in warnings {
                console.display_warning(&warning);
            }
            console.display_success(&format!("Course {course_code} added to your timetable."));
        }
        Err(message) => {
            console.display_error(&message);
            console.display_error(&format!(
                "Failed to add course {course_code} to your timetable."
            ));
        }
    }
}

/// Show the Monday-to-Friday timetable for the current student
pub fn view_timetable(ctx: &mut SharedContext, console: &Console) {
    let Some(student_email) = ctx.current_user.email().map(str::to_string) else {
        return;
    };
    let rendered = ctx
        .timetables
        .get_or_create(&student_email)
        .to_working_week_string();
    console.display_info(&rendered);
}

/// Mark one tutorial or lab slot as chosen for a course already on the
/// student's timetable
pub fn choose_activity_for_course(ctx: &mut SharedContext, console: &Console) {
    let course_code =
        console.get_input("Enter the course code for which you want to choose an activity: ");
    let activity_id = console.get_unsigned_input("Enter the activity ID to choose: ");
    let Some(student_email) = ctx.current_user.email().map(str::to_string) else {
        return;
    };

    match ctx.catalog.choose_activity_for_course(
        &mut ctx.timetables,
        &student_email,
        &course_code,
        activity_id,
    ) {
        Ok(()) => console.display_success(&format!(
            "Activity {activity_id} for course {course_code} chosen successfully."
        )),
        Err(message) => {
            console.display_error(&message);
            console.display_error(&format!(
                "Failed to choose activity {activity_id} for course {course_code}."
            ));
        }
    }
}

/// Drop every time slot of a course from the student's timetable
pub fn remove_course_from_timetable(ctx: &mut SharedContext, console: &Console) {
    let course_code = console.get_input("Enter the course code to remove from your timetable: ");
    let Some(student_email) = ctx.current_user.email().map(str::to_string) else {
        return;
    };

    let timetable = ctx.timetables.get_or_create(&student_email);
    if !timetable.has_slots_for_course(&course_code) {
        console.display_error(&format!("Course {course_code} is not in your timetable."));
        audit::log_action(
            &student_email,
            "removeCourseFromTimetable",
            &course_code,
            "FAILURE (Course not in timetable)",
        );
        return;
    }

    timetable.remove_slots_for_course(&course_code);
    console.display_success(&format!("Course {course_code} removed from your timetable."));
    audit::log_action(
        &student_email,
        "removeCourseFromTimetable",
        &course_code,
        audit::SUCCESS,
    );
}
