//! Course browsing, shared by every role

use hindeburg_ssp::core::context::SharedContext;

use crate::console::Console;

/// List every course in the catalog as `code - name` lines
pub fn view_courses(ctx: &SharedContext, console: &Console) {
    if ctx.catalog.is_empty() {
        console.display_info("No courses found.");
        return;
    }

    console.display_info("=== All Courses ===");
    console.display_info(&ctx.catalog.view_courses());
}

/// Show the full record of one course, activities included
pub fn view_specific_course(ctx: &SharedContext, console: &Console, course_code: &str) {
    if course_code.trim().is_empty() {
        console.display_error("Please provide a valid course code.");
        return;
    }

    match ctx.catalog.view_course(course_code) {
        Some(course_details) => {
            console.display_info("=== Course Details ===");
            console.display_info(&course_details);
        }
        None => console.display_error(&format!("Course not found: {course_code}")),
    }
}
