//! Line-based console used by the interactive portal menus

use std::io::{self, Write};
use std::process;

use chrono::{NaiveDate, NaiveTime, Weekday};
use hindeburg_ssp::core::faq::{Faq, FaqSection};
use hindeburg_ssp::core::models::Inquiry;

const ANSI_RED: &str = "\u{1B}[31m";
const ANSI_GREEN: &str = "\u{1B}[32m";
const ANSI_YELLOW: &str = "\u{1B}[33m";
const ANSI_RESET: &str = "\u{1B}[0m";

/// Prompt/response console with styled output.
///
/// All prompts read one line from stdin. End of input terminates the
/// process cleanly, so piped sessions end instead of spinning on a
/// closed stream.
#[derive(Debug, Default, Clone, Copy)]
pub struct Console;

impl Console {
    /// Create a console over stdin/stdout
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Print a prompt and read one line of input
    #[must_use]
    pub fn get_input(&self, prompt: &str) -> String {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => process::exit(0),
            Ok(_) => {}
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        line
    }

    /// Ask a yes/no question.
    ///
    /// Accepts `y`/`yes` and `n`/`no` in any case; any other answer is
    /// treated as yes only when it spells `true`.
    #[must_use]
    pub fn get_yes_no_input(&self, prompt: &str) -> bool {
        println!("{prompt} [Y/n]");
        let line = self.get_input("");
        if line.eq_ignore_ascii_case("y") || line.eq_ignore_ascii_case("yes") {
            true
        } else if line.eq_ignore_ascii_case("n") || line.eq_ignore_ascii_case("no") {
            false
        } else {
            line.trim().eq_ignore_ascii_case("true")
        }
    }

    /// Prompt until the user enters a non-negative integer
    #[must_use]
    pub fn get_unsigned_input(&self, prompt: &str) -> u32 {
        loop {
            let input = self.get_input(prompt);
            match input.trim().parse::<u32>() {
                Ok(value) => return value,
                Err(_) => self.display_error(&format!("Invalid option {input}")),
            }
        }
    }

    /// Read a `YYYY-MM-DD` date
    pub fn get_date_input(&self, prompt: &str) -> Result<NaiveDate, String> {
        let input = self.get_input(prompt);
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map_err(|e| format!("Invalid date '{input}': {e}"))
    }

    /// Read a `HH:MM` time (seconds are accepted but not required)
    pub fn get_time_input(&self, prompt: &str) -> Result<NaiveTime, String> {
        let input = self.get_input(prompt);
        let trimmed = input.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map_err(|e| format!("Invalid time '{input}': {e}"))
    }

    /// Read a day of the week, e.g. `MONDAY`
    pub fn get_weekday_input(&self, prompt: &str) -> Result<Weekday, String> {
        let input = self.get_input(prompt);
        input
            .trim()
            .parse::<Weekday>()
            .map_err(|_| format!("Invalid day of week '{input}'"))
    }

    /// Print an unstyled line
    pub fn display_info(&self, text: &str) {
        println!("{text}");
    }

    /// Print a line in green
    pub fn display_success(&self, text: &str) {
        println!("{ANSI_GREEN}{text}{ANSI_RESET}");
    }

    /// Print a line in yellow
    pub fn display_warning(&self, text: &str) {
        println!("{ANSI_YELLOW}{text}{ANSI_RESET}");
    }

    /// Print a line in red
    pub fn display_error(&self, text: &str) {
        println!("{ANSI_RED}{text}{ANSI_RESET}");
    }

    /// Print a horizontal divider
    pub fn display_divider(&self) {
        println!("-------------------------");
    }

    /// Print the numbered top-level FAQ topics
    pub fn display_faq(&self, faq: &Faq) {
        println!("Frequently Asked Questions");
        self.display_divider();
        for (i, section) in faq.sections.iter().enumerate() {
            println!("[{i}] {}", section.topic);
        }
    }

    /// Print a section's questions and answers followed by its numbered
    /// subsections
    pub fn display_faq_section(&self, section: &FaqSection) {
        println!("{}", section.topic);
        self.display_divider();
        for item in &section.items {
            println!("{}", item.question);
            println!("> {}", item.answer);
        }

        println!("Subsections:");
        for (i, subsection) in section.subsections.iter().enumerate() {
            println!("[{i}] {}", subsection.topic);
        }
    }

    /// Print one inquiry with its assignment state
    pub fn display_inquiry(&self, inquiry: &Inquiry) {
        println!("Inquirer: {}", inquiry.inquirer_email);
        println!("Created at: {}", inquiry.created_at);
        println!(
            "Assigned to: {}",
            inquiry.assigned_to.as_deref().unwrap_or("No one")
        );
        println!("Query:");
        println!("{}", inquiry.content);
    }
}
