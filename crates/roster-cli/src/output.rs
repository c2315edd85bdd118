//! Output formatting for the console.

use std::fmt;

use owo_colors::{OwoColorize, Stream};
use roster::Student;

const TABLE_WIDTH: usize = 80;
const MENU_WIDTH: usize = 50;

/// A line reporting that an operation worked.
pub fn success(message: &str) -> String {
    let line = format!("✓ {message}");
    line.if_supports_color(Stream::Stdout, |t| t.green()).to_string()
}

/// A line reporting that an operation failed.
pub fn failure(message: &str) -> String {
    failure_on(Stream::Stdout, message)
}

/// Like [`failure`], coloured only if `stream` supports it.
pub fn failure_on(stream: Stream, message: &str) -> String {
    let line = format!("✗ {message}");
    line.if_supports_color(stream, |t| t.red()).to_string()
}

/// A title framed by `=` rules.
pub struct Banner<'a>(pub &'a str);

impl fmt::Display for Banner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(MENU_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "{}", self.0)?;
        writeln!(f, "{rule}")
    }
}

/// The numbered choices shown before every prompt.
pub struct Menu;

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Banner("STUDENT MANAGEMENT SYSTEM"))?;
        writeln!(f, "1. View All Students")?;
        writeln!(f, "2. Add New Student")?;
        writeln!(f, "3. Update Student Email")?;
        writeln!(f, "4. Delete Student")?;
        writeln!(f, "5. Exit")?;
        write!(f, "{}", "=".repeat(MENU_WIDTH))
    }
}

/// All students as a fixed-width table, followed by a count.
pub struct StudentTable<'a>(pub &'a [Student]);

impl fmt::Display for StudentTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(TABLE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "ALL STUDENTS")?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:<5} {:<15} {:<15} {:<30} {:<15}",
            "ID", "First Name", "Last Name", "Email", "Enrollment Date"
        )?;
        writeln!(f, "{}", "-".repeat(TABLE_WIDTH))?;

        if self.0.is_empty() {
            writeln!(f, "No students found in the database.")?;
        } else {
            for s in self.0 {
                // NULL dates show as a dash
                let date = s
                    .enrollment_date
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string());
                writeln!(
                    f,
                    "{:<5} {:<15} {:<15} {:<30} {}",
                    s.student_id, s.first_name, s.last_name, s.email, date
                )?;
            }
            writeln!(f)?;
            writeln!(f, "Total students: {}", self.0.len())?;
        }

        write!(f, "{rule}")
    }
}
