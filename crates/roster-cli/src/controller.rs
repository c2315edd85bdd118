//! The interactive menu loop.
//!
//! ```text
//! AwaitingChoice -> {Viewing, Adding, UpdatingEmail, Deleting} -> AwaitingChoice
//! AwaitingChoice -> Exited
//! ```
//!
//! Store errors are reported and the loop goes on; only the exit choice (or
//! the end of input) leaves it.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use roster::{Error, NewStudent, StudentRepository};
use tracing::debug;

use crate::output::{Menu, StudentTable, failure, success};
use crate::prompt::Prompt;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingChoice,
    Viewing,
    Adding,
    UpdatingEmail,
    Deleting,
    Exited,
}

/// A menu entry, as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    View,
    Add,
    UpdateEmail,
    Delete,
    Exit,
}

impl Choice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::View),
            "2" => Some(Choice::Add),
            "3" => Some(Choice::UpdateEmail),
            "4" => Some(Choice::Delete),
            "5" => Some(Choice::Exit),
            _ => None,
        }
    }

    fn next_state(self) -> State {
        match self {
            Choice::View => State::Viewing,
            Choice::Add => State::Adding,
            Choice::UpdateEmail => State::UpdatingEmail,
            Choice::Delete => State::Deleting,
            Choice::Exit => State::Exited,
        }
    }
}

pub struct Controller<'r, R, I, O> {
    repo: &'r R,
    prompt: Prompt<I, O>,
    state: State,
}

impl<'r, R, I, O> Controller<'r, R, I, O>
where
    R: StudentRepository,
    I: BufRead,
    O: Write,
{
    pub fn new(repo: &'r R, input: I, output: O) -> Self {
        Self {
            repo,
            prompt: Prompt::new(input, output),
            state: State::AwaitingChoice,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Run until the user exits.
    pub async fn run(&mut self) -> io::Result<()> {
        while self.state != State::Exited {
            let next = self.step().await?;
            debug!(from = ?self.state, to = ?next, "transition");
            self.state = next;
        }
        Ok(())
    }

    async fn step(&mut self) -> io::Result<State> {
        match self.state {
            State::AwaitingChoice => self.await_choice(),
            State::Viewing => self.view().await,
            State::Adding => self.add().await,
            State::UpdatingEmail => self.update_email().await,
            State::Deleting => self.delete().await,
            State::Exited => Ok(State::Exited),
        }
    }

    fn await_choice(&mut self) -> io::Result<State> {
        self.prompt.say("")?;
        self.prompt.say(Menu)?;
        let Some(input) = self.prompt.ask("\nEnter your choice (1-5): ")? else {
            return Ok(State::Exited);
        };

        match Choice::parse(&input) {
            Some(Choice::Exit) => {
                self.prompt
                    .say("\nThank you for using Student Management System!")?;
                Ok(State::Exited)
            }
            Some(choice) => Ok(choice.next_state()),
            None => {
                self.prompt.say(failure(
                    "Invalid choice. Please enter a number between 1 and 5.",
                ))?;
                self.resume()
            }
        }
    }

    /// Wait for Enter, then go back to the menu.
    fn resume(&mut self) -> io::Result<State> {
        if self.prompt.pause()? {
            Ok(State::AwaitingChoice)
        } else {
            Ok(State::Exited)
        }
    }

    async fn view(&mut self) -> io::Result<State> {
        match self.repo.read_all().await {
            Ok(students) => {
                self.prompt.say("")?;
                self.prompt.say(StudentTable(&students))?;
            }
            Err(e) => self.report("Error retrieving students", &e)?,
        }
        self.resume()
    }

    async fn add(&mut self) -> io::Result<State> {
        self.prompt.say("\n--- Add New Student ---")?;
        let Some(first_name) = self.prompt.ask("Enter first name: ")? else {
            return Ok(State::Exited);
        };
        let Some(last_name) = self.prompt.ask("Enter last name: ")? else {
            return Ok(State::Exited);
        };
        let Some(email) = self.prompt.ask("Enter email: ")? else {
            return Ok(State::Exited);
        };
        let Some(date) = self.prompt.ask("Enter enrollment date (YYYY-MM-DD): ")? else {
            return Ok(State::Exited);
        };

        let Some(enrollment_date) = parse_date(&date) else {
            self.prompt
                .say(failure("Invalid date format. Please use YYYY-MM-DD"))?;
            return self.resume();
        };

        let created = match NewStudent::new(&first_name, &last_name, &email, enrollment_date) {
            Ok(student) => self.repo.create(&student).await.map(|id| (student, id)),
            Err(e) => Err(e),
        };

        match created {
            Ok((student, id)) => self.prompt.say(success(&format!(
                "Successfully added student: {} {} (ID: {id})",
                student.first_name(),
                student.last_name()
            )))?,
            Err(e) => self.report("Error adding student", &e)?,
        }
        self.resume()
    }

    async fn update_email(&mut self) -> io::Result<State> {
        self.prompt.say("\n--- Update Student Email ---")?;
        let Some(input) = self.prompt.ask("Enter student ID: ")? else {
            return Ok(State::Exited);
        };
        let Some(student_id) = self.parse_id(&input)? else {
            return self.resume();
        };
        let Some(new_email) = self.prompt.ask("Enter new email: ")? else {
            return Ok(State::Exited);
        };

        match self.repo.update_email(student_id, &new_email).await {
            Ok(student) => {
                self.prompt.say(success(&format!(
                    "Successfully updated email for {} (ID: {student_id})",
                    student.full_name()
                )))?;
                self.prompt.say(format!("  New email: {}", student.email))?;
            }
            Err(e) => self.report("Error updating student email", &e)?,
        }
        self.resume()
    }

    async fn delete(&mut self) -> io::Result<State> {
        self.prompt.say("\n--- Delete Student ---")?;
        let Some(input) = self.prompt.ask("Enter student ID to delete: ")? else {
            return Ok(State::Exited);
        };
        let Some(student_id) = self.parse_id(&input)? else {
            return self.resume();
        };
        let Some(confirm) = self.prompt.ask(&format!(
            "Are you sure you want to delete student {student_id}? (yes/no): "
        ))?
        else {
            return Ok(State::Exited);
        };

        if !confirm.eq_ignore_ascii_case("yes") {
            self.prompt.say("Deletion cancelled.")?;
            return self.resume();
        }

        match self.repo.delete(student_id).await {
            Ok(student) => self.prompt.say(success(&format!(
                "Successfully deleted student: {} (ID: {student_id})",
                student.full_name()
            )))?,
            Err(e) => self.report("Error deleting student", &e)?,
        }
        self.resume()
    }

    /// Parse a student id, reporting bad input.
    fn parse_id(&mut self, input: &str) -> io::Result<Option<i32>> {
        match input.parse() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.prompt
                    .say(failure("Invalid student ID. Please enter a number."))?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, context: &str, err: &Error) -> io::Result<()> {
        debug!(error = %err, "operation failed");
        let message = match err {
            Error::NotFound { student_id } => format!("Student with ID {student_id} not found"),
            _ => format!("{context}: {err}"),
        };
        self.prompt.say(failure(&message))
    }
}

/// `YYYY-MM-DD`, or blank for no date. `None` means the input is malformed.
fn parse_date(input: &str) -> Option<Option<NaiveDate>> {
    if input.is_empty() {
        return Some(None);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok().map(Some)
}
