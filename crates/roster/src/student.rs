//! The student record and its validated insert form.

use chrono::NaiveDate;
use tokio_postgres::Row;

use crate::{Error, Result};

/// A row of the `students` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub student_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: Option<NaiveDate>,
}

impl Student {
    /// Columns in the order [`Student::from_row`] reads them.
    pub const COLUMNS: &'static str = "student_id, first_name, last_name, email, enrollment_date";

    pub(crate) fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            student_id: row.try_get("student_id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            enrollment_date: row.try_get("enrollment_date")?,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A student that has passed presence validation and can be inserted.
///
/// Text fields are trimmed. The id is left to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    first_name: String,
    last_name: String,
    email: String,
    enrollment_date: Option<NaiveDate>,
}

impl NewStudent {
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        enrollment_date: Option<NaiveDate>,
    ) -> Result<Self> {
        Ok(Self {
            first_name: required("first_name", first_name)?,
            last_name: required("last_name", last_name)?,
            email: required("email", email)?,
            enrollment_date,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn enrollment_date(&self) -> Option<NaiveDate> {
        self.enrollment_date
    }
}

/// Trims `value`, failing with [`Error::Validation`] if nothing is left.
pub fn required(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::Validation { field });
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_student_trims_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15);
        let student =
            NewStudent::new("  Alice ", "Johnson", " alice.j@example.com\n", date).unwrap();
        assert_eq!(student.first_name(), "Alice");
        assert_eq!(student.last_name(), "Johnson");
        assert_eq!(student.email(), "alice.j@example.com");
        assert_eq!(student.enrollment_date(), date);
    }

    #[test]
    fn new_student_allows_missing_date() {
        let student = NewStudent::new("Alice", "Johnson", "alice.j@example.com", None).unwrap();
        assert_eq!(student.enrollment_date(), None);
    }

    #[test]
    fn new_student_names_the_empty_field() {
        let err = NewStudent::new("Alice", "", "alice.j@example.com", None).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "last_name" }));

        let err = NewStudent::new("Alice", "Johnson", "   ", None).unwrap_err();
        assert!(matches!(err, Error::Validation { field: "email" }));
        assert_eq!(err.to_string(), "email must not be empty");
    }

    #[test]
    fn full_name_joins_first_and_last() {
        let student = Student {
            student_id: 7,
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane.smith@example.com".into(),
            enrollment_date: None,
        };
        assert_eq!(student.full_name(), "Jane Smith");
    }

    proptest! {
        #[test]
        fn whitespace_only_is_rejected(value in "[ \t\r\n]*") {
            prop_assert!(required("email", &value).is_err());
        }

        #[test]
        fn non_blank_is_accepted_trimmed(value in "[ ]{0,3}[a-z][a-z.@]{0,20}[ ]{0,3}") {
            let trimmed = required("email", &value).unwrap();
            prop_assert_eq!(trimmed.as_str(), value.trim());
        }
    }
}
