use std::future::Future;

use crate::{NewStudent, Result, Student};

/// The operations the student records support.
///
/// [`crate::StudentStore`] implements this against Postgres. There is no
/// other way to mutate a record.
pub trait StudentRepository {
    /// Insert a student, returning the id the store assigned.
    ///
    /// Fails with [`crate::Error::UniquenessViolation`] if the email is taken.
    fn create(&self, student: &NewStudent) -> impl Future<Output = Result<i32>>;

    /// All students, ordered by id.
    fn read_all(&self) -> impl Future<Output = Result<Vec<Student>>>;

    /// Replace a student's email, returning the updated record.
    fn update_email(
        &self,
        student_id: i32,
        new_email: &str,
    ) -> impl Future<Output = Result<Student>>;

    /// Remove a student, returning the record as it was.
    fn delete(&self, student_id: i32) -> impl Future<Output = Result<Student>>;
}
