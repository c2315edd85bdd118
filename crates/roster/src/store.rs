//! Postgres-backed student store.

use crate::student::required;
use crate::{Db, Error, NewStudent, Result, Student, StudentRepository};

/// CRUD operations on the `students` table over one [`Db`] connection.
pub struct StudentStore<'a> {
    db: &'a Db,
}

impl<'a> StudentStore<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { db }
    }

    pub async fn create(&self, student: &NewStudent) -> Result<i32> {
        let sql = "INSERT INTO students (first_name, last_name, email, enrollment_date) \
                   VALUES ($1, $2, $3, $4) \
                   RETURNING student_id";
        let row = self
            .db
            .query_one(
                sql,
                &[
                    &student.first_name(),
                    &student.last_name(),
                    &student.email(),
                    &student.enrollment_date(),
                ],
            )
            .await
            .map_err(|e| Error::on_email_write(e, student.email()))?;

        let student_id: i32 = row.try_get("student_id")?;
        tracing::info!(student_id, "student created");
        Ok(student_id)
    }

    pub async fn read_all(&self) -> Result<Vec<Student>> {
        let sql = format!(
            "SELECT {} FROM students ORDER BY student_id",
            Student::COLUMNS
        );
        let rows = self.db.query(&sql, &[]).await?;
        rows.iter().map(Student::from_row).collect()
    }

    pub async fn find(&self, student_id: i32) -> Result<Option<Student>> {
        let sql = format!(
            "SELECT {} FROM students WHERE student_id = $1",
            Student::COLUMNS
        );
        let row = self.db.query_opt(&sql, &[&student_id]).await?;
        row.as_ref().map(Student::from_row).transpose()
    }

    pub async fn update_email(&self, student_id: i32, new_email: &str) -> Result<Student> {
        let new_email = required("email", new_email)?;
        let sql = format!(
            "UPDATE students SET email = $1 WHERE student_id = $2 RETURNING {}",
            Student::COLUMNS
        );
        let row = self
            .db
            .query_opt(&sql, &[&new_email, &student_id])
            .await
            .map_err(|e| Error::on_email_write(e, &new_email))?
            .ok_or(Error::NotFound { student_id })?;

        tracing::info!(student_id, "student email updated");
        Student::from_row(&row)
    }

    pub async fn delete(&self, student_id: i32) -> Result<Student> {
        let sql = format!(
            "DELETE FROM students WHERE student_id = $1 RETURNING {}",
            Student::COLUMNS
        );
        let row = self
            .db
            .query_opt(&sql, &[&student_id])
            .await?
            .ok_or(Error::NotFound { student_id })?;

        tracing::info!(student_id, "student deleted");
        Student::from_row(&row)
    }
}

impl StudentRepository for StudentStore<'_> {
    async fn create(&self, student: &NewStudent) -> Result<i32> {
        StudentStore::create(self, student).await
    }

    async fn read_all(&self) -> Result<Vec<Student>> {
        StudentStore::read_all(self).await
    }

    async fn update_email(&self, student_id: i32, new_email: &str) -> Result<Student> {
        StudentStore::update_email(self, student_id, new_email).await
    }

    async fn delete(&self, student_id: i32) -> Result<Student> {
        StudentStore::delete(self, student_id).await
    }
}
