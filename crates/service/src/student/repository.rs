use async_trait::async_trait;

use super::domain::Student;
use crate::errors::ServiceError;

/// Store accessor for the `student` table. Rows come back joined with
/// their department.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, ServiceError>;
    /// All rows, ascending id.
    async fn find_all(&self) -> Result<Vec<Student>, ServiceError>;
    async fn find_by_department_id(&self, department_id: i64) -> Result<Vec<Student>, ServiceError>;
    /// Insert when `student.id` is unassigned, otherwise overwrite the row with that id.
    async fn save(&self, student: &Student) -> Result<Student, ServiceError>;
    /// Returns whether a row was deleted.
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockStudentRepository {
        students: Mutex<BTreeMap<i64, Student>>, // key: id
        last_id: Mutex<i64>,
    }

    #[async_trait]
    impl StudentRepository for MockStudentRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<Student>, ServiceError> {
            let students = self.students.lock().unwrap();
            Ok(students.get(&id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Student>, ServiceError> {
            let students = self.students.lock().unwrap();
            Ok(students.values().cloned().collect())
        }

        async fn find_by_department_id(&self, department_id: i64) -> Result<Vec<Student>, ServiceError> {
            let students = self.students.lock().unwrap();
            Ok(students.values().filter(|s| s.department.id == department_id).cloned().collect())
        }

        async fn save(&self, student: &Student) -> Result<Student, ServiceError> {
            let mut students = self.students.lock().unwrap();
            let mut last_id = self.last_id.lock().unwrap();
            let mut stored = student.clone();
            if stored.is_unassigned() {
                *last_id += 1;
                stored.id = *last_id;
            } else {
                *last_id = (*last_id).max(stored.id);
            }
            students.insert(stored.id, stored.clone());
            Ok(stored)
        }

        async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            let mut students = self.students.lock().unwrap();
            Ok(students.remove(&id).is_some())
        }
    }
}
