//! Shared state handed to every handler.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::department::{
    repo::seaorm::SeaOrmDepartmentRepository, repository::DepartmentRepository, DepartmentService,
};
use service::student::{
    repo::seaorm::SeaOrmStudentRepository, repository::StudentRepository, StudentService,
};

#[derive(Clone)]
pub struct ServerState {
    pub departments: Arc<DepartmentService>,
    pub students: Arc<StudentService>,
}

impl ServerState {
    /// Wire services over the given repositories.
    pub fn new(departments: Arc<dyn DepartmentRepository>, students: Arc<dyn StudentRepository>) -> Self {
        let departments = Arc::new(DepartmentService::new(departments));
        let students = Arc::new(StudentService::new(students, Arc::clone(&departments)));
        Self { departments, students }
    }

    /// Services backed by PostgreSQL through sea-orm.
    pub fn with_db(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmDepartmentRepository { db: db.clone() }),
            Arc::new(SeaOrmStudentRepository { db }),
        )
    }
}
