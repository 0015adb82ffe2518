use std::sync::Arc;

use tracing::{info, instrument};

use models::student::validate_person_name;

use super::domain::{Student, StudentDto};
use super::repository::StudentRepository;
use crate::department::DepartmentService;
use crate::errors::ServiceError;

/// Student CRUD over a [`StudentRepository`], resolving departments through
/// the [`DepartmentService`].
pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
    departments: Arc<DepartmentService>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>, departments: Arc<DepartmentService>) -> Self {
        Self { repo, departments }
    }

    pub async fn get_all(&self) -> Result<Vec<Student>, ServiceError> {
        self.repo.find_all().await
    }

    /// `Ok(None)` when no student has this id.
    pub async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Students of the department called `name`; `Ok(None)` when that
    /// department does not exist.
    #[instrument(skip(self))]
    pub async fn get_students_by_department(&self, name: Option<&str>) -> Result<Option<Vec<Student>>, ServiceError> {
        match self.departments.get_department_by_name(name).await? {
            Some(dep) => Ok(Some(self.repo.find_by_department_id(dep.id).await?)),
            None => Ok(None),
        }
    }

    /// Map a payload to a student without identity. The department is
    /// resolved here, so an unknown `departmentId` fails the mapping.
    pub async fn student_from_dto(&self, dto: StudentDto) -> Result<Student, ServiceError> {
        let department = self.departments.get_department_by_id(dto.department_id).await?;
        Ok(Student::unassigned(dto.firstname, dto.lastname, department))
    }

    /// Validate and persist. An unassigned id inserts, any other id
    /// overwrites that record.
    ///
    /// # Examples
    /// ```
    /// use service::department::{DepartmentService, Department, repository::mock::MockDepartmentRepository};
    /// use service::student::{StudentService, Student, repository::mock::MockStudentRepository};
    /// use std::sync::Arc;
    /// let deps = Arc::new(DepartmentService::new(Arc::new(MockDepartmentRepository::with_names(&["CS"]))));
    /// let svc = StudentService::new(Arc::new(MockStudentRepository::default()), deps);
    /// let cs = Department { id: 1, name: "CS".into() };
    /// let saved = tokio_test::block_on(svc.add_student(Student::unassigned("Ann", "Lee", cs))).unwrap();
    /// assert_eq!(saved.id, 1);
    /// ```
    #[instrument(skip(self, student), fields(student_id = student.id, department_id = student.department.id))]
    pub async fn add_student(&self, mut student: Student) -> Result<Student, ServiceError> {
        if student.id < 0 {
            return Err(ServiceError::invalid(format!("student id must not be negative, got {}", student.id)));
        }
        student.firstname = student.firstname.trim().to_string();
        student.lastname = student.lastname.trim().to_string();
        validate_person_name("firstname", &student.firstname)?;
        validate_person_name("lastname", &student.lastname)?;

        // Unknown departments are a bad reference on the write path
        student.department = self
            .departments
            .get_department_by_id(Some(student.department.id))
            .await
            .map_err(|e| match e {
                ServiceError::NotFound(msg) => ServiceError::InvalidArgument(msg),
                other => other,
            })?;

        let inserting = student.is_unassigned();
        let saved = self.repo.save(&student).await?;
        if inserting {
            info!(student_id = saved.id, department = %saved.department.name, "student_created");
        } else {
            info!(student_id = saved.id, department = %saved.department.name, "student_updated");
        }
        Ok(saved)
    }

    /// Delete by id; `false` if nothing was there.
    #[instrument(skip(self))]
    pub async fn remove_student_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let removed = self.repo.delete_by_id(id).await?;
        info!(student_id = id, removed, "student_removed");
        Ok(removed)
    }
}
