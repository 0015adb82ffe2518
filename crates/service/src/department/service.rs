use std::sync::Arc;

use tracing::{debug, instrument};

use super::domain::Department;
use super::repository::DepartmentRepository;
use crate::errors::ServiceError;

/// Department lookups with input validation.
///
/// Invalid ids and names fail with [`ServiceError::InvalidArgument`] before
/// the store is touched.
pub struct DepartmentService {
    repo: Arc<dyn DepartmentRepository>,
}

impl DepartmentService {
    pub fn new(repo: Arc<dyn DepartmentRepository>) -> Self { Self { repo } }

    /// Fetch a department by id.
    ///
    /// `None` or a negative id is an invalid argument; an unknown id is
    /// [`ServiceError::NotFound`].
    ///
    /// # Examples
    /// ```
    /// use service::department::{DepartmentService, repository::mock::MockDepartmentRepository};
    /// use service::errors::ServiceError;
    /// use std::sync::Arc;
    /// let svc = DepartmentService::new(Arc::new(MockDepartmentRepository::with_names(&["CS"])));
    /// let dep = tokio_test::block_on(svc.get_department_by_id(Some(1))).unwrap();
    /// assert_eq!(dep.name, "CS");
    /// let err = tokio_test::block_on(svc.get_department_by_id(Some(-1))).unwrap_err();
    /// assert!(matches!(err, ServiceError::InvalidArgument(_)));
    /// ```
    #[instrument(skip(self))]
    pub async fn get_department_by_id(&self, id: Option<i64>) -> Result<Department, ServiceError> {
        let id = match id {
            None => return Err(ServiceError::invalid("department id is required")),
            Some(id) if id < 0 => return Err(ServiceError::invalid(format!("department id must not be negative, got {id}"))),
            Some(id) => id,
        };
        let found = self.repo.find_by_id(id).await?;
        debug!(found = found.is_some(), "department_lookup_by_id");
        found.ok_or_else(|| ServiceError::NotFound(format!("department {id} not found")))
    }

    /// Fetch a department by exact name; `Ok(None)` when nothing matches.
    #[instrument(skip(self))]
    pub async fn get_department_by_name(&self, name: Option<&str>) -> Result<Option<Department>, ServiceError> {
        let name = match name {
            Some(n) if !n.is_empty() => n,
            _ => return Err(ServiceError::invalid("department name is required")),
        };
        self.repo.find_by_name(name).await
    }

    pub async fn get_departments(&self) -> Result<Vec<Department>, ServiceError> {
        self.repo.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::department::repository::mock::MockDepartmentRepository;

    fn service() -> DepartmentService {
        DepartmentService::new(Arc::new(MockDepartmentRepository::with_names(&["DepartmentTest"])))
    }

    #[tokio::test]
    async fn get_department_by_name() {
        let dep = service().get_department_by_name(Some("DepartmentTest")).await.unwrap();
        assert_eq!(dep, Some(Department { id: 1, name: "DepartmentTest".into() }));
    }

    #[tokio::test]
    async fn get_department_by_unknown_name_is_absent() {
        let dep = service().get_department_by_name(Some("Nope")).await.unwrap();
        assert!(dep.is_none());
    }

    #[tokio::test]
    async fn get_department_by_name_with_null_value() {
        let err = service().get_department_by_name(None).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn get_department_by_name_with_empty_value() {
        let err = service().get_department_by_name(Some("")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn get_department_by_id() {
        let dep = service().get_department_by_id(Some(1)).await.unwrap();
        assert_eq!(dep.name, "DepartmentTest");
    }

    #[tokio::test]
    async fn get_department_by_unknown_id() {
        let err = service().get_department_by_id(Some(100)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_department_by_id_with_null_value() {
        let err = service().get_department_by_id(None).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn get_department_by_id_with_negative_values() {
        let svc = service();
        for id in [-1, -42, i64::MIN] {
            let err = svc.get_department_by_id(Some(id)).await.unwrap_err();
            assert!(matches!(err, ServiceError::InvalidArgument(_)), "id {id}");
        }
    }

    #[tokio::test]
    async fn get_all_departments() {
        let svc = DepartmentService::new(Arc::new(MockDepartmentRepository::with_names(&["IRC", "ETI", "CGP"])));
        let all = svc.get_departments().await.unwrap();
        assert_eq!(all.len(), 3);
        let names: Vec<_> = all.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["IRC", "ETI", "CGP"]);
    }
}
