use async_trait::async_trait;

use super::domain::Department;
use crate::errors::ServiceError;

/// Store accessor for the `department` table.
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Department>, ServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Department>, ServiceError>;
    /// All rows, ascending id.
    async fn find_all(&self) -> Result<Vec<Department>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockDepartmentRepository {
        departments: Mutex<BTreeMap<i64, Department>>, // key: id
    }

    impl MockDepartmentRepository {
        /// Build a repository holding `names`, with ids assigned from 1.
        pub fn with_names(names: &[&str]) -> Self {
            let repo = Self::default();
            for name in names {
                repo.insert(name);
            }
            repo
        }

        pub fn insert(&self, name: &str) -> Department {
            let mut deps = self.departments.lock().unwrap();
            let id = deps.keys().next_back().copied().unwrap_or(0) + 1;
            let dep = Department { id, name: name.to_string() };
            deps.insert(id, dep.clone());
            dep
        }
    }

    #[async_trait]
    impl DepartmentRepository for MockDepartmentRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<Department>, ServiceError> {
            let deps = self.departments.lock().unwrap();
            Ok(deps.get(&id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Department>, ServiceError> {
            let deps = self.departments.lock().unwrap();
            Ok(deps.values().find(|d| d.name == name).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Department>, ServiceError> {
            let deps = self.departments.lock().unwrap();
            Ok(deps.values().cloned().collect())
        }
    }
}
