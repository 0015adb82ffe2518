use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::department;

use crate::department::domain::Department;
use crate::department::repository::DepartmentRepository;
use crate::errors::ServiceError;

pub struct SeaOrmDepartmentRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl DepartmentRepository for SeaOrmDepartmentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Department>, ServiceError> {
        let res = department::Entity::find_by_id(id).one(&self.db).await?;
        Ok(res.map(Department::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Department>, ServiceError> {
        let res = department::Entity::find()
            .filter(department::Column::Name.eq(name))
            .one(&self.db)
            .await?;
        Ok(res.map(Department::from))
    }

    async fn find_all(&self) -> Result<Vec<Department>, ServiceError> {
        let rows = department::Entity::find()
            .order_by_asc(department::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Department::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn department_lookups_against_db() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmDepartmentRepository { db: db.clone() };

        let name = format!("svc_dep_{}", std::process::id());
        let created = match repo.find_by_name(&name).await? {
            Some(d) => d,
            None => Department::from(models::department::create(&db, &name).await?),
        };

        let by_id = repo.find_by_id(created.id).await?.unwrap();
        assert_eq!(by_id, created);
        assert!(repo.find_all().await?.iter().any(|d| d.id == created.id));
        assert!(repo.find_by_name("no-such-department").await?.is_none());

        department::Entity::delete_by_id(created.id).exec(&db).await?;
        Ok(())
    }
}
