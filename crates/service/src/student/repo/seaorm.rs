use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};

use models::{department, student};

use crate::department::Department;
use crate::errors::ServiceError;
use crate::student::domain::Student;
use crate::student::repository::StudentRepository;

pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

fn to_domain((row, dep): (student::Model, Option<department::Model>)) -> Result<Student, ServiceError> {
    // The FK makes a missing department a broken store, not a user error
    let dep = dep.ok_or_else(|| ServiceError::Db(format!("student {} references missing department {}", row.id, row.department_id)))?;
    Ok(Student { id: row.id, firstname: row.firstname, lastname: row.lastname, department: Department::from(dep) })
}

#[async_trait::async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Student>, ServiceError> {
        let res = student::Entity::find_by_id(id)
            .find_also_related(department::Entity)
            .one(&self.db)
            .await?;
        res.map(to_domain).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Student>, ServiceError> {
        let rows = student::Entity::find()
            .find_also_related(department::Entity)
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await?;
        rows.into_iter().map(to_domain).collect()
    }

    async fn find_by_department_id(&self, department_id: i64) -> Result<Vec<Student>, ServiceError> {
        let rows = student::Entity::find()
            .filter(student::Column::DepartmentId.eq(department_id))
            .find_also_related(department::Entity)
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await?;
        rows.into_iter().map(to_domain).collect()
    }

    async fn save(&self, s: &Student) -> Result<Student, ServiceError> {
        let saved = if s.is_unassigned() {
            student::create(&self.db, &s.firstname, &s.lastname, s.department.id).await?
        } else {
            let am = student::ActiveModel {
                id: Set(s.id),
                firstname: Set(s.firstname.clone()),
                lastname: Set(s.lastname.clone()),
                department_id: Set(s.department.id),
            };
            match am.update(&self.db).await {
                Ok(m) => m,
                Err(DbErr::RecordNotUpdated) => return Err(ServiceError::NotFound(format!("student {} not found", s.id))),
                Err(e) => return Err(e.into()),
            }
        };
        Ok(Student { id: saved.id, firstname: saved.firstname, lastname: saved.lastname, department: s.department.clone() })
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        let res = student::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
