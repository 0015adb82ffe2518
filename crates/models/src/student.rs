use sea_orm::{entity::prelude::*, Set, ConnectionTrait};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::department;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub department_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::department::Entity",
        from = "Column::DepartmentId",
        to = "crate::department::Column::Id"
    )]
    Department,
}

impl Related<department::Entity> for Entity {
    fn to() -> RelationDef { Relation::Department.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Check a person name field (first or last name).
pub fn validate_person_name(field: &str, value: &str) -> Result<(), errors::ModelError> {
    if value.trim().is_empty() { return Err(errors::ModelError::Validation(format!("{field} required"))); }
    if value.len() > 128 { return Err(errors::ModelError::Validation(format!("{field} too long (<=128)"))); }
    Ok(())
}

/// Insert a new student row; the store assigns the id.
pub async fn create<C: ConnectionTrait>(db: &C, firstname: &str, lastname: &str, department_id: i64) -> Result<Model, errors::ModelError> {
    validate_person_name("firstname", firstname)?;
    validate_person_name("lastname", lastname)?;
    let am = ActiveModel {
        firstname: Set(firstname.to_string()),
        lastname: Set(lastname.to_string()),
        department_id: Set(department_id),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}
