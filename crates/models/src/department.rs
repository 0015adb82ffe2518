use sea_orm::{entity::prelude::*, Set, ConnectionTrait};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "department")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::student::Entity")]
    Student,
}

impl Related<crate::student::Entity> for Entity {
    fn to() -> RelationDef { Relation::Student.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Department rows are written by the seed migration; the HTTP surface is
/// read-only. [`create`] is for tests and operator tooling.
pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("department name required".into())); }
    if name.len() > 128 { return Err(errors::ModelError::Validation("department name too long (<=128)".into())); }
    Ok(())
}

/// Insert a department after [`validate_name`].
pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let am = ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_rejected() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn long_name_rejected() {
        assert!(validate_name(&"x".repeat(129)).is_err());
        assert!(validate_name("CS").is_ok());
    }
}
