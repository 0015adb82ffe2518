//! Insert the default departments.
use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_department::Department;

pub const DEFAULT_DEPARTMENTS: &[&str] = &["IRC", "ETI", "CGP"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Department::Table)
            .columns([Department::Name])
            .to_owned();
        for name in DEFAULT_DEPARTMENTS {
            insert.values_panic([(*name).into()]);
        }
        insert.on_conflict(OnConflict::column(Department::Name).do_nothing().to_owned());
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Department::Table)
            .and_where(Expr::col(Department::Name).is_in(DEFAULT_DEPARTMENTS.iter().copied()))
            .to_owned();
        manager.exec_stmt(delete).await
    }
}
