//! Migrator registering the `department` and `student` tables in dependency
//! order, followed by the default department rows.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_department;
mod m20240101_000002_create_student;
mod m20240101_000003_seed_departments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_department::Migration),
            Box::new(m20240101_000002_create_student::Migration),
            // Seed rows need both tables in place
            Box::new(m20240101_000003_seed_departments::Migration),
        ]
    }
}
