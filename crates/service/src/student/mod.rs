//! Student CRUD: domain types, repository abstraction and the service that
//! validates records against their department.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{Student, StudentDto, UNASSIGNED_ID};
pub use service::StudentService;
