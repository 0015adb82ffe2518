//! Department lookups: domain type, repository abstraction and the service
//! enforcing id/name validation.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::Department;
pub use service::DepartmentService;
