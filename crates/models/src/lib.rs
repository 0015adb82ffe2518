//! sea-orm entities for the `department` and `student` tables, their
//! validation helpers and the connection setup.

pub mod errors;
pub mod db;
pub mod department;
pub mod student;
