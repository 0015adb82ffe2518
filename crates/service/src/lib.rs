//! Service layer for students and departments.
//! - Repositories abstract the store; services hold them as trait objects.
//! - Validation happens here, before any store access.
//! - Entity definitions and field rules come from the `models` crate.

pub mod errors;
pub mod department;
pub mod student;
#[cfg(test)]
pub mod test_support;
