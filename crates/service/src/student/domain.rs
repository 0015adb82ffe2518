use serde::{Deserialize, Serialize};

use crate::department::Department;

/// Identity of a student that has not been persisted yet.
pub const UNASSIGNED_ID: i64 = 0;

/// Student with its resolved department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub department: Department,
}

impl Student {
    /// A student without identity; the store assigns one on insert.
    pub fn unassigned(firstname: impl Into<String>, lastname: impl Into<String>, department: Department) -> Self {
        Self { id: UNASSIGNED_ID, firstname: firstname.into(), lastname: lastname.into(), department }
    }

    pub fn is_unassigned(&self) -> bool { self.id == UNASSIGNED_ID }
}

/// Create/update payload: no identity, department referenced by id.
///
/// Missing fields deserialize to empty values so that validation, not the
/// JSON extractor, reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub department_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dto_uses_camel_case() {
        let dto: StudentDto = serde_json::from_str(r#"{"firstname":"Ann","lastname":"Lee","departmentId":1}"#).unwrap();
        assert_eq!(dto.department_id, Some(1));
        assert_eq!(dto.firstname, "Ann");
    }

    #[test]
    fn dto_tolerates_missing_and_null_department() {
        let dto: StudentDto = serde_json::from_str(r#"{"firstname":"Ann","departmentId":null}"#).unwrap();
        assert_eq!(dto.department_id, None);
        assert_eq!(dto.lastname, "");
    }

    #[test]
    fn student_serializes_nested_department() {
        let s = Student { id: 1, firstname: "Ann".into(), lastname: "Lee".into(), department: Department { id: 1, name: "CS".into() } };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v, serde_json::json!({"id":1,"firstname":"Ann","lastname":"Lee","department":{"id":1,"name":"CS"}}));
    }
}
