use serde::{Deserialize, Serialize};

/// Department as exposed by the service layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

impl From<models::department::Model> for Department {
    fn from(m: models::department::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}
