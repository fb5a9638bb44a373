use serde::{Deserialize, Serialize};

use crate::consts::consts::PersonId;

/// Fields that are missing from a request body stay missing on the stored person, they are
/// skipped when serializing rather than written out as `null`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl Person {
    pub fn new(id: PersonId, name: &str, last_name: &str) -> Self {
        Person {
            id,
            name: Some(name.to_string()),
            last_name: Some(last_name.to_string()),
        }
    }

    /// Full replacement, nothing from a previous version of the person is carried over
    pub fn from_data(id: PersonId, data: PersonData) -> Self {
        Person {
            id,
            name: data.name,
            last_name: data.last_name,
        }
    }

    /// Two people are considered the same person when both names match
    pub fn has_same_names(&self, data: &PersonData) -> bool {
        self.name == data.name && self.last_name == data.last_name
    }
}

/// Body of a create or update, the id is always assigned by the database
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersonData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl PersonData {
    pub fn new(name: &str, last_name: &str) -> Self {
        PersonData {
            name: Some(name.to_string()),
            last_name: Some(last_name.to_string()),
        }
    }
}
