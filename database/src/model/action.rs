use serde::{Deserialize, Serialize};

use crate::consts::consts::PersonId;

use super::person::{Person, PersonData};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Action {
    /// Returns every person, in insertion order
    List,
    Add(PersonData),
    /// Replaces the person wholesale, fields missing from the data are unset
    Update(PersonId, PersonData),
    Remove(PersonId),
}

impl Action {
    pub fn is_mutation(&self) -> bool {
        match self {
            Action::Add(_) | Action::Remove(_) | Action::Update(_, _) => true,
            Action::List => false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum ActionResult {
    /// Used for database status messages
    SuccessStatus(String),
    Single(Person),
    List(Vec<Person>),
}
