use thiserror::Error;

use crate::{
    consts::consts::{PersonId, START_AT_ID},
    model::{
        action::{Action, ActionResult},
        person::{Person, PersonData},
    },
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplyErrors {
    // CRUD - CREATE
    #[error("The person is already in the list!")]
    PersonAlreadyExists,

    // CRUD - UPDATE / DELETE
    #[error("The id {0} cannot be found")]
    CannotFindId(PersonId),
}

/// Ordered collection of people. Every lookup is a linear scan, the table is expected to stay small.
#[derive(Debug, Default)]
pub struct PersonTable {
    people: Vec<Person>,
}

impl PersonTable {
    pub fn new() -> Self {
        Self { people: vec![] }
    }

    pub fn from_people(people: Vec<Person>) -> Self {
        Self { people }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// One past the largest id in the table, an empty table starts again at `START_AT_ID`
    pub fn next_id(&self) -> PersonId {
        self.people
            .iter()
            .map(|person| person.id)
            .max()
            .map(|id| id.increment())
            .unwrap_or(START_AT_ID)
    }

    pub fn apply(&mut self, action: Action) -> Result<ActionResult, ApplyErrors> {
        let action_result = match action {
            Action::List => ActionResult::List(self.people.clone()),
            Action::Add(person_data) => ActionResult::Single(self.add(person_data)?),
            Action::Update(id, person_data) => {
                ActionResult::Single(self.update(id, person_data)?)
            }
            Action::Remove(id) => ActionResult::Single(self.remove(id)?),
        };

        Ok(action_result)
    }

    fn add(&mut self, person_data: PersonData) -> Result<Person, ApplyErrors> {
        if self
            .people
            .iter()
            .any(|person| person.has_same_names(&person_data))
        {
            return Err(ApplyErrors::PersonAlreadyExists);
        }

        let person = Person::from_data(self.next_id(), person_data);

        self.people.push(person.clone());

        Ok(person)
    }

    fn update(&mut self, id: PersonId, person_data: PersonData) -> Result<Person, ApplyErrors> {
        let index = self.position(id)?;

        let person = Person::from_data(id, person_data);

        self.people[index] = person.clone();

        Ok(person)
    }

    fn remove(&mut self, id: PersonId) -> Result<Person, ApplyErrors> {
        let index = self.position(id)?;

        // `Vec::remove` shifts the remainder, keeping insertion order intact
        Ok(self.people.remove(index))
    }

    fn position(&self, id: PersonId) -> Result<usize, ApplyErrors> {
        self.people
            .iter()
            .position(|person| person.id == id)
            .ok_or(ApplyErrors::CannotFindId(id))
    }
}
