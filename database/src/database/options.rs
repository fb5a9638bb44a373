use std::time::Duration;

use crate::{
    consts::consts::{PersonId, DEFAULT_RESPONSE_TIMEOUT, SEED_PEOPLE, START_AT_ID},
    model::person::Person,
};

#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub seed: Vec<Person>,
    pub response_timeout: Duration,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl DatabaseOptions {
    /// People the database holds when it starts, nothing is restored from a previous run
    pub fn set_seed(mut self, seed: Vec<Person>) -> Self {
        self.seed = seed;
        self
    }

    /// How long a request manager waits for the database before giving up on a request
    pub fn set_response_timeout(mut self, response_timeout: Duration) -> Self {
        self.response_timeout = response_timeout;
        self
    }
}

pub fn default_seed() -> Vec<Person> {
    SEED_PEOPLE
        .iter()
        .zip(START_AT_ID.to_number()..)
        .map(|((name, last_name), id)| Person::new(PersonId(id), name, last_name))
        .collect()
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            response_timeout: DEFAULT_RESPONSE_TIMEOUT,
        }
    }
}

#[cfg(test)]
impl DatabaseOptions {
    pub fn new_test() -> Self {
        DatabaseOptions::default().set_response_timeout(Duration::from_secs(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_is_four_people_in_order() {
        let seed = DatabaseOptions::default().seed;

        assert_eq!(
            seed,
            vec![
                Person::new(PersonId(1), "Lewis", "Hamilton"),
                Person::new(PersonId(2), "Pablo", "Montoya"),
                Person::new(PersonId(3), "Jacques", "Villeneuve"),
                Person::new(PersonId(4), "Fernando", "Alonso"),
            ]
        );
    }

    #[test]
    fn builder_overrides_defaults() {
        let options = DatabaseOptions::default()
            .set_seed(vec![])
            .set_response_timeout(Duration::from_millis(50));

        assert!(options.seed.is_empty());
        assert_eq!(options.response_timeout, Duration::from_millis(50));
    }
}
