use std::{fmt, num::ParseIntError, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(pub u64);

impl PersonId {
    pub fn increment(&self) -> PersonId {
        PersonId(self.0 + 1)
    }

    pub fn to_number(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ids usually arrive as url path segments, e.g. `/2`. They are always compared numerically, so
/// `02` and `2` address the same person.
impl FromStr for PersonId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(PersonId)
    }
}

// Values
pub const START_AT_ID: PersonId = PersonId(1);

pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::from_secs(2);

/// (name, last name) pairs the collection starts with, ids are assigned in order from `START_AT_ID`
pub const SEED_PEOPLE: [(&str, &str); 4] = [
    ("Lewis", "Hamilton"),
    ("Pablo", "Montoya"),
    ("Jacques", "Villeneuve"),
    ("Fernando", "Alonso"),
];
