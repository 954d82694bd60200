use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Hole {
    pub number: i32,
    pub par: Option<i32>,
    /// Yards.
    pub distance: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub website_url: Option<String>,
    pub holes: Vec<Hole>,
}

impl Course {
    #[must_use]
    pub fn hole(&self, number: i32) -> Option<&Hole> {
        self.holes.iter().find(|h| h.number == number)
    }
}

/// A round journal entry and the scores entered for it so far.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Round {
    pub id: i64,
    pub course_id: i64,
    /// `YYYY-MM-DD`
    pub entry_date: String,
    pub weather: Option<String>,
    pub mental_state: Option<String>,
    pub physical_state: Option<String>,
    pub notes_before_round: Option<String>,
    pub notes_after_round: Option<String>,
    /// Raw text per hole number, exactly as the user left it.
    #[serde(default)]
    pub scores: BTreeMap<i32, String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RoundsConfig {
    pub courses: Vec<Course>,
    pub rounds: Vec<Round>,
}
