use ahash::{AHashMap, AHashSet};
use chrono::NaiveDate;

use super::types::{Course, Round, RoundsConfig};
use crate::error::AppError;

pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// # Errors
///
/// Will return `Err` if the date is not `YYYY-MM-DD`
pub fn parse_entry_date(entry_date: &str) -> Result<NaiveDate, AppError> {
    Ok(NaiveDate::parse_from_str(entry_date.trim(), ENTRY_DATE_FORMAT)?)
}

impl RoundsConfig {
    /// # Errors
    ///
    /// Will return `Err` if the json does not parse or fails [`validate_rounds`]
    pub fn from_json_str(contents: &str) -> Result<Self, AppError> {
        let config: RoundsConfig = serde_json::from_str(contents)?;
        validate_rounds(&config).map_err(AppError::Config)?;
        Ok(config)
    }
}

/// Checks the references inside a rounds file.
///
/// Score values are left alone: whatever the user typed is kept and simply
/// does not count if it is not a number.
///
/// # Errors
///
/// Will return `Err` with a readable message on the first problem found
pub fn validate_rounds(config: &RoundsConfig) -> Result<(), String> {
    let mut course_ids = AHashSet::new();
    for course in &config.courses {
        if !course_ids.insert(course.id) {
            return Err(format!("Course id {} is listed more than once.", course.id));
        }
        let mut hole_numbers = AHashSet::new();
        for hole in &course.holes {
            if !hole_numbers.insert(hole.number) {
                return Err(format!(
                    "Course '{}' lists hole {} more than once.",
                    course.name, hole.number
                ));
            }
        }
    }

    let mut round_ids = AHashSet::new();
    for round in &config.rounds {
        if !round_ids.insert(round.id) {
            return Err(format!("Round id {} is listed more than once.", round.id));
        }
        if !course_ids.contains(&round.course_id) {
            return Err(format!(
                "Round {} refers to course {}, which does not exist.",
                round.id, round.course_id
            ));
        }
        if let Err(e) = parse_entry_date(&round.entry_date) {
            return Err(format!(
                "Round {} has entry_date '{}', expected YYYY-MM-DD ({e}).",
                round.id, round.entry_date
            ));
        }
    }

    Ok(())
}

/// Validated rounds with their courses, newest round first.
#[derive(Debug, Clone, Default)]
pub struct RoundBook {
    courses: AHashMap<i64, Course>,
    rounds: Vec<Round>,
}

impl RoundBook {
    #[must_use]
    pub fn new(config: RoundsConfig) -> Self {
        let mut rounds = config.rounds;
        rounds.sort_by(|a, b| {
            let a_date = parse_entry_date(&a.entry_date).ok();
            let b_date = parse_entry_date(&b.entry_date).ok();
            b_date.cmp(&a_date).then_with(|| b.id.cmp(&a.id))
        });

        let courses = config.courses.into_iter().map(|c| (c.id, c)).collect();
        Self { courses, rounds }
    }

    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    #[must_use]
    pub fn course(&self, course_id: i64) -> Option<&Course> {
        self.courses.get(&course_id)
    }

    /// # Errors
    ///
    /// Will return `Err` if no round has this id
    pub fn round_with_course(&self, round_id: i64) -> Result<(&Round, &Course), AppError> {
        let round = self
            .rounds
            .iter()
            .find(|r| r.id == round_id)
            .ok_or_else(|| AppError::NotFound(format!("round {round_id}")))?;
        let course = self
            .course(round.course_id)
            .ok_or_else(|| AppError::NotFound(format!("course {}", round.course_id)))?;
        Ok((round, course))
    }
}
