use std::{fs, path::PathBuf};

use crate::model::RoundsConfig;

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(path)
}

/// Reads and validates the rounds json.
/// Format we expect:
/// { "courses": [{ "id": <int>, "name": "value", "website_url": "value"?, "holes": [
///     { "number": <int>, "par": <int>?, "distance": <int>? }, ...] }, ...]
/// , "rounds": [{ "id": <int>, "course_id": <int>, "entry_date": "YYYY-MM-DD",
///     "weather"?, "mental_state"?, "physical_state"?, "notes_before_round"?, "notes_after_round"?,
///     "scores": { "<hole>": "value", ... }? }, ...] }
///
/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid rounds json
pub fn check_readable_rounds_json(file: &str) -> Result<RoundsConfig, String> {
    let path = check_readable_file(file)?;
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    RoundsConfig::from_json_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not in the correct format: {e}"))
}
