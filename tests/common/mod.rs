#![allow(dead_code)]

use golf_journal::model::{RoundBook, RoundsConfig};

pub const ROUNDS_JSON: &str = include_str!("../fixtures/rounds.json");

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn rounds_config() -> RoundsConfig {
    RoundsConfig::from_json_str(ROUNDS_JSON).expect("fixture rounds should validate")
}

pub fn round_book() -> RoundBook {
    RoundBook::new(rounds_config())
}

/// Form body the scorecard sends on an input event.
pub fn form_body(card: &str, fields: &[(i32, &str, Option<i32>)]) -> Vec<(String, String)> {
    let mut body = vec![("card".to_string(), card.to_string())];
    for (hole, value, par) in fields {
        if let Some(par) = par {
            body.push((format!("p{hole}"), par.to_string()));
        }
        body.push((format!("s{hole}"), (*value).to_string()));
    }
    body
}
