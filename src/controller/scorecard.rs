use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use ahash::AHashMap;
use log::{debug, warn};
use serde_json::json;
use std::collections::HashMap;

use crate::error::AppError;
use crate::model::RoundBook;
use crate::scorecard::{HoleEntry, compute_totals};
use crate::view::index::{DEFAULT_INDEX_TITLE, render_index_template};
use crate::view::scorecard::{render_round_list, render_scorecard, render_totals_row};

/// The submitted scorecard: its `card` key and one entry per `s{hole}` field,
/// in form order, with the matching `p{hole}` value as par.
#[must_use]
pub fn entries_from_form(pairs: &[(String, String)]) -> (String, Vec<HoleEntry>) {
    let mut card = String::new();
    let mut pars: AHashMap<&str, &str> = AHashMap::new();
    let mut scores: Vec<(&str, &str)> = Vec::new();

    for (key, value) in pairs {
        if key == "card" {
            card.clone_from(value);
        } else if let Some(hole) = key.strip_prefix('s') {
            scores.push((hole, value.as_str()));
        } else if let Some(hole) = key.strip_prefix('p') {
            pars.insert(hole, value.as_str());
        }
    }

    let entries = scores
        .into_iter()
        .map(|(hole, value)| HoleEntry {
            hole_number: hole.to_string(),
            value: value.to_string(),
            par: pars.get(hole).map(|p| (*p).to_string()),
        })
        .collect();

    (card, entries)
}

pub async fn index(book: Data<RoundBook>) -> impl Responder {
    let rounds: Vec<_> = book
        .rounds()
        .iter()
        .filter_map(|round| book.course(round.course_id).map(|course| (round, course)))
        .collect();

    let markup = render_index_template(DEFAULT_INDEX_TITLE, &render_round_list(&rounds));
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn round_page(path: web::Path<i64>, book: Data<RoundBook>) -> impl Responder {
    let round_id = path.into_inner();
    match book.round_with_course(round_id) {
        Ok((round, course)) => {
            let markup = render_index_template(&course.name, &render_scorecard(round, course));
            HttpResponse::Ok()
                .content_type("text/html")
                .body(markup.into_string())
        }
        Err(e @ AppError::NotFound(_)) => {
            debug!("round page: {e}");
            HttpResponse::NotFound().body("Round not found")
        }
        Err(e) => {
            warn!("round page: {e}");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}

/// Recomputes one scorecard from its submitted fields. Bad numbers never
/// fail the request; they just do not count.
pub async fn scorecard_totals(
    query: web::Query<HashMap<String, String>>,
    form: web::Form<Vec<(String, String)>>,
) -> impl Responder {
    let (card, entries) = entries_from_form(&form);
    let totals = compute_totals(&entries);
    debug!(
        "scorecard '{card}': {} fields, total {} ({})",
        entries.len(),
        totals.total,
        totals.to_par_display()
    );

    let want_json = match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    };

    if want_json {
        HttpResponse::Ok().json(totals)
    } else {
        HttpResponse::Ok()
            .content_type("text/html")
            .body(render_totals_row(&card, &totals).into_string())
    }
}
