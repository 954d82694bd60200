use maud::{Markup, html};

use crate::model::{Course, Round, parse_entry_date};
use crate::scorecard::{HoleEntry, ScorecardTotals, compute_totals};

pub const HOLES: std::ops::RangeInclusive<i32> = 1..=18;
pub const TOTALS_ENDPOINT: &str = "scorecard/totals";

#[must_use]
pub fn score_field_name(hole: i32) -> String {
    format!("s{hole}")
}

#[must_use]
pub fn par_field_name(hole: i32) -> String {
    format!("p{hole}")
}

#[must_use]
pub fn totals_row_id(card: &str) -> String {
    format!("totals-{card}")
}

/// What the score row shows before any edits, in aggregator form.
#[must_use]
pub fn initial_entries(round: &Round, course: &Course) -> Vec<HoleEntry> {
    HOLES
        .map(|hole| HoleEntry {
            hole_number: hole.to_string(),
            value: round.scores.get(&hole).cloned().unwrap_or_default(),
            par: course
                .hole(hole)
                .and_then(|h| h.par)
                .map(|p| p.to_string()),
        })
        .collect()
}

/// Course par for the front and back nine, for the static par row.
/// Only holes the table renders are counted.
fn course_par_subtotals(course: &Course) -> (i32, i32) {
    HOLES.fold((0i32, 0i32), |(out, inn), hole| {
        match course.hole(hole).and_then(|h| h.par) {
            Some(p) if hole <= 9 => (out.saturating_add(p), inn),
            Some(p) => (out, inn.saturating_add(p)),
            None => (out, inn),
        }
    })
}

/// The row the totals endpoint swaps in on every input event.
#[must_use]
pub fn render_totals_row(card: &str, totals: &ScorecardTotals) -> Markup {
    html! {
        tr id=(totals_row_id(card)) class="scorecard-totals" {
            th { "Out" }
            td data-total="out" { (totals.out_sum) }
            th { "In" }
            td data-total="in" { (totals.in_sum) }
            th { "Tot" }
            td data-total="total" { (totals.total) }
            th { "To Par" }
            td data-total="to-par" { (totals.to_par_display()) }
        }
    }
}

fn render_caption(round: &Round, course: &Course) -> Markup {
    let played = parse_entry_date(&round.entry_date)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| round.entry_date.clone());

    html! {
        caption {
            @if let Some(url) = &course.website_url {
                a href=(url) { (course.name) }
            } @else {
                (course.name)
            }
            " - " (played)
            @if let Some(weather) = &round.weather {
                span class="weather" { " (" (weather) ")" }
            }
        }
    }
}

fn render_notes(round: &Round) -> Markup {
    let notes = [
        ("Mental", &round.mental_state),
        ("Physical", &round.physical_state),
        ("Before", &round.notes_before_round),
        ("After", &round.notes_after_round),
    ];

    html! {
        @if notes.iter().any(|(_, v)| v.is_some()) {
            dl class="round-notes" {
                @for (label, value) in notes {
                    @if let Some(value) = value {
                        dt { (label) }
                        dd { (value) }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_scorecard(round: &Round, course: &Course) -> Markup {
    let card = round.id.to_string();
    let totals = compute_totals(&initial_entries(round, course));
    let (par_out, par_in) = course_par_subtotals(course);

    html! {
        form class="scorecard" data-scorecard=(card)
            hx-post=(TOTALS_ENDPOINT) hx-trigger="input"
            hx-target=(format!("#{}", totals_row_id(&card))) hx-swap="outerHTML" {
            input type="hidden" name="card" value=(card);
            table class="scorecard-table" {
                (render_caption(round, course))
                thead {
                    tr {
                        th { "Hole" }
                        th { "Yds" }
                        th { "Par" }
                        th { "Score" }
                    }
                }
                tbody {
                    @for hole in HOLES {
                        @let course_hole = course.hole(hole);
                        @let par = course_hole.and_then(|h| h.par);
                        @let value = round.scores.get(&hole).map(String::as_str).unwrap_or("");
                        tr class="scorecard-hole" {
                            td { (hole) }
                            td { @if let Some(d) = course_hole.and_then(|h| h.distance) { (d) } }
                            td { @if let Some(p) = par { (p) } }
                            td {
                                @if let Some(p) = par {
                                    input type="hidden" name=(par_field_name(hole)) value=(p);
                                    input type="text" inputmode="numeric" size="2"
                                        name=(score_field_name(hole)) value=(value)
                                        data-score-input="current" data-hole=(hole) data-par=(p);
                                } @else {
                                    input type="text" inputmode="numeric" size="2"
                                        name=(score_field_name(hole)) value=(value)
                                        data-score-input="current" data-hole=(hole);
                                }
                            }
                        }
                        @if hole == 9 {
                            tr class="scorecard-subtotal" {
                                th colspan="2" { "Out par" }
                                td data-par-total="out" { (par_out) }
                                td {}
                            }
                        }
                    }
                    tr class="scorecard-subtotal" {
                        th colspan="2" { "In par" }
                        td data-par-total="in" { (par_in) }
                        td {}
                    }
                    tr class="scorecard-subtotal" {
                        th colspan="2" { "Total par" }
                        td data-par-total="total" { (par_out.saturating_add(par_in)) }
                        td {}
                    }
                }
                tfoot {
                    (render_totals_row(&card, &totals))
                }
            }
            (render_notes(round))
        }
    }
}

#[must_use]
pub fn render_round_list(rounds: &[(&Round, &Course)]) -> Markup {
    html! {
        @if rounds.is_empty() {
            p class="empty" { "No rounds logged yet." }
        }
        @for (round, course) in rounds {
            div class="round" {
                a href=(format!("round/{}", round.id)) { "Round " (round.id) }
                (render_scorecard(round, course))
            }
        }
    }
}
