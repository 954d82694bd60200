use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::error::AppError;
use crate::mvu::runtime::dispatch;
use crate::mvu::scorecard::{DisplayTargets, Msg, ScorecardModel};
use crate::scorecard::HoleEntry;

pub const CONTAINER_SELECTOR: &str = "[data-scorecard]";
pub const SCORE_INPUT_SELECTOR: &str = r#"input[data-score-input="current"]"#;
pub const OUT_TOTAL_SELECTOR: &str = r#"[data-total="out"]"#;
pub const IN_TOTAL_SELECTOR: &str = r#"[data-total="in"]"#;
pub const GRAND_TOTAL_SELECTOR: &str = r#"[data-total="total"]"#;
pub const TO_PAR_SELECTOR: &str = r#"[data-total="to-par"]"#;

/// One scorecard container found in a host page, with its own fields and
/// display targets.
#[derive(Debug, Clone)]
pub struct BoundScorecard {
    /// Value of the container's `data-scorecard` attribute.
    pub key: String,
    pub model: ScorecardModel,
}

impl BoundScorecard {
    /// Sets the first field for `hole` to `raw` and recomputes. Returns
    /// `false` when this scorecard has no such field.
    pub fn input(&mut self, hole: &str, raw: &str) -> bool {
        let Some(field) = self
            .model
            .fields
            .iter()
            .position(|f| f.hole_number == hole)
        else {
            return false;
        };
        dispatch(
            &mut self.model,
            Msg::ScoreInput {
                field,
                raw: raw.to_string(),
            },
        );
        true
    }
}

struct Selectors {
    container: Selector,
    score_input: Selector,
    out_total: Selector,
    in_total: Selector,
    grand_total: Selector,
    to_par: Selector,
}

impl Selectors {
    fn new() -> Result<Self, AppError> {
        let parse = |s: &str| Selector::parse(s).map_err(|e| AppError::Parse(format!("{s}: {e}")));
        Ok(Self {
            container: parse(CONTAINER_SELECTOR)?,
            score_input: parse(SCORE_INPUT_SELECTOR)?,
            out_total: parse(OUT_TOTAL_SELECTOR)?,
            in_total: parse(IN_TOTAL_SELECTOR)?,
            grand_total: parse(GRAND_TOTAL_SELECTOR)?,
            to_par: parse(TO_PAR_SELECTOR)?,
        })
    }
}

/// Every scorecard on a rendered page, bound and recomputed once.
#[derive(Debug, Clone, Default)]
pub struct ScorecardPage {
    pub instances: Vec<BoundScorecard>,
}

impl ScorecardPage {
    /// Discovers the scorecard containers in `html` and runs the initial
    /// recomputation for each, so prefilled values show up in the totals.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the built-in selectors fail to parse.
    pub fn bind(html: &str) -> Result<Self, AppError> {
        let selectors = Selectors::new()?;
        let document = Html::parse_document(html);

        let mut instances = Vec::new();
        for container in document.select(&selectors.container) {
            let key = container.value().attr("data-scorecard").unwrap_or_default();
            let mut model = read_container(container, &selectors);
            debug!(
                "binding scorecard '{key}' with {} score inputs",
                model.fields.len()
            );
            dispatch(&mut model, Msg::PageLoad);
            instances.push(BoundScorecard {
                key: key.to_string(),
                model,
            });
        }

        Ok(Self { instances })
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&BoundScorecard> {
        self.instances.iter().find(|i| i.key == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut BoundScorecard> {
        self.instances.iter_mut().find(|i| i.key == key)
    }

    /// Routes one input event to the scorecard identified by `key`.
    pub fn input(&mut self, key: &str, hole: &str, raw: &str) -> bool {
        self.get_mut(key).is_some_and(|i| i.input(hole, raw))
    }
}

fn read_container(container: ElementRef<'_>, selectors: &Selectors) -> ScorecardModel {
    let fields = container
        .select(&selectors.score_input)
        .map(|input| {
            let el = input.value();
            HoleEntry {
                hole_number: el.attr("data-hole").unwrap_or_default().to_string(),
                value: el.attr("value").unwrap_or_default().to_string(),
                par: el.attr("data-par").map(str::to_string),
            }
        })
        .collect();

    let target = |selector: &Selector| {
        container
            .select(selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    };

    let targets = DisplayTargets {
        out_total: target(&selectors.out_total),
        in_total: target(&selectors.in_total),
        grand_total: target(&selectors.grand_total),
        to_par: target(&selectors.to_par),
    };

    ScorecardModel::new(fields, targets)
}
