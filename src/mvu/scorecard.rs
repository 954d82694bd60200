use log::{debug, trace};

use crate::scorecard::{HoleEntry, ScorecardTotals, compute_totals};

/// Text currently shown in one instance's display targets. `None` means the
/// host page has no element for that role, so nothing gets written there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayTargets {
    pub out_total: Option<String>,
    pub in_total: Option<String>,
    pub grand_total: Option<String>,
    pub to_par: Option<String>,
}

impl DisplayTargets {
    /// All four roles present, each starting with `initial`.
    #[must_use]
    pub fn all(initial: &str) -> Self {
        Self {
            out_total: Some(initial.to_string()),
            in_total: Some(initial.to_string()),
            grand_total: Some(initial.to_string()),
            to_par: Some(initial.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsDisplay {
    pub out_total: String,
    pub in_total: String,
    pub grand_total: String,
    pub to_par: String,
}

impl From<&ScorecardTotals> for TotalsDisplay {
    fn from(totals: &ScorecardTotals) -> Self {
        Self {
            out_total: totals.out_sum.to_string(),
            in_total: totals.in_sum.to_string(),
            grand_total: totals.total.to_string(),
            to_par: totals.to_par_display(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScorecardModel {
    pub fields: Vec<HoleEntry>,
    pub targets: DisplayTargets,
    pub totals: Option<ScorecardTotals>,
}

impl ScorecardModel {
    #[must_use]
    pub fn new(fields: Vec<HoleEntry>, targets: DisplayTargets) -> Self {
        Self {
            fields,
            targets,
            totals: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    ScoreInput { field: usize, raw: String },
    Recomputed(ScorecardTotals),
    Rendered(TotalsDisplay),
}

#[derive(Debug, Clone)]
pub enum Effect {
    Recompute,
    RenderTargets,
}

pub fn update(model: &mut ScorecardModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => {
            if model.fields.is_empty() {
                debug!("scorecard has no score inputs, nothing to bind");
                vec![]
            } else {
                vec![Effect::Recompute]
            }
        }
        Msg::ScoreInput { field, raw } => match model.fields.get_mut(field) {
            Some(entry) => {
                trace!("hole {} input {:?}", entry.hole_number, raw);
                entry.value = raw;
                vec![Effect::Recompute]
            }
            None => vec![],
        },
        Msg::Recomputed(totals) => {
            model.totals = Some(totals);
            vec![Effect::RenderTargets]
        }
        Msg::Rendered(display) => {
            let targets = &mut model.targets;
            if let Some(t) = targets.out_total.as_mut() {
                *t = display.out_total;
            }
            if let Some(t) = targets.in_total.as_mut() {
                *t = display.in_total;
            }
            if let Some(t) = targets.grand_total.as_mut() {
                *t = display.grand_total;
            }
            if let Some(t) = targets.to_par.as_mut() {
                *t = display.to_par;
            }
            vec![]
        }
    }
}

#[must_use]
pub fn run_effect(effect: Effect, model: &ScorecardModel) -> Option<Msg> {
    match effect {
        Effect::Recompute => Some(Msg::Recomputed(compute_totals(&model.fields))),
        Effect::RenderTargets => model
            .totals
            .as_ref()
            .map(|totals| Msg::Rendered(TotalsDisplay::from(totals))),
    }
}
