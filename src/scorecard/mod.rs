pub mod binding;
pub mod parse;

pub use binding::*;
pub use parse::parse_int;

use serde::{Deserialize, Serialize};

/// Last hole counted on the front nine.
pub const LAST_FRONT_NINE_HOLE: i64 = 9;

/// One score field as the user currently sees it. Values are kept as raw
/// text; parsing happens in [`compute_totals`] so a half-typed or cleared
/// field simply stops counting.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct HoleEntry {
    pub hole_number: String,
    pub value: String,
    pub par: Option<String>,
}

impl HoleEntry {
    #[must_use]
    pub fn new(hole_number: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            hole_number: hole_number.into(),
            value: value.into(),
            par: None,
        }
    }

    #[must_use]
    pub fn with_par(mut self, par: impl Into<String>) -> Self {
        self.par = Some(par.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Out,
    In,
}

impl Side {
    #[must_use]
    pub fn of_hole(hole_number: i64) -> Self {
        if hole_number <= LAST_FRONT_NINE_HOLE {
            Side::Out
        } else {
            Side::In
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScorecardTotals {
    pub out_sum: i64,
    pub in_sum: i64,
    pub total: i64,
    pub out_par: i64,
    pub in_par: i64,
    pub total_par: i64,
    pub to_par: i64,
}

impl ScorecardTotals {
    #[must_use]
    pub fn to_par_display(&self) -> String {
        format_to_par(self.to_par)
    }
}

/// Sums the front nine, back nine and par for the entries that parse.
///
/// An entry whose hole number or value does not parse contributes nothing,
/// not even its par. An entry with a good value but an unparseable par
/// still counts toward the score sums.
#[must_use]
pub fn compute_totals(entries: &[HoleEntry]) -> ScorecardTotals {
    let mut out_sum: i64 = 0;
    let mut in_sum: i64 = 0;
    let mut out_par: i64 = 0;
    let mut in_par: i64 = 0;

    for entry in entries {
        let (Some(hole), Some(value)) = (parse_int(&entry.hole_number), parse_int(&entry.value))
        else {
            continue;
        };
        let par = entry.par.as_deref().and_then(parse_int);

        match Side::of_hole(hole) {
            Side::Out => {
                out_sum = out_sum.saturating_add(value);
                if let Some(par) = par {
                    out_par = out_par.saturating_add(par);
                }
            }
            Side::In => {
                in_sum = in_sum.saturating_add(value);
                if let Some(par) = par {
                    in_par = in_par.saturating_add(par);
                }
            }
        }
    }

    let total = out_sum.saturating_add(in_sum);
    let total_par = out_par.saturating_add(in_par);

    ScorecardTotals {
        out_sum,
        in_sum,
        total,
        out_par,
        in_par,
        total_par,
        to_par: total.saturating_sub(total_par),
    }
}

/// `E` for even, `+N` over par, `-N` under par.
#[must_use]
pub fn format_to_par(to_par: i64) -> String {
    match to_par {
        0 => "E".to_string(),
        n if n > 0 => format!("+{n}"),
        n => n.to_string(),
    }
}
