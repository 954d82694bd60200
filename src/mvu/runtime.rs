use crate::mvu::scorecard::{Msg, ScorecardModel, run_effect, update};

/// Runs the MVU loop for one scorecard: feeds `msg` through `update` and
/// drains effects until none remain. Everything happens synchronously, so
/// the display targets never show a half-applied recomputation.
pub fn dispatch(model: &mut ScorecardModel, msg: Msg) {
    let mut effects = update(model, msg);
    while let Some(effect) = effects.pop() {
        if let Some(next) = run_effect(effect, model) {
            effects.extend(update(model, next));
        }
    }
}
