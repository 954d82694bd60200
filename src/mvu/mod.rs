pub mod runtime;
pub mod scorecard;
