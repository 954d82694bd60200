pub mod index;
pub mod scorecard;
