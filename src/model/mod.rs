pub mod rounds;
pub mod types;

pub use rounds::*;
pub use types::*;
