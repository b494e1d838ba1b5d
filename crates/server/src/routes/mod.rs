mod health;
mod plan;

pub use health::*;
pub use plan::*;
