mod input;
mod plan;

pub use input::*;
pub use plan::*;
