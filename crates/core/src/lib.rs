//! Go-to-market plan synthesis.
//!
//! Maps a validated set of product-marketing inputs onto a templated launch
//! plan. Selection is keyword containment on the caller's free text; all
//! content blocks are fixed tables.

pub mod domain;
mod error;
mod render;
pub mod synthesis;

pub use domain::*;
pub use error::*;
pub use render::render_markdown;
pub use synthesis::synthesize;
