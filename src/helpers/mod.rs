//! Helper functions shared by the content pipeline and the renderers

mod date;
mod text;

pub use date::*;
pub use text::*;
