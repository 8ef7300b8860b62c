//! Content module - documents, front-matter and markdown rendering

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{FrontMatter, UNDEFINED};
pub use markdown::MarkdownRenderer;
pub use post::{ContentDocument, PageKind, PostSummary};
