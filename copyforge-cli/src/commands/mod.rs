//! CLI command implementations.

mod generate;
mod init;
mod render;

pub use generate::{generate_article, GenerateOptions};
pub use init::init_brief;
pub use render::render_markdown;
