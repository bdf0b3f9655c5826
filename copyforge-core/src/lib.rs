//! # copyforge-core
//!
//! Core library for the copyforge article generator.
//!
//! This crate provides the article assembly engine: a deterministic,
//! side-effect-free function that turns a [`Brief`] into a complete
//! markdown article with fixed structural, length, and keyword-placement
//! guarantees. Rendering and I/O live in the sibling crates.

pub mod brief;
pub mod generator;
pub mod length;
pub mod tone;
pub mod wordcount;

pub use brief::{parse_keyword_list, Brief, ValidationError, DEFAULT_CTA};
pub use generator::generate;
pub use length::{ArticleLength, SectionPlan};
pub use tone::Tone;
pub use wordcount::count_words;
