//! Word counting over generated markup.

use unicode_segmentation::UnicodeSegmentation;

/// Count words using Unicode word segmentation. Markdown punctuation
/// (`#`, `**`, `-`) contributes nothing, so the count reflects prose.
pub fn count_words(text: &str) -> usize {
    text.unicode_words().count()
}
