//! Article length tiers and section planning.

use crate::brief::ValidationError;
use serde::{Deserialize, Serialize};

/// Target word-count tier. Controls how many sections are planned and how
/// deep the heading structure goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleLength {
    /// ~700 words.
    Short,
    /// ~1200 words.
    Medium,
    /// ~2000 words.
    Long,
}

impl Default for ArticleLength {
    fn default() -> Self {
        ArticleLength::Medium
    }
}

impl ArticleLength {
    /// Parse a boundary string; unknown values fail fast.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(ArticleLength::Short),
            "medium" => Ok(ArticleLength::Medium),
            "long" => Ok(ArticleLength::Long),
            other => Err(ValidationError::UnknownLength(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleLength::Short => "short",
            ArticleLength::Medium => "medium",
            ArticleLength::Long => "long",
        }
    }

    /// Nominal word target for the tier.
    pub fn target_words(&self) -> usize {
        match self {
            ArticleLength::Short => 700,
            ArticleLength::Medium => 1200,
            ArticleLength::Long => 2000,
        }
    }

    /// Documented tolerance band `(min, max)` for the total word count.
    pub fn word_band(&self) -> (usize, usize) {
        match self {
            ArticleLength::Short => (500, 900),
            ArticleLength::Medium => (900, 1500),
            ArticleLength::Long => (1500, 2400),
        }
    }

    /// Compute the section plan for this tier.
    pub fn plan(&self) -> SectionPlan {
        let (sections, subsections) = match self {
            ArticleLength::Short => (3, 0),
            ArticleLength::Medium => (5, 0),
            ArticleLength::Long => (7, 2),
        };

        // Budgets sum to 96% of the target; headings, the overview list,
        // and the CTA block supply the remainder. The fill loop only ever
        // overshoots a budget by a few words, which keeps totals inside
        // the documented band.
        let target = self.target_words();
        let intro_words = target * 12 / 100;
        let closing_words = target * 10 / 100;
        let body = target * 74 / 100;
        let section_words = body / sections;

        SectionPlan {
            sections,
            subsections,
            intro_words,
            section_words,
            closing_words,
        }
    }
}

/// Deterministic layout for one article: section counts and per-part word
/// budgets derived from the length tier alone, so tone never changes the
/// document shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPlan {
    /// Number of `##` body sections.
    pub sections: usize,

    /// Number of `###` subsections per body section (0 for flat tiers).
    pub subsections: usize,

    /// Word budget for the introduction.
    pub intro_words: usize,

    /// Word budget for each body section, subsections included.
    pub section_words: usize,

    /// Word budget for the closing section.
    pub closing_words: usize,
}

impl SectionPlan {
    /// Budget for a section's lead paragraphs when subsections are planned.
    pub fn lead_words(&self) -> usize {
        if self.subsections == 0 {
            self.section_words
        } else {
            self.section_words * 2 / 5
        }
    }

    /// Budget for each subsection's paragraphs.
    pub fn subsection_words(&self) -> usize {
        if self.subsections == 0 {
            0
        } else {
            (self.section_words - self.lead_words()) / self.subsections
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_lengths() {
        assert_eq!(ArticleLength::parse("short"), Ok(ArticleLength::Short));
        assert_eq!(ArticleLength::parse("Medium"), Ok(ArticleLength::Medium));
        assert_eq!(ArticleLength::parse(" LONG "), Ok(ArticleLength::Long));
    }

    #[test]
    fn test_parse_unknown_length_fails() {
        assert_eq!(
            ArticleLength::parse("epic"),
            Err(ValidationError::UnknownLength("epic".into()))
        );
    }

    #[test]
    fn test_plans_scale_with_tier() {
        let short = ArticleLength::Short.plan();
        let medium = ArticleLength::Medium.plan();
        let long = ArticleLength::Long.plan();

        assert!(short.sections < medium.sections);
        assert!(medium.sections < long.sections);
        assert_eq!(short.subsections, 0);
        assert_eq!(medium.subsections, 0);
        assert_eq!(long.subsections, 2);
    }

    #[test]
    fn test_subsection_budgets_partition_section() {
        let plan = ArticleLength::Long.plan();
        let spent = plan.lead_words() + plan.subsections * plan.subsection_words();
        assert!(spent <= plan.section_words);
        // Integer division loses at most subsections words.
        assert!(plan.section_words - spent < plan.subsections + 1);
    }

    #[test]
    fn test_budgets_sit_below_band_ceiling() {
        for length in [
            ArticleLength::Short,
            ArticleLength::Medium,
            ArticleLength::Long,
        ] {
            let plan = length.plan();
            let budget_total = plan.intro_words
                + plan.sections * plan.section_words
                + plan.closing_words;
            let (min, max) = length.word_band();
            assert!(budget_total > min);
            assert!(budget_total < max);
        }
    }
}
