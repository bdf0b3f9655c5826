//! Tone registers and their phrase banks.
//!
//! Each tone carries a fixed lexicon: a title template, paragraph
//! transitions, short tail sentences, and the framing sentences used for
//! keywords and the closing section. The generator threads these through
//! every paragraph, so the register is consistent across the whole document
//! and any two tones produce different text for the same brief.

use crate::brief::ValidationError;
use serde::{Deserialize, Serialize};

/// Stylistic register applied across the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Conversational,
    Authoritative,
    Friendly,
    Technical,
    Storytelling,
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Professional
    }
}

impl Tone {
    /// All tones, in the order the original form offered them.
    pub const ALL: [Tone; 6] = [
        Tone::Professional,
        Tone::Conversational,
        Tone::Authoritative,
        Tone::Friendly,
        Tone::Technical,
        Tone::Storytelling,
    ];

    /// Parse a boundary string. Unknown values fail fast rather than
    /// silently falling back to the default.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s.trim().to_lowercase().as_str() {
            "professional" => Ok(Tone::Professional),
            "conversational" => Ok(Tone::Conversational),
            "authoritative" => Ok(Tone::Authoritative),
            "friendly" => Ok(Tone::Friendly),
            "technical" => Ok(Tone::Technical),
            "storytelling" => Ok(Tone::Storytelling),
            other => Err(ValidationError::UnknownTone(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Conversational => "conversational",
            Tone::Authoritative => "authoritative",
            Tone::Friendly => "friendly",
            Tone::Technical => "technical",
            Tone::Storytelling => "storytelling",
        }
    }

    /// Fixed phrase bank for this tone.
    pub fn lexicon(&self) -> &'static ToneLexicon {
        match self {
            Tone::Professional => &PROFESSIONAL,
            Tone::Conversational => &CONVERSATIONAL,
            Tone::Authoritative => &AUTHORITATIVE,
            Tone::Friendly => &FRIENDLY,
            Tone::Technical => &TECHNICAL,
            Tone::Storytelling => &STORYTELLING,
        }
    }
}

/// Phrase bank for one tone. Templates use `{topic}`, `{primary}`,
/// `{audience}`, and `{keyword}` placeholders filled by the generator.
#[derive(Debug)]
pub struct ToneLexicon {
    /// H1 template; must keep `{primary}` verbatim.
    pub title: &'static str,

    /// First sentence of the introduction.
    pub intro_opener: &'static str,

    /// Clause openers rotated through every generated sentence.
    pub transitions: &'static [&'static str],

    /// Short sentences used to land a section near its word budget.
    pub tails: &'static [&'static str],

    /// Sentence that introduces a secondary keyword in its section.
    pub keyword_frame: &'static str,

    /// First sentence of the closing section.
    pub closing_lead: &'static str,

    /// Sentence placed directly before the call to action.
    pub cta_lead: &'static str,
}

static PROFESSIONAL: ToneLexicon = ToneLexicon {
    title: "{topic}: A Practical Guide to {primary}",
    intro_opener: "This guide examines {topic} for {audience}, with a particular focus on what {primary} demands in day-to-day practice.",
    transitions: &["In practice,", "More importantly,", "As a rule,", "Over time,"],
    tails: &[
        "The discipline pays for itself quickly.",
        "That alone justifies the effort.",
        "The same rule applies at any scale.",
    ],
    keyword_frame: "For {audience}, {keyword} deserves a standing place on the roadmap.",
    closing_lead: "The case for {primary} rests on consistent execution rather than novelty.",
    cta_lead: "Ready to put this into practice?",
};

static CONVERSATIONAL: ToneLexicon = ToneLexicon {
    title: "Let's Talk About {topic} (and Why {primary} Is Worth It)",
    intro_opener: "So you're curious about {topic}? Great. This one's written for {audience} who want {primary} explained without the usual jargon.",
    transitions: &["Here's the thing:", "Honestly,", "And yes,", "Let's be real:"],
    tails: &[
        "It's simpler than it sounds.",
        "You've got this.",
        "That's the whole trick.",
    ],
    keyword_frame: "And if you've been putting off {keyword}, now's the moment to stop.",
    closing_lead: "Look, {primary} isn't magic, but it's close enough once {audience} commit to it.",
    cta_lead: "Want more where that came from?",
};

static AUTHORITATIVE: ToneLexicon = ToneLexicon {
    title: "The Definitive Guide to {primary}: {topic} Done Right",
    intro_opener: "What follows is a definitive treatment of {topic}, written for {audience} who need {primary} handled correctly the first time.",
    transitions: &["The evidence is clear:", "Make no mistake:", "Crucially,", "It must be said:"],
    tails: &[
        "The record on this is unambiguous.",
        "No serious practitioner disputes this.",
        "Treat this point as settled.",
    ],
    keyword_frame: "No credible plan for {audience} omits {keyword}.",
    closing_lead: "The conclusion is unavoidable: {primary} is now table stakes for {audience}.",
    cta_lead: "The next step is not optional.",
};

static FRIENDLY: ToneLexicon = ToneLexicon {
    title: "{topic} Made Simple: Your Friendly Intro to {primary}",
    intro_opener: "Welcome! This article walks {audience} through {topic} step by step, making {primary} feel a lot less intimidating.",
    transitions: &["The good news is that", "Don't worry,", "Happily,", "Better still,"],
    tails: &[
        "It's a lovely place to start.",
        "Small steps still count.",
        "You'll be glad you did.",
    ],
    keyword_frame: "Here's a gentle nudge for {audience}: give {keyword} a fair try.",
    closing_lead: "If you remember one thing, let it be this: {primary} rewards patience.",
    cta_lead: "We'd love to help you take the next step.",
};

static TECHNICAL: ToneLexicon = ToneLexicon {
    title: "{topic}: An Engineering View of {primary}",
    intro_opener: "This article breaks {topic} down into concrete components, giving {audience} a working mental model of {primary} end to end.",
    transitions: &["In implementation terms,", "Concretely,", "At the system level,", "In measurable terms,"],
    tails: &[
        "The overhead is negligible.",
        "Instrument first, optimize second.",
        "The constraint is throughput, not intent.",
    ],
    keyword_frame: "In this phase, {keyword} becomes a measurable input for {audience}.",
    closing_lead: "Summed up, {primary} is a systems problem, and systems problems yield to iteration.",
    cta_lead: "The next iteration starts with a single step.",
};

static STORYTELLING: ToneLexicon = ToneLexicon {
    title: "The Story Behind {topic}: A Journey into {primary}",
    intro_opener: "Every team has a moment when {topic} stops being optional. For {audience}, that moment usually arrives through {primary}.",
    transitions: &["Picture this:", "As the story goes,", "Chapter by chapter,", "Somewhere along the way,"],
    tails: &[
        "Every good chapter ends this way.",
        "The plot rarely surprises here.",
        "And so the pattern repeats.",
    ],
    keyword_frame: "This is the part of the story where {keyword} finally enters for {audience}.",
    closing_lead: "And that is how {primary} goes from subplot to the main arc for {audience}.",
    cta_lead: "Every story needs its next chapter.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tones() {
        assert_eq!(Tone::parse("professional"), Ok(Tone::Professional));
        assert_eq!(Tone::parse("STORYTELLING"), Ok(Tone::Storytelling));
        assert_eq!(Tone::parse("  friendly "), Ok(Tone::Friendly));
    }

    #[test]
    fn test_parse_unknown_tone_fails() {
        assert_eq!(
            Tone::parse("sarcastic"),
            Err(ValidationError::UnknownTone("sarcastic".into()))
        );
    }

    #[test]
    fn test_round_trip_names() {
        for tone in Tone::ALL {
            assert_eq!(Tone::parse(tone.as_str()), Ok(tone));
        }
    }

    #[test]
    fn test_titles_keep_primary_placeholder() {
        for tone in Tone::ALL {
            assert!(tone.lexicon().title.contains("{primary}"));
        }
    }

    #[test]
    fn test_lexicons_are_pairwise_distinct() {
        for a in Tone::ALL {
            for b in Tone::ALL {
                if a != b {
                    assert_ne!(a.lexicon().intro_opener, b.lexicon().intro_opener);
                }
            }
        }
    }
}
