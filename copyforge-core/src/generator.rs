//! The article assembly engine.
//!
//! A single deterministic pass: validate the brief, derive a section plan
//! from the length tier, then synthesize title, introduction, body sections,
//! and the closing call-to-action block in document order. Sentences are
//! drawn from fixed banks rotated by a cursor, and each section is filled
//! until it meets its word budget, so totals land inside the documented
//! band regardless of how long the brief's free-text fields are.

use crate::brief::{Brief, ValidationError};
use crate::tone::ToneLexicon;
use crate::wordcount::count_words;

/// Body section heading templates, in plan order. The longest tier uses all
/// seven; shorter tiers take a prefix.
const SECTION_HEADINGS: [&str; 7] = [
    "Why {primary} Matters Now",
    "Laying the Groundwork for {topic}",
    "Core Strategies for {primary}",
    "Putting {topic} into Practice",
    "Measuring What Works",
    "Common Pitfalls and How to Avoid Them",
    "Scaling {primary} over Time",
];

const SUBSECTION_HEADINGS: [&str; 6] = [
    "Where to Start",
    "What to Watch For",
    "A Closer Look at the Details",
    "Signals That It Is Working",
    "Trade-offs Worth Naming",
    "Questions Worth Asking Early",
];

/// Sentence bodies rotated through body paragraphs. Each is emitted behind
/// a tone transition, so the register carries through every paragraph.
const BODY_SENTENCES: [&str; 10] = [
    "treating {topic} as a repeatable process beats chasing one-off wins.",
    "{audience} rarely have spare cycles, so every step here stays practical.",
    "a clear plan for {primary} keeps the work honest and measurable.",
    "small, consistent improvements compound faster than sweeping overhauls.",
    "the fundamentals of {topic} change far more slowly than the tooling around them.",
    "good decisions in this area come from evidence, not instinct.",
    "{primary} works best woven into existing routines rather than bolted on.",
    "start with the narrowest version that still delivers value.",
    "document what works so the next attempt starts further ahead.",
    "review the results with {audience} in mind before widening the scope.",
];

const INTRO_SENTENCES: [&str; 4] = [
    "the aim is simple: give {audience} a plan they can act on immediately.",
    "we will separate what matters in {topic} from what merely looks busy.",
    "expect concrete steps, honest trade-offs, and a clear view of where {primary} fits.",
    "none of it requires a bigger budget, only a more deliberate approach.",
];

const CLOSING_SENTENCES: [&str; 4] = [
    "keep the scope tight, revisit the numbers monthly, and let results argue for expansion.",
    "what {audience} build next will benefit from every lesson captured here.",
    "progress on {topic} is rarely loud; it shows up as fewer surprises.",
    "the habits outlined above turn {primary} from an initiative into a default.",
];

const CLOSING_HEADING: &str = "Final Thoughts";
const OVERVIEW_LEAD: &str = "In this article:";

const SENTENCES_PER_PARAGRAPH: usize = 3;

/// Below this many remaining words, the fill loop switches to short tail
/// sentences so a section never overshoots its budget by more than a few
/// words.
const TAIL_THRESHOLD: usize = 14;

/// Assemble a complete markdown article from a brief.
///
/// Pure function of its argument: identical briefs produce identical output.
/// The only failure mode is [`ValidationError`] on a missing required field;
/// there is no partial output.
pub fn generate(brief: &Brief) -> Result<String, ValidationError> {
    brief.validate()?;

    let plan = brief.length.plan();
    let lex = brief.tone.lexicon();
    tracing::debug!(
        tone = brief.tone.as_str(),
        length = brief.length.as_str(),
        sections = plan.sections,
        "assembling article"
    );

    let mut composer = Composer {
        brief,
        lex,
        cursor: 0,
    };

    let headings: Vec<String> = SECTION_HEADINGS
        .iter()
        .take(plan.sections)
        .map(|t| composer.interpolate(t))
        .collect();

    let mut doc = String::new();

    // Title: derived from the topic, primary keyword verbatim.
    doc.push_str("# ");
    doc.push_str(&composer.interpolate(lex.title));
    doc.push_str("\n\n");

    // Introduction: establishes the topic and names the audience.
    let opener = composer.interpolate(lex.intro_opener);
    doc.push_str(&composer.fill_paragraphs(plan.intro_words, &INTRO_SENTENCES, vec![opener]));
    doc.push_str("\n\n");

    doc.push_str(OVERVIEW_LEAD);
    doc.push_str("\n\n");
    for heading in &headings {
        doc.push_str("- ");
        doc.push_str(heading);
        doc.push('\n');
    }
    doc.push('\n');

    // Body sections. Secondary keyword j belongs to section j mod N, so
    // every keyword appears once before any keyword repeats.
    for (i, heading) in headings.iter().enumerate() {
        doc.push_str("## ");
        doc.push_str(heading);
        doc.push_str("\n\n");

        let mut leads = Vec::new();
        for (j, keyword) in brief.secondary_keywords.iter().enumerate() {
            if j % plan.sections == i {
                leads.push(composer.interpolate_keyword(lex.keyword_frame, keyword));
            }
        }

        doc.push_str(&composer.fill_paragraphs(plan.lead_words(), &BODY_SENTENCES, leads));
        doc.push_str("\n\n");

        for k in 0..plan.subsections {
            let sub = SUBSECTION_HEADINGS[(i * plan.subsections + k) % SUBSECTION_HEADINGS.len()];
            doc.push_str("### ");
            doc.push_str(sub);
            doc.push_str("\n\n");
            doc.push_str(&composer.fill_paragraphs(
                plan.subsection_words(),
                &BODY_SENTENCES,
                Vec::new(),
            ));
            doc.push_str("\n\n");
        }
    }

    // Closing section; the document always ends with the CTA.
    doc.push_str("## ");
    doc.push_str(CLOSING_HEADING);
    doc.push_str("\n\n");
    let closing_lead = composer.interpolate(lex.closing_lead);
    doc.push_str(&composer.fill_paragraphs(
        plan.closing_words,
        &CLOSING_SENTENCES,
        vec![closing_lead],
    ));
    doc.push_str("\n\n");
    doc.push_str(lex.cta_lead);
    doc.push_str("\n\n**");
    doc.push_str(brief.effective_cta());
    doc.push_str("**\n");

    Ok(doc)
}

/// Rotating-bank sentence source for one generation pass.
struct Composer<'a> {
    brief: &'a Brief,
    lex: &'static ToneLexicon,
    cursor: usize,
}

impl Composer<'_> {
    /// Fill `{topic}`, `{primary}`, and `{audience}` placeholders.
    fn interpolate(&self, template: &str) -> String {
        template
            .replace("{topic}", self.brief.topic.trim())
            .replace("{primary}", self.brief.primary_keyword.trim())
            .replace("{audience}", self.brief.target_audience.trim())
    }

    fn interpolate_keyword(&self, template: &str, keyword: &str) -> String {
        self.interpolate(template).replace("{keyword}", keyword)
    }

    fn next_sentence(&mut self, bank: &[&str]) -> String {
        let transition = self.lex.transitions[self.cursor % self.lex.transitions.len()];
        let body = bank[self.cursor % bank.len()];
        self.cursor += 1;
        format!("{} {}", transition, self.interpolate(body))
    }

    fn next_tail(&mut self) -> String {
        let tail = self.lex.tails[self.cursor % self.lex.tails.len()];
        self.cursor += 1;
        tail.to_string()
    }

    /// Emit paragraphs until the word budget is met. `leads` are emitted
    /// first and count toward the budget.
    fn fill_paragraphs(&mut self, budget: usize, bank: &[&str], leads: Vec<String>) -> String {
        let mut sentences = leads;
        let mut words: usize = sentences.iter().map(|s| count_words(s)).sum();

        while words < budget {
            let sentence = if budget - words <= TAIL_THRESHOLD {
                self.next_tail()
            } else {
                self.next_sentence(bank)
            };
            words += count_words(&sentence);
            sentences.push(sentence);
        }

        sentences
            .chunks(SENTENCES_PER_PARAGRAPH)
            .map(|chunk| chunk.join(" "))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
