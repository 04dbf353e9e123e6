//! Instructions sent ahead of the slide corpus.

/// Asks for cross-slide inconsistencies as an `{"issues": [...]}` object.
pub const AUDIT_INSTRUCTIONS: &str = r#"You are a meticulous business analyst reviewing a slide deck.

Find every factual, numerical, and logical inconsistency between slides:
figures that disagree, totals that do not add up, dates or names that change,
claims that contradict each other. Text marked "[Text from Image]" was read
from a picture, often a chart or table; interpret its rows and columns and
check its arithmetic against the slides. Text marked "[Speaker Notes]" is what
the presenter intends to say and counts as part of the slide.

Reply with a single JSON object and nothing else. Its only key is "issues",
a list of objects with the keys "type" (short category), "conflict" (one or two
sentences describing the contradiction), and "evidence" (a list of strings,
each quoting a slide and naming its number).

Example:
{
  "issues": [
    {
      "type": "Numerical Inconsistency",
      "conflict": "Total revenue on one slide differs from the sum of regional revenues on another.",
      "evidence": [
        "Slide 3: 'Total FY2024 Revenue: $10.2 Million'",
        "Slide 8: regional chart sums to $9.8 Million"
      ]
    }
  ]
}

If there are no inconsistencies, reply {"issues": []}.

Presentation content:
"#;

/// Full prompt: instructions followed by the tagged corpus.
pub fn audit_prompt(corpus_body: &str) -> String {
    format!("{}{}", AUDIT_INSTRUCTIONS, corpus_body)
}
