//! Prompt framing for the two note digests.
//!
//! These templates use basic `format!()` interpolation; the caller joins the
//! stored notes with a blank line before framing them.

/// Frame the joined notes for a concise summary.
pub fn summary_prompt(notes: &str) -> String {
    format!("Summarize the following notes in a clear and concise way:\n\n{notes}")
}

/// Frame the joined notes for follow-up topic suggestions.
pub fn recommendation_prompt(notes: &str) -> String {
    format!("Based on these notes, what are the next topics I should study?\n\n{notes}")
}
