//! Text normalization for generated answers
//!
//! Strips markdown fencing/emphasis and known model control tokens so the
//! downstream heuristics see plain text. Code block contents are preserved
//! verbatim, only the fence markers are removed.

use regex::Regex;

/// Normalize raw generated text. Always returns a string; empty input yields
/// an empty string.
pub fn normalize_text(raw: &str) -> String {
    let fence = Regex::new(r"(?s)```.*?```").unwrap();
    let fence_open = Regex::new(r"```[a-z]*\n?").unwrap();

    let unfenced = fence.replace_all(raw, |caps: &regex::Captures<'_>| {
        // Keep the inner content, drop markers and language tag
        fence_open.replace_all(&caps[0], "").replace("```", "")
    });

    let bold = Regex::new(r"\*\*(.*?)\*\*").unwrap();
    let italic = Regex::new(r"\*(.*?)\*").unwrap();

    let text = bold.replace_all(&unfenced, "$1");
    let text = italic.replace_all(&text, "$1");
    let text = text.replace("[/INST]", "");

    text.trim().to_string()
}
