//! SPL normalization for model output.
//!
//! Chat models wrap queries in fences, prefix them with labels, or pad
//! them with narrative text. This module reduces a raw completion to a
//! single line the Splunk jobs endpoint will accept.
//!
//! # Invariants
//! - The output is always a single non-empty line.
//! - The output starts with a valid generating command or `search `.
//! - Unusable input degrades to a safe fallback query, never to an error.

use regex::Regex;
use std::sync::LazyLock;

/// Safe query used when the model produced nothing usable.
const FALLBACK_SPL: &str = "search index=main earliest=-15m | head 20";

/// SPL generating commands that need no `search ` prefix.
const GENERATING_PREFIXES: &[&str] = &[
    "search ",
    "|",
    "tstats ",
    "from ",
    "mstats ",
    "metadata ",
    "inputlookup ",
    "rest ",
    "makeresults",
];

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:\w+)?\s*(.*?)```").expect("valid fence regex"));
static LABELED_QUERY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:spl|splunk)\s*query\s*:\s*").expect("valid label regex")
});
static QUERY_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^query\s*:\s*").expect("valid query prefix regex"));

/// Reduce a raw model completion to a single runnable SPL line.
pub fn normalize_spl(raw_text: &str) -> String {
    let mut text = raw_text.trim().to_string();
    if text.is_empty() {
        return FALLBACK_SPL.to_string();
    }

    // Prefer fenced block content if present.
    if let Some(captures) = FENCE_RE.captures(&text) {
        text = captures[1].trim().to_string();
    }

    let mut lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return FALLBACK_SPL.to_string();
    }

    // Remove language labels and common wrappers.
    let first = lines[0].to_lowercase();
    let first = first.trim_end_matches(':');
    if matches!(first, "spl" | "splunk" | "sql") && lines.len() > 1 {
        lines.remove(0);
    }
    let joined = lines.join("\n");
    let stripped = LABELED_QUERY_RE.replace(&joined, "");
    let stripped = QUERY_PREFIX_RE.replace(&stripped, "");
    let mut text = stripped.trim().trim_matches('`').trim().to_string();

    // Use only the first non-empty line to avoid narrative text.
    if let Some(line) = text.lines().map(str::trim).find(|line| !line.is_empty()) {
        text = line.to_string();
    }

    if text.to_lowercase().starts_with("spl ") {
        text = text[4..].trim().to_string();
    }

    // The jobs endpoint expects a generating command up front.
    let lower = text.to_lowercase();
    if !GENERATING_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        text = format!("search {}", text);
    }
    if text.starts_with('|') {
        text = format!("search * {}", text);
    }

    text
}
