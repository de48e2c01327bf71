//! Terminal output helpers.
//!
//! Responsibilities:
//! - Chunk long briefings so each block stays below the transport cap.
//! - Flatten and bound error text before it reaches the operator.

use sentinel_config::constants::{MAX_ERROR_CHARS, MAX_MESSAGE_CHARS};

/// Split text into chunks of at most `max_len` characters.
///
/// Prefers breaking at the last newline inside the limit; if that newline
/// sits in the first half of the window the chunk is hard-split at the
/// limit instead, so a wall of unbroken text still makes progress.
pub fn chunk_text(text: &str, max_len: usize) -> Vec<String> {
    let mut clean = text.trim();
    let mut chunks = Vec::new();
    while !clean.is_empty() {
        if clean.chars().count() <= max_len {
            chunks.push(clean.to_string());
            break;
        }
        // Byte offset of the max_len-th character; both candidate split
        // points below are char boundaries.
        let limit = clean
            .char_indices()
            .nth(max_len)
            .map(|(i, _)| i)
            .unwrap_or(clean.len());
        let mut split_at = clean[..limit].rfind('\n').unwrap_or(0);
        if split_at < limit / 2 {
            split_at = limit;
        }
        chunks.push(clean[..split_at].trim_end().to_string());
        clean = clean[split_at..].trim_start();
    }
    chunks
}

/// Print a briefing to stdout in bounded chunks, separated by blank lines.
pub fn print_chunks(text: &str) {
    for chunk in chunk_text(text, MAX_MESSAGE_CHARS) {
        println!("{}\n", chunk);
    }
}

/// Flatten an error chain to a single bounded line.
///
/// Newlines collapse to spaces and anything past the cap is truncated, so
/// a multi-kilobyte HTML error page cannot flood the terminal.
pub fn format_error(err: &anyhow::Error) -> String {
    let flat: String = format!("{:#}", err)
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    let flat = flat.trim();
    if flat.chars().count() > MAX_ERROR_CHARS {
        let cut: String = flat.chars().take(MAX_ERROR_CHARS).collect();
        format!("{}...(truncated)", cut)
    } else {
        flat.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_short_text_is_single_chunk() {
        assert_eq!(chunk_text("hello world", 100), vec!["hello world"]);
    }

    #[test]
    fn test_chunk_empty_text_is_empty() {
        assert!(chunk_text("", 100).is_empty());
        assert!(chunk_text("   \n  ", 100).is_empty());
    }

    #[test]
    fn test_chunk_splits_at_last_newline_in_window() {
        let text = "aaaa\nbbbb\ncccc";
        let chunks = chunk_text(text, 12);
        assert_eq!(chunks, vec!["aaaa\nbbbb", "cccc"]);
    }

    #[test]
    fn test_chunk_hard_splits_unbroken_text() {
        let text = "x".repeat(25);
        let chunks = chunk_text(&text, 10);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 10);
        assert_eq!(chunks[1].len(), 10);
        assert_eq!(chunks[2].len(), 5);
    }

    #[test]
    fn test_chunk_ignores_early_newline() {
        // The only newline sits in the first half of the window, so the
        // chunk hard-splits at the limit instead.
        let mut text = "ab\n".to_string();
        text.push_str(&"c".repeat(20));
        let chunks = chunk_text(&text, 10);
        assert_eq!(chunks[0].len(), 10);
    }

    #[test]
    fn test_chunks_respect_limit() {
        let text = "line one is here\nline two is here\nline three is here";
        for chunk in chunk_text(text, 20) {
            assert!(chunk.chars().count() <= 20);
        }
    }

    #[test]
    fn test_format_error_flattens_newlines() {
        let err = anyhow::anyhow!("first line\nsecond line");
        assert_eq!(format_error(&err), "first line second line");
    }

    #[test]
    fn test_format_error_truncates_long_messages() {
        let err = anyhow::anyhow!("{}", "e".repeat(2000));
        let formatted = format_error(&err);
        assert!(formatted.ends_with("...(truncated)"));
        assert_eq!(formatted.chars().count(), MAX_ERROR_CHARS + "...(truncated)".len());
    }
}
